use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use yeschef_mealplan::{MealPlanStore, WeeklyMealPlan};
use yeschef_shared::{
    mealplan::MealSource,
    recipe::{Recipe, RecipeUpdate},
};

use crate::{
    error::AppError,
    routes::{AppState, parse_slot},
};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanView {
    pub offset: i32,
    pub week_key: String,
    pub locked: bool,
    pub plan: WeeklyMealPlan,
}

impl From<&MealPlanStore> for PlanView {
    fn from(store: &MealPlanStore) -> Self {
        Self {
            offset: store.current_week_offset(),
            week_key: store.current_week_key(),
            locked: store.is_week_locked(),
            plan: store.current_week_meal_plan(),
        }
    }
}

pub(crate) fn ensure_unlocked(store: &MealPlanStore) -> Result<(), AppError> {
    if store.is_week_locked() {
        return Err(AppError::WeekLocked);
    }

    Ok(())
}

pub async fn current(State(state): State<AppState>) -> Json<PlanView> {
    let store = state.store.lock().await;

    Json(PlanView::from(&*store))
}

#[derive(Deserialize)]
pub struct OffsetInput {
    pub offset: i32,
}

pub async fn set_offset(
    State(state): State<AppState>,
    Json(input): Json<OffsetInput>,
) -> Json<PlanView> {
    let mut store = state.store.lock().await;
    store.set_current_week_offset(input.offset);

    Json(PlanView::from(&*store))
}

pub async fn clear_week(State(state): State<AppState>) -> Result<Json<PlanView>, AppError> {
    let mut store = state.store.lock().await;
    ensure_unlocked(&store)?;
    store.clear_current_week_meal_plan().await;

    Ok(Json(PlanView::from(&*store)))
}

pub async fn clear_all(State(state): State<AppState>) -> Json<PlanView> {
    let mut store = state.store.lock().await;
    store.clear_meal_plan().await;
    tracing::info!("all meal plans cleared");

    Json(PlanView::from(&*store))
}

pub async fn lock(State(state): State<AppState>) -> Json<PlanView> {
    let mut store = state.store.lock().await;
    store.lock_week();

    Json(PlanView::from(&*store))
}

pub async fn unlock(State(state): State<AppState>) -> Json<PlanView> {
    let mut store = state.store.lock().await;
    store.unlock_week();

    Json(PlanView::from(&*store))
}

pub async fn add_meal(
    State(state): State<AppState>,
    Path((day, meal)): Path<(String, String)>,
    Json(recipe): Json<Recipe>,
) -> Result<Json<PlanView>, AppError> {
    let (day, meal_type) = parse_slot(&day, &meal)?;

    let mut store = state.store.lock().await;
    ensure_unlocked(&store)?;
    store.add_meal_to_plan(day, meal_type, recipe).await;

    Ok(Json(PlanView::from(&*store)))
}

pub async fn remove_meal(
    State(state): State<AppState>,
    Path((day, meal)): Path<(String, String)>,
) -> Result<StatusCode, AppError> {
    let (day, meal_type) = parse_slot(&day, &meal)?;

    let mut store = state.store.lock().await;
    ensure_unlocked(&store)?;
    store.remove_meal_from_plan(day, meal_type).await;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn update_meal(
    State(state): State<AppState>,
    Path((day, meal)): Path<(String, String)>,
    Json(update): Json<RecipeUpdate>,
) -> Result<Json<PlanView>, AppError> {
    let (day, meal_type) = parse_slot(&day, &meal)?;

    let mut store = state.store.lock().await;
    ensure_unlocked(&store)?;
    if !store.update_meal_in_plan(day, meal_type, update).await {
        return Err(AppError::NotFound(format!("No {meal_type} planned on {day}")));
    }

    Ok(Json(PlanView::from(&*store)))
}

#[derive(Deserialize)]
pub struct MoveInput {
    pub from: MealSource,
    pub to: MealSource,
}

pub async fn move_meal(
    State(state): State<AppState>,
    Json(MoveInput { from, to }): Json<MoveInput>,
) -> Result<Json<PlanView>, AppError> {
    let mut store = state.store.lock().await;
    ensure_unlocked(&store)?;
    if !store
        .move_meal_in_plan(from.day, from.meal_type, to.day, to.meal_type)
        .await
    {
        return Err(AppError::NotFound(format!(
            "No {} planned on {}",
            from.meal_type, from.day
        )));
    }

    Ok(Json(PlanView::from(&*store)))
}

#[derive(Deserialize)]
pub struct RestaurantInput {
    #[serde(default)]
    pub name: String,
}

pub async fn rename_restaurant(
    State(state): State<AppState>,
    Path((day, meal)): Path<(String, String)>,
    Json(input): Json<RestaurantInput>,
) -> Result<Json<PlanView>, AppError> {
    let (day, meal_type) = parse_slot(&day, &meal)?;

    let mut store = state.store.lock().await;
    ensure_unlocked(&store)?;
    if !store.rename_going_out(day, meal_type, &input.name).await {
        return Err(AppError::NotFound(format!(
            "No going-out {meal_type} planned on {day}"
        )));
    }

    Ok(Json(PlanView::from(&*store)))
}
