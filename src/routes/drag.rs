use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};
use yeschef_mealplan::MealPlanStore;
use yeschef_shared::{
    mealplan::{Day, MealSource, MealType},
    recipe::Recipe,
};

use crate::{
    error::AppError,
    routes::{AppState, mealplan::ensure_unlocked, parse_slot},
};

#[derive(Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DragState {
    #[serde(default)]
    pub recipe: Option<Recipe>,
    #[serde(default)]
    pub source: Option<MealSource>,
}

impl From<&MealPlanStore> for DragState {
    fn from(store: &MealPlanStore) -> Self {
        Self {
            recipe: store.dragged_recipe().cloned(),
            source: store.dragged_meal_source(),
        }
    }
}

pub async fn current(State(state): State<AppState>) -> Json<DragState> {
    let store = state.store.lock().await;

    Json(DragState::from(&*store))
}

/// Replaces both drag fields. Sending `{}` cancels a drag.
pub async fn set(State(state): State<AppState>, Json(input): Json<DragState>) -> Json<DragState> {
    let mut store = state.store.lock().await;
    store.set_dragged_recipe(input.recipe);
    store.set_dragged_meal_source(input.source);

    Json(DragState::from(&*store))
}

pub async fn pick_up(
    State(state): State<AppState>,
    Path((day, meal)): Path<(String, String)>,
) -> Result<Json<DragState>, AppError> {
    let (day, meal_type) = parse_slot(&day, &meal)?;

    let mut store = state.store.lock().await;
    ensure_unlocked(&store)?;
    if !store.start_dragging_placed_meal(day, meal_type) {
        return Err(AppError::NotFound(format!("No {meal_type} planned on {day}")));
    }

    Ok(Json(DragState::from(&*store)))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DropInput {
    pub day: Day,
    pub meal_type: MealType,
}

#[derive(Serialize)]
pub struct DropOutput {
    pub placed: bool,
}

pub async fn drop_on_slot(
    State(state): State<AppState>,
    Json(input): Json<DropInput>,
) -> Result<Json<DropOutput>, AppError> {
    let mut store = state.store.lock().await;
    ensure_unlocked(&store)?;
    let placed = store.drop_on_slot(input.day, input.meal_type).await;

    Ok(Json(DropOutput { placed }))
}
