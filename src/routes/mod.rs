use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post, put},
};
use sqlx::SqlitePool;
use tokio::sync::Mutex;
use tower_http::trace::TraceLayer;
use yeschef_mealplan::MealPlanStore;
use yeschef_recipe::RecipeGenerator;
use yeschef_shared::{
    Clock, Storage,
    mealplan::{Day, MealType},
};
use yeschef_shopping::PricingService;

use crate::error::AppError;

mod custom;
mod drag;
mod grocery;
mod health;
mod mealplan;
mod preferences;
mod recipes;
mod rotation;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub store: Arc<Mutex<MealPlanStore>>,
    pub pricing: Arc<PricingService>,
    pub generator: Arc<dyn RecipeGenerator>,
    pub storage: Arc<dyn Storage>,
    pub clock: Arc<dyn Clock>,
    pub pool: SqlitePool,
}

/// Parses `{day}/{meal}` path segments, case-insensitively.
pub(crate) fn parse_slot(day: &str, meal: &str) -> Result<(Day, MealType), AppError> {
    let day = day
        .parse::<Day>()
        .map_err(|_| AppError::BadRequest(format!("Unknown day: {day}")))?;
    let meal_type = meal
        .parse::<MealType>()
        .map_err(|_| AppError::BadRequest(format!("Unknown meal type: {meal}")))?;

    Ok((day, meal_type))
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .with_state(app_state.pool.clone())
        .route(
            "/api/recipes/available",
            get(recipes::available).put(recipes::set_available),
        )
        .route("/api/recipes/generate", post(recipes::generate))
        .route("/api/recipes/autofill", post(recipes::autofill))
        .route("/api/recipes/steps", post(recipes::steps))
        .route(
            "/api/preferences",
            get(preferences::page).put(preferences::action),
        )
        .route(
            "/api/plan",
            get(mealplan::current).delete(mealplan::clear_week),
        )
        .route("/api/plan/all", axum::routing::delete(mealplan::clear_all))
        .route("/api/plan/offset", put(mealplan::set_offset))
        .route("/api/plan/lock", post(mealplan::lock))
        .route("/api/plan/unlock", post(mealplan::unlock))
        .route("/api/plan/move", post(mealplan::move_meal))
        .route(
            "/api/plan/{day}/{meal}",
            put(mealplan::add_meal)
                .delete(mealplan::remove_meal)
                .patch(mealplan::update_meal),
        )
        .route(
            "/api/plan/{day}/{meal}/restaurant",
            put(mealplan::rename_restaurant),
        )
        .route("/api/drag", get(drag::current).put(drag::set))
        .route("/api/drag/drop", post(drag::drop_on_slot))
        .route("/api/drag/{day}/{meal}", post(drag::pick_up))
        .route("/api/rotation", get(rotation::list).post(rotation::add))
        .route(
            "/api/rotation/{id}",
            get(rotation::contains).delete(rotation::remove),
        )
        .route("/api/custom", get(custom::list).post(custom::add))
        .route(
            "/api/custom/{id}",
            axum::routing::patch(custom::update).delete(custom::remove),
        )
        .route("/api/grocery", get(grocery::list))
        .route("/api/prices/estimate", post(grocery::estimate))
        .route("/api/prices/{item}", get(grocery::price))
        .route("/api/prices/{item}/compare", get(grocery::compare))
        .with_state(app_state)
        .layer(TraceLayer::new_for_http())
}
