use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use yeschef_shared::recipe::{Recipe, RecipeUpdate};

use crate::{error::AppError, routes::AppState};

pub async fn list(State(state): State<AppState>) -> Json<Vec<Recipe>> {
    let store = state.store.lock().await;

    Json(store.custom_recipes().to_vec())
}

pub async fn add(
    State(state): State<AppState>,
    Json(recipe): Json<Recipe>,
) -> Result<(StatusCode, Json<Recipe>), AppError> {
    if recipe.name.trim().is_empty() {
        return Err(AppError::BadRequest("Recipe name is required".to_owned()));
    }

    let recipe = state.store.lock().await.add_custom_recipe(recipe).await;
    tracing::info!(id = %recipe.id, "custom recipe saved");

    Ok((StatusCode::CREATED, Json(recipe)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(update): Json<RecipeUpdate>,
) -> Result<Json<Recipe>, AppError> {
    state
        .store
        .lock()
        .await
        .update_custom_recipe(&id, update)
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("No custom recipe {id}")))
}

pub async fn remove(State(state): State<AppState>, Path(id): Path<String>) -> StatusCode {
    state.store.lock().await.remove_custom_recipe(&id).await;

    StatusCode::NO_CONTENT
}
