use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Serialize;
use yeschef_shared::recipe::Recipe;

use crate::routes::AppState;

pub async fn list(State(state): State<AppState>) -> Json<Vec<Recipe>> {
    let store = state.store.lock().await;

    Json(store.rotation_recipes().to_vec())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RotationStatus {
    pub in_rotation: bool,
}

pub async fn contains(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<RotationStatus> {
    let store = state.store.lock().await;

    Json(RotationStatus {
        in_rotation: store.is_in_rotation(&id),
    })
}

/// 201 when added, 200 when the recipe was already in rotation.
pub async fn add(
    State(state): State<AppState>,
    Json(recipe): Json<Recipe>,
) -> (StatusCode, Json<Vec<Recipe>>) {
    let mut store = state.store.lock().await;
    let status = if store.add_to_rotation(recipe).await {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    (status, Json(store.rotation_recipes().to_vec()))
}

pub async fn remove(State(state): State<AppState>, Path(id): Path<String>) -> StatusCode {
    state.store.lock().await.remove_from_rotation(&id).await;

    StatusCode::NO_CONTENT
}
