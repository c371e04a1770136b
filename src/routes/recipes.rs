use axum::{Json, body::Bytes, extract::State};
use serde::{Deserialize, Serialize};
use yeschef_mealplan::{going_out_templates, merge_available_recipes};
use yeschef_recipe::{DEFAULT_RECIPE_COUNT, load_preferences};
use yeschef_shared::{Clock, recipe::Recipe};

use crate::{error::AppError, routes::AppState};

pub async fn available(State(state): State<AppState>) -> Json<Vec<Recipe>> {
    let store = state.store.lock().await;

    Json(store.available_recipes().to_vec())
}

pub async fn set_available(
    State(state): State<AppState>,
    Json(recipes): Json<Vec<Recipe>>,
) -> Json<Vec<Recipe>> {
    let mut store = state.store.lock().await;
    store.set_available_recipes(recipes);

    Json(store.available_recipes().to_vec())
}

#[derive(Deserialize, Default)]
pub struct GenerateInput {
    pub count: Option<u32>,
}

/// Asks the generator for new meal ideas and rebuilds the candidate list.
///
/// The store lock is released while the generator runs. A failure leaves the
/// available recipes untouched.
#[tracing::instrument(skip_all)]
pub async fn generate(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Vec<Recipe>>, AppError> {
    let input = if body.is_empty() {
        GenerateInput::default()
    } else {
        serde_json::from_slice::<GenerateInput>(&body)
            .map_err(|e| AppError::BadRequest(format!("Invalid request body: {e}")))?
    };
    let count = input
        .count
        .filter(|count| *count > 0)
        .unwrap_or(DEFAULT_RECIPE_COUNT);

    state.store.lock().await.set_is_generating(true);

    let preferences = load_preferences(state.storage.as_ref()).await;
    let generated = state
        .generator
        .generate_recipes(preferences.as_ref(), count)
        .await;

    let mut store = state.store.lock().await;
    store.set_is_generating(false);
    let generated = generated?;

    let merged = {
        let mut rng = rand::rng();
        merge_available_recipes(
            going_out_templates(),
            store.custom_recipes(),
            store.rotation_recipes(),
            generated,
            state.clock.unix_millis(),
            &mut rng,
        )
    };

    tracing::info!(available = merged.len(), "available recipes refreshed");
    store.set_available_recipes(merged);

    Ok(Json(store.available_recipes().to_vec()))
}

#[derive(Deserialize)]
pub struct AutofillInput {
    #[serde(default)]
    pub title: String,
}

pub async fn autofill(
    State(state): State<AppState>,
    Json(input): Json<AutofillInput>,
) -> Result<Json<Recipe>, AppError> {
    if input.title.trim().is_empty() {
        return Err(AppError::BadRequest("Recipe title is required".to_owned()));
    }

    let recipe = state.generator.autofill_recipe(&input.title).await?;

    Ok(Json(recipe))
}

#[derive(Deserialize)]
pub struct StepsInput {
    pub recipe: Option<Recipe>,
}

#[derive(Serialize)]
pub struct StepsOutput {
    pub steps: Vec<String>,
}

pub async fn steps(
    State(state): State<AppState>,
    Json(input): Json<StepsInput>,
) -> Result<Json<StepsOutput>, AppError> {
    let Some(recipe) = input.recipe else {
        return Err(AppError::BadRequest("Recipe is required".to_owned()));
    };

    let steps = state.generator.generate_steps(&recipe).await?;

    Ok(Json(StepsOutput { steps }))
}
