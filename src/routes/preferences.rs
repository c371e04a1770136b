use axum::{Json, extract::State};
use yeschef_recipe::{UserPreferences, load_preferences, save_preferences};

use crate::routes::AppState;

/// `null` until the onboarding answers are saved.
pub async fn page(State(state): State<AppState>) -> Json<Option<UserPreferences>> {
    Json(load_preferences(state.storage.as_ref()).await)
}

pub async fn action(
    State(state): State<AppState>,
    Json(preferences): Json<UserPreferences>,
) -> Json<UserPreferences> {
    save_preferences(state.storage.as_ref(), &preferences).await;
    tracing::info!("user preferences saved");

    Json(preferences)
}
