use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};
use yeschef_recipe::load_preferences;
use yeschef_shopping::{
    Category, CostEstimate, GroceryItem, GroceryList, LivePrice, WeekMetrics,
};

use crate::{error::AppError, routes::AppState};

#[derive(Serialize)]
pub struct CategoryGroup {
    pub category: Category,
    pub items: Vec<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroceryView {
    pub week_key: String,
    pub location: Option<String>,
    pub store: String,
    pub items: Vec<GroceryItem>,
    pub categories: Vec<CategoryGroup>,
    pub estimated_cost: f64,
    pub metrics: WeekMetrics,
}

/// The user's location when set, else the configured one.
async fn pricing_location(state: &AppState) -> Option<String> {
    load_preferences(state.storage.as_ref())
        .await
        .and_then(|preferences| preferences.location().map(str::to_owned))
        .or_else(|| state.config.pricing_location().map(str::to_owned))
}

/// Grocery list and metrics of the current week, priced at the preferred store.
pub async fn list(State(state): State<AppState>) -> Json<GroceryView> {
    let (week_key, plan) = {
        let store = state.store.lock().await;
        (store.current_week_key(), store.current_week_meal_plan())
    };

    let location = pricing_location(&state).await;
    let preferred_store = &state.config.pricing.preferred_store;

    let list = GroceryList::build(&plan, &state.pricing, location.as_deref(), preferred_store).await;
    let metrics = WeekMetrics::compute(&plan, &list);
    let categories = list
        .by_category()
        .into_iter()
        .map(|(category, items)| CategoryGroup {
            category,
            items: items.into_iter().map(|item| item.name.clone()).collect(),
        })
        .collect();

    Json(GroceryView {
        week_key,
        location,
        store: preferred_store.to_owned(),
        estimated_cost: list.estimated_cost(),
        categories,
        metrics,
        items: list.items,
    })
}

#[derive(Deserialize)]
pub struct PriceQuery {
    pub location: Option<String>,
    pub store: Option<String>,
}

pub async fn price(
    State(state): State<AppState>,
    Path(item): Path<String>,
    Query(query): Query<PriceQuery>,
) -> Result<Json<LivePrice>, AppError> {
    if item.trim().is_empty() {
        return Err(AppError::BadRequest("Item is required".to_owned()));
    }

    let location = match query.location {
        Some(location) => Some(location),
        None => pricing_location(&state).await,
    };

    let price = state
        .pricing
        .live_price(&item, location.as_deref(), query.store.as_deref())
        .await;

    Ok(Json(price))
}

pub async fn compare(
    State(state): State<AppState>,
    Path(item): Path<String>,
    Query(query): Query<PriceQuery>,
) -> Json<Vec<LivePrice>> {
    let location = match query.location {
        Some(location) => Some(location),
        None => pricing_location(&state).await,
    };

    Json(
        state
            .pricing
            .price_comparison(&item, location.as_deref())
            .await,
    )
}

#[derive(Deserialize)]
pub struct EstimateInput {
    pub items: Vec<String>,
    #[serde(default)]
    pub location: Option<String>,
}

pub async fn estimate(
    State(state): State<AppState>,
    Json(input): Json<EstimateInput>,
) -> Json<CostEstimate> {
    let location = match input.location {
        Some(location) => Some(location),
        None => pricing_location(&state).await,
    };

    Json(
        state
            .pricing
            .estimate_grocery_cost(&input.items, location.as_deref())
            .await,
    )
}
