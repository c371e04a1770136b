use std::sync::Arc;

use anyhow::Result;
use yeschef_shared::SystemClock;
use yeschef_shopping::PricingService;

fn pricing() -> PricingService {
    PricingService::new(Arc::new(SystemClock))
}

/// Prints a cost estimate for `items` as JSON.
#[tracing::instrument(skip(config))]
pub async fn prices(
    config: crate::config::Config,
    items: Vec<String>,
    location: Option<String>,
    store: Option<String>,
) -> Result<()> {
    let location = location.or_else(|| config.pricing_location().map(str::to_owned));
    let pricing = pricing();

    match store {
        Some(store) => {
            let prices = pricing
                .bulk_prices(&items, location.as_deref(), Some(&store))
                .await;
            println!("{}", serde_json::to_string_pretty(&prices)?);
        }
        None => {
            let estimate = pricing
                .estimate_grocery_cost(&items, location.as_deref())
                .await;
            println!("{}", serde_json::to_string_pretty(&estimate)?);
        }
    }

    Ok(())
}

/// Prints one price per store chain, cheapest first.
#[tracing::instrument(skip(config))]
pub async fn compare(
    config: crate::config::Config,
    item: String,
    location: Option<String>,
) -> Result<()> {
    let location = location.or_else(|| config.pricing_location().map(str::to_owned));
    let prices = pricing().price_comparison(&item, location.as_deref()).await;

    for price in &prices {
        println!(
            "{:<14} ${:>6.2} / {:<6} {}",
            price.store, price.price, price.unit, price.trend
        );
    }

    Ok(())
}
