use std::sync::Arc;

use anyhow::Result;
use tokio::sync::Mutex;
use yeschef_db::SqliteStorage;
use yeschef_mealplan::MealPlanStore;
use yeschef_recipe::OpenAiGenerator;
use yeschef_shared::{Clock, Storage, SystemClock};
use yeschef_shopping::PricingService;

use crate::routes::AppState;

#[tracing::instrument(skip(config))]
pub async fn serve(
    config: crate::config::Config,
    host_override: Option<String>,
    port_override: Option<u16>,
) -> Result<()> {
    tracing::info!("Starting yeschef server...");

    let host = host_override.unwrap_or(config.server.host.to_owned());
    let port = port_override.unwrap_or(config.server.port);

    let pool = yeschef_db::connect(&config.database.url, config.database.max_connections).await?;
    yeschef_db::migrate(&pool).await?;

    let storage: Arc<dyn Storage> = Arc::new(SqliteStorage::new(pool.clone()));
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let store = MealPlanStore::load(storage.clone(), clock.clone()).await;
    tracing::info!(
        weeks = store.meal_plans().len(),
        rotation = store.rotation_recipes().len(),
        custom = store.custom_recipes().len(),
        "meal plan store loaded"
    );

    let pricing = Arc::new(PricingService::new(clock.clone()));
    let mut price_scheduler = yeschef_shopping::scheduler(
        pricing.clone(),
        yeschef_shopping::CACHE_REFRESH_INTERVAL,
    )
    .await?;
    price_scheduler.start().await?;

    let generator = Arc::new(OpenAiGenerator::new(config.llm.clone())?);

    let state = AppState {
        config,
        store: Arc::new(Mutex::new(store)),
        pricing,
        generator,
        storage,
        clock,
        pool: pool.clone(),
    };

    let app = crate::routes::router(state);

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Err(e) = price_scheduler.shutdown().await {
        tracing::error!("{e}");
    }

    tracing::info!("Closing database pool...");
    pool.close().await;

    tracing::info!("Graceful shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for Ctrl+C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal");
        },
    }

    tracing::info!("Starting graceful shutdown...");
}
