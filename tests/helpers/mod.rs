#![allow(dead_code)]

use std::sync::{
    Arc, Mutex as StdMutex,
    atomic::{AtomicBool, Ordering},
};

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::Value;
use time::macros::datetime;
use tokio::sync::Mutex;
use tower::ServiceExt;
use yeschef::{
    AppState,
    config::{Config, DatabaseConfig, ObservabilityConfig, PricingConfig, ServerConfig},
};
use yeschef_mealplan::MealPlanStore;
use yeschef_recipe::{RecipeGenerator, UserPreferences};
use yeschef_shared::{Error, FixedClock, MemoryStorage, Result, recipe::Recipe};
use yeschef_shopping::PricingService;

/// Canned generator recording whether preferences were passed.
#[derive(Default)]
pub struct FakeGenerator {
    pub recipes: StdMutex<Vec<Recipe>>,
    pub fail: AtomicBool,
    pub seen_preferences: StdMutex<Vec<Option<UserPreferences>>>,
}

#[async_trait::async_trait]
impl RecipeGenerator for FakeGenerator {
    async fn generate_recipes(
        &self,
        preferences: Option<&UserPreferences>,
        count: u32,
    ) -> Result<Vec<Recipe>> {
        self.seen_preferences
            .lock()
            .unwrap()
            .push(preferences.cloned());

        if self.fail.load(Ordering::SeqCst) {
            return Err(Error::Generation("service unavailable".to_owned()));
        }

        let recipes = self.recipes.lock().unwrap().clone();
        Ok(recipes.into_iter().take(count as usize).collect())
    }

    async fn autofill_recipe(&self, title: &str) -> Result<Recipe> {
        Ok(Recipe {
            name: title.to_owned(),
            description: "Autofilled".to_owned(),
            ..Default::default()
        })
    }

    async fn generate_steps(&self, recipe: &Recipe) -> Result<Vec<String>> {
        Ok(vec![format!("Cook {}.", recipe.name), "Serve.".to_owned()])
    }
}

pub struct TestState {
    pub app: Router,
    pub store: Arc<Mutex<MealPlanStore>>,
    pub storage: MemoryStorage,
    pub generator: Arc<FakeGenerator>,
}

pub fn config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_owned(),
            port: 3000,
        },
        database: DatabaseConfig {
            url: "sqlite::memory:".to_owned(),
            max_connections: 1,
        },
        llm: Default::default(),
        pricing: PricingConfig::default(),
        observability: ObservabilityConfig::default(),
    }
}

/// App at 2025-01-22 09:00 UTC (a Wednesday) backed by in-memory storage.
pub async fn setup_test_state() -> anyhow::Result<TestState> {
    let storage = MemoryStorage::new();
    let clock = Arc::new(FixedClock::new(datetime!(2025-01-22 09:00 UTC)));
    let store = Arc::new(Mutex::new(
        MealPlanStore::load(Arc::new(storage.clone()), clock.clone()).await,
    ));
    let generator = Arc::new(FakeGenerator::default());
    let pool = yeschef_db::connect("sqlite::memory:", 1).await?;

    let state = AppState {
        config: config(),
        store: store.clone(),
        pricing: Arc::new(PricingService::with_seed(clock.clone(), 42)),
        generator: generator.clone(),
        storage: Arc::new(storage.clone()),
        clock,
        pool,
    };

    Ok(TestState {
        app: yeschef::router(state),
        store,
        storage,
        generator,
    })
}

pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, value)
}

pub fn recipe(id: &str, name: &str) -> Recipe {
    Recipe {
        id: id.to_owned(),
        name: name.to_owned(),
        ..Default::default()
    }
}
