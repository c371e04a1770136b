use std::sync::Arc;

use time::macros::datetime;
use yeschef_mealplan::MealPlanStore;
use yeschef_shared::{FixedClock, MemoryStorage, recipe::Recipe};

#[allow(dead_code)]
pub struct TestState {
    pub store: MealPlanStore,
    pub storage: MemoryStorage,
    pub clock: Arc<FixedClock>,
}

#[allow(dead_code)]
pub async fn setup_test_state() -> TestState {
    setup_with_storage(MemoryStorage::new()).await
}

#[allow(dead_code)]
pub async fn setup_with_storage(storage: MemoryStorage) -> TestState {
    let clock = Arc::new(FixedClock::new(datetime!(2025-01-22 09:00:00 UTC)));
    let store = MealPlanStore::load(Arc::new(storage.clone()), clock.clone()).await;

    TestState {
        store,
        storage,
        clock,
    }
}

#[allow(dead_code)]
pub fn recipe(id: &str, name: &str) -> Recipe {
    Recipe {
        id: id.to_owned(),
        name: name.to_owned(),
        description: format!("{name} description"),
        prep_time: "25 min".to_owned(),
        calories: 432,
        cuisine: "Korean".to_owned(),
        proteins: vec!["chicken thigh".to_owned()],
        vegetables: vec!["bok choy".to_owned()],
        starches: vec!["jasmine rice".to_owned()],
        ..Default::default()
    }
}
