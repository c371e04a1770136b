use std::sync::Arc;

use time::macros::datetime;
use yeschef_mealplan::MealPlanStore;
use yeschef_shared::{
    FixedClock, MemoryStorage,
    mealplan::{Day, MealType},
    recipe::Recipe,
};
use yeschef_shopping::{
    Balance, Category, DEFAULT_PREFERRED_STORE, GroceryList, PricingService, WeekMetrics,
};

fn chicken_bowl() -> Recipe {
    Recipe {
        id: "r1".to_owned(),
        name: "Chicken Bowl".to_owned(),
        calories: 432,
        proteins: vec!["chicken thigh".to_owned()],
        vegetables: vec!["bok choy".to_owned(), "Garlic".to_owned()],
        starches: vec!["jasmine rice".to_owned()],
        ..Default::default()
    }
}

async fn setup() -> (MealPlanStore, PricingService) {
    let clock = Arc::new(FixedClock::new(datetime!(2025-03-12 10:00:00 UTC)));
    let store = MealPlanStore::load(Arc::new(MemoryStorage::new()), clock.clone()).await;
    let pricing = PricingService::with_seed(clock, 17);

    (store, pricing)
}

#[tokio::test]
async fn test_single_meal_grocery_list() {
    let (mut store, pricing) = setup().await;
    store
        .add_meal_to_plan(Day::Monday, MealType::Lunch, chicken_bowl())
        .await;

    let plan = store.current_week_meal_plan();
    let list = GroceryList::build(&plan, &pricing, None, DEFAULT_PREFERRED_STORE).await;

    let names = list.items.iter().map(|i| i.name.as_str()).collect::<Vec<_>>();
    assert_eq!(names, ["chicken thigh", "bok choy", "Garlic", "jasmine rice"]);

    let categories = list.items.iter().map(|i| i.category).collect::<Vec<_>>();
    assert_eq!(
        categories,
        [
            Category::Protein,
            Category::Vegetable,
            Category::Vegetable,
            Category::Starch
        ]
    );
    assert!(list.items.iter().all(|i| i.price >= 0.0));
    assert!(list.items.iter().all(|i| i.store == "Jewel-Osco"));
    assert!(list.items[2].pantry_staple);
    assert!(!list.items[0].pantry_staple);
}

#[tokio::test]
async fn test_ingredients_deduplicated_across_meals() {
    let (mut store, _pricing) = setup().await;
    store
        .add_meal_to_plan(Day::Monday, MealType::Lunch, chicken_bowl())
        .await;

    let mut tacos = chicken_bowl();
    tacos.id = "r2".to_owned();
    tacos.proteins = vec!["Chicken Thigh ".to_owned()];
    tacos.starches = vec!["corn tortillas".to_owned()];
    store
        .add_meal_to_plan(Day::Tuesday, MealType::Dinner, tacos)
        .await;

    let names = GroceryList::ingredient_names(&store.current_week_meal_plan());
    assert_eq!(
        names,
        ["chicken thigh", "bok choy", "Garlic", "jasmine rice", "corn tortillas"]
    );
}

#[tokio::test]
async fn test_already_have_excluded_from_cost_and_metrics() {
    let (mut store, pricing) = setup().await;
    store
        .add_meal_to_plan(Day::Monday, MealType::Lunch, chicken_bowl())
        .await;
    store
        .add_meal_to_plan(Day::Monday, MealType::Dinner, chicken_bowl())
        .await;
    store
        .add_meal_to_plan(Day::Friday, MealType::Lunch, chicken_bowl())
        .await;

    let plan = store.current_week_meal_plan();
    let mut list = GroceryList::build(&plan, &pricing, None, DEFAULT_PREFERRED_STORE).await;
    let full_cost = list.estimated_cost();

    assert_eq!(list.toggle_already_have("Garlic"), Some(true));
    assert_eq!(list.toggle_checked("bok choy"), Some(true));
    assert_eq!(list.toggle_checked("nothing"), None);
    assert_eq!(list.already_have_count(), 1);

    let garlic = list.items[2].price;
    let remaining: f64 = list.to_buy().map(|i| i.price).sum();
    assert_eq!(list.estimated_cost(), remaining.round());
    assert!(list.estimated_cost() <= full_cost);
    assert!(garlic > 0.0);

    let groups = list.by_category();
    let order = groups.iter().map(|(c, _)| *c).collect::<Vec<_>>();
    assert_eq!(order, [Category::Protein, Category::Vegetable, Category::Starch]);
    assert_eq!(groups[1].1.len(), 1);

    let metrics = WeekMetrics::compute(&plan, &list);
    assert_eq!(metrics.total_calories, 1296);
    assert_eq!(metrics.meal_count, 3);
    assert_eq!(metrics.avg_calories_per_day, 185);
    assert_eq!(metrics.days_of_groceries, 2);
    assert_eq!(metrics.protein_count, 1);
    assert_eq!(metrics.vegetable_count, 1);
    assert_eq!(metrics.starch_count, 1);
    assert_eq!(metrics.balance, Balance::Good);
}

#[tokio::test]
async fn test_empty_week_metrics() {
    let (store, pricing) = setup().await;

    let plan = store.current_week_meal_plan();
    let list = GroceryList::build(&plan, &pricing, None, DEFAULT_PREFERRED_STORE).await;
    let metrics = WeekMetrics::compute(&plan, &list);

    assert!(list.items.is_empty());
    assert_eq!(list.estimated_cost(), 0.0);
    assert_eq!(metrics.meal_count, 0);
    assert_eq!(metrics.balance, Balance::NoMeals);
}
