use std::collections::HashSet;

use serde::Serialize;
use strum::VariantArray;
use yeschef_mealplan::WeeklyMealPlan;

use crate::{Category, PricingService, Trend, item_category};

/// Store used for grocery list prices unless configured otherwise.
pub const DEFAULT_PREFERRED_STORE: &str = "Jewel-Osco";

const PANTRY_STAPLES: &[&str] = &[
    "salt",
    "pepper",
    "olive oil",
    "vegetable oil",
    "garlic",
    "onion",
    "butter",
    "flour",
    "sugar",
    "paprika",
    "cumin",
    "oregano",
    "basil",
    "thyme",
    "rosemary",
    "parsley",
    "bay leaves",
    "cinnamon",
    "vanilla",
    "baking powder",
    "baking soda",
    "vinegar",
    "soy sauce",
    "honey",
    "lemon juice",
    "lime juice",
    "hot sauce",
    "mustard",
    "ketchup",
    "mayonnaise",
    "worcestershire sauce",
    "sesame oil",
    "ginger",
    "turmeric",
    "chili powder",
    "red pepper flakes",
    "black pepper",
    "garlic powder",
    "onion powder",
    "italian seasoning",
    "dill",
    "cilantro",
    "scallions",
    "green onions",
];

/// Whether the name contains a common pantry staple, e.g. `red onion`.
pub fn is_pantry_staple(name: &str) -> bool {
    let name = name.to_lowercase();
    PANTRY_STAPLES.iter().any(|staple| name.contains(staple))
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroceryItem {
    pub name: String,
    pub category: Category,
    pub checked: bool,
    pub already_have: bool,
    pub pantry_staple: bool,
    pub price: f64,
    pub unit: String,
    pub store: String,
    pub trend: Trend,
}

/// Shopping list of one week.
///
/// Checked and already-have flags belong to whoever holds the list. The
/// `/api/grocery` view rebuilds it per request, so every flag starts cleared.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct GroceryList {
    pub items: Vec<GroceryItem>,
}

impl GroceryList {
    /// Proteins, vegetables and starches of every planned meal, deduplicated
    /// case-insensitively. The first spelling seen wins.
    pub fn ingredient_names(plan: &WeeklyMealPlan) -> Vec<String> {
        let mut seen = HashSet::new();

        plan.meals()
            .flat_map(|(_, _, recipe)| recipe.grocery_items())
            .filter(|item| seen.insert(item.trim().to_lowercase()))
            .cloned()
            .collect()
    }

    pub async fn build(
        plan: &WeeklyMealPlan,
        pricing: &PricingService,
        location: Option<&str>,
        preferred_store: &str,
    ) -> Self {
        let names = Self::ingredient_names(plan);
        let prices = pricing
            .bulk_prices(&names, location, Some(preferred_store))
            .await;

        let items = names
            .into_iter()
            .zip(prices)
            .map(|(name, price)| GroceryItem {
                category: item_category(&name),
                checked: false,
                already_have: false,
                pantry_staple: is_pantry_staple(&name),
                price: price.price,
                unit: price.unit,
                store: price.store,
                trend: price.trend,
                name,
            })
            .collect();

        Self { items }
    }

    fn find_mut(&mut self, name: &str) -> Option<&mut GroceryItem> {
        self.items.iter_mut().find(|item| item.name == name)
    }

    /// Flips the checked flag. Returns the new value, `None` for unknown items.
    pub fn toggle_checked(&mut self, name: &str) -> Option<bool> {
        let item = self.find_mut(name)?;
        item.checked = !item.checked;

        Some(item.checked)
    }

    pub fn toggle_already_have(&mut self, name: &str) -> Option<bool> {
        let item = self.find_mut(name)?;
        item.already_have = !item.already_have;

        Some(item.already_have)
    }

    /// Items still to buy.
    pub fn to_buy(&self) -> impl Iterator<Item = &GroceryItem> {
        self.items.iter().filter(|item| !item.already_have)
    }

    pub fn already_have_count(&self) -> usize {
        self.items.iter().filter(|item| item.already_have).count()
    }

    /// Cost of the items still to buy, rounded to whole units.
    pub fn estimated_cost(&self) -> f64 {
        self.to_buy().map(|item| item.price).sum::<f64>().round()
    }

    /// Items still to buy grouped by category, in protein, vegetable, starch,
    /// other order. Empty groups are skipped.
    pub fn by_category(&self) -> Vec<(Category, Vec<&GroceryItem>)> {
        Category::VARIANTS
            .iter()
            .map(|category| {
                let items = self
                    .to_buy()
                    .filter(|item| item.category == *category)
                    .collect::<Vec<_>>();

                (*category, items)
            })
            .filter(|(_, items)| !items.is_empty())
            .collect()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Balance {
    #[serde(rename = "No meals")]
    NoMeals,
    Great,
    Good,
    #[serde(rename = "Needs veggies")]
    NeedsVeggies,
}

impl Balance {
    pub fn score(protein: usize, vegetable: usize, starch: usize) -> Self {
        let total = protein + vegetable + starch;
        if total == 0 {
            return Balance::NoMeals;
        }

        let protein_ratio = protein as f64 / total as f64;
        let vegetable_ratio = vegetable as f64 / total as f64;

        if vegetable_ratio > 0.4 && protein_ratio > 0.2 {
            Balance::Great
        } else if vegetable_ratio > 0.3 && protein_ratio > 0.15 {
            Balance::Good
        } else {
            Balance::NeedsVeggies
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekMetrics {
    pub total_calories: u32,
    pub meal_count: u32,
    pub avg_calories_per_day: u32,
    pub days_of_groceries: u32,
    pub protein_count: usize,
    pub vegetable_count: usize,
    pub starch_count: usize,
    pub balance: Balance,
}

impl WeekMetrics {
    pub fn compute(plan: &WeeklyMealPlan, list: &GroceryList) -> Self {
        let (total_calories, meal_count) = plan
            .meals()
            .fold((0u32, 0u32), |(calories, count), (_, _, recipe)| {
                (calories.saturating_add(recipe.calories), count + 1)
            });

        let count = |category: Category| {
            list.to_buy()
                .filter(|item| item.category == category)
                .count()
        };
        let protein_count = count(Category::Protein);
        let vegetable_count = count(Category::Vegetable);
        let starch_count = count(Category::Starch);

        Self {
            total_calories,
            meal_count,
            avg_calories_per_day: (f64::from(total_calories) / 7.0).round() as u32,
            days_of_groceries: meal_count.div_ceil(2),
            protein_count,
            vegetable_count,
            starch_count,
            balance: Balance::score(protein_count, vegetable_count, starch_count),
        }
    }
}
