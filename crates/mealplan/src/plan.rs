use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum::VariantArray;
use yeschef_shared::{
    mealplan::{Day, MealType},
    recipe::Recipe,
};

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct DayMeals {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lunch: Option<Recipe>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dinner: Option<Recipe>,
}

impl DayMeals {
    pub fn get(&self, meal_type: MealType) -> Option<&Recipe> {
        match meal_type {
            MealType::Lunch => self.lunch.as_ref(),
            MealType::Dinner => self.dinner.as_ref(),
        }
    }

    pub fn slot_mut(&mut self, meal_type: MealType) -> &mut Option<Recipe> {
        match meal_type {
            MealType::Lunch => &mut self.lunch,
            MealType::Dinner => &mut self.dinner,
        }
    }
}

/// One week of lunch/dinner slots keyed by day. A missing day reads as empty.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(transparent)]
pub struct WeeklyMealPlan(BTreeMap<Day, DayMeals>);

impl Default for WeeklyMealPlan {
    fn default() -> Self {
        Self::empty()
    }
}

impl WeeklyMealPlan {
    pub fn empty() -> Self {
        Self(
            Day::VARIANTS
                .iter()
                .map(|day| (*day, DayMeals::default()))
                .collect(),
        )
    }

    pub fn meal(&self, day: Day, meal_type: MealType) -> Option<&Recipe> {
        self.0.get(&day).and_then(|meals| meals.get(meal_type))
    }

    pub(crate) fn slot_mut(&mut self, day: Day, meal_type: MealType) -> &mut Option<Recipe> {
        self.0.entry(day).or_default().slot_mut(meal_type)
    }

    pub fn day(&self, day: Day) -> DayMeals {
        self.0.get(&day).cloned().unwrap_or_default()
    }

    /// Planned meals in calendar order, lunch before dinner.
    pub fn meals(&self) -> impl Iterator<Item = (Day, MealType, &Recipe)> {
        Day::VARIANTS.iter().flat_map(move |day| {
            MealType::VARIANTS
                .iter()
                .filter_map(move |meal_type| {
                    self.meal(*day, *meal_type)
                        .map(|recipe| (*day, *meal_type, recipe))
                })
        })
    }

    pub fn is_empty(&self) -> bool {
        self.meals().next().is_none()
    }
}

/// Week key to plan.
pub type MultiWeekMealPlan = BTreeMap<String, WeeklyMealPlan>;
