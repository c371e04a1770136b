use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

use crate::mealplan::MealType;

pub const CUSTOM_ID_PREFIX: &str = "custom-";
pub const GENERATED_ID_PREFIX: &str = "ai-";

#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

/// Cuisines accepted from the generation service.
#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
pub enum Cuisine {
    Italian,
    #[default]
    American,
    Mexican,
    Asian,
    Japanese,
    Korean,
    Thai,
    Mediterranean,
    Greek,
    French,
    Indian,
    #[strum(serialize = "Middle Eastern")]
    #[serde(rename = "Middle Eastern")]
    MiddleEastern,
}

impl Cuisine {
    /// Exact match against the supported labels, `American` otherwise.
    pub fn from_label(label: &str) -> Self {
        label.parse().unwrap_or_default()
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub prep_time: String,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub calories: u32,
    #[serde(default)]
    pub cuisine: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub instructions: Vec<String>,
    #[serde(default)]
    pub proteins: Vec<String>,
    #[serde(default)]
    pub vegetables: Vec<String>,
    #[serde(default)]
    pub starches: Vec<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_going_out: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meal_type: Option<MealType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restaurant_name: Option<String>,
}

impl Recipe {
    pub fn is_custom(&self) -> bool {
        self.id.starts_with(CUSTOM_ID_PREFIX)
    }

    pub fn normalized_name(&self) -> String {
        normalize_name(&self.name)
    }

    /// Proteins, vegetables and starches in that order.
    pub fn grocery_items(&self) -> impl Iterator<Item = &String> {
        self.proteins
            .iter()
            .chain(self.vegetables.iter())
            .chain(self.starches.iter())
    }

    pub fn apply(&mut self, update: RecipeUpdate) {
        let RecipeUpdate {
            name,
            description,
            prep_time,
            difficulty,
            calories,
            cuisine,
            image,
            ingredients,
            instructions,
            proteins,
            vegetables,
            starches,
            is_going_out,
            meal_type,
            restaurant_name,
        } = update;

        if let Some(name) = name {
            self.name = name;
        }
        if let Some(description) = description {
            self.description = description;
        }
        if let Some(prep_time) = prep_time {
            self.prep_time = prep_time;
        }
        if let Some(difficulty) = difficulty {
            self.difficulty = difficulty;
        }
        if let Some(calories) = calories {
            self.calories = calories;
        }
        if let Some(cuisine) = cuisine {
            self.cuisine = cuisine;
        }
        if image.is_some() {
            self.image = image;
        }
        if let Some(ingredients) = ingredients {
            self.ingredients = ingredients;
        }
        if let Some(instructions) = instructions {
            self.instructions = instructions;
        }
        if let Some(proteins) = proteins {
            self.proteins = proteins;
        }
        if let Some(vegetables) = vegetables {
            self.vegetables = vegetables;
        }
        if let Some(starches) = starches {
            self.starches = starches;
        }
        if let Some(is_going_out) = is_going_out {
            self.is_going_out = is_going_out;
        }
        if meal_type.is_some() {
            self.meal_type = meal_type;
        }
        if restaurant_name.is_some() {
            self.restaurant_name = restaurant_name;
        }
    }
}

/// Partial recipe; `None` fields are left untouched by [`Recipe::apply`].
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct RecipeUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub prep_time: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub calories: Option<u32>,
    pub cuisine: Option<String>,
    pub image: Option<String>,
    pub ingredients: Option<Vec<String>>,
    pub instructions: Option<Vec<String>>,
    pub proteins: Option<Vec<String>>,
    pub vegetables: Option<Vec<String>>,
    pub starches: Option<Vec<String>>,
    pub is_going_out: Option<bool>,
    pub meal_type: Option<MealType>,
    pub restaurant_name: Option<String>,
}

/// Lowercased, trimmed, inner whitespace collapsed to single spaces.
pub fn normalize_name(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
