use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};
use yeschef_shared::Storage;

pub const PREFERENCES_KEY: &str = "yeschef_user_preferences";

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
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum HealthGoal {
    LoseWeight,
    #[default]
    MaintainWeight,
    GainWeight,
    BuildMuscle,
}

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
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    #[default]
    Moderate,
    Active,
    VeryActive,
}

/// Answers from the onboarding quiz.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct UserPreferences {
    pub liked_proteins: Vec<String>,
    pub disliked_proteins: Vec<String>,
    pub liked_vegetables: Vec<String>,
    pub disliked_vegetables: Vec<String>,
    pub liked_starches: Vec<String>,
    pub disliked_starches: Vec<String>,
    pub cuisine_preferences: Vec<String>,
    pub dietary_restrictions: Vec<String>,
    pub health_goals: HealthGoal,
    pub current_weight: f64,
    pub goal_weight: f64,
    pub daily_calorie_target: u32,
    pub activity_level: ActivityLevel,
    pub favorite_restaurants: Vec<String>,
    pub location: String,
    pub meals_per_week: u32,
    /// Meals eaten out per week.
    pub going_out_frequency: u32,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            liked_proteins: vec![],
            disliked_proteins: vec![],
            liked_vegetables: vec![],
            disliked_vegetables: vec![],
            liked_starches: ["Rice", "Pasta", "Potatoes", "Quinoa", "Bread"]
                .map(str::to_owned)
                .to_vec(),
            disliked_starches: vec![],
            cuisine_preferences: vec![],
            dietary_restrictions: vec![],
            health_goals: HealthGoal::default(),
            current_weight: 150.0,
            goal_weight: 150.0,
            daily_calorie_target: 2000,
            activity_level: ActivityLevel::default(),
            favorite_restaurants: vec![],
            location: String::new(),
            meals_per_week: 14,
            going_out_frequency: 2,
        }
    }
}

impl UserPreferences {
    /// Configured location, `None` when blank.
    pub fn location(&self) -> Option<&str> {
        let location = self.location.trim();
        (!location.is_empty()).then_some(location)
    }
}

/// Saved preferences, `None` when the quiz was never completed or the stored
/// value cannot be read.
pub async fn load_preferences(storage: &dyn Storage) -> Option<UserPreferences> {
    yeschef_shared::load_json(storage, PREFERENCES_KEY).await
}

pub async fn save_preferences(storage: &dyn Storage, preferences: &UserPreferences) {
    yeschef_shared::save_json(storage, PREFERENCES_KEY, preferences).await;
}
