use async_trait::async_trait;
use yeschef_shared::{Result, recipe::Recipe};

use crate::UserPreferences;

/// Recipes requested per generation round unless the caller asks otherwise.
pub const DEFAULT_RECIPE_COUNT: u32 = 14;

#[async_trait]
pub trait RecipeGenerator: Send + Sync {
    /// New meal ideas tailored to `preferences` when present.
    async fn generate_recipes(
        &self,
        preferences: Option<&UserPreferences>,
        count: u32,
    ) -> Result<Vec<Recipe>>;

    /// Complete recipe details for a dish title.
    async fn autofill_recipe(&self, title: &str) -> Result<Recipe>;

    async fn generate_steps(&self, recipe: &Recipe) -> Result<Vec<String>>;
}
