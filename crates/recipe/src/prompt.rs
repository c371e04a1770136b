use strum::VariantArray;
use yeschef_shared::recipe::{Cuisine, Recipe};

use crate::UserPreferences;

pub const MEAL_SYSTEM_PROMPT: &str = r#"You are an innovative, world-renowned chef with decades of experience across global cuisines. You're known for creative fusion cooking, bold flavor combinations, and turning simple ingredients into extraordinary dishes.

Create diverse, exciting meal plans that stay nutritionally balanced and practical for a home kitchen.

Guidelines:
- Combine unexpected flavors, techniques and cultural influences
- Use diverse cooking methods: grilling, roasting, steaming, pickling, fermenting
- Mix comfort food with international fusion
- Suit both lunch (lighter, fresh) and dinner (heartier, satisfying)
- Balance proteins, vegetables and starches
- Range from 15-minute meals to weekend projects
- Transform dishes with distinct preparations rather than swapping ingredients
- Consider seasonal ingredients and global spice profiles

Respond ONLY with valid JSON in this exact format:
{
  "recipes": [
    {
      "name": "Dish Name",
      "description": "Brief appetizing description",
      "prepTime": "XX min",
      "difficulty": "Easy|Medium|Hard",
      "calories": 000,
      "cuisine": "Cuisine Type",
      "proteins": ["protein1", "protein2"],
      "vegetables": ["veg1", "veg2"],
      "starches": ["starch1"],
      "ingredients": ["ingredient1", "ingredient2", "..."],
      "instructions": ["step1", "step2", "..."]
    }
  ]
}"#;

pub const AUTOFILL_SYSTEM_PROMPT: &str = "You are a professional chef and recipe developer. Generate complete, realistic recipes based on dish titles. Always return valid JSON only.";

/// User message for a generation round.
pub fn meal_user_prompt(preferences: Option<&UserPreferences>, count: u32) -> String {
    let Some(p) = preferences else {
        return format!(
            r#"No specific user preferences provided, so be extra creative.

Generate {count} diverse meal ideas with this mix:
- 30% lunch-appropriate dishes: lighter, fresh, quick options (salads, wraps, bowls, sandwiches)
- 30% dinner options: heartier, more substantial meals
- 20% classic comfort foods: timeless dishes everyone loves (burgers, pasta, roasted chicken)
- 20% creative fusion: innovative global combinations and unique twists

Vary cooking times (15-30 min quick meals and 45+ min weekend projects), cuisines (American, Italian, Mexican, Asian, Mediterranean and fusion), cooking methods and comfort level.

Make each recipe approachable yet exciting."#
        );
    };

    format!(
        r#"User Preferences:
- Likes: {} proteins, {} vegetables, {} starches
- Dislikes/Exclude: {} proteins, {} vegetables, {} starches
- Cuisines: {}
- Dietary restrictions: {}
- Health goal: {}
- Weight: {}lbs → {}lbs
- Daily calorie target: {} calories
- Activity level: {}
- Location: {}
- Favorite restaurants: {}
- Going out frequency: {} meals/week

Generate {count} diverse meal ideas that avoid all disliked ingredients and align with their health goals.

Include this mix:
- 30% lunch-appropriate dishes: lighter, fresh, quick options that work for midday
- 30% dinner options: heartier, more substantial evening meals
- 20% classic comfort foods: timeless dishes and familiar favorites
- 20% creative options: innovative combinations while respecting their preferences

Vary cooking times, methods and comfort levels while honoring their dietary restrictions."#,
        p.liked_proteins.join(", "),
        p.liked_vegetables.join(", "),
        p.liked_starches.join(", "),
        p.disliked_proteins.join(", "),
        p.disliked_vegetables.join(", "),
        p.disliked_starches.join(", "),
        p.cuisine_preferences.join(", "),
        p.dietary_restrictions.join(", "),
        p.health_goals,
        p.current_weight,
        p.goal_weight,
        p.daily_calorie_target,
        p.activity_level,
        p.location,
        p.favorite_restaurants.join(", "),
        p.going_out_frequency,
    )
}

pub fn autofill_prompt(title: &str) -> String {
    let cuisines = Cuisine::VARIANTS
        .iter()
        .map(|cuisine| cuisine.to_string())
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        r#"Based on the recipe title "{title}", generate a complete recipe. Return a valid JSON object with these exact keys:

{{
  "description": "A brief, appetizing description of the dish",
  "prepTime": "Preparation time (e.g., '25 min', '1 hour')",
  "difficulty": "Easy, Medium, or Hard",
  "calories": 500,
  "cuisine": "Type of cuisine - MUST be exactly one of: {cuisines}",
  "proteins": ["protein1", "protein2"],
  "vegetables": ["vegetable1", "vegetable2"],
  "starches": ["starch1", "starch2"],
  "ingredients": ["ingredient 1 with amount", "ingredient 2 with amount"],
  "instructions": ["step 1", "step 2", "step 3"]
}}

The "proteins", "vegetables" and "starches" arrays drive the grocery list, so list the main food items without amounts (e.g. "chicken breast", "spinach", "rice"). The "ingredients" array carries measurements (e.g. "1 lb chicken breast"). Include ingredients that are easy to forget.

Return only the JSON object, no additional text."#
    )
}

pub fn steps_prompt(recipe: &Recipe) -> String {
    format!(
        r#"You are a professional chef instructor. Create detailed, confidence-building step-by-step cooking instructions for this recipe:

Recipe: {}
Ingredients: {}
Basic Instructions: {}

Create 8-12 specific, detailed steps that help a beginner cook this meal with confidence. Each step should be actionable (times, temperatures, visual cues), explain what to expect and include a tip where useful, in an encouraging tone.

Return ONLY a JSON object with this format:
{{
  "steps": ["Step 1 text", "Step 2 text", ...]
}}"#,
        recipe.name,
        recipe.ingredients.join(", "),
        recipe.instructions.join(" "),
    )
}
