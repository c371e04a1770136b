use serde::Deserialize;
use serde_json::Value;
use yeschef_shared::{
    Error, Result,
    recipe::{Cuisine, Difficulty, GENERATED_ID_PREFIX, Recipe},
};

const RECIPE_KEYS: &[&str] = &[
    "description",
    "prepTime",
    "difficulty",
    "calories",
    "cuisine",
    "proteins",
    "vegetables",
    "starches",
    "ingredients",
    "instructions",
];

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecipeDraft {
    description: String,
    prep_time: String,
    difficulty: String,
    calories: f64,
    cuisine: String,
    proteins: Vec<String>,
    vegetables: Vec<String>,
    starches: Vec<String>,
    ingredients: Vec<String>,
    instructions: Vec<String>,
}

impl RecipeDraft {
    fn into_recipe(self, id: String, name: String) -> Result<Recipe> {
        let difficulty = self
            .difficulty
            .trim()
            .parse::<Difficulty>()
            .map_err(|_| Error::Generation(format!("Unknown difficulty: {}", self.difficulty)))?;

        Ok(Recipe {
            id,
            name,
            description: self.description,
            prep_time: self.prep_time,
            difficulty,
            calories: self.calories.max(0.0).round() as u32,
            cuisine: Cuisine::from_label(self.cuisine.trim()).to_string(),
            ingredients: self.ingredients,
            instructions: self.instructions,
            proteins: self.proteins,
            vegetables: self.vegetables,
            starches: self.starches,
            ..Default::default()
        })
    }
}

/// Removes a surrounding markdown code fence, with or without a `json` tag.
pub fn strip_code_fences(content: &str) -> &str {
    let content = content.trim();

    let Some(inner) = content
        .strip_prefix("```json")
        .or_else(|| content.strip_prefix("```"))
    else {
        return content;
    };

    inner.strip_suffix("```").unwrap_or(inner).trim()
}

fn parse_json(content: &str) -> Result<Value> {
    serde_json::from_str(strip_code_fences(content)).map_err(|e| {
        tracing::warn!(error = %e, "unparseable generation response");
        Error::Generation(format!("Failed to parse LLM response as JSON: {e}"))
    })
}

fn check_keys(value: &Value, keys: &[&str]) -> Result<()> {
    let missing = keys
        .iter()
        .filter(|key| value.get(**key).is_none())
        .copied()
        .collect::<Vec<_>>();

    if !missing.is_empty() {
        return Err(Error::Generation(format!(
            "Missing required fields: {}",
            missing.join(", ")
        )));
    }

    Ok(())
}

fn draft(value: Value) -> Result<RecipeDraft> {
    serde_json::from_value(value).map_err(|e| Error::Generation(format!("Invalid recipe: {e}")))
}

/// Recipes of a meal generation response. Ids are provisional `ai-<index>`.
pub fn parse_recipes(content: &str) -> Result<Vec<Recipe>> {
    let mut value = parse_json(content)?;

    let Some(Value::Array(recipes)) = value.get_mut("recipes").map(Value::take) else {
        return Err(Error::Generation(
            "Response has no recipes array".to_owned(),
        ));
    };

    recipes
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            check_keys(&value, &["name"])?;
            check_keys(&value, RECIPE_KEYS)?;

            let name = value
                .get("name")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .trim()
                .to_owned();

            draft(value)?.into_recipe(format!("{GENERATED_ID_PREFIX}{index}"), name)
        })
        .collect()
}

/// Recipe details generated for a title. The id is left empty.
pub fn parse_autofill(title: &str, content: &str) -> Result<Recipe> {
    let value = parse_json(content)?;
    check_keys(&value, RECIPE_KEYS)?;

    draft(value)?.into_recipe(String::new(), title.trim().to_owned())
}

pub fn parse_steps(content: &str) -> Result<Vec<String>> {
    #[derive(Deserialize)]
    struct Steps {
        steps: Vec<String>,
    }

    let value = parse_json(content)?;
    let Steps { steps } = serde_json::from_value(value)
        .map_err(|e| Error::Generation(format!("Invalid steps response: {e}")))?;

    Ok(steps)
}
