use std::collections::HashSet;

use rand::{Rng, seq::SliceRandom};
use yeschef_shared::{
    mealplan::MealType,
    recipe::{Difficulty, GENERATED_ID_PREFIX, Recipe},
};

/// Rotation recipes mixed into a freshly generated candidate list.
pub const ROTATION_MIX_SIZE: usize = 6;

fn going_out_template(meal_type: MealType, prep_time: &str) -> Recipe {
    Recipe {
        id: format!("{}-out", meal_type),
        name: format!("{} Out", meal_type.title()),
        description: "Click to edit restaurant name".to_owned(),
        prep_time: prep_time.to_owned(),
        difficulty: Difficulty::Easy,
        calories: 0,
        cuisine: "Restaurant".to_owned(),
        instructions: vec!["Enjoy dining out!".to_owned()],
        is_going_out: true,
        meal_type: Some(meal_type),
        ..Default::default()
    }
}

/// Placeholder meals for eating at a restaurant.
pub fn going_out_templates() -> Vec<Recipe> {
    vec![
        going_out_template(MealType::Lunch, "60 min"),
        going_out_template(MealType::Dinner, "90 min"),
    ]
}

/// `Lunch Out (Nopa)`, or `Lunch Out` when no restaurant is given.
pub fn going_out_name(meal_type: MealType, restaurant: &str) -> String {
    let restaurant = restaurant.trim();
    if restaurant.is_empty() {
        return format!("{} Out", meal_type.title());
    }

    format!("{} Out ({restaurant})", meal_type.title())
}

/// Builds the candidate list shown after a generation round.
///
/// Order before deduplication is templates, custom recipes, up to
/// [`ROTATION_MIX_SIZE`] shuffled rotation recipes, then generated recipes
/// whose name does not collide with a custom or rotation recipe. Generated
/// recipes are re-identified as `ai-<millis>-<index>`. Custom recipes are only
/// deduplicated against earlier custom recipes; everything else is
/// deduplicated by id, then by normalized name. Custom recipes end up last.
pub fn merge_available_recipes<R: Rng + ?Sized>(
    templates: Vec<Recipe>,
    custom: &[Recipe],
    rotation: &[Recipe],
    generated: Vec<Recipe>,
    now_millis: i64,
    rng: &mut R,
) -> Vec<Recipe> {
    let mut selected_rotation = rotation.to_vec();
    selected_rotation.shuffle(rng);
    selected_rotation.truncate(ROTATION_MIX_SIZE);

    let existing_names = custom
        .iter()
        .chain(rotation.iter())
        .map(Recipe::normalized_name)
        .collect::<HashSet<_>>();

    let generated_total = generated.len();
    let new_recipes = generated
        .into_iter()
        .filter(|recipe| !existing_names.contains(&recipe.normalized_name()))
        .enumerate()
        .map(|(index, recipe)| Recipe {
            id: format!("{GENERATED_ID_PREFIX}{now_millis}-{index}"),
            ..recipe
        })
        .collect::<Vec<_>>();

    tracing::debug!(
        custom = custom.len(),
        rotation = selected_rotation.len(),
        generated = new_recipes.len(),
        filtered = generated_total - new_recipes.len(),
        "merging available recipes"
    );

    let mut custom_names = HashSet::new();
    let mut seen_ids = HashSet::new();
    let mut seen_names = HashSet::new();
    let mut others = Vec::new();
    let mut customs = Vec::new();

    for recipe in templates
        .into_iter()
        .chain(custom.iter().cloned())
        .chain(selected_rotation)
        .chain(new_recipes)
    {
        let name = recipe.normalized_name();

        if recipe.is_custom() {
            seen_ids.insert(recipe.id.clone());
            seen_names.insert(name.clone());

            if custom_names.insert(name) {
                customs.push(recipe);
            }
            continue;
        }

        let first_id = seen_ids.insert(recipe.id.clone());
        let first_name = seen_names.insert(name);
        if first_id && first_name {
            others.push(recipe);
        }
    }

    others.extend(customs);
    others
}
