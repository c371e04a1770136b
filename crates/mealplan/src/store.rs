use std::sync::Arc;

use yeschef_shared::{
    Clock, Storage,
    mealplan::{Day, MealSource, MealType},
    recipe::{CUSTOM_ID_PREFIX, Recipe, RecipeUpdate},
};

use crate::{MultiWeekMealPlan, WeeklyMealPlan, going_out_name, week_key};

pub const MEAL_PLANS_KEY: &str = "chefmate-meal-plans";
pub const ROTATION_KEY: &str = "chefmate-rotation";
pub const CUSTOM_RECIPES_KEY: &str = "chefmate-custom-recipes";

/// Recipe collections, the multi-week calendar and drag state.
///
/// Plans, rotation and custom recipes are written back to [`Storage`] after
/// every change. Everything else lives only as long as the store.
pub struct MealPlanStore {
    storage: Arc<dyn Storage>,
    clock: Arc<dyn Clock>,
    available_recipes: Vec<Recipe>,
    is_generating: bool,
    meal_plans: MultiWeekMealPlan,
    current_week_offset: i32,
    is_week_locked: bool,
    rotation_recipes: Vec<Recipe>,
    custom_recipes: Vec<Recipe>,
    dragged_recipe: Option<Recipe>,
    dragged_meal_source: Option<MealSource>,
}

impl MealPlanStore {
    pub async fn load(storage: Arc<dyn Storage>, clock: Arc<dyn Clock>) -> Self {
        let meal_plans = yeschef_shared::load_json(storage.as_ref(), MEAL_PLANS_KEY)
            .await
            .unwrap_or_default();
        let rotation_recipes = yeschef_shared::load_json(storage.as_ref(), ROTATION_KEY)
            .await
            .unwrap_or_default();
        let custom_recipes = yeschef_shared::load_json(storage.as_ref(), CUSTOM_RECIPES_KEY)
            .await
            .unwrap_or_default();

        Self {
            storage,
            clock,
            available_recipes: vec![],
            is_generating: false,
            meal_plans,
            current_week_offset: 0,
            is_week_locked: false,
            rotation_recipes,
            custom_recipes,
            dragged_recipe: None,
            dragged_meal_source: None,
        }
    }

    pub fn available_recipes(&self) -> &[Recipe] {
        &self.available_recipes
    }

    pub fn set_available_recipes(&mut self, recipes: Vec<Recipe>) {
        self.available_recipes = recipes;
    }

    pub fn is_generating(&self) -> bool {
        self.is_generating
    }

    pub fn set_is_generating(&mut self, generating: bool) {
        self.is_generating = generating;
    }

    pub fn current_week_offset(&self) -> i32 {
        self.current_week_offset
    }

    pub fn set_current_week_offset(&mut self, offset: i32) {
        self.current_week_offset = offset;
    }

    pub fn current_week_key(&self) -> String {
        week_key(self.clock.today(), self.current_week_offset)
    }

    pub fn meal_plans(&self) -> &MultiWeekMealPlan {
        &self.meal_plans
    }

    /// Plan of the active week, or an all-empty week if nothing was planned.
    pub fn current_week_meal_plan(&self) -> WeeklyMealPlan {
        self.meal_plans
            .get(&self.current_week_key())
            .cloned()
            .unwrap_or_else(WeeklyMealPlan::empty)
    }

    fn current_week_mut(&mut self) -> &mut WeeklyMealPlan {
        let key = self.current_week_key();
        self.meal_plans
            .entry(key)
            .or_insert_with(WeeklyMealPlan::empty)
    }

    async fn save_meal_plans(&self) {
        yeschef_shared::save_json(self.storage.as_ref(), MEAL_PLANS_KEY, &self.meal_plans).await;
    }

    async fn save_rotation(&self) {
        yeschef_shared::save_json(self.storage.as_ref(), ROTATION_KEY, &self.rotation_recipes)
            .await;
    }

    async fn save_custom_recipes(&self) {
        yeschef_shared::save_json(
            self.storage.as_ref(),
            CUSTOM_RECIPES_KEY,
            &self.custom_recipes,
        )
        .await;
    }

    pub async fn add_meal_to_plan(&mut self, day: Day, meal_type: MealType, recipe: Recipe) {
        *self.current_week_mut().slot_mut(day, meal_type) = Some(recipe);
        self.save_meal_plans().await;
    }

    pub async fn remove_meal_from_plan(&mut self, day: Day, meal_type: MealType) {
        *self.current_week_mut().slot_mut(day, meal_type) = None;
        self.save_meal_plans().await;
    }

    /// Merges `update` into the planned meal. Returns `false` when the slot is
    /// empty, in which case nothing changes.
    pub async fn update_meal_in_plan(
        &mut self,
        day: Day,
        meal_type: MealType,
        update: RecipeUpdate,
    ) -> bool {
        if self.current_week_meal_plan().meal(day, meal_type).is_none() {
            return false;
        }

        if let Some(recipe) = self.current_week_mut().slot_mut(day, meal_type) {
            recipe.apply(update);
        }

        self.save_meal_plans().await;

        true
    }

    /// Moves a planned meal; an occupied destination swaps into the source
    /// slot. Returns `false` when the source slot is empty.
    pub async fn move_meal_in_plan(
        &mut self,
        from_day: Day,
        from_type: MealType,
        to_day: Day,
        to_type: MealType,
    ) -> bool {
        let week = self.current_week_meal_plan();
        let Some(meal_to_move) = week.meal(from_day, from_type).cloned() else {
            return false;
        };
        let meal_at_destination = week.meal(to_day, to_type).cloned();

        let week = self.current_week_mut();
        *week.slot_mut(from_day, from_type) = meal_at_destination;
        *week.slot_mut(to_day, to_type) = Some(meal_to_move);

        self.save_meal_plans().await;

        true
    }

    /// Records the restaurant of a going-out meal and renames it to match.
    /// Returns `false` when the slot is empty or holds a regular meal.
    pub async fn rename_going_out(
        &mut self,
        day: Day,
        meal_type: MealType,
        restaurant: &str,
    ) -> bool {
        let plan = self.current_week_meal_plan();
        if !plan.meal(day, meal_type).is_some_and(|meal| meal.is_going_out) {
            return false;
        }

        let restaurant = restaurant.trim();

        self.update_meal_in_plan(
            day,
            meal_type,
            RecipeUpdate {
                name: Some(going_out_name(meal_type, restaurant)),
                restaurant_name: Some(restaurant.to_owned()),
                ..Default::default()
            },
        )
        .await
    }

    pub async fn clear_current_week_meal_plan(&mut self) {
        *self.current_week_mut() = WeeklyMealPlan::empty();
        self.save_meal_plans().await;
    }

    pub async fn clear_meal_plan(&mut self) {
        self.meal_plans.clear();
        self.save_meal_plans().await;
    }

    pub fn is_week_locked(&self) -> bool {
        self.is_week_locked
    }

    pub fn lock_week(&mut self) {
        self.is_week_locked = true;
    }

    pub fn unlock_week(&mut self) {
        self.is_week_locked = false;
    }

    pub fn rotation_recipes(&self) -> &[Recipe] {
        &self.rotation_recipes
    }

    /// Returns `false` if a recipe with the same id is already in rotation.
    pub async fn add_to_rotation(&mut self, recipe: Recipe) -> bool {
        if self.is_in_rotation(&recipe.id) {
            return false;
        }

        self.rotation_recipes.push(recipe);
        self.save_rotation().await;

        true
    }

    pub async fn remove_from_rotation(&mut self, id: &str) {
        self.rotation_recipes.retain(|recipe| recipe.id != id);
        self.save_rotation().await;
    }

    pub fn is_in_rotation(&self, id: &str) -> bool {
        self.rotation_recipes.iter().any(|recipe| recipe.id == id)
    }

    pub fn custom_recipes(&self) -> &[Recipe] {
        &self.custom_recipes
    }

    fn next_custom_id(&self) -> String {
        let mut millis = self.clock.unix_millis();

        loop {
            let id = format!("{CUSTOM_ID_PREFIX}{millis}");
            if !self.custom_recipes.iter().any(|recipe| recipe.id == id) {
                return id;
            }
            millis += 1;
        }
    }

    /// Stores a user-authored recipe and returns it with its final id.
    ///
    /// A recipe already carrying a `custom-` id keeps it and replaces the
    /// existing entry with that id, if any.
    pub async fn add_custom_recipe(&mut self, mut recipe: Recipe) -> Recipe {
        if !recipe.is_custom() {
            recipe.id = self.next_custom_id();
        }

        match self
            .custom_recipes
            .iter_mut()
            .find(|existing| existing.id == recipe.id)
        {
            Some(existing) => *existing = recipe.clone(),
            None => self.custom_recipes.push(recipe.clone()),
        }

        self.save_custom_recipes().await;

        recipe
    }

    pub async fn remove_custom_recipe(&mut self, id: &str) {
        self.custom_recipes.retain(|recipe| recipe.id != id);
        self.save_custom_recipes().await;
    }

    /// Returns the updated recipe, or `None` when no custom recipe has `id`.
    pub async fn update_custom_recipe(&mut self, id: &str, update: RecipeUpdate) -> Option<Recipe> {
        let recipe = self
            .custom_recipes
            .iter_mut()
            .find(|recipe| recipe.id == id)?;

        recipe.apply(update);
        let updated = recipe.clone();

        self.save_custom_recipes().await;

        Some(updated)
    }

    pub fn dragged_recipe(&self) -> Option<&Recipe> {
        self.dragged_recipe.as_ref()
    }

    pub fn dragged_meal_source(&self) -> Option<MealSource> {
        self.dragged_meal_source
    }

    pub fn set_dragged_recipe(&mut self, recipe: Option<Recipe>) {
        self.dragged_recipe = recipe;
    }

    pub fn set_dragged_meal_source(&mut self, source: Option<MealSource>) {
        self.dragged_meal_source = source;
    }

    /// Picks up a planned meal. Returns `false` when the slot is empty.
    pub fn start_dragging_placed_meal(&mut self, day: Day, meal_type: MealType) -> bool {
        let Some(recipe) = self.current_week_meal_plan().meal(day, meal_type).cloned() else {
            return false;
        };

        self.dragged_meal_source = Some(MealSource::new(day, meal_type));
        self.dragged_recipe = Some(recipe);

        true
    }

    /// Completes a drag onto a slot: a picked-up meal is moved there, a
    /// recipe from the candidate list is placed there. Drag state is cleared
    /// either way. Returns `false` when nothing was being dragged.
    pub async fn drop_on_slot(&mut self, day: Day, meal_type: MealType) -> bool {
        if let Some(source) = self.dragged_meal_source.take() {
            self.dragged_recipe = None;
            self.move_meal_in_plan(source.day, source.meal_type, day, meal_type)
                .await;

            return true;
        }

        let Some(recipe) = self.dragged_recipe.take() else {
            return false;
        };

        self.add_meal_to_plan(day, meal_type, recipe).await;

        true
    }
}
