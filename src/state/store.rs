use std::collections::HashMap;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::distributions::Alphanumeric;
use rand::Rng;

use crate::error::{RecipeError, Result};
use crate::models::Recipe;

/// Length of generated recipe and ingredient ids.
const ID_LEN: usize = 12;

/// Mint an opaque lowercase alphanumeric id.
pub fn generate_id() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(ID_LEN)
        .map(|b| (b as char).to_ascii_lowercase())
        .collect()
}

/// Current time as milliseconds since the Unix epoch.
pub fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// In-memory recipe collection keyed by id.
///
/// All mutation goes through `add`/`update`/`remove`, which validate
/// before touching the map. The scaling engine only ever reads from it.
pub struct RecipeStore {
    recipes: HashMap<String, Recipe>,
}

impl RecipeStore {
    /// Create a store from a list of recipes.
    pub fn new(recipes: Vec<Recipe>) -> Self {
        let mut map = HashMap::new();
        for recipe in recipes {
            map.insert(recipe.id.clone(), recipe);
        }
        Self { recipes: map }
    }

    /// Get a recipe by id.
    pub fn get(&self, id: &str) -> Option<&Recipe> {
        self.recipes.get(id)
    }

    /// Get a mutable reference to a recipe by id.
    pub fn get_mut(&mut self, id: &str) -> Option<&mut Recipe> {
        self.recipes.get_mut(id)
    }

    /// Insert a new recipe after validating it.
    pub fn add(&mut self, recipe: Recipe) -> Result<()> {
        recipe.validate().map_err(RecipeError::InvalidInput)?;

        if self.recipes.contains_key(&recipe.id) {
            return Err(RecipeError::InvalidInput(format!(
                "Duplicate recipe id: {}",
                recipe.id
            )));
        }

        self.recipes.insert(recipe.id.clone(), recipe);
        Ok(())
    }

    /// Replace an existing recipe, keyed by its id.
    pub fn update(&mut self, recipe: Recipe) -> Result<()> {
        recipe.validate().map_err(RecipeError::InvalidInput)?;

        if !self.recipes.contains_key(&recipe.id) {
            return Err(RecipeError::RecipeNotFound(recipe.id.clone()));
        }

        self.recipes.insert(recipe.id.clone(), recipe);
        Ok(())
    }

    /// Remove a recipe by id, returning it.
    pub fn remove(&mut self, id: &str) -> Result<Recipe> {
        self.recipes
            .remove(id)
            .ok_or_else(|| RecipeError::RecipeNotFound(id.to_string()))
    }

    /// All recipes, newest first.
    pub fn all_by_recency(&self) -> Vec<&Recipe> {
        let mut recipes: Vec<&Recipe> = self.recipes.values().collect();
        recipes.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        recipes
    }

    /// Find a recipe by exact title (case-insensitive).
    pub fn find_by_title(&self, title: &str) -> Option<&Recipe> {
        let key = title.to_lowercase();
        self.recipes.values().find(|r| r.title_key() == key)
    }

    /// Convert the store back to a list for serialization.
    pub fn to_recipes(&self) -> Vec<Recipe> {
        self.recipes.values().cloned().collect()
    }

    /// Count of recipes in the store.
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Check if the store holds no recipes.
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}
