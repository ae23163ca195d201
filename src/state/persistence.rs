use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::Recipe;

/// Load recipes from a JSON file.
///
/// Deduplicates by id (last occurrence wins).
pub fn load_recipes<P: AsRef<Path>>(path: P) -> Result<Vec<Recipe>> {
    let content = fs::read_to_string(path)?;
    let recipes: Vec<Recipe> = serde_json::from_str(&content)?;

    let mut seen: HashMap<String, Recipe> = HashMap::new();
    for recipe in recipes {
        seen.insert(recipe.id.clone(), recipe);
    }

    Ok(seen.into_values().collect())
}

/// Load recipes, treating a missing file as an empty recipe box.
pub fn load_recipes_or_default<P: AsRef<Path>>(path: P) -> Result<Vec<Recipe>> {
    if !path.as_ref().exists() {
        return Ok(Vec::new());
    }
    load_recipes(path)
}

/// Save recipes to a JSON file.
///
/// Deduplicates by id before saving.
pub fn save_recipes<P: AsRef<Path>>(path: P, recipes: &[Recipe]) -> Result<()> {
    let mut seen: HashMap<String, &Recipe> = HashMap::new();
    for recipe in recipes {
        seen.insert(recipe.id.clone(), recipe);
    }

    let deduped: Vec<&Recipe> = seen.into_values().collect();
    let json = serde_json::to_string_pretty(&deduped)?;
    fs::write(path, json)?;
    Ok(())
}
