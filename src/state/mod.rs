mod persistence;
mod store;

pub use persistence::{load_recipes, load_recipes_or_default, save_recipes};
pub use store::{generate_id, now_millis, RecipeStore};
