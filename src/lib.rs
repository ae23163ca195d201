pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod scaling;
pub mod state;

pub use error::{RecipeError, Result};
pub use models::{Ingredient, Recipe, ScaledIngredient, ScalingKind, TasteAdjustment};
pub use scaling::{scale_recipe, TasteProfile};
