mod recipe;
mod scaled;

pub use recipe::{Ingredient, Recipe, ScalingKind, TasteAdjustment};
pub use scaled::ScaledIngredient;
