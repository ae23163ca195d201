pub mod constants;
pub mod engine;
pub mod format;

pub use constants::*;
pub use engine::{scale_recipe, TasteProfile};
pub use format::format_quantity;
