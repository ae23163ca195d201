pub mod export;
pub mod prompts;
pub mod render;

pub use export::write_scaled_csv;
pub use prompts::{
    collect_recipe, prompt_batch_action, prompt_servings, prompt_taste_profile, prompt_yes_no,
    resolve_recipe, BatchAction,
};
pub use render::{display_recipe_list, display_scaled_recipe};
