use clap::{Parser, Subcommand};

/// RecipeScaler — a recipe box CLI that scales ingredient quantities to
/// any batch size and taste profile.
#[derive(Parser, Debug)]
#[command(name = "recipe_scaler")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the recipe box JSON file.
    #[arg(short, long, default_value = "recipe_box.json")]
    pub file: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List all recipes, newest first.
    List,

    /// Show a recipe scaled to a serving count and taste profile.
    Show {
        /// Recipe title or id.
        recipe: String,

        /// Serving count to scale to (defaults to the recipe's base; minimum 1).
        #[arg(short, long)]
        servings: Option<u32>,

        /// Taste profile: mild, medium, spicy, indian-boost.
        /// Unknown values fall back to medium.
        #[arg(short, long)]
        taste: Option<String>,
    },

    /// Create a new recipe interactively.
    Add,

    /// Edit an existing recipe.
    Edit {
        /// Recipe title or id.
        recipe: String,
    },

    /// Delete a recipe.
    Remove {
        /// Recipe title or id.
        recipe: String,

        /// Skip the confirmation prompt.
        #[arg(long)]
        yes: bool,
    },

    /// Export a scaled ingredient list to a CSV file.
    Export {
        /// Recipe title or id.
        recipe: String,

        /// Serving count to scale to (defaults to the recipe's base; minimum 1).
        #[arg(short, long)]
        servings: Option<u32>,

        /// Taste profile: mild, medium, spicy, indian-boost.
        #[arg(short, long)]
        taste: Option<String>,

        /// Output CSV path.
        #[arg(short, long, default_value = "scaled_ingredients.csv")]
        output: String,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::List
    }
}
