use clap::Parser;
use std::path::Path;

use recipe_scaler_rs::cli::{Cli, Command};
use recipe_scaler_rs::error::{RecipeError, Result};
use recipe_scaler_rs::interface::{
    collect_recipe, display_recipe_list, display_scaled_recipe, prompt_batch_action,
    prompt_servings, prompt_taste_profile, prompt_yes_no, resolve_recipe, write_scaled_csv,
    BatchAction,
};
use recipe_scaler_rs::scaling::{scale_recipe, TasteProfile};
use recipe_scaler_rs::state::{load_recipes_or_default, save_recipes, RecipeStore};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::List => cmd_list(&cli.file),
        Command::Show {
            recipe,
            servings,
            taste,
        } => cmd_show(&cli.file, &recipe, servings, taste.as_deref()),
        Command::Add => cmd_add(&cli.file),
        Command::Edit { recipe } => cmd_edit(&cli.file, &recipe),
        Command::Remove { recipe, yes } => cmd_remove(&cli.file, &recipe, yes),
        Command::Export {
            recipe,
            servings,
            taste,
            output,
        } => cmd_export(&cli.file, &recipe, servings, taste.as_deref(), &output),
    }
}

/// Load the recipe box, treating a missing file as empty.
fn load_store(file_path: &str) -> Result<RecipeStore> {
    Ok(RecipeStore::new(load_recipes_or_default(file_path)?))
}

/// List all recipes, newest first.
fn cmd_list(file_path: &str) -> Result<()> {
    let store = load_store(file_path)?;
    display_recipe_list(&store.all_by_recency());
    Ok(())
}

/// Show a recipe scaled to a serving count and taste profile.
///
/// With no flags the view is interactive: servings step up and down
/// (never below 1) and the taste profile can be re-selected.
fn cmd_show(
    file_path: &str,
    query: &str,
    servings: Option<u32>,
    taste: Option<&str>,
) -> Result<()> {
    let store = load_store(file_path)?;
    let recipe = resolve_recipe(&store, query)?
        .ok_or_else(|| RecipeError::RecipeNotFound(query.to_string()))?;

    let interactive = servings.is_none() && taste.is_none();
    let mut target = servings.unwrap_or(recipe.base_servings).max(1);
    let mut profile = taste.map(TasteProfile::parse).unwrap_or_default();

    let scaled = scale_recipe(recipe, target, profile);
    display_scaled_recipe(recipe, target, profile, &scaled);

    if !interactive {
        return Ok(());
    }

    loop {
        match prompt_batch_action()? {
            BatchAction::AddServing => target += 1,
            BatchAction::RemoveServing => target = target.saturating_sub(1).max(1),
            BatchAction::SetServings => target = prompt_servings(target)?,
            BatchAction::ChangeTaste => profile = prompt_taste_profile(profile)?,
            BatchAction::Done => break,
        }

        let scaled = scale_recipe(recipe, target, profile);
        display_scaled_recipe(recipe, target, profile, &scaled);
    }

    Ok(())
}

/// Create a new recipe interactively.
fn cmd_add(file_path: &str) -> Result<()> {
    let mut store = load_store(file_path)?;

    let recipe = collect_recipe(None)?;
    let title = recipe.title.clone();
    let id = recipe.id.clone();

    store.add(recipe)?;
    save_recipes(file_path, &store.to_recipes())?;

    println!("Created recipe '{}' [{}]", title, id);
    Ok(())
}

/// Edit an existing recipe.
fn cmd_edit(file_path: &str, query: &str) -> Result<()> {
    let mut store = load_store(file_path)?;

    let existing = resolve_recipe(&store, query)?
        .ok_or_else(|| RecipeError::RecipeNotFound(query.to_string()))?
        .clone();

    let updated = collect_recipe(Some(&existing))?;
    let title = updated.title.clone();

    store.update(updated)?;
    save_recipes(file_path, &store.to_recipes())?;

    println!("Updated recipe '{}'", title);
    Ok(())
}

/// Delete a recipe after confirmation.
fn cmd_remove(file_path: &str, query: &str, yes: bool) -> Result<()> {
    let mut store = load_store(file_path)?;

    let recipe = resolve_recipe(&store, query)?
        .ok_or_else(|| RecipeError::RecipeNotFound(query.to_string()))?;
    let id = recipe.id.clone();
    let title = recipe.title.clone();

    if !yes && !prompt_yes_no(&format!("Delete '{}'?", title), false)? {
        println!("Kept '{}'.", title);
        return Ok(());
    }

    store.remove(&id)?;
    save_recipes(file_path, &store.to_recipes())?;

    println!("Deleted '{}'.", title);
    Ok(())
}

/// Export a scaled ingredient list to CSV.
fn cmd_export(
    file_path: &str,
    query: &str,
    servings: Option<u32>,
    taste: Option<&str>,
    output: &str,
) -> Result<()> {
    let store = load_store(file_path)?;
    let recipe = resolve_recipe(&store, query)?
        .ok_or_else(|| RecipeError::RecipeNotFound(query.to_string()))?;

    let target = servings.unwrap_or(recipe.base_servings).max(1);
    let profile = taste.map(TasteProfile::parse).unwrap_or_default();

    let scaled = scale_recipe(recipe, target, profile);
    write_scaled_csv(Path::new(output), &scaled)?;

    println!(
        "Exported '{}' at {} servings ({}) to {}",
        recipe.title,
        target,
        profile.label(),
        output
    );
    Ok(())
}
