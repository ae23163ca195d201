use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::error::{RecipeError, Result};
use crate::models::{Ingredient, Recipe, ScalingKind, TasteAdjustment};
use crate::scaling::TasteProfile;
use crate::state::{generate_id, now_millis, RecipeStore};

/// Prompt for a serving count. Values below 1 are clamped up to 1.
pub fn prompt_servings(default: u32) -> Result<u32> {
    let input: String = Input::new()
        .with_prompt("How many servings?")
        .default(default.to_string())
        .interact_text()?;

    let servings: u32 = input
        .parse()
        .map_err(|_| RecipeError::InvalidInput("Invalid number".to_string()))?;

    Ok(servings.max(1))
}

/// Prompt for a taste profile with the four-way selector.
pub fn prompt_taste_profile(current: TasteProfile) -> Result<TasteProfile> {
    let options: Vec<String> = TasteProfile::ALL
        .iter()
        .map(|p| format!("{} ({})", p.label(), p.description()))
        .collect();

    let default = TasteProfile::ALL
        .iter()
        .position(|p| *p == current)
        .unwrap_or(1);

    let selection = Select::new()
        .with_prompt("Taste profile")
        .items(&options)
        .default(default)
        .interact()?;

    Ok(TasteProfile::ALL[selection])
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Next action in the interactive scaled view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchAction {
    AddServing,
    RemoveServing,
    SetServings,
    ChangeTaste,
    Done,
}

/// Prompt for the next batch adjustment.
pub fn prompt_batch_action() -> Result<BatchAction> {
    let selection = Select::new()
        .with_prompt("Adjust the batch")
        .items(&[
            "Add a serving",
            "Remove a serving",
            "Set serving count",
            "Change taste profile",
            "Done",
        ])
        .default(4)
        .interact()?;

    Ok(match selection {
        0 => BatchAction::AddServing,
        1 => BatchAction::RemoveServing,
        2 => BatchAction::SetServings,
        3 => BatchAction::ChangeTaste,
        _ => BatchAction::Done,
    })
}

/// Resolve a recipe from a user-supplied query with fuzzy matching.
///
/// Tries the query as an id, then as an exact title (case-insensitive),
/// then falls back to fuzzy title candidates the user can confirm.
pub fn resolve_recipe<'a>(store: &'a RecipeStore, query: &str) -> Result<Option<&'a Recipe>> {
    if let Some(recipe) = store.get(query) {
        return Ok(Some(recipe));
    }

    if let Some(recipe) = store.find_by_title(query) {
        return Ok(Some(recipe));
    }

    let mut candidates: Vec<(&Recipe, f64)> = store
        .all_by_recency()
        .into_iter()
        .map(|r| {
            let score = jaro_winkler(&r.title.to_lowercase(), &query.to_lowercase());
            (r, score)
        })
        .filter(|(_, score)| *score > 0.7)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    if candidates.is_empty() {
        return Ok(None);
    }

    if candidates.len() == 1 {
        let recipe = candidates[0].0;
        let confirm = Confirm::new()
            .with_prompt(format!("Did you mean '{}'?", recipe.title))
            .default(true)
            .interact()?;

        return Ok(if confirm { Some(recipe) } else { None });
    }

    let options: Vec<String> = candidates
        .iter()
        .take(5)
        .map(|(r, _)| r.title.clone())
        .collect();

    let mut selection_options = options.clone();
    selection_options.push("None of these".to_string());

    let selection = Select::new()
        .with_prompt("Which recipe did you mean?")
        .items(&selection_options)
        .default(0)
        .interact()?;

    if selection < options.len() {
        Ok(Some(candidates[selection].0))
    } else {
        Ok(None)
    }
}

/// Interactive recipe wizard for both create and edit.
///
/// When `existing` is given, its fields become the prompt defaults and
/// its id and creation time are kept.
pub fn collect_recipe(existing: Option<&Recipe>) -> Result<Recipe> {
    let title: String = {
        let mut input = Input::new().with_prompt("Recipe title");
        if let Some(recipe) = existing {
            input = input.default(recipe.title.clone());
        }
        input.interact_text()?
    };

    if title.trim().is_empty() {
        return Err(RecipeError::InvalidInput(
            "Recipe title must not be empty".to_string(),
        ));
    }

    let description: String = Input::new()
        .with_prompt("Description")
        .allow_empty(true)
        .default(existing.map(|r| r.description.clone()).unwrap_or_default())
        .interact_text()?;

    let servings_input: String = Input::new()
        .with_prompt("Base serving count")
        .default(
            existing
                .map(|r| r.base_servings.to_string())
                .unwrap_or_else(|| "4".to_string()),
        )
        .interact_text()?;

    let base_servings: u32 = servings_input
        .parse()
        .map_err(|_| RecipeError::InvalidInput("Invalid number".to_string()))?;

    if base_servings == 0 {
        return Err(RecipeError::InvalidInput(
            "Base servings must be at least 1".to_string(),
        ));
    }

    let ingredients = match existing {
        Some(recipe) if prompt_yes_no("Keep the existing ingredient list?", true)? => {
            recipe.ingredients.clone()
        }
        _ => collect_ingredients()?,
    };

    let steps = match existing {
        Some(recipe) if prompt_yes_no("Keep the existing steps?", true)? => recipe.steps.clone(),
        _ => collect_steps()?,
    };

    Ok(Recipe {
        id: existing.map(|r| r.id.clone()).unwrap_or_else(generate_id),
        title: title.trim().to_string(),
        description,
        base_servings,
        ingredients,
        steps,
        created_at: existing.map(|r| r.created_at).unwrap_or_else(now_millis),
    })
}

/// Collect ingredients one at a time until an empty name is entered.
fn collect_ingredients() -> Result<Vec<Ingredient>> {
    let mut ingredients = Vec::new();

    loop {
        let name: String = Input::new()
            .with_prompt("Ingredient name (Enter to finish)")
            .allow_empty(true)
            .interact_text()?;

        let name = name.trim().to_string();
        if name.is_empty() {
            if ingredients.is_empty() {
                println!("A recipe needs at least one ingredient.");
                continue;
            }
            break;
        }

        let quantity_input: String = Input::new()
            .with_prompt("Quantity at base servings")
            .default("1".to_string())
            .interact_text()?;

        let quantity: f64 = quantity_input
            .parse()
            .map_err(|_| RecipeError::InvalidInput("Invalid number".to_string()))?;

        if !quantity.is_finite() || quantity < 0.0 {
            return Err(RecipeError::InvalidInput(
                "Quantity must be non-negative".to_string(),
            ));
        }

        let unit: String = Input::new()
            .with_prompt("Unit")
            .default("g".to_string())
            .interact_text()?;

        let kind_selection = Select::new()
            .with_prompt("Scaling behavior")
            .items(&[
                "Normal (scales with servings)",
                "Constant (fixed until batch limit)",
            ])
            .default(0)
            .interact()?;

        let kind = if kind_selection == 1 {
            ScalingKind::Constant
        } else {
            ScalingKind::Linear
        };

        let constant_limit = if kind == ScalingKind::Constant {
            let limit_input: String = Input::new()
                .with_prompt("Batch limit (servings before scaling kicks in)")
                .default("6".to_string())
                .interact_text()?;

            let limit: u32 = limit_input
                .parse()
                .map_err(|_| RecipeError::InvalidInput("Invalid number".to_string()))?;

            Some(limit)
        } else {
            None
        };

        let is_taste_adjustable = prompt_yes_no("Adjust this ingredient with taste profiles?", false)?;

        let taste_adjustment = if is_taste_adjustable {
            if prompt_yes_no("Customize the adjustment percentages?", false)? {
                Some(collect_taste_adjustment()?)
            } else {
                Some(TasteAdjustment::default())
            }
        } else {
            None
        };

        ingredients.push(Ingredient {
            id: generate_id(),
            name: name.clone(),
            quantity,
            unit,
            kind,
            constant_limit,
            is_taste_adjustable,
            taste_adjustment,
        });

        println!("Added: {name}");
    }

    Ok(ingredients)
}

/// Prompt the three taste adjustment percentages.
fn collect_taste_adjustment() -> Result<TasteAdjustment> {
    let parse_pct = |input: String, what: &str| -> Result<f64> {
        let value: f64 = input
            .parse()
            .map_err(|_| RecipeError::InvalidInput("Invalid number".to_string()))?;
        if !value.is_finite() || value < 0.0 {
            return Err(RecipeError::InvalidInput(format!(
                "{what} must be non-negative"
            )));
        }
        Ok(value)
    };

    let mild: String = Input::new()
        .with_prompt("Mild reduction %")
        .default("20".to_string())
        .interact_text()?;

    let spicy: String = Input::new()
        .with_prompt("Spicy increase %")
        .default("30".to_string())
        .interact_text()?;

    let boost: String = Input::new()
        .with_prompt("Indian boost increase %")
        .default("60".to_string())
        .interact_text()?;

    Ok(TasteAdjustment {
        mild_reduction_percentage: parse_pct(mild, "Mild reduction")?,
        spicy_increase_percentage: parse_pct(spicy, "Spicy increase")?,
        indian_boost_increase_percentage: parse_pct(boost, "Indian boost increase")?,
    })
}

/// Collect free-form steps until an empty line is entered.
fn collect_steps() -> Result<Vec<String>> {
    let mut steps = Vec::new();

    loop {
        let step: String = Input::new()
            .with_prompt("Add a step (Enter to finish)")
            .allow_empty(true)
            .interact_text()?;

        let step = step.trim().to_string();
        if step.is_empty() {
            break;
        }
        steps.push(step);
    }

    Ok(steps)
}
