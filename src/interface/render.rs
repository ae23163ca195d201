use crate::models::{Recipe, ScaledIngredient, ScalingKind};
use crate::scaling::{format_quantity, TasteProfile};

/// Display the recipe list, newest first.
pub fn display_recipe_list(recipes: &[&Recipe]) {
    if recipes.is_empty() {
        println!("Recipe box is empty. Use 'add' to create a recipe.");
        return;
    }

    println!();
    println!("=== Recipe Box ({} recipes) ===", recipes.len());
    println!();

    let max_title_len = recipes.iter().map(|r| r.title.len()).max().unwrap_or(10);

    for (i, recipe) in recipes.iter().enumerate() {
        println!(
            "{:>3}. {:<width$}  {} servings, {} ingredients  [{}]",
            i + 1,
            recipe.title,
            recipe.base_servings,
            recipe.ingredients.len(),
            recipe.id,
            width = max_title_len
        );
    }

    println!();
}

/// Display a recipe scaled to a serving count under a taste profile.
///
/// Adjusted rows carry their adjustment label and a "std:" value showing
/// what the quantity would have been without the taste profile.
pub fn display_scaled_recipe(
    recipe: &Recipe,
    servings: u32,
    taste: TasteProfile,
    scaled: &[ScaledIngredient],
) {
    println!();
    println!("=== {} ===", recipe.title);
    if !recipe.description.is_empty() {
        println!("{}", recipe.description);
    }
    println!();
    println!(
        "Batch: {} servings (base {}) | Taste: {}",
        servings,
        recipe.base_servings,
        taste.label()
    );
    println!();

    let max_name_len = scaled.iter().map(|s| s.name.len()).max().unwrap_or(10);

    for (i, ing) in scaled.iter().enumerate() {
        let mut tags = Vec::new();

        if ing.kind == ScalingKind::Constant {
            tags.push(format!("Constant up to {}", ing.effective_limit));
        }
        if let Some(label) = &ing.scaling_label {
            tags.push(label.clone());
        }
        if let Some(label) = &ing.adjustment_label {
            tags.push(label.clone());
        }

        let tags_str = if tags.is_empty() {
            String::new()
        } else {
            format!("  [{}]", tags.join(", "))
        };

        let std_str = if ing.is_adjusted {
            format!("  (std: {})", format_quantity(ing.base_scaled_quantity))
        } else {
            String::new()
        };

        println!(
            "{:>3}. {:<width$} {:>8} {:<6}{}{}",
            i + 1,
            ing.name,
            format_quantity(ing.scaled_quantity),
            ing.unit,
            tags_str,
            std_str,
            width = max_name_len
        );
    }

    if !recipe.steps.is_empty() {
        println!();
        println!("--- Steps ---");
        for (i, step) in recipe.steps.iter().enumerate() {
            println!("{:>3}. {}", i + 1, step);
        }
    }

    println!();
    println!("--- Summary ---");
    println!("Ingredients: {}", scaled.len());

    let constant = scaled
        .iter()
        .filter(|s| s.kind == ScalingKind::Constant)
        .count();
    if constant > 0 {
        println!("Constant ingredients: {} (scale only past their batch limit)", constant);
    }

    let adjusted = scaled.iter().filter(|s| s.is_adjusted).count();
    if adjusted > 0 {
        println!("Taste-adjusted ingredients: {}", adjusted);
    }

    println!();
}
