use crate::models::{Ingredient, Recipe, ScaledIngredient, ScalingKind};

/// Taste profile selected by the diner.
///
/// Medium leaves every quantity untouched; the other three profiles
/// nudge taste-adjustable ingredients up or down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TasteProfile {
    Mild,
    Medium,
    Spicy,
    IndianBoost,
}

impl Default for TasteProfile {
    fn default() -> Self {
        TasteProfile::Medium
    }
}

impl TasteProfile {
    /// Selector order for prompts and CLI help.
    pub const ALL: [TasteProfile; 4] = [
        TasteProfile::Mild,
        TasteProfile::Medium,
        TasteProfile::Spicy,
        TasteProfile::IndianBoost,
    ];

    /// Parse a profile name. Anything unrecognized falls back to Medium;
    /// that is the defined behavior, not an error.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "mild" => TasteProfile::Mild,
            "medium" => TasteProfile::Medium,
            "spicy" => TasteProfile::Spicy,
            "indian_boost" | "indian-boost" | "indianboost" | "boost" => TasteProfile::IndianBoost,
            _ => TasteProfile::Medium,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TasteProfile::Mild => "Mild",
            TasteProfile::Medium => "Medium",
            TasteProfile::Spicy => "Spicy",
            TasteProfile::IndianBoost => "Indian Boost",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            TasteProfile::Mild => "Reduced spice & intensity",
            TasteProfile::Medium => "Original balanced recipe",
            TasteProfile::Spicy => "Enhanced flavors & heat",
            TasteProfile::IndianBoost => "Maximum masala punch",
        }
    }
}

/// Scale a recipe to a target serving count under a taste profile.
///
/// Pure and total over any valid recipe: no I/O, no state, identical
/// inputs always produce identical output. Output order equals
/// ingredient order. The caller is responsible for clamping the target
/// serving count to at least 1.
pub fn scale_recipe(
    recipe: &Recipe,
    target_servings: u32,
    taste: TasteProfile,
) -> Vec<ScaledIngredient> {
    recipe
        .ingredients
        .iter()
        .map(|ing| scale_ingredient(ing, recipe.base_servings, target_servings, taste))
        .collect()
}

/// Scale a single ingredient in two ordered stages: serving scaling
/// first, taste adjustment second.
fn scale_ingredient(
    ing: &Ingredient,
    base_servings: u32,
    target_servings: u32,
    taste: TasteProfile,
) -> ScaledIngredient {
    let limit = ing.effective_limit();

    // Stage 1: serving scaling. Constant ingredients hold their quantity
    // up to the batch limit, then ramp linearly from the limit rather
    // than from the base serving count.
    let (base_scaled, scaling_label) = match ing.kind {
        ScalingKind::Linear => (
            ing.quantity * target_servings as f64 / base_servings as f64,
            None,
        ),
        ScalingKind::Constant => {
            if target_servings <= limit {
                (ing.quantity, Some(format!("Constant (Batch ≤ {limit})")))
            } else {
                (
                    ing.quantity * target_servings as f64 / limit as f64,
                    Some(format!("Scaled (Batch > {limit})")),
                )
            }
        }
    };

    // Stage 2: taste adjustment.
    let multiplier = taste_multiplier(ing, taste);
    let is_adjusted = multiplier != 1.0;
    let adjustment_label = if is_adjusted {
        let pct = ((multiplier - 1.0) * 100.0).round() as i64;
        if pct > 0 {
            Some(format!("+{pct}% Intensity"))
        } else {
            Some(format!("{pct}% Intensity"))
        }
    } else {
        None
    };

    ScaledIngredient {
        id: ing.id.clone(),
        name: ing.name.clone(),
        unit: ing.unit.clone(),
        base_quantity: ing.quantity,
        kind: ing.kind,
        effective_limit: limit,
        is_taste_adjustable: ing.is_taste_adjustable,
        scaled_quantity: base_scaled * multiplier,
        base_scaled_quantity: base_scaled,
        is_adjusted,
        adjustment_label,
        scaling_label,
    }
}

/// Quantity multiplier for the selected taste profile.
///
/// Non-adjustable ingredients always get 1.0. Missing config fields fall
/// back to the stored defaults (20 / 30 / 60). The mild multiplier is
/// clamped at zero so a reduction above 100% floors the quantity instead
/// of negating it.
fn taste_multiplier(ing: &Ingredient, taste: TasteProfile) -> f64 {
    if !ing.is_taste_adjustable {
        return 1.0;
    }

    let config = ing.taste_adjustment.unwrap_or_default();

    match taste {
        TasteProfile::Mild => (1.0 - config.mild_reduction_percentage / 100.0).max(0.0),
        TasteProfile::Medium => 1.0,
        TasteProfile::Spicy => 1.0 + config.spicy_increase_percentage / 100.0,
        TasteProfile::IndianBoost => 1.0 + config.indian_boost_increase_percentage / 100.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TasteAdjustment;

    fn ingredient(name: &str, quantity: f64, kind: ScalingKind) -> Ingredient {
        Ingredient {
            id: format!("id-{name}"),
            name: name.to_string(),
            quantity,
            unit: "g".to_string(),
            kind,
            constant_limit: None,
            is_taste_adjustable: false,
            taste_adjustment: None,
        }
    }

    fn recipe(base_servings: u32, ingredients: Vec<Ingredient>) -> Recipe {
        Recipe {
            id: "r1".to_string(),
            title: "Test Curry".to_string(),
            description: String::new(),
            base_servings,
            ingredients,
            steps: vec![],
            created_at: 0,
        }
    }

    #[test]
    fn test_linear_scaling() {
        let r = recipe(2, vec![ingredient("Rice", 200.0, ScalingKind::Linear)]);
        let scaled = scale_recipe(&r, 4, TasteProfile::Medium);

        assert_eq!(scaled.len(), 1);
        assert!((scaled[0].scaled_quantity - 400.0).abs() < 1e-9);
        assert!(scaled[0].scaling_label.is_none());
        assert!(!scaled[0].is_adjusted);
    }

    #[test]
    fn test_identity_scaling_at_base_servings() {
        let r = recipe(3, vec![ingredient("Lentils", 150.0, ScalingKind::Linear)]);
        let scaled = scale_recipe(&r, 3, TasteProfile::Medium);
        assert!((scaled[0].scaled_quantity - 150.0).abs() < 1e-9);
    }

    #[test]
    fn test_constant_below_limit() {
        let mut ing = ingredient("Bay Leaf", 1.0, ScalingKind::Constant);
        ing.constant_limit = Some(4);
        let r = recipe(2, vec![ing]);

        let scaled = scale_recipe(&r, 3, TasteProfile::Medium);
        assert!((scaled[0].scaled_quantity - 1.0).abs() < 1e-9);
        assert_eq!(
            scaled[0].scaling_label.as_deref(),
            Some("Constant (Batch ≤ 4)")
        );
    }

    #[test]
    fn test_constant_above_limit_ramps_from_limit() {
        let mut ing = ingredient("Bay Leaf", 1.0, ScalingKind::Constant);
        ing.constant_limit = Some(4);
        let r = recipe(2, vec![ing]);

        // 8 servings over a limit of 4 doubles the quantity; the base
        // serving count plays no part.
        let scaled = scale_recipe(&r, 8, TasteProfile::Medium);
        assert!((scaled[0].scaled_quantity - 2.0).abs() < 1e-9);
        assert_eq!(
            scaled[0].scaling_label.as_deref(),
            Some("Scaled (Batch > 4)")
        );
    }

    #[test]
    fn test_constant_continuous_at_limit() {
        let mut ing = ingredient("Cinnamon Stick", 2.0, ScalingKind::Constant);
        ing.constant_limit = Some(5);
        let r = recipe(2, vec![ing]);

        let at_limit = scale_recipe(&r, 5, TasteProfile::Medium);
        assert!((at_limit[0].scaled_quantity - 2.0).abs() < 1e-9);

        // One past the limit starts the ramp from the limit value.
        let past_limit = scale_recipe(&r, 6, TasteProfile::Medium);
        assert!((past_limit[0].scaled_quantity - 2.0 * 6.0 / 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_constant_zero_limit_coerced_to_default() {
        let mut ing = ingredient("Pan", 1.0, ScalingKind::Constant);
        ing.constant_limit = Some(0);
        let r = recipe(2, vec![ing]);

        let scaled = scale_recipe(&r, 6, TasteProfile::Medium);
        assert_eq!(scaled[0].effective_limit, 6);
        assert!((scaled[0].scaled_quantity - 1.0).abs() < 1e-9);

        let scaled = scale_recipe(&r, 12, TasteProfile::Medium);
        assert!((scaled[0].scaled_quantity - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_mild_reduction() {
        let mut ing = ingredient("Chili Powder", 50.0, ScalingKind::Linear);
        ing.is_taste_adjustable = true;
        ing.taste_adjustment = Some(TasteAdjustment::default());
        let r = recipe(2, vec![ing]);

        let scaled = scale_recipe(&r, 2, TasteProfile::Mild);
        assert!((scaled[0].scaled_quantity - 40.0).abs() < 1e-9);
        assert!((scaled[0].base_scaled_quantity - 50.0).abs() < 1e-9);
        assert!(scaled[0].is_adjusted);
        assert_eq!(
            scaled[0].adjustment_label.as_deref(),
            Some("-20% Intensity")
        );
    }

    #[test]
    fn test_spicy_increase() {
        let mut ing = ingredient("Chili Powder", 50.0, ScalingKind::Linear);
        ing.is_taste_adjustable = true;
        ing.taste_adjustment = Some(TasteAdjustment::default());
        let r = recipe(2, vec![ing]);

        let scaled = scale_recipe(&r, 2, TasteProfile::Spicy);
        assert!((scaled[0].scaled_quantity - 65.0).abs() < 1e-9);
        assert_eq!(
            scaled[0].adjustment_label.as_deref(),
            Some("+30% Intensity")
        );
    }

    #[test]
    fn test_indian_boost_increase() {
        let mut ing = ingredient("Garam Masala", 10.0, ScalingKind::Linear);
        ing.is_taste_adjustable = true;
        ing.taste_adjustment = Some(TasteAdjustment::default());
        let r = recipe(2, vec![ing]);

        let scaled = scale_recipe(&r, 2, TasteProfile::IndianBoost);
        assert!((scaled[0].scaled_quantity - 16.0).abs() < 1e-9);
        assert_eq!(
            scaled[0].adjustment_label.as_deref(),
            Some("+60% Intensity")
        );
    }

    #[test]
    fn test_adjustable_without_config_uses_defaults() {
        let mut ing = ingredient("Pepper", 10.0, ScalingKind::Linear);
        ing.is_taste_adjustable = true;
        let r = recipe(2, vec![ing]);

        let mild = scale_recipe(&r, 2, TasteProfile::Mild);
        assert!((mild[0].scaled_quantity - 8.0).abs() < 1e-9);

        let spicy = scale_recipe(&r, 2, TasteProfile::Spicy);
        assert!((spicy[0].scaled_quantity - 13.0).abs() < 1e-9);
    }

    #[test]
    fn test_mild_multiplier_clamped_at_zero() {
        let mut ing = ingredient("Ghost Pepper", 5.0, ScalingKind::Linear);
        ing.is_taste_adjustable = true;
        ing.taste_adjustment = Some(TasteAdjustment {
            mild_reduction_percentage: 150.0,
            ..Default::default()
        });
        let r = recipe(2, vec![ing]);

        let scaled = scale_recipe(&r, 2, TasteProfile::Mild);
        assert_eq!(scaled[0].scaled_quantity, 0.0);
        assert_eq!(
            scaled[0].adjustment_label.as_deref(),
            Some("-100% Intensity")
        );
    }

    #[test]
    fn test_non_adjustable_ignores_profile() {
        let ing = ingredient("Rice", 200.0, ScalingKind::Linear);
        let r = recipe(2, vec![ing]);

        for taste in TasteProfile::ALL {
            let scaled = scale_recipe(&r, 4, taste);
            assert!((scaled[0].scaled_quantity - 400.0).abs() < 1e-9);
            assert!(!scaled[0].is_adjusted);
            assert!(scaled[0].adjustment_label.is_none());
        }
    }

    #[test]
    fn test_taste_applies_after_serving_scaling() {
        let mut ing = ingredient("Chili", 50.0, ScalingKind::Linear);
        ing.is_taste_adjustable = true;
        ing.taste_adjustment = Some(TasteAdjustment::default());
        let r = recipe(2, vec![ing]);

        let scaled = scale_recipe(&r, 4, TasteProfile::Spicy);
        assert!((scaled[0].base_scaled_quantity - 100.0).abs() < 1e-9);
        assert!((scaled[0].scaled_quantity - 130.0).abs() < 1e-9);
    }

    #[test]
    fn test_order_preserved() {
        let r = recipe(
            2,
            vec![
                ingredient("Zucchini", 1.0, ScalingKind::Linear),
                ingredient("Apple", 2.0, ScalingKind::Linear),
                ingredient("Mango", 3.0, ScalingKind::Constant),
            ],
        );

        let scaled = scale_recipe(&r, 5, TasteProfile::Spicy);
        let names: Vec<&str> = scaled.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Zucchini", "Apple", "Mango"]);
    }

    #[test]
    fn test_parse_fallback_to_medium() {
        assert_eq!(TasteProfile::parse("mild"), TasteProfile::Mild);
        assert_eq!(TasteProfile::parse("SPICY"), TasteProfile::Spicy);
        assert_eq!(TasteProfile::parse("indian-boost"), TasteProfile::IndianBoost);
        assert_eq!(TasteProfile::parse("extra-hot"), TasteProfile::Medium);
        assert_eq!(TasteProfile::parse(""), TasteProfile::Medium);
    }
}
