use serde::{Deserialize, Serialize};

use crate::scaling::constants::{
    DEFAULT_CONSTANT_LIMIT, DEFAULT_INDIAN_BOOST_INCREASE_PCT, DEFAULT_MILD_REDUCTION_PCT,
    DEFAULT_SPICY_INCREASE_PCT,
};

/// How an ingredient responds to changes in batch size.
///
/// Wire names match the stored recipe format: `NORMAL` ingredients scale
/// linearly with the serving ratio, `CONSTANT` ingredients keep their
/// quantity until the batch exceeds their limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScalingKind {
    #[serde(rename = "NORMAL")]
    Linear,

    #[serde(rename = "CONSTANT")]
    Constant,
}

impl Default for ScalingKind {
    fn default() -> Self {
        ScalingKind::Linear
    }
}

/// Per-ingredient taste adjustment percentages.
///
/// Each value is an independent non-negative percentage. A mild reduction
/// above 100 is allowed; the final multiplier is clamped at zero instead.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TasteAdjustment {
    #[serde(default = "default_mild_reduction")]
    pub mild_reduction_percentage: f64,

    #[serde(default = "default_spicy_increase")]
    pub spicy_increase_percentage: f64,

    #[serde(default = "default_indian_boost_increase")]
    pub indian_boost_increase_percentage: f64,
}

fn default_mild_reduction() -> f64 {
    DEFAULT_MILD_REDUCTION_PCT
}

fn default_spicy_increase() -> f64 {
    DEFAULT_SPICY_INCREASE_PCT
}

fn default_indian_boost_increase() -> f64 {
    DEFAULT_INDIAN_BOOST_INCREASE_PCT
}

impl Default for TasteAdjustment {
    fn default() -> Self {
        Self {
            mild_reduction_percentage: DEFAULT_MILD_REDUCTION_PCT,
            spicy_increase_percentage: DEFAULT_SPICY_INCREASE_PCT,
            indian_boost_increase_percentage: DEFAULT_INDIAN_BOOST_INCREASE_PCT,
        }
    }
}

/// A single recipe ingredient at the recipe's base serving count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    /// Opaque id, unique within a recipe.
    pub id: String,

    pub name: String,

    /// Amount required at `base_servings`. Non-negative.
    pub quantity: f64,

    pub unit: String,

    #[serde(rename = "type", default)]
    pub kind: ScalingKind,

    /// Batch limit for `Constant` ingredients. A stored zero or absent
    /// value means "use the default"; coercion happens at read time only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constant_limit: Option<u32>,

    #[serde(default)]
    pub is_taste_adjustable: bool,

    #[serde(
        rename = "tasteAdjustmentConfig",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub taste_adjustment: Option<TasteAdjustment>,
}

impl Ingredient {
    /// Batch limit with the stored value coerced to a usable one.
    ///
    /// Zero or absent limits fall back to the default of 6, so the limit
    /// is always safe to divide by.
    #[inline]
    pub fn effective_limit(&self) -> u32 {
        match self.constant_limit {
            Some(limit) if limit > 0 => limit,
            _ => DEFAULT_CONSTANT_LIMIT,
        }
    }

    /// Basic validation: finite non-negative quantity, non-empty name,
    /// non-negative adjustment percentages.
    pub fn is_valid(&self) -> bool {
        self.quantity.is_finite()
            && self.quantity >= 0.0
            && !self.name.trim().is_empty()
            && self.taste_adjustment.map_or(true, |c| {
                c.mild_reduction_percentage >= 0.0
                    && c.spicy_increase_percentage >= 0.0
                    && c.indian_boost_increase_percentage >= 0.0
            })
    }
}

/// A stored recipe: title, base serving count, and an ordered ingredient
/// list. Ingredient order is preserved through scaling and display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Opaque id assigned at creation.
    pub id: String,

    pub title: String,

    #[serde(default)]
    pub description: String,

    /// Serving count the ingredient quantities are written for. At least 1.
    pub base_servings: u32,

    pub ingredients: Vec<Ingredient>,

    #[serde(default)]
    pub steps: Vec<String>,

    /// Milliseconds since the Unix epoch; drives newest-first listing.
    #[serde(default)]
    pub created_at: u64,
}

impl Recipe {
    /// Validate the recipe before it enters the store.
    ///
    /// Rejects what the scaling engine cannot defend against itself:
    /// a zero base serving count, and malformed ingredients.
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Recipe title must not be empty".to_string());
        }
        if self.base_servings == 0 {
            return Err("Base servings must be at least 1".to_string());
        }
        if self.ingredients.is_empty() {
            return Err("Recipe needs at least one ingredient".to_string());
        }
        for ing in &self.ingredients {
            if !ing.is_valid() {
                return Err(format!("Invalid ingredient: {}", ing.name));
            }
        }
        Ok(())
    }

    /// Canonical key for title lookups (lowercase title).
    pub fn title_key(&self) -> String {
        self.title.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_ingredient() -> Ingredient {
        Ingredient {
            id: "ing1".to_string(),
            name: "Paneer".to_string(),
            quantity: 200.0,
            unit: "g".to_string(),
            kind: ScalingKind::Linear,
            constant_limit: None,
            is_taste_adjustable: false,
            taste_adjustment: None,
        }
    }

    fn sample_recipe() -> Recipe {
        Recipe {
            id: "r1".to_string(),
            title: "Paneer Butter Masala".to_string(),
            description: String::new(),
            base_servings: 2,
            ingredients: vec![sample_ingredient()],
            steps: vec![],
            created_at: 0,
        }
    }

    #[test]
    fn test_effective_limit_coercion() {
        let mut ing = sample_ingredient();
        ing.kind = ScalingKind::Constant;

        ing.constant_limit = None;
        assert_eq!(ing.effective_limit(), 6);

        ing.constant_limit = Some(0);
        assert_eq!(ing.effective_limit(), 6);

        ing.constant_limit = Some(4);
        assert_eq!(ing.effective_limit(), 4);
    }

    #[test]
    fn test_ingredient_validity() {
        let ing = sample_ingredient();
        assert!(ing.is_valid());

        let mut negative = sample_ingredient();
        negative.quantity = -1.0;
        assert!(!negative.is_valid());

        let mut nameless = sample_ingredient();
        nameless.name = "  ".to_string();
        assert!(!nameless.is_valid());

        let mut bad_config = sample_ingredient();
        bad_config.taste_adjustment = Some(TasteAdjustment {
            spicy_increase_percentage: -10.0,
            ..Default::default()
        });
        assert!(!bad_config.is_valid());
    }

    #[test]
    fn test_recipe_validation() {
        assert!(sample_recipe().validate().is_ok());

        let mut zero_servings = sample_recipe();
        zero_servings.base_servings = 0;
        assert!(zero_servings.validate().is_err());

        let mut empty = sample_recipe();
        empty.ingredients.clear();
        assert!(empty.validate().is_err());
    }

    #[test]
    fn test_wire_format_field_names() {
        let mut ing = sample_ingredient();
        ing.kind = ScalingKind::Constant;
        ing.constant_limit = Some(4);
        ing.is_taste_adjustable = true;
        ing.taste_adjustment = Some(TasteAdjustment::default());

        let json = serde_json::to_string(&ing).unwrap();
        assert!(json.contains("\"type\":\"CONSTANT\""));
        assert!(json.contains("\"constantLimit\":4"));
        assert!(json.contains("\"isTasteAdjustable\":true"));
        assert!(json.contains("\"tasteAdjustmentConfig\""));
        assert!(json.contains("\"mildReductionPercentage\""));
    }

    #[test]
    fn test_deserialize_with_missing_optionals() {
        let json = r#"{
            "id": "x",
            "name": "Salt",
            "quantity": 1.5,
            "unit": "tsp"
        }"#;

        let ing: Ingredient = serde_json::from_str(json).unwrap();
        assert_eq!(ing.kind, ScalingKind::Linear);
        assert!(ing.constant_limit.is_none());
        assert!(!ing.is_taste_adjustable);
        assert!(ing.taste_adjustment.is_none());
    }

    #[test]
    fn test_taste_config_partial_deserialize_uses_defaults() {
        let json = r#"{"mildReductionPercentage": 50}"#;
        let config: TasteAdjustment = serde_json::from_str(json).unwrap();

        assert_eq!(config.mild_reduction_percentage, 50.0);
        assert_eq!(config.spicy_increase_percentage, 30.0);
        assert_eq!(config.indian_boost_increase_percentage, 60.0);
    }
}
