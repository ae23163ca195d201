use crate::models::ScalingKind;

/// One row of a scaled recipe view.
///
/// Built fresh on every scaling pass and never persisted. Both the final
/// quantity and the pre-adjustment quantity are kept unrounded so the
/// display layer can show a "std:" comparison when a taste profile
/// changed the value.
#[derive(Debug, Clone)]
pub struct ScaledIngredient {
    pub id: String,
    pub name: String,
    pub unit: String,

    /// Quantity at the recipe's base serving count, untouched.
    pub base_quantity: f64,

    pub kind: ScalingKind,

    /// Batch limit after read-time coercion.
    pub effective_limit: u32,

    pub is_taste_adjustable: bool,

    /// Final quantity after serving scaling and taste adjustment.
    pub scaled_quantity: f64,

    /// Quantity after serving scaling but before taste adjustment.
    pub base_scaled_quantity: f64,

    /// Whether the taste profile changed this ingredient's quantity.
    pub is_adjusted: bool,

    /// Set when adjusted, e.g. "+30% Intensity".
    pub adjustment_label: Option<String>,

    /// Set for constant-kind ingredients only.
    pub scaling_label: Option<String>,
}
