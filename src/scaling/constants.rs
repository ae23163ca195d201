/// Batch limit applied when a constant ingredient has no stored limit,
/// or a stored limit of zero.
pub const DEFAULT_CONSTANT_LIMIT: u32 = 6;

/// Default mild reduction percentage when an adjustable ingredient has
/// no taste adjustment config.
pub const DEFAULT_MILD_REDUCTION_PCT: f64 = 20.0;

/// Default spicy increase percentage.
pub const DEFAULT_SPICY_INCREASE_PCT: f64 = 30.0;

/// Default indian boost increase percentage.
pub const DEFAULT_INDIAN_BOOST_INCREASE_PCT: f64 = 60.0;
