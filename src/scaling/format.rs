/// Round to a fixed number of decimal places.
fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Format a quantity for display.
///
/// Small fractional values (below 0.1) keep three decimal places so tiny
/// amounts stay readable, whole numbers drop the fraction entirely, and
/// everything else rounds to two decimals. Trailing zeros are trimmed.
/// Display only; callers keep the unrounded value for comparisons.
pub fn format_quantity(quantity: f64) -> String {
    let decimals = if quantity > 0.0 && quantity < 0.1 { 3 } else { 2 };
    let rounded = round_to(quantity, decimals);

    if rounded.fract() == 0.0 {
        return format!("{}", rounded as i64);
    }

    let text = if decimals == 3 {
        format!("{rounded:.3}")
    } else {
        format!("{rounded:.2}")
    };
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}
