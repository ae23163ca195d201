use std::path::Path;

use crate::error::Result;
use crate::models::ScaledIngredient;
use crate::scaling::format_quantity;

/// Write a scaled ingredient list to a CSV file.
///
/// `quantity` is the display-rounded value; `raw_quantity` and
/// `std_quantity` keep four decimals for spreadsheet use.
pub fn write_scaled_csv(path: &Path, scaled: &[ScaledIngredient]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "position",
        "name",
        "quantity",
        "unit",
        "raw_quantity",
        "std_quantity",
        "notes",
    ])?;

    for (i, ing) in scaled.iter().enumerate() {
        let mut notes = Vec::new();
        if let Some(label) = &ing.scaling_label {
            notes.push(label.clone());
        }
        if let Some(label) = &ing.adjustment_label {
            notes.push(label.clone());
        }

        wtr.write_record([
            (i + 1).to_string(),
            ing.name.clone(),
            format_quantity(ing.scaled_quantity),
            ing.unit.clone(),
            format!("{:.4}", ing.scaled_quantity),
            format!("{:.4}", ing.base_scaled_quantity),
            notes.join("; "),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
