//! Dimension table adjustment for winged styles
//!
//! Wingback headboards are 4 cm wider than the standard frame, so width
//! rows in the dimension table are rewritten when any style group or option
//! mentions the keyword. This is a one-off presentation heuristic for a
//! specific furniture style, deliberately not a general rule system.

use crate::models::{DimensionRow, StyleGroup};

/// Keyword (case-insensitive) that triggers the width adjustment
pub const WINGBACK_KEYWORD: &str = "wingback";

/// Extra width a wingback frame adds, in centimetres
pub const WINGBACK_WIDTH_OFFSET_CM: f64 = 4.0;

const CM_PER_INCH: f64 = 2.54;

/// Whether any style group name or option label mentions the keyword
pub fn style_triggers_adjustment(styles: &[StyleGroup]) -> bool {
    styles.iter().any(|group| {
        group.name.to_lowercase().contains(WINGBACK_KEYWORD)
            || group
                .options
                .iter()
                .any(|opt| opt.label.to_lowercase().contains(WINGBACK_KEYWORD))
    })
}

/// Rewrite width rows when a wingback style is present.
///
/// Every cell of a row whose measurement mentions "width" has its
/// `"<num> cm (<num>\")"` value shifted by the offset, with the inch
/// equivalent recomputed. Cells that don't match the pattern, and all other
/// rows, pass through unchanged.
pub fn adjust_dimensions_for_style(rows: &[DimensionRow], styles: &[StyleGroup]) -> Vec<DimensionRow> {
    if !style_triggers_adjustment(styles) {
        return rows.to_vec();
    }
    rows.iter()
        .map(|row| {
            if !row.measurement.to_lowercase().contains("width") {
                return row.clone();
            }
            let values = row
                .values
                .iter()
                .map(|(size, value)| {
                    let adjusted = adjust_cm_value(value, WINGBACK_WIDTH_OFFSET_CM)
                        .unwrap_or_else(|| value.clone());
                    (size.clone(), adjusted)
                })
                .collect();
            DimensionRow {
                measurement: row.measurement.clone(),
                values,
            }
        })
        .collect()
}

/// Shift a `"<num> cm (<num>\")"` value by `offset_cm`, recomputing the inch
/// figure to one decimal place. Returns `None` when the value doesn't match
/// the pattern.
fn adjust_cm_value(value: &str, offset_cm: f64) -> Option<String> {
    let trimmed = value.trim();
    let (cm_part, rest) = trimmed.split_once(" cm")?;
    let cm: f64 = cm_part.trim().parse().ok()?;
    let rest = rest.trim_start();
    if !rest.starts_with('(') || !rest.contains('"') {
        return None;
    }
    let new_cm = cm + offset_cm;
    let inches = new_cm / CM_PER_INCH;
    Some(format!("{} cm ({:.1}\")", format_cm(new_cm), inches))
}

/// Print whole centimetre values without a trailing ".0"
fn format_cm(value: f64) -> String {
    if value.fract().abs() < f64::EPSILON {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
