//! Formatting helpers for presentation layers.
//!
//! Series values are kept at full precision; everything here rounds to
//! two decimals on the way out.

use coral_data::TrendRecord;

use crate::error::{CoralTrendError, Result};

/// Round to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// A copy of `record` rounded for display.
///
/// The remaining share is derived from the rounded bleach value so the
/// pair still sums to 100.
pub fn round_record(record: &TrendRecord) -> TrendRecord {
    let bleach = round2(record.bleach_percent);
    TrendRecord {
        year: record.year,
        bleach_percent: bleach,
        remain_percent: round2(100.0 - bleach),
    }
}

pub fn format_percent(value: f64) -> String {
    format!("{:.2}%", value)
}

/// Format a GDP figure with thousands separators and two decimals.
///
/// GDP is shown alongside the trend but never enters the computation.
pub fn format_gdp(gdp: f64) -> Result<String> {
    if !gdp.is_finite() || gdp < 0.0 {
        return Err(CoralTrendError::InvalidInput(format!(
            "GDP must be a non-negative number, got {gdp}"
        )));
    }

    let fixed = format!("{:.2}", gdp);
    let (whole, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    Ok(format!("{grouped}.{frac}"))
}
