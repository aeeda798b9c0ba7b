//! WASM bindings for the coral bleaching dashboard.
//!
//! The JavaScript side owns widgets and chart drawing; these functions hand
//! it the trend data. Build with:
//! ```sh
//! wasm-pack build -p coral-wasm
//! ```

use js_sys::{Array, Object, Reflect};
use wasm_bindgen::prelude::*;

use coral_trend::display::{self, round_record};
use coral_trend::{AnchorPoint, TrendRecord, TrendStore};

fn store() -> TrendStore {
    TrendStore::new()
}

fn to_js(e: coral_trend::CoralTrendError) -> JsError {
    JsError::new(&e.to_string())
}

fn set_field(obj: &Object, key: &str, value: JsValue) -> Result<(), JsError> {
    Reflect::set(obj, &JsValue::from_str(key), &value)
        .map(|_| ())
        .map_err(|_| JsError::new(&format!("failed to set field '{key}'")))
}

/// `{year, bleachPercent, remainPercent}`, rounded for display.
fn record_to_js(record: &TrendRecord) -> Result<Object, JsError> {
    let rounded = round_record(record);
    let obj = Object::new();
    set_field(&obj, "year", JsValue::from(rounded.year))?;
    set_field(&obj, "bleachPercent", JsValue::from(rounded.bleach_percent))?;
    set_field(&obj, "remainPercent", JsValue::from(rounded.remain_percent))?;
    Ok(obj)
}

// ── Series for charting ──

/// Returns `[min_year, max_year]` for bounding the year selector.
#[wasm_bindgen]
pub fn year_range() -> Vec<i32> {
    let (min, max) = store().year_range();
    vec![min, max]
}

#[wasm_bindgen]
pub fn trend_years() -> Vec<i32> {
    store().series().years()
}

/// Bleached share (%) per year, full precision.
#[wasm_bindgen]
pub fn bleach_series() -> Vec<f64> {
    store().series().bleach_percents()
}

/// Remaining coral share (%) per year, full precision.
#[wasm_bindgen]
pub fn remain_series() -> Vec<f64> {
    store().series().remain_percents()
}

// ── Table rows ──

/// Returns the entry for the selected year.
#[wasm_bindgen]
pub fn year_entry(year: i32) -> Result<Object, JsError> {
    let store = store();
    let record = store.lookup_year(year).map_err(to_js)?;
    record_to_js(record)
}

/// Returns every year as a table row.
#[wasm_bindgen]
pub fn trend_table() -> Result<Array, JsError> {
    let rows = Array::new();
    for record in store().series().records() {
        let row = record_to_js(record)?;
        rows.push(&row);
    }
    Ok(rows)
}

// ── Custom anchors ──

/// Bleached share (%) per year in `min_year..=max_year` for custom anchors.
///
/// `years` and `bleach` are parallel arrays of known observations.
#[wasm_bindgen]
pub fn compute_custom_trend(
    years: &[i32],
    bleach: &[f64],
    min_year: i32,
    max_year: i32,
) -> Result<Vec<f64>, JsError> {
    if years.len() != bleach.len() {
        return Err(JsError::new(&format!(
            "{} years but {} bleach values",
            years.len(),
            bleach.len()
        )));
    }
    let anchors: Vec<AnchorPoint> = years
        .iter()
        .zip(bleach)
        .map(|(&year, &value)| AnchorPoint::new(year, value))
        .collect();
    coral_trend::compute_trend(&anchors, min_year, max_year)
        .map(|series| series.bleach_percents())
        .map_err(to_js)
}

// ── GDP variant ──

/// Formats a GDP figure for display next to the trend.
#[wasm_bindgen]
pub fn format_gdp(gdp: f64) -> Result<String, JsError> {
    display::format_gdp(gdp).map_err(to_js)
}
