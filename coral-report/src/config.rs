use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use coral_trend::TrendConfig;
use coral_trend::anchors::default_config;

/// On-disk form of [`TrendConfig`]; missing keys fall back to the built-in anchors.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    years_known: Option<Vec<i32>>,
    bleach_known: Option<Vec<f64>>,
    min_year: Option<i32>,
    max_year: Option<i32>,
}

pub fn parse_config(content: &str) -> anyhow::Result<TrendConfig> {
    let file: ConfigFile = toml::from_str(content).context("invalid trend configuration")?;
    let defaults = default_config();
    Ok(TrendConfig {
        years_known: file.years_known.unwrap_or(defaults.years_known),
        bleach_known: file.bleach_known.unwrap_or(defaults.bleach_known),
        min_year: file.min_year.unwrap_or(defaults.min_year),
        max_year: file.max_year.unwrap_or(defaults.max_year),
    })
}

/// Load the configuration at `path`, or the built-in one when no path is given.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<TrendConfig> {
    let Some(path) = path else {
        return Ok(default_config());
    };
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    log::info!("loaded anchor configuration from {}", path.display());
    parse_config(&content).with_context(|| format!("in {}", path.display()))
}
