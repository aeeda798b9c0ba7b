use coral_data::{AnchorPoint, TrendConfig};

use crate::error::{CoralTrendError, Result};

/// First year of the default trend.
pub const MIN_YEAR: i32 = 1980;

/// Last year of the default trend.
pub const MAX_YEAR: i32 = 2024;

/// Estimated global bleaching (% of reefs) at the years where it is known.
pub const DEFAULT_ANCHORS: [AnchorPoint; 5] = [
    AnchorPoint::new(1980, 5.0),
    AnchorPoint::new(1998, 21.0),
    AnchorPoint::new(2010, 37.0),
    AnchorPoint::new(2015, 68.0),
    AnchorPoint::new(2024, 84.0),
];

/// The built-in configuration: [`DEFAULT_ANCHORS`] over 1980..=2024.
pub fn default_config() -> TrendConfig {
    TrendConfig {
        years_known: DEFAULT_ANCHORS.iter().map(|a| a.year).collect(),
        bleach_known: DEFAULT_ANCHORS.iter().map(|a| a.bleach_percent).collect(),
        min_year: MIN_YEAR,
        max_year: MAX_YEAR,
    }
}

/// Pair up the parallel `years_known` / `bleach_known` lists of a config.
pub fn anchors_from_config(config: &TrendConfig) -> Result<Vec<AnchorPoint>> {
    if config.years_known.len() != config.bleach_known.len() {
        return Err(CoralTrendError::InvalidInput(format!(
            "{} known years but {} known bleach values",
            config.years_known.len(),
            config.bleach_known.len()
        )));
    }
    Ok(config
        .years_known
        .iter()
        .zip(&config.bleach_known)
        .map(|(&year, &bleach)| AnchorPoint::new(year, bleach))
        .collect())
}

/// Check that anchors can carry an interpolant.
///
/// Requires at least two points, strictly increasing years and finite
/// percentages within [0, 100].
pub fn validate_anchors(anchors: &[AnchorPoint]) -> Result<()> {
    if anchors.len() < 2 {
        return Err(CoralTrendError::InvalidInput(format!(
            "need at least 2 anchor points, got {}",
            anchors.len()
        )));
    }
    for pair in anchors.windows(2) {
        if pair[1].year <= pair[0].year {
            return Err(CoralTrendError::InvalidInput(format!(
                "anchor years must be strictly increasing ({} then {})",
                pair[0].year, pair[1].year
            )));
        }
    }
    if let Some(bad) = anchors
        .iter()
        .find(|a| !a.bleach_percent.is_finite() || !(0.0..=100.0).contains(&a.bleach_percent))
    {
        return Err(CoralTrendError::InvalidInput(format!(
            "anchor {} has bleach value {} outside [0, 100]",
            bad.year, bad.bleach_percent
        )));
    }
    Ok(())
}
