use coral_data::{AnchorPoint, TrendConfig, TrendRecord};

use crate::anchors::{anchors_from_config, validate_anchors};
use crate::error::{CoralTrendError, Result};
use crate::pchip::Pchip;

/// Lowest and highest valid percentage.
pub const PERCENT_RANGE: (f64, f64) = (0.0, 100.0);

/// Dense per-year bleaching estimates, one record per year with no gaps.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendSeries {
    records: Vec<TrendRecord>,
}

impl TrendSeries {
    pub fn records(&self) -> &[TrendRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<TrendRecord> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false: a series covers at least one year.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn min_year(&self) -> i32 {
        self.records[0].year
    }

    pub fn max_year(&self) -> i32 {
        self.records[self.records.len() - 1].year
    }

    pub fn years(&self) -> Vec<i32> {
        self.records.iter().map(|r| r.year).collect()
    }

    pub fn bleach_percents(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.bleach_percent).collect()
    }

    pub fn remain_percents(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.remain_percent).collect()
    }

    /// Exact-match lookup by year.
    pub fn lookup_year(&self, year: i32) -> Result<&TrendRecord> {
        let (min, max) = (self.min_year(), self.max_year());
        if year < min || year > max {
            return Err(CoralTrendError::YearNotFound { year, min, max });
        }
        Ok(&self.records[(year - min) as usize])
    }
}

fn clamp_percent(value: f64) -> f64 {
    value.clamp(PERCENT_RANGE.0, PERCENT_RANGE.1)
}

/// Interpolate `anchors` over every year in `min_year..=max_year`.
///
/// Values come from a monotone cubic (PCHIP) through the anchors, clamped to
/// [0, 100]; the remaining share is `100 - bleach`. Years outside the anchor
/// span extend the end pieces before clamping.
pub fn compute_trend(anchors: &[AnchorPoint], min_year: i32, max_year: i32) -> Result<TrendSeries> {
    validate_anchors(anchors)?;
    if min_year > max_year {
        return Err(CoralTrendError::InvalidInput(format!(
            "year range is inverted: {min_year} > {max_year}"
        )));
    }

    let xs: Vec<f64> = anchors.iter().map(|a| f64::from(a.year)).collect();
    let ys: Vec<f64> = anchors.iter().map(|a| a.bleach_percent).collect();
    let interp = Pchip::new(&xs, &ys)?;

    let records: Vec<TrendRecord> = (min_year..=max_year)
        .map(|year| {
            let bleach = clamp_percent(interp.eval(f64::from(year)));
            TrendRecord {
                year,
                bleach_percent: bleach,
                remain_percent: PERCENT_RANGE.1 - bleach,
            }
        })
        .collect();

    log::debug!(
        "computed trend over {min_year}..={max_year} from {} anchors ({} records)",
        anchors.len(),
        records.len()
    );

    Ok(TrendSeries { records })
}

/// [`compute_trend`] driven by a [`TrendConfig`].
pub fn compute_from_config(config: &TrendConfig) -> Result<TrendSeries> {
    let anchors = anchors_from_config(config)?;
    compute_trend(&anchors, config.min_year, config.max_year)
}
