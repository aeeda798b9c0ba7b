#![no_std]

extern crate alloc;

use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

/// A known (year, bleached percentage) observation used to constrain the trend.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnchorPoint {
    pub year: i32,
    pub bleach_percent: f64,
}

impl AnchorPoint {
    pub const fn new(year: i32, bleach_percent: f64) -> Self {
        AnchorPoint {
            year,
            bleach_percent,
        }
    }
}

/// One year of the derived trend.
///
/// `bleach_percent` and `remain_percent` always sum to 100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendRecord {
    pub year: i32,
    pub bleach_percent: f64,
    pub remain_percent: f64,
}

/// Anchor configuration: parallel known years/values and the output year range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendConfig {
    pub years_known: Vec<i32>,
    pub bleach_known: Vec<f64>,
    pub min_year: i32,
    pub max_year: i32,
}

/// A computed series together with the configuration it was derived from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendSnapshot {
    pub config: TrendConfig,
    pub records: Vec<TrendRecord>,
}
