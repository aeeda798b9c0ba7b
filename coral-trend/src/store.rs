use std::borrow::Cow;
use std::sync::OnceLock;

use coral_data::{TrendConfig, TrendRecord, TrendSnapshot};

use crate::anchors::default_config;
use crate::error::{CoralTrendError, Result};
use crate::trend::{TrendSeries, compute_from_config};

/// Largest per-year difference tolerated when checking a snapshot.
const SNAPSHOT_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Clone)]
struct Session {
    config: TrendConfig,
    series: TrendSeries,
}

impl Session {
    fn compute(config: TrendConfig) -> Result<Self> {
        let series = compute_from_config(&config)?;
        Ok(Session { config, series })
    }
}

static DEFAULT_SESSION: OnceLock<Session> = OnceLock::new();

fn default_session() -> &'static Session {
    DEFAULT_SESSION.get_or_init(|| {
        log::debug!("computing default coral bleaching trend");
        Session::compute(default_config()).expect("built-in anchors are valid")
    })
}

/// Read-only trend state for a dashboard session.
///
/// The series is derived once from its configuration and only recomputed
/// when the configuration changes. [`TrendStore::new`] is cheap: the default
/// series is computed on first use and shared by every handle.
#[derive(Debug, Clone)]
pub struct TrendStore {
    session: Cow<'static, Session>,
}

impl TrendStore {
    pub fn new() -> Self {
        TrendStore {
            session: Cow::Borrowed(default_session()),
        }
    }

    pub fn from_config(config: TrendConfig) -> Result<Self> {
        Ok(TrendStore {
            session: Cow::Owned(Session::compute(config)?),
        })
    }

    /// Rebuild a store from a snapshot, verifying its records.
    ///
    /// The series is recomputed from the embedded configuration; a snapshot
    /// whose records disagree with it is rejected.
    pub fn from_snapshot(snapshot: TrendSnapshot) -> Result<Self> {
        let store = Self::from_config(snapshot.config)?;
        let expected = store.series().records();
        if expected.len() != snapshot.records.len() {
            return Err(CoralTrendError::DataError(format!(
                "snapshot holds {} records, configuration yields {}",
                snapshot.records.len(),
                expected.len()
            )));
        }
        if let Some(bad) = expected
            .iter()
            .zip(&snapshot.records)
            .find(|(want, got)| !records_match(want, got))
        {
            return Err(CoralTrendError::DataError(format!(
                "snapshot record for {} does not match its configuration",
                bad.1.year
            )));
        }
        Ok(store)
    }

    pub fn config(&self) -> &TrendConfig {
        &self.session.config
    }

    pub fn series(&self) -> &TrendSeries {
        &self.session.series
    }

    /// Inclusive `(min_year, max_year)` of the series.
    pub fn year_range(&self) -> (i32, i32) {
        (self.series().min_year(), self.series().max_year())
    }

    pub fn lookup_year(&self, year: i32) -> Result<&TrendRecord> {
        self.series().lookup_year(year)
    }

    /// Replace the configuration, recomputing only if it changed.
    ///
    /// Returns whether the series was recomputed. On error the store keeps
    /// its previous state.
    pub fn reconfigure(&mut self, config: TrendConfig) -> Result<bool> {
        if config == self.session.config {
            return Ok(false);
        }
        self.session = Cow::Owned(Session::compute(config)?);
        log::debug!(
            "trend recomputed for {}..={}",
            self.session.config.min_year,
            self.session.config.max_year
        );
        Ok(true)
    }

    pub fn snapshot(&self) -> TrendSnapshot {
        TrendSnapshot {
            config: self.session.config.clone(),
            records: self.session.series.records().to_vec(),
        }
    }
}

impl Default for TrendStore {
    fn default() -> Self {
        Self::new()
    }
}

fn records_match(want: &TrendRecord, got: &TrendRecord) -> bool {
    want.year == got.year
        && (want.bleach_percent - got.bleach_percent).abs() <= SNAPSHOT_TOLERANCE
        && (want.remain_percent - got.remain_percent).abs() <= SNAPSHOT_TOLERANCE
}
