//! Global coral bleaching trend estimated from a handful of known years.
//!
//! [`compute_trend`] turns sparse (year, bleached %) anchors into a dense
//! per-year series using monotone cubic interpolation, clamped to a valid
//! percentage. [`TrendStore`] holds a computed series for the lifetime of a
//! dashboard session.

pub mod anchors;
pub mod display;
pub mod error;
pub mod pchip;
pub mod snapshot;
pub mod store;
pub mod trend;

pub use coral_data;
pub use coral_data::{AnchorPoint, TrendConfig, TrendRecord, TrendSnapshot};
pub use error::{CoralTrendError, Result};
pub use pchip::Pchip;
pub use snapshot::{decode_snapshot, decompress_snapshot, encode_snapshot};
pub use store::TrendStore;
pub use trend::{TrendSeries, compute_from_config, compute_trend};
