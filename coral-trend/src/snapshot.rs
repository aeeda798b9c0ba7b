//! Binary snapshots of a computed trend.
//!
//! A snapshot is a postcard-encoded [`TrendSnapshot`], usually shipped inside
//! a zstd frame. Compression happens in tooling; this crate only needs to
//! decode, which the pure-Rust `ruzstd` decoder handles.

use std::io::Read;

use coral_data::TrendSnapshot;

use crate::error::{CoralTrendError, Result};

pub fn encode_snapshot(snapshot: &TrendSnapshot) -> Result<Vec<u8>> {
    postcard::to_allocvec(snapshot)
        .map_err(|e| CoralTrendError::DataError(format!("snapshot encoding failed: {e}")))
}

pub fn decode_snapshot(bytes: &[u8]) -> Result<TrendSnapshot> {
    postcard::from_bytes(bytes)
        .map_err(|e| CoralTrendError::DataError(format!("snapshot decoding failed: {e}")))
}

/// Decode a zstd-compressed snapshot.
pub fn decompress_snapshot(compressed: &[u8]) -> Result<TrendSnapshot> {
    let mut decoder = ruzstd::decoding::StreamingDecoder::new(compressed)
        .map_err(|e| CoralTrendError::DataError(format!("invalid zstd frame: {e}")))?;
    let mut decompressed = Vec::new();
    decoder
        .read_to_end(&mut decompressed)
        .map_err(|e| CoralTrendError::DataError(format!("zstd decompression failed: {e}")))?;
    decode_snapshot(&decompressed)
}
