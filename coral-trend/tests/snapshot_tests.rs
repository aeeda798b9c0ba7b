use coral_trend::{
    CoralTrendError, TrendStore, decompress_snapshot, encode_snapshot,
};

#[test]
fn test_decompress_zstd_snapshot() {
    let snapshot = TrendStore::new().snapshot();
    let encoded = encode_snapshot(&snapshot).unwrap();
    let compressed = zstd::encode_all(&encoded[..], 19).unwrap();

    let decoded = decompress_snapshot(&compressed).unwrap();
    assert_eq!(decoded, snapshot);

    let store = TrendStore::from_snapshot(decoded).unwrap();
    assert_eq!(store.year_range(), (1980, 2024));
}

#[test]
fn test_decompress_uncompressed_bytes_fails() {
    let encoded = encode_snapshot(&TrendStore::new().snapshot()).unwrap();
    assert!(matches!(
        decompress_snapshot(&encoded),
        Err(CoralTrendError::DataError(_))
    ));
}

#[test]
fn test_decompress_truncated_frame_fails() {
    let encoded = encode_snapshot(&TrendStore::new().snapshot()).unwrap();
    let compressed = zstd::encode_all(&encoded[..], 3).unwrap();
    let truncated = &compressed[..compressed.len() / 2];
    assert!(decompress_snapshot(truncated).is_err());
}
