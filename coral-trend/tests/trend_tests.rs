use approx::assert_abs_diff_eq;
use coral_trend::anchors::{DEFAULT_ANCHORS, MAX_YEAR, MIN_YEAR, default_config};
use coral_trend::display::round_record;
use coral_trend::{AnchorPoint, CoralTrendError, compute_from_config, compute_trend};

#[test]
fn test_range_integrity() {
    let series = compute_trend(&DEFAULT_ANCHORS, MIN_YEAR, MAX_YEAR).unwrap();
    assert_eq!(series.len(), 45);
    assert_eq!(series.min_year(), 1980);
    assert_eq!(series.max_year(), 2024);
    for pair in series.records().windows(2) {
        assert_eq!(pair[1].year, pair[0].year + 1);
    }
}

#[test]
fn test_percentages_valid_and_complementary() {
    let series = compute_trend(&DEFAULT_ANCHORS, MIN_YEAR, MAX_YEAR).unwrap();
    for r in series.records() {
        assert!((0.0..=100.0).contains(&r.bleach_percent), "{r:?}");
        assert!((0.0..=100.0).contains(&r.remain_percent), "{r:?}");
        assert_abs_diff_eq!(r.bleach_percent + r.remain_percent, 100.0, epsilon = 1e-12);
    }
}

#[test]
fn test_anchor_reproduction() {
    let series = compute_trend(&DEFAULT_ANCHORS, MIN_YEAR, MAX_YEAR).unwrap();
    for anchor in DEFAULT_ANCHORS {
        let r = series.lookup_year(anchor.year).unwrap();
        assert_abs_diff_eq!(r.bleach_percent, anchor.bleach_percent, epsilon = 1e-9);
        assert_abs_diff_eq!(r.remain_percent, 100.0 - anchor.bleach_percent, epsilon = 1e-9);
    }
}

#[test]
fn test_interior_values() {
    let series = compute_trend(&DEFAULT_ANCHORS, MIN_YEAR, MAX_YEAR).unwrap();
    let expected = [
        (1981, 5.640944648352055),
        (1990, 12.887591294998703),
        (2000, 23.017735176151017),
        (2005, 28.197967293264327),
        (2012, 48.2456478439459),
        (2014, 63.294283441585144),
        (2020, 80.20906955698743),
        (2023, 83.73942547421726),
    ];
    for (year, bleach) in expected {
        let r = series.lookup_year(year).unwrap();
        assert_abs_diff_eq!(r.bleach_percent, bleach, epsilon = 1e-9);
    }
}

#[test]
fn test_rounded_table_values() {
    let series = compute_trend(&DEFAULT_ANCHORS, MIN_YEAR, MAX_YEAR).unwrap();
    let r = round_record(series.lookup_year(2000).unwrap());
    assert_eq!(r.bleach_percent, 23.02);
    assert_eq!(r.remain_percent, 76.98);
}

#[test]
fn test_monotone_no_overshoot() {
    let series = compute_trend(&DEFAULT_ANCHORS, MIN_YEAR, MAX_YEAR).unwrap();
    for pair in series.records().windows(2) {
        assert!(
            pair[1].bleach_percent >= pair[0].bleach_percent,
            "decrease between {} and {}",
            pair[0].year,
            pair[1].year
        );
    }
    for bracket in DEFAULT_ANCHORS.windows(2) {
        let (lo, hi) = (bracket[0], bracket[1]);
        for year in lo.year..=hi.year {
            let v = series.lookup_year(year).unwrap().bleach_percent;
            assert!(
                v >= lo.bleach_percent - 1e-9 && v <= hi.bleach_percent + 1e-9,
                "{year}: {v} outside [{}, {}]",
                lo.bleach_percent,
                hi.bleach_percent
            );
        }
    }
}

#[test]
fn test_idempotent() {
    let a = compute_trend(&DEFAULT_ANCHORS, MIN_YEAR, MAX_YEAR).unwrap();
    let b = compute_trend(&DEFAULT_ANCHORS, MIN_YEAR, MAX_YEAR).unwrap();
    assert_eq!(a, b);
    assert_eq!(compute_from_config(&default_config()).unwrap(), a);
}

#[test]
fn test_degenerate_anchors() {
    assert!(matches!(
        compute_trend(&[], MIN_YEAR, MAX_YEAR),
        Err(CoralTrendError::InvalidInput(_))
    ));
    assert!(matches!(
        compute_trend(&[AnchorPoint::new(2000, 30.0)], MIN_YEAR, MAX_YEAR),
        Err(CoralTrendError::InvalidInput(_))
    ));
    let unordered = [AnchorPoint::new(2010, 30.0), AnchorPoint::new(2000, 40.0)];
    assert!(matches!(
        compute_trend(&unordered, MIN_YEAR, MAX_YEAR),
        Err(CoralTrendError::InvalidInput(_))
    ));
}

#[test]
fn test_lookup_outside_range() {
    let series = compute_trend(&DEFAULT_ANCHORS, MIN_YEAR, MAX_YEAR).unwrap();
    assert!(matches!(
        series.lookup_year(2050),
        Err(CoralTrendError::YearNotFound {
            year: 2050,
            min: 1980,
            max: 2024
        })
    ));
    assert!(series.lookup_year(1979).is_err());
}

#[test]
fn test_extrapolation_is_clamped() {
    // Past 2024 the last piece turns down; far out it drops below zero.
    let series = compute_trend(&DEFAULT_ANCHORS, 1900, 2200).unwrap();
    assert_eq!(series.len(), 301);
    assert_eq!(series.lookup_year(1900).unwrap().bleach_percent, 100.0);
    assert_abs_diff_eq!(
        series.lookup_year(1970).unwrap().bleach_percent,
        0.9028658287917519,
        epsilon = 1e-9
    );
    assert_abs_diff_eq!(
        series.lookup_year(2030).unwrap().bleach_percent,
        72.6334417318873,
        epsilon = 1e-9
    );
    let far = series.lookup_year(2200).unwrap();
    assert_eq!(far.bleach_percent, 0.0);
    assert_eq!(far.remain_percent, 100.0);
}

#[test]
fn test_two_anchor_linear_trend() {
    let anchors = [AnchorPoint::new(2000, 10.0), AnchorPoint::new(2010, 60.0)];
    let series = compute_trend(&anchors, 2000, 2030).unwrap();
    assert_abs_diff_eq!(series.lookup_year(2004).unwrap().bleach_percent, 30.0, epsilon = 1e-9);
    assert_abs_diff_eq!(series.lookup_year(2015).unwrap().bleach_percent, 85.0, epsilon = 1e-9);
    assert_eq!(series.lookup_year(2030).unwrap().bleach_percent, 100.0);
}
