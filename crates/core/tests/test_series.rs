//! Integration tests for the public approximation API
//!
//! These exercise the crate the way an embedding harness would: call the
//! entry computation, inspect the returned value, and vary the term count.

use leibniz_core::{
    Precision, SeriesApproximator, SeriesConfig, approximate_pi, approximate_pi_with,
    entry_point, remainder_bound, run, terms,
};
use std::f64::consts::PI;

#[test]
fn test_entry_point_is_close_to_pi() {
    let result = entry_point();
    assert!((result - 3.14).abs() < 0.01);
    assert!((result - PI).abs() <= 4.0 / 1601.0);
}

#[test]
fn test_repeated_calls_are_bit_identical() {
    let first = entry_point();
    for _ in 0..10 {
        assert_eq!(entry_point().to_bits(), first.to_bits());
    }
}

#[test]
fn test_accuracy_improves_with_terms() {
    let coarse = (approximate_pi_with(100) - PI).abs();
    let default = (approximate_pi() - PI).abs();
    let fine = (approximate_pi_with(100_000) - PI).abs();
    assert!(fine < default);
    assert!(default < coarse);
}

#[test]
fn test_truncation_alternates_around_pi() {
    // Odd term counts overshoot, even term counts undershoot.
    assert!(approximate_pi_with(799) > PI);
    assert!(approximate_pi_with(800) < PI);
}

#[test]
fn test_error_bound_across_counts() {
    for limit in (1..=2000).step_by(37) {
        let err = (approximate_pi_with(limit) - PI).abs();
        assert!(err <= remainder_bound(limit), "limit {}", limit);
    }
}

#[test]
fn test_terms_iterator_length() {
    assert_eq!(terms(0).count(), 0);
    assert_eq!(terms(800).count(), 800);
}

#[test]
fn test_config_from_toml_drives_approximator() {
    let config = SeriesConfig::from_toml("terms = 3").unwrap();
    let approximator = SeriesApproximator::new(config);
    assert_eq!(approximator.approximate(), approximate_pi_with(3));
}

#[test]
fn test_report_serializes_to_json() {
    let config = SeriesConfig::new()
        .with_terms(2)
        .with_precision(Precision::Single);
    let report = run(&config);
    let json = serde_json::to_value(report).unwrap();

    assert_eq!(json["config"]["terms"], 2);
    assert_eq!(json["config"]["precision"], "single");
    assert!(json["value"].as_f64().is_some());
    assert_eq!(json["bound"].as_f64(), Some(0.8));
}
