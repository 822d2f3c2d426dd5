//! Unit tests for numeric helpers

use memescan::common::math::{ema, ema_alpha, sma, standard_deviation};

#[test]
fn test_ema_alpha() {
    assert!((ema_alpha(9) - 0.2).abs() < 1e-12);
    assert!((ema_alpha(21) - 1.0 / 11.0).abs() < 1e-12);
}

#[test]
fn test_ema_empty_and_zero_period() {
    assert!(ema(&[], 9).is_none());
    assert!(ema(&[1.0, 2.0], 0).is_none());
}

#[test]
fn test_sma_uses_tail() {
    let values = [100.0, 1.0, 2.0, 3.0];
    assert_eq!(sma(&values, 3), Some(2.0));
    assert!(sma(&values, 5).is_none());
}

#[test]
fn test_sample_standard_deviation() {
    // mean 5, squared deviations sum to 32, sample variance 32 / 7
    let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
    let std = standard_deviation(&values, 8).unwrap();
    assert!((std - (32.0f64 / 7.0).sqrt()).abs() < 1e-12);
}

#[test]
fn test_standard_deviation_needs_two_points() {
    assert!(standard_deviation(&[1.0], 1).is_none());
}
