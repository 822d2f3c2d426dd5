//! Unit tests for the indicator snapshot

use memescan::config::EngineConfig;
use memescan::indicators::{IndicatorEngine, PriceWindow};

fn window_of(len: usize) -> PriceWindow {
    let mut window = PriceWindow::default();
    for i in 0..len {
        window.push(1.0 + i as f64 * 0.01).unwrap();
    }
    window
}

#[test]
fn test_snapshot_empty_window() {
    let window = PriceWindow::default();
    assert!(IndicatorEngine::compute(&window, &EngineConfig::default()).is_none());
}

#[test]
fn test_snapshot_markers_follow_history_length() {
    let config = EngineConfig::default();

    let snapshot = IndicatorEngine::compute(&window_of(1), &config).unwrap();
    assert_eq!(snapshot.ema9(), snapshot.ema21());
    assert!(snapshot.rsi.is_none());
    assert!(snapshot.bollinger.is_none());

    let snapshot = IndicatorEngine::compute(&window_of(15), &config).unwrap();
    assert!(snapshot.rsi.is_some());
    assert!(snapshot.bollinger.is_none());

    let snapshot = IndicatorEngine::compute(&window_of(20), &config).unwrap();
    assert!(snapshot.rsi.is_some());
    assert!(snapshot.bollinger.is_some());
    assert_eq!(snapshot.samples, 20);
    assert!((snapshot.price - 1.19).abs() < 1e-12);
}
