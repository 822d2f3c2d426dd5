//! Market scenarios run through a fresh engine

use memescan::models::observation::ObservationRecord;
use memescan::models::signal::{
    BandCondition, ConditionCategory, CrossSignal, OrderFlow, Recommendation, RsiCondition,
    TickReport, TriggerCondition,
};
use memescan::signals::engine::SignalEngine;

fn observation(price: f64, buy_orders: u64, sell_orders: u64) -> ObservationRecord {
    ObservationRecord::new(price, 25_000.0, 80_000.0, 0.0, buy_orders, sell_orders, "WIF", "orca")
        .expect("valid observation")
}

fn run(engine: &mut SignalEngine, prices: &[f64]) -> Vec<TickReport> {
    prices
        .iter()
        .map(|&price| {
            let result = engine.process_tick(Some(observation(price, 0, 0))).unwrap();
            result.report().cloned().expect("evaluated tick")
        })
        .collect()
}

#[test]
fn test_flat_prices() {
    let mut engine = SignalEngine::default();
    let reports = run(&mut engine, &[1.0; 21]);

    for (i, report) in reports.iter().enumerate() {
        let samples = i + 1;
        assert!((report.indicators.ema9() - 1.0).abs() < 1e-12);
        assert!((report.indicators.ema21() - 1.0).abs() < 1e-12);
        assert_eq!(report.indicators.rsi.is_some(), samples > 14, "sample {}", samples);
        assert_eq!(report.indicators.bollinger.is_some(), samples >= 20);
    }

    // no losses in a flat series
    let last = reports.last().unwrap();
    assert_eq!(last.indicators.rsi_value(), Some(100.0));
    // a zero-width band puts the price on the lower band
    assert_eq!(last.conditions.bollinger, Some(BandCondition::TouchLower));

    let next = engine
        .process_tick(Some(observation(1.01, 0, 0)))
        .unwrap();
    assert_eq!(next.report().unwrap().indicators.rsi_value(), Some(100.0));
}

#[test]
fn test_strictly_increasing_prices() {
    let mut engine = SignalEngine::default();
    let prices: Vec<f64> = (0..25).map(|i| 1.0 + i as f64 * 0.001).collect();
    let reports = run(&mut engine, &prices);

    assert!(reports
        .iter()
        .all(|r| r.conditions.ema_cross != Some(CrossSignal::DeathCross)));
    assert_eq!(reports[0].conditions.ema_cross, None);
    assert_eq!(reports[1].conditions.ema_cross, Some(CrossSignal::GoldenCross));
    assert!(matches!(reports[1].recommendation, Recommendation::Buy { .. }));

    for report in &reports[14..] {
        assert_eq!(report.indicators.rsi_value(), Some(100.0));
        assert_eq!(report.conditions.rsi, Some(RsiCondition::Overbought));
    }

    let last = reports.last().unwrap();
    assert_eq!(last.conditions.bollinger, Some(BandCondition::TouchUpper));
    assert_eq!(
        last.recommendation,
        Recommendation::Sell {
            current_price: *prices.last().unwrap(),
            conditions_met: vec![
                TriggerCondition::RsiOverbought,
                TriggerCondition::UpperBandTouch,
            ],
        }
    );
}

#[test]
fn test_order_flow_alone_never_triggers() {
    let mut engine = SignalEngine::default();
    let result = engine
        .process_tick(Some(observation(0.0042, 50, 10)))
        .unwrap();
    let report = result.report().unwrap();

    assert_eq!(report.conditions.ema_cross, None);
    assert_eq!(report.conditions.rsi, None);
    assert_eq!(report.conditions.bollinger, None);
    assert_eq!(report.conditions.order_flow, OrderFlow::Bullish);
    assert_eq!(
        serde_json::to_value(&report.conditions).unwrap(),
        serde_json::json!({ "order_flow": "BULLISH" })
    );

    match &report.recommendation {
        Recommendation::NoSignal { conditions_met } => {
            assert_eq!(conditions_met, &vec![ConditionCategory::OrderFlow]);
            assert_eq!(conditions_met[0].as_str(), "order_flow");
        }
        other => panic!("expected no signal, got {:?}", other),
    }
}

#[test]
fn test_sharp_drop_after_range_recommends_buy() {
    let mut engine = SignalEngine::default();
    let mut prices: Vec<f64> = (0..25)
        .map(|i| if i % 2 == 0 { 1.00 } else { 1.02 })
        .collect();
    prices.push(0.90);
    let reports = run(&mut engine, &prices);
    let last = reports.last().unwrap();

    assert_eq!(last.conditions.bollinger, Some(BandCondition::TouchLower));
    match &last.recommendation {
        Recommendation::Buy {
            entry_price,
            conditions_met,
            ..
        } => {
            assert_eq!(*entry_price, 0.90);
            assert!(conditions_met.contains(&TriggerCondition::LowerBandTouch));
        }
        other => panic!("expected BUY, got {:?}", other),
    }
}
