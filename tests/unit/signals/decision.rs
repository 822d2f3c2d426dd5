//! Unit tests for the recommendation engine

use memescan::config::EngineConfig;
use memescan::models::signal::{
    BandCondition, ConditionCategory, ConditionSet, CrossSignal, OrderFlow, Recommendation,
    RsiCondition, TriggerCondition,
};
use memescan::signals::decision::{RecommendationEngine, StopLossTakeProfit};

fn conditions(
    ema_cross: Option<CrossSignal>,
    rsi: Option<RsiCondition>,
    bollinger: Option<BandCondition>,
) -> ConditionSet {
    ConditionSet {
        ema_cross,
        rsi,
        bollinger,
        order_flow: OrderFlow::Bearish,
    }
}

#[test]
fn test_buy_levels_and_triggers() {
    let config = EngineConfig::default();
    let set = conditions(
        Some(CrossSignal::GoldenCross),
        Some(RsiCondition::Oversold),
        Some(BandCondition::TouchLower),
    );

    match RecommendationEngine::new(&config).decide(&set, 2.0) {
        Recommendation::Buy {
            entry_price,
            take_profit,
            stop_loss,
            conditions_met,
        } => {
            assert_eq!(entry_price, 2.0);
            assert!((take_profit - 2.06).abs() < 1e-12);
            assert!((stop_loss - 1.98).abs() < 1e-12);
            assert_eq!(
                conditions_met,
                vec![
                    TriggerCondition::GoldenCross,
                    TriggerCondition::RsiOversold,
                    TriggerCondition::LowerBandTouch,
                ]
            );
        }
        other => panic!("expected BUY, got {:?}", other),
    }
}

#[test]
fn test_buy_lists_only_fired_triggers() {
    let config = EngineConfig::default();
    let set = conditions(None, None, Some(BandCondition::TouchLower));
    match RecommendationEngine::new(&config).decide(&set, 1.0) {
        Recommendation::Buy { conditions_met, .. } => {
            assert_eq!(conditions_met, vec![TriggerCondition::LowerBandTouch]);
        }
        other => panic!("expected BUY, got {:?}", other),
    }
}

#[test]
fn test_sell_triggers() {
    let config = EngineConfig::default();
    let set = conditions(
        Some(CrossSignal::DeathCross),
        Some(RsiCondition::Overbought),
        Some(BandCondition::TouchUpper),
    );
    assert_eq!(
        RecommendationEngine::new(&config).decide(&set, 3.0),
        Recommendation::Sell {
            current_price: 3.0,
            conditions_met: vec![
                TriggerCondition::DeathCross,
                TriggerCondition::RsiOverbought,
                TriggerCondition::UpperBandTouch,
            ],
        }
    );
}

#[test]
fn test_buy_takes_precedence_over_sell() {
    let config = EngineConfig::default();
    let set = conditions(
        Some(CrossSignal::DeathCross),
        Some(RsiCondition::Oversold),
        Some(BandCondition::TouchUpper),
    );
    match RecommendationEngine::new(&config).decide(&set, 1.0) {
        Recommendation::Buy { conditions_met, .. } => {
            assert_eq!(conditions_met, vec![TriggerCondition::RsiOversold]);
        }
        other => panic!("expected BUY, got {:?}", other),
    }
}

#[test]
fn test_no_signal_lists_present_categories() {
    let config = EngineConfig::default();
    let set = ConditionSet {
        ema_cross: None,
        rsi: None,
        bollinger: None,
        order_flow: OrderFlow::Bullish,
    };
    let recommendation = RecommendationEngine::new(&config).decide(&set, 1.0);
    assert_eq!(
        recommendation,
        Recommendation::NoSignal {
            conditions_met: vec![ConditionCategory::OrderFlow],
        }
    );
    assert_eq!(recommendation.action(), "NO_SIGNAL");
}

#[test]
fn test_stop_loss_take_profit_from_entry() {
    let exits = StopLossTakeProfit::from_entry(100.0, 0.03, 0.01);
    assert!((exits.take_profit - 103.0).abs() < 1e-9);
    assert!((exits.stop_loss - 99.0).abs() < 1e-9);
}

#[test]
fn test_recommendation_json_shape() {
    let recommendation = Recommendation::Sell {
        current_price: 1.5,
        conditions_met: vec![TriggerCondition::DeathCross],
    };
    let json = serde_json::to_value(&recommendation).unwrap();
    assert_eq!(json["action"], "SELL");
    assert_eq!(json["current_price"], 1.5);
    assert_eq!(json["conditions_met"][0], "death_cross");
    assert_eq!(TriggerCondition::DeathCross.to_string(), "Death Cross");
}
