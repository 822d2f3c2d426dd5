//! Human-readable rendering of tick results

use std::fmt;

use chrono::{DateTime, Local};

use crate::models::signal::{Recommendation, TickReport, TickResult};

pub const NO_DATA_MESSAGE: &str = "Data unavailable, will retry next cycle.";
const INSUFFICIENT: &str = "insufficient data";

pub fn render_banner(token_address: &str, interval_seconds: u64) -> String {
    format!(
        "=== Memecoin Screener ===\nToken: {}\nPoll interval: {}s\nStrategy: EMA Cross + RSI + Bollinger Bands",
        token_address, interval_seconds
    )
}

pub fn render_tick(result: &TickResult) -> String {
    TickView {
        result,
        rendered_at: Local::now(),
    }
    .to_string()
}

/// One tick as printed to the terminal.
struct TickView<'a> {
    result: &'a TickResult,
    rendered_at: DateTime<Local>,
}

impl fmt::Display for TickView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", "=".repeat(50))?;
        writeln!(f, "{}", self.rendered_at.format("%Y-%m-%d %H:%M:%S"))?;

        match self.result {
            TickResult::NoData => writeln!(f, "{}", NO_DATA_MESSAGE),
            TickResult::Evaluated(report) => write_report(f, report),
        }
    }
}

fn write_report(f: &mut fmt::Formatter<'_>, report: &TickReport) -> fmt::Result {
    let obs = &report.observation;
    let ind = &report.indicators;

    writeln!(f, "\nPRICE ACTION:")?;
    writeln!(f, "Token: {} (on {})", obs.symbol, obs.venue)?;
    writeln!(f, "Price: ${:.8}", obs.price)?;
    writeln!(f, "24h Change: {:.1}%", obs.price_change_24h_pct)?;

    writeln!(f, "\nINDICATORS:")?;
    writeln!(f, "EMA{}: {:.8}", ind.ema_fast.period, ind.ema_fast.value)?;
    writeln!(f, "EMA{}: {:.8}", ind.ema_slow.period, ind.ema_slow.value)?;
    match ind.rsi {
        Some(rsi) => writeln!(f, "RSI: {:.2}", rsi.value)?,
        None => writeln!(f, "RSI: {}", INSUFFICIENT)?,
    }
    match ind.bollinger {
        Some(bands) => {
            writeln!(f, "BB Upper: {:.8}", bands.upper)?;
            writeln!(f, "BB Lower: {:.8}", bands.lower)?;
        }
        None => writeln!(f, "Bollinger Bands: {}", INSUFFICIENT)?,
    }

    writeln!(f, "\nMARKET DATA:")?;
    writeln!(f, "Volume: ${:.2}", obs.volume_24h)?;
    writeln!(f, "Liquidity: ${:.2}", obs.liquidity_usd)?;
    writeln!(f, "Buy Orders: {}", obs.buy_orders)?;
    writeln!(f, "Sell Orders: {}", obs.sell_orders)?;

    if !report.notes.is_empty() {
        writeln!(f, "\nSIGNALS:")?;
        for note in &report.notes {
            writeln!(f, "- {}", note)?;
        }
    }

    match &report.recommendation {
        Recommendation::Buy {
            entry_price,
            take_profit,
            stop_loss,
            conditions_met,
        } => {
            writeln!(f, "\nTRADING RECOMMENDATION:")?;
            writeln!(f, "Action: BUY")?;
            writeln!(f, "Entry: ${:.8}", entry_price)?;
            writeln!(f, "Take Profit: ${:.8}", take_profit)?;
            writeln!(f, "Stop Loss: ${:.8}", stop_loss)?;
            writeln!(f, "Conditions Met: {}", join(conditions_met))
        }
        Recommendation::Sell {
            current_price,
            conditions_met,
        } => {
            writeln!(f, "\nTRADING RECOMMENDATION:")?;
            writeln!(f, "Action: SELL")?;
            writeln!(f, "Price: ${:.8}", current_price)?;
            writeln!(f, "Conditions Met: {}", join(conditions_met))
        }
        Recommendation::NoSignal { conditions_met } => {
            writeln!(f, "\nNo active signals")?;
            writeln!(f, "Conditions Present: {}", join(conditions_met))
        }
    }
}

fn join<T: ToString>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
