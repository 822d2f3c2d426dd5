//! Priming and polling loop around a single signal engine

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::time::{Instant, Interval, MissedTickBehavior};
use tracing::{info, warn};

use crate::config::ScreenerConfig;
use crate::core::scheduler::PollSchedule;
use crate::models::signal::TickResult;
use crate::services::market_data::MarketDataProvider;
use crate::signals::engine::{SignalEngine, MIN_PRIMING_SAMPLES};

/// Configuration for the polling runtime
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub priming_samples: usize,
    pub priming_delay: Duration,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            priming_samples: MIN_PRIMING_SAMPLES,
            priming_delay: Duration::from_secs(1),
        }
    }
}

impl From<&ScreenerConfig> for RuntimeConfig {
    fn from(config: &ScreenerConfig) -> Self {
        Self {
            priming_samples: config.priming_samples,
            priming_delay: Duration::from_millis(config.priming_delay_ms),
        }
    }
}

pub struct ScreenerRuntime {
    provider: Arc<dyn MarketDataProvider + Send + Sync>,
    engine: SignalEngine,
    config: RuntimeConfig,
}

impl ScreenerRuntime {
    pub fn new(
        provider: Arc<dyn MarketDataProvider + Send + Sync>,
        engine: SignalEngine,
        config: RuntimeConfig,
    ) -> Self {
        Self {
            provider,
            engine,
            config,
        }
    }

    pub fn engine(&self) -> &SignalEngine {
        &self.engine
    }

    /// Seed the engine's price history. Returns how many closes were seeded.
    pub async fn prime(&mut self, token_address: &str) -> usize {
        let mut seeded = 0;

        for attempt in 0..self.config.priming_samples {
            match self.provider.fetch_observation(token_address).await {
                Ok(Some(record)) => match self.engine.seed(&record) {
                    Ok(()) => seeded += 1,
                    Err(e) => warn!(error = %e, "ScreenerRuntime: skipped invalid priming observation"),
                },
                Ok(None) => {}
                Err(e) => warn!(error = %e, attempt, "ScreenerRuntime: priming fetch failed"),
            }

            if attempt + 1 < self.config.priming_samples && !self.config.priming_delay.is_zero() {
                tokio::time::sleep(self.config.priming_delay).await;
            }
        }

        if seeded < MIN_PRIMING_SAMPLES {
            warn!(
                seeded,
                required = MIN_PRIMING_SAMPLES,
                "ScreenerRuntime: history below {} closes, RSI/Bollinger will report insufficient data",
                MIN_PRIMING_SAMPLES
            );
        }
        info!(seeded, token = %token_address, "ScreenerRuntime: priming finished");
        seeded
    }

    /// One poll: fetch, then evaluate. Fetch failures and rejected
    /// observations come back as `NoData`.
    pub async fn run_cycle(&mut self, token_address: &str) -> TickResult {
        let record = match self.provider.fetch_observation(token_address).await {
            Ok(record) => record,
            Err(e) => {
                warn!(error = %e, token = %token_address, "ScreenerRuntime: fetch failed");
                None
            }
        };

        match self.engine.process_tick(record) {
            Ok(result) => result,
            Err(e) => {
                warn!(error = %e, token = %token_address, "ScreenerRuntime: rejected observation");
                TickResult::NoData
            }
        }
    }

    /// Poll on `schedule` until `shutdown` resolves, handing every result to
    /// `on_tick`.
    pub async fn run<S, F>(
        &mut self,
        token_address: &str,
        schedule: &PollSchedule,
        shutdown: S,
        mut on_tick: F,
    ) where
        S: Future<Output = ()>,
        F: FnMut(&TickResult),
    {
        tokio::pin!(shutdown);
        info!(
            token = %token_address,
            cron = ?schedule.expression(),
            interval = schedule.interval_seconds(),
            "ScreenerRuntime: polling started"
        );

        let mut ticker = schedule.fixed_interval().map(|period| {
            let mut ticker = tokio::time::interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            ticker
        });

        loop {
            let result = self.run_cycle(token_address).await;
            on_tick(&result);

            tokio::select! {
                _ = &mut shutdown => {
                    info!("ScreenerRuntime: shutdown requested");
                    break;
                }
                _ = wait_for_next(schedule, ticker.as_mut()) => {}
            }
        }
    }
}

async fn wait_for_next(schedule: &PollSchedule, ticker: Option<&mut Interval>) {
    match ticker {
        Some(ticker) => {
            ticker.tick().await;
        }
        None => tokio::time::sleep(schedule.next_delay()).await,
    }
}
