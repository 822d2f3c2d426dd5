//! Cadence for the polling loop: cron when the interval maps onto clock
//! boundaries, a fixed interval otherwise.

use chrono::Utc;
use cron::Schedule;
use std::str::FromStr;
use std::time::Duration;
use tracing::info;

use crate::config::ConfigError;

const SECONDS_PER_MINUTE: u64 = 60;
const SECONDS_PER_HOUR: u64 = 3_600;
const SECONDS_PER_DAY: u64 = 86_400;

#[derive(Debug, Clone)]
enum Cadence {
    Cron { expression: String, schedule: Schedule },
    Fixed,
}

#[derive(Debug, Clone)]
pub struct PollSchedule {
    cadence: Cadence,
    interval_seconds: u64,
}

impl PollSchedule {
    /// Build a schedule firing every `interval_seconds` (0 is rejected).
    pub fn new(interval_seconds: u64) -> Result<Self, ConfigError> {
        if interval_seconds == 0 {
            return Err(ConfigError::InvalidValue {
                key: "POLL_INTERVAL_SECONDS".to_string(),
                value: "0".to_string(),
            });
        }

        let cadence = match cron_expression(interval_seconds) {
            Some(expression) => {
                let schedule =
                    Schedule::from_str(&expression).map_err(|e| ConfigError::InvalidSchedule {
                        expression: expression.clone(),
                        reason: e.to_string(),
                    })?;
                Cadence::Cron {
                    expression,
                    schedule,
                }
            }
            None => Cadence::Fixed,
        };

        let poll_schedule = Self {
            cadence,
            interval_seconds,
        };

        info!(
            interval = interval_seconds,
            cron = ?poll_schedule.expression(),
            "PollSchedule: created with interval {}s",
            interval_seconds
        );

        Ok(poll_schedule)
    }

    /// Cron expression, or `None` when the interval does not divide the
    /// enclosing minute, hour or day and a fixed interval is used instead.
    pub fn expression(&self) -> Option<&str> {
        match &self.cadence {
            Cadence::Cron { expression, .. } => Some(expression),
            Cadence::Fixed => None,
        }
    }

    pub fn interval_seconds(&self) -> u64 {
        self.interval_seconds
    }

    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_seconds)
    }

    /// Period for a fixed-interval cadence.
    pub fn fixed_interval(&self) -> Option<Duration> {
        match self.cadence {
            Cadence::Cron { .. } => None,
            Cadence::Fixed => Some(self.interval()),
        }
    }

    /// Time left until the next fire time. A fixed cadence always reports
    /// the full interval.
    pub fn next_delay(&self) -> Duration {
        match &self.cadence {
            Cadence::Cron { schedule, .. } => {
                let now = Utc::now();
                schedule
                    .upcoming(Utc)
                    .next()
                    .and_then(|next| (next - now).to_std().ok())
                    .unwrap_or_else(|| self.interval())
            }
            Cadence::Fixed => self.interval(),
        }
    }
}

/// Cron format: second minute hour day month weekday. Only intervals that
/// split their enclosing unit evenly keep an exact cadence under cron.
fn cron_expression(interval_seconds: u64) -> Option<String> {
    if interval_seconds < SECONDS_PER_MINUTE {
        return (SECONDS_PER_MINUTE % interval_seconds == 0)
            .then(|| format!("*/{} * * * * *", interval_seconds));
    }

    if interval_seconds < SECONDS_PER_HOUR {
        let minutes = interval_seconds / SECONDS_PER_MINUTE;
        return (interval_seconds % SECONDS_PER_MINUTE == 0 && SECONDS_PER_MINUTE % minutes == 0)
            .then(|| format!("0 */{} * * * *", minutes));
    }

    if interval_seconds < SECONDS_PER_DAY {
        let hours = interval_seconds / SECONDS_PER_HOUR;
        return (interval_seconds % SECONDS_PER_HOUR == 0 && 24 % hours == 0)
            .then(|| format!("0 0 */{} * * *", hours));
    }

    (interval_seconds == SECONDS_PER_DAY).then(|| "0 0 0 * * *".to_string())
}
