//! Scheduler and study-queue configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};

/// Largest accepted `maximum_interval`, in days. Keeps `now + interval`
/// inside chrono's date range.
pub const INTERVAL_CEILING_DAYS: f64 = 36_500.0;

const MINUTES_PER_DAY: f64 = 1440.0;

/// Tunable constants of the SM-2 scheduler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    pub initial_ease: f64,
    pub minimum_ease: f64,
    pub maximum_ease: f64,
    /// Upper bound for any scheduled interval, in days.
    pub maximum_interval: f64,
    /// Delay ladder after a failed review, in minutes. The n-th lapse uses
    /// entry n-1, and the last entry repeats once the ladder is exhausted.
    pub relearning_steps_minutes: Vec<u32>,
    pub first_interval: f64,
    pub second_interval: f64,
    pub easy_bonus: f64,
    pub hard_penalty: f64,
    pub mastery_interval: f64,
    pub mastery_repetitions: u32,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            initial_ease: 2.5,
            minimum_ease: 1.3,
            maximum_ease: 3.0,
            maximum_interval: 365.0,
            relearning_steps_minutes: vec![10],
            first_interval: 1.0,
            second_interval: 6.0,
            easy_bonus: 1.3,
            hard_penalty: 0.8,
            mastery_interval: 21.0,
            mastery_repetitions: 5,
        }
    }
}

impl SchedulerConfig {
    /// Parse a JSON document; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ScheduleError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: &str| -> Result<()> { Err(ScheduleError::InvalidConfig(msg.to_string())) };

        let floats = [
            self.initial_ease,
            self.minimum_ease,
            self.maximum_ease,
            self.maximum_interval,
            self.first_interval,
            self.second_interval,
            self.easy_bonus,
            self.hard_penalty,
            self.mastery_interval,
        ];
        if floats.iter().any(|v| !v.is_finite()) {
            return invalid("values must be finite");
        }
        if self.minimum_ease <= 0.0 || self.minimum_ease > self.maximum_ease {
            return invalid("ease bounds must satisfy 0 < minimum_ease <= maximum_ease");
        }
        if self.initial_ease < self.minimum_ease || self.initial_ease > self.maximum_ease {
            return invalid("initial_ease must lie within the ease bounds");
        }
        if self.maximum_interval <= 0.0 || self.maximum_interval > INTERVAL_CEILING_DAYS {
            return invalid("maximum_interval must be positive and at most 36500 days");
        }
        if self.first_interval <= 0.0 || self.second_interval <= 0.0 {
            return invalid("success intervals must be positive");
        }
        if self.easy_bonus <= 0.0 || self.hard_penalty <= 0.0 {
            return invalid("multipliers must be positive");
        }
        if self.relearning_steps_minutes.is_empty() {
            return invalid("relearning_steps_minutes must not be empty");
        }
        if self.relearning_steps_minutes.contains(&0) {
            return invalid("relearning steps must be positive");
        }
        let longest_step = self.relearning_steps_minutes.iter().copied().max().unwrap_or(0);
        if f64::from(longest_step) / MINUTES_PER_DAY > self.maximum_interval {
            return invalid("relearning steps must not exceed maximum_interval");
        }
        Ok(())
    }

    /// Relearning delay for the given (already incremented) lapse count.
    /// The config must have passed `validate`, so the table is non-empty.
    pub(crate) fn relearning_delay_minutes(&self, lapses: u32) -> u32 {
        let last = self.relearning_steps_minutes.len().saturating_sub(1);
        let index = (lapses.saturating_sub(1) as usize).min(last);
        self.relearning_steps_minutes[index]
    }
}

/// Daily limits applied when building a study queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueueLimits {
    pub new_cards_per_day: u32,
    pub reviews_per_day: u32,
}

impl Default for QueueLimits {
    fn default() -> Self {
        Self {
            new_cards_per_day: 20,
            reviews_per_day: 200,
        }
    }
}
