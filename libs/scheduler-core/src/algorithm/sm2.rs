//! SM-2 spaced repetition algorithm.
//!
//! Based on SuperMemo 2, with a relearning step after failures, an easy bonus
//! and hard penalty on mature intervals, and a mastery status.

use chrono::{DateTime, Duration, Utc};

use super::{ReviewScheduler, SchedulingResult};
use crate::config::SchedulerConfig;
use crate::error::Result;
use crate::types::{CardScheduleState, CardStatus, QualityRating};

const MINUTES_PER_DAY: f64 = 1440.0;
const MILLIS_PER_DAY: f64 = 86_400_000.0;

fn days_to_duration(days: f64) -> Duration {
    Duration::milliseconds((days * MILLIS_PER_DAY).round() as i64)
}

/// SM-2 algorithm with configurable parameters.
#[derive(Debug, Clone, Default)]
pub struct Sm2 {
    config: SchedulerConfig,
}

impl Sm2 {
    pub fn new(config: SchedulerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// EF' = EF + (0.1 - (5 - q) * (0.08 + (5 - q) * 0.02)), clamped to the
    /// configured ease bounds.
    pub fn next_ease_factor(&self, current: f64, quality: QualityRating) -> f64 {
        let q = f64::from(quality.value());
        let delta = 0.1 - (5.0 - q) * (0.08 + (5.0 - q) * 0.02);
        (current + delta).clamp(self.config.minimum_ease, self.config.maximum_ease)
    }

    fn schedule_failure(
        &self,
        state: &CardScheduleState,
        ease_factor: f64,
        now: DateTime<Utc>,
    ) -> SchedulingResult {
        let lapses = state.lapses.saturating_add(1);
        let delay_minutes = self.config.relearning_delay_minutes(lapses);
        // validate() keeps every step within maximum_interval
        let interval = f64::from(delay_minutes) / MINUTES_PER_DAY;

        SchedulingResult {
            new_state: CardScheduleState {
                ease_factor,
                interval,
                repetitions: 0,
                lapses,
            },
            status: CardStatus::Learning,
            next_review: now + Duration::minutes(i64::from(delay_minutes)),
        }
    }

    fn schedule_success(
        &self,
        state: &CardScheduleState,
        quality: QualityRating,
        ease_factor: f64,
        now: DateTime<Utc>,
    ) -> SchedulingResult {
        let repetitions = state.repetitions.saturating_add(1);

        let interval = match repetitions {
            1 => self.config.first_interval,
            2 => self.config.second_interval,
            _ => {
                let grown = (state.interval * ease_factor).round();
                match quality {
                    QualityRating::Perfect => (grown * self.config.easy_bonus).round(),
                    QualityRating::CorrectDifficult => {
                        (grown * self.config.hard_penalty).round().max(1.0)
                    }
                    _ => grown,
                }
            }
        };
        let interval = interval.min(self.config.maximum_interval);

        let status = if interval >= self.config.mastery_interval
            || repetitions >= self.config.mastery_repetitions
        {
            CardStatus::Mastered
        } else {
            CardStatus::Review
        };

        SchedulingResult {
            new_state: CardScheduleState {
                ease_factor,
                interval,
                repetitions,
                lapses: state.lapses,
            },
            status,
            next_review: now + days_to_duration(interval),
        }
    }
}

impl ReviewScheduler for Sm2 {
    fn name(&self) -> &'static str {
        "sm2"
    }

    fn initial_state(&self) -> CardScheduleState {
        CardScheduleState {
            ease_factor: self.config.initial_ease,
            interval: 0.0,
            repetitions: 0,
            lapses: 0,
        }
    }

    fn schedule(
        &self,
        state: &CardScheduleState,
        quality: QualityRating,
        now: DateTime<Utc>,
    ) -> Result<SchedulingResult> {
        if let Err(error) = state.validate() {
            tracing::warn!(%error, "rejecting card state");
            return Err(error);
        }

        let ease_factor = self.next_ease_factor(state.ease_factor, quality);
        let result = if quality.is_pass() {
            self.schedule_success(state, quality, ease_factor, now)
        } else {
            self.schedule_failure(state, ease_factor, now)
        };

        tracing::debug!(
            quality = quality.value(),
            interval = result.new_state.interval,
            ease_factor = result.new_state.ease_factor,
            repetitions = result.new_state.repetitions,
            lapses = result.new_state.lapses,
            status = result.status.as_str(),
            "scheduled review"
        );

        Ok(result)
    }
}
