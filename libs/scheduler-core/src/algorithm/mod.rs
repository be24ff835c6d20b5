//! Spaced repetition scheduling.

pub mod sm2;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::format::format_interval;
use crate::types::{CardScheduleState, CardStatus, QualityRating, SimplifiedRating};

pub use sm2::Sm2;

/// Outcome of scheduling a card after one review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchedulingResult {
    pub new_state: CardScheduleState,
    pub status: CardStatus,
    pub next_review: DateTime<Utc>,
}

impl SchedulingResult {
    /// State to persist and feed into the next review.
    pub fn next_state(&self) -> CardScheduleState {
        self.new_state
    }
}

/// Formatted interval for each of the four rating buttons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewIntervals {
    pub again: String,
    pub hard: String,
    pub good: String,
    pub easy: String,
}

impl PreviewIntervals {
    pub fn get(&self, rating: SimplifiedRating) -> &str {
        match rating {
            SimplifiedRating::Again => &self.again,
            SimplifiedRating::Hard => &self.hard,
            SimplifiedRating::Good => &self.good,
            SimplifiedRating::Easy => &self.easy,
        }
    }
}

/// Trait for review schedulers.
pub trait ReviewScheduler: Send + Sync {
    /// Scheduler identifier.
    fn name(&self) -> &'static str;

    /// State of a card that has never been reviewed.
    fn initial_state(&self) -> CardScheduleState;

    /// Calculate the next state after a review. The input is never modified.
    fn schedule(
        &self,
        state: &CardScheduleState,
        quality: QualityRating,
        now: DateTime<Utc>,
    ) -> Result<SchedulingResult>;

    /// Schedule the first review of a new card.
    fn schedule_new_card(
        &self,
        quality: QualityRating,
        now: DateTime<Utc>,
    ) -> Result<SchedulingResult> {
        self.schedule(&self.initial_state(), quality, now)
    }

    /// What each button would schedule, without committing to any of them.
    fn preview_intervals(
        &self,
        state: &CardScheduleState,
        now: DateTime<Utc>,
    ) -> Result<PreviewIntervals> {
        let preview = |rating: SimplifiedRating| -> Result<String> {
            let result = self.schedule(state, rating.to_quality(), now)?;
            Ok(format_interval(result.new_state.interval))
        };

        Ok(PreviewIntervals {
            again: preview(SimplifiedRating::Again)?,
            hard: preview(SimplifiedRating::Hard)?,
            good: preview(SimplifiedRating::Good)?,
            easy: preview(SimplifiedRating::Easy)?,
        })
    }

    /// Schedule many independent reviews. Every input is validated first, so
    /// either all results are returned or none.
    fn schedule_batch(
        &self,
        reviews: &[(CardScheduleState, QualityRating)],
        now: DateTime<Utc>,
    ) -> Result<Vec<SchedulingResult>> {
        for (state, _) in reviews {
            state.validate()?;
        }
        tracing::trace!(count = reviews.len(), "scheduling batch");
        reviews
            .iter()
            .map(|(state, quality)| self.schedule(state, *quality, now))
            .collect()
    }
}

/// Get scheduler by name.
pub fn get_scheduler(name: &str) -> Option<Box<dyn ReviewScheduler>> {
    match name {
        "sm2" => Some(Box::new(Sm2::default())),
        _ => None,
    }
}

/// Schedule a review with the default SM-2 parameters.
pub fn calculate_sm2(
    quality: QualityRating,
    state: &CardScheduleState,
    now: DateTime<Utc>,
) -> Result<SchedulingResult> {
    Sm2::default().schedule(state, quality, now)
}

/// First review of a never-seen card with the default SM-2 parameters.
pub fn initial_sm2_for_new_card(
    quality: QualityRating,
    now: DateTime<Utc>,
) -> Result<SchedulingResult> {
    Sm2::default().schedule_new_card(quality, now)
}

/// Button previews with the default SM-2 parameters.
pub fn preview_intervals(
    state: &CardScheduleState,
    now: DateTime<Utc>,
) -> Result<PreviewIntervals> {
    Sm2::default().preview_intervals(state, now)
}
