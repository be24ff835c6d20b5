//! Review scheduling core for the study app.
//!
//! Provides:
//! - SM-2 scheduler with relearning steps and mastery status
//! - Rating types (0-5 quality scale and the four-button simplified scale)
//! - Button previews and human-readable interval formatting
//! - Due-ness checks, urgency ordering and study queue assembly
//!
//! Every operation is pure: current time is passed in, nothing is stored.

pub mod algorithm;
pub mod config;
pub mod error;
pub mod format;
pub mod queue;
pub mod types;

pub use algorithm::{
    calculate_sm2, get_scheduler, initial_sm2_for_new_card, preview_intervals, PreviewIntervals,
    ReviewScheduler, SchedulingResult, Sm2,
};
pub use config::{QueueLimits, SchedulerConfig, INTERVAL_CEILING_DAYS};
pub use error::{Result, ScheduleError};
pub use format::format_interval;
pub use queue::{
    build_study_queue, is_card_due, sort_cards_by_urgency, DueCard, Schedulable, StudyQueue,
};
pub use types::{CardScheduleState, CardStatus, QualityRating, SimplifiedRating};
