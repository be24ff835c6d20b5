//! Shared fixtures for scheduler integration tests.

use chrono::{DateTime, Duration, TimeZone, Utc};

use scheduler_core::{CardScheduleState, CardStatus, DueCard};

/// Fixed review time so scheduled timestamps are deterministic.
pub fn review_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 15, 8, 30, 0).unwrap()
}

pub fn card_state(
    ease_factor: f64,
    interval: f64,
    repetitions: u32,
    lapses: u32,
) -> CardScheduleState {
    CardScheduleState {
        ease_factor,
        interval,
        repetitions,
        lapses,
    }
}

/// A card due `offset_days` from the review time (negative = overdue).
pub fn scheduled_card(id: i64, offset_days: i64, status: CardStatus) -> DueCard {
    DueCard {
        id,
        next_review: Some(review_time() + Duration::days(offset_days)),
        status,
    }
}

pub fn new_card(id: i64) -> DueCard {
    DueCard {
        id,
        next_review: None,
        status: CardStatus::New,
    }
}
