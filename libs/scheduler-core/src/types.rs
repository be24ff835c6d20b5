//! Core types for the review scheduler.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};

/// Recall quality on the SuperMemo 0-5 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum QualityRating {
    CompleteBlackout = 0,
    Incorrect = 1,
    IncorrectEasyRecall = 2,
    CorrectDifficult = 3,
    CorrectHesitant = 4,
    Perfect = 5,
}

impl QualityRating {
    /// Every quality level, lowest first.
    pub const ALL: [QualityRating; 6] = [
        Self::CompleteBlackout,
        Self::Incorrect,
        Self::IncorrectEasyRecall,
        Self::CorrectDifficult,
        Self::CorrectHesitant,
        Self::Perfect,
    ];

    /// Numeric value (0-5).
    pub fn value(self) -> u8 {
        self as u8
    }

    /// Whether this quality counts as a successful recall (3 or above).
    pub fn is_pass(self) -> bool {
        self >= Self::CorrectDifficult
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::CompleteBlackout => "complete blackout",
            Self::Incorrect => "incorrect, remembered on seeing the answer",
            Self::IncorrectEasyRecall => "incorrect, but the answer seemed easy to recall",
            Self::CorrectDifficult => "correct with serious difficulty",
            Self::CorrectHesitant => "correct after hesitation",
            Self::Perfect => "perfect response",
        }
    }
}

impl TryFrom<u8> for QualityRating {
    type Error = ScheduleError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Self::CompleteBlackout),
            1 => Ok(Self::Incorrect),
            2 => Ok(Self::IncorrectEasyRecall),
            3 => Ok(Self::CorrectDifficult),
            4 => Ok(Self::CorrectHesitant),
            5 => Ok(Self::Perfect),
            other => Err(ScheduleError::InvalidQuality(other)),
        }
    }
}

impl From<QualityRating> for u8 {
    fn from(quality: QualityRating) -> Self {
        quality.value()
    }
}

/// Four-button rating shown in the study UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SimplifiedRating {
    Again,
    Hard,
    Good,
    Easy,
}

impl SimplifiedRating {
    /// Button order as presented to the user.
    pub const ALL: [SimplifiedRating; 4] = [Self::Again, Self::Hard, Self::Good, Self::Easy];

    /// Map onto the 0-5 quality scale. Qualities 0 and 2 are not reachable
    /// through the four buttons.
    pub fn to_quality(self) -> QualityRating {
        match self {
            Self::Again => QualityRating::Incorrect,
            Self::Hard => QualityRating::CorrectDifficult,
            Self::Good => QualityRating::CorrectHesitant,
            Self::Easy => QualityRating::Perfect,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Again => "again",
            Self::Hard => "hard",
            Self::Good => "good",
            Self::Easy => "easy",
        }
    }
}

impl FromStr for SimplifiedRating {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "again" => Ok(Self::Again),
            "hard" => Ok(Self::Hard),
            "good" => Ok(Self::Good),
            "easy" => Ok(Self::Easy),
            other => Err(ScheduleError::InvalidRating(other.to_string())),
        }
    }
}

impl fmt::Display for SimplifiedRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<SimplifiedRating> for QualityRating {
    fn from(rating: SimplifiedRating) -> Self {
        rating.to_quality()
    }
}

/// Card learning status, recomputed on every review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardStatus {
    New,
    Learning,
    Review,
    Mastered,
}

impl Default for CardStatus {
    fn default() -> Self {
        Self::New
    }
}

impl CardStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Learning => "learning",
            Self::Review => "review",
            Self::Mastered => "mastered",
        }
    }
}

impl fmt::Display for CardStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Persisted scheduling state of a single card.
///
/// Status is not part of the state: it is derived from each transition and
/// returned alongside the new state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CardScheduleState {
    pub ease_factor: f64,
    /// Days until the next review; fractional below one day.
    pub interval: f64,
    pub repetitions: u32,
    pub lapses: u32,
}

impl Default for CardScheduleState {
    fn default() -> Self {
        Self {
            ease_factor: 2.5,
            interval: 0.0,
            repetitions: 0,
            lapses: 0,
        }
    }
}

impl CardScheduleState {
    /// Build a state from raw storage columns, rejecting corrupted values.
    pub fn from_storage(
        ease_factor: f64,
        interval: f64,
        repetitions: i64,
        lapses: i64,
    ) -> Result<Self> {
        let repetitions = non_negative("repetitions", repetitions)?;
        let lapses = non_negative("lapses", lapses)?;
        let state = Self {
            ease_factor,
            interval,
            repetitions,
            lapses,
        };
        state.validate()?;
        Ok(state)
    }

    /// Check the floating point fields; counts are unsigned by construction.
    pub fn validate(&self) -> Result<()> {
        if !self.ease_factor.is_finite() {
            return Err(ScheduleError::InvalidEaseFactor(self.ease_factor));
        }
        if !self.interval.is_finite() || self.interval < 0.0 {
            return Err(ScheduleError::InvalidInterval(self.interval));
        }
        Ok(())
    }
}

fn non_negative(field: &'static str, value: i64) -> Result<u32> {
    u32::try_from(value).map_err(|_| ScheduleError::NegativeCount { field, value })
}
