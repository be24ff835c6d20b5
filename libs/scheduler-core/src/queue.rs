//! Due-ness checks, urgency ordering and study queue assembly.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::QueueLimits;
use crate::types::CardStatus;

/// Anything that carries a next review time and a status.
pub trait Schedulable {
    fn next_review(&self) -> Option<DateTime<Utc>>;
    fn status(&self) -> CardStatus;
}

/// Minimal card record used for queue ordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DueCard {
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_review: Option<DateTime<Utc>>,
    pub status: CardStatus,
}

impl Schedulable for DueCard {
    fn next_review(&self) -> Option<DateTime<Utc>> {
        self.next_review
    }

    fn status(&self) -> CardStatus {
        self.status
    }
}

/// Study queue containing cards to study.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyQueue<T> {
    pub new_cards: Vec<T>,
    pub review_cards: Vec<T>,
    pub new_remaining: usize,
    pub review_remaining: usize,
}

/// A card with no scheduled review is always due.
pub fn is_card_due(next_review: Option<DateTime<Utc>>, now: DateTime<Utc>) -> bool {
    match next_review {
        Some(due) => due <= now,
        None => true,
    }
}

/// Order cards by urgency: new cards first, then by due date ascending.
/// Cards without a due date count as due `now`. The sort is stable and the
/// input is left untouched.
pub fn sort_cards_by_urgency<T>(cards: &[T], now: DateTime<Utc>) -> Vec<T>
where
    T: Schedulable + Clone,
{
    let mut sorted = cards.to_vec();
    sorted.sort_by_key(|card| {
        let tier = u8::from(card.status() != CardStatus::New);
        (tier, card.next_review().unwrap_or(now))
    });
    sorted
}

/// Split cards into new and due review cards, each in urgency order and
/// truncated to its daily limit.
pub fn build_study_queue<T>(cards: &[T], now: DateTime<Utc>, limits: QueueLimits) -> StudyQueue<T>
where
    T: Schedulable + Clone,
{
    let new_limit = limits.new_cards_per_day as usize;
    let review_limit = limits.reviews_per_day as usize;

    let (new_cards, review_cards): (Vec<T>, Vec<T>) = sort_cards_by_urgency(cards, now)
        .into_iter()
        .filter(|card| card.status() == CardStatus::New || is_card_due(card.next_review(), now))
        .partition(|card| card.status() == CardStatus::New);

    let new_cards: Vec<T> = new_cards.into_iter().take(new_limit).collect();
    let review_cards: Vec<T> = review_cards.into_iter().take(review_limit).collect();

    tracing::trace!(
        new = new_cards.len(),
        review = review_cards.len(),
        "built study queue"
    );

    StudyQueue {
        new_remaining: new_limit.saturating_sub(new_cards.len()),
        review_remaining: review_limit.saturating_sub(review_cards.len()),
        new_cards,
        review_cards,
    }
}
