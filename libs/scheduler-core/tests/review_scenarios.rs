//! End-to-end review scenarios.

mod common;

use chrono::Duration;
use pretty_assertions::assert_eq;

use common::fixtures::{card_state, new_card, review_time, scheduled_card};
use scheduler_core::{
    calculate_sm2, format_interval, initial_sm2_for_new_card, is_card_due, preview_intervals,
    sort_cards_by_urgency, CardStatus, QualityRating, SimplifiedRating,
};

#[test]
fn new_card_rated_good() {
    let result = initial_sm2_for_new_card(QualityRating::CorrectHesitant, review_time()).unwrap();

    assert_eq!(result.new_state.interval, 1.0);
    assert_eq!(result.new_state.repetitions, 1);
    assert_eq!(result.status, CardStatus::Review);
    assert_eq!(format_interval(result.new_state.interval), "1d");
    assert_eq!(result.next_review, review_time() + Duration::days(1));
}

#[test]
fn second_good_review() {
    let state = card_state(2.6, 1.0, 1, 0);
    let result = calculate_sm2(QualityRating::CorrectHesitant, &state, review_time()).unwrap();

    assert_eq!(result.new_state.interval, 6.0);
    assert_eq!(result.new_state.repetitions, 2);
    assert_eq!(format_interval(result.new_state.interval), "6d");
}

#[test]
fn failing_then_recovering() {
    let state = card_state(2.6, 6.0, 2, 0);
    let failed = calculate_sm2(QualityRating::Incorrect, &state, review_time()).unwrap();

    assert_eq!(failed.status, CardStatus::Learning);
    assert_eq!(failed.new_state.repetitions, 0);
    assert_eq!(failed.new_state.lapses, 1);
    assert!((failed.new_state.interval - 10.0 / 1440.0).abs() < 1e-12);
    assert_eq!(format_interval(failed.new_state.interval), "10m");

    let later = failed.next_review;
    let recovered = calculate_sm2(QualityRating::CorrectHesitant, &failed.next_state(), later).unwrap();

    assert_eq!(recovered.new_state.repetitions, 1);
    assert_eq!(recovered.new_state.interval, 1.0);
    assert_eq!(recovered.new_state.lapses, 1);
    assert_eq!(recovered.status, CardStatus::Review);
}

#[test]
fn repeated_good_reviews_reach_mastery() {
    let mut result = initial_sm2_for_new_card(QualityRating::CorrectHesitant, review_time()).unwrap();
    let mut reviews = 1;

    while result.status != CardStatus::Mastered {
        assert!(reviews < 10, "not mastered after {reviews} reviews");
        result = calculate_sm2(
            QualityRating::CorrectHesitant,
            &result.next_state(),
            result.next_review,
        )
        .unwrap();
        reviews += 1;
    }

    // 1d, 6d, 15d, 38d
    assert_eq!(reviews, 4);
    assert_eq!(result.new_state.interval, 38.0);
}

#[test]
fn preview_agrees_with_commit_path() {
    let states = [
        card_state(2.5, 0.0, 0, 0),
        card_state(2.6, 1.0, 1, 0),
        card_state(2.06, 10.0 / 1440.0, 0, 1),
        card_state(1.3, 120.0, 7, 4),
        card_state(3.0, 365.0, 12, 0),
    ];

    for state in states {
        let preview = preview_intervals(&state, review_time()).unwrap();
        for rating in SimplifiedRating::ALL {
            let committed = calculate_sm2(rating.to_quality(), &state, review_time()).unwrap();
            assert_eq!(
                preview.get(rating),
                format_interval(committed.new_state.interval),
                "{rating} on {state:?}"
            );
        }
    }
}

#[test]
fn urgency_sort_orders_tiers() {
    let cards = vec![
        scheduled_card(1, 5, CardStatus::Review),
        scheduled_card(2, -1, CardStatus::Review),
        new_card(3),
        scheduled_card(4, -60, CardStatus::Mastered),
        new_card(5),
    ];

    let sorted = sort_cards_by_urgency(&cards, review_time());
    let ids: Vec<i64> = sorted.iter().map(|c| c.id).collect();

    assert_eq!(ids, vec![3, 5, 4, 2, 1]);
    assert_eq!(sort_cards_by_urgency(&sorted, review_time()), sorted);
}

#[test]
fn due_checks() {
    assert!(is_card_due(None, review_time()));
    let card = scheduled_card(1, 1, CardStatus::Review);
    assert!(!is_card_due(card.next_review, review_time()));
    assert!(is_card_due(card.next_review, review_time() + Duration::days(1)));
}

#[test]
fn format_boundaries() {
    assert_eq!(format_interval(30.0), "1mo");
    assert_eq!(format_interval(29.9), "30d");
    assert_eq!(format_interval(365.0), "1y");
}
