//! Shared helpers for the integration tests: a fresh, latency-free backend per test.

#![allow(dead_code)]

use kotoba_api::adapters::Latency;
use kotoba_api::facade::Facade;
use kotoba_api::seed::Seed;
use kotoba_api::state::AppState;
use kotoba_core::domain::{Card, Deck, JlptLevel, Topic};

pub fn seeded_state() -> AppState {
    AppState::from_seed(Seed::fixtures().expect("fixtures load"), Latency::none())
}

/// Seeded backend whose every operation sleeps for `latency`.
pub fn slow_seeded_state(latency: Latency) -> AppState {
    AppState::from_seed(Seed::fixtures().expect("fixtures load"), latency)
}

pub fn empty_state() -> AppState {
    AppState::from_seed(Seed::default(), Latency::none())
}

pub fn seeded_facade() -> Facade {
    Facade::new(seeded_state())
}

pub fn deck(name: &str, cards: Vec<Card>) -> Deck {
    Deck {
        name: name.into(),
        description: format!("{name} deck"),
        jlpt_level: JlptLevel::N5,
        topic: Topic::Nature,
        cards,
    }
}

pub fn card(front: &str, back: &str, hiragana: &str) -> Card {
    Card {
        front: front.into(),
        back: back.into(),
        hiragana: hiragana.into(),
        katakana: None,
        examples: vec![],
    }
}
