//! crates/kotoba_core/src/review.rs
//!
//! Flashcard review session. Cards are shown in deck order and cycle
//! round-robin; grading a card records the grade and advances to the next one.
//! Grades are tallied but do not schedule any review interval.

use crate::domain::Card;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Grade {
    Again,
    Hard,
    Good,
    Easy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardSide {
    Front,
    Back,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReviewTally {
    pub again: u32,
    pub hard: u32,
    pub good: u32,
    pub easy: u32,
}

impl ReviewTally {
    pub fn total(&self) -> u32 {
        self.again + self.hard + self.good + self.easy
    }

    fn record(&mut self, grade: Grade) {
        match grade {
            Grade::Again => self.again += 1,
            Grade::Hard => self.hard += 1,
            Grade::Good => self.good += 1,
            Grade::Easy => self.easy += 1,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ReviewSession {
    cards: Vec<Card>,
    index: usize,
    side: CardSide,
    tally: ReviewTally,
}

impl ReviewSession {
    pub fn new(cards: Vec<Card>) -> Self {
        Self {
            cards,
            index: 0,
            side: CardSide::Front,
            tally: ReviewTally::default(),
        }
    }

    /// The card on screen, `None` for an empty deck.
    pub fn current(&self) -> Option<&Card> {
        self.cards.get(self.index)
    }

    pub fn position(&self) -> usize {
        self.index
    }

    pub fn side(&self) -> CardSide {
        self.side
    }

    pub fn tally(&self) -> ReviewTally {
        self.tally
    }

    pub fn flip(&mut self) {
        self.side = match self.side {
            CardSide::Front => CardSide::Back,
            CardSide::Back => CardSide::Front,
        };
    }

    /// Records `grade` for the current card and moves to the next one, front side up.
    /// Returns the new current card. Grading an empty session does nothing.
    pub fn grade(&mut self, grade: Grade) -> Option<&Card> {
        if self.cards.is_empty() {
            return None;
        }
        self.tally.record(grade);
        self.index = (self.index + 1) % self.cards.len();
        self.side = CardSide::Front;
        self.current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(front: &str) -> Card {
        Card {
            front: front.into(),
            back: format!("{front} (back)"),
            hiragana: String::new(),
            katakana: None,
            examples: vec![],
        }
    }

    #[test]
    fn empty_session_has_no_card() {
        let mut session = ReviewSession::new(vec![]);
        assert!(session.current().is_none());
        assert!(session.grade(Grade::Good).is_none());
        assert_eq!(session.tally().total(), 0);
    }

    #[test]
    fn every_grade_advances_round_robin() {
        let mut session = ReviewSession::new(vec![card("水"), card("火")]);
        assert_eq!(session.current().unwrap().front, "水");
        assert_eq!(session.grade(Grade::Again).unwrap().front, "火");
        assert_eq!(session.grade(Grade::Easy).unwrap().front, "水");
        assert_eq!(session.position(), 0);

        let tally = session.tally();
        assert_eq!((tally.again, tally.easy, tally.total()), (1, 1, 2));
    }

    #[test]
    fn flip_toggles_and_grading_resets_to_front() {
        let mut session = ReviewSession::new(vec![card("木"), card("金")]);
        session.flip();
        assert_eq!(session.side(), CardSide::Back);
        session.flip();
        assert_eq!(session.side(), CardSide::Front);

        session.flip();
        session.grade(Grade::Hard);
        assert_eq!(session.side(), CardSide::Front);
    }
}
