//! crates/kotoba_core/src/scoring.rs
//!
//! Grades a completed test attempt and converts the result into experience points.

use crate::domain::Test;

/// Experience awarded for each correctly answered question.
pub const XP_PER_CORRECT_ANSWER: u32 = 10;

/// Outcome for one question of an attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionResult {
    pub question_index: usize,
    pub selected: Option<usize>,
    pub correct: bool,
    /// Explanation attached to the chosen option, if any.
    pub explanation: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TestScore {
    pub total: usize,
    pub correct: usize,
    /// Rounded down, 0-100. A test without questions scores 0.
    pub percent: u8,
    pub xp_earned: u32,
    pub results: Vec<QuestionResult>,
}

impl TestScore {
    pub fn is_perfect(&self) -> bool {
        self.total > 0 && self.correct == self.total
    }
}

/// Scores `answers` against `test`.
///
/// `answers[i]` is the index of the option picked for question `i`. Missing,
/// skipped (`None`) or out-of-range answers count as wrong; extra answers are ignored.
pub fn score_test(test: &Test, answers: &[Option<usize>]) -> TestScore {
    let results: Vec<QuestionResult> = test
        .questions
        .iter()
        .enumerate()
        .map(|(question_index, question)| {
            let selected = answers.get(question_index).copied().flatten();
            let option = selected.and_then(|i| question.options.get(i));
            QuestionResult {
                question_index,
                selected,
                correct: option.is_some_and(|o| o.is_correct),
                explanation: option.and_then(|o| o.explanation.clone()),
            }
        })
        .collect();

    let total = results.len();
    let correct = results.iter().filter(|r| r.correct).count();
    let percent = if total == 0 {
        0
    } else {
        (correct * 100 / total) as u8
    };

    TestScore {
        total,
        correct,
        percent,
        xp_earned: correct as u32 * XP_PER_CORRECT_ANSWER,
        results,
    }
}
