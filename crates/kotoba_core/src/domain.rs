//! crates/kotoba_core/src/domain.rs
//!
//! Defines the core data structures for the application.
//! Every store holds `Record<T>` values, where `T` is one of the entity bodies
//! below and the id is assigned by the store on creation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::ops::{Deref, DerefMut};
use uuid::Uuid;

/// Store-assigned identifier. Unique for the lifetime of the process and never reused.
pub type Id = u32;

//=========================================================================================
// Stored Record Wrapper
//=========================================================================================

/// An entity body together with the id its store assigned to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record<T> {
    pub id: Id,
    #[serde(flatten)]
    pub data: T,
}

impl<T> Record<T> {
    pub fn new(id: Id, data: T) -> Self {
        Self { id, data }
    }

    pub fn into_inner(self) -> T {
        self.data
    }
}

impl<T> Deref for Record<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.data
    }
}

impl<T> DerefMut for Record<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.data
    }
}

//=========================================================================================
// Closed Vocabularies
//=========================================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum JlptLevel {
    N5,
    N4,
    N3,
    N2,
    N1,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    Greetings,
    Food,
    Travel,
    Family,
    Work,
    Nature,
    Grammar,
    DailyLife,
}

/// How much study time a learner commits to each day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LearningGoal {
    Casual,
    Regular,
    Serious,
    Intense,
}

impl LearningGoal {
    pub fn minutes_per_day(self) -> u32 {
        match self {
            LearningGoal::Casual => 5,
            LearningGoal::Regular => 10,
            LearningGoal::Serious => 15,
            LearningGoal::Intense => 20,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adjective,
    Adverb,
    Particle,
    Expression,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileVisibility {
    Public,
    FriendsOnly,
    Private,
}

//=========================================================================================
// Users
//=========================================================================================

/// A registered learner. Only `progress` is ever modified on behalf of other entities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub account: Account,
    pub profile: Profile,
    pub progress: Progress,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub email: String,
    pub username: String,
    /// Placeholder value; no authentication happens against it.
    pub password_hash: String,
    pub payment_methods: Vec<PaymentMethod>,
    pub billing_history: Vec<BillingRecord>,
    pub sessions: Vec<AccountSession>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethod {
    pub brand: String,
    pub last4: String,
    pub expires: String,
    pub is_default: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillingRecord {
    pub date: DateTime<Utc>,
    pub description: String,
    pub amount_cents: u32,
    pub currency: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountSession {
    pub id: Uuid,
    pub device: String,
    pub location: String,
    pub last_active: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub display_name: String,
    pub avatar_url: Option<String>,
    pub bio: String,
    pub native_language: String,
    pub learning_goal: LearningGoal,
    pub achievements: Vec<Achievement>,
    pub visibility: ProfileVisibility,
    pub email_notifications: bool,
    pub show_furigana: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    pub title: String,
    pub description: String,
    pub earned_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Progress {
    pub current_xp: u32,
    pub next_language_level_xp: u32,
    pub course_progress: Vec<CourseProgress>,
}

impl Progress {
    pub fn course(&self, course_id: Id) -> Option<&CourseProgress> {
        self.course_progress.iter().find(|p| p.course_id == course_id)
    }
}

/// A learner's position within one course. Only created through enrollment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseProgress {
    pub course_id: Id,
    pub checkpoint: Checkpoint,
    pub current_hours: f32,
    /// Percentage, 0-100.
    pub current_progress: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checkpoint {
    pub module_id: Id,
    pub lesson_id: Id,
}

//=========================================================================================
// Courses
//=========================================================================================

/// Marketing and curriculum metadata for a course.
///
/// `curriculum` and `course_values` are a snapshot of the course content taken
/// when the record was built; updating the record does not recompute them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseDetail {
    pub course_id: Id,
    pub title: String,
    pub description: String,
    pub jlpt_level: JlptLevel,
    pub curriculum: Vec<CurriculumModule>,
    pub course_values: Vec<CourseValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurriculumModule {
    pub module_id: Id,
    pub title: String,
    pub lessons: Vec<String>,
}

/// A label/value display row, e.g. `("Lessons", "12")`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseValue {
    pub label: String,
    pub value: String,
}

/// A module of course content, owned by the course-content collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Module {
    pub id: Id,
    pub course_id: Id,
    pub title: String,
    pub order: u32,
}

/// A lesson inside a module, owned by the course-content collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lesson {
    pub id: Id,
    pub module_id: Id,
    pub title: String,
    pub order: u32,
    pub duration_minutes: u32,
}

impl Lesson {
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            module_id: self.module_id,
            lesson_id: self.id,
        }
    }
}

//=========================================================================================
// Decks
//=========================================================================================

/// A named set of flashcards. Cards have no identity outside their deck.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deck {
    pub name: String,
    pub description: String,
    pub jlpt_level: JlptLevel,
    pub topic: Topic,
    pub cards: Vec<Card>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub front: String,
    pub back: String,
    pub hiragana: String,
    pub katakana: Option<String>,
    pub examples: Vec<String>,
}

//=========================================================================================
// Dictionary
//=========================================================================================

/// One segment of Japanese text, optionally annotated with its kana reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    pub reading: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DictionaryEntry {
    pub word: Vec<Token>,
    pub reading: String,
    pub translations: Vec<String>,
    pub part_of_speech: PartOfSpeech,
    pub jlpt_level: JlptLevel,
    pub examples: Vec<ExampleSentence>,
    pub audio_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExampleSentence {
    pub sentence: Vec<Token>,
    pub translation: String,
}

//=========================================================================================
// Tests
//=========================================================================================

/// A quiz attached to exactly one course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Test {
    pub course_id: Id,
    pub title: String,
    pub questions: Vec<Question>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub prompt: String,
    pub options: Vec<QuestionOption>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionOption {
    pub text: String,
    pub is_correct: bool,
    #[serde(default)]
    pub explanation: Option<String>,
    #[serde(default)]
    pub supporting_links: Vec<String>,
}

//=========================================================================================
// Join Entities
//=========================================================================================

/// Enrollment of a user in a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserCourse {
    pub user_id: Id,
    pub course_id: Id,
}

/// A deck saved to a user's library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDeck {
    pub user_id: Id,
    pub deck_id: Id,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_derefs_to_its_body() {
        let mut record = Record::new(
            3,
            UserDeck {
                user_id: 1,
                deck_id: 2,
            },
        );
        assert_eq!(record.deck_id, 2);
        record.deck_id = 5;
        assert_eq!(record.into_inner().deck_id, 5);
    }

    #[test]
    fn record_serializes_flat() {
        let record = Record::new(
            7,
            UserCourse {
                user_id: 1,
                course_id: 0,
            },
        );
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json, serde_json::json!({"id": 7, "user_id": 1, "course_id": 0}));
    }

    #[test]
    fn lesson_checkpoint_points_at_its_module() {
        let lesson = Lesson {
            id: 12,
            module_id: 4,
            title: "Hiragana あ-row".into(),
            order: 0,
            duration_minutes: 15,
        };
        assert_eq!(
            lesson.checkpoint(),
            Checkpoint {
                module_id: 4,
                lesson_id: 12
            }
        );
    }
}
