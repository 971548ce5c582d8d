//! crates/kotoba_core/src/ports.rs
//!
//! Defines the store contracts (traits) consumed by the application layer.
//! These traits form the boundary of the hexagonal architecture: the in-memory
//! adapters in the `api` service implement them, and the facade only ever sees
//! them as trait objects.

use crate::domain::{
    Card, CourseDetail, CourseProgress, Deck, DictionaryEntry, Id, Lesson, Module, Progress, Record, Test, User,
    UserCourse, UserDeck,
};
use crate::patch::{
    AccountPatch, CourseDetailPatch, DeckPatch, DictionaryEntryPatch, Patch, ProfilePatch,
    ProgressPatch, TestPatch, UserCoursePatch, UserDeckPatch, UserPatch,
};
use async_trait::async_trait;
use std::fmt;

//=========================================================================================
// Generic Port Error and Result Types
//=========================================================================================

/// The kind of record a lookup was aimed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    User,
    CourseDetail,
    Deck,
    DictionaryEntry,
    Test,
    /// A test looked up by the course it belongs to.
    CourseTest,
    UserCourse,
    UserDeck,
    Course,
    Module,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntityKind::User => "User",
            EntityKind::CourseDetail => "CourseDetail",
            EntityKind::Deck => "Deck",
            EntityKind::DictionaryEntry => "DictionaryEntry",
            EntityKind::Test => "Test",
            EntityKind::CourseTest => "Test for course",
            EntityKind::UserCourse => "UserCourse",
            EntityKind::UserDeck => "UserDeck",
            EntityKind::Course => "Course",
            EntityKind::Module => "Module",
        };
        f.write_str(name)
    }
}

/// The error type for all port operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PortError {
    #[error("{entity} {id} not found")]
    NotFound { entity: EntityKind, id: Id },
    #[error("Invariant violated: {0}")]
    InvariantViolation(String),
}

impl PortError {
    pub fn not_found(entity: EntityKind, id: Id) -> Self {
        PortError::NotFound { entity, id }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, PortError::NotFound { .. })
    }
}

/// A convenience type alias for `Result<T, PortError>`.
pub type PortResult<T> = Result<T, PortError>;

//=========================================================================================
// Generic Store Port
//=========================================================================================

/// An entity body that can be kept in a store.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Partial update accepted by `EntityStore::update`.
    type Patch: Patch<Self> + Send + 'static;

    const KIND: EntityKind;
}

macro_rules! entity {
    ($($target:ty => $patch:ty, $kind:ident;)*) => {
        $(
            impl Entity for $target {
                type Patch = $patch;
                const KIND: EntityKind = EntityKind::$kind;
            }
        )*
    };
}

entity! {
    User => UserPatch, User;
    CourseDetail => CourseDetailPatch, CourseDetail;
    Deck => DeckPatch, Deck;
    DictionaryEntry => DictionaryEntryPatch, DictionaryEntry;
    Test => TestPatch, Test;
    UserCourse => UserCoursePatch, UserCourse;
    UserDeck => UserDeckPatch, UserDeck;
}

/// CRUD contract shared by every entity store.
///
/// Ids are assigned by the store from a counter that never hands out the same
/// value twice, even after the record holding it is deleted.
#[async_trait]
pub trait EntityStore<T: Entity>: Send + Sync {
    /// Every record, in insertion order. The returned vector is a copy.
    async fn get_all(&self) -> PortResult<Vec<Record<T>>>;

    async fn get_by_id(&self, id: Id) -> PortResult<Record<T>>;

    /// Stores `data` under a fresh id. No validation is performed.
    async fn create(&self, data: T) -> PortResult<Record<T>>;

    async fn update(&self, id: Id, patch: T::Patch) -> PortResult<Record<T>>;

    /// Removes the record. Records in other stores that reference it are left untouched.
    async fn delete(&self, id: Id) -> PortResult<bool>;
}

//=========================================================================================
// Entity Store Ports
//=========================================================================================

#[async_trait]
pub trait UserService: EntityStore<User> {
    async fn get_progress(&self, user_id: Id) -> PortResult<Progress>;

    async fn update_progress(&self, user_id: Id, patch: ProgressPatch) -> PortResult<Progress>;

    async fn update_account(&self, user_id: Id, patch: AccountPatch) -> PortResult<Record<User>>;

    async fn update_profile(&self, user_id: Id, patch: ProfilePatch) -> PortResult<Record<User>>;

    /// Adds `xp` to the user's current experience total.
    async fn award_xp(&self, user_id: Id, xp: u32) -> PortResult<Progress>;

    /// Appends `entry` to the user's course progress in a single write.
    async fn start_course(&self, user_id: Id, entry: CourseProgress) -> PortResult<Progress>;
}

pub trait CourseDetailService: EntityStore<CourseDetail> {}

#[async_trait]
pub trait DeckService: EntityStore<Deck> {
    async fn get_deck_cards(&self, deck_id: Id) -> PortResult<Vec<Card>>;
}

#[async_trait]
pub trait DictionaryService: EntityStore<DictionaryEntry> {
    /// Entries whose surface form, reading or translations contain `query`.
    async fn search(&self, query: &str) -> PortResult<Vec<Record<DictionaryEntry>>>;
}

#[async_trait]
pub trait TestService: EntityStore<Test> {
    /// The first test attached to `course_id`.
    async fn get_course_test(&self, course_id: Id) -> PortResult<Record<Test>>;
}

/// Enrollment store. `create` also records the starting checkpoint on the user.
#[async_trait]
pub trait UserCourseService: EntityStore<UserCourse> {
    /// Course details for every course the user is enrolled in.
    async fn get_user_courses(&self, user_id: Id) -> PortResult<Vec<Record<CourseDetail>>>;
}

#[async_trait]
pub trait UserDeckService: EntityStore<UserDeck> {
    /// Decks saved by the user.
    async fn get_user_decks(&self, user_id: Id) -> PortResult<Vec<Record<Deck>>>;
}

//=========================================================================================
// External Collaborator Port
//=========================================================================================

/// Read-only access to course structure (modules and lessons).
#[async_trait]
pub trait CourseContentService: Send + Sync {
    async fn get_course_modules(&self, course_id: Id) -> PortResult<Vec<Module>>;

    async fn get_module_lessons(&self, module_id: Id) -> PortResult<Vec<Lesson>>;

    /// Lessons of every module of the course, modules first ordered, then lessons.
    async fn get_course_lessons(&self, course_id: Id) -> PortResult<Vec<Lesson>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_entity_and_id() {
        let err = PortError::not_found(EntityKind::Deck, 42);
        assert_eq!(err.to_string(), "Deck 42 not found");
        assert!(err.is_not_found());
    }

    #[test]
    fn course_test_lookup_reads_naturally() {
        let err = PortError::not_found(EntityKind::CourseTest, 9);
        assert_eq!(err.to_string(), "Test for course 9 not found");
    }

    #[test]
    fn invariant_violation_is_not_a_not_found() {
        let err = PortError::InvariantViolation("course 3 has no lessons".into());
        assert!(!err.is_not_found());
    }
}
