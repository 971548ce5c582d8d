//! services/api/src/seed/mod.rs
//!
//! Builds the initial contents of every store. The fixture data is embedded
//! in the binary; it is test data rather than a format to preserve.

pub mod curriculum;
pub mod fixtures;

use kotoba_core::domain::{
    CourseDetail, Deck, DictionaryEntry, Lesson, Module, Record, Test, User, UserCourse, UserDeck,
};
use kotoba_core::ports::PortError;

use crate::adapters::{Latency, MemoryCourseContent};

/// A custom error type for seed loading failures.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("Failed to parse fixture {fixture}: {source}")]
    Fixture {
        fixture: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("Inconsistent course content: {0}")]
    Content(#[from] PortError),
}

/// Initial records for every store plus the course structure.
#[derive(Debug, Clone, Default)]
pub struct Seed {
    pub users: Vec<Record<User>>,
    pub course_details: Vec<Record<CourseDetail>>,
    pub decks: Vec<Record<Deck>>,
    pub dictionary: Vec<Record<DictionaryEntry>>,
    pub tests: Vec<Record<Test>>,
    pub user_courses: Vec<Record<UserCourse>>,
    pub user_decks: Vec<Record<UserDeck>>,
    pub modules: Vec<Module>,
    pub lessons: Vec<Lesson>,
}

impl Seed {
    /// Loads the bundled fixtures and derives course details from the course structure.
    pub fn fixtures() -> Result<Self, SeedError> {
        let modules = fixtures::modules()?;
        let lessons = fixtures::lessons()?;
        let content = MemoryCourseContent::new(modules.clone(), lessons.clone(), Latency::none());

        let course_details = fixtures::courses()?
            .into_iter()
            .enumerate()
            .map(|(index, course)| {
                curriculum::course_detail(course, &content)
                    .map(|detail| Record::new(index as u32, detail))
            })
            .collect::<Result<Vec<_>, PortError>>()?;

        Ok(Self {
            users: fixtures::users()?,
            course_details,
            decks: fixtures::decks()?,
            dictionary: fixtures::dictionary()?,
            tests: fixtures::course_tests()?,
            user_courses: fixtures::user_courses()?,
            user_decks: fixtures::user_decks()?,
            modules,
            lessons,
        })
    }
}
