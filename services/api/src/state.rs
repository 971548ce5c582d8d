//! services/api/src/state.rs
//!
//! Defines the application's shared state: one instance of every store,
//! created once per process and handed to the facade.

use kotoba_core::ports::{
    CourseContentService, CourseDetailService, DeckService, DictionaryService, TestService,
    UserCourseService, UserDeckService, UserService,
};
use std::sync::Arc;
use tracing::info;

use crate::adapters::{
    CourseDetailStore, DeckStore, DictionaryStore, Latency, MemoryCourseContent, TestStore,
    UserCourseStore, UserDeckStore, UserStore,
};
use crate::config::Config;
use crate::error::ApiError;
use crate::seed::Seed;

/// The shared application state. Every store is reachable only through its port.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserService>,
    pub course_details: Arc<dyn CourseDetailService>,
    pub decks: Arc<dyn DeckService>,
    pub dictionary: Arc<dyn DictionaryService>,
    pub tests: Arc<dyn TestService>,
    pub user_courses: Arc<dyn UserCourseService>,
    pub user_decks: Arc<dyn UserDeckService>,
    pub content: Arc<dyn CourseContentService>,
}

impl AppState {
    /// Wires up every store from `seed`, all sharing the same latency profile.
    pub fn from_seed(seed: Seed, latency: Latency) -> Self {
        let users: Arc<dyn UserService> = Arc::new(UserStore::with_records(seed.users, latency));
        let course_details: Arc<dyn CourseDetailService> =
            Arc::new(CourseDetailStore::with_records(seed.course_details, latency));
        let decks: Arc<dyn DeckService> = Arc::new(DeckStore::with_records(seed.decks, latency));
        let content: Arc<dyn CourseContentService> = Arc::new(MemoryCourseContent::new(
            seed.modules,
            seed.lessons,
            latency,
        ));

        let user_courses = Arc::new(UserCourseStore::new(
            seed.user_courses,
            users.clone(),
            course_details.clone(),
            content.clone(),
            latency,
        ));
        let user_decks = Arc::new(UserDeckStore::new(seed.user_decks, decks.clone(), latency));

        Self {
            users,
            course_details,
            decks,
            dictionary: Arc::new(DictionaryStore::with_records(seed.dictionary, latency)),
            tests: Arc::new(TestStore::with_records(seed.tests, latency)),
            user_courses,
            user_decks,
            content,
        }
    }

    /// Builds the state described by `config`: fixtures or empty stores, with the configured latency.
    pub fn from_config(config: &Config) -> Result<Self, ApiError> {
        let seed = if config.seed_fixtures {
            Seed::fixtures()?
        } else {
            Seed::default()
        };
        info!(
            "Seeding stores: {} users, {} courses, {} decks, {} dictionary entries, {} tests",
            seed.users.len(),
            seed.course_details.len(),
            seed.decks.len(),
            seed.dictionary.len(),
            seed.tests.len()
        );
        Ok(Self::from_seed(seed, config.latency()))
    }
}
