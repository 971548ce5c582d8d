//! services/api/src/seed/fixtures.rs
//!
//! Decoders for the JSON fixtures under `services/api/fixtures`.

use kotoba_core::domain::{
    Deck, DictionaryEntry, Lesson, Module, Record, Test, User, UserCourse, UserDeck,
};
use serde::de::DeserializeOwned;

use super::curriculum::CourseSeed;
use super::SeedError;

fn parse<T: DeserializeOwned>(fixture: &'static str, raw: &str) -> Result<T, SeedError> {
    serde_json::from_str(raw).map_err(|source| SeedError::Fixture { fixture, source })
}

macro_rules! fixture {
    ($name:ident -> $ty:ty, $file:literal) => {
        pub fn $name() -> Result<$ty, SeedError> {
            parse(
                $file,
                include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/fixtures/", $file)),
            )
        }
    };
}

fixture!(users -> Vec<Record<User>>, "users.json");
fixture!(courses -> Vec<CourseSeed>, "courses.json");
fixture!(modules -> Vec<Module>, "modules.json");
fixture!(lessons -> Vec<Lesson>, "lessons.json");
fixture!(decks -> Vec<Record<Deck>>, "decks.json");
fixture!(dictionary -> Vec<Record<DictionaryEntry>>, "dictionary.json");
fixture!(course_tests -> Vec<Record<Test>>, "tests.json");
fixture!(user_courses -> Vec<Record<UserCourse>>, "user_courses.json");
fixture!(user_decks -> Vec<Record<UserDeck>>, "user_decks.json");
