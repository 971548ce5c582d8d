pub mod course_content;
pub mod course_details;
pub mod course_tests;
pub mod decks;
pub mod dictionary;
pub mod latency;
pub mod memory;
pub mod user_courses;
pub mod user_decks;
pub mod users;

pub use course_content::MemoryCourseContent;
pub use course_details::CourseDetailStore;
pub use course_tests::TestStore;
pub use decks::DeckStore;
pub use dictionary::DictionaryStore;
pub use latency::Latency;
pub use memory::MemoryStore;
pub use user_courses::UserCourseStore;
pub use user_decks::UserDeckStore;
pub use users::UserStore;
