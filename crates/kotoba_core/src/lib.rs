pub mod domain;
pub mod patch;
pub mod ports;
pub mod review;
pub mod scoring;
pub mod text;

pub use domain::{
    Account, Card, Checkpoint, CourseDetail, CourseProgress, Deck, DictionaryEntry, Id, JlptLevel,
    Lesson, Module, Profile, Progress, Record, Test, Token, Topic, User, UserCourse, UserDeck,
};
pub use patch::{
    AccountPatch, CourseDetailPatch, DeckPatch, DictionaryEntryPatch, Patch, ProfilePatch,
    ProgressPatch, TestPatch, UserCoursePatch, UserDeckPatch, UserPatch,
};
pub use ports::{
    CourseContentService, CourseDetailService, DeckService, DictionaryService, Entity,
    EntityKind, EntityStore, PortError, PortResult, TestService, UserCourseService,
    UserDeckService, UserService,
};
