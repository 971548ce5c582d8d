//! crates/kotoba_core/src/patch.rs
//!
//! Partial-update types for every entity.
//!
//! A single merge rule applies everywhere: each `Some` field replaces the
//! corresponding field of the target, `None` leaves it untouched. Nested
//! records (`account`, `profile`, `progress` on a user) are patched through
//! their own patch type, so the depth of every merge is visible in the type.

use crate::domain::{
    Account, AccountSession, Achievement, BillingRecord, Card, CourseDetail, CourseProgress,
    CourseValue, CurriculumModule, Deck, DictionaryEntry, ExampleSentence, Id, JlptLevel,
    LearningGoal, PartOfSpeech, PaymentMethod, Profile, ProfileVisibility, Progress, Question,
    Test, Token, Topic, User, UserCourse, UserDeck,
};
use serde::{Deserialize, Serialize};

/// Applies a partial update to an entity body in place.
pub trait Patch<T> {
    fn apply(self, target: &mut T);
}

/// Declares a patch struct whose fields each replace the target field wholesale.
macro_rules! replace_patch {
    ($(#[$meta:meta])* $name:ident for $target:ty { $($field:ident : $ty:ty),* $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
        pub struct $name {
            $(
                #[serde(default)]
                pub $field: Option<$ty>,
            )*
        }

        impl Patch<$target> for $name {
            fn apply(self, target: &mut $target) {
                $(
                    if let Some(value) = self.$field {
                        target.$field = value;
                    }
                )*
            }
        }
    };
}

replace_patch! {
    AccountPatch for Account {
        email: String,
        username: String,
        password_hash: String,
        payment_methods: Vec<PaymentMethod>,
        billing_history: Vec<BillingRecord>,
        sessions: Vec<AccountSession>,
    }
}

replace_patch! {
    /// `avatar_url: Some(None)` clears the avatar.
    ProfilePatch for Profile {
        display_name: String,
        avatar_url: Option<String>,
        bio: String,
        native_language: String,
        learning_goal: LearningGoal,
        achievements: Vec<Achievement>,
        visibility: ProfileVisibility,
        email_notifications: bool,
        show_furigana: bool,
    }
}

replace_patch! {
    ProgressPatch for Progress {
        current_xp: u32,
        next_language_level_xp: u32,
        course_progress: Vec<CourseProgress>,
    }
}

replace_patch! {
    CourseDetailPatch for CourseDetail {
        course_id: Id,
        title: String,
        description: String,
        jlpt_level: JlptLevel,
        curriculum: Vec<CurriculumModule>,
        course_values: Vec<CourseValue>,
    }
}

replace_patch! {
    /// `cards: Some(..)` replaces the whole card list.
    DeckPatch for Deck {
        name: String,
        description: String,
        jlpt_level: JlptLevel,
        topic: Topic,
        cards: Vec<Card>,
    }
}

replace_patch! {
    DictionaryEntryPatch for DictionaryEntry {
        word: Vec<Token>,
        reading: String,
        translations: Vec<String>,
        part_of_speech: PartOfSpeech,
        jlpt_level: JlptLevel,
        examples: Vec<ExampleSentence>,
        audio_url: String,
    }
}

replace_patch! {
    TestPatch for Test {
        course_id: Id,
        title: String,
        questions: Vec<Question>,
    }
}

replace_patch! {
    UserCoursePatch for UserCourse {
        user_id: Id,
        course_id: Id,
    }
}

replace_patch! {
    UserDeckPatch for UserDeck {
        user_id: Id,
        deck_id: Id,
    }
}

/// Patch for a whole user. Nested records merge field by field through their own patches.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserPatch {
    #[serde(default)]
    pub account: Option<AccountPatch>,
    #[serde(default)]
    pub profile: Option<ProfilePatch>,
    #[serde(default)]
    pub progress: Option<ProgressPatch>,
}

impl Patch<User> for UserPatch {
    fn apply(self, target: &mut User) {
        if let Some(account) = self.account {
            account.apply(&mut target.account);
        }
        if let Some(profile) = self.profile {
            profile.apply(&mut target.profile);
        }
        if let Some(progress) = self.progress {
            progress.apply(&mut target.progress);
        }
    }
}
