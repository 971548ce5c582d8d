//! services/api/src/facade/cache.rs
//!
//! The query cache behind the facade. Every query is stored under a
//! `QueryKey` together with its status; mutations remove keys so the next
//! query fetches fresh data.

use kotoba_core::domain::Id;
use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

//=========================================================================================
// Query Keys
//=========================================================================================

/// A family of queries. Invalidating a scope drops every key in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    Users,
    UserProgress,
    CourseDetails,
    CourseModules,
    ModuleLessons,
    Decks,
    DeckCards,
    Dictionary,
    DictionarySearch,
    Tests,
    CourseTest,
    /// Enrollment rows.
    UserCourses,
    /// Course details joined through a user's enrollments.
    EnrolledCourses,
    /// Saved-deck rows.
    UserDecks,
    /// Decks joined through a user's saved-deck rows.
    SavedDecks,
}

impl Scope {
    fn name(self) -> &'static str {
        match self {
            Scope::Users => "users",
            Scope::UserProgress => "user_progress",
            Scope::CourseDetails => "course_details",
            Scope::CourseModules => "course_modules",
            Scope::ModuleLessons => "module_lessons",
            Scope::Decks => "decks",
            Scope::DeckCards => "deck_cards",
            Scope::Dictionary => "dictionary",
            Scope::DictionarySearch => "dictionary_search",
            Scope::Tests => "tests",
            Scope::CourseTest => "course_test",
            Scope::UserCourses => "user_courses",
            Scope::EnrolledCourses => "enrolled_courses",
            Scope::UserDecks => "user_decks",
            Scope::SavedDecks => "saved_decks",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Param {
    /// The whole collection.
    All,
    Id(Id),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
    pub scope: Scope,
    pub param: Param,
}

impl QueryKey {
    pub fn all(scope: Scope) -> Self {
        Self {
            scope,
            param: Param::All,
        }
    }

    pub fn item(scope: Scope, id: Id) -> Self {
        Self {
            scope,
            param: Param::Id(id),
        }
    }

    pub fn text(scope: Scope, text: &str) -> Self {
        Self {
            scope,
            param: Param::Text(text.to_string()),
        }
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.param {
            Param::All => write!(f, "{}", self.scope.name()),
            Param::Id(id) => write!(f, "{}/{}", self.scope.name(), id),
            Param::Text(text) => write!(f, "{}?{}", self.scope.name(), text),
        }
    }
}

/// What a successful mutation drops from the cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invalidate {
    Key(QueryKey),
    Scope(Scope),
}

//=========================================================================================
// Query Status
//=========================================================================================

/// The state of one query as seen by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryStatus {
    /// Never fetched, or invalidated since.
    Idle,
    Loading,
    Ready,
    /// The last fetch failed with this message. The next query fetches again.
    Failed(String),
}

enum Slot {
    /// A fetch started under this generation is in flight.
    Loading(u64),
    Ready(Arc<dyn Any + Send + Sync>),
    Failed(String),
}

#[derive(Default)]
struct Inner {
    slots: HashMap<QueryKey, Slot>,
    /// Bumped on every invalidation; fetches started under an older generation are not stored.
    generation: u64,
}

//=========================================================================================
// The Cache
//=========================================================================================

#[derive(Default)]
pub struct QueryCache {
    inner: Mutex<Inner>,
}

/// Handle for a fetch in flight, returned by `QueryCache::begin`.
#[derive(Debug)]
pub struct Ticket {
    key: QueryKey,
    generation: u64,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn status(&self, key: &QueryKey) -> QueryStatus {
        match self.inner.lock().await.slots.get(key) {
            None => QueryStatus::Idle,
            Some(Slot::Loading(_)) => QueryStatus::Loading,
            Some(Slot::Ready(_)) => QueryStatus::Ready,
            Some(Slot::Failed(message)) => QueryStatus::Failed(message.clone()),
        }
    }

    /// The cached value for `key`, if one is ready and has type `T`.
    pub async fn get<T>(&self, key: &QueryKey) -> Option<T>
    where
        T: Clone + Send + Sync + 'static,
    {
        match self.inner.lock().await.slots.get(key) {
            Some(Slot::Ready(value)) => value.downcast_ref::<T>().cloned(),
            _ => None,
        }
    }

    /// Marks `key` as loading.
    pub async fn begin(&self, key: QueryKey) -> Ticket {
        let mut inner = self.inner.lock().await;
        let generation = inner.generation;
        inner.slots.insert(key.clone(), Slot::Loading(generation));
        Ticket { key, generation }
    }

    /// Stores a fetched value unless the cache was invalidated while it was in flight.
    pub async fn fulfil<T>(&self, ticket: Ticket, value: T)
    where
        T: Send + Sync + 'static,
    {
        self.settle(ticket, Slot::Ready(Arc::new(value))).await;
    }

    pub async fn fail(&self, ticket: Ticket, message: String) {
        self.settle(ticket, Slot::Failed(message)).await;
    }

    async fn settle(&self, ticket: Ticket, slot: Slot) {
        let mut inner = self.inner.lock().await;
        if inner.generation == ticket.generation {
            inner.slots.insert(ticket.key, slot);
        } else {
            debug!("Discarding stale result for {}", ticket.key);
            // A newer fetch of the same key keeps its loading slot.
            let own_slot = matches!(
                inner.slots.get(&ticket.key),
                Some(Slot::Loading(g)) if *g == ticket.generation
            );
            if own_slot {
                inner.slots.remove(&ticket.key);
            }
        }
    }

    pub async fn invalidate(&self, targets: &[Invalidate]) {
        let mut inner = self.inner.lock().await;
        inner.generation += 1;
        for target in targets {
            match target {
                Invalidate::Key(key) => {
                    inner.slots.remove(key);
                }
                Invalidate::Scope(scope) => inner.slots.retain(|key, _| key.scope != *scope),
            }
        }
        debug!("Invalidated {:?}", targets);
    }

    pub async fn len(&self) -> usize {
        self.inner.lock().await.slots.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
