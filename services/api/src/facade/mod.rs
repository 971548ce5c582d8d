//! services/api/src/facade/mod.rs
//!
//! The query/mutation facade consumed by the UI layer. Every query goes
//! through the `QueryCache` under its own key; every successful mutation
//! invalidates the keys whose data it may have changed.
//!
//! Invalidation policy, applied uniformly by the feature modules:
//! - create: the collection key of its scope, plus any joined view it feeds;
//! - update / delete: the whole scope (collection and items), plus joined views.
//!
//! There are no optimistic updates and no retries. A failed query is
//! recorded as `QueryStatus::Failed` and returned as an error.

pub mod cache;
mod courses;
mod decks;
mod dictionary;
mod quizzes;
mod users;

use kotoba_core::ports::PortResult;
use std::future::Future;
use tracing::{debug, error};

use crate::error::ApiError;
use crate::state::AppState;
pub use cache::{Invalidate, QueryCache, QueryKey, QueryStatus, Scope};
pub use quizzes::TestSubmission;

pub type FacadeResult<T> = Result<T, ApiError>;

//=========================================================================================
// The Facade
//=========================================================================================

pub struct Facade {
    state: AppState,
    cache: QueryCache,
}

impl Facade {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            cache: QueryCache::new(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn cache(&self) -> &QueryCache {
        &self.cache
    }

    /// Current status of a query, for loading and error rendering.
    pub async fn status(&self, key: &QueryKey) -> QueryStatus {
        self.cache.status(key).await
    }

    /// Serves `key` from the cache, or awaits `fetch` and caches its result.
    /// `fetch` is never polled on a cache hit.
    async fn query<T, F>(&self, key: QueryKey, fetch: F) -> FacadeResult<T>
    where
        T: Clone + Send + Sync + 'static,
        F: Future<Output = PortResult<T>> + Send,
    {
        if let Some(hit) = self.cache.get::<T>(&key).await {
            debug!("Cache hit for {}", key);
            return Ok(hit);
        }

        let ticket = self.cache.begin(key.clone()).await;
        match fetch.await {
            Ok(value) => {
                self.cache.fulfil(ticket, value.clone()).await;
                Ok(value)
            }
            Err(e) => {
                error!("Query {} failed: {}", key, e);
                self.cache.fail(ticket, e.to_string()).await;
                Err(e.into())
            }
        }
    }

    /// Awaits a store mutation and, on success, applies `invalidate`.
    async fn mutate<T, F>(
        &self,
        operation: &str,
        invalidate: Vec<Invalidate>,
        run: F,
    ) -> FacadeResult<T>
    where
        F: Future<Output = PortResult<T>> + Send,
    {
        match run.await {
            Ok(value) => {
                self.cache.invalidate(&invalidate).await;
                Ok(value)
            }
            Err(e) => {
                error!("Mutation {} failed: {}", operation, e);
                Err(e.into())
            }
        }
    }
}
