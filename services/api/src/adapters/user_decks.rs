//! services/api/src/adapters/user_decks.rs
//!
//! The saved-deck store: a plain join between users and decks.

use async_trait::async_trait;
use kotoba_core::domain::{Deck, Id, Record, UserDeck};
use kotoba_core::patch::UserDeckPatch;
use kotoba_core::ports::{DeckService, EntityStore, PortResult, UserDeckService};
use std::collections::HashSet;
use std::sync::Arc;

use super::latency::Latency;
use super::memory::MemoryStore;

pub struct UserDeckStore {
    rows: MemoryStore<UserDeck>,
    decks: Arc<dyn DeckService>,
}

impl UserDeckStore {
    pub fn new(records: Vec<Record<UserDeck>>, decks: Arc<dyn DeckService>, latency: Latency) -> Self {
        Self {
            rows: MemoryStore::with_records(records, latency),
            decks,
        }
    }
}

#[async_trait]
impl EntityStore<UserDeck> for UserDeckStore {
    async fn get_all(&self) -> PortResult<Vec<Record<UserDeck>>> {
        self.rows.get_all().await
    }

    async fn get_by_id(&self, id: Id) -> PortResult<Record<UserDeck>> {
        self.rows.get_by_id(id).await
    }

    async fn create(&self, data: UserDeck) -> PortResult<Record<UserDeck>> {
        self.rows.create(data).await
    }

    async fn update(&self, id: Id, patch: UserDeckPatch) -> PortResult<Record<UserDeck>> {
        self.rows.update(id, patch).await
    }

    async fn delete(&self, id: Id) -> PortResult<bool> {
        self.rows.delete(id).await
    }
}

#[async_trait]
impl UserDeckService for UserDeckStore {
    /// Rows pointing at deleted decks are skipped.
    async fn get_user_decks(&self, user_id: Id) -> PortResult<Vec<Record<Deck>>> {
        let saved: HashSet<Id> = self
            .rows
            .read(move |table| {
                Ok(table
                    .rows()
                    .iter()
                    .filter(|row| row.user_id == user_id)
                    .map(|row| row.deck_id)
                    .collect())
            })
            .await?;

        if saved.is_empty() {
            return Ok(Vec::new());
        }

        let decks = self.decks.get_all().await?;
        Ok(decks
            .into_iter()
            .filter(|deck| saved.contains(&deck.id))
            .collect())
    }
}
