//! services/api/src/adapters/decks.rs

use async_trait::async_trait;
use kotoba_core::domain::{Card, Deck, Id};
use kotoba_core::ports::{DeckService, PortResult};

use super::memory::MemoryStore;

pub type DeckStore = MemoryStore<Deck>;

#[async_trait]
impl DeckService for MemoryStore<Deck> {
    async fn get_deck_cards(&self, deck_id: Id) -> PortResult<Vec<Card>> {
        self.read(move |table| Ok(table.get(deck_id)?.cards.clone()))
            .await
    }
}
