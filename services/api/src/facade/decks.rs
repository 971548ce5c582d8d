//! services/api/src/facade/decks.rs
//!
//! Decks and the decks a user has saved.

use kotoba_core::domain::{Card, Deck, Id, Record, UserDeck};
use kotoba_core::patch::{DeckPatch, UserDeckPatch};
use kotoba_core::ports::{DeckService, EntityStore, UserDeckService};
use kotoba_core::review::ReviewSession;

use super::{Facade, FacadeResult, Invalidate, QueryKey, Scope};

/// A changed or removed deck is stale in every view that embeds it.
fn deck_changed() -> Vec<Invalidate> {
    vec![
        Invalidate::Scope(Scope::Decks),
        Invalidate::Scope(Scope::DeckCards),
        Invalidate::Scope(Scope::SavedDecks),
    ]
}

fn saved_deck_changed() -> Vec<Invalidate> {
    vec![
        Invalidate::Scope(Scope::UserDecks),
        Invalidate::Scope(Scope::SavedDecks),
    ]
}

impl Facade {
    pub async fn decks(&self) -> FacadeResult<Vec<Record<Deck>>> {
        self.query(QueryKey::all(Scope::Decks), self.state.decks.get_all())
            .await
    }

    pub async fn deck(&self, deck_id: Id) -> FacadeResult<Record<Deck>> {
        self.query(
            QueryKey::item(Scope::Decks, deck_id),
            self.state.decks.get_by_id(deck_id),
        )
        .await
    }

    pub async fn deck_cards(&self, deck_id: Id) -> FacadeResult<Vec<Card>> {
        self.query(
            QueryKey::item(Scope::DeckCards, deck_id),
            self.state.decks.get_deck_cards(deck_id),
        )
        .await
    }

    /// Starts a review over the deck's current cards.
    pub async fn start_review(&self, deck_id: Id) -> FacadeResult<ReviewSession> {
        let cards = self.deck_cards(deck_id).await?;
        Ok(ReviewSession::new(cards))
    }

    pub async fn create_deck(&self, deck: Deck) -> FacadeResult<Record<Deck>> {
        self.mutate(
            "create_deck",
            vec![Invalidate::Key(QueryKey::all(Scope::Decks))],
            self.state.decks.create(deck),
        )
        .await
    }

    pub async fn update_deck(&self, deck_id: Id, patch: DeckPatch) -> FacadeResult<Record<Deck>> {
        self.mutate(
            "update_deck",
            deck_changed(),
            self.state.decks.update(deck_id, patch),
        )
        .await
    }

    /// Saved-deck rows pointing at the deck are kept; they stop resolving.
    pub async fn delete_deck(&self, deck_id: Id) -> FacadeResult<bool> {
        self.mutate(
            "delete_deck",
            deck_changed(),
            self.state.decks.delete(deck_id),
        )
        .await
    }

    pub async fn saved_decks(&self, user_id: Id) -> FacadeResult<Vec<Record<Deck>>> {
        self.query(
            QueryKey::item(Scope::SavedDecks, user_id),
            self.state.user_decks.get_user_decks(user_id),
        )
        .await
    }

    pub async fn user_deck_rows(&self) -> FacadeResult<Vec<Record<UserDeck>>> {
        self.query(
            QueryKey::all(Scope::UserDecks),
            self.state.user_decks.get_all(),
        )
        .await
    }

    pub async fn user_deck_row(&self, id: Id) -> FacadeResult<Record<UserDeck>> {
        self.query(
            QueryKey::item(Scope::UserDecks, id),
            self.state.user_decks.get_by_id(id),
        )
        .await
    }

    pub async fn save_deck(&self, user_id: Id, deck_id: Id) -> FacadeResult<Record<UserDeck>> {
        self.mutate(
            "save_deck",
            vec![
                Invalidate::Key(QueryKey::all(Scope::UserDecks)),
                Invalidate::Key(QueryKey::item(Scope::SavedDecks, user_id)),
            ],
            self.state.user_decks.create(UserDeck { user_id, deck_id }),
        )
        .await
    }

    pub async fn update_user_deck(
        &self,
        id: Id,
        patch: UserDeckPatch,
    ) -> FacadeResult<Record<UserDeck>> {
        self.mutate(
            "update_user_deck",
            saved_deck_changed(),
            self.state.user_decks.update(id, patch),
        )
        .await
    }

    pub async fn delete_user_deck(&self, id: Id) -> FacadeResult<bool> {
        self.mutate(
            "delete_user_deck",
            saved_deck_changed(),
            self.state.user_decks.delete(id),
        )
        .await
    }
}
