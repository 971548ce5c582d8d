//! services/api/src/facade/dictionary.rs

use kotoba_core::domain::{DictionaryEntry, Id, Record};
use kotoba_core::patch::DictionaryEntryPatch;
use kotoba_core::ports::{DictionaryService, EntityStore};

use super::{Facade, FacadeResult, Invalidate, QueryKey, Scope};

fn entry_changed() -> Vec<Invalidate> {
    vec![
        Invalidate::Scope(Scope::Dictionary),
        Invalidate::Scope(Scope::DictionarySearch),
    ]
}

impl Facade {
    pub async fn dictionary(&self) -> FacadeResult<Vec<Record<DictionaryEntry>>> {
        self.query(
            QueryKey::all(Scope::Dictionary),
            self.state.dictionary.get_all(),
        )
        .await
    }

    pub async fn dictionary_entry(&self, id: Id) -> FacadeResult<Record<DictionaryEntry>> {
        self.query(
            QueryKey::item(Scope::Dictionary, id),
            self.state.dictionary.get_by_id(id),
        )
        .await
    }

    /// Results are cached per trimmed query text.
    pub async fn search_dictionary(&self, query: &str) -> FacadeResult<Vec<Record<DictionaryEntry>>> {
        let query = query.trim();
        self.query(
            QueryKey::text(Scope::DictionarySearch, query),
            self.state.dictionary.search(query),
        )
        .await
    }

    /// A new entry can match any cached search, so every search result is dropped.
    pub async fn create_dictionary_entry(
        &self,
        entry: DictionaryEntry,
    ) -> FacadeResult<Record<DictionaryEntry>> {
        self.mutate(
            "create_dictionary_entry",
            vec![
                Invalidate::Key(QueryKey::all(Scope::Dictionary)),
                Invalidate::Scope(Scope::DictionarySearch),
            ],
            self.state.dictionary.create(entry),
        )
        .await
    }

    pub async fn update_dictionary_entry(
        &self,
        id: Id,
        patch: DictionaryEntryPatch,
    ) -> FacadeResult<Record<DictionaryEntry>> {
        self.mutate(
            "update_dictionary_entry",
            entry_changed(),
            self.state.dictionary.update(id, patch),
        )
        .await
    }

    pub async fn delete_dictionary_entry(&self, id: Id) -> FacadeResult<bool> {
        self.mutate(
            "delete_dictionary_entry",
            entry_changed(),
            self.state.dictionary.delete(id),
        )
        .await
    }
}
