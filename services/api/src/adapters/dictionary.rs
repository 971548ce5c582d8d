//! services/api/src/adapters/dictionary.rs

use async_trait::async_trait;
use kotoba_core::domain::{DictionaryEntry, Record};
use kotoba_core::ports::{DictionaryService, PortResult};
use tracing::debug;

use super::memory::MemoryStore;

pub type DictionaryStore = MemoryStore<DictionaryEntry>;

#[async_trait]
impl DictionaryService for MemoryStore<DictionaryEntry> {
    async fn search(&self, query: &str) -> PortResult<Vec<Record<DictionaryEntry>>> {
        let query = query.to_string();
        let hits: Vec<Record<DictionaryEntry>> = self
            .read(move |table| {
                Ok(table
                    .rows()
                    .iter()
                    .filter(|entry| entry.matches(&query))
                    .cloned()
                    .collect())
            })
            .await?;
        debug!("Dictionary search returned {} entries", hits.len());
        Ok(hits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::latency::Latency;
    use crate::seed::fixtures;
    use kotoba_core::ports::EntityStore;
    use kotoba_core::text;

    fn store() -> DictionaryStore {
        MemoryStore::with_records(fixtures::dictionary().unwrap(), Latency::none())
    }

    #[tokio::test]
    async fn search_by_translation_and_reading() {
        let store = store();

        let by_meaning = store.search("water").await.unwrap();
        assert_eq!(by_meaning.len(), 1);
        assert_eq!(text::surface(&by_meaning[0].word), "水");

        let by_reading = store.search("みず").await.unwrap();
        assert_eq!(by_reading[0].id, by_meaning[0].id);
    }

    #[tokio::test]
    async fn blank_search_lists_everything() {
        let store = store();
        let all = store.get_all().await.unwrap();
        assert_eq!(store.search(" ").await.unwrap(), all);
    }

    #[tokio::test]
    async fn search_without_hits_is_empty_not_an_error() {
        assert!(store().search("xylophone").await.unwrap().is_empty());
    }
}
