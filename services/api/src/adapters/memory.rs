//! services/api/src/adapters/memory.rs
//!
//! The in-memory store adapter. One `MemoryStore<T>` owns the collection and
//! id counter of a single entity type and implements the generic
//! `EntityStore` port from the `core` crate. Bespoke per-entity queries are
//! implemented in the sibling modules on top of `read`/`write`.

use async_trait::async_trait;
use kotoba_core::domain::{Id, Record};
use kotoba_core::patch::Patch;
use kotoba_core::ports::{Entity, EntityStore, PortError, PortResult};
use tokio::sync::RwLock;
use tracing::{debug, info};

use super::latency::Latency;

//=========================================================================================
// Backing Table
//=========================================================================================

/// An ordered collection plus the counter that hands out ids.
#[derive(Debug)]
pub struct Table<T> {
    rows: Vec<Record<T>>,
    next_id: Id,
}

impl<T: Entity> Table<T> {
    fn new(rows: Vec<Record<T>>) -> Self {
        let next_id = rows.iter().map(|r| r.id + 1).max().unwrap_or(0);
        Self { rows, next_id }
    }

    pub fn rows(&self) -> &[Record<T>] {
        &self.rows
    }

    pub fn get(&self, id: Id) -> PortResult<&Record<T>> {
        self.rows
            .iter()
            .find(|r| r.id == id)
            .ok_or(PortError::not_found(T::KIND, id))
    }

    pub fn get_mut(&mut self, id: Id) -> PortResult<&mut Record<T>> {
        self.rows
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(PortError::not_found(T::KIND, id))
    }

    pub fn insert(&mut self, data: T) -> Record<T> {
        let record = Record::new(self.next_id, data);
        self.next_id += 1;
        self.rows.push(record.clone());
        record
    }

    pub fn remove(&mut self, id: Id) -> PortResult<Record<T>> {
        let index = self
            .rows
            .iter()
            .position(|r| r.id == id)
            .ok_or(PortError::not_found(T::KIND, id))?;
        Ok(self.rows.remove(index))
    }

    /// Applies `change` to the record's body and returns the updated record.
    pub fn modify(&mut self, id: Id, change: impl FnOnce(&mut T)) -> PortResult<Record<T>> {
        let record = self.get_mut(id)?;
        change(&mut record.data);
        Ok(record.clone())
    }
}

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

/// An in-memory store for one entity type.
///
/// Each operation runs to completion under the table lock; the simulated
/// latency is applied after the lock is released.
#[derive(Debug)]
pub struct MemoryStore<T> {
    table: RwLock<Table<T>>,
    latency: Latency,
}

impl<T: Entity> MemoryStore<T> {
    /// Creates an empty store whose first id is 0.
    pub fn new(latency: Latency) -> Self {
        Self::with_records(Vec::new(), latency)
    }

    /// Creates a store holding `records`; new ids continue after the highest seeded id.
    pub fn with_records(records: Vec<Record<T>>, latency: Latency) -> Self {
        Self {
            table: RwLock::new(Table::new(records)),
            latency,
        }
    }

    /// Runs a read-only operation against the table, then waits out the latency.
    pub async fn read<R, F>(&self, op: F) -> PortResult<R>
    where
        R: Send,
        F: FnOnce(&Table<T>) -> PortResult<R> + Send,
    {
        let result = {
            let table = self.table.read().await;
            op(&table)
        };
        self.latency.simulate(result).await
    }

    /// Runs a mutating operation against the table, then waits out the latency.
    pub async fn write<R, F>(&self, op: F) -> PortResult<R>
    where
        R: Send,
        F: FnOnce(&mut Table<T>) -> PortResult<R> + Send,
    {
        let result = {
            let mut table = self.table.write().await;
            op(&mut table)
        };
        self.latency.simulate(result).await
    }
}

//=========================================================================================
// `EntityStore` Trait Implementation
//=========================================================================================

#[async_trait]
impl<T: Entity> EntityStore<T> for MemoryStore<T> {
    async fn get_all(&self) -> PortResult<Vec<Record<T>>> {
        self.read(|table| Ok(table.rows().to_vec())).await
    }

    async fn get_by_id(&self, id: Id) -> PortResult<Record<T>> {
        self.read(move |table| table.get(id).cloned()).await
    }

    async fn create(&self, data: T) -> PortResult<Record<T>> {
        let record = self.write(move |table| Ok(table.insert(data))).await?;
        info!("Created {} {}", T::KIND, record.id);
        Ok(record)
    }

    async fn update(&self, id: Id, patch: T::Patch) -> PortResult<Record<T>> {
        let record = self
            .write(move |table| table.modify(id, |data| patch.apply(data)))
            .await?;
        debug!("Updated {} {}", T::KIND, id);
        Ok(record)
    }

    async fn delete(&self, id: Id) -> PortResult<bool> {
        self.write(move |table| table.remove(id)).await?;
        info!("Deleted {} {}", T::KIND, id);
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kotoba_core::domain::{Card, Deck, JlptLevel, Topic};
    use kotoba_core::patch::DeckPatch;
    use kotoba_core::ports::EntityKind;

    fn deck(name: &str) -> Deck {
        Deck {
            name: name.into(),
            description: format!("{name} vocabulary"),
            jlpt_level: JlptLevel::N5,
            topic: Topic::DailyLife,
            cards: vec![Card {
                front: "水".into(),
                back: "water".into(),
                hiragana: "みず".into(),
                katakana: None,
                examples: vec!["水を飲みます。".into()],
            }],
        }
    }

    fn store() -> MemoryStore<Deck> {
        MemoryStore::new(Latency::none())
    }

    #[tokio::test]
    async fn create_then_get_returns_input_plus_id() {
        let store = store();
        let created = store.create(deck("Basics")).await.unwrap();
        assert_eq!(created.id, 0);

        let fetched = store.get_by_id(created.id).await.unwrap();
        assert_eq!(fetched, Record::new(0, deck("Basics")));
    }

    #[tokio::test]
    async fn ids_are_never_reused_after_delete() {
        let store = store();
        let first = store.create(deck("One")).await.unwrap();
        let second = store.create(deck("Two")).await.unwrap();
        assert!(store.delete(second.id).await.unwrap());

        let third = store.create(deck("Three")).await.unwrap();
        assert_eq!((first.id, second.id, third.id), (0, 1, 2));

        let ids: Vec<Id> = store.get_all().await.unwrap().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![0, 2]);
    }

    #[tokio::test]
    async fn seeded_store_continues_after_highest_id() {
        let store = MemoryStore::with_records(
            vec![Record::new(4, deck("Seed A")), Record::new(9, deck("Seed B"))],
            Latency::none(),
        );
        let created = store.create(deck("New")).await.unwrap();
        assert_eq!(created.id, 10);
    }

    #[tokio::test]
    async fn delete_twice_is_not_found() {
        let store = store();
        let created = store.create(deck("Gone")).await.unwrap();
        store.delete(created.id).await.unwrap();

        let err = store.delete(created.id).await.unwrap_err();
        assert_eq!(err, PortError::not_found(EntityKind::Deck, created.id));
        assert!(store.get_by_id(created.id).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn update_overwrites_only_patched_fields() {
        let store = store();
        let created = store.create(deck("Before")).await.unwrap();
        let patch = DeckPatch {
            name: Some("After".into()),
            topic: Some(Topic::Travel),
            ..Default::default()
        };

        let updated = store.update(created.id, patch).await.unwrap();
        assert_eq!(updated.name, "After");
        assert_eq!(updated.topic, Topic::Travel);
        assert_eq!(updated.description, created.description);
        assert_eq!(updated.cards, created.cards);
        assert_eq!(store.get_by_id(created.id).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn update_missing_record_is_not_found() {
        let err = store()
            .update(3, DeckPatch::default())
            .await
            .unwrap_err();
        assert_eq!(err, PortError::not_found(EntityKind::Deck, 3));
    }

    #[tokio::test]
    async fn get_all_returns_an_independent_copy() {
        let store = store();
        store.create(deck("Kept")).await.unwrap();

        let mut snapshot = store.get_all().await.unwrap();
        snapshot.clear();

        assert_eq!(store.get_all().await.unwrap().len(), 1);
    }
}
