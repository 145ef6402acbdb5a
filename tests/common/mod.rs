//! Shared test helpers: an in-memory, call-counting entity store the
//! provider tests run against instead of a live database.

use async_trait::async_trait;
use feedgen_core::database::EntityManager;
use feedgen_core::error::Result;
use feedgen_core::models::{EntityId, FeedEntity};
use feedgen_core::query_builder::SelectQuery;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// In-memory entity store keyed by identifier
///
/// Counts store round trips so tests can assert on batcher memoization
/// and lazy iteration. Scoping conditions on the query are ignored; the
/// store plays the role of an already-scoped selection.
pub struct InMemoryEntityManager {
    entities: Mutex<BTreeMap<EntityId, serde_json::Value>>,
    count_calls: AtomicUsize,
    select_calls: AtomicUsize,
    fetch_calls: AtomicUsize,
}

impl InMemoryEntityManager {
    pub fn with_ids(ids: &[EntityId]) -> Self {
        let entities = ids
            .iter()
            .map(|id| (*id, serde_json::json!({ "code": format!("SKU-{id}") })))
            .collect();
        Self {
            entities: Mutex::new(entities),
            count_calls: AtomicUsize::new(0),
            select_calls: AtomicUsize::new(0),
            fetch_calls: AtomicUsize::new(0),
        }
    }

    /// Simulate an entity deleted between batching and fetching
    pub fn remove(&self, id: EntityId) {
        self.entities.lock().unwrap().remove(&id);
    }

    pub fn count_calls(&self) -> usize {
        self.count_calls.load(Ordering::SeqCst)
    }

    pub fn select_calls(&self) -> usize {
        self.select_calls.load(Ordering::SeqCst)
    }

    pub fn fetch_calls(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EntityManager for InMemoryEntityManager {
    fn base_query(&self) -> SelectQuery {
        SelectQuery::new("products")
    }

    async fn count(&self, _query: &SelectQuery) -> Result<u64> {
        self.count_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.entities.lock().unwrap().len() as u64)
    }

    async fn select_ids(
        &self,
        _query: &SelectQuery,
        limit: u64,
        offset: u64,
    ) -> Result<Vec<EntityId>> {
        self.select_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .entities
            .lock()
            .unwrap()
            .keys()
            .skip(offset as usize)
            .take(limit as usize)
            .copied()
            .collect())
    }

    async fn fetch_by_ids(&self, _query: &SelectQuery, ids: &[EntityId]) -> Result<Vec<FeedEntity>> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        let entities = self.entities.lock().unwrap();
        Ok(ids
            .iter()
            .filter_map(|id| {
                entities
                    .get(id)
                    .map(|payload| FeedEntity::new(*id, payload.clone()))
            })
            .collect())
    }
}
