use crate::models::EntityId;
use crate::query_builder::SelectQuery;

/// An ordered, bounded group of entity identifiers
///
/// Carries the scoped query it was derived from so it can be rebuilt into
/// a concrete fetch query later, independent of the batcher that produced
/// it.
#[derive(Debug, Clone)]
pub struct Batch {
    ids: Vec<EntityId>,
    query: SelectQuery,
}

impl Batch {
    pub fn new(ids: Vec<EntityId>, query: SelectQuery) -> Self {
        Self { ids, query }
    }

    pub fn ids(&self) -> &[EntityId] {
        &self.ids
    }

    pub fn query(&self) -> &SelectQuery {
        &self.query
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
