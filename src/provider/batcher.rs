use super::batch::Batch;
use crate::database::EntityManager;
use crate::error::Result;
use crate::query_builder::{Pagination, SelectQuery};
use futures::stream::{self, Stream};
use std::sync::Arc;
use tokio::sync::OnceCell;

/// Stateful identifier pager bound to one scoped selection
///
/// Owns the scoped query and the total item count for one
/// (channel, locale) selection. The count is issued at most once per
/// batcher; the provider caches batchers per selection, which is what
/// makes repeated exports of the same pair cheap.
pub struct IdBatcher {
    manager: Arc<dyn EntityManager>,
    query: SelectQuery,
    total: OnceCell<u64>,
}

impl IdBatcher {
    pub fn new(manager: Arc<dyn EntityManager>, query: SelectQuery) -> Self {
        Self {
            manager,
            query,
            total: OnceCell::new(),
        }
    }

    pub fn query(&self) -> &SelectQuery {
        &self.query
    }

    /// Total items in the scoped selection, counted at most once
    pub async fn total_items(&self) -> Result<u64> {
        self.total
            .get_or_try_init(|| async { self.manager.count(&self.query).await })
            .await
            .copied()
    }

    /// How many batches the given size produces for this selection
    pub async fn batch_count(&self, batch_size: u64) -> Result<u64> {
        let total = self.total_items().await?;
        Ok(Pagination::batch_count_for(total, batch_size))
    }

    /// Lazy, forward-only sequence of identifier batches
    ///
    /// Each identifier page is fetched only when iteration reaches it, so
    /// peak memory is bounded by one page. The sequence is finite and
    /// restartable: calling again derives a fresh stream over the same
    /// cached selection. A short page ends the stream without issuing a
    /// further query.
    pub fn batches(
        self: Arc<Self>,
        batch_size: u64,
    ) -> impl Stream<Item = Result<Batch>> + Send + 'static {
        stream::try_unfold(
            (self, 0u64, false),
            move |(batcher, offset, done)| async move {
                if done {
                    return Ok(None);
                }

                let ids = batcher
                    .manager
                    .select_ids(&batcher.query, batch_size, offset)
                    .await?;
                if ids.is_empty() {
                    return Ok(None);
                }

                let fetched = ids.len() as u64;
                let finished = fetched < batch_size;
                let batch = Batch::new(ids, batcher.query.clone());

                Ok(Some((batch, (batcher, offset + fetched, finished))))
            },
        )
    }
}
