use super::batch::Batch;
use super::batcher::IdBatcher;
use super::customizer::QueryCustomizer;
use crate::database::EntityManager;
use crate::error::{FeedError, Result};
use crate::models::{Channel, FeedEntity, Locale};
use crate::registry::ManagerRegistry;
use futures::stream::Stream;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Default number of identifiers per batch
pub const DEFAULT_BATCH_SIZE: u64 = 100;

/// Composite cache key for one (channel, locale) selection
///
/// Structured rather than concatenated so channel "AB" + locale "C" can
/// never collide with channel "A" + locale "BC".
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct BatcherKey {
    channel: String,
    locale: String,
}

impl BatcherKey {
    fn new(channel: &Channel, locale: &Locale) -> Self {
        Self {
            channel: channel.code().to_string(),
            locale: locale.code().to_string(),
        }
    }
}

/// Batch data provider for one entity class
///
/// Exposes a paged view over the class's collection, scoped by channel
/// and locale, and resolves batches back into full entities. The batcher
/// cache is unsynchronized; methods that touch it take `&mut self`, so a
/// single provider instance cannot be shared across concurrent exports.
/// Use one instance per concurrent (channel, locale) export.
pub struct DataProvider {
    registry: Arc<ManagerRegistry>,
    customizer: Arc<dyn QueryCustomizer>,
    class: String,
    batch_size: u64,
    batchers: HashMap<BatcherKey, Arc<IdBatcher>>,
}

impl DataProvider {
    /// Create a provider for the given entity class with the default
    /// batch size
    ///
    /// Construction never touches the store; a missing manager for the
    /// class surfaces as [`FeedError::UnknownEntityClass`] on first use.
    pub fn new(
        registry: Arc<ManagerRegistry>,
        customizer: Arc<dyn QueryCustomizer>,
        class: impl Into<String>,
    ) -> Self {
        Self {
            registry,
            customizer,
            class: class.into(),
            batch_size: DEFAULT_BATCH_SIZE,
            batchers: HashMap::new(),
        }
    }

    pub fn with_batch_size(mut self, batch_size: u64) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// The bound entity class name
    pub fn class(&self) -> &str {
        &self.class
    }

    pub fn batch_size(&self) -> u64 {
        self.batch_size
    }

    /// Lazy, forward-only sequence of identifier batches for the selection
    ///
    /// Builds or reuses the batcher cached for the (channel, locale) pair
    /// and derives a fresh stream from it. Batch ordering is deterministic
    /// for a stable underlying collection; every batch but the last holds
    /// exactly `batch_size` identifiers.
    pub fn get_batches(
        &mut self,
        channel: &Channel,
        locale: &Locale,
    ) -> Result<impl Stream<Item = Result<Batch>> + Send + 'static> {
        let batch_size = self.batch_size;
        let batcher = self.batcher(channel, locale)?;
        Ok(batcher.batches(batch_size))
    }

    /// How many batches the configured batch size produces for the
    /// selection; consistent with what [`Self::get_batches`] yields
    pub async fn get_batch_count(&mut self, channel: &Channel, locale: &Locale) -> Result<u64> {
        let batch_size = self.batch_size;
        let batcher = self.batcher(channel, locale)?;
        batcher.batch_count(batch_size).await
    }

    /// Resolve a batch back into full entities
    ///
    /// Re-issues the batch's scoped query filtered to its identifiers.
    /// Identifiers deleted since batching are omitted from the result, so
    /// callers must not assume `batch.len()` entities come back.
    pub async fn get_items(&self, batch: &Batch) -> Result<Vec<FeedEntity>> {
        if batch.is_empty() {
            return Ok(vec![]);
        }

        let manager = self.manager()?;
        manager.fetch_by_ids(batch.query(), batch.ids()).await
    }

    fn manager(&self) -> Result<Arc<dyn EntityManager>> {
        self.registry
            .manager_for_class(&self.class)
            .ok_or_else(|| FeedError::UnknownEntityClass {
                class: self.class.clone(),
            })
    }

    /// Build or reuse the batcher for a (channel, locale) selection
    ///
    /// The customization hook runs exactly once per batcher creation;
    /// cache hits bypass both the hook and the count query.
    fn batcher(&mut self, channel: &Channel, locale: &Locale) -> Result<Arc<IdBatcher>> {
        if self.batch_size == 0 {
            return Err(FeedError::Configuration(
                "batch_size must be at least 1".to_string(),
            ));
        }

        let key = BatcherKey::new(channel, locale);
        if let Some(batcher) = self.batchers.get(&key) {
            return Ok(Arc::clone(batcher));
        }

        let manager = self.manager()?;
        let query = self
            .customizer
            .customize(manager.base_query(), channel, locale);

        debug!(
            class = %self.class,
            channel = %channel.code(),
            locale = %locale.code(),
            "Created identifier batcher for selection"
        );

        let batcher = Arc::new(IdBatcher::new(manager, query));
        self.batchers.insert(key, Arc::clone(&batcher));
        Ok(batcher)
    }
}
