//! # Entity Store Managers
//!
//! The backing-store handle for one entity class. The provider resolves a
//! manager through the [`crate::registry::ManagerRegistry`] and uses it to
//! count a scoped selection, page through its identifiers, and rebuild a
//! batch of identifiers into full entities.

use crate::error::Result;
use crate::models::{EntityId, FeedEntity};
use crate::query_builder::SelectQuery;
use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

/// Store-access handle for one entity class
#[async_trait]
pub trait EntityManager: Send + Sync {
    /// Base query selecting all instances of the entity class
    fn base_query(&self) -> SelectQuery;

    /// Total number of rows matching the scoped query
    async fn count(&self, query: &SelectQuery) -> Result<u64>;

    /// One identifier page of the scoped query, in stable identifier order
    async fn select_ids(
        &self,
        query: &SelectQuery,
        limit: u64,
        offset: u64,
    ) -> Result<Vec<EntityId>>;

    /// Rebuild the scoped query into a fetch filtered to the given
    /// identifiers. Identifiers that no longer exist are omitted from the
    /// result, not reported as errors.
    async fn fetch_by_ids(&self, query: &SelectQuery, ids: &[EntityId]) -> Result<Vec<FeedEntity>>;
}

/// PostgreSQL-backed entity manager over one table
///
/// The payload of fetched entities is the full row rendered with
/// `to_jsonb`, so one manager type serves any entity table without a
/// per-class row struct.
pub struct PgEntityManager {
    pool: PgPool,
    table: String,
    id_column: String,
    payload_select: String,
}

impl PgEntityManager {
    pub fn new(pool: PgPool, table: &str, id_column: &str) -> Self {
        Self {
            pool,
            table: table.to_string(),
            id_column: id_column.to_string(),
            payload_select: format!("to_jsonb({table})"),
        }
    }

    pub fn table(&self) -> &str {
        &self.table
    }
}

#[async_trait]
impl EntityManager for PgEntityManager {
    fn base_query(&self) -> SelectQuery {
        SelectQuery::new(&self.table)
    }

    async fn count(&self, query: &SelectQuery) -> Result<u64> {
        let total = query.count(&self.pool).await?;
        debug!(table = %self.table, total, "Counted scoped selection");
        Ok(u64::try_from(total).unwrap_or(0))
    }

    async fn select_ids(
        &self,
        query: &SelectQuery,
        limit: u64,
        offset: u64,
    ) -> Result<Vec<EntityId>> {
        let page_query = query
            .clone()
            .select(&[&self.id_column])
            .order_asc(&self.id_column)
            .limit(limit)
            .offset(offset);

        let sql = page_query.build_sql();
        let ids: Vec<EntityId> = sqlx::query_scalar(&sql).fetch_all(&self.pool).await?;

        debug!(
            table = %self.table,
            limit,
            offset,
            returned = ids.len(),
            "Selected identifier page"
        );

        Ok(ids)
    }

    async fn fetch_by_ids(&self, query: &SelectQuery, ids: &[EntityId]) -> Result<Vec<FeedEntity>> {
        let id_values: Vec<serde_json::Value> = ids
            .iter()
            .map(|id| serde_json::Value::Number((*id).into()))
            .collect();

        let id_field = format!("{} AS id", self.id_column);
        let payload_field = format!("{} AS payload", self.payload_select);
        let fetch_query = query
            .clone()
            .select(&[&id_field, &payload_field])
            .where_in(&self.id_column, id_values);

        let entities: Vec<FeedEntity> = fetch_query.fetch_all(&self.pool).await?;

        debug!(
            table = %self.table,
            requested = ids.len(),
            returned = entities.len(),
            "Fetched entities for batch"
        );

        Ok(entities)
    }
}
