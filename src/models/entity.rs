use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Identifier type for exportable entities
pub type EntityId = i64;

/// An entity resolved from a batch of identifiers
///
/// The payload carries the full record serialized as JSON, which is the
/// shape downstream feed templates consume. Keeping the payload opaque
/// lets one provider type serve any registered entity class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct FeedEntity {
    pub id: EntityId,
    pub payload: serde_json::Value,
}

impl FeedEntity {
    pub fn new(id: EntityId, payload: serde_json::Value) -> Self {
        Self { id, payload }
    }
}
