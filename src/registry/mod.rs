//! # Manager Registry
//!
//! Maps entity class names to their backing-store managers. Built once at
//! wiring time and consumed read-only by data providers.

use crate::database::EntityManager;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Registry resolving entity class names to store managers
#[derive(Default)]
pub struct ManagerRegistry {
    managers: HashMap<String, Arc<dyn EntityManager>>,
}

impl ManagerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a manager for an entity class, replacing any previous one
    pub fn register(&mut self, class: &str, manager: Arc<dyn EntityManager>) {
        debug!(class = %class, "Registered entity manager");
        self.managers.insert(class.to_string(), manager);
    }

    /// Resolve the manager for an entity class
    pub fn manager_for_class(&self, class: &str) -> Option<Arc<dyn EntityManager>> {
        self.managers.get(class).cloned()
    }

    pub fn registered_classes(&self) -> Vec<&str> {
        self.managers.keys().map(String::as_str).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;
    use crate::models::{EntityId, FeedEntity};
    use crate::query_builder::SelectQuery;
    use async_trait::async_trait;

    struct NullManager;

    #[async_trait]
    impl EntityManager for NullManager {
        fn base_query(&self) -> SelectQuery {
            SelectQuery::new("null_entities")
        }

        async fn count(&self, _query: &SelectQuery) -> Result<u64> {
            Ok(0)
        }

        async fn select_ids(
            &self,
            _query: &SelectQuery,
            _limit: u64,
            _offset: u64,
        ) -> Result<Vec<EntityId>> {
            Ok(vec![])
        }

        async fn fetch_by_ids(
            &self,
            _query: &SelectQuery,
            _ids: &[EntityId],
        ) -> Result<Vec<FeedEntity>> {
            Ok(vec![])
        }
    }

    #[test]
    fn test_register_and_resolve() {
        let mut registry = ManagerRegistry::new();
        registry.register("Product", Arc::new(NullManager));

        assert!(registry.manager_for_class("Product").is_some());
        assert!(registry.manager_for_class("Taxon").is_none());
        assert_eq!(registry.registered_classes(), vec!["Product"]);
    }
}
