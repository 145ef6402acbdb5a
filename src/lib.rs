#![allow(clippy::doc_markdown)] // Allow technical terms like PostgreSQL, SQLx in docs
#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # Feedgen Core Rust
//!
//! Rust core for batched product-feed export over PostgreSQL.
//!
//! ## Overview
//!
//! Feed generation walks large entity collections (products, taxons, ...)
//! per sales channel and locale. This crate provides the batching data
//! provider at the heart of that pipeline: it pages a scoped entity
//! selection into fixed-size identifier batches lazily, caches the pager
//! per (channel, locale) pair, and resolves batches back into full entity
//! records on demand.
//!
//! ## Architecture
//!
//! - A [`registry::ManagerRegistry`] maps entity class names to
//!   backing-store managers ([`database::EntityManager`]).
//! - A [`provider::DataProvider`] is bound to one class and one batch
//!   size. Per (channel, locale) pair it builds a base query, lets the
//!   injected [`provider::QueryCustomizer`] narrow it, and derives a
//!   cached [`provider::IdBatcher`].
//! - Batches are pulled lazily as a stream; each carries its scoped query
//!   so [`provider::DataProvider::get_items`] can rebuild a concrete
//!   fetch for its identifiers.
//!
//! ## Module Organization
//!
//! - [`provider`] - Batch data provider, batcher, customization hook
//! - [`query_builder`] - SQL select building and pagination
//! - [`database`] - Connection management and store managers
//! - [`registry`] - Entity class to manager resolution
//! - [`models`] - Channel, locale and entity types
//! - [`config`] - Configuration management
//! - [`error`] - Structured error handling
//! - [`logging`] - Structured logging setup
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use feedgen_core::config::FeedConfig;
//! use feedgen_core::database::{DatabaseConnection, PgEntityManager};
//! use feedgen_core::models::{Channel, Locale};
//! use feedgen_core::provider::{DataProvider, NoopCustomizer};
//! use feedgen_core::registry::ManagerRegistry;
//! use futures::TryStreamExt;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = FeedConfig::from_env()?;
//! let connection = DatabaseConnection::new(&config).await?;
//!
//! let mut registry = ManagerRegistry::new();
//! registry.register(
//!     "Product",
//!     Arc::new(PgEntityManager::new(connection.pool().clone(), "products", "id")),
//! );
//!
//! let mut provider = DataProvider::new(
//!     Arc::new(registry),
//!     Arc::new(NoopCustomizer),
//!     "Product",
//! )
//! .with_batch_size(config.batch_size);
//!
//! let channel = Channel::new("WEB-EU");
//! let locale = Locale::new("en_US");
//!
//! let stream = provider.get_batches(&channel, &locale)?;
//! futures::pin_mut!(stream);
//! while let Some(batch) = stream.try_next().await? {
//!     let items = provider.get_items(&batch).await?;
//!     println!("exporting {} of {} ids", items.len(), batch.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod database;
pub mod error;
pub mod logging;
pub mod models;
pub mod provider;
pub mod query_builder;
pub mod registry;

pub use config::FeedConfig;
pub use database::{DatabaseConnection, EntityManager, PgEntityManager};
pub use error::{FeedError, Result};
pub use models::{Channel, EntityId, FeedEntity, Locale};
pub use provider::{
    Batch, DataProvider, IdBatcher, NoopCustomizer, QueryCustomizer, DEFAULT_BATCH_SIZE,
};
pub use query_builder::SelectQuery;
pub use registry::ManagerRegistry;
