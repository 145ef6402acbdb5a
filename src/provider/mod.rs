//! # Batch Data Provider
//!
//! The core of the feed export pipeline: paged iteration over one entity
//! class, scoped by sales channel and locale.
//!
//! ## Overview
//!
//! A [`DataProvider`] is configured with one entity class and a batch
//! size. For a (channel, locale) pair it builds a base query over the
//! class, lets the injected [`QueryCustomizer`] narrow it, and derives an
//! [`IdBatcher`] that pages the selection's identifiers lazily. Batchers
//! are cached per pair for the lifetime of the provider, so repeated
//! exports of the same selection reuse the count and setup work.
//!
//! Batches resolve back into full entities through
//! [`DataProvider::get_items`], which rebuilds the scoped query with an
//! identifier filter.

pub mod batch;
pub mod batcher;
pub mod customizer;
pub mod data_provider;

pub use batch::Batch;
pub use batcher::IdBatcher;
pub use customizer::{NoopCustomizer, QueryCustomizer};
pub use data_provider::{DataProvider, DEFAULT_BATCH_SIZE};
