//! # Models
//!
//! Data types the feed provider works with: the channel/locale selection
//! contexts and the entities resolved from identifier batches.

pub mod channel;
pub mod entity;
pub mod locale;

pub use channel::Channel;
pub use entity::{EntityId, FeedEntity};
pub use locale::Locale;
