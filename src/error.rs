//! # Error Types
//!
//! Structured error handling for the feed provider using thiserror
//! instead of `Box<dyn Error>` patterns.

use thiserror::Error;

/// Crate-wide error type for feed data provisioning
#[derive(Error, Debug)]
pub enum FeedError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// No backing-store manager is registered for the provider's entity
    /// class. Raised on first use, never at provider construction.
    #[error("No entity manager registered for class {class}")]
    UnknownEntityClass { class: String },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type Result<T> = std::result::Result<T, FeedError>;
