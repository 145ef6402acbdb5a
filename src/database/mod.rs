//! # Database Layer
//!
//! Connection management plus the backing-store manager abstraction the
//! feed provider resolves entity classes against.

pub mod connection;
pub mod manager;

pub use connection::DatabaseConnection;
pub use manager::{EntityManager, PgEntityManager};
