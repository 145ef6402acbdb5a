//! # Query Builder System
//!
//! Small SQL select builder backing the feed data provider.
//!
//! The provider hands a mutable [`SelectQuery`] to the query-customization
//! hook, derives identifier pages from it, and later rebuilds it into a
//! concrete fetch query for a batch of identifiers. Queries render to SQL
//! strings and execute through SQLx's runtime APIs.
//!
//! ## Key Components
//!
//! - [`builder`] - Core select builder with SQL generation and execution
//! - [`conditions`] - WHERE clause building
//! - [`pagination`] - LIMIT/OFFSET pagination and batch-count arithmetic

pub mod builder;
pub mod conditions;
pub mod pagination;

pub use builder::SelectQuery;
pub use conditions::{Condition, LogicalOperator, WhereClause};
pub use pagination::Pagination;
