//! Storage backend implementations.
//!
//! This module provides concrete implementations of the
//! [`ProductRepository`](craftcatalog_core::storage::ProductRepository) trait
//! defined in `craftcatalog_core::storage`, plus the caching decorator that
//! wraps any of them.

pub mod cached;
pub mod inmemory;
pub mod sqlite;

pub use cached::CachedProductRepository;
pub use inmemory::InMemoryRepository;
pub use sqlite::SqliteRepository;
