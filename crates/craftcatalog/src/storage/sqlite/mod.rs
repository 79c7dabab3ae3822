//! SQLite storage backend implementation.
//!
//! This module provides a SQLite-based implementation of [`ProductRepository`](craftcatalog_core::storage::ProductRepository)
//! using `rusqlite` for synchronous operations and `tokio-rusqlite` for async wrapping.

mod conversions;
mod error;
mod repository;
mod schema;

pub use repository::SqliteRepository;
