//! In-memory storage backend for testing.
//!
//! This module provides an in-memory implementation of [`ProductRepository`](craftcatalog_core::storage::ProductRepository)
//! that stores all data in a HashMap wrapped in `Arc<RwLock<_>>`. This is useful
//! for testing and ephemeral runs where persistence is not required.
//!
//! # Example
//!
//! ```rust,ignore
//! use craftcatalog::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new();
//! // Use repo for testing...
//! ```

mod repository;

pub use repository::InMemoryRepository;
