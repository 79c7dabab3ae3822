//! Cached repository decorators.
//!
//! This module provides decorator implementations that wrap repository traits
//! with caching behavior. The decorators implement the cache-aside pattern:
//!
//! - **Reads**: Check cache first, on miss fetch from repository and populate cache
//! - **Writes**: Persist to repository, then evict affected cache entries
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! let repo = Arc::new(SqliteRepository::new("craftcatalog.db").await?);
//! let cache = Arc::new(MemoryCache::new(10_000));
//!
//! let cached_repo = CachedProductRepository::new(repo, cache, Duration::from_secs(300));
//! ```

mod product;

pub use product::CachedProductRepository;
