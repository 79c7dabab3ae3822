//! Application state with repository-based storage.
//!
//! Wires a store, optionally behind the caching decorator, into a single
//! `Arc<dyn ProductRepository>` that every command uses.

use std::sync::Arc;

use chrono::Utc;

use craftcatalog_core::catalog::generate_seed_products;
use craftcatalog_core::storage::{ProductRepository, Result as RepositoryResult};

use crate::cache::MemoryCache;
use crate::config::Config;
use crate::storage::{CachedProductRepository, InMemoryRepository, SqliteRepository};

/// Path that selects an in-memory SQLite database.
const SQLITE_IN_MEMORY: &str = ":memory:";

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Product repository (cached unless caching is disabled).
    pub products: Arc<dyn ProductRepository>,
    /// The cache behind `products`, if any.
    pub cache: Option<Arc<MemoryCache>>,
}

impl AppState {
    /// Opens the configured store and wraps it according to `config`.
    ///
    /// `in_memory` selects the throwaway [`InMemoryRepository`] instead of SQLite.
    pub async fn new(config: &Config, in_memory: bool) -> Result<Self, anyhow::Error> {
        if in_memory {
            return Ok(Self::with_store(Arc::new(InMemoryRepository::new()), config));
        }

        let sqlite_repo = if config.sqlite_path == SQLITE_IN_MEMORY {
            SqliteRepository::new_in_memory().await?
        } else {
            SqliteRepository::new(&config.sqlite_path).await?
        };
        Ok(Self::with_store(Arc::new(sqlite_repo), config))
    }

    /// Builds the state around an already opened store.
    pub fn with_store<R>(store: Arc<R>, config: &Config) -> Self
    where
        R: ProductRepository + 'static,
    {
        if !config.cache_enabled {
            tracing::debug!("Cache disabled, using store directly");
            return Self {
                products: store,
                cache: None,
            };
        }

        let memory_cache = Arc::new(MemoryCache::new(config.cache_max_entries));
        let cached_repo = CachedProductRepository::new(store, memory_cache.clone(), config.cache_ttl())
            .with_strategy(config.cache_invalidation);

        tracing::debug!(
            ttl_seconds = config.cache_ttl_seconds,
            max_entries = config.cache_max_entries,
            strategy = %config.cache_invalidation,
            "Cache enabled"
        );

        Self {
            products: Arc::new(cached_repo),
            cache: Some(memory_cache),
        }
    }

    /// Inserts the sample catalog if the store holds no products.
    ///
    /// Returns how many products were inserted.
    pub async fn seed(&self) -> RepositoryResult<usize> {
        if !self.products.get_all(false).await?.is_empty() {
            tracing::info!("Store already has products, skipping seed");
            return Ok(0);
        }

        let seed = generate_seed_products(Utc::now());
        for product in &seed {
            self.products.add(product).await?;
        }

        tracing::info!(count = seed.len(), "Seeded sample catalog");
        Ok(seed.len())
    }
}
