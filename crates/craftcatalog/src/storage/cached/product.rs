//! Cached product repository decorator.
//!
//! Wraps a `ProductRepository` implementation with the cache-aside pattern.
//! Every successful write evicts the cached reads it could have changed:
//! either the targeted set of keys planned by [`plan_invalidation`], or the
//! whole cache.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use craftcatalog_core::cache::{
    deserialize_product, deserialize_products, plan_invalidation, product_key, products_key,
    serialize_product, serialize_products, Cache, InvalidationStrategy, SerializationError,
    WriteEffect,
};
use craftcatalog_core::catalog::{Product, ProductCategory, ProductStatus};
use craftcatalog_core::storage::{ProductFilter, ProductRepository, Result};

/// Cached product repository decorator.
///
/// Implements the cache-aside pattern:
/// - **Reads**: Check cache first, on miss fetch from repository and populate cache
/// - **Writes**: Persist to repository, then evict every affected cache entry
///
/// `search` and `exists` always go to the repository. Missing products are
/// never cached. Cache failures are logged and treated as misses; they never
/// reach the caller.
///
/// # Type Parameters
///
/// * `R` - The underlying repository implementation
/// * `C` - The cache implementation
pub struct CachedProductRepository<R, C>
where
    R: ProductRepository,
    C: Cache,
{
    repository: Arc<R>,
    cache: Arc<C>,
    ttl: Duration,
    strategy: InvalidationStrategy,
}

impl<R, C> CachedProductRepository<R, C>
where
    R: ProductRepository,
    C: Cache,
{
    /// Creates a new cached product repository with targeted invalidation.
    ///
    /// # Arguments
    ///
    /// * `repository` - The underlying repository to cache
    /// * `cache` - The cache implementation
    /// * `ttl` - Time-to-live for every cached entry
    pub fn new(repository: Arc<R>, cache: Arc<C>, ttl: Duration) -> Self {
        Self {
            repository,
            cache,
            ttl,
            strategy: InvalidationStrategy::default(),
        }
    }

    /// Sets how writes evict cached entries.
    pub fn with_strategy(mut self, strategy: InvalidationStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Reads and decodes a cached value. Any failure reads as a miss.
    async fn read_cached<T>(
        &self,
        key: &str,
        decode: fn(&[u8]) -> std::result::Result<T, SerializationError>,
    ) -> Option<T> {
        match self.cache.get(key).await {
            Ok(Some(bytes)) => match decode(&bytes) {
                Ok(value) => Some(value),
                Err(err) => {
                    // Deserialization failed - treat as cache miss
                    tracing::warn!(key, error = %err, "Cache entry deserialization failed");
                    None
                }
            },
            Ok(None) => None,
            Err(err) => {
                tracing::warn!(key, error = %err, "Cache read failed");
                None
            }
        }
    }

    async fn populate(
        &self,
        key: &str,
        encoded: std::result::Result<Vec<u8>, SerializationError>,
    ) {
        let bytes = match encoded {
            Ok(bytes) => bytes,
            Err(err) => {
                tracing::warn!(key, error = %err, "Cache entry serialization failed");
                return;
            }
        };
        if let Err(err) = self.cache.set(key, &bytes, Some(self.ttl)).await {
            tracing::warn!(key, error = %err, "Failed to populate cache");
        }
    }

    async fn fetch_list(&self, filter: ProductFilter, include_images: bool) -> Result<Vec<Product>> {
        match filter {
            ProductFilter::All => self.repository.get_all(include_images).await,
            ProductFilter::Public => self.repository.get_public(include_images).await,
            ProductFilter::Category(category) => {
                self.repository
                    .get_by_category(category, include_images)
                    .await
            }
            ProductFilter::Status(status) => {
                self.repository.get_by_status(status, include_images).await
            }
        }
    }

    async fn cached_list(
        &self,
        filter: ProductFilter,
        include_images: bool,
    ) -> Result<Vec<Product>> {
        let cache_key = products_key(filter, include_images);

        if let Some(products) = self.read_cached(&cache_key, deserialize_products).await {
            tracing::trace!(key = %cache_key, count = products.len(), "Cache hit for products");
            return Ok(products);
        }

        tracing::trace!(key = %cache_key, "Cache miss for products");
        let products = self.fetch_list(filter, include_images).await?;

        self.populate(&cache_key, serialize_products(&products))
            .await;
        Ok(products)
    }

    /// Evicts everything a successful write could have made stale.
    async fn invalidate(&self, id: i64, effect: WriteEffect<'_>) {
        if self.strategy == InvalidationStrategy::Flush {
            self.flush().await;
            return;
        }

        let patterns = plan_invalidation(effect);
        for pattern in &patterns {
            if let Err(err) = self.cache.delete_pattern(pattern).await {
                tracing::warn!(
                    product_id = id,
                    pattern = %pattern,
                    error = %err,
                    "Targeted invalidation failed, flushing cache"
                );
                self.flush().await;
                return;
            }
        }

        tracing::debug!(product_id = id, ?patterns, "Cache invalidated");
    }

    async fn flush(&self) {
        match self.cache.clear().await {
            Ok(()) => tracing::debug!("Cache flushed"),
            Err(err) => tracing::warn!(error = %err, "Failed to flush cache"),
        }
    }
}

#[async_trait]
impl<R, C> ProductRepository for CachedProductRepository<R, C>
where
    R: ProductRepository + 'static,
    C: Cache + 'static,
{
    async fn get_by_id(
        &self,
        id: i64,
        include_images: bool,
        read_only: bool,
    ) -> Result<Option<Product>> {
        let cache_key = product_key(id, include_images, read_only);

        if let Some(product) = self.read_cached(&cache_key, deserialize_product).await {
            tracing::trace!(product_id = id, "Cache hit for product");
            return Ok(Some(product));
        }

        tracing::trace!(product_id = id, "Cache miss for product");
        let product = self
            .repository
            .get_by_id(id, include_images, read_only)
            .await?;

        // Only found products are cached
        if let Some(ref p) = product {
            self.populate(&cache_key, serialize_product(p)).await;
        }

        Ok(product)
    }

    async fn get_all(&self, include_images: bool) -> Result<Vec<Product>> {
        self.cached_list(ProductFilter::All, include_images).await
    }

    async fn get_public(&self, include_images: bool) -> Result<Vec<Product>> {
        self.cached_list(ProductFilter::Public, include_images)
            .await
    }

    async fn get_by_category(
        &self,
        category: ProductCategory,
        include_images: bool,
    ) -> Result<Vec<Product>> {
        self.cached_list(ProductFilter::Category(category), include_images)
            .await
    }

    async fn get_by_status(
        &self,
        status: ProductStatus,
        include_images: bool,
    ) -> Result<Vec<Product>> {
        self.cached_list(ProductFilter::Status(status), include_images)
            .await
    }

    async fn search(&self, term: &str, include_images: bool) -> Result<Vec<Product>> {
        self.repository.search(term, include_images).await
    }

    async fn add(&self, product: &Product) -> Result<Product> {
        let added = self.repository.add(product).await?;

        self.invalidate(added.id, WriteEffect::Added(&added)).await;

        tracing::debug!(product_id = added.id, "Product added");
        Ok(added)
    }

    async fn update(&self, product: &Product) -> Result<Product> {
        let updated = self.repository.update(product).await?;

        self.invalidate(updated.id, WriteEffect::Changed(updated.id))
            .await;

        tracing::debug!(product_id = updated.id, "Product updated");
        Ok(updated)
    }

    async fn delete(&self, id: i64) -> Result<()> {
        self.repository.delete(id).await?;

        self.invalidate(id, WriteEffect::Changed(id)).await;

        tracing::debug!(product_id = id, "Product deleted");
        Ok(())
    }

    async fn exists(&self, id: i64) -> Result<bool> {
        self.repository.exists(id).await
    }
}
