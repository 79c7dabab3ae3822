//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use craftcatalog_core::catalog::{
    matches_search, normalize_price, normalize_search_term, sort_newest_first, validate_product,
    validate_scalars, Product, ProductCategory, ProductStatus,
};
use craftcatalog_core::storage::{ProductFilter, ProductRepository, RepositoryError, Result};

/// In-memory storage backend for testing.
///
/// Products own their images, so deleting a product drops its images with it.
/// Data is not persisted and will be lost when the repository is dropped.
#[derive(Debug, Clone)]
pub struct InMemoryRepository {
    products: Arc<RwLock<HashMap<i64, Product>>>,
    next_product_id: Arc<AtomicI64>,
    next_image_id: Arc<AtomicI64>,
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            products: Arc::new(RwLock::new(HashMap::new())),
            next_product_id: Arc::new(AtomicI64::new(1)),
            next_image_id: Arc::new(AtomicI64::new(1)),
        }
    }

    async fn list(&self, filter: ProductFilter, include_images: bool) -> Vec<Product> {
        let products = self.products.read().await;
        let mut result: Vec<Product> = products
            .values()
            .filter(|p| filter.matches(p))
            .map(|p| shape(p, include_images))
            .collect();
        sort_newest_first(&mut result);
        result
    }
}

fn shape(product: &Product, include_images: bool) -> Product {
    if include_images {
        product.clone()
    } else {
        product.without_images()
    }
}

#[async_trait]
impl ProductRepository for InMemoryRepository {
    async fn get_by_id(
        &self,
        id: i64,
        include_images: bool,
        _read_only: bool,
    ) -> Result<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.get(&id).map(|p| shape(p, include_images)))
    }

    async fn get_all(&self, include_images: bool) -> Result<Vec<Product>> {
        Ok(self.list(ProductFilter::All, include_images).await)
    }

    async fn get_public(&self, include_images: bool) -> Result<Vec<Product>> {
        Ok(self.list(ProductFilter::Public, include_images).await)
    }

    async fn get_by_category(
        &self,
        category: ProductCategory,
        include_images: bool,
    ) -> Result<Vec<Product>> {
        Ok(self
            .list(ProductFilter::Category(category), include_images)
            .await)
    }

    async fn get_by_status(
        &self,
        status: ProductStatus,
        include_images: bool,
    ) -> Result<Vec<Product>> {
        Ok(self.list(ProductFilter::Status(status), include_images).await)
    }

    async fn search(&self, term: &str, include_images: bool) -> Result<Vec<Product>> {
        let needle = normalize_search_term(term);
        let products = self.products.read().await;
        let mut result: Vec<Product> = products
            .values()
            .filter(|p| matches_search(p, needle.as_deref()))
            .map(|p| shape(p, include_images))
            .collect();
        sort_newest_first(&mut result);
        Ok(result)
    }

    async fn add(&self, product: &Product) -> Result<Product> {
        validate_product(product)?;

        let id = self.next_product_id.fetch_add(1, Ordering::SeqCst);
        let mut stored = product.clone();
        stored.id = id;
        stored.price = product.price.map(normalize_price);
        for image in &mut stored.images {
            image.id = self.next_image_id.fetch_add(1, Ordering::SeqCst);
            image.product_id = id;
        }

        let mut products = self.products.write().await;
        products.insert(id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, product: &Product) -> Result<Product> {
        validate_scalars(product)?;

        let mut products = self.products.write().await;
        let existing = products
            .get_mut(&product.id)
            .ok_or_else(|| RepositoryError::product_not_found(product.id))?;

        existing.name = product.name.clone();
        existing.description = product.description.clone();
        existing.category = product.category;
        existing.status = product.status;
        existing.quantity = product.quantity;
        existing.price = product.price.map(normalize_price);
        existing.is_public = product.is_public;

        Ok(existing.clone())
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let mut products = self.products.write().await;
        products.remove(&id);
        Ok(())
    }

    async fn exists(&self, id: i64) -> Result<bool> {
        let products = self.products.read().await;
        Ok(products.contains_key(&id))
    }
}
