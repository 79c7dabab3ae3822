use async_trait::async_trait;

use crate::catalog::{Product, ProductCategory, ProductStatus};

use super::Result;

/// Repository for catalog products and their images.
///
/// Implemented by the durable stores and by the caching decorator, so callers
/// can depend on this trait alone. List reads return products newest first.
/// When `include_images` is false the returned products carry no images.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Gets a product by its ID.
    ///
    /// `read_only` tells the store the caller will not mutate the result.
    /// It is a performance hint only.
    async fn get_by_id(
        &self,
        id: i64,
        include_images: bool,
        read_only: bool,
    ) -> Result<Option<Product>>;

    /// Gets every product.
    async fn get_all(&self, include_images: bool) -> Result<Vec<Product>>;

    /// Gets the products visible to anonymous visitors.
    async fn get_public(&self, include_images: bool) -> Result<Vec<Product>>;

    /// Gets the products in a category.
    async fn get_by_category(
        &self,
        category: ProductCategory,
        include_images: bool,
    ) -> Result<Vec<Product>>;

    /// Gets the products with a status.
    async fn get_by_status(
        &self,
        status: ProductStatus,
        include_images: bool,
    ) -> Result<Vec<Product>>;

    /// Case-insensitive substring search over name and description.
    ///
    /// A blank term matches every product.
    async fn search(&self, term: &str, include_images: bool) -> Result<Vec<Product>>;

    /// Persists a new product and its images in one atomic unit.
    ///
    /// Incoming IDs are ignored; the stored product is returned with the IDs
    /// the store assigned.
    async fn add(&self, product: &Product) -> Result<Product>;

    /// Overwrites the scalar fields of an existing product.
    ///
    /// Images and the creation timestamp are left untouched. Fails with
    /// `NotFound` if no product has `product.id`.
    async fn update(&self, product: &Product) -> Result<Product>;

    /// Deletes a product and its images. Missing IDs are a no-op.
    async fn delete(&self, id: i64) -> Result<()>;

    /// Returns true if a product with this ID exists.
    async fn exists(&self, id: i64) -> Result<bool>;
}
