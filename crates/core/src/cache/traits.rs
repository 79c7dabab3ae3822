use std::time::Duration;

use async_trait::async_trait;

use super::Result;

/// Byte-oriented key/value cache the catalog decorator reads through.
///
/// Values are opaque; see [`super::serialize_product`] for the encoding the
/// decorator stores. Keys follow the layout built by [`super::product_key`]
/// and [`super::products_key`].
#[async_trait]
pub trait Cache: Send + Sync {
    /// Returns the stored bytes. Expired entries read as `None`.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Stores `value`, replacing any previous entry. `None` means no expiry.
    async fn set(&self, key: &str, value: &[u8], ttl: Option<Duration>) -> Result<()>;

    /// Removes one entry. Missing keys are not an error.
    async fn delete(&self, key: &str) -> Result<()>;

    /// Removes every entry whose key matches a glob such as `product:42:*`.
    async fn delete_pattern(&self, pattern: &str) -> Result<()>;

    /// Removes every entry.
    async fn clear(&self) -> Result<()>;
}
