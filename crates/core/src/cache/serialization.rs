//! Pure functions for serializing/deserializing domain types to/from cache bytes.
//!
//! These functions use JSON serialization for cache storage, providing human-readable
//! cache values that are easy to debug and inspect.

use crate::catalog::Product;
use thiserror::Error;

/// Errors that can occur during cache serialization/deserialization.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SerializationError {
    /// Failed to serialize a value to bytes.
    #[error("Failed to serialize: {0}")]
    SerializeFailed(String),
    /// Failed to deserialize bytes to a value.
    #[error("Failed to deserialize: {0}")]
    DeserializeFailed(String),
}

/// Result type for serialization operations.
pub type Result<T> = std::result::Result<T, SerializationError>;

/// Serializes a product to JSON bytes.
pub fn serialize_product(product: &Product) -> Result<Vec<u8>> {
    serde_json::to_vec(product).map_err(|e| SerializationError::SerializeFailed(e.to_string()))
}

/// Deserializes JSON bytes to a product.
pub fn deserialize_product(bytes: &[u8]) -> Result<Product> {
    serde_json::from_slice(bytes).map_err(|e| SerializationError::DeserializeFailed(e.to_string()))
}

/// Serializes a slice of products to JSON bytes.
pub fn serialize_products(products: &[Product]) -> Result<Vec<u8>> {
    serde_json::to_vec(products).map_err(|e| SerializationError::SerializeFailed(e.to_string()))
}

/// Deserializes JSON bytes to a vector of products.
pub fn deserialize_products(bytes: &[u8]) -> Result<Vec<Product>> {
    serde_json::from_slice(bytes).map_err(|e| SerializationError::DeserializeFailed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ProductCategory, ProductImage, ProductStatus};
    use chrono::{TimeZone, Utc};
    use rust_decimal::Decimal;

    fn fixed_product() -> Product {
        Product::new("Walnut Bowl", ProductCategory::Woodworking, ProductStatus::Available)
            .with_id(12)
            .with_description("Turned from a single block")
            .with_quantity(2)
            .with_price(Decimal::new(4550, 2))
            .public()
            .with_created_at(Utc.with_ymd_and_hms(2024, 6, 15, 10, 30, 0).unwrap())
            .with_image(ProductImage {
                id: 3,
                product_id: 12,
                image_url: "/images/wood/bowl.jpg".to_string(),
                is_primary: true,
            })
    }

    #[test]
    fn test_product_survives_cache_encoding() {
        let product = fixed_product();

        let bytes = serialize_product(&product).expect("serialize should succeed");
        let decoded = deserialize_product(&bytes).expect("deserialize should succeed");

        assert_eq!(product, decoded);
    }

    #[test]
    fn test_price_is_encoded_as_exact_string() {
        let bytes = serialize_product(&fixed_product()).expect("serialize should succeed");
        let text = String::from_utf8(bytes).unwrap();

        assert!(text.contains("\"price\":\"45.50\""), "{text}");
    }

    #[test]
    fn test_absent_price_stays_absent() {
        let mut product = fixed_product();
        product.price = None;

        let bytes = serialize_product(&product).expect("serialize should succeed");
        let decoded = deserialize_product(&bytes).expect("deserialize should succeed");

        assert_eq!(decoded.price, None);
    }

    #[test]
    fn test_serialize_empty_products_vec() {
        let bytes = serialize_products(&[]).expect("serialize should succeed");
        let decoded = deserialize_products(&bytes).expect("deserialize should succeed");

        assert!(decoded.is_empty());
        assert_eq!(bytes, b"[]");
    }

    #[test]
    fn test_deserialize_product_malformed_bytes() {
        let result = deserialize_product(b"not valid json");

        assert!(matches!(result, Err(SerializationError::DeserializeFailed(_))));
    }

    #[test]
    fn test_deserialize_products_rejects_single_object() {
        let bytes = serialize_product(&fixed_product()).unwrap();

        assert!(matches!(
            deserialize_products(&bytes),
            Err(SerializationError::DeserializeFailed(_))
        ));
    }
}
