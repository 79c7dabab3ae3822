use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::ParseEnumError;

/// Craft type a product belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductCategory {
    Woodworking,
    Engraving,
    Crochet,
}

impl ProductCategory {
    pub const ALL: [ProductCategory; 3] = [Self::Woodworking, Self::Engraving, Self::Crochet];

    /// Stable text form used in storage and cache keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductCategory::Woodworking => "woodworking",
            ProductCategory::Engraving => "engraving",
            ProductCategory::Crochet => "crochet",
        }
    }

    /// Human readable label.
    pub fn label(&self) -> &'static str {
        match self {
            ProductCategory::Woodworking => "Woodworking",
            ProductCategory::Engraving => "Engraving",
            ProductCategory::Crochet => "Crochet",
        }
    }
}

impl fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductCategory {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseEnumError::UnknownCategory(s.to_string()))
    }
}

/// Availability of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductStatus {
    /// Can be purchased.
    Available,
    /// Already sold.
    Sold,
    /// Shown in the portfolio only.
    DisplayOnly,
}

impl ProductStatus {
    pub const ALL: [ProductStatus; 3] = [Self::Available, Self::Sold, Self::DisplayOnly];

    /// Stable text form used in storage and cache keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductStatus::Available => "available",
            ProductStatus::Sold => "sold",
            ProductStatus::DisplayOnly => "display_only",
        }
    }

    /// Human readable label.
    pub fn label(&self) -> &'static str {
        match self {
            ProductStatus::Available => "Available",
            ProductStatus::Sold => "Sold",
            ProductStatus::DisplayOnly => "Display Only",
        }
    }
}

impl fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|st| st.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseEnumError::UnknownStatus(s.to_string()))
    }
}

/// An image attached to a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductImage {
    /// Assigned by the store; 0 until persisted.
    pub id: i64,
    pub product_id: i64,
    /// URL or path of the image file.
    pub image_url: String,
    /// Marks the featured image used for thumbnails.
    pub is_primary: bool,
}

impl ProductImage {
    /// Creates an unsaved image.
    pub fn new(image_url: impl Into<String>, is_primary: bool) -> Self {
        Self {
            id: 0,
            product_id: 0,
            image_url: image_url.into(),
            is_primary,
        }
    }

    /// Creates an unsaved primary image.
    pub fn primary(image_url: impl Into<String>) -> Self {
        Self::new(image_url, true)
    }
}

/// A handcrafted catalog item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Assigned by the store on creation; 0 until persisted.
    pub id: i64,
    pub name: String,
    pub description: String,
    pub category: ProductCategory,
    pub status: ProductStatus,
    pub quantity: u32,
    /// Absent means "no price set", which is not the same as zero.
    pub price: Option<Decimal>,
    /// Only public products are shown to anonymous visitors.
    pub is_public: bool,
    /// Set once at creation and never updated.
    pub created_at: DateTime<Utc>,
    /// Empty unless the query asked for images.
    #[serde(default)]
    pub images: Vec<ProductImage>,
}

impl Product {
    /// Creates an unsaved, private product with no price or images.
    pub fn new(name: impl Into<String>, category: ProductCategory, status: ProductStatus) -> Self {
        Self {
            id: 0,
            name: name.into(),
            description: String::new(),
            category,
            status,
            quantity: 0,
            price: None,
            is_public: false,
            created_at: Utc::now(),
            images: Vec::new(),
        }
    }

    /// Sets a specific ID for this product (useful for testing).
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn with_price(mut self, price: Decimal) -> Self {
        self.price = Some(price);
        self
    }

    /// Marks the product as visible in the public portfolio.
    pub fn public(mut self) -> Self {
        self.is_public = true;
        self
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn with_image(mut self, image: ProductImage) -> Self {
        self.images.push(image);
        self
    }

    /// Returns the flagged primary image, or the first image if none is flagged.
    pub fn primary_image(&self) -> Option<&ProductImage> {
        self.images
            .iter()
            .find(|image| image.is_primary)
            .or_else(|| self.images.first())
    }

    /// Returns a copy without images, the shape returned when images are not requested.
    pub fn without_images(&self) -> Self {
        Self {
            images: Vec::new(),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trips_through_str() {
        for category in ProductCategory::ALL {
            assert_eq!(category.as_str().parse::<ProductCategory>(), Ok(category));
        }
        assert_eq!("CROCHET".parse(), Ok(ProductCategory::Crochet));
        assert!("knitting".parse::<ProductCategory>().is_err());
    }

    #[test]
    fn test_status_round_trips_through_str() {
        for status in ProductStatus::ALL {
            assert_eq!(status.as_str().parse::<ProductStatus>(), Ok(status));
        }
        assert_eq!(ProductStatus::DisplayOnly.label(), "Display Only");
        assert!("gone".parse::<ProductStatus>().is_err());
    }

    #[test]
    fn test_enum_serde_uses_storage_form() {
        let json = serde_json::to_string(&ProductStatus::DisplayOnly).unwrap();
        assert_eq!(json, "\"display_only\"");
    }

    #[test]
    fn test_new_product_defaults() {
        let product = Product::new("Cutting Board", ProductCategory::Woodworking, ProductStatus::Available);

        assert_eq!(product.id, 0);
        assert!(!product.is_public);
        assert!(product.price.is_none());
        assert!(product.images.is_empty());
    }

    #[test]
    fn test_primary_image_prefers_flagged() {
        let product = Product::new("Hat", ProductCategory::Crochet, ProductStatus::Available)
            .with_image(ProductImage::new("/a.jpg", false))
            .with_image(ProductImage::primary("/b.jpg"));

        assert_eq!(product.primary_image().map(|i| i.image_url.as_str()), Some("/b.jpg"));
    }

    #[test]
    fn test_primary_image_falls_back_to_first() {
        let product = Product::new("Hat", ProductCategory::Crochet, ProductStatus::Available)
            .with_image(ProductImage::new("/a.jpg", false));

        assert_eq!(product.primary_image().map(|i| i.image_url.as_str()), Some("/a.jpg"));
        assert!(product.without_images().primary_image().is_none());
    }

    #[test]
    fn test_price_absent_differs_from_zero() {
        let unpriced = Product::new("Sign", ProductCategory::Engraving, ProductStatus::DisplayOnly);
        let free = unpriced.clone().with_price(Decimal::ZERO);

        assert_ne!(unpriced, free);
    }
}
