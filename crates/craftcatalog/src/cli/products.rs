//! Product CLI arguments.

use chrono::{DateTime, Utc};
use clap::Parser;
use rust_decimal::Decimal;

use craftcatalog_core::catalog::{Product, ProductCategory, ProductImage, ProductStatus};
use craftcatalog_core::storage::ProductFilter;

/// Arguments for `list`.
#[derive(Debug, Parser)]
pub struct ListCommand {
    /// Only products visible to anonymous visitors.
    #[arg(long, conflicts_with_all = ["category", "status"])]
    pub public: bool,
    /// Only products in this category (woodworking, engraving, crochet).
    #[arg(long, conflicts_with = "status")]
    pub category: Option<ProductCategory>,
    /// Only products with this status (available, sold, display_only).
    #[arg(long)]
    pub status: Option<ProductStatus>,
    /// Include images.
    #[arg(long)]
    pub images: bool,
}

impl ListCommand {
    /// The list shape these flags select.
    pub fn filter(&self) -> ProductFilter {
        if self.public {
            ProductFilter::Public
        } else if let Some(category) = self.category {
            ProductFilter::Category(category)
        } else if let Some(status) = self.status {
            ProductFilter::Status(status)
        } else {
            ProductFilter::All
        }
    }
}

/// Arguments for `add`.
#[derive(Debug, Parser)]
pub struct AddCommand {
    /// Product name.
    #[arg(long)]
    pub name: String,
    /// Product description.
    #[arg(long, default_value = "")]
    pub description: String,
    /// Category (woodworking, engraving, crochet).
    #[arg(long)]
    pub category: ProductCategory,
    /// Status (available, sold, display_only).
    #[arg(long, default_value = "available")]
    pub status: ProductStatus,
    /// Units in stock.
    #[arg(long, default_value = "0")]
    pub quantity: u32,
    /// Price, e.g. 30.00. Omit for "no price".
    #[arg(long)]
    pub price: Option<Decimal>,
    /// Show the product in the public portfolio.
    #[arg(long)]
    pub public: bool,
    /// Image URL (repeatable).
    #[arg(long = "image")]
    pub images: Vec<String>,
    /// Image URL flagged as the primary image.
    #[arg(long)]
    pub primary_image: Option<String>,
}

impl AddCommand {
    /// Builds the unsaved product. The primary image, if any, comes first.
    pub fn into_product(self, created_at: DateTime<Utc>) -> Product {
        let mut product = Product::new(self.name, self.category, self.status)
            .with_description(self.description)
            .with_quantity(self.quantity)
            .with_created_at(created_at);
        product.price = self.price;
        product.is_public = self.public;

        if let Some(url) = self.primary_image {
            product = product.with_image(ProductImage::primary(url));
        }
        for url in self.images {
            product = product.with_image(ProductImage::new(url, false));
        }
        product
    }
}

/// Arguments for `update`. Omitted flags keep the stored value.
#[derive(Debug, Parser)]
pub struct UpdateCommand {
    /// Product ID.
    pub id: i64,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub category: Option<ProductCategory>,
    #[arg(long)]
    pub status: Option<ProductStatus>,
    #[arg(long)]
    pub quantity: Option<u32>,
    #[arg(long, conflicts_with = "clear_price")]
    pub price: Option<Decimal>,
    /// Remove the price.
    #[arg(long)]
    pub clear_price: bool,
    /// Set public visibility (true or false).
    #[arg(long)]
    pub public: Option<bool>,
}

impl UpdateCommand {
    /// Applies the requested changes to `product`.
    pub fn apply(&self, product: &mut Product) {
        if let Some(name) = &self.name {
            product.name = name.clone();
        }
        if let Some(description) = &self.description {
            product.description = description.clone();
        }
        if let Some(category) = self.category {
            product.category = category;
        }
        if let Some(status) = self.status {
            product.status = status;
        }
        if let Some(quantity) = self.quantity {
            product.quantity = quantity;
        }
        if self.clear_price {
            product.price = None;
        } else if let Some(price) = self.price {
            product.price = Some(price);
        }
        if let Some(public) = self.public {
            product.is_public = public;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};

    fn parse(args: &[&str]) -> Commands {
        let mut argv = vec!["craftcatalog"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap().command
    }

    #[test]
    fn test_list_filter() {
        let Commands::List(list) = parse(&["list", "--category", "Crochet"]) else {
            panic!("Expected List");
        };
        assert_eq!(list.filter(), ProductFilter::Category(ProductCategory::Crochet));

        let Commands::List(list) = parse(&["list"]) else {
            panic!("Expected List");
        };
        assert_eq!(list.filter(), ProductFilter::All);
    }

    #[test]
    fn test_list_filters_conflict() {
        let result = Cli::try_parse_from(["craftcatalog", "list", "--public", "--status", "sold"]);

        assert!(result.is_err());
    }

    #[test]
    fn test_list_rejects_unknown_category() {
        let result = Cli::try_parse_from(["craftcatalog", "list", "--category", "knitting"]);

        assert!(result.is_err());
    }

    #[test]
    fn test_add_builds_product() {
        let Commands::Add(add) = parse(&[
            "add",
            "--name",
            "Walnut Bowl",
            "--category",
            "woodworking",
            "--price",
            "45.50",
            "--public",
            "--image",
            "/images/bowl-side.jpg",
            "--primary-image",
            "/images/bowl.jpg",
        ]) else {
            panic!("Expected Add");
        };

        let product = add.into_product(Utc::now());

        assert_eq!(product.name, "Walnut Bowl");
        assert_eq!(product.status, ProductStatus::Available);
        assert_eq!(product.price, Some(Decimal::new(4550, 2)));
        assert!(product.is_public);
        assert_eq!(product.images.len(), 2);
        assert_eq!(
            product.primary_image().map(|i| i.image_url.as_str()),
            Some("/images/bowl.jpg")
        );
    }

    #[test]
    fn test_add_without_price() {
        let Commands::Add(add) = parse(&["add", "--name", "Sign", "--category", "engraving"]) else {
            panic!("Expected Add");
        };

        assert_eq!(add.into_product(Utc::now()).price, None);
    }

    #[test]
    fn test_update_applies_only_given_fields() {
        let Commands::Update(update) = parse(&["update", "3", "--public", "false", "--quantity", "4"])
        else {
            panic!("Expected Update");
        };
        let original = Product::new("Hat", ProductCategory::Crochet, ProductStatus::Available)
            .with_id(3)
            .with_price(Decimal::new(1750, 2))
            .public();
        let mut product = original.clone();

        update.apply(&mut product);

        assert!(!product.is_public);
        assert_eq!(product.quantity, 4);
        assert_eq!(product.name, original.name);
        assert_eq!(product.price, original.price);
    }

    #[test]
    fn test_update_clear_price() {
        let Commands::Update(update) = parse(&["update", "3", "--clear-price"]) else {
            panic!("Expected Update");
        };
        let mut product = Product::new("Hat", ProductCategory::Crochet, ProductStatus::Available)
            .with_price(Decimal::ONE);

        update.apply(&mut product);

        assert_eq!(product.price, None);
    }
}
