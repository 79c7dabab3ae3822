//! SQLite row conversion functions.
//!
//! Pure functions for converting between SQLite rows and domain types.
//! These are testable in isolation without database access.

use std::str::FromStr;

use chrono::{DateTime, SecondsFormat, Utc};
use rust_decimal::Decimal;
use rusqlite::Row;

use craftcatalog_core::catalog::{Product, ProductCategory, ProductImage, ProductStatus};

/// Convert a SQLite row to a Product without images.
///
/// Expected columns: id, name, description, category, status, quantity, price, is_public, created_at
pub fn row_to_product(row: &Row) -> rusqlite::Result<Product> {
    let id: i64 = row.get(0)?;
    let name: String = row.get(1)?;
    let description: String = row.get(2)?;
    let category: String = row.get(3)?;
    let status: String = row.get(4)?;
    let quantity: u32 = row.get(5)?;
    let price: Option<String> = row.get(6)?;
    let is_public: bool = row.get(7)?;
    let created_at: String = row.get(8)?;

    Ok(Product {
        id,
        name,
        description,
        category: parse_category(3, &category)?,
        status: parse_status(4, &status)?,
        quantity,
        price: price.as_deref().map(|p| parse_price(6, p)).transpose()?,
        is_public,
        created_at: parse_datetime(8, &created_at)?,
        images: Vec::new(),
    })
}

/// Convert a SQLite row to a ProductImage.
///
/// Expected columns: id, product_id, image_url, is_primary
pub fn row_to_image(row: &Row) -> rusqlite::Result<ProductImage> {
    Ok(ProductImage {
        id: row.get(0)?,
        product_id: row.get(1)?,
        image_url: row.get(2)?,
        is_primary: row.get(3)?,
    })
}

/// Format a price for storage. `None` stays SQL NULL.
pub fn format_price(price: Option<Decimal>) -> Option<String> {
    price.map(|p| p.to_string())
}

/// Format a DateTime<Utc> for SQLite storage.
///
/// Always emits microseconds and a `Z` suffix so that text order equals
/// chronological order.
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn conversion_error(
    column: usize,
    err: impl std::error::Error + Send + Sync + 'static,
) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(column, rusqlite::types::Type::Text, Box::new(err))
}

fn parse_category(column: usize, s: &str) -> rusqlite::Result<ProductCategory> {
    s.parse().map_err(|e| conversion_error(column, e))
}

fn parse_status(column: usize, s: &str) -> rusqlite::Result<ProductStatus> {
    s.parse().map_err(|e| conversion_error(column, e))
}

fn parse_price(column: usize, s: &str) -> rusqlite::Result<Decimal> {
    Decimal::from_str(s).map_err(|e| conversion_error(column, e))
}

fn parse_datetime(column: usize, s: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| conversion_error(column, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_datetime_is_fixed_width() {
        let whole = Utc.with_ymd_and_hms(2024, 6, 15, 10, 30, 0).unwrap();
        let fractional = whole + chrono::Duration::microseconds(1500);

        assert_eq!(format_datetime(&whole), "2024-06-15T10:30:00.000000Z");
        assert_eq!(format_datetime(&fractional), "2024-06-15T10:30:00.001500Z");
        assert!(format_datetime(&whole) < format_datetime(&fractional));
    }

    #[test]
    fn test_parse_datetime_round_trips_format() {
        let dt = Utc.with_ymd_and_hms(2024, 6, 15, 10, 30, 0).unwrap();
        assert_eq!(parse_datetime(8, &format_datetime(&dt)).unwrap(), dt);
    }

    #[test]
    fn test_parse_datetime_invalid() {
        assert!(parse_datetime(8, "not-a-datetime").is_err());
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(Some(Decimal::new(3000, 2))), Some("30.00".to_string()));
        assert_eq!(format_price(Some(Decimal::ZERO)), Some("0".to_string()));
        assert_eq!(format_price(None), None);
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price(6, "17.50").unwrap(), Decimal::new(1750, 2));
        assert!(parse_price(6, "seventeen").is_err());
    }

    #[test]
    fn test_parse_enums() {
        assert_eq!(parse_category(3, "crochet").unwrap(), ProductCategory::Crochet);
        assert_eq!(parse_status(4, "display_only").unwrap(), ProductStatus::DisplayOnly);
        assert!(parse_category(3, "knitting").is_err());
        assert!(parse_status(4, "").is_err());
    }
}
