use rust_decimal::{Decimal, RoundingStrategy};

use super::error::ProductError;
use super::types::{Product, ProductImage};

pub const MAX_NAME_LEN: usize = 200;
pub const MAX_DESCRIPTION_LEN: usize = 2000;
pub const MAX_IMAGE_URL_LEN: usize = 500;

/// Validates a product and its images before creation.
///
/// Lengths are counted in characters, not bytes.
pub fn validate_product(product: &Product) -> Result<(), ProductError> {
    validate_scalars(product)?;

    for image in &product.images {
        validate_image(image)?;
    }

    let primaries = product.images.iter().filter(|i| i.is_primary).count();
    if primaries > 1 {
        return Err(ProductError::MultiplePrimaryImages(primaries));
    }

    Ok(())
}

/// Validates only the fields an update overwrites. Images are ignored.
pub fn validate_scalars(product: &Product) -> Result<(), ProductError> {
    if product.name.trim().is_empty() {
        return Err(ProductError::EmptyName);
    }
    if product.name.chars().count() > MAX_NAME_LEN {
        return Err(ProductError::NameTooLong);
    }
    if product.description.chars().count() > MAX_DESCRIPTION_LEN {
        return Err(ProductError::DescriptionTooLong);
    }
    if let Some(price) = product.price {
        if price < Decimal::ZERO {
            return Err(ProductError::NegativePrice(price.to_string()));
        }
    }
    Ok(())
}

/// Validates a single image.
pub fn validate_image(image: &ProductImage) -> Result<(), ProductError> {
    if image.image_url.trim().is_empty() {
        return Err(ProductError::EmptyImageUrl);
    }
    if image.image_url.chars().count() > MAX_IMAGE_URL_LEN {
        return Err(ProductError::ImageUrlTooLong);
    }
    Ok(())
}

/// Rounds a price to exactly two fractional digits, midpoint away from zero.
pub fn normalize_price(price: Decimal) -> Decimal {
    let mut rounded = price.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}

/// Normalizes a raw search term. `None` means "match everything".
pub fn normalize_search_term(term: &str) -> Option<String> {
    let trimmed = term.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Case-insensitive substring match on name or description.
///
/// `needle` must already be normalized with [`normalize_search_term`].
pub fn matches_search(product: &Product, needle: Option<&str>) -> bool {
    let Some(needle) = needle else {
        return true;
    };
    product.name.to_lowercase().contains(needle)
        || product.description.to_lowercase().contains(needle)
}

/// Sorts products newest first; ties fall back to descending id.
pub fn sort_newest_first(products: &mut [Product]) {
    products.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| b.id.cmp(&a.id))
    });
}
