//! Cache key builders.
//!
//! Every cacheable read maps its full parameter tuple to one key. Keys are
//! colon separated so that the glob patterns below can target one product or
//! one list shape without touching the others.

use crate::storage::ProductFilter;

/// Pattern matching every list-shaped key and no single-product key.
pub const LIST_PATTERN: &str = "products:*";

/// Returns the cache key for a single-product lookup.
pub fn product_key(id: i64, include_images: bool, read_only: bool) -> String {
    format!("product:{id}:images:{include_images}:read_only:{read_only}")
}

/// Returns the pattern for every lookup key of one product.
pub fn product_pattern(id: i64) -> String {
    format!("product:{id}:*")
}

/// Returns the cache key for a list-shaped read.
pub fn products_key(filter: ProductFilter, include_images: bool) -> String {
    format!("{}:images:{include_images}", filter_prefix(filter))
}

/// Returns the pattern for one list shape, with or without images.
pub fn products_pattern(filter: ProductFilter) -> String {
    format!("{}:*", filter_prefix(filter))
}

fn filter_prefix(filter: ProductFilter) -> String {
    match filter {
        ProductFilter::All => "products:all".to_string(),
        ProductFilter::Public => "products:public".to_string(),
        ProductFilter::Category(category) => format!("products:category:{category}"),
        ProductFilter::Status(status) => format!("products:status:{status}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::pattern_matches;
    use crate::catalog::{ProductCategory, ProductStatus};

    #[test]
    fn test_product_key() {
        assert_eq!(
            product_key(7, true, false),
            "product:7:images:true:read_only:false"
        );
    }

    #[test]
    fn test_product_key_discriminates_every_flag() {
        let keys = [
            product_key(7, true, true),
            product_key(7, true, false),
            product_key(7, false, true),
            product_key(7, false, false),
            product_key(8, true, true),
        ];
        for (i, a) in keys.iter().enumerate() {
            for b in keys.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_products_keys() {
        assert_eq!(products_key(ProductFilter::All, false), "products:all:images:false");
        assert_eq!(products_key(ProductFilter::Public, true), "products:public:images:true");
        assert_eq!(
            products_key(ProductFilter::Category(ProductCategory::Crochet), true),
            "products:category:crochet:images:true"
        );
        assert_eq!(
            products_key(ProductFilter::Status(ProductStatus::DisplayOnly), false),
            "products:status:display_only:images:false"
        );
    }

    #[test]
    fn test_product_pattern_does_not_match_id_prefix() {
        let pattern = product_pattern(1);

        assert!(pattern_matches(&pattern, &product_key(1, true, false)));
        assert!(!pattern_matches(&pattern, &product_key(12, true, false)));
        assert!(!pattern_matches(&pattern, &products_key(ProductFilter::All, true)));
    }

    #[test]
    fn test_products_pattern_covers_both_image_shapes() {
        let filter = ProductFilter::Category(ProductCategory::Engraving);
        let pattern = products_pattern(filter);

        assert!(pattern_matches(&pattern, &products_key(filter, true)));
        assert!(pattern_matches(&pattern, &products_key(filter, false)));
        assert!(!pattern_matches(
            &pattern,
            &products_key(ProductFilter::Category(ProductCategory::Crochet), true)
        ));
        assert!(!pattern_matches(&pattern, &products_key(ProductFilter::All, true)));
    }

    #[test]
    fn test_list_pattern_covers_lists_only() {
        let lists = [
            products_key(ProductFilter::All, true),
            products_key(ProductFilter::Public, false),
            products_key(ProductFilter::Category(ProductCategory::Woodworking), true),
            products_key(ProductFilter::Status(ProductStatus::Sold), false),
        ];
        for key in &lists {
            assert!(pattern_matches(LIST_PATTERN, key), "{key}");
        }
        assert!(!pattern_matches(LIST_PATTERN, &product_key(1, true, true)));
    }
}
