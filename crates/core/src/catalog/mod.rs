mod error;
mod operations;
mod seed;
mod types;

pub use error::{ParseEnumError, ProductError};
pub use operations::{
    matches_search, normalize_price, normalize_search_term, sort_newest_first, validate_image,
    validate_product, validate_scalars, MAX_DESCRIPTION_LEN, MAX_IMAGE_URL_LEN, MAX_NAME_LEN,
};
pub use seed::generate_seed_products;
pub use types::{Product, ProductCategory, ProductImage, ProductStatus};
