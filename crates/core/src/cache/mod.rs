mod error;
mod invalidation;
mod keys;
mod patterns;
mod serialization;
mod traits;

pub use error::{CacheError, Result};
pub use invalidation::{plan_invalidation, InvalidationStrategy, UnknownStrategy, WriteEffect};
pub use keys::{product_key, product_pattern, products_key, products_pattern, LIST_PATTERN};
pub use patterns::pattern_matches;
pub use serialization::{
    deserialize_product, deserialize_products, serialize_product, serialize_products,
    SerializationError,
};
pub use traits::Cache;
