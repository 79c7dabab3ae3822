//! Pure planning of cache evictions after a write.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::catalog::Product;
use crate::storage::ProductFilter;

use super::keys::{product_pattern, products_pattern, LIST_PATTERN};

/// How the caching decorator evicts entries after a successful write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InvalidationStrategy {
    /// Evict the written product's lookups and the lists it could appear in.
    #[default]
    Targeted,
    /// Clear the whole cache.
    Flush,
}

impl InvalidationStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvalidationStrategy::Targeted => "targeted",
            InvalidationStrategy::Flush => "flush",
        }
    }
}

impl fmt::Display for InvalidationStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown invalidation strategy: {0} (expected 'targeted' or 'flush')")]
pub struct UnknownStrategy(pub String);

impl FromStr for InvalidationStrategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "targeted" => Ok(Self::Targeted),
            "flush" => Ok(Self::Flush),
            _ => Err(UnknownStrategy(s.to_string())),
        }
    }
}

/// What a successful write did, as far as cached reads are concerned.
#[derive(Debug, Clone, Copy)]
pub enum WriteEffect<'a> {
    /// A new product was stored. Only the lists it joined can be stale.
    Added(&'a Product),
    /// An existing product was updated or deleted.
    ///
    /// Its state right before the write cannot be read in the same step as
    /// the write, so a concurrent writer may already have moved it to other
    /// list shapes. Every list shape is evicted along with its lookups.
    Changed(i64),
}

/// Returns the glob patterns covering every cached read a write could have
/// made stale. Output is sorted and free of duplicates.
pub fn plan_invalidation(effect: WriteEffect<'_>) -> Vec<String> {
    let mut patterns = BTreeSet::new();
    match effect {
        WriteEffect::Added(product) => {
            patterns.insert(product_pattern(product.id));
            for filter in ProductFilter::containing(product) {
                patterns.insert(products_pattern(filter));
            }
        }
        WriteEffect::Changed(id) => {
            patterns.insert(product_pattern(id));
            patterns.insert(LIST_PATTERN.to_string());
        }
    }
    patterns.into_iter().collect()
}
