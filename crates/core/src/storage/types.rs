use crate::catalog::{Product, ProductCategory, ProductStatus};

/// The predicate behind each list-shaped read.
///
/// `search` is deliberately absent: its term space is unbounded and it is
/// never cached, so it does not need a stable shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductFilter {
    All,
    Public,
    Category(ProductCategory),
    Status(ProductStatus),
}

impl ProductFilter {
    /// Returns true if `product` belongs in this filter's result set.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            ProductFilter::All => true,
            ProductFilter::Public => product.is_public,
            ProductFilter::Category(category) => product.category == *category,
            ProductFilter::Status(status) => product.status == *status,
        }
    }

    /// Every filter whose result set contains `product`.
    pub fn containing(product: &Product) -> Vec<ProductFilter> {
        let mut filters = vec![
            ProductFilter::All,
            ProductFilter::Category(product.category),
            ProductFilter::Status(product.status),
        ];
        if product.is_public {
            filters.push(ProductFilter::Public);
        }
        filters
    }
}
