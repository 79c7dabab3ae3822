//! Pretty output formatting.

use craftcatalog_core::catalog::Product;

/// Format a product for display.
pub fn format_product(product: &Product) -> String {
    let price = product
        .price
        .map(|p| format!("${p}"))
        .unwrap_or_else(|| "no price".to_string());
    let visibility = if product.is_public { "public" } else { "private" };

    let mut output = format!(
        "{} [{} / {}]\n  ID: {}\n  Price: {}\n  Quantity: {}\n  Visibility: {}\n  Created: {}",
        product.name,
        product.category.label(),
        product.status.label(),
        product.id,
        price,
        product.quantity,
        visibility,
        product.created_at.format("%Y-%m-%d %H:%M"),
    );
    if !product.description.is_empty() {
        output.push_str(&format!("\n  Description: {}", product.description));
    }
    for image in &product.images {
        let marker = if image.is_primary { " (primary)" } else { "" };
        output.push_str(&format!("\n  Image: {}{}", image.image_url, marker));
    }
    output
}

/// Format products for display.
pub fn format_products(products: &[Product]) -> String {
    if products.is_empty() {
        return "No products found.".to_string();
    }
    let mut output = format!("PRODUCTS ({})\n", products.len());
    output.push_str(&"-".repeat(40));
    for product in products {
        output.push_str(&format!("\n{}", format_product(product)));
        output.push('\n');
    }
    output
}
