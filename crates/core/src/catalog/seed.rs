//! Seed catalog for empty stores.
//!
//! Pure data plus a pure builder; the CLI `seed` command persists the result.

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;

use super::types::{Product, ProductCategory, ProductImage, ProductStatus};

const BOOTIES: &str =
    "Adorable handcrafted baby booties. Made with soft, comfortable yarn perfect for little feet.";
const FLIP_FLOPS: &str =
    "Cute handcrafted baby flip flops. Made with soft, comfortable yarn perfect for little feet.";
const BOOT_CUFFS: &str = "Stylish handcrafted boot cuffs. Perfect for keeping warm and adding a fashionable touch to your boots.";
const CUP_COZIES: &str = "Handcrafted cup cozies. Perfect for keeping your drinks warm and adding a personal touch to your beverages.";

/// (name, description, quantity, price in cents, age in days, image path)
const SEED_ROWS: &[(&str, &str, u32, i64, i64, &str)] = &[
    (
        "Ripple Blanket",
        "Handmade crochet ripple blanket in soft, warm yarn. Perfect for snuggling on cold evenings. Beautiful ripple stitch pattern.",
        3,
        3000,
        20,
        "/images/crochet/RippleBlanket.jpg",
    ),
    ("Baby Booties 2", BOOTIES, 1, 2000, 19, "/images/crochet/BabyBooties2.jpg"),
    (
        "Animal Hats",
        "Adorable crochet animal hats. Perfect gift for children or collectors. Made with soft, durable yarn.",
        2,
        1750,
        5,
        "/images/crochet/Animalhats.jpg",
    ),
    (
        "Baby Blanket",
        "Beautiful handcrafted baby blanket. Made with care and attention to detail using soft, baby-safe yarn.",
        1,
        2250,
        4,
        "/images/crochet/BabyBlanket.jpg",
    ),
    ("Baby Booties", BOOTIES, 1, 2500, 3, "/images/crochet/BabyBooties.jpg"),
    ("Baby Booties 3", BOOTIES, 1, 2750, 2, "/images/crochet/BabyBooties3.jpg"),
    ("Baby Booties 4", BOOTIES, 1, 3000, 1, "/images/crochet/BabyBooties4.jpg"),
    ("Baby Booties 5", BOOTIES, 1, 3250, 0, "/images/crochet/BabyBooties5.jpg"),
    ("Baby Flip Flops", FLIP_FLOPS, 1, 3750, 0, "/images/crochet/BabyFlipFlops.jpg"),
    ("Boot Cuffs 1", BOOT_CUFFS, 1, 4250, 0, "/images/crochet/Bootcuffs1.jpg"),
    ("Boot Cuffs 2", BOOT_CUFFS, 1, 4500, 0, "/images/crochet/Bootcuffs2.jpg"),
    (
        "Chiefs Cup Cozy",
        "Handcrafted cup cozy featuring Chiefs team colors. Perfect for keeping your drinks warm and showing team spirit.",
        1,
        5000,
        0,
        "/images/crochet/ChiefsCupCozy.jpg",
    ),
    ("Cup Cozies", CUP_COZIES, 1, 5250, 0, "/images/crochet/CupCozies.jpg"),
];

/// Builds the seed catalog relative to `now`.
///
/// Every product is a public, available crochet piece with a single primary
/// image. Creation timestamps are spread into the past so listings have a
/// stable newest-first order.
///
/// # Example
///
/// ```
/// use chrono::Utc;
/// use craftcatalog_core::catalog::generate_seed_products;
///
/// let products = generate_seed_products(Utc::now());
/// assert!(products.iter().all(|p| p.is_public));
/// ```
pub fn generate_seed_products(now: DateTime<Utc>) -> Vec<Product> {
    SEED_ROWS
        .iter()
        .enumerate()
        .map(|(position, &(name, description, quantity, cents, age_days, image))| {
            // Same-day rows keep their listing order by stepping a second apart.
            let created_at =
                now - Duration::days(age_days) + Duration::seconds(position as i64);
            Product::new(name, ProductCategory::Crochet, ProductStatus::Available)
                .with_description(description)
                .with_quantity(quantity)
                .with_price(Decimal::new(cents, 2))
                .public()
                .with_created_at(created_at)
                .with_image(ProductImage::primary(image))
        })
        .collect()
}
