//! SQLite schema definitions and SQL query constants.
//!
//! This module contains all SQL statements used by the SQLite repository,
//! following the Functional Core pattern - pure data, no I/O.

/// Foreign keys are off by default in SQLite and must be enabled per connection.
pub const ENABLE_FOREIGN_KEYS: &str = "PRAGMA foreign_keys = ON;";

/// SQL statement to create all tables.
pub const CREATE_TABLES: &str = r#"
-- Products table
CREATE TABLE IF NOT EXISTS products (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    description TEXT NOT NULL DEFAULT '',
    category TEXT NOT NULL,
    status TEXT NOT NULL,
    quantity INTEGER NOT NULL DEFAULT 0 CHECK (quantity >= 0),
    price TEXT,
    is_public INTEGER NOT NULL DEFAULT 0,
    created_at TEXT NOT NULL
);

-- Product images table
CREATE TABLE IF NOT EXISTS product_images (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    product_id INTEGER NOT NULL,
    image_url TEXT NOT NULL,
    is_primary INTEGER NOT NULL DEFAULT 0,
    FOREIGN KEY (product_id) REFERENCES products(id) ON DELETE CASCADE
);

-- Indexes for the filtered reads
CREATE INDEX IF NOT EXISTS idx_products_is_public ON products(is_public);
CREATE INDEX IF NOT EXISTS idx_products_category ON products(category);
CREATE INDEX IF NOT EXISTS idx_products_status ON products(status);
CREATE INDEX IF NOT EXISTS idx_products_created_at ON products(created_at);
CREATE INDEX IF NOT EXISTS idx_products_public_category ON products(is_public, category);
CREATE INDEX IF NOT EXISTS idx_products_public_status ON products(is_public, status);
CREATE INDEX IF NOT EXISTS idx_product_images_product_id ON product_images(product_id);
CREATE INDEX IF NOT EXISTS idx_product_images_primary ON product_images(product_id, is_primary);
"#;

// Product queries
pub const INSERT_PRODUCT: &str = r#"
INSERT INTO products (name, description, category, status, quantity, price, is_public, created_at)
VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
"#;

pub const SELECT_PRODUCT_BY_ID: &str = r#"
SELECT id, name, description, category, status, quantity, price, is_public, created_at
FROM products
WHERE id = ?1
"#;

pub const SELECT_ALL_PRODUCTS: &str = r#"
SELECT id, name, description, category, status, quantity, price, is_public, created_at
FROM products
ORDER BY created_at DESC, id DESC
"#;

pub const SELECT_PUBLIC_PRODUCTS: &str = r#"
SELECT id, name, description, category, status, quantity, price, is_public, created_at
FROM products
WHERE is_public = 1
ORDER BY created_at DESC, id DESC
"#;

pub const SELECT_PRODUCTS_BY_CATEGORY: &str = r#"
SELECT id, name, description, category, status, quantity, price, is_public, created_at
FROM products
WHERE category = ?1
ORDER BY created_at DESC, id DESC
"#;

pub const SELECT_PRODUCTS_BY_STATUS: &str = r#"
SELECT id, name, description, category, status, quantity, price, is_public, created_at
FROM products
WHERE status = ?1
ORDER BY created_at DESC, id DESC
"#;

pub const UPDATE_PRODUCT: &str = r#"
UPDATE products
SET name = ?2, description = ?3, category = ?4, status = ?5, quantity = ?6, price = ?7, is_public = ?8
WHERE id = ?1
"#;

pub const DELETE_PRODUCT: &str = r#"
DELETE FROM products
WHERE id = ?1
"#;

pub const PRODUCT_EXISTS: &str = r#"
SELECT EXISTS(SELECT 1 FROM products WHERE id = ?1)
"#;

// Image queries
pub const INSERT_IMAGE: &str = r#"
INSERT INTO product_images (product_id, image_url, is_primary)
VALUES (?1, ?2, ?3)
"#;

pub const SELECT_IMAGES_BY_PRODUCT: &str = r#"
SELECT id, product_id, image_url, is_primary
FROM product_images
WHERE product_id = ?1
ORDER BY id ASC
"#;
