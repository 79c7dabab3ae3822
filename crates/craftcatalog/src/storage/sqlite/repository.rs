//! SQLite repository implementation.
//!
//! Implements [`ProductRepository`] from `craftcatalog_core::storage` using SQLite.

use async_trait::async_trait;
use rusqlite::OptionalExtension;
use tokio_rusqlite::Connection;

use craftcatalog_core::catalog::{
    matches_search, normalize_price, normalize_search_term, validate_product, validate_scalars,
    Product, ProductCategory, ProductStatus,
};
use craftcatalog_core::storage::{ProductRepository, RepositoryError, Result};

use super::conversions::{format_datetime, format_price, row_to_image, row_to_product};
use super::error::map_tokio_rusqlite_error;
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// Loads the images of each product, replacing whatever it carried.
fn load_images(conn: &rusqlite::Connection, products: &mut [Product]) -> rusqlite::Result<()> {
    let mut stmt = conn.prepare_cached(schema::SELECT_IMAGES_BY_PRODUCT)?;
    for product in products.iter_mut() {
        product.images = stmt
            .query_map([product.id], row_to_image)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
    }
    Ok(())
}

/// Fetches one product. Fails with `QueryReturnedNoRows` when it is missing.
fn fetch_product(
    conn: &rusqlite::Connection,
    id: i64,
    include_images: bool,
) -> rusqlite::Result<Product> {
    let mut product = conn.query_row(schema::SELECT_PRODUCT_BY_ID, [id], row_to_product)?;
    if include_images {
        load_images(conn, std::slice::from_mut(&mut product))?;
    }
    Ok(product)
}

fn fetch_products(
    conn: &rusqlite::Connection,
    sql: &str,
    params: &[String],
) -> rusqlite::Result<Vec<Product>> {
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt.query_map(rusqlite::params_from_iter(params.iter()), row_to_product)?;
    rows.collect()
}

/// SQLite-based repository implementation.
///
/// Products and their images live in two tables linked by a cascading
/// foreign key. Every write runs in a single transaction.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Creates a new repository with a file-based database.
    ///
    /// The database file will be created if it doesn't exist.
    /// Schema tables are created automatically.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::StoreUnavailable(e.to_string()))?;

        Self::init_schema(&conn).await?;
        tracing::debug!(path = %path, "Opened SQLite catalog store");

        Ok(Self { conn })
    }

    /// Creates a new repository with an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::StoreUnavailable(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Initialize the database schema.
    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::ENABLE_FOREIGN_KEYS)
                .map_err(wrap_err)?;
            conn.execute_batch(schema::CREATE_TABLES)
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::StoreUnavailable(e.to_string()))
    }

    /// Runs a list query and attaches images when asked to.
    async fn list(
        &self,
        sql: &'static str,
        params: Vec<String>,
        include_images: bool,
    ) -> Result<Vec<Product>> {
        self.conn
            .call(move |conn| {
                let mut products = fetch_products(conn, sql, &params).map_err(wrap_err)?;
                if include_images {
                    load_images(conn, &mut products).map_err(wrap_err)?;
                }
                Ok(products)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Product", "list"))
    }
}

#[async_trait]
impl ProductRepository for SqliteRepository {
    async fn get_by_id(
        &self,
        id: i64,
        include_images: bool,
        _read_only: bool,
    ) -> Result<Option<Product>> {
        self.conn
            .call(move |conn| {
                fetch_product(conn, id, include_images)
                    .optional()
                    .map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Product", id.to_string()))
    }

    async fn get_all(&self, include_images: bool) -> Result<Vec<Product>> {
        self.list(schema::SELECT_ALL_PRODUCTS, Vec::new(), include_images)
            .await
    }

    async fn get_public(&self, include_images: bool) -> Result<Vec<Product>> {
        self.list(schema::SELECT_PUBLIC_PRODUCTS, Vec::new(), include_images)
            .await
    }

    async fn get_by_category(
        &self,
        category: ProductCategory,
        include_images: bool,
    ) -> Result<Vec<Product>> {
        self.list(
            schema::SELECT_PRODUCTS_BY_CATEGORY,
            vec![category.as_str().to_string()],
            include_images,
        )
        .await
    }

    async fn get_by_status(
        &self,
        status: ProductStatus,
        include_images: bool,
    ) -> Result<Vec<Product>> {
        self.list(
            schema::SELECT_PRODUCTS_BY_STATUS,
            vec![status.as_str().to_string()],
            include_images,
        )
        .await
    }

    async fn search(&self, term: &str, include_images: bool) -> Result<Vec<Product>> {
        // SQLite's LOWER() only folds ASCII, so matching happens here with the
        // same predicate the in-memory store uses.
        let needle = normalize_search_term(term);

        self.conn
            .call(move |conn| {
                let mut products = fetch_products(conn, schema::SELECT_ALL_PRODUCTS, &[])
                    .map_err(wrap_err)?;
                products.retain(|p| matches_search(p, needle.as_deref()));
                if include_images {
                    load_images(conn, &mut products).map_err(wrap_err)?;
                }
                Ok(products)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Product", "search"))
    }

    async fn add(&self, product: &Product) -> Result<Product> {
        validate_product(product)?;

        let name = product.name.clone();
        let description = product.description.clone();
        let category = product.category.as_str();
        let status = product.status.as_str();
        let quantity = product.quantity;
        let price = format_price(product.price.map(normalize_price));
        let is_public = product.is_public;
        let created_at = format_datetime(&product.created_at);
        let images: Vec<(String, bool)> = product
            .images
            .iter()
            .map(|image| (image.image_url.clone(), image.is_primary))
            .collect();

        let stored = self
            .conn
            .call(move |conn| {
                let tx = conn.transaction().map_err(wrap_err)?;
                tx.execute(
                    schema::INSERT_PRODUCT,
                    rusqlite::params![
                        name,
                        description,
                        category,
                        status,
                        quantity,
                        price,
                        is_public,
                        created_at
                    ],
                )
                .map_err(wrap_err)?;
                let id = tx.last_insert_rowid();

                for (image_url, is_primary) in &images {
                    tx.execute(
                        schema::INSERT_IMAGE,
                        rusqlite::params![id, image_url, is_primary],
                    )
                    .map_err(wrap_err)?;
                }

                let stored = fetch_product(&tx, id, true).map_err(wrap_err)?;
                tx.commit().map_err(wrap_err)?;
                Ok(stored)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Product", "new"))?;

        tracing::debug!(product_id = stored.id, images = stored.images.len(), "Product added");
        Ok(stored)
    }

    async fn update(&self, product: &Product) -> Result<Product> {
        validate_scalars(product)?;

        let id = product.id;
        let name = product.name.clone();
        let description = product.description.clone();
        let category = product.category.as_str();
        let status = product.status.as_str();
        let quantity = product.quantity;
        let price = format_price(product.price.map(normalize_price));
        let is_public = product.is_public;

        let stored = self
            .conn
            .call(move |conn| {
                let tx = conn.transaction().map_err(wrap_err)?;
                let rows = tx
                    .execute(
                        schema::UPDATE_PRODUCT,
                        rusqlite::params![
                            id,
                            name,
                            description,
                            category,
                            status,
                            quantity,
                            price,
                            is_public
                        ],
                    )
                    .map_err(wrap_err)?;
                if rows == 0 {
                    return Err(wrap_err(rusqlite::Error::QueryReturnedNoRows));
                }

                let stored = fetch_product(&tx, id, true).map_err(wrap_err)?;
                tx.commit().map_err(wrap_err)?;
                Ok(stored)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Product", id.to_string()))?;

        tracing::debug!(product_id = id, "Product updated");
        Ok(stored)
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let rows = self
            .conn
            .call(move |conn| {
                conn.execute(schema::DELETE_PRODUCT, [id])
                    .map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Product", id.to_string()))?;

        tracing::debug!(product_id = id, deleted = rows > 0, "Product delete");
        Ok(())
    }

    async fn exists(&self, id: i64) -> Result<bool> {
        self.conn
            .call(move |conn| {
                conn.query_row(schema::PRODUCT_EXISTS, [id], |row| row.get(0))
                    .map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Product", id.to_string()))
    }
}
