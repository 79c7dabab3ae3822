//! Command execution against the application state.

use anyhow::{bail, Result};
use chrono::Utc;
use serde::Serialize;
use serde_json::json;

use craftcatalog_core::catalog::Product;
use craftcatalog_core::storage::ProductFilter;

use crate::cli::{Commands, OutputFormat};
use crate::output::{pretty, render};
use crate::state::AppState;

fn emit<T: Serialize>(value: &T, format: OutputFormat, pretty: impl FnOnce(&T) -> String) -> Result<()> {
    println!("{}", render(value, format, pretty)?);
    Ok(())
}

fn emit_products(products: &[Product], format: OutputFormat) -> Result<()> {
    emit(&products, format, |p| pretty::format_products(p))
}

/// Runs a parsed command and prints its result to stdout.
pub async fn run(command: Commands, format: OutputFormat, state: &AppState) -> Result<()> {
    let products = &state.products;

    match command {
        Commands::Seed => {
            let inserted = state.seed().await?;
            emit(&json!({ "inserted": inserted }), format, |_| {
                format!("Seeded {} products", inserted)
            })
        }
        Commands::List(list) => {
            let filter = list.filter();
            tracing::debug!(?filter, images = list.images, "Listing products");
            let found = match filter {
                ProductFilter::All => products.get_all(list.images).await?,
                ProductFilter::Public => products.get_public(list.images).await?,
                ProductFilter::Category(category) => {
                    products.get_by_category(category, list.images).await?
                }
                ProductFilter::Status(status) => products.get_by_status(status, list.images).await?,
            };
            emit_products(&found, format)
        }
        Commands::Get {
            id,
            images,
            read_only,
        } => {
            let Some(product) = products.get_by_id(id, images, read_only).await? else {
                bail!("Product not found: {}", id);
            };
            emit(&product, format, pretty::format_product)
        }
        Commands::Search { term, images } => {
            let found = products.search(&term, images).await?;
            emit_products(&found, format)
        }
        Commands::Add(add) => {
            let product = products.add(&add.into_product(Utc::now())).await?;
            emit(&product, format, |p| {
                format!("Created:\n{}", pretty::format_product(p))
            })
        }
        Commands::Update(update) => {
            let Some(mut product) = products.get_by_id(update.id, false, false).await? else {
                bail!("Product not found: {}", update.id);
            };
            update.apply(&mut product);
            let product = match products.update(&product).await {
                Err(err) if err.is_not_found() => bail!("Product not found: {}", update.id),
                result => result?,
            };
            emit(&product, format, |p| {
                format!("Updated:\n{}", pretty::format_product(p))
            })
        }
        Commands::Delete { id } => {
            products.delete(id).await?;
            emit(&json!({ "deleted": id }), format, |_| {
                format!("Deleted product {}", id)
            })
        }
        Commands::Exists { id } => {
            let exists = products.exists(id).await?;
            emit(&json!({ "id": id, "exists": exists }), format, |_| {
                exists.to_string()
            })
        }
    }
}
