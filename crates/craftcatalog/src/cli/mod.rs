//! CLI command definitions.

mod products;

pub use products::{AddCommand, ListCommand, UpdateCommand};

use clap::{Parser, Subcommand, ValueEnum};

/// Catalog backend for handcrafted goods.
#[derive(Debug, Parser)]
#[command(name = "craftcatalog")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format.
    #[arg(long, global = true, default_value = "pretty")]
    pub format: OutputFormat,

    /// Bypass the cache and talk to the store directly.
    #[arg(long, global = true)]
    pub no_cache: bool,

    /// Use a throwaway in-memory store instead of SQLite.
    #[arg(long, global = true)]
    pub in_memory: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Insert the sample catalog when the store is empty.
    Seed,
    /// List products, optionally filtered.
    List(ListCommand),
    /// Show a single product.
    Get {
        /// Product ID.
        id: i64,
        /// Include images.
        #[arg(long)]
        images: bool,
        /// Hint that the result will not be modified.
        #[arg(long)]
        read_only: bool,
    },
    /// Case-insensitive search over names and descriptions.
    Search {
        /// Text to look for. An empty term lists everything.
        term: String,
        /// Include images.
        #[arg(long)]
        images: bool,
    },
    /// Add a product.
    Add(AddCommand),
    /// Change fields of an existing product.
    Update(UpdateCommand),
    /// Delete a product and its images.
    Delete {
        /// Product ID.
        id: i64,
    },
    /// Check whether a product exists.
    Exists {
        /// Product ID.
        id: i64,
    },
}
