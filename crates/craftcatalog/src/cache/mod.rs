//! Cache backend implementations.
//!
//! Concrete implementations of the [`Cache`](craftcatalog_core::cache::Cache)
//! trait defined in `craftcatalog_core::cache`. Only a process-local backend is
//! provided; entries are not shared between processes.

pub mod memory;

pub use memory::MemoryCache;
