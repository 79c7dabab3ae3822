//! Functional core for craftcatalog.
//!
//! Pure domain types, validation, repository contracts and cache helpers.
//! Nothing in this crate performs I/O; backends live in the `craftcatalog`
//! crate.

pub mod cache;
pub mod catalog;
pub mod storage;
