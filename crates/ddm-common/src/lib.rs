//! Shared utilities for the recipe crates.
//!
//! This crate provides Polars DataFrame helpers used by conditioning and
//! branch resolution.

pub mod polars;

// Re-export commonly used functions at crate root for convenience
pub use self::polars::{distinct_i64, has_column, missing_columns, n_distinct};
