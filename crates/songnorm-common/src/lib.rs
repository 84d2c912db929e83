//! Shared utilities for songnorm crates.
//!
//! This crate provides the polars `AnyValue` conversions and the lenient
//! numeric parsing used by both ingestion and normalization.

pub mod numeric;
pub mod polars;

pub use numeric::{coerce_count, parse_i64, strip_thousands};
pub use polars::{any_to_string, format_numeric};
