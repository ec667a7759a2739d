//! Input parsing helpers.

/// Strict parsers for canonical dates and working-day counts.
pub mod data_parsers;

pub use data_parsers::{parse_day_count, parse_iso_date};
