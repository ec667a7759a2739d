//! # wd-core
//!
//! Foundational pieces shared by every crate in the workday workspace: the
//! error type with its `ensure!` macro, and strict parsers for
//! the string inputs accepted at the calculation boundary.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` macro.
pub mod errors;

/// Miscellaneous utilities.
pub mod utilities;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
