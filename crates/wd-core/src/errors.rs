//! Error types for the workday calculator.
//!
//! Every fallible operation in the workspace reports a single
//! `thiserror`-derived enum. Malformed input is rejected with an explicit
//! variant before any calculation starts; the calculation itself never fails.

use thiserror::Error;

/// The top-level error type used throughout the workspace.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A date string or date component could not be turned into a calendar
    /// date.
    #[error("invalid date: {0}")]
    InvalidDate(String),

    /// A working-day count was non-numeric, zero, or negative.
    #[error("invalid day count: {0}")]
    InvalidDayCount(String),

    /// An excluded range is malformed (reversed bounds, duplicate id).
    #[error("invalid excluded range: {0}")]
    InvalidRange(String),

    /// No region is registered under the given identifier.
    #[error("unknown region: {0}")]
    UnknownRegion(String),

    /// The calculation mode name is not recognised.
    #[error("unknown calculation mode: {0}")]
    UnknownMode(String),

    /// Precondition violated.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),
}

/// Shorthand `Result` type used throughout the workspace.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return early with an error if a condition does not hold.
///
/// With a bare message the error is [`Error::Precondition`]; a leading
/// variant path selects another string-carrying variant.
///
/// # Example
/// ```
/// use wd_core::{ensure, errors::{Error, Result}};
/// fn positive(x: i64) -> Result<i64> {
///     ensure!(x > 0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// fn ordered(a: i32, b: i32) -> Result<()> {
///     ensure!(a <= b, Error::InvalidRange, "{a} > {b}");
///     Ok(())
/// }
/// assert!(positive(1).is_ok());
/// assert!(positive(-1).is_err());
/// assert_eq!(ordered(2, 1), Err(Error::InvalidRange("2 > 1".into())));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $variant:path, $($msg:tt)*) => {
        if !$cond {
            return Err($variant(format!($($msg)*)));
        }
    };
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}
