//! # wd-calc
//!
//! The working-day calculation engine.
//!
//! A calculation is one pure, bounded function call: the [`walker`] steps
//! through calendar dates, the [`classifier`] decides what each date is, and
//! the [`aggregator`] folds the verdicts into counts. Nothing is retained
//! between calls.
//!
//! ```
//! use wd_calc::{calculate_working_days, CalculationMode, WorkDayConfig};
//! use wd_time::Region;
//!
//! let region = Region::BelgiumFlanders;
//! let config = WorkDayConfig::for_provider(&region);
//! let result = calculate_working_days(
//!     &region,
//!     CalculationMode::DateRange,
//!     "2024-07-08",
//!     "2024-07-14",
//!     &config,
//! )
//! .unwrap();
//! // Monday to Sunday, with the Flemish feast day on Thursday the 11th
//! assert_eq!(result.total_working_days, 4);
//! assert_eq!(result.holiday_count, 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Folding day verdicts into summary counts.
pub mod aggregator;

/// The calculation entry point and holiday preview.
pub mod calculator;

/// Per-date classification.
pub mod classifier;

/// User-owned working-day configuration.
pub mod config;

/// Calculation modes.
pub mod mode;

/// `CalculationResult`.
pub mod result;

/// `DayStatus`.
pub mod status;

/// Bounded date iteration.
pub mod walker;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use aggregator::Tally;
pub use calculator::{calculate_working_days, holiday_preview, parse_request, HolidayPreview};
pub use classifier::{classify, DayClassifier};
pub use config::{ExcludedRange, ExclusionKind, WorkDayConfig};
pub use mode::CalculationMode;
pub use result::CalculationResult;
pub use status::DayStatus;
pub use walker::{walk, WalkRequest, MAX_DAYS_EXAMINED};
