//! # workday
//!
//! Working-day calculator for Belgium and the Netherlands.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates, and adds what the `workday` binary needs on
//! top: a TOML configuration file and text/JSON reports. Application code
//! should depend on this crate rather than the individual `wd-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use workday::prelude::*;
//!
//! let region = Region::Netherlands;
//! let config = WorkDayConfig::for_provider(&region);
//! // King's Day 2024 fell on a Saturday, so the week keeps five work days
//! let result = calculate_working_days(
//!     &region,
//!     CalculationMode::DateRange,
//!     "2024-04-22",
//!     "2024-04-28",
//!     &config,
//! )
//! .unwrap();
//! assert_eq!(result.total_working_days, 5);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error definitions and input parsers.
pub use wd_core as core;

/// Dates, weekdays, holidays, and region providers.
pub use wd_time as time;

/// The calculation engine.
pub use wd_calc as calc;

/// The TOML application configuration.
pub mod config;

/// Text and JSON rendering of results.
pub mod report;

/// Commonly used items, for glob import.
pub mod prelude {
    pub use wd_calc::{
        calculate_working_days, holiday_preview, CalculationMode, CalculationResult, DayStatus,
        ExcludedRange, ExclusionKind, HolidayPreview, WorkDayConfig,
    };
    pub use wd_core::errors::{Error, Result};
    pub use wd_time::{Date, Holiday, HolidayKind, Region, RegionHolidayProvider, Weekday, WeekdaySet};

    pub use crate::config::AppConfig;
}
