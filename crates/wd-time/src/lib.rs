//! # wd-time
//!
//! Calendar dates, weekdays, holidays, and the per-region holiday providers
//! for Belgium and the Netherlands.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `Date` type.
pub mod date;

/// Easter computus and the movable feasts derived from it.
pub mod easter;

/// `Holiday` and `HolidayKind`.
pub mod holiday;

/// `RegionHolidayProvider` trait.
pub mod provider;

/// Concrete region providers and the `Region` registry.
pub mod regions;

/// `Weekday` and `WeekdaySet`.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use date::Date;
pub use holiday::{Holiday, HolidayKind};
pub use provider::RegionHolidayProvider;
pub use regions::Region;
pub use weekday::{Weekday, WeekdaySet};
