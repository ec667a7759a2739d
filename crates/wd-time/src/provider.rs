//! `RegionHolidayProvider` trait.
//!
//! A provider knows the public and regional holidays of one jurisdiction.
//! It is a pure lookup: the same year always yields the same list.

use crate::date::Date;
use crate::holiday::Holiday;
use crate::weekday::WeekdaySet;

/// The holiday calendar of one region.
pub trait RegionHolidayProvider: std::fmt::Debug + Send + Sync {
    /// Stable identifier (e.g. `"BE-VLG"`).
    fn id(&self) -> &str;

    /// Human-readable name.
    fn name(&self) -> &str;

    /// One-line description of what the calendar covers.
    fn description(&self) -> &str;

    /// Weekdays considered workable by default in this region.
    fn default_weekdays(&self) -> WeekdaySet {
        WeekdaySet::MONDAY_TO_FRIDAY
    }

    /// Every holiday observed in `year`, sorted by date.
    ///
    /// Both fixed-date and Easter-derived holidays are included.
    fn public_holidays(&self, year: u16) -> Vec<Holiday>;

    /// Return the holiday falling on `date`, if any.
    fn holiday_on(&self, date: Date) -> Option<Holiday> {
        self.public_holidays(date.year())
            .into_iter()
            .find(|h| h.date == date)
    }
}

/// Sort a freshly assembled holiday list by date.
///
/// Fixed and movable holidays are pushed in two batches; providers finish
/// with this so the result is ordered.
pub(crate) fn sorted(mut holidays: Vec<Holiday>) -> Vec<Holiday> {
    holidays.sort_by_key(|h| h.date);
    holidays
}
