//! `CalculationResult` — the outcome of one calculation.

use wd_time::Date;

use crate::aggregator::Tally;
use crate::status::DayStatus;

/// Immutable snapshot of one calculation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CalculationResult {
    /// Working days found.
    pub total_working_days: u32,
    /// Latest examined date, in `add-days` mode.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub end_date: Option<Date>,
    /// Earliest examined date, in `subtract-days` mode.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub start_date: Option<Date>,
    /// Every examined day, ascending by date.
    pub day_log: Vec<DayStatus>,
    /// Days that were holidays.
    pub holiday_count: u32,
    /// Days outside the working weekdays.
    pub weekend_count: u32,
    /// Excluded days that were not also holidays.
    pub excluded_count: u32,
    /// The walk stopped at the safety bound (or the edge of the calendar)
    /// before answering the question in full.
    pub truncated: bool,
}

impl CalculationResult {
    /// Assemble a result from a finished, sorted log and its tally.
    pub(crate) fn from_tally(day_log: Vec<DayStatus>, tally: Tally, truncated: bool) -> Self {
        Self {
            total_working_days: tally.working_days,
            end_date: None,
            start_date: None,
            day_log,
            holiday_count: tally.holidays,
            weekend_count: tally.weekend_days,
            excluded_count: tally.excluded_days,
            truncated,
        }
    }

    /// The reported result date, whichever field it lives in.
    pub fn result_date(&self) -> Option<Date> {
        self.end_date.or(self.start_date)
    }

    /// Number of calendar days examined.
    pub fn days_examined(&self) -> usize {
        self.day_log.len()
    }

    /// First and last examined dates.
    pub fn span(&self) -> Option<(Date, Date)> {
        Some((self.day_log.first()?.date, self.day_log.last()?.date))
    }
}
