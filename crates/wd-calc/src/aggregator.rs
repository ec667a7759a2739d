//! Result Aggregator.
//!
//! A pure reduction over day verdicts. The walker feeds days in one at a
//! time with [`Tally::record`]; [`Tally::from_log`] folds a finished log.
//! Both produce the same counts.

use crate::status::DayStatus;

/// Summary counters over a sequence of [`DayStatus`] values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tally {
    /// Days with `is_work_day`.
    pub working_days: u32,
    /// Days with `is_weekend`.
    pub weekend_days: u32,
    /// Days with `is_holiday`.
    pub holidays: u32,
    /// Days with `is_excluded` that are not also holidays.
    pub excluded_days: u32,
}

impl Tally {
    /// Count one day.
    pub fn record(&mut self, status: &DayStatus) {
        if status.is_work_day {
            self.working_days += 1;
        }
        if status.is_weekend {
            self.weekend_days += 1;
        }
        if status.is_holiday {
            self.holidays += 1;
        } else if status.is_excluded {
            // holiday status wins, so a day is never counted twice here
            self.excluded_days += 1;
        }
    }

    /// Fold a complete log.
    pub fn from_log(log: &[DayStatus]) -> Self {
        log.iter().fold(Tally::default(), |mut tally, status| {
            tally.record(status);
            tally
        })
    }
}
