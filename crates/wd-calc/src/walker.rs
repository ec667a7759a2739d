//! Range Walker.
//!
//! Steps through calendar dates one day at a time, classifying each, until
//! the question is answered or [`MAX_DAYS_EXAMINED`] days have been looked
//! at. The start date is always examined first, in every mode.

use tracing::debug;
use wd_time::{Date, RegionHolidayProvider};

use crate::aggregator::Tally;
use crate::classifier::DayClassifier;
use crate::config::WorkDayConfig;
use crate::mode::CalculationMode;
use crate::result::CalculationResult;
use crate::status::DayStatus;

/// Upper bound on calendar days examined by one walk (about ten years).
pub const MAX_DAYS_EXAMINED: u32 = 3650;

/// A calculation mode paired with its parsed target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WalkRequest {
    /// Count working days in `start..=end`.
    DateRange {
        /// First date examined.
        start: Date,
        /// Last date examined.
        end: Date,
    },
    /// Walk forward from `start` until `days` working days are found.
    AddDays {
        /// First date examined.
        start: Date,
        /// Working days to find.
        days: u32,
    },
    /// Walk backward from `start` until `days` working days are found.
    SubtractDays {
        /// First date examined.
        start: Date,
        /// Working days to find.
        days: u32,
    },
}

impl WalkRequest {
    /// The mode this request answers.
    pub fn mode(&self) -> CalculationMode {
        match self {
            WalkRequest::DateRange { .. } => CalculationMode::DateRange,
            WalkRequest::AddDays { .. } => CalculationMode::AddDays,
            WalkRequest::SubtractDays { .. } => CalculationMode::SubtractDays,
        }
    }

    /// The first date the walk examines.
    pub fn start(&self) -> Date {
        match *self {
            WalkRequest::DateRange { start, .. }
            | WalkRequest::AddDays { start, .. }
            | WalkRequest::SubtractDays { start, .. } => start,
        }
    }
}

/// Run one bounded walk.
///
/// The walk itself cannot fail. Hitting the day bound, or the edge of the
/// representable calendar, ends it early with `truncated` set.
pub fn walk(
    provider: &dyn RegionHolidayProvider,
    request: &WalkRequest,
    config: &WorkDayConfig,
) -> CalculationResult {
    let mut classifier = DayClassifier::new(config, provider);
    let result = match *request {
        WalkRequest::DateRange { start, end } => walk_range(&mut classifier, start, end),
        WalkRequest::AddDays { start, days } => {
            let mut result = walk_count(&mut classifier, start, days, 1);
            result.end_date = result.day_log.last().map(|s| s.date);
            result
        }
        WalkRequest::SubtractDays { start, days } => {
            let mut result = walk_count(&mut classifier, start, days, -1);
            result.start_date = result.day_log.first().map(|s| s.date);
            result
        }
    };
    if result.truncated {
        debug!(
            mode = %request.mode(),
            start = %request.start(),
            examined = result.day_log.len(),
            found = result.total_working_days,
            "walk stopped before reaching its target"
        );
    }
    result
}

fn walk_range(classifier: &mut DayClassifier<'_>, start: Date, end: Date) -> CalculationResult {
    let span = usize::try_from(start.days_between(end) + 1).unwrap_or(0);
    let mut log = Vec::with_capacity(span.min(MAX_DAYS_EXAMINED as usize));
    let mut tally = Tally::default();

    let mut next = Some(start);
    while let Some(date) = next.filter(|d| *d <= end) {
        if log.len() >= MAX_DAYS_EXAMINED as usize {
            break;
        }
        record(classifier, date, &mut log, &mut tally);
        next = date.add_days(1).ok();
    }

    let truncated = next.is_some_and(|d| d <= end);
    CalculationResult::from_tally(log, tally, truncated)
}

/// Walk in steps of `step` days until `days` working days are found.
///
/// The log comes back sorted ascending, so the date reached is its last
/// entry going forward and its first going backward.
fn walk_count(
    classifier: &mut DayClassifier<'_>,
    start: Date,
    days: u32,
    step: i32,
) -> CalculationResult {
    if days == 0 {
        return CalculationResult::default();
    }
    let mut log = Vec::new();
    let mut tally = Tally::default();

    let mut next = Some(start);
    while tally.working_days < days && log.len() < MAX_DAYS_EXAMINED as usize {
        let Some(date) = next else { break };
        record(classifier, date, &mut log, &mut tally);
        next = date.add_days(step).ok();
    }

    let truncated = tally.working_days < days;
    // backward walks log newest first
    log.sort_by_key(|s| s.date);
    CalculationResult::from_tally(log, tally, truncated)
}

/// Classify `date`, append it to the log and count it.
fn record(
    classifier: &mut DayClassifier<'_>,
    date: Date,
    log: &mut Vec<DayStatus>,
    tally: &mut Tally,
) {
    let status = classifier.classify(date);
    tally.record(&status);
    log.push(status);
}
