//! Day Classifier.
//!
//! Decides, for one date, whether it is a designated weekday, an active
//! holiday, and inside an excluded range. Rules apply in a fixed order:
//!
//! 1. `is_weekend` is set when the weekday is not in `config.weekdays`.
//! 2. With `ignore_public_holidays` set, no date is a holiday. Otherwise a
//!    custom holiday matches first and cannot be disabled; failing that, the
//!    provider's holiday for that year applies unless its date is listed in
//!    `disabled_holiday_dates`.
//! 3. The first excluded range containing the date supplies the label.
//! 4. A work day is one where none of the above holds.

use std::collections::HashMap;

use tracing::trace;
use wd_time::{Date, Holiday, RegionHolidayProvider};

use crate::config::WorkDayConfig;
use crate::status::DayStatus;

/// Classifies dates against one configuration and one provider.
///
/// Provider results are cached per year for the lifetime of the classifier,
/// which is meant to be a single calculation.
#[derive(Debug)]
pub struct DayClassifier<'a> {
    config: &'a WorkDayConfig,
    provider: &'a dyn RegionHolidayProvider,
    holidays_by_year: HashMap<u16, Vec<Holiday>>,
}

impl<'a> DayClassifier<'a> {
    /// Create a classifier with an empty year cache.
    pub fn new(config: &'a WorkDayConfig, provider: &'a dyn RegionHolidayProvider) -> Self {
        Self {
            config,
            provider,
            holidays_by_year: HashMap::new(),
        }
    }

    /// Classify `date`.
    pub fn classify(&mut self, date: Date) -> DayStatus {
        let is_weekend = !self.config.weekdays.contains(date.weekday());
        let holiday_name = self.holiday_name(date);
        let exclusion_name = self
            .config
            .excluded_range_on(date)
            .map(|r| r.label.clone());

        let is_holiday = holiday_name.is_some();
        let is_excluded = exclusion_name.is_some();
        DayStatus {
            date,
            is_weekend,
            is_holiday,
            holiday_name,
            is_excluded,
            exclusion_name,
            is_work_day: !is_weekend && !is_holiday && !is_excluded,
        }
    }

    /// Number of distinct years fetched from the provider so far.
    pub fn cached_years(&self) -> usize {
        self.holidays_by_year.len()
    }

    /// Name of the active holiday on `date`, if any.
    fn holiday_name(&mut self, date: Date) -> Option<String> {
        let config = self.config;
        if config.ignore_public_holidays {
            return None;
        }
        if let Some(custom) = config.custom_holiday_on(date) {
            return Some(custom.name.clone());
        }
        let public = self
            .holidays_for_year(date.year())
            .iter()
            .find(|h| h.date == date)?;
        if config.is_holiday_disabled(date) {
            return None;
        }
        Some(public.name.clone())
    }

    fn holidays_for_year(&mut self, year: u16) -> &[Holiday] {
        let provider = self.provider;
        self.holidays_by_year.entry(year).or_insert_with(|| {
            trace!(region = provider.id(), year, "loading holidays");
            provider.public_holidays(year)
        })
    }
}

/// Classify a single date without keeping a cache around.
pub fn classify(
    date: Date,
    config: &WorkDayConfig,
    provider: &dyn RegionHolidayProvider,
) -> DayStatus {
    DayClassifier::new(config, provider).classify(date)
}
