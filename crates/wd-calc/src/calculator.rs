//! Calculation entry point.
//!
//! [`calculate_working_days`] is the one function front ends call. It turns
//! string inputs into a [`WalkRequest`], rejecting anything malformed before
//! a single day is examined, and hands the request to the walker.

use tracing::debug;
use wd_core::errors::Result;
use wd_core::utilities::parse_day_count;
use wd_time::{Date, Holiday, RegionHolidayProvider};

use crate::config::WorkDayConfig;
use crate::mode::CalculationMode;
use crate::result::CalculationResult;
use crate::walker::{walk, WalkRequest};

/// Run one working-day calculation.
///
/// `start` is a `YYYY-MM-DD` date. `target` is the end date in
/// [`CalculationMode::DateRange`], and a positive working-day count in the
/// other two modes.
///
/// # Errors
/// * [`Error::InvalidDate`](wd_core::errors::Error::InvalidDate) if `start`,
///   or `target` in date-range mode, is not a valid calendar date.
/// * [`Error::InvalidDayCount`](wd_core::errors::Error::InvalidDayCount) if
///   the count is not a whole number greater than zero.
/// * [`Error::InvalidRange`](wd_core::errors::Error::InvalidRange) if the
///   configuration holds a malformed excluded range.
#[tracing::instrument(skip(provider, config), fields(region = provider.id()))]
pub fn calculate_working_days(
    provider: &dyn RegionHolidayProvider,
    mode: CalculationMode,
    start: &str,
    target: &str,
    config: &WorkDayConfig,
) -> Result<CalculationResult> {
    let request = parse_request(mode, start, target)?;
    config.validate()?;

    let result = walk(provider, &request, config);
    debug!(
        working_days = result.total_working_days,
        holidays = result.holiday_count,
        weekend_days = result.weekend_count,
        excluded_days = result.excluded_count,
        examined = result.day_log.len(),
        truncated = result.truncated,
        "calculation finished"
    );
    Ok(result)
}

/// Turn string inputs into a [`WalkRequest`].
pub fn parse_request(mode: CalculationMode, start: &str, target: &str) -> Result<WalkRequest> {
    let start: Date = start.parse()?;
    Ok(match mode {
        CalculationMode::DateRange => WalkRequest::DateRange {
            start,
            end: target.parse()?,
        },
        CalculationMode::AddDays => WalkRequest::AddDays {
            start,
            days: parse_day_count(target)?,
        },
        CalculationMode::SubtractDays => WalkRequest::SubtractDays {
            start,
            days: parse_day_count(target)?,
        },
    })
}

// ── Holiday preview ───────────────────────────────────────────────────────────

/// A holiday as it will be applied by a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HolidayPreview {
    /// The holiday.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub holiday: Holiday,
    /// `false` when the user has switched this provider holiday off.
    pub enabled: bool,
}

/// List the holidays of `year` under `config`.
///
/// Provider holidays come first, in date order, each flagged by whether
/// `config` disables it. The user's custom holidays for the same year
/// follow; those are always enabled. With `ignore_public_holidays` set,
/// every entry is reported disabled.
pub fn holiday_preview(
    provider: &dyn RegionHolidayProvider,
    year: u16,
    config: &WorkDayConfig,
) -> Vec<HolidayPreview> {
    let active = !config.ignore_public_holidays;
    let public = provider
        .public_holidays(year)
        .into_iter()
        .map(|holiday| HolidayPreview {
            enabled: active && !config.is_holiday_disabled(holiday.date),
            holiday,
        });
    let custom = config
        .custom_holidays
        .iter()
        .filter(|h| h.date.year() == year)
        .map(|holiday| HolidayPreview {
            holiday: holiday.clone(),
            enabled: active,
        });
    public.chain(custom).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use wd_core::errors::Error;
    use wd_time::{HolidayKind, Region};

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn parse_request_per_mode() {
        assert_eq!(
            parse_request(CalculationMode::DateRange, "2024-01-01", "2024-01-31"),
            Ok(WalkRequest::DateRange {
                start: date(2024, 1, 1),
                end: date(2024, 1, 31)
            })
        );
        assert_eq!(
            parse_request(CalculationMode::SubtractDays, "2024-01-31", "10"),
            Ok(WalkRequest::SubtractDays {
                start: date(2024, 1, 31),
                days: 10
            })
        );
    }

    #[test]
    fn malformed_inputs_are_rejected() {
        let region = Region::BelgiumFlanders;
        let cfg = WorkDayConfig::for_provider(&region);
        let run = |mode, start: &str, target: &str| {
            calculate_working_days(&region, mode, start, target, &cfg)
        };
        assert!(matches!(
            run(CalculationMode::DateRange, "2024-02-30", "2024-03-01"),
            Err(Error::InvalidDate(_))
        ));
        assert!(matches!(
            run(CalculationMode::DateRange, "2024-02-01", "03/01/2024"),
            Err(Error::InvalidDate(_))
        ));
        assert!(matches!(
            run(CalculationMode::AddDays, "2024-02-01", "0"),
            Err(Error::InvalidDayCount(_))
        ));
        assert!(matches!(
            run(CalculationMode::SubtractDays, "2024-02-01", "-4"),
            Err(Error::InvalidDayCount(_))
        ));
        assert!(matches!(
            run(CalculationMode::AddDays, "2024-02-01", "2024-03-01"),
            Err(Error::InvalidDayCount(_))
        ));
    }

    #[test]
    fn preview_flags_disabled_holidays() {
        let region = Region::BelgiumFlanders;
        let cfg = WorkDayConfig::for_provider(&region).with_holiday_toggled(date(2024, 7, 11));
        let preview = holiday_preview(&region, 2024, &cfg);
        assert_eq!(preview.len(), region.public_holidays(2024).len());
        let disabled: Vec<_> = preview.iter().filter(|p| !p.enabled).collect();
        assert_eq!(disabled.len(), 1);
        assert_eq!(disabled[0].holiday.date, date(2024, 7, 11));
    }

    #[test]
    fn preview_appends_custom_holidays_of_that_year() {
        let region = Region::Netherlands;
        let cfg = WorkDayConfig::for_provider(&region)
            .with_custom_holiday(Holiday::new(date(2024, 10, 4), "Dierendag", HolidayKind::Custom))
            .with_custom_holiday(Holiday::new(date(2025, 10, 4), "Dierendag", HolidayKind::Custom));
        let preview = holiday_preview(&region, 2024, &cfg);
        let last = preview.last().unwrap();
        assert_eq!(last.holiday.date, date(2024, 10, 4));
        assert!(last.enabled);
        assert_eq!(preview.len(), region.public_holidays(2024).len() + 1);
    }

    #[test]
    fn preview_with_holidays_ignored() {
        let region = Region::Netherlands;
        let cfg = WorkDayConfig::for_provider(&region).with_ignore_public_holidays(true);
        assert!(holiday_preview(&region, 2024, &cfg).iter().all(|p| !p.enabled));
    }
}
