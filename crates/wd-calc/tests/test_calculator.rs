//! Integration tests for the calculation entry point.

use proptest::prelude::*;

use wd_calc::{
    calculate_working_days, classify, CalculationMode, ExcludedRange, ExclusionKind, Tally,
    WorkDayConfig, MAX_DAYS_EXAMINED,
};
use wd_time::{Date, Holiday, HolidayKind, Region, RegionHolidayProvider, Weekday, WeekdaySet};

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

fn flanders() -> (Region, WorkDayConfig) {
    let region = Region::BelgiumFlanders;
    (region, WorkDayConfig::for_provider(&region))
}

fn range(region: &Region, cfg: &WorkDayConfig, start: &str, end: &str) -> wd_calc::CalculationResult {
    calculate_working_days(region, CalculationMode::DateRange, start, end, cfg).unwrap()
}

// ── Scenarios ─────────────────────────────────────────────────────────────────

#[test]
fn week_without_holidays() {
    let (region, cfg) = flanders();
    // Monday 2024-06-10 to Sunday 2024-06-16
    let r = range(&region, &cfg, "2024-06-10", "2024-06-16");
    assert_eq!(r.total_working_days, 5);
    assert_eq!(r.weekend_count, 2);
    assert_eq!(r.holiday_count, 0);
    assert_eq!(r.excluded_count, 0);
    assert_eq!(r.day_log.len(), 7);
    assert!(!r.truncated);
    assert_eq!(r.end_date, None);
    assert_eq!(r.start_date, None);
}

#[test]
fn add_days_counts_the_start_date() {
    let (region, cfg) = flanders();
    // Friday counts as day 1, then Monday and Tuesday
    let r = calculate_working_days(&region, CalculationMode::AddDays, "2024-06-14", "3", &cfg)
        .unwrap();
    assert_eq!(r.total_working_days, 3);
    assert_eq!(r.end_date, Some(date(2024, 6, 18)));
    assert_eq!(r.start_date, None);
    assert_eq!(r.weekend_count, 2);
    assert_eq!(r.day_log.len(), 5);
    assert_eq!(r.day_log.last().map(|s| s.date), r.end_date);
}

#[test]
fn custom_holiday_on_start_date_is_skipped() {
    let (region, cfg) = flanders();
    let start = date(2024, 6, 12);
    let cfg = cfg.with_custom_holiday(Holiday::new(start, "Verhuis", HolidayKind::Custom));
    let r = calculate_working_days(&region, CalculationMode::AddDays, "2024-06-12", "1", &cfg)
        .unwrap();
    assert_eq!(r.end_date, Some(date(2024, 6, 13)));
    assert_eq!(r.holiday_count, 1);
    assert_eq!(r.day_log[0].holiday_name.as_deref(), Some("Verhuis"));
}

#[test]
fn long_range_is_truncated() {
    let (region, cfg) = flanders();
    let r = range(&region, &cfg, "2000-01-01", "2020-12-31");
    assert_eq!(r.day_log.len(), MAX_DAYS_EXAMINED as usize);
    assert!(r.truncated);

    // Same as asking for exactly the first 3650 days
    let last = date(2000, 1, 1) + (MAX_DAYS_EXAMINED as i32 - 1);
    let bounded = range(&region, &cfg, "2000-01-01", &last.to_string());
    assert!(!bounded.truncated);
    assert_eq!(r.total_working_days, bounded.total_working_days);
    assert_eq!(r.day_log.last().map(|s| s.date), Some(last));
}

fn long_leave(start: Date, end: Date) -> WorkDayConfig {
    let (_, cfg) = flanders();
    cfg.with_excluded_range(
        ExcludedRange::new("sabbatical", start, end, "Sabbatical", ExclusionKind::Leave).unwrap(),
    )
    .unwrap()
}

#[test]
fn add_days_stops_at_the_bound_with_some_found() {
    let region = Region::BelgiumFlanders;
    // Mon 10, Tue 11 and Wed 12 June 2024 work, then years of leave
    let cfg = long_leave(date(2024, 6, 13), date(2040, 1, 1));
    let r = calculate_working_days(&region, CalculationMode::AddDays, "2024-06-10", "10", &cfg)
        .unwrap();
    assert!(r.truncated);
    assert_eq!(r.total_working_days, 3);
    assert!(r.total_working_days < 10);
    assert_eq!(r.day_log.len(), MAX_DAYS_EXAMINED as usize);

    let tally = Tally::from_log(&r.day_log);
    assert_eq!(tally.working_days, r.total_working_days);
    assert_eq!(tally.holidays, r.holiday_count);
    assert_eq!(tally.weekend_days, r.weekend_count);
    assert_eq!(tally.excluded_days, r.excluded_count);

    // Reported date is the last day examined, not the last work day found
    let last = date(2024, 6, 10) + (MAX_DAYS_EXAMINED as i32 - 1);
    assert_eq!(r.end_date, Some(last));
    assert_eq!(r.day_log.last().map(|s| s.date), Some(last));
    assert_eq!(r.start_date, None);
}

#[test]
fn subtract_days_stops_at_the_bound_with_some_found() {
    let region = Region::BelgiumFlanders;
    let cfg = long_leave(date(2010, 1, 1), date(2024, 6, 9));
    let r = calculate_working_days(&region, CalculationMode::SubtractDays, "2024-06-12", "10", &cfg)
        .unwrap();
    assert!(r.truncated);
    assert_eq!(r.total_working_days, 3);
    assert_eq!(r.day_log.len(), MAX_DAYS_EXAMINED as usize);
    assert_eq!(Tally::from_log(&r.day_log).working_days, 3);

    let first = date(2024, 6, 12) - (MAX_DAYS_EXAMINED as i32 - 1);
    assert_eq!(r.start_date, Some(first));
    assert_eq!(r.day_log.first().map(|s| s.date), Some(first));
    assert_eq!(r.end_date, None);
}

// ── Holidays and exclusions ───────────────────────────────────────────────────

#[test]
fn flemish_july() {
    let (region, cfg) = flanders();
    // Jul 11 (Thu) and Jul 21 (Sun) 2024
    let r = range(&region, &cfg, "2024-07-01", "2024-07-31");
    assert_eq!(r.holiday_count, 2);
    assert_eq!(r.weekend_count, 8);
    assert_eq!(r.total_working_days, 22);
}

#[test]
fn walloon_calendar_differs() {
    let region = Region::BelgiumWallonia;
    let cfg = WorkDayConfig::for_provider(&region);
    // Jul 11 is an ordinary day in Wallonia, Sep 27 is not
    let july = range(&region, &cfg, "2024-07-11", "2024-07-11");
    assert_eq!(july.total_working_days, 1);
    let sept = range(&region, &cfg, "2024-09-27", "2024-09-27");
    assert_eq!(sept.holiday_count, 1);
    assert_eq!(sept.total_working_days, 0);
}

#[test]
fn easter_week_in_the_netherlands() {
    let region = Region::Netherlands;
    let cfg = WorkDayConfig::for_provider(&region);
    // Good Friday 2024-03-29 and Easter Monday 2024-04-01
    let r = range(&region, &cfg, "2024-03-25", "2024-04-05");
    assert_eq!(r.holiday_count, 2);
    assert_eq!(r.total_working_days, 8);
}

#[test]
fn holiday_inside_exclusion_counts_once() {
    let (region, cfg) = flanders();
    let cfg = cfg
        .with_excluded_range(
            ExcludedRange::new(
                "summer",
                date(2024, 7, 8),
                date(2024, 7, 12),
                "Zomerverlof",
                ExclusionKind::Leave,
            )
            .unwrap(),
        )
        .unwrap();
    let r = range(&region, &cfg, "2024-07-08", "2024-07-14");
    assert_eq!(r.holiday_count, 1);
    assert_eq!(r.excluded_count, 4);
    assert_eq!(r.weekend_count, 2);
    assert_eq!(r.total_working_days, 0);
}

#[test]
fn disabling_a_holiday_adds_a_work_day() {
    let (region, cfg) = flanders();
    let before = range(&region, &cfg, "2024-07-08", "2024-07-14");
    let cfg = cfg.with_holiday_toggled(date(2024, 7, 11));
    let after = range(&region, &cfg, "2024-07-08", "2024-07-14");
    assert_eq!(after.total_working_days, before.total_working_days + 1);
    assert_eq!(after.holiday_count, before.holiday_count - 1);

    // Toggling again restores the original result
    let restored = range(&region, &cfg.with_holiday_toggled(date(2024, 7, 11)), "2024-07-08", "2024-07-14");
    assert_eq!(restored, before);
}

#[test]
fn subtract_days_over_new_year() {
    let (region, cfg) = flanders();
    // 2025-01-03 is a Friday and New Year falls inside the walk
    let r = calculate_working_days(&region, CalculationMode::SubtractDays, "2025-01-03", "5", &cfg)
        .unwrap();
    assert_eq!(r.start_date, Some(date(2024, 12, 27)));
    assert_eq!(r.end_date, None);
    assert_eq!(r.holiday_count, 1);
    assert_eq!(r.day_log.first().map(|s| s.date), r.start_date);
    assert_eq!(r.day_log.last().map(|s| s.date), Some(date(2025, 1, 3)));
}

#[test]
fn six_day_week() {
    let (region, cfg) = flanders();
    let cfg = cfg.with_weekday_toggled(Weekday::Saturday);
    let r = range(&region, &cfg, "2024-06-10", "2024-06-16");
    assert_eq!(r.total_working_days, 6);
    assert_eq!(r.weekend_count, 1);
}

#[test]
fn reversed_bounds_in_config_are_rejected() {
    let (region, cfg) = flanders();
    let bad = WorkDayConfig {
        excluded_ranges: vec![ExcludedRange {
            id: "x".into(),
            start: date(2024, 2, 1),
            end: date(2024, 1, 1),
            label: "broken".into(),
            kind: ExclusionKind::Leave,
        }],
        ..cfg
    };
    assert!(calculate_working_days(&region, CalculationMode::DateRange, "2024-01-01", "2024-01-31", &bad).is_err());
}

// ── Properties ────────────────────────────────────────────────────────────────

fn any_date() -> impl Strategy<Value = Date> {
    (0i32..40_000).prop_map(|offset| date(1950, 1, 1) + offset)
}

fn any_region() -> impl Strategy<Value = Region> {
    prop::sample::select(Region::ALL.to_vec())
}

fn any_weekdays() -> impl Strategy<Value = WeekdaySet> {
    prop::collection::vec(0u8..7, 0..7).prop_map(|n| WeekdaySet::from_numbers(&n).unwrap())
}

fn any_config() -> impl Strategy<Value = WorkDayConfig> {
    (any_weekdays(), any::<bool>(), any_date(), 0i32..20).prop_map(
        |(weekdays, ignore, leave_start, leave_len)| {
            let leave =
                ExcludedRange::new("leave", leave_start, leave_start + leave_len, "Verlof", ExclusionKind::Leave)
                    .unwrap();
            WorkDayConfig {
                weekdays,
                ignore_public_holidays: ignore,
                ..WorkDayConfig::default()
            }
            .with_excluded_range(leave)
            .unwrap()
        },
    )
}

proptest! {
    #[test]
    fn work_day_iff_no_reason(region in any_region(), cfg in any_config(), d in any_date()) {
        let s = classify(d, &cfg, &region);
        prop_assert_eq!(s.is_work_day, !s.is_weekend && !s.is_holiday && !s.is_excluded);
        prop_assert_eq!(s.is_weekend, !cfg.weekdays.contains(d.weekday()));
        prop_assert_eq!(s.holiday_name.is_some(), s.is_holiday);
        prop_assert_eq!(s.exclusion_name.is_some(), s.is_excluded);
    }

    #[test]
    fn provider_holiday_rule(region in any_region(), d in any_date()) {
        let cfg = WorkDayConfig::for_provider(&region);
        let s = classify(d, &cfg, &region);
        prop_assert_eq!(s.is_holiday, region.holiday_on(d).is_some());
        let flipped = classify(d, &cfg.with_holiday_toggled(d), &region);
        prop_assert!(!flipped.is_holiday);
    }

    #[test]
    fn calculation_is_idempotent(region in any_region(), cfg in any_config(), start in any_date(), len in 0i32..400) {
        let end = (start + len).to_string();
        let start = start.to_string();
        let a = calculate_working_days(&region, CalculationMode::DateRange, &start, &end, &cfg).unwrap();
        let b = calculate_working_days(&region, CalculationMode::DateRange, &start, &end, &cfg).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn range_counts_agree_with_log(region in any_region(), cfg in any_config(), start in any_date(), len in 0i32..400) {
        let r = calculate_working_days(
            &region,
            CalculationMode::DateRange,
            &start.to_string(),
            &(start + len).to_string(),
            &cfg,
        )
        .unwrap();
        prop_assert_eq!(r.day_log.len(), len as usize + 1);
        prop_assert!(r.day_log.len() >= r.total_working_days as usize);
        let tally = Tally::from_log(&r.day_log);
        prop_assert_eq!(tally.working_days, r.total_working_days);
        prop_assert_eq!(tally.holidays, r.holiday_count);
        prop_assert_eq!(tally.weekend_days, r.weekend_count);
        prop_assert_eq!(tally.excluded_days, r.excluded_count);
        prop_assert!(r.day_log.windows(2).all(|w| w[0].date < w[1].date));
    }

    #[test]
    fn single_day_range(region in any_region(), cfg in any_config(), d in any_date()) {
        let s = d.to_string();
        let r = calculate_working_days(&region, CalculationMode::DateRange, &s, &s, &cfg).unwrap();
        let expected = classify(d, &cfg, &region);
        prop_assert_eq!(r.total_working_days, u32::from(expected.is_work_day));
        prop_assert_eq!(r.day_log, vec![expected]);
    }

    #[test]
    fn day_count_modes_hit_their_target(
        region in any_region(),
        start in any_date(),
        days in 1u32..60,
        forward in any::<bool>(),
    ) {
        let cfg = WorkDayConfig::for_provider(&region);
        let mode = if forward { CalculationMode::AddDays } else { CalculationMode::SubtractDays };
        let r = calculate_working_days(&region, mode, &start.to_string(), &days.to_string(), &cfg).unwrap();
        prop_assert_eq!(r.total_working_days, days);
        prop_assert!(!r.truncated);
        let found = r.result_date().unwrap();
        prop_assert!(classify(found, &cfg, &region).is_work_day);
        if forward {
            prop_assert_eq!(r.day_log.last().map(|s| s.date), Some(found));
            prop_assert_eq!(r.day_log.first().map(|s| s.date), Some(start));
        } else {
            prop_assert_eq!(r.day_log.first().map(|s| s.date), Some(found));
            prop_assert_eq!(r.day_log.last().map(|s| s.date), Some(start));
        }
    }
}

#[test]
fn provider_lists_are_sorted() {
    for region in Region::ALL {
        let holidays = region.public_holidays(2024);
        assert!(holidays.windows(2).all(|w| w[0].date <= w[1].date), "{region}");
    }
}
