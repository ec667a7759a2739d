//! Rendering of calculation results.

use std::fmt::Write;

use anyhow::{Context, Result};
use serde::Serialize;

use wd_calc::{CalculationMode, CalculationResult, DayStatus, HolidayPreview};
use wd_time::{Region, RegionHolidayProvider};

/// A calculation together with the inputs that produced it.
#[derive(Debug, Clone, Serialize)]
pub struct Report<'a> {
    /// Region identifier.
    pub region: &'a str,
    /// Calculation mode.
    pub mode: CalculationMode,
    /// Start date as given.
    pub start: &'a str,
    /// End date or day count as given.
    pub target: &'a str,
    /// The outcome.
    pub result: &'a CalculationResult,
}

impl Report<'_> {
    /// Pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("failed to serialise result")
    }

    /// Plain-text summary, optionally followed by the day log.
    pub fn to_text(&self, with_log: bool) -> String {
        let r = self.result;
        let mut out = String::new();
        let _ = writeln!(out, "Region:        {}", self.region);
        let _ = writeln!(out, "Mode:          {}", self.mode);
        if let Some((first, last)) = r.span() {
            let _ = writeln!(out, "Examined:      {first} .. {last}");
        }
        let _ = writeln!(out, "Working days:  {}", r.total_working_days);
        match self.mode {
            CalculationMode::DateRange => {}
            CalculationMode::AddDays => {
                let _ = writeln!(out, "End date:      {}", date_or_dash(r.end_date));
            }
            CalculationMode::SubtractDays => {
                let _ = writeln!(out, "Start date:    {}", date_or_dash(r.start_date));
            }
        }
        let _ = writeln!(out, "Holidays:      {}", r.holiday_count);
        let _ = writeln!(out, "Weekend days:  {}", r.weekend_count);
        let _ = writeln!(out, "Excluded days: {}", r.excluded_count);
        if r.truncated {
            let _ = writeln!(
                out,
                "Note: stopped after {} days, the result is partial",
                r.days_examined()
            );
        }
        if with_log {
            out.push('\n');
            out.push_str(&day_table(&r.day_log));
        }
        out
    }
}

fn date_or_dash(date: Option<wd_time::Date>) -> String {
    date.map_or_else(|| "-".to_string(), |d| d.to_string())
}

/// One line per examined day: date, weekday, and verdict.
pub fn day_table(log: &[DayStatus]) -> String {
    let mut out = String::new();
    for status in log {
        let marker = if status.is_work_day { '+' } else { ' ' };
        let _ = writeln!(
            out,
            "{marker} {}  {}  {}",
            status.date,
            status.date.weekday().short_name(),
            status.reason()
        );
    }
    out
}

/// Holiday preview, one line per holiday.
pub fn holidays_text(region: &Region, year: u16, preview: &[HolidayPreview]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} ({}), {year}", region.name(), region.id());
    for entry in preview {
        let h = &entry.holiday;
        let state = if entry.enabled { "" } else { "  [off]" };
        let _ = writeln!(
            out,
            "  {}  {}  {:<9} {}{state}",
            h.date,
            h.date.weekday().short_name(),
            h.kind.to_string(),
            h.name
        );
    }
    out
}

/// The supported regions.
pub fn regions_text() -> String {
    let mut out = String::new();
    for region in Region::ALL {
        let _ = writeln!(out, "{:<7} {:<22} {}", region.id(), region.name(), region.description());
    }
    out
}

#[derive(Serialize)]
struct RegionEntry<'a> {
    id: &'a str,
    name: &'a str,
    description: &'a str,
}

/// The supported regions as JSON.
pub fn regions_json() -> Result<String> {
    let entries: Vec<RegionEntry<'_>> = Region::ALL
        .iter()
        .map(|r| RegionEntry {
            id: r.id(),
            name: r.name(),
            description: r.description(),
        })
        .collect();
    serde_json::to_string_pretty(&entries).context("failed to serialise regions")
}
