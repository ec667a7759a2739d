//! `WorkDayConfig` — the user's working-day settings.
//!
//! A configuration is an immutable value. Edits return a new value and leave
//! the original untouched, so a caller can keep the previous configuration
//! around (for undo, or to compare results) at no risk.

use std::collections::{BTreeSet, HashSet};
use std::fmt;

use wd_core::ensure;
use wd_core::errors::{Error, Result};
use wd_time::{Date, Holiday, RegionHolidayProvider, Weekday, WeekdaySet};

/// Why a span of days is excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum ExclusionKind {
    /// Planned leave.
    #[default]
    Leave,
    /// Company shutdown.
    Shutdown,
    /// Sick leave.
    Sick,
}

impl fmt::Display for ExclusionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExclusionKind::Leave => "leave",
            ExclusionKind::Shutdown => "shutdown",
            ExclusionKind::Sick => "sick",
        };
        write!(f, "{name}")
    }
}

/// An inclusive span of dates that are never working days.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExcludedRange {
    /// Identifier, unique within one configuration.
    pub id: String,
    /// First excluded date.
    pub start: Date,
    /// Last excluded date (inclusive).
    pub end: Date,
    /// Label reported for days inside the range.
    pub label: String,
    /// Reason for the exclusion.
    #[cfg_attr(feature = "serde", serde(default))]
    pub kind: ExclusionKind,
}

impl ExcludedRange {
    /// Create a range.
    ///
    /// # Errors
    /// Returns [`Error::InvalidRange`] if `start > end`.
    pub fn new(
        id: impl Into<String>,
        start: Date,
        end: Date,
        label: impl Into<String>,
        kind: ExclusionKind,
    ) -> Result<Self> {
        let range = Self {
            id: id.into(),
            start,
            end,
            label: label.into(),
            kind,
        };
        range.validate()?;
        Ok(range)
    }

    /// Return `true` if `date` lies within `[start, end]`.
    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }

    /// Number of calendar days covered.
    pub fn len_days(&self) -> i32 {
        self.start.days_between(self.end) + 1
    }

    fn validate(&self) -> Result<()> {
        ensure!(
            self.start <= self.end,
            Error::InvalidRange,
            "range '{}' starts on {} after it ends on {}",
            self.id,
            self.start,
            self.end
        );
        Ok(())
    }
}

/// Which days count as working days.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, deny_unknown_fields)
)]
pub struct WorkDayConfig {
    /// Weekdays that are workable.
    pub weekdays: WeekdaySet,
    /// Master switch: when set, no date is a holiday (custom ones included).
    pub ignore_public_holidays: bool,
    /// Provider holidays the user has opted back into being working days.
    pub disabled_holiday_dates: BTreeSet<Date>,
    /// User-entered holidays, never suppressed by `disabled_holiday_dates`.
    pub custom_holidays: Vec<Holiday>,
    /// User-entered excluded spans.
    pub excluded_ranges: Vec<ExcludedRange>,
}

impl Default for WorkDayConfig {
    fn default() -> Self {
        Self {
            weekdays: WeekdaySet::MONDAY_TO_FRIDAY,
            ignore_public_holidays: false,
            disabled_holiday_dates: BTreeSet::new(),
            custom_holidays: Vec::new(),
            excluded_ranges: Vec::new(),
        }
    }
}

impl WorkDayConfig {
    /// A fresh configuration using the provider's default weekdays.
    pub fn for_provider(provider: &dyn RegionHolidayProvider) -> Self {
        Self {
            weekdays: provider.default_weekdays(),
            ..Self::default()
        }
    }

    // ── Lookups ───────────────────────────────────────────────────────────────

    /// The custom holiday on `date`, if any (first entry wins).
    pub fn custom_holiday_on(&self, date: Date) -> Option<&Holiday> {
        self.custom_holidays.iter().find(|h| h.date == date)
    }

    /// The first excluded range containing `date`, if any.
    pub fn excluded_range_on(&self, date: Date) -> Option<&ExcludedRange> {
        self.excluded_ranges.iter().find(|r| r.contains(date))
    }

    /// Return `true` if the provider holiday on `date` has been switched off.
    pub fn is_holiday_disabled(&self, date: Date) -> bool {
        self.disabled_holiday_dates.contains(&date)
    }

    /// Check the configuration's own invariants.
    ///
    /// # Errors
    /// Returns [`Error::InvalidRange`] for a reversed range or a range id that
    /// is used twice.
    pub fn validate(&self) -> Result<()> {
        let mut ids = HashSet::new();
        for range in &self.excluded_ranges {
            range.validate()?;
            ensure!(
                ids.insert(range.id.as_str()),
                Error::InvalidRange,
                "duplicate range id '{}'",
                range.id
            );
        }
        Ok(())
    }

    // ── Edits ─────────────────────────────────────────────────────────────────

    /// Flip `day` in or out of the workable weekdays.
    #[must_use]
    pub fn with_weekday_toggled(&self, day: Weekday) -> Self {
        Self {
            weekdays: self.weekdays.toggled(day),
            ..self.clone()
        }
    }

    /// Turn the master holiday switch on or off.
    #[must_use]
    pub fn with_ignore_public_holidays(&self, ignore: bool) -> Self {
        Self {
            ignore_public_holidays: ignore,
            ..self.clone()
        }
    }

    /// Disable the provider holiday on `date`, or re-enable it if it was
    /// already disabled.
    #[must_use]
    pub fn with_holiday_toggled(&self, date: Date) -> Self {
        let mut next = self.clone();
        if !next.disabled_holiday_dates.remove(&date) {
            next.disabled_holiday_dates.insert(date);
        }
        next
    }

    /// Append a custom holiday.
    #[must_use]
    pub fn with_custom_holiday(&self, holiday: Holiday) -> Self {
        let mut next = self.clone();
        next.custom_holidays.push(holiday);
        next
    }

    /// Drop every custom holiday on `date`.
    #[must_use]
    pub fn without_custom_holiday(&self, date: Date) -> Self {
        let mut next = self.clone();
        next.custom_holidays.retain(|h| h.date != date);
        next
    }

    /// Append an excluded range.
    ///
    /// # Errors
    /// Returns [`Error::InvalidRange`] if the range is reversed or its id is
    /// already taken.
    pub fn with_excluded_range(&self, range: ExcludedRange) -> Result<Self> {
        let mut next = self.clone();
        next.excluded_ranges.push(range);
        next.validate()?;
        Ok(next)
    }

    /// Drop the excluded range with the given id. Unknown ids are ignored.
    #[must_use]
    pub fn without_excluded_range(&self, id: &str) -> Self {
        let mut next = self.clone();
        next.excluded_ranges.retain(|r| r.id != id);
        next
    }
}
