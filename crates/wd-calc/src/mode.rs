//! `CalculationMode` — what question a calculation answers.

use std::fmt;
use std::str::FromStr;

use wd_core::errors::{Error, Result};

/// The three kinds of calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum CalculationMode {
    /// Count working days between two dates, both inclusive.
    #[default]
    DateRange,
    /// Find the date of the N-th working day on or after the start.
    AddDays,
    /// Find the date of the N-th working day on or before the start.
    SubtractDays,
}

impl CalculationMode {
    /// All modes.
    pub const ALL: [CalculationMode; 3] = [
        CalculationMode::DateRange,
        CalculationMode::AddDays,
        CalculationMode::SubtractDays,
    ];

    /// Canonical name (`date-range`, `add-days`, `subtract-days`).
    pub fn as_str(&self) -> &'static str {
        match self {
            CalculationMode::DateRange => "date-range",
            CalculationMode::AddDays => "add-days",
            CalculationMode::SubtractDays => "subtract-days",
        }
    }

    /// Return `true` for the modes whose target is a working-day count.
    pub fn counts_days(&self) -> bool {
        !matches!(self, CalculationMode::DateRange)
    }
}

impl fmt::Display for CalculationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CalculationMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| Error::UnknownMode(s.to_string()))
    }
}
