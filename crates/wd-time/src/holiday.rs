//! `Holiday` — a named non-working date.

use std::fmt;

use crate::date::Date;

/// Where a holiday comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum HolidayKind {
    /// National public holiday.
    Public,
    /// Holiday of a region or language community only.
    Regional,
    /// Company-wide closing day entered by the user.
    Company,
    /// Any other user-entered holiday.
    Custom,
}

impl fmt::Display for HolidayKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HolidayKind::Public => "public",
            HolidayKind::Regional => "regional",
            HolidayKind::Company => "company",
            HolidayKind::Custom => "custom",
        };
        write!(f, "{name}")
    }
}

/// A holiday on a single date.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Holiday {
    /// The date of the holiday.
    pub date: Date,
    /// Display name.
    pub name: String,
    /// Origin of the holiday.
    pub kind: HolidayKind,
}

impl Holiday {
    /// Create a holiday.
    pub fn new(date: Date, name: impl Into<String>, kind: HolidayKind) -> Self {
        Self {
            date,
            name: name.into(),
            kind,
        }
    }

    /// Create a [`HolidayKind::Public`] holiday.
    pub fn public(date: Date, name: impl Into<String>) -> Self {
        Self::new(date, name, HolidayKind::Public)
    }

    /// Create a [`HolidayKind::Regional`] holiday.
    pub fn regional(date: Date, name: impl Into<String>) -> Self {
        Self::new(date, name, HolidayKind::Regional)
    }
}
