//! Concrete region holiday providers and the [`Region`] registry.

use std::fmt;
use std::str::FromStr;

use crate::date::Date;
use crate::holiday::Holiday;
use crate::provider::RegionHolidayProvider;
use crate::weekday::WeekdaySet;
use wd_core::errors::{Error, Result};

/// Belgian regions.
pub mod belgium;

/// The Netherlands.
pub mod netherlands;

pub use belgium::{BelgiumBrussels, BelgiumFlanders, BelgiumWallonia};
pub use netherlands::Netherlands;

/// Every supported region, as one closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Region {
    /// Belgium, Flemish Region (`BE-VLG`).
    #[default]
    BelgiumFlanders,
    /// Belgium, Walloon Region (`BE-WAL`).
    BelgiumWallonia,
    /// Belgium, Brussels-Capital Region (`BE-BRU`).
    BelgiumBrussels,
    /// The Netherlands (`NL`).
    Netherlands,
}

impl Region {
    /// All regions, in display order.
    pub const ALL: [Region; 4] = [
        Region::BelgiumFlanders,
        Region::BelgiumWallonia,
        Region::BelgiumBrussels,
        Region::Netherlands,
    ];

    /// Look a region up by its identifier (case-insensitive).
    pub fn from_id(id: &str) -> Result<Self> {
        let id = id.trim();
        Self::ALL
            .into_iter()
            .find(|r| r.id().eq_ignore_ascii_case(id))
            .ok_or_else(|| Error::UnknownRegion(id.to_string()))
    }

    /// The provider implementing this region.
    pub fn provider(&self) -> &'static dyn RegionHolidayProvider {
        match self {
            Region::BelgiumFlanders => &BelgiumFlanders,
            Region::BelgiumWallonia => &BelgiumWallonia,
            Region::BelgiumBrussels => &BelgiumBrussels,
            Region::Netherlands => &Netherlands,
        }
    }
}

impl RegionHolidayProvider for Region {
    fn id(&self) -> &str {
        self.provider().id()
    }

    fn name(&self) -> &str {
        self.provider().name()
    }

    fn description(&self) -> &str {
        self.provider().description()
    }

    fn default_weekdays(&self) -> WeekdaySet {
        self.provider().default_weekdays()
    }

    fn public_holidays(&self, year: u16) -> Vec<Holiday> {
        self.provider().public_holidays(year)
    }

    fn holiday_on(&self, date: Date) -> Option<Holiday> {
        self.provider().holiday_on(date)
    }
}

impl FromStr for Region {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_id(s)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}
