//! Netherlands holiday calendar.

use crate::date::Date;
use crate::easter::{easter_offset, ASCENSION, EASTER_MONDAY, GOOD_FRIDAY, WHIT_MONDAY};
use crate::holiday::Holiday;
use crate::provider::{sorted, RegionHolidayProvider};
use crate::weekday::Weekday;
use wd_core::errors::Result;

/// Netherlands calendar.
///
/// The following holidays are observed:
/// * New Year's Day (Jan 1)
/// * Good Friday
/// * Easter Monday
/// * King's Day (Apr 27, moved to Apr 26 when the 27th is a Sunday)
/// * Liberation Day (May 5)
/// * Ascension Thursday
/// * Whit Monday
/// * Christmas Day and the second day of Christmas (Dec 25, Dec 26)
#[derive(Debug, Clone, Copy, Default)]
pub struct Netherlands;

impl RegionHolidayProvider for Netherlands {
    fn id(&self) -> &str {
        "NL"
    }

    fn name(&self) -> &str {
        "Nederland"
    }

    fn description(&self) -> &str {
        "Dutch public holidays including King's Day, Liberation Day, and the second days of Easter, Whitsun, and Christmas."
    }

    fn public_holidays(&self, year: u16) -> Vec<Holiday> {
        dutch_holidays(year).map(sorted).unwrap_or_default()
    }
}

fn dutch_holidays(year: u16) -> Result<Vec<Holiday>> {
    let fixed = |month, day| Date::from_ymd(year, month, day);

    let kings_day = match fixed(4, 27)? {
        d if d.weekday() == Weekday::Sunday => fixed(4, 26)?,
        d => d,
    };

    Ok(vec![
        Holiday::public(fixed(1, 1)?, "Nieuwjaarsdag"),
        Holiday::public(kings_day, "Koningsdag"),
        // Official, not a guaranteed day off everywhere
        Holiday::public(fixed(5, 5)?, "Bevrijdingsdag"),
        Holiday::public(fixed(12, 25)?, "Eerste Kerstdag"),
        Holiday::public(fixed(12, 26)?, "Tweede Kerstdag"),
        // Easter based
        Holiday::public(easter_offset(year, GOOD_FRIDAY)?, "Goede Vrijdag"),
        Holiday::public(easter_offset(year, EASTER_MONDAY)?, "Tweede Paasdag"),
        Holiday::public(easter_offset(year, ASCENSION)?, "Hemelvaartsdag"),
        Holiday::public(easter_offset(year, WHIT_MONDAY)?, "Tweede Pinksterdag"),
    ])
}
