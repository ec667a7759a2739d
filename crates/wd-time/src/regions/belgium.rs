//! Belgian holiday calendars.
//!
//! The ten national holidays apply everywhere in Belgium; each region adds
//! the feast day of its community.

use crate::date::Date;
use crate::easter::{easter_offset, ASCENSION, EASTER_MONDAY, WHIT_MONDAY};
use crate::holiday::Holiday;
use crate::provider::{sorted, RegionHolidayProvider};
use wd_core::errors::Result;

/// Names of the national holidays in one language.
struct NationalNames {
    new_year: &'static str,
    easter_monday: &'static str,
    labour_day: &'static str,
    ascension: &'static str,
    whit_monday: &'static str,
    national_day: &'static str,
    assumption: &'static str,
    all_saints: &'static str,
    armistice: &'static str,
    christmas: &'static str,
}

const DUTCH: NationalNames = NationalNames {
    new_year: "Nieuwjaar",
    easter_monday: "Paasmaandag",
    labour_day: "Dag van de Arbeid",
    ascension: "O.L.H. Hemelvaart",
    whit_monday: "Pinkstermaandag",
    national_day: "Nationale Feestdag",
    assumption: "O.L.V. Hemelvaart",
    all_saints: "Allerheiligen",
    armistice: "Wapenstilstand",
    christmas: "Kerstmis",
};

const FRENCH: NationalNames = NationalNames {
    new_year: "Jour de l'An",
    easter_monday: "Lundi de Pâques",
    labour_day: "Fête du Travail",
    ascension: "Ascension",
    whit_monday: "Lundi de Pentecôte",
    national_day: "Fête nationale",
    assumption: "Assomption",
    all_saints: "Toussaint",
    armistice: "Armistice",
    christmas: "Noël",
};

/// National holidays plus one community feast day.
///
/// Years outside the supported date range have no holidays.
fn belgian_holidays(
    year: u16,
    names: &NationalNames,
    community_day: (u8, u8, &str),
) -> Vec<Holiday> {
    build_belgian(year, names, community_day)
        .map(sorted)
        .unwrap_or_default()
}

fn build_belgian(
    year: u16,
    names: &NationalNames,
    (cm, cd, community_name): (u8, u8, &str),
) -> Result<Vec<Holiday>> {
    let fixed = |month, day| Date::from_ymd(year, month, day);
    Ok(vec![
        Holiday::public(fixed(1, 1)?, names.new_year),
        Holiday::public(fixed(5, 1)?, names.labour_day),
        Holiday::regional(fixed(cm, cd)?, community_name),
        Holiday::public(fixed(7, 21)?, names.national_day),
        Holiday::public(fixed(8, 15)?, names.assumption),
        Holiday::public(fixed(11, 1)?, names.all_saints),
        Holiday::public(fixed(11, 11)?, names.armistice),
        Holiday::public(fixed(12, 25)?, names.christmas),
        // Easter based
        Holiday::public(easter_offset(year, EASTER_MONDAY)?, names.easter_monday),
        Holiday::public(easter_offset(year, ASCENSION)?, names.ascension),
        Holiday::public(easter_offset(year, WHIT_MONDAY)?, names.whit_monday),
    ])
}

/// Belgium, Flemish Region.
///
/// National holidays plus the Day of the Flemish Community (Jul 11).
#[derive(Debug, Clone, Copy, Default)]
pub struct BelgiumFlanders;

impl RegionHolidayProvider for BelgiumFlanders {
    fn id(&self) -> &str {
        "BE-VLG"
    }

    fn name(&self) -> &str {
        "België (Vlaanderen)"
    }

    fn description(&self) -> &str {
        "Belgian national holidays plus the Day of the Flemish Community (July 11)."
    }

    fn public_holidays(&self, year: u16) -> Vec<Holiday> {
        belgian_holidays(
            year,
            &DUTCH,
            (7, 11, "Feest van de Vlaamse Gemeenschap"),
        )
    }
}

/// Belgium, Walloon Region.
///
/// National holidays plus the Day of the French Community (Sep 27).
#[derive(Debug, Clone, Copy, Default)]
pub struct BelgiumWallonia;

impl RegionHolidayProvider for BelgiumWallonia {
    fn id(&self) -> &str {
        "BE-WAL"
    }

    fn name(&self) -> &str {
        "Belgique (Wallonie)"
    }

    fn description(&self) -> &str {
        "Belgian national holidays plus the Day of the Wallonia-Brussels Federation (September 27)."
    }

    fn public_holidays(&self, year: u16) -> Vec<Holiday> {
        belgian_holidays(
            year,
            &FRENCH,
            (9, 27, "Fête de la Fédération Wallonie-Bruxelles"),
        )
    }
}

/// Belgium, Brussels-Capital Region.
///
/// National holidays plus Iris Day (May 8).
#[derive(Debug, Clone, Copy, Default)]
pub struct BelgiumBrussels;

impl RegionHolidayProvider for BelgiumBrussels {
    fn id(&self) -> &str {
        "BE-BRU"
    }

    fn name(&self) -> &str {
        "Bruxelles / Brussel"
    }

    fn description(&self) -> &str {
        "Belgian national holidays plus Iris Day, the Brussels-Capital Region feast (May 8)."
    }

    fn public_holidays(&self, year: u16) -> Vec<Holiday> {
        belgian_holidays(year, &FRENCH, (5, 8, "Fête de l'Iris"))
    }
}
