//! `Weekday` — day-of-week enum, and `WeekdaySet`.
//!
//! Two numberings are in play. The enum discriminant is the ordinal
//! Monday = 1 … Sunday = 7, which makes date arithmetic simple. Working-day
//! configurations instead number days Sunday = 0 … Saturday = 6; that
//! external number is what [`Weekday::number`] returns and what a
//! [`WeekdaySet`] serialises to.

use std::fmt;

use wd_core::errors::{Error, Result};

/// Day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Weekday {
    /// Monday (1).
    Monday = 1,
    /// Tuesday (2).
    Tuesday = 2,
    /// Wednesday (3).
    Wednesday = 3,
    /// Thursday (4).
    Thursday = 4,
    /// Friday (5).
    Friday = 5,
    /// Saturday (6).
    Saturday = 6,
    /// Sunday (7).
    Sunday = 7,
}

impl Weekday {
    /// All weekdays in external order, Sunday first.
    pub const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    /// Construct from the ordinal (1 = Monday … 7 = Sunday).
    ///
    /// Returns `None` if the value is out of range.
    pub fn from_ordinal(n: u8) -> Option<Self> {
        match n {
            1 => Some(Weekday::Monday),
            2 => Some(Weekday::Tuesday),
            3 => Some(Weekday::Wednesday),
            4 => Some(Weekday::Thursday),
            5 => Some(Weekday::Friday),
            6 => Some(Weekday::Saturday),
            7 => Some(Weekday::Sunday),
            _ => None,
        }
    }

    /// Construct from the external number (0 = Sunday … 6 = Saturday).
    pub fn from_number(n: u8) -> Result<Self> {
        match n {
            0 => Ok(Weekday::Sunday),
            1 => Ok(Weekday::Monday),
            2 => Ok(Weekday::Tuesday),
            3 => Ok(Weekday::Wednesday),
            4 => Ok(Weekday::Thursday),
            5 => Ok(Weekday::Friday),
            6 => Ok(Weekday::Saturday),
            _ => Err(Error::Precondition(format!(
                "weekday number {n} out of range [0, 6]"
            ))),
        }
    }

    /// Return the ordinal (1 = Monday … 7 = Sunday).
    pub fn ordinal(&self) -> u8 {
        *self as u8
    }

    /// Return the external number (0 = Sunday … 6 = Saturday).
    pub fn number(&self) -> u8 {
        self.ordinal() % 7
    }

    /// Three-letter English abbreviation.
    pub fn short_name(&self) -> &'static str {
        match self {
            Weekday::Monday => "Mon",
            Weekday::Tuesday => "Tue",
            Weekday::Wednesday => "Wed",
            Weekday::Thursday => "Thu",
            Weekday::Friday => "Fri",
            Weekday::Saturday => "Sat",
            Weekday::Sunday => "Sun",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        };
        write!(f, "{name}")
    }
}

// ── WeekdaySet ────────────────────────────────────────────────────────────────

/// A set of weekdays, stored as a bitmask indexed by external number.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<u8>", into = "Vec<u8>")
)]
pub struct WeekdaySet(u8);

impl WeekdaySet {
    /// The empty set.
    pub const EMPTY: WeekdaySet = WeekdaySet(0);

    /// Monday through Friday.
    pub const MONDAY_TO_FRIDAY: WeekdaySet = WeekdaySet(0b0011_1110);

    /// Every day of the week.
    pub const ALL: WeekdaySet = WeekdaySet(0b0111_1111);

    fn bit(day: Weekday) -> u8 {
        1 << day.number()
    }

    /// Return `true` if `day` is in the set.
    pub fn contains(&self, day: Weekday) -> bool {
        self.0 & Self::bit(day) != 0
    }

    /// Add `day` to the set.
    pub fn insert(&mut self, day: Weekday) {
        self.0 |= Self::bit(day);
    }

    /// Remove `day` from the set.
    pub fn remove(&mut self, day: Weekday) {
        self.0 &= !Self::bit(day);
    }

    /// Return a copy with `day` flipped in or out.
    #[must_use]
    pub fn toggled(self, day: Weekday) -> Self {
        WeekdaySet(self.0 ^ Self::bit(day))
    }

    /// Number of days in the set.
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Return `true` if no day is in the set.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Iterate members in external order (Sunday first).
    pub fn iter(&self) -> impl Iterator<Item = Weekday> {
        let set = *self;
        Weekday::ALL.into_iter().filter(move |d| set.contains(*d))
    }

    /// Build a set from external numbers (0 = Sunday … 6 = Saturday).
    pub fn from_numbers(numbers: &[u8]) -> Result<Self> {
        numbers
            .iter()
            .map(|&n| Weekday::from_number(n))
            .collect()
    }

    /// External numbers of the members, ascending.
    pub fn numbers(&self) -> Vec<u8> {
        self.iter().map(|d| d.number()).collect()
    }
}

impl FromIterator<Weekday> for WeekdaySet {
    fn from_iter<I: IntoIterator<Item = Weekday>>(iter: I) -> Self {
        let mut set = WeekdaySet::EMPTY;
        for day in iter {
            set.insert(day);
        }
        set
    }
}

impl TryFrom<Vec<u8>> for WeekdaySet {
    type Error = Error;

    fn try_from(numbers: Vec<u8>) -> Result<Self> {
        Self::from_numbers(&numbers)
    }
}

impl From<WeekdaySet> for Vec<u8> {
    fn from(set: WeekdaySet) -> Self {
        set.numbers()
    }
}

impl fmt::Debug for WeekdaySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl fmt::Display for WeekdaySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.iter().map(|d| d.short_name()).collect();
        write!(f, "{}", names.join(","))
    }
}
