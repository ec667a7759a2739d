//! Easter computus.
//!
//! Every movable Benelux holiday sits at a fixed offset from Easter Sunday.

use crate::date::Date;
use wd_core::errors::Result;

/// Good Friday, relative to Easter Sunday.
pub const GOOD_FRIDAY: i32 = -2;

/// Easter Monday, relative to Easter Sunday.
pub const EASTER_MONDAY: i32 = 1;

/// Ascension Thursday, relative to Easter Sunday.
pub const ASCENSION: i32 = 39;

/// Whit Monday, relative to Easter Sunday.
pub const WHIT_MONDAY: i32 = 50;

/// Return `(month, day)` of Easter Sunday in the Gregorian calendar.
///
/// Oudin's algorithm: golden number `g`, century `c`, the epact-like
/// correction `h` (with the lunar and solar century corrections folded in),
/// then the weekday adjustment `j`.
pub fn easter_sunday_month_day(year: u16) -> (u8, u8) {
    let y = year as i32;
    let g = y % 19;
    let c = y / 100;
    let h = (c - c / 4 - (8 * c + 13) / 25 + 19 * g + 15) % 30;
    let i = h - (h / 28) * (1 - (h / 28) * (29 / (h + 1)) * ((21 - g) / 11));
    let j = (y + y / 4 + i + 2 - c + c / 4) % 7;
    let p = i - j;
    let day = 1 + (p + 27 + (p + 6) / 40) % 31;
    let month = 3 + (p + 26) / 30;
    (month as u8, day as u8)
}

/// Return the date of Easter Sunday in `year`.
///
/// # Errors
/// Fails only when `year` is outside the supported date range.
pub fn easter_sunday(year: u16) -> Result<Date> {
    let (month, day) = easter_sunday_month_day(year);
    Date::from_ymd(year, month, day)
}

/// Return the date `offset` days after Easter Sunday in `year`.
pub fn easter_offset(year: u16, offset: i32) -> Result<Date> {
    easter_sunday(year)?.add_days(offset)
}
