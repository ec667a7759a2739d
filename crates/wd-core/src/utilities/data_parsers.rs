//! Data parsing helpers.
//!
//! Dates cross the calculation boundary only in the canonical `YYYY-MM-DD`
//! form, and working-day counts as decimal strings. Both parsers are strict:
//! anything else is rejected rather than guessed at.

use crate::errors::{Error, Result};

/// Parse a date string in canonical ISO 8601 form (`YYYY-MM-DD`).
///
/// Returns `(year, month, day)` on success. Only the shape is checked here
/// (four, two, and two ASCII digits separated by `-`, surrounding whitespace
/// ignored); calendar validity is the caller's business.
pub fn parse_iso_date(s: &str) -> Option<(u16, u8, u8)> {
    let s = s.trim();
    let bytes = s.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }
    let digits = |range: std::ops::Range<usize>| {
        let part = &s[range];
        part.bytes()
            .all(|b| b.is_ascii_digit())
            .then_some(part)
    };
    let year: u16 = digits(0..4)?.parse().ok()?;
    let month: u8 = digits(5..7)?.parse().ok()?;
    let day: u8 = digits(8..10)?.parse().ok()?;
    Some((year, month, day))
}

/// Parse a working-day count.
///
/// # Errors
/// Returns [`Error::InvalidDayCount`] if `s` is not a decimal integer or is
/// zero or negative.
pub fn parse_day_count(s: &str) -> Result<u32> {
    let s = s.trim();
    let n: i64 = s
        .parse()
        .map_err(|_| Error::InvalidDayCount(format!("'{s}' is not a whole number")))?;
    if n <= 0 {
        return Err(Error::InvalidDayCount(format!(
            "{n} must be a positive number of working days"
        )));
    }
    u32::try_from(n).map_err(|_| Error::InvalidDayCount(format!("{n} is too large")))
}
