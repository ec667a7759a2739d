//! `DayStatus` — the verdict for one calendar date.

use wd_time::Date;

/// Classification of a single date.
///
/// The three reasons are reported independently: a holiday on a Sunday
/// inside a leave period has all three flags set. Only `is_work_day`
/// collapses them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DayStatus {
    /// The date classified.
    pub date: Date,
    /// The weekday is not one of the configured working weekdays.
    pub is_weekend: bool,
    /// The date is an active holiday.
    pub is_holiday: bool,
    /// Name of the holiday, when `is_holiday`.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub holiday_name: Option<String>,
    /// The date lies in an excluded range.
    pub is_excluded: bool,
    /// Label of the first matching excluded range, when `is_excluded`.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub exclusion_name: Option<String>,
    /// None of the above applies.
    pub is_work_day: bool,
}

impl DayStatus {
    /// Short human-readable reason, or `"work day"`.
    pub fn reason(&self) -> String {
        if self.is_work_day {
            return "work day".to_string();
        }
        let mut reasons = Vec::new();
        if self.is_weekend {
            reasons.push("weekend".to_string());
        }
        if self.is_holiday {
            reasons.push(match &self.holiday_name {
                Some(name) => format!("holiday ({name})"),
                None => "holiday".to_string(),
            });
        }
        if self.is_excluded {
            reasons.push(match &self.exclusion_name {
                Some(label) => format!("excluded ({label})"),
                None => "excluded".to_string(),
            });
        }
        reasons.join(", ")
    }
}
