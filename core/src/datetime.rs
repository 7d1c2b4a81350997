// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::TimeOfDay;

/// NOTE: Used for persisting events, so it should be stable across different runs.
pub const STABLE_FORMAT_DATEONLY: &str = "%Y-%m-%d";
pub const STABLE_FORMAT_TIME: &str = "%H:%M";

/// Using a leap second to represent the end of the day
pub const fn end_of_day_naive() -> NaiveTime {
    NaiveTime::from_hms_nano_opt(23, 59, 59, 1_999_999_999)
        .expect("23:59:59:1_999_999_999 must exist in NaiveTime")
}

/// The last instant of the given day.
pub fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    NaiveDateTime::new(date, end_of_day_naive())
}

/// How times of day are displayed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
pub enum TimeFormat {
    /// `09:30`, `14:00`
    #[default]
    #[serde(rename = "24h")]
    H24,

    /// `9:30 AM`, `2:00 PM`
    #[serde(rename = "12h")]
    H12,
}

impl TimeFormat {
    pub fn format(&self, time: TimeOfDay) -> String {
        match self {
            TimeFormat::H24 => time.to_string(),
            TimeFormat::H12 => time.time().format("%-I:%M %p").to_string(),
        }
    }
}

impl fmt::Display for TimeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeFormat::H24 => write!(f, "24h"),
            TimeFormat::H12 => write!(f, "12h"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn end_of_day_is_after_last_second() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        let last_second = date.and_hms_opt(23, 59, 59).unwrap();
        assert!(end_of_day(date) > last_second);
        assert!(end_of_day(date) < date.succ_opt().unwrap().and_hms_opt(0, 0, 0).unwrap());
    }

    #[test]
    fn formats_times_of_day() {
        let morning = TimeOfDay::new(9, 5).unwrap();
        let afternoon = TimeOfDay::new(14, 0).unwrap();
        assert_eq!(TimeFormat::H24.format(morning), "09:05");
        assert_eq!(TimeFormat::H24.format(afternoon), "14:00");
        assert_eq!(TimeFormat::H12.format(morning), "9:05 AM");
        assert_eq!(TimeFormat::H12.format(afternoon), "2:00 PM");
    }
}
