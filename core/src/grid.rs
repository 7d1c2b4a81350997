// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Month grid computation.
//!
//! A month is displayed as whole weeks: the grid starts on the first day of the
//! week containing the 1st and ends on the last day of the week containing the
//! last day of the month.

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};

/// The first day of a displayed week.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

impl From<WeekStart> for Weekday {
    fn from(value: WeekStart) -> Self {
        match value {
            WeekStart::Sunday => Weekday::Sun,
            WeekStart::Monday => Weekday::Mon,
        }
    }
}

/// The dates of all cells of the month containing `reference`, in display
/// order. The length is a multiple of 7, except for the first and last
/// representable months, where the grid stops at the end of the date range.
pub fn month_grid(reference: NaiveDate, week_start: Weekday) -> Vec<NaiveDate> {
    let first = start_of_week(first_of_month(reference), week_start);
    let last = end_of_week(last_of_month(reference), week_start);
    first.iter_days().take_while(|d| *d <= last).collect()
}

/// The weekdays of a week in display order.
pub fn weekdays(week_start: Weekday) -> impl Iterator<Item = Weekday> {
    std::iter::successors(Some(week_start), |d| Some(d.succ())).take(7)
}

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.day0()))
}

pub fn last_of_month(date: NaiveDate) -> NaiveDate {
    first_of_month(date)
        .checked_add_months(Months::new(1))
        .and_then(|d| d.pred_opt())
        .unwrap_or(NaiveDate::MAX)
}

pub fn start_of_week(date: NaiveDate, week_start: Weekday) -> NaiveDate {
    let offset = (7 + date.weekday().num_days_from_monday() - week_start.num_days_from_monday()) % 7;
    date.checked_sub_days(Days::new(u64::from(offset)))
        .unwrap_or(NaiveDate::MIN)
}

pub fn end_of_week(date: NaiveDate, week_start: Weekday) -> NaiveDate {
    let offset = 6 - (7 + date.weekday().num_days_from_monday() - week_start.num_days_from_monday()) % 7;
    date.checked_add_days(Days::new(u64::from(offset)))
        .unwrap_or(NaiveDate::MAX)
}

/// Shifts the date by `months`, clamping the day to the length of the target
/// month. Saturates at the representable range.
pub fn add_months(date: NaiveDate, months: i32) -> NaiveDate {
    let shifted = match months {
        0.. => date.checked_add_months(Months::new(months.unsigned_abs())),
        _ => date.checked_sub_months(Months::new(months.unsigned_abs())),
    };
    shifted.unwrap_or(if months < 0 { NaiveDate::MIN } else { NaiveDate::MAX })
}

/// Whether both dates belong to the same month of the same year.
pub fn is_same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}
