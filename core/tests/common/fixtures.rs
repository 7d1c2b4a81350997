// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Test data factories for integration tests.

use chrono::NaiveDate;
use mcal_core::{EventColor, EventDraft, EventTiming, TimeOfDay};

/// Shorthand for a calendar day.
#[must_use]
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
}

/// Creates an all-day draft with the given name.
#[must_use]
pub fn all_day_draft(name: &str, date: NaiveDate) -> EventDraft {
    EventDraft {
        name: name.to_string(),
        color: EventColor::Green,
        date,
        timing: EventTiming::AllDay,
    }
}

/// Creates a timed draft from `HH:MM` strings.
///
/// # Example
///
/// ```ignore
/// let draft = timed_draft("Standup", date(2026, 10, 17), "09:00", "09:15");
/// ```
#[must_use]
pub fn timed_draft(name: &str, date: NaiveDate, start: &str, end: &str) -> EventDraft {
    EventDraft {
        name: name.to_string(),
        color: EventColor::Blue,
        date,
        timing: EventTiming::Timed {
            start: start.parse::<TimeOfDay>().expect("valid start time"),
            end: end.parse::<TimeOfDay>().expect("valid end time"),
        },
    }
}
