// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::cmp::Ordering;

use chrono::{NaiveDate, NaiveDateTime};

use crate::datetime::end_of_day;
use crate::grid::is_same_month;
use crate::{Event, EventTiming};

/// Events scheduled on the given day, in input order.
pub fn events_on(events: &[Event], day: NaiveDate) -> Vec<&Event> {
    events.iter().filter(|e| e.date == day).collect()
}

/// Sorts the events of a day for display: all-day events first, then timed
/// events by start time. The sort is stable, so all-day events, and timed
/// events starting at the same time, keep their input order.
pub fn sort_day_events(events: &mut [&Event]) {
    events.sort_by(|a, b| compare_timing(&a.timing, &b.timing));
}

/// The events of a day, filtered and sorted for display.
pub fn day_events(events: &[Event], day: NaiveDate) -> Vec<&Event> {
    let mut events = events_on(events, day);
    sort_day_events(&mut events);
    events
}

fn compare_timing(a: &EventTiming, b: &EventTiming) -> Ordering {
    match (a, b) {
        (EventTiming::AllDay, EventTiming::AllDay) => Ordering::Equal,
        (EventTiming::AllDay, EventTiming::Timed { .. }) => Ordering::Less,
        (EventTiming::Timed { .. }, EventTiming::AllDay) => Ordering::Greater,
        (EventTiming::Timed { start: a, .. }, EventTiming::Timed { start: b, .. }) => a.cmp(b),
    }
}

/// The distinctions a day cell tracks besides its events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayState {
    /// The day belongs to an adjacent month.
    pub outside_month: bool,

    /// The whole day lies before now.
    pub past: bool,

    /// The day is today.
    pub today: bool,
}

impl DayState {
    pub fn new(day: NaiveDate, selected_month: NaiveDate, now: NaiveDateTime) -> Self {
        Self {
            outside_month: !is_same_month(day, selected_month),
            past: end_of_day(day) < now,
            today: day == now.date(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EventColor, TimeOfDay};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn event(id: &str, day: NaiveDate, start: Option<&str>) -> Event {
        let timing = match start {
            Some(s) => EventTiming::Timed {
                start: s.parse().unwrap(),
                end: TimeOfDay::new(23, 0).unwrap(),
            },
            None => EventTiming::AllDay,
        };
        Event {
            id: id.into(),
            name: id.to_string(),
            color: EventColor::default(),
            date: day,
            timing,
        }
    }

    fn ids(events: &[&Event]) -> Vec<String> {
        events.iter().map(|e| e.id.to_string()).collect()
    }

    #[test]
    fn sorts_all_day_first_then_by_start_time() {
        let day = date(2026, 10, 17);
        let all = event("all", day, None);
        let nine = event("nine", day, Some("09:00"));
        let eight = event("eight", day, Some("08:00"));

        let permutations = [
            [&all, &nine, &eight],
            [&all, &eight, &nine],
            [&nine, &all, &eight],
            [&nine, &eight, &all],
            [&eight, &all, &nine],
            [&eight, &nine, &all],
        ];
        for mut input in permutations {
            sort_day_events(&mut input);
            assert_eq!(ids(&input), ["all", "eight", "nine"]);
        }
    }

    #[test]
    fn minutes_order_within_an_hour() {
        let day = date(2026, 10, 17);
        let a = event("a", day, Some("10:15"));
        let b = event("b", day, Some("09:30"));
        let c = event("c", day, Some("09:05"));

        let mut events = vec![&a, &b, &c];
        sort_day_events(&mut events);
        assert_eq!(ids(&events), ["c", "b", "a"]);
    }

    #[test]
    fn all_day_events_keep_input_order() {
        let day = date(2026, 10, 17);
        let x = event("x", day, None);
        let y = event("y", day, None);
        let z = event("z", day, Some("07:00"));

        let mut events = vec![&z, &y, &x];
        sort_day_events(&mut events);
        assert_eq!(ids(&events), ["y", "x", "z"]);
    }

    #[test]
    fn filters_by_day() {
        let events = vec![
            event("a", date(2026, 10, 17), Some("12:00")),
            event("b", date(2026, 10, 18), None),
            event("c", date(2026, 10, 17), None),
        ];

        assert_eq!(ids(&day_events(&events, date(2026, 10, 17))), ["c", "a"]);
        assert!(day_events(&events, date(2026, 10, 19)).is_empty());
    }

    #[test]
    fn computes_day_state() {
        let now = date(2026, 10, 17).and_hms_opt(10, 0, 0).unwrap();
        let month = date(2026, 10, 1);

        let today = DayState::new(date(2026, 10, 17), month, now);
        assert_eq!(
            today,
            DayState {
                outside_month: false,
                past: false,
                today: true
            }
        );

        let yesterday = DayState::new(date(2026, 10, 16), month, now);
        assert!(yesterday.past);
        assert!(!yesterday.today);

        let leading = DayState::new(date(2026, 9, 30), month, now);
        assert!(leading.outside_month);
        assert!(leading.past);

        let trailing = DayState::new(date(2026, 11, 1), month, now);
        assert!(trailing.outside_month);
        assert!(!trailing.past);
    }

    #[test]
    fn day_is_not_past_until_its_end() {
        let day = date(2026, 10, 17);
        let late = day.and_hms_opt(23, 59, 59).unwrap();
        assert!(!DayState::new(day, day, late).past);

        let next_morning = date(2026, 10, 18).and_hms_opt(0, 0, 0).unwrap();
        assert!(DayState::new(day, day, next_morning).past);
    }
}
