// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Month view workflow tests: grid, per-day events and their overflow.

use chrono::{Datelike, Weekday};
use mcal_core::{
    DayState, EventStore, MemoryStorage, OverflowLayout, WeekStart, add_months, day_events,
    month_grid,
};

use crate::common::{all_day_draft, date, timed_draft};

#[test]
fn navigating_months_keeps_grids_whole_weeks() {
    let mut month = date(2026, 10, 17);
    for _ in 0..24 {
        let days = month_grid(month, WeekStart::Monday.into());
        assert_eq!(days.len() % 7, 0);
        assert_eq!(days[0].weekday(), Weekday::Mon);
        assert!(days.contains(&month));
        for pair in days.windows(2) {
            assert_eq!(pair[0].succ_opt(), Some(pair[1]));
        }
        month = add_months(month, 1);
    }
}

#[test]
fn busy_day_collapses_into_more_indicator() {
    let mut store = EventStore::load(MemoryStorage::default());
    let day = date(2026, 10, 17);
    for i in 0..10 {
        store
            .add(timed_draft(&format!("Slot {i}"), day, &format!("{:02}:00", 9 + i), "20:00"))
            .unwrap();
    }
    store.add(all_day_draft("Elsewhere", date(2026, 10, 18))).unwrap();

    let events = day_events(store.list(), day);
    assert_eq!(events.len(), 10);

    // one row per chip, room for seven rows, the indicator needs one
    let extents = vec![1; events.len()];
    let mut layout = OverflowLayout::new(1);
    let split = layout.measure(&extents, 7);
    assert_eq!(split.visible, 6);
    assert_eq!(split.label().as_deref(), Some("+4 More"));
    assert_eq!(events[0].name, "Slot 0");

    // the terminal grows
    let split = layout.measure(&extents, 12);
    assert_eq!(split.visible, 10);
    assert_eq!(split.label(), None);
}

#[test]
fn day_states_across_the_grid() {
    let now = date(2026, 10, 17).and_hms_opt(12, 0, 0).unwrap();
    let month = date(2026, 10, 1);
    let days = month_grid(month, Weekday::Sun);

    let states: Vec<_> = days
        .iter()
        .map(|&d| (d, DayState::new(d, month, now)))
        .collect();

    let todays: Vec<_> = states.iter().filter(|(_, s)| s.today).collect();
    assert_eq!(todays.len(), 1);
    assert_eq!(todays[0].0, now.date());

    for (d, s) in &states {
        assert_eq!(s.outside_month, d.month() != 10, "{d}");
        assert_eq!(s.past, *d < now.date(), "{d}");
    }
}
