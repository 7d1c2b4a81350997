// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Persistence workflow tests: what survives a restart and what does not.

use mcal_core::{EventStore, EventTiming};

use crate::common::{TempStorage, all_day_draft, assert_same_events, date, timed_draft};

#[test]
fn snapshot_round_trips_through_files() {
    let temp = TempStorage::new();
    let mut store = EventStore::load(temp.storage());
    store.add(all_day_draft("Holiday", date(2026, 12, 25))).unwrap();
    store
        .add(timed_draft("Dentist", date(2026, 10, 17), "08:15", "09:00"))
        .unwrap();

    let reloaded = EventStore::load(temp.storage());
    assert_same_events(reloaded.list(), store.list());
    assert_eq!(reloaded.list()[0].date, date(2026, 12, 25));
    assert_eq!(
        reloaded.list()[1].timing.start().map(|t| t.to_string()),
        Some("08:15".to_string())
    );
}

#[test]
fn dates_are_written_as_iso_strings() {
    let temp = TempStorage::new();
    let mut store = EventStore::load(temp.storage());
    store.add(all_day_draft("Holiday", date(2026, 12, 25))).unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(temp.events_file()).unwrap()).unwrap();
    assert_eq!(json[0]["date"], "2026-12-25");
    assert_eq!(json[0]["allDay"], true);
}

#[test]
fn missing_file_starts_empty() {
    let temp = TempStorage::new();
    let store = EventStore::load(temp.storage());
    assert!(store.list().is_empty());
}

#[test]
fn malformed_file_starts_empty_and_is_replaced_on_next_write() {
    let temp = TempStorage::new();
    temp.write_events_file("[{\"id\": \"broken\"");

    let mut store = EventStore::load(temp.storage());
    assert!(store.list().is_empty());

    store.add(all_day_draft("Fresh", date(2026, 10, 17))).unwrap();
    let reloaded = EventStore::load(temp.storage());
    assert_eq!(reloaded.list().len(), 1);
    assert_eq!(reloaded.list()[0].name, "Fresh");
}

#[test]
fn loads_events_written_by_a_browser() {
    let temp = TempStorage::new();
    temp.write_events_file(
        r#"[
            {"id":"1","name":"Party","color":"red","date":"2026-10-17","allDay":true},
            {"id":"2","name":"Gym","color":"green","date":"2026-10-18","allDay":false,"startTime":"18:00","endTime":"19:30"}
        ]"#,
    );

    let store = EventStore::load(temp.storage());
    assert_eq!(store.list().len(), 2);
    assert_eq!(store.list()[0].timing, EventTiming::AllDay);
    assert_eq!(store.list()[1].date, date(2026, 10, 18));
    assert!(!store.list()[1].timing.is_all_day());
}

#[test]
fn unwritable_storage_reports_error_but_keeps_session_state() {
    let temp = TempStorage::new();
    // a directory where the events file should be makes the rename fail
    std::fs::create_dir_all(temp.events_file()).unwrap();

    let mut store = EventStore::load(temp.storage());
    let result = store.add(all_day_draft("Unsaved", date(2026, 10, 17)));

    assert!(result.is_err());
    assert_eq!(store.list().len(), 1);
}
