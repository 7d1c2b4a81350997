// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! End-to-end event lifecycle workflow tests.
//!
//! Create, edit and delete events through the store backed by files, the way
//! a session does it.

use mcal_core::{Event, EventStore};

use crate::common::{
    TempStorage, all_day_draft, assert_ids_unique, assert_same_events, date, timed_draft,
};

#[test]
fn event_lifecycle_create_flow() {
    let temp = TempStorage::new();
    let mut store = EventStore::load(temp.storage());
    assert!(store.list().is_empty());

    let mut ids = Vec::new();
    for i in 0..5 {
        let before = store.list().len();
        let id = store
            .add(all_day_draft(&format!("Event {i}"), date(2026, 10, 17)))
            .unwrap();

        assert_eq!(store.list().len(), before + 1);
        assert!(!ids.contains(&id), "id should be fresh");
        ids.push(id);
    }

    assert_ids_unique(store.list());
    assert!(temp.events_file().exists());
}

#[test]
fn event_lifecycle_update_flow() {
    let temp = TempStorage::new();
    let mut store = EventStore::load(temp.storage());
    let first = store.add(all_day_draft("First", date(2026, 10, 1))).unwrap();
    let target = store
        .add(timed_draft("Target", date(2026, 10, 2), "09:00", "10:00"))
        .unwrap();
    let last = store.add(all_day_draft("Last", date(2026, 10, 3))).unwrap();
    let before = store.list().to_vec();

    let replacement = all_day_draft("Replaced", date(2026, 10, 20));
    assert!(store.update(&target, replacement.clone()).unwrap());

    let after = store.list();
    assert_eq!(after[1], Event::new(target.clone(), replacement));
    assert_eq!(after[0], before[0]);
    assert_eq!(after[2], before[2]);
    assert_eq!(after[0].id, first);
    assert_eq!(after[2].id, last);

    // the change reaches the next session
    let reloaded = EventStore::load(temp.storage());
    assert_same_events(reloaded.list(), after);
}

#[test]
fn event_lifecycle_delete_flow() {
    let temp = TempStorage::new();
    let mut store = EventStore::load(temp.storage());
    let keep = store.add(all_day_draft("Keep", date(2026, 10, 1))).unwrap();
    let drop = store
        .add(timed_draft("Drop", date(2026, 10, 1), "12:00", "13:00"))
        .unwrap();

    assert!(store.delete(&drop).unwrap());
    assert!(store.get(&drop).is_none());
    assert!(store.get(&keep).is_some());

    let before = store.list().to_vec();
    assert!(!store.delete(&drop).unwrap());
    assert!(!store.delete(&"never-existed".into()).unwrap());
    assert_same_events(store.list(), &before);

    let reloaded = EventStore::load(temp.storage());
    assert_same_events(reloaded.list(), &before);
}

#[test]
fn event_lifecycle_update_missing_id_leaves_file_untouched() {
    let temp = TempStorage::new();
    let mut store = EventStore::load(temp.storage());
    store.add(all_day_draft("Only", date(2026, 10, 1))).unwrap();
    let on_disk = std::fs::read_to_string(temp.events_file()).unwrap();

    let updated = store
        .update(&"missing".into(), all_day_draft("Ghost", date(2026, 10, 1)))
        .unwrap();

    assert!(!updated);
    assert_eq!(std::fs::read_to_string(temp.events_file()).unwrap(), on_disk);
}
