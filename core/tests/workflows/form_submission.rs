// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Form submission workflow tests: the form validates, the store persists.

use mcal_core::{EventFormData, EventStore, EventTiming, FormError, FormMode};

use crate::common::{TempStorage, all_day_draft, date};

#[test]
fn create_from_form() {
    let temp = TempStorage::new();
    let mut store = EventStore::load(temp.storage());
    let mode = FormMode::Create {
        date: date(2026, 10, 17),
    };

    let mut data = EventFormData::new(&mode);
    data.name = "Standup".to_string();
    data.start_time = "09:00".to_string();
    data.end_time = "09:15".to_string();

    let draft = data.validate(mode.date()).unwrap();
    let id = store.add(draft).unwrap();

    let event = store.get(&id).unwrap();
    assert_eq!(event.date, date(2026, 10, 17));
    assert!(!event.timing.is_all_day());
}

#[test]
fn invalid_form_leaves_store_unchanged() {
    let temp = TempStorage::new();
    let mut store = EventStore::load(temp.storage());
    store.add(all_day_draft("Existing", date(2026, 10, 1))).unwrap();
    let before = store.list().to_vec();

    let mode = FormMode::Create {
        date: date(2026, 10, 17),
    };
    let data = EventFormData {
        all_day: true,
        ..EventFormData::new(&mode)
    };

    let result = data.validate(mode.date());
    assert_eq!(result, Err(FormError::EmptyName));
    // nothing is handed to the store, and nothing changes
    assert_eq!(store.list(), before.as_slice());
}

#[test]
fn edit_turns_timed_event_into_all_day() {
    let temp = TempStorage::new();
    let mut store = EventStore::load(temp.storage());
    let id = store
        .add(crate::common::timed_draft(
            "Trip",
            date(2026, 10, 20),
            "08:00",
            "18:00",
        ))
        .unwrap();

    let mode = FormMode::Edit {
        event: store.get(&id).unwrap().clone(),
    };
    let mut data = EventFormData::new(&mode);
    data.all_day = true;

    let draft = data.validate(mode.date()).unwrap();
    assert!(store.update(&id, draft).unwrap());

    let reloaded = EventStore::load(temp.storage());
    let event = reloaded.get(&id).unwrap();
    assert_eq!(event.timing, EventTiming::AllDay);
    assert_eq!(event.timing.start(), None);
    assert_eq!(event.date, date(2026, 10, 20));
}

#[test]
fn delete_from_edit_mode() {
    let temp = TempStorage::new();
    let mut store = EventStore::load(temp.storage());
    let id = store.add(all_day_draft("Cancelled", date(2026, 10, 5))).unwrap();

    let mode = FormMode::Edit {
        event: store.get(&id).unwrap().clone(),
    };
    assert!(mode.can_delete());
    assert!(!FormMode::Create { date: date(2026, 10, 5) }.can_delete());

    if let FormMode::Edit { event } = &mode {
        assert!(store.delete(&event.id).unwrap());
    }
    assert!(EventStore::load(temp.storage()).list().is_empty());
}
