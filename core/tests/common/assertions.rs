// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Custom assertion helpers for integration tests.

use std::collections::HashSet;

use mcal_core::Event;

/// Asserts that no two events share an id.
pub fn assert_ids_unique(events: &[Event]) {
    let ids: HashSet<_> = events.iter().map(|e| &e.id).collect();
    assert_eq!(ids.len(), events.len(), "event ids should be unique");
}

/// Asserts that both snapshots hold the same events in the same order.
pub fn assert_same_events(actual: &[Event], expected: &[Event]) {
    assert_eq!(actual.len(), expected.len(), "snapshot lengths differ");
    for (a, e) in actual.iter().zip(expected) {
        assert_eq!(a, e, "event {} differs", e.id);
    }
}
