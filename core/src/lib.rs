// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Core of mcal: the event model, the month grid, the persisted event store
//! and the layout rules of day cells.

mod config;
mod datetime;
mod day;
mod event;
mod form;
mod grid;
mod overflow;
mod storage;
mod store;

pub use crate::config::{APP_NAME, Config, ConfigError, expand_path, get_config_dir};
pub use crate::datetime::{TimeFormat, end_of_day};
pub use crate::day::{DayState, day_events, events_on, sort_day_events};
pub use crate::event::{
    Event, EventColor, EventDraft, EventId, EventRecordError, EventTiming, TimeOfDay,
};
pub use crate::form::{EventFormData, FormError, FormMode};
pub use crate::grid::{
    WeekStart, add_months, end_of_week, first_of_month, is_same_month, last_of_month, month_grid,
    start_of_week, weekdays,
};
pub use crate::overflow::{Overflow, OverflowLayout, fit_count};
pub use crate::storage::{FileStorage, MemoryStorage, Storage};
pub use crate::store::{EVENTS_KEY, EventStore, StoreError};
