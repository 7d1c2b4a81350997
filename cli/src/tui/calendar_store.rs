// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, collections::HashMap, rc::Rc};

use chrono::{Days, Local, NaiveDate, NaiveDateTime};
use mcal_core::{
    DayState, Event, EventDraft, EventId, EventStore, Overflow, OverflowLayout, Storage,
    StoreError, TimeFormat, WeekStart, add_months, day_events, first_of_month, is_same_month,
    month_grid,
};

use crate::tui::dispatcher::{Action, Dispatcher};

/// Rows taken by the `+N More` indicator.
const INDICATOR_EXTENT: u16 = 1;

/// What `Enter` acts on in the month view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FocusTarget {
    Day(NaiveDate),
    Event(Event),
    More(NaiveDate),
}

/// State of the month view.
pub struct CalendarStore {
    events: EventStore<Box<dyn Storage>>,
    pub selected_month: NaiveDate,
    pub focused_day: NaiveDate,

    /// Position among the visible chips of the focused day, the position
    /// after the last chip being the indicator.
    pub focused_chip: Option<usize>,
    pub now: NaiveDateTime,
    pub week_start: WeekStart,
    pub time_format: TimeFormat,

    /// Shown in the footer until the next key press.
    pub status: Option<String>,
    layouts: HashMap<NaiveDate, OverflowLayout>,
}

impl CalendarStore {
    pub fn new(
        events: EventStore<Box<dyn Storage>>,
        month: NaiveDate,
        now: NaiveDateTime,
        week_start: WeekStart,
        time_format: TimeFormat,
    ) -> Self {
        let selected_month = first_of_month(month);
        let focused_day = match is_same_month(now.date(), selected_month) {
            true => now.date(),
            false => selected_month,
        };

        Self {
            events,
            selected_month,
            focused_day,
            focused_chip: None,
            now,
            week_start,
            time_format,
            status: None,
            layouts: HashMap::new(),
        }
    }

    pub fn register_to(that: Rc<RefCell<Self>>, dispatcher: &mut Dispatcher) {
        let callback = Rc::new(RefCell::new(move |action: &Action| match action {
            Action::MoveFocus(days) => that.borrow_mut().move_focus(*days),
            Action::ShiftMonth(months) => that.borrow_mut().shift_month(*months),
            Action::GoToday => that.borrow_mut().go_today(),
            Action::CycleChip(offset) => that.borrow_mut().cycle_chip(*offset),
            _ => (),
        }));
        dispatcher.register(callback);
    }

    pub fn refresh_now(&mut self) {
        self.set_now(Local::now().naive_local());
    }

    pub fn set_now(&mut self, now: NaiveDateTime) {
        if now.date() != self.now.date() {
            tracing::debug!(today = %now.date(), "day changed");
        }
        self.now = now;
    }

    /// The days of the cells of the selected month.
    pub fn grid(&self) -> Vec<NaiveDate> {
        month_grid(self.selected_month, self.week_start.into())
    }

    #[cfg(test)]
    pub fn events(&self) -> &[Event] {
        self.events.list()
    }

    /// The events of a day, sorted for display.
    pub fn day_events(&self, day: NaiveDate) -> Vec<&Event> {
        day_events(self.events.list(), day)
    }

    pub fn day_state(&self, day: NaiveDate) -> DayState {
        DayState::new(day, self.selected_month, self.now)
    }

    /// Fits the chips of a day into its cell, see [`OverflowLayout::measure`].
    pub fn measure(&mut self, day: NaiveDate, extents: &[u16], available: u16) -> Overflow {
        self.layouts
            .entry(day)
            .or_insert_with(|| OverflowLayout::new(INDICATOR_EXTENT))
            .measure(extents, available)
    }

    /// The last measured split of a day, everything visible if never measured.
    pub fn split(&self, day: NaiveDate) -> Overflow {
        match self.layouts.get(&day) {
            Some(layout) => layout.split(),
            None => Overflow {
                visible: self.day_events(day).len(),
                hidden: 0,
            },
        }
    }

    pub fn focus_target(&self) -> FocusTarget {
        let day = self.focused_day;
        let Some(chip) = self.focused_chip else {
            return FocusTarget::Day(day);
        };

        let split = self.split(day);
        match self.day_events(day).get(chip) {
            Some(event) if chip < split.visible => FocusTarget::Event((*event).clone()),
            _ if split.has_overflow() => FocusTarget::More(day),
            _ => FocusTarget::Day(day),
        }
    }

    pub fn add(&mut self, draft: EventDraft) -> Result<EventId, StoreError> {
        self.events.add(draft)
    }

    pub fn update(&mut self, id: &EventId, draft: EventDraft) -> Result<bool, StoreError> {
        self.events.update(id, draft)
    }

    pub fn delete(&mut self, id: &EventId) -> Result<bool, StoreError> {
        let deleted = self.events.delete(id);
        self.focused_chip = None;
        deleted
    }

    fn move_focus(&mut self, days: i64) {
        let magnitude = Days::new(days.unsigned_abs());
        let target = match days {
            0.. => self.focused_day.checked_add_days(magnitude),
            _ => self.focused_day.checked_sub_days(magnitude),
        };
        if let Some(day) = target {
            self.focus(day);
        }
    }

    fn shift_month(&mut self, months: i32) {
        self.focus(add_months(self.focused_day, months));
    }

    fn go_today(&mut self) {
        self.focus(self.now.date());
    }

    fn focus(&mut self, day: NaiveDate) {
        self.focused_day = day;
        self.focused_chip = None;
        if !is_same_month(day, self.selected_month) {
            self.selected_month = first_of_month(day);
            self.layouts.clear();
            tracing::debug!(month = %self.selected_month, "selected month changed");
        }
    }

    fn cycle_chip(&mut self, offset: isize) {
        let split = self.split(self.focused_day);
        let positions = split.visible + usize::from(split.has_overflow());
        if positions == 0 {
            self.focused_chip = None;
            return;
        }

        // the slot after the last position stands for "no chip"
        let slots = positions as isize + 1;
        let current = self.focused_chip.unwrap_or(positions) as isize;
        let next = (current + offset).rem_euclid(slots) as usize;
        self.focused_chip = (next < positions).then_some(next);
    }
}
