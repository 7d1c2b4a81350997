// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, rc::Rc};

use mcal_core::EventColor;

type Callback = Rc<RefCell<dyn FnMut(&Action)>>;

pub struct Dispatcher {
    subscribers: Vec<Callback>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self {
            subscribers: Vec::new(),
        }
    }

    pub fn register(&mut self, callback: Callback) {
        self.subscribers.push(callback);
    }

    pub fn dispatch(&mut self, action: Action) {
        tracing::trace!(?action, "dispatching");
        for sub in &self.subscribers {
            (sub.borrow_mut())(&action);
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Moves the focused day by a number of days.
    MoveFocus(i64),
    /// Moves the selected month, keeping the focused day within it.
    ShiftMonth(i32),
    GoToday,
    /// Moves the focused chip of the focused day.
    CycleChip(isize),

    UpdateName(String),
    UpdateAllDay(bool),
    UpdateStartTime(String),
    UpdateEndTime(String),
    UpdateColor(EventColor),
    SubmitForm,
    DeleteEvent,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delivers_to_every_subscriber_in_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut dispatcher = Dispatcher::new();
        for i in 0..2 {
            let log = log.clone();
            dispatcher.register(Rc::new(RefCell::new(move |action: &Action| {
                log.borrow_mut().push((i, action.clone()));
            })));
        }

        dispatcher.dispatch(Action::GoToday);
        assert_eq!(
            *log.borrow(),
            vec![(0, Action::GoToday), (1, Action::GoToday)]
        );
    }
}
