// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;

use mcal_core::EventColor;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::prelude::*;

use crate::tui::component::{Component, Message};
use crate::tui::component_form::{Access, Checkbox, Form, FormItem, Input, RadioGroup};
use crate::tui::component_form_util::{VisibleIf, VisiblePredicate};
use crate::tui::component_page::{SinglePage, instructions};
use crate::tui::dispatcher::{Action, Dispatcher};
use crate::tui::form_store::EventFormStore;

type S = EventFormStore;

/// Rows the form needs: five items of three rows, the margins and the border.
pub const FORM_HEIGHT: u16 = 5 * 3 + 2 + 2;

/// The create/edit modal of an event.
pub struct EventForm(SinglePage<S, Form<S, Box<dyn FormItem<S>>>>);

impl EventForm {
    pub fn new(store: &RefCell<S>) -> Self {
        let form = Form::new(vec![
            Box::new(Input::<S, NameAccess>::new("Name")) as Box<dyn FormItem<S>>,
            Box::new(Checkbox::<S, AllDayAccess>::new("All day", "All day")),
            Box::new(VisibleIf::<S, _, Timed>::new(Input::<S, StartAccess>::new(
                "Start (HH:MM)",
            ))),
            Box::new(VisibleIf::<S, _, Timed>::new(Input::<S, EndAccess>::new(
                "End (HH:MM)",
            ))),
            Box::new(new_color()),
        ]);

        let (title, can_delete) = {
            let store = store.borrow();
            (store.title(), store.mode.can_delete())
        };
        let mut keys = vec![("Next", "<Tab>"), ("Save", "<Enter>")];
        if can_delete {
            keys.push(("Delete", "<C-d>"));
        }
        keys.push(("Close", "<Esc>"));

        let page = SinglePage::new(title.to_owned(), form).with_instructions(instructions(&keys));
        Self(page)
    }
}

impl Component<S> for EventForm {
    fn render(&self, store: &RefCell<S>, area: Rect, buf: &mut Buffer) {
        self.0.render(store, area, buf);
    }

    fn get_cursor_position(&self, store: &RefCell<S>, area: Rect) -> Option<(u16, u16)> {
        self.0.get_cursor_position(store, area)
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<S>,
        area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        if event.code == KeyCode::Char('d') && event.modifiers.contains(KeyModifiers::CONTROL) {
            dispatcher.dispatch(Action::DeleteEvent);
            return Some(Message::Handled);
        }
        self.0.on_key(dispatcher, store, area, event)
    }

    fn activate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<S>) {
        self.0.activate(dispatcher, store);
    }

    fn deactivate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<S>) {
        self.0.deactivate(dispatcher, store);
    }
}

macro_rules! new_access {
    ($acc: ident, $ty: ty, $field: ident, $action: ident) => {
        struct $acc;

        impl Access<S, $ty> for $acc {
            fn get(store: &RefCell<S>) -> $ty {
                store.borrow().data.$field.clone()
            }

            fn set(dispatcher: &mut Dispatcher, value: $ty) -> bool {
                dispatcher.dispatch(Action::$action(value));
                true
            }
        }
    };
}

new_access!(NameAccess, String, name, UpdateName);
new_access!(AllDayAccess, bool, all_day, UpdateAllDay);
new_access!(StartAccess, String, start_time, UpdateStartTime);
new_access!(EndAccess, String, end_time, UpdateEndTime);
new_access!(ColorAccess, EventColor, color, UpdateColor);

struct Timed;

impl VisiblePredicate<S> for Timed {
    fn is_visible(store: &RefCell<S>) -> bool {
        !store.borrow().data.all_day
    }
}

fn new_color() -> RadioGroup<S, EventColor, ColorAccess> {
    let values = EventColor::PALETTE.to_vec();
    let options = values.iter().map(|c| c.as_str().to_owned()).collect();
    RadioGroup::new("Color", values, options)
}
