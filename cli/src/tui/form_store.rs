// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, rc::Rc};

use mcal_core::{EventDraft, EventFormData, FormMode};

use crate::tui::dispatcher::{Action, Dispatcher};

/// What the user asked the form to do with the event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormIntent {
    /// A validated event, to be created or to replace the edited one.
    Submit(EventDraft),

    /// Delete the edited event.
    Delete,
}

/// State of an open event form.
#[derive(Debug)]
pub struct EventFormStore {
    pub mode: FormMode,
    pub data: EventFormData,

    /// Set once the user submitted a valid form or asked for deletion.
    pub intent: Option<FormIntent>,
}

impl EventFormStore {
    pub fn new(mode: FormMode) -> Self {
        let data = EventFormData::new(&mode);
        Self {
            mode,
            data,
            intent: None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self.mode.is_create() {
            true => "New Event",
            false => "Edit Event",
        }
    }

    pub fn register_to(that: Rc<RefCell<Self>>, dispatcher: &mut Dispatcher) {
        let callback = Rc::new(RefCell::new(move |action: &Action| match action {
            Action::UpdateName(v) => that.borrow_mut().data.name = v.clone(),
            Action::UpdateAllDay(v) => that.borrow_mut().data.all_day = *v,
            Action::UpdateStartTime(v) => that.borrow_mut().data.start_time = v.clone(),
            Action::UpdateEndTime(v) => that.borrow_mut().data.end_time = v.clone(),
            Action::UpdateColor(v) => that.borrow_mut().data.color = *v,
            Action::SubmitForm => that.borrow_mut().submit(),
            Action::DeleteEvent => that.borrow_mut().delete(),
            _ => (),
        }));
        dispatcher.register(callback);
    }

    fn submit(&mut self) {
        match self.data.validate(self.mode.date()) {
            Ok(draft) => self.intent = Some(FormIntent::Submit(draft)),
            Err(e) => tracing::debug!(err = %e, "form submission rejected"),
        }
    }

    fn delete(&mut self) {
        if self.mode.can_delete() {
            self.intent = Some(FormIntent::Delete);
        }
    }
}
