// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, error::Error, rc::Rc, time::Duration};

use chrono::{Local, NaiveDate, NaiveDateTime};
use mcal_core::{Config, EventStore, FormMode, Storage, StoreError};
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use ratatui::prelude::*;

use crate::tui::calendar_store::CalendarStore;
use crate::tui::component::{Component, Message};
use crate::tui::component_page::SinglePage;
use crate::tui::dispatcher::Dispatcher;
use crate::tui::event_form::EventForm;
use crate::tui::form_store::{EventFormStore, FormIntent};
use crate::tui::modal::{CALENDAR_ID, MODAL_CONTAINER_ID, MountPoints, frame_layout};
use crate::tui::month_view::MonthView;
use crate::tui::view_more::{ViewMore, new_view_more};

/// How long the loop waits for input before redrawing with a fresh clock.
const TICK: Duration = Duration::from_secs(1);

/// Runs the month view until the user quits.
pub fn run_calendar(
    events: EventStore<Box<dyn Storage>>,
    config: &Config,
    month: NaiveDate,
) -> Result<(), Box<dyn Error>> {
    let now = Local::now().naive_local();
    let calendar = CalendarStore::new(events, month, now, config.week_start, config.time_format);
    let mut app = App::new(calendar);

    let mut terminal = ratatui::init();
    let result = app.run(&mut terminal);
    ratatui::restore();
    result
}

struct App {
    calendar: Rc<RefCell<CalendarStore>>,
    dispatcher: Dispatcher,
    month_view: MonthView,
    modal: Option<Modal>,
    points: MountPoints,
}

enum Modal {
    Form(FormModal),
    ViewMore(SinglePage<CalendarStore, ViewMore>),
}

/// An open event form owns its store, which lives as long as the modal.
struct FormModal {
    store: Rc<RefCell<EventFormStore>>,
    dispatcher: Dispatcher,
    view: EventForm,
}

enum Outcome {
    Stay,
    Quit,
    Close,
    OpenForm(FormMode),
    OpenViewMore(NaiveDate),
    Apply(FormMode, FormIntent),
}

impl Outcome {
    fn of(msg: Option<Message>, on_exit: Outcome) -> Self {
        match msg {
            Some(Message::Exit) => on_exit,
            Some(Message::OpenForm(mode)) => Outcome::OpenForm(mode),
            Some(Message::OpenViewMore(day)) => Outcome::OpenViewMore(day),
            _ => Outcome::Stay,
        }
    }
}

impl App {
    fn new(calendar: CalendarStore) -> Self {
        let calendar = Rc::new(RefCell::new(calendar));
        let mut dispatcher = Dispatcher::new();
        CalendarStore::register_to(calendar.clone(), &mut dispatcher);
        Self {
            calendar,
            dispatcher,
            month_view: MonthView::new(),
            modal: None,
            points: MountPoints::default(),
        }
    }

    fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<(), Box<dyn Error>> {
        loop {
            terminal.draw(|frame| self.draw(frame))?;

            if !event::poll(TICK)? {
                self.on_tick(Local::now().naive_local());
                continue;
            }
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    self.calendar.borrow_mut().refresh_now();
                    if self.on_key(key) {
                        break Ok(());
                    }
                }
                // the next draw measures every cell again
                Event::Resize(width, height) => tracing::debug!(width, height, "terminal resized"),
                _ => {}
            }
        }
    }

    fn draw(&mut self, frame: &mut Frame) {
        self.points = frame_layout(frame.area());
        if let Some(cursor) = self.render(&self.points, frame.buffer_mut()) {
            frame.set_cursor_position(cursor);
        }
    }

    /// Renders the calendar, then the open modal on top of it.
    fn render(&self, points: &MountPoints, buf: &mut Buffer) -> Option<(u16, u16)> {
        let area = points.require(CALENDAR_ID);
        self.month_view.render(&self.calendar, area, buf);

        let modal = self.modal.as_ref()?;
        let area = points.require(MODAL_CONTAINER_ID);
        match modal {
            Modal::Form(form) => {
                form.view.render(&form.store, area, buf);
                form.view.get_cursor_position(&form.store, area)
            }
            Modal::ViewMore(page) => {
                page.render(&self.calendar, area, buf);
                None
            }
        }
    }

    /// Moves the clock forward while no key is pressed, so today and past
    /// days stay current.
    fn on_tick(&mut self, now: NaiveDateTime) {
        self.calendar.borrow_mut().set_now(now);
    }

    /// Handles a key press, returns `true` when the user quits.
    fn on_key(&mut self, key: KeyEvent) -> bool {
        self.calendar.borrow_mut().status = None;

        let outcome = match &mut self.modal {
            None => {
                let area = self.points.get(CALENDAR_ID).unwrap_or_default();
                let msg = self
                    .month_view
                    .on_key(&mut self.dispatcher, &self.calendar, area, key);
                Outcome::of(msg, Outcome::Quit)
            }
            Some(Modal::ViewMore(page)) => {
                let area = self.points.get(MODAL_CONTAINER_ID).unwrap_or_default();
                let msg = page.on_key(&mut self.dispatcher, &self.calendar, area, key);
                Outcome::of(msg, Outcome::Close)
            }
            Some(Modal::Form(form)) => {
                let area = self.points.get(MODAL_CONTAINER_ID).unwrap_or_default();
                let msg = form
                    .view
                    .on_key(&mut form.dispatcher, &form.store, area, key);
                let store = form.store.borrow();
                match &store.intent {
                    Some(intent) => Outcome::Apply(store.mode.clone(), intent.clone()),
                    None => Outcome::of(msg, Outcome::Close),
                }
            }
        };

        match outcome {
            Outcome::Quit => return true,
            Outcome::Stay => {}
            Outcome::Close => self.close_modal(),
            Outcome::OpenForm(mode) => self.open_form(mode),
            Outcome::OpenViewMore(day) => {
                self.close_modal();
                self.modal = Some(Modal::ViewMore(new_view_more(day)));
            }
            Outcome::Apply(mode, intent) => {
                self.close_modal();
                self.apply(mode, intent);
            }
        }
        false
    }

    fn open_form(&mut self, mode: FormMode) {
        self.close_modal();
        tracing::debug!(create = mode.is_create(), date = %mode.date(), "opening event form");

        let store = Rc::new(RefCell::new(EventFormStore::new(mode)));
        let mut dispatcher = Dispatcher::new();
        EventFormStore::register_to(store.clone(), &mut dispatcher);
        let mut view = EventForm::new(&store);
        view.activate(&mut dispatcher, &store);
        self.modal = Some(Modal::Form(FormModal {
            store,
            dispatcher,
            view,
        }));
    }

    fn close_modal(&mut self) {
        match self.modal.take() {
            Some(Modal::Form(mut form)) => form.view.deactivate(&mut form.dispatcher, &form.store),
            Some(Modal::ViewMore(mut page)) => page.deactivate(&mut self.dispatcher, &self.calendar),
            None => {}
        }
    }

    fn apply(&mut self, mode: FormMode, intent: FormIntent) {
        let mut calendar = self.calendar.borrow_mut();
        let result: Result<(), StoreError> = match (mode, intent) {
            (FormMode::Create { .. }, FormIntent::Submit(draft)) => calendar.add(draft).map(drop),
            (FormMode::Edit { event }, FormIntent::Submit(draft)) => {
                calendar.update(&event.id, draft).map(drop)
            }
            (FormMode::Edit { event }, FormIntent::Delete) => calendar.delete(&event.id).map(drop),
            (FormMode::Create { .. }, FormIntent::Delete) => Ok(()),
        };

        if let Err(e) = result {
            tracing::error!(err = %e, "failed to persist events");
            calendar.status = Some(format!("Not saved: {e}"));
        }
    }
}
