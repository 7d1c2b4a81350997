// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;

use chrono::NaiveDate;
use mcal_core::FormMode;
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;

use crate::tui::calendar_store::CalendarStore;
use crate::tui::component::{Component, Message};
use crate::tui::component_page::{SinglePage, instructions};
use crate::tui::dispatcher::Dispatcher;
use crate::tui::month_view::chip_line;

type S = CalendarStore;

/// Every event of a day, including those collapsed in its cell.
pub struct ViewMore {
    day: NaiveDate,
    selected: usize,
}

pub fn new_view_more(day: NaiveDate) -> SinglePage<S, ViewMore> {
    let title = day.format("%A, %B %-d, %Y").to_string();
    SinglePage::new(title, ViewMore { day, selected: 0 }).with_instructions(instructions(&[
        ("Prev", "<Up>"),
        ("Next", "<Down>"),
        ("Edit", "<Enter>"),
        ("Close", "<Esc>"),
    ]))
}

impl Component<S> for ViewMore {
    fn render(&self, store: &RefCell<S>, area: Rect, buf: &mut Buffer) {
        let store = store.borrow();
        let events = store.day_events(self.day);
        if events.is_empty() {
            Line::from("No events".dark_gray()).centered().render(area, buf);
            return;
        }

        let lines: Vec<Line> = events
            .iter()
            .enumerate()
            .map(|(i, e)| {
                let line = chip_line(e, store.time_format);
                match i == self.selected {
                    true => line.reversed(),
                    false => line,
                }
            })
            .collect();

        // keep the selection in sight
        let skip = (self.selected + 1).saturating_sub(area.height as usize);
        Text::from(lines.into_iter().skip(skip).collect::<Vec<_>>()).render(area, buf);
    }

    fn on_key(
        &mut self,
        _dispatcher: &mut Dispatcher,
        store: &RefCell<S>,
        _area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        let store = store.borrow();
        let events = store.day_events(self.day);
        match event.code {
            KeyCode::Up | KeyCode::BackTab => {
                self.selected = self.selected.saturating_sub(1);
                Some(Message::Handled)
            }
            KeyCode::Down | KeyCode::Tab => {
                if self.selected + 1 < events.len() {
                    self.selected += 1;
                }
                Some(Message::Handled)
            }
            KeyCode::Enter => match events.get(self.selected) {
                Some(event) => Some(Message::OpenForm(FormMode::Edit {
                    event: (*event).clone(),
                })),
                None => Some(Message::Handled),
            },
            _ => None,
        }
    }
}
