// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;

use chrono::{Datelike, NaiveDate};
use mcal_core::{DayState, Event, EventColor, EventTiming, FormMode, TimeFormat};
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::symbols::border;
use ratatui::widgets::Block;

use crate::tui::calendar_store::{CalendarStore, FocusTarget};
use crate::tui::component::{Component, Message};
use crate::tui::component_page::instructions;
use crate::tui::dispatcher::{Action, Dispatcher};

type S = CalendarStore;

/// The month grid with its header and footer.
pub struct MonthView;

impl MonthView {
    pub fn new() -> Self {
        Self
    }

    fn render_header(&self, store: &S, area: Rect, buf: &mut Buffer) {
        let [hints, title] =
            Layout::horizontal([Constraint::Length(32), Constraint::Min(0)]).areas(area);
        instructions(&[("Prev", "["), ("Today", "t"), ("Next", "]")]).render(hints, buf);
        Line::from(store.selected_month.format("%B %Y").to_string().bold())
            .centered()
            .render(title, buf);
    }

    fn render_footer(&self, store: &S, area: Rect, buf: &mut Buffer) {
        match &store.status {
            Some(status) => Line::from(status.clone().red()).render(area, buf),
            None => instructions(&[
                ("Move", "<Arrows>"),
                ("New", "a"),
                ("Events", "<Tab>"),
                ("Open", "<Enter>"),
                ("Quit", "q"),
            ])
            .render(area, buf),
        }
    }

    fn render_grid(&self, store: &RefCell<S>, area: Rect, buf: &mut Buffer) {
        let days = store.borrow().grid();
        let weeks = days.len().div_ceil(7) as u32;
        let rows = Layout::vertical((0..weeks).map(|_| Constraint::Ratio(1, weeks))).split(area);

        for (i, (week, row)) in days.chunks(7).zip(rows.iter()).enumerate() {
            let cols = Layout::horizontal([Constraint::Ratio(1, 7); 7]).split(*row);
            for (day, col) in week.iter().zip(cols.iter()) {
                self.render_cell(store, *day, i == 0, *col, buf);
            }
        }
    }

    fn render_cell(
        &self,
        store: &RefCell<S>,
        day: NaiveDate,
        first_week: bool,
        area: Rect,
        buf: &mut Buffer,
    ) {
        let (state, focused, focused_chip, events, time_format) = {
            let store = store.borrow();
            let focused = store.focused_day == day;
            let events: Vec<Event> = store.day_events(day).into_iter().cloned().collect();
            (
                store.day_state(day),
                focused,
                store.focused_chip.filter(|_| focused),
                events,
                store.time_format,
            )
        };

        let block = Block::bordered()
            .border_set(border::PLAIN)
            .border_style(match focused {
                true => Style::new().yellow().bold(),
                false => Style::new().dark_gray(),
            });
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height == 0 {
            return;
        }

        let [number, events_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(inner);
        day_number(day, state, first_week).render(number, buf);

        let chips: Vec<Line> = events.iter().map(|e| chip_line(e, time_format)).collect();
        let extents: Vec<u16> = chips
            .iter()
            .map(|chip| Text::from(chip.clone()).height() as u16)
            .collect();
        let split = store
            .borrow_mut()
            .measure(day, &extents, events_area.height);

        let mut y = events_area.y;
        for (i, (chip, extent)) in chips.into_iter().zip(extents).enumerate() {
            if i >= split.visible {
                break;
            }
            let chip = match focused_chip == Some(i) {
                true => chip.reversed(),
                false => chip,
            };
            chip.render(Rect::new(events_area.x, y, events_area.width, extent), buf);
            y += extent;
        }

        if let Some(label) = split.label() {
            let style = match focused_chip == Some(split.visible) {
                true => Style::new().bold().reversed(),
                false => Style::new().bold(),
            };
            let area = Rect::new(events_area.x, y, events_area.width, 1).intersection(events_area);
            Line::styled(label, style).render(area, buf);
        }
    }
}

impl Component<S> for MonthView {
    fn render(&self, store: &RefCell<S>, area: Rect, buf: &mut Buffer) {
        let [header, grid, footer] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);

        self.render_header(&store.borrow(), header, buf);
        self.render_grid(store, grid, buf);
        self.render_footer(&store.borrow(), footer, buf);
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<S>,
        _area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        use KeyCode::*;
        let action = match event.code {
            Left | Char('h') => Action::MoveFocus(-1),
            Right | Char('l') => Action::MoveFocus(1),
            Up | Char('k') => Action::MoveFocus(-7),
            Down | Char('j') => Action::MoveFocus(7),
            PageUp | Char('[') => Action::ShiftMonth(-1),
            PageDown | Char(']') => Action::ShiftMonth(1),
            Char('t') => Action::GoToday,
            Tab => Action::CycleChip(1),
            BackTab => Action::CycleChip(-1),
            Char('a') | Char('+') => {
                let date = store.borrow().focused_day;
                return Some(Message::OpenForm(FormMode::Create { date }));
            }
            Enter => {
                let target = store.borrow().focus_target();
                return Some(match target {
                    FocusTarget::Day(date) => Message::OpenForm(FormMode::Create { date }),
                    FocusTarget::Event(event) => Message::OpenForm(FormMode::Edit { event }),
                    FocusTarget::More(day) => Message::OpenViewMore(day),
                });
            }
            Char('q') | Esc => return Some(Message::Exit),
            _ => return None,
        };

        dispatcher.dispatch(action);
        Some(Message::Handled)
    }
}

fn day_number(day: NaiveDate, state: DayState, first_week: bool) -> Line<'static> {
    let mut spans = Vec::with_capacity(2);
    if first_week {
        spans.push(Span::styled(
            format!("{} ", day.format("%a")),
            Style::new().dark_gray(),
        ));
    }

    let number = format!("{:>2}", day.day());
    let style = if state.today {
        Style::new().black().on_yellow().bold()
    } else if state.outside_month {
        Style::new().dark_gray()
    } else if state.past {
        Style::new().dim()
    } else {
        Style::new().bold()
    };
    spans.push(Span::styled(number, style));
    Line::from(spans)
}

/// A single-line chip of an event.
pub fn chip_line(event: &Event, time_format: TimeFormat) -> Line<'static> {
    let color = color_of(event.color);
    match event.timing {
        EventTiming::AllDay => Line::from(Span::styled(
            format!(" {} ", event.name),
            Style::new().white().bg(color),
        )),
        EventTiming::Timed { start, .. } => Line::from(vec![
            Span::styled("● ", Style::new().fg(color)),
            Span::styled(format!("{} ", time_format.format(start)), Style::new().dim()),
            Span::raw(event.name.clone()),
        ]),
    }
}

pub fn color_of(color: EventColor) -> Color {
    match color {
        EventColor::Red => Color::Red,
        EventColor::Green => Color::Green,
        EventColor::Blue => Color::Blue,
    }
}
