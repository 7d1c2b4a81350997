// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use chrono::NaiveDateTime;
use colored::Color;
use mcal_core::{Event, EventColor, EventTiming, TimeFormat, end_of_day};

use crate::table::{Column, PaddingDirection, Table};
use crate::util::ArgOutputFormat;

#[derive(Debug)]
pub struct EventFormatter {
    columns: Vec<EventColumn>,
    now: NaiveDateTime,
    time_format: TimeFormat,
    format: ArgOutputFormat,
}

impl EventFormatter {
    pub fn new(now: NaiveDateTime, time_format: TimeFormat) -> Self {
        Self {
            columns: vec![EventColumn::Date, EventColumn::Time, EventColumn::Name],
            now,
            time_format,
            format: ArgOutputFormat::Table,
        }
    }

    pub fn with_output_format(mut self, format: ArgOutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn format<'a>(&'a self, events: &'a [&'a Event]) -> Display<'a> {
        Display {
            events,
            formatter: self,
        }
    }
}

#[derive(Debug)]
pub struct Display<'a> {
    events: &'a [&'a Event],
    formatter: &'a EventFormatter,
}

impl fmt::Display for Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.formatter.format {
            ArgOutputFormat::Json => {
                let json = serde_json::to_string_pretty(self.events).map_err(|_| fmt::Error)?;
                writeln!(f, "{json}")
            }
            ArgOutputFormat::Table => {
                let rows: Vec<Row> = self
                    .events
                    .iter()
                    .map(|event| Row {
                        event,
                        now: self.formatter.now,
                        time_format: self.formatter.time_format,
                    })
                    .collect();
                write!(f, "{}", Table::new(&self.formatter.columns, &rows))
            }
        }
    }
}

struct Row<'a> {
    event: &'a Event,
    now: NaiveDateTime,
    time_format: TimeFormat,
}

#[derive(Debug, Clone, Copy)]
enum EventColumn {
    Date,
    Time,
    Name,
}

impl Column<Row<'_>> for EventColumn {
    fn format(&self, row: &Row<'_>) -> String {
        match self {
            EventColumn::Date => row.event.date.format("%a %Y-%m-%d").to_string(),
            EventColumn::Time => match row.event.timing {
                EventTiming::AllDay => "all day".to_string(),
                EventTiming::Timed { start, end } => format!(
                    "{}~{}",
                    row.time_format.format(start),
                    row.time_format.format(end)
                ),
            },
            EventColumn::Name => row.event.name.clone(),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            EventColumn::Time => PaddingDirection::Right,
            _ => PaddingDirection::Left,
        }
    }

    fn get_color(&self, row: &Row<'_>) -> Option<Color> {
        match self {
            EventColumn::Date if end_of_day(row.event.date) < row.now => Some(Color::BrightBlack),
            EventColumn::Name => Some(color_of(row.event.color)),
            _ => None,
        }
    }
}

fn color_of(color: EventColor) -> Color {
    match color {
        EventColor::Red => Color::Red,
        EventColor::Green => Color::Green,
        EventColor::Blue => Color::Blue,
    }
}
