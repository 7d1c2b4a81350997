// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use chrono::{Local, NaiveDate};
use clap::{ArgMatches, Command};
use mcal_core::{Config, Event, EventStore, FileStorage, day_events, first_of_month, last_of_month};

use crate::event_formatter::EventFormatter;
use crate::util::{ArgOutputFormat, arg_month, get_month, this_month};

#[derive(Debug, Clone, Copy)]
pub struct CmdList {
    pub month: Option<NaiveDate>,
    pub output_format: ArgOutputFormat,
}

impl CmdList {
    pub const NAME: &str = "list";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("ls")
            .about("List the events of a month")
            .arg(arg_month())
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            month: get_month(matches),
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub async fn run(self, config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing events...");
        let store = EventStore::load(FileStorage::new(config.storage_dir()?));
        let month = self.month.unwrap_or_else(this_month);
        let events = month_events(store.list(), month);

        if events.is_empty() && self.output_format == ArgOutputFormat::Table {
            println!("No events in {}", month.format("%B %Y"));
            return Ok(());
        }

        let formatter = EventFormatter::new(Local::now().naive_local(), config.time_format)
            .with_output_format(self.output_format);
        print!("{}", formatter.format(&events));
        Ok(())
    }
}

/// Events of the month of `month`, by day, each day sorted for display.
fn month_events(events: &[Event], month: NaiveDate) -> Vec<&Event> {
    first_of_month(month)
        .iter_days()
        .take_while(|day| *day <= last_of_month(month))
        .flat_map(|day| day_events(events, day))
        .collect()
}
