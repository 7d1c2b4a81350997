// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! The interactive month view.

use std::error::Error;

use chrono::NaiveDate;
use clap::{ArgMatches, Command, arg};
use mcal_core::{Config, EventStore, FileStorage, MemoryStorage, Storage};

use crate::tui;
use crate::util::{arg_month, get_month, this_month};

#[derive(Debug, Clone, Copy, Default)]
pub struct CmdTui {
    pub month: Option<NaiveDate>,
    pub ephemeral: bool,
}

impl CmdTui {
    pub const NAME: &str = "tui";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Open the month view (default)")
            .arg(arg_month())
            .arg(arg!(--ephemeral "Keep events in memory only, nothing is saved"))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            month: get_month(matches),
            ephemeral: matches.get_flag("ephemeral"),
        }
    }

    pub async fn run(self, config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "opening month view...");
        let storage: Box<dyn Storage> = if self.ephemeral {
            Box::new(MemoryStorage::default())
        } else {
            Box::new(FileStorage::new(config.storage_dir()?))
        };

        let store = EventStore::load(storage);
        tui::run_calendar(store, config, self.month.unwrap_or_else(this_month))
    }
}
