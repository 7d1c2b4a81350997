// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Temporary storage directories for integration tests.

use std::path::{Path, PathBuf};

use mcal_core::{EVENTS_KEY, FileStorage};
use tempfile::TempDir;

/// A file storage living in a temporary directory, removed on drop.
#[derive(Debug)]
pub struct TempStorage {
    dir: TempDir,
}

impl TempStorage {
    /// Creates a new empty temporary directory.
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// A fresh handle on the directory, as a new session would open it.
    pub fn storage(&self) -> FileStorage {
        FileStorage::new(self.dir.path())
    }

    /// The file holding the persisted events.
    pub fn events_file(&self) -> PathBuf {
        self.storage().path_of(EVENTS_KEY)
    }

    /// Writes raw content to the events file, bypassing the store.
    pub fn write_events_file(&self, content: &str) {
        std::fs::write(self.events_file(), content).expect("failed to write events file");
    }
}
