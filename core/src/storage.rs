// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Durable key-value storage for the event store.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// A synchronous string key-value storage.
pub trait Storage {
    /// Reads the value stored under `key`, `None` if nothing has been stored yet.
    fn get(&self, key: &str) -> io::Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value. The write is
    /// complete when this returns.
    fn set(&mut self, key: &str, value: &str) -> io::Result<()>;
}

impl<T: Storage + ?Sized> Storage for Box<T> {
    fn get(&self, key: &str) -> io::Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        (**self).set(key, value)
    }
}

/// Stores each key as `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// The file backing the given key.
    pub fn path_of(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> io::Result<Option<String>> {
        match fs::read_to_string(self.path_of(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;

        // write then rename, so a crash never leaves a half-written file behind
        let path = self.path_of(key);
        let tmp = self.dir.join(format!(".{key}.json.tmp"));
        if let Err(e) = fs::write(&tmp, value).and_then(|()| fs::rename(&tmp, &path)) {
            if let Err(cleanup) = fs::remove_file(&tmp) {
                tracing::debug!(path = %tmp.display(), err = %cleanup, "temp file not removed");
            }
            return Err(e);
        }
        tracing::debug!(path = %path.display(), bytes = value.len(), "storage entry written");
        Ok(())
    }
}

/// Keeps everything in memory, nothing survives the process.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> io::Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
