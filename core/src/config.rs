// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::path::{Path, PathBuf};

use crate::{TimeFormat, WeekStart};

/// The name of the application.
pub const APP_NAME: &str = "mcal";

/// Errors while resolving the configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("User-specific home directory not found")]
    HomeDirNotFound,

    #[error("User-specific config directory not found")]
    ConfigDirNotFound,

    #[error("User-specific state directory not found")]
    StateDirNotFound,

    #[error("Invalid path: {0}")]
    InvalidPath(PathBuf),
}

/// Configuration for the calendar.
#[derive(Debug, Default, Clone, serde::Deserialize)]
pub struct Config {
    /// Directory holding the persisted events.
    #[serde(default)]
    pub storage_dir: Option<PathBuf>,

    /// The first day of displayed weeks.
    #[serde(default)]
    pub week_start: WeekStart,

    /// How event times are displayed.
    #[serde(default)]
    pub time_format: TimeFormat,
}

impl Config {
    /// Normalize the configuration.
    pub fn normalize(&mut self) -> Result<(), ConfigError> {
        self.storage_dir = Some(match &self.storage_dir {
            Some(a) => expand_path(a)?,
            None => get_state_dir()?.join(APP_NAME),
        });
        Ok(())
    }

    /// The storage directory, falling back to the default one if unset.
    pub fn storage_dir(&self) -> Result<PathBuf, ConfigError> {
        match &self.storage_dir {
            Some(a) => Ok(a.clone()),
            None => Ok(get_state_dir()?.join(APP_NAME)),
        }
    }
}

/// Handle tilde (~) and environment variables in the path
pub fn expand_path(path: &Path) -> Result<PathBuf, ConfigError> {
    if path.is_absolute() {
        return Ok(path.to_owned());
    }

    let s = path
        .to_str()
        .ok_or_else(|| ConfigError::InvalidPath(path.to_owned()))?;

    // Handle tilde and home directory
    let home_prefixes: &[&str] = if cfg!(unix) {
        &["~/", "$HOME/", "${HOME}/"]
    } else {
        &[r"~\", "~/", r"%UserProfile%\", r"%UserProfile%/"]
    };
    for prefix in home_prefixes {
        if let Some(stripped) = s.strip_prefix(prefix) {
            return Ok(get_home_dir()?.join(stripped));
        }
    }

    // Handle config directories
    let config_prefixes: &[&str] = if cfg!(unix) {
        &["$XDG_CONFIG_HOME/", "${XDG_CONFIG_HOME}/"]
    } else {
        &[r"%LOCALAPPDATA%\", "%LOCALAPPDATA%/"]
    };
    for prefix in config_prefixes {
        if let Some(stripped) = s.strip_prefix(prefix) {
            return Ok(get_config_dir()?.join(stripped));
        }
    }

    Ok(path.into())
}

fn get_home_dir() -> Result<PathBuf, ConfigError> {
    dirs::home_dir().ok_or(ConfigError::HomeDirNotFound)
}

/// The user-specific config directory.
pub fn get_config_dir() -> Result<PathBuf, ConfigError> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(windows)]
    let config_dir = dirs::config_dir();
    config_dir.ok_or(ConfigError::ConfigDirNotFound)
}

fn get_state_dir() -> Result<PathBuf, ConfigError> {
    #[cfg(unix)]
    let state_dir = xdg::BaseDirectories::new().get_state_home();
    #[cfg(windows)]
    let state_dir = dirs::data_dir();
    state_dir.ok_or(ConfigError::StateDirNotFound)
}
