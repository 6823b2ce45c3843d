//! Layered configuration: built-in defaults, an optional TOML file, then
//! command-line overrides.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use crate::error::{ConfigSource, Result, TodoError};
use crate::fields::FilterMode;

const APP_DIR: &str = "todo-cards";

/// Runtime settings for the UI.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Filter selected when the view opens.
    pub default_filter: FilterMode,
    /// Capture mouse input; required for clicking cards and closing dropdowns by clicking elsewhere.
    pub mouse: bool,
    /// Event poll interval in milliseconds.
    pub tick_rate_ms: u64,
    /// `tracing` filter directive, e.g. `info` or `todo_cards=debug`.
    pub log_level: String,
    /// Log file; defaults to `todo-cards.log` in the platform data directory.
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            default_filter: FilterMode::All,
            mouse: true,
            tick_rate_ms: 50,
            log_level: "warn".to_string(),
            log_file: None,
        }
    }
}

/// Values given on the command line; `None` leaves the file value in place.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub filter: Option<FilterMode>,
    pub no_mouse: bool,
    pub log_file: Option<PathBuf>,
    pub log_level: Option<String>,
}

impl Config {
    /// Load configuration from `explicit`, or from the default location.
    ///
    /// Returns the config and the file it came from, `None` meaning built-in
    /// defaults. A missing default file yields the defaults; a missing
    /// explicit file is an error. Nothing is logged here because loading runs
    /// before the subscriber is installed.
    pub fn load(explicit: Option<&Path>) -> Result<(Self, Option<PathBuf>)> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => match default_config_path() {
                Some(path) if path.exists() => path,
                _ => return Ok((Config::default(), None)),
            },
        };
        let config = Self::from_file(&path)?;
        Ok((config, Some(path)))
    }

    /// Parse a TOML config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let wrap = |source: ConfigSource| TodoError::Config { path: path.to_path_buf(), source };
        let text = fs::read_to_string(path).map_err(|e| wrap(e.into()))?;
        toml::from_str(&text).map_err(|e| wrap(e.into()))
    }

    pub fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        if let Some(filter) = overrides.filter {
            self.default_filter = filter;
        }
        if overrides.no_mouse {
            self.mouse = false;
        }
        if let Some(path) = overrides.log_file {
            self.log_file = Some(path);
        }
        if let Some(level) = overrides.log_level {
            self.log_level = level;
        }
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(1))
    }

    /// Resolved log file location.
    pub fn log_path(&self) -> PathBuf {
        self.log_file.clone().unwrap_or_else(|| {
            dirs::data_local_dir()
                .map(|d| d.join(APP_DIR))
                .unwrap_or_else(|| PathBuf::from("."))
                .join("todo-cards.log")
        })
    }
}

/// `<config_dir>/todo-cards/config.toml`, if the platform has a config directory.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
}
