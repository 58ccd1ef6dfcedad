//! Front-end configuration loaded from TOML

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::LevelFilter;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Log level name: off, error, warn, info, debug or trace
    pub log_level: String,
    /// Print the display after every key instead of only at the end
    pub trace: bool,
    /// Prefix the expression line with "M" while memory is non-zero
    pub show_memory_indicator: bool,
    /// REPL prompt
    pub prompt: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            trace: false,
            show_memory_indicator: true,
            prompt: "> ".to_string(),
        }
    }
}

impl Config {
    /// `<config dir>/calc/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("calc").join("config.toml"))
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("Failed to parse config file")
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }

    /// Load an explicitly named config file; it must exist
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml(&contents).with_context(|| format!("In {}", path.display()))
    }

    /// Load the explicit path if given, else the default path if it exists,
    /// else the defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }

        match Self::default_path() {
            Some(default) if default.exists() => Self::load(&default),
            _ => Ok(Self::default()),
        }
    }

    pub fn level_filter(&self) -> Result<LevelFilter> {
        self.log_level
            .parse::<LevelFilter>()
            .with_context(|| format!("Invalid log_level {:?}", self.log_level))
    }
}
