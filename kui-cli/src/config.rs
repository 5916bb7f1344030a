//! Configuration file handling: `kui.toml` describes the macros a `kui`
//! invocation should register on top of the built-in terminal layer.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CliError, Result};

/// One authored macro: an input key sequence and the value it expands to.
/// Both fields are passed straight to [`kui_core::MapSet::register`], so
/// `<NAME>` escapes are valid in either.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MacroEntry {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub verbose: bool,
    #[serde(default)]
    pub macros: Vec<MacroEntry>,
}

impl Config {
    /// Loads configuration by searching, in order: the current directory,
    /// `$HOME/.config/kui/kui.toml`, and the platform config directory.
    /// No file found is not an error; it's an empty configuration layered
    /// on top of the built-in terminal mappings.
    pub fn load() -> Result<Config> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Config::default()),
        }
    }

    pub fn load_from_path(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents).map_err(CliError::from)
    }

    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }

    fn check_current_dir_config() -> Option<PathBuf> {
        let candidate = PathBuf::from("kui.toml");
        candidate.is_file().then_some(candidate)
    }

    fn check_home_config() -> Option<PathBuf> {
        let mut candidate = dirs::home_dir()?;
        candidate.push(".config/kui/kui.toml");
        candidate.is_file().then_some(candidate)
    }

    fn check_system_config() -> Option<PathBuf> {
        let mut candidate = dirs::config_dir()?;
        candidate.push("kui/kui.toml");
        candidate.is_file().then_some(candidate)
    }
}
