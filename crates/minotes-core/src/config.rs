//! Storage configuration.
//!
//! Resolved from built-in defaults, then an optional JSON file, then
//! environment variables. Later sources win.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::util::normalize_text_option;

const CONFIG_FILE_NAME: &str = "config.json";
const APP_DIR_NAME: &str = "minotes";

/// Default storage key, also the stem of the notes file
pub const DEFAULT_STORAGE_KEY: &str = "notes";

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "MINOTES_DATA_DIR";

/// Environment variable overriding the storage key
pub const STORAGE_KEY_ENV: &str = "MINOTES_STORAGE_KEY";

/// Where the note collection is persisted
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    /// Directory holding the notes file; platform default when unset
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
    /// Name of the single slot holding the collection
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            storage_key: default_storage_key(),
        }
    }
}

/// Default location of the optional config file
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Default data directory for the notes file
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
}

impl StorageConfig {
    /// Resolve config from the default file location and the environment
    pub fn load() -> Result<Self> {
        let mut config = match default_config_path() {
            Some(path) => Self::load_from_path(&path)?,
            None => Self::default(),
        };
        config.apply_overrides(
            std::env::var(DATA_DIR_ENV).ok(),
            std::env::var(STORAGE_KEY_ENV).ok(),
        );
        config.validate()?;
        Ok(config)
    }

    /// Read a config file; a missing file yields defaults
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path)?;
        let mut config: Self = serde_json::from_str(&raw).map_err(|e| {
            Error::InvalidInput(format!("failed to parse config at {}: {e}", path.display()))
        })?;
        config.normalize();
        config.validate()?;
        Ok(config)
    }

    /// Apply override values (as read from the environment).
    ///
    /// Blank values are ignored.
    pub fn apply_overrides(&mut self, data_dir: Option<String>, storage_key: Option<String>) {
        if let Some(dir) = normalize_text_option(data_dir) {
            self.data_dir = Some(PathBuf::from(dir));
        }
        if let Some(key) = normalize_text_option(storage_key) {
            self.storage_key = key;
        }
    }

    /// Trim the storage key, falling back to the default when blank
    pub fn normalize(&mut self) {
        self.storage_key = normalize_text_option(Some(std::mem::take(&mut self.storage_key)))
            .unwrap_or_else(default_storage_key);
    }

    /// The storage key must be usable as a plain file stem
    pub fn validate(&self) -> Result<()> {
        let key = self.storage_key.as_str();
        let invalid = key.is_empty()
            || key == "."
            || key == ".."
            || key.contains(['/', '\\'])
            || key.chars().any(char::is_control);
        if invalid {
            return Err(Error::InvalidInput(format!(
                "storage key `{key}` is not a valid file name"
            )));
        }
        Ok(())
    }

    /// Full path of the notes file
    pub fn notes_path(&self, default_dir: &Path) -> PathBuf {
        self.data_dir
            .as_deref()
            .unwrap_or(default_dir)
            .join(format!("{}.json", self.storage_key))
    }
}
