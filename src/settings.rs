//! Persisted last-used options.
//!
//! The CLI remembers the allow-set and toggles of the last successful run
//! and offers them as defaults next time. Storage sits behind the
//! [`SettingsStore`] trait so the shell can be tested without touching disk.
//! The filtering pipeline itself never reads or writes settings.
//!
//! The on-disk format is a flat JSON object:
//!
//! ```json
//! {"usernames": "alice bob", "reduce_option": "recent",
//!  "remove_whitespace": false, "exclude_dates": true}
//! ```
//!
//! `reduce_option` accepts the same names as `--reduce`, aliases included.
//! An unknown name loads as `none` with a warning.
//!
//! # Example
//!
//! ```rust
//! use chatcleanse::settings::{MemoryStore, Settings, SettingsStore};
//!
//! let store = MemoryStore::new();
//! assert_eq!(store.load()?, Settings::default());
//!
//! let settings = Settings { usernames: "alice".into(), ..Settings::default() };
//! store.save(&settings)?;
//! assert_eq!(store.load()?.usernames, "alice");
//! # Ok::<(), chatcleanse::ChatcleanseError>(())
//! ```

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer, Serialize};

use crate::config::{PipelineConfig, ReduceMode};
use crate::core::allow::AllowSet;
use crate::core::files::write_output;
use crate::error::{ChatcleanseError, Result};

/// Default settings file name, relative to the working directory.
pub const DEFAULT_SETTINGS_FILE: &str = "settings.json";

/// The remembered options of the last successful run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Whitespace-separated usernames.
    pub usernames: String,

    /// Reducer mode.
    #[serde(deserialize_with = "lenient_reduce_mode")]
    pub reduce_option: ReduceMode,

    /// Whitespace normalization toggle.
    pub remove_whitespace: bool,

    /// Date-stamp stripping toggle.
    pub exclude_dates: bool,
}

fn lenient_reduce_mode<'de, D>(deserializer: D) -> std::result::Result<ReduceMode, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(name) = Option::<String>::deserialize(deserializer)? else {
        return Ok(ReduceMode::None);
    };
    Ok(name.parse().unwrap_or_else(|e: ChatcleanseError| {
        tracing::warn!("{e}; reducing with none");
        ReduceMode::None
    }))
}

impl Settings {
    /// Captures the options of a run.
    pub fn from_run(allow: &AllowSet, config: &PipelineConfig) -> Self {
        Self {
            usernames: allow.to_input_string(),
            reduce_option: config.reduce_mode,
            remove_whitespace: config.strip_whitespace,
            exclude_dates: config.strip_dates,
        }
    }

    /// Parses the remembered usernames.
    ///
    /// # Errors
    ///
    /// Returns [`ChatcleanseError::MissingInput`] if none were saved.
    pub fn allow_set(&self) -> Result<AllowSet> {
        AllowSet::parse(&self.usernames)
    }

    /// Builds a pipeline configuration from the remembered toggles.
    pub fn pipeline_config(&self) -> PipelineConfig {
        PipelineConfig::new()
            .with_reduce_mode(self.reduce_option)
            .with_strip_whitespace(self.remove_whitespace)
            .with_strip_dates(self.exclude_dates)
    }
}

/// Loads and saves [`Settings`].
///
/// `load` is called once before a run, `save` only after the run wrote its
/// output.
pub trait SettingsStore {
    /// Returns the stored settings, or defaults if nothing is stored.
    fn load(&self) -> Result<Settings>;

    /// Replaces the stored settings.
    fn save(&self, settings: &Settings) -> Result<()>;
}

/// Settings kept in a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store backed by `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for JsonFileStore {
    fn default() -> Self {
        Self::new(DEFAULT_SETTINGS_FILE)
    }
}

impl SettingsStore for JsonFileStore {
    fn load(&self) -> Result<Settings> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no settings file, using defaults");
            return Ok(Settings::default());
        }

        let text =
            fs::read_to_string(&self.path).map_err(|e| ChatcleanseError::file_io(&self.path, e))?;
        serde_json::from_str(&text).map_err(|e| ChatcleanseError::settings(&self.path, e))
    }

    fn save(&self, settings: &Settings) -> Result<()> {
        let json = serde_json::to_string_pretty(settings)
            .map_err(|e| ChatcleanseError::settings(&self.path, e))?;
        write_output(&self.path, &json)?;
        tracing::debug!(path = %self.path.display(), "saved settings");
        Ok(())
    }
}

/// Settings kept in memory, for tests and embedding hosts.
#[derive(Debug, Default)]
pub struct MemoryStore {
    stored: RefCell<Option<Settings>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-filled with `settings`.
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            stored: RefCell::new(Some(settings)),
        }
    }

    /// Returns `true` once anything was saved or pre-filled.
    pub fn has_saved(&self) -> bool {
        self.stored.borrow().is_some()
    }
}

impl SettingsStore for MemoryStore {
    fn load(&self) -> Result<Settings> {
        Ok(self.stored.borrow().clone().unwrap_or_default())
    }

    fn save(&self, settings: &Settings) -> Result<()> {
        *self.stored.borrow_mut() = Some(settings.clone());
        Ok(())
    }
}
