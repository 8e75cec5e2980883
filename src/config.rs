//! Configuration types for the filtering pipeline.
//!
//! This module provides clean configuration structs for library usage,
//! without any CLI framework dependencies.
//!
//! # Example
//!
//! ```rust
//! use chatcleanse::config::{PipelineConfig, ReduceMode};
//!
//! let config = PipelineConfig::new()
//!     .with_reduce_mode(ReduceMode::Recent)
//!     .with_strip_dates(true);
//!
//! assert_eq!(config.char_budget, 16_000);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ChatcleanseError;

/// Default character budget used by the reducer.
pub const DEFAULT_CHAR_BUDGET: usize = 16_000;

/// How the reducer trims the filtered log to the character budget.
///
/// # Example
///
/// ```rust
/// use chatcleanse::config::ReduceMode;
///
/// let mode: ReduceMode = "recent".parse().unwrap();
/// assert_eq!(mode, ReduceMode::Recent);
/// assert_eq!(mode.to_string(), "recent");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReduceMode {
    /// No truncation.
    #[default]
    None,

    /// Keep the last `budget` characters (most recent messages).
    Recent,

    /// Keep the first `budget` characters (oldest messages).
    Oldest,
}

impl ReduceMode {
    /// Returns all accepted mode names.
    pub fn all_names() -> &'static [&'static str] {
        &["none", "recent", "oldest"]
    }

    /// Returns `true` unless this is [`ReduceMode::None`].
    pub fn is_active(self) -> bool {
        self != ReduceMode::None
    }
}

impl std::fmt::Display for ReduceMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReduceMode::None => write!(f, "none"),
            ReduceMode::Recent => write!(f, "recent"),
            ReduceMode::Oldest => write!(f, "oldest"),
        }
    }
}

impl std::str::FromStr for ReduceMode {
    type Err = ChatcleanseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "none" | "" => Ok(ReduceMode::None),
            "recent" | "newest" => Ok(ReduceMode::Recent),
            "oldest" | "first" => Ok(ReduceMode::Oldest),
            _ => Err(ChatcleanseError::invalid_reduce_mode(s)),
        }
    }
}

/// Options for a single filtering run.
///
/// The allow-set is passed separately; this struct only holds the
/// toggles for the reducer and the post-processors.
///
/// # Example
///
/// ```rust
/// use chatcleanse::config::{PipelineConfig, ReduceMode};
///
/// let config = PipelineConfig::new()
///     .with_reduce_mode(ReduceMode::Oldest)
///     .with_char_budget(4_000)
///     .with_strip_whitespace(true);
///
/// assert!(config.strip_whitespace);
/// assert!(!config.strip_dates);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Reducer mode (default: none)
    pub reduce_mode: ReduceMode,

    /// Character budget for the reducer (default: 16,000)
    pub char_budget: usize,

    /// Collapse all whitespace runs to single spaces (default: false)
    pub strip_whitespace: bool,

    /// Remove leading `[...]` stamps (default: false)
    pub strip_dates: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            reduce_mode: ReduceMode::None,
            char_budget: DEFAULT_CHAR_BUDGET,
            strip_whitespace: false,
            strip_dates: false,
        }
    }
}

impl PipelineConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the reducer mode.
    #[must_use]
    pub fn with_reduce_mode(mut self, mode: ReduceMode) -> Self {
        self.reduce_mode = mode;
        self
    }

    /// Sets the reducer character budget.
    #[must_use]
    pub fn with_char_budget(mut self, budget: usize) -> Self {
        self.char_budget = budget;
        self
    }

    /// Enables or disables whitespace normalization.
    #[must_use]
    pub fn with_strip_whitespace(mut self, enabled: bool) -> Self {
        self.strip_whitespace = enabled;
        self
    }

    /// Enables or disables date-stamp stripping.
    #[must_use]
    pub fn with_strip_dates(mut self, enabled: bool) -> Self {
        self.strip_dates = enabled;
        self
    }
}
