//! # Chatcleanse
//!
//! A Rust library for cutting exported chat logs down to the messages of a
//! few users, ready to paste into an LLM context window.
//!
//! ## Overview
//!
//! Chatcleanse reads logs where every message starts with a bracketed stamp
//! and a username:
//!
//! ```text
//! Guild: Rust Community
//! Channel: #help
//!
//! [2024-01-15 10:30] alice does anyone know why this borrow fails?
//!     let x = &mut v;
//! [2024-01-15 10:31] bob try cloning first
//! ```
//!
//! and runs a fixed pipeline over them:
//!
//! 1. the header (everything up to the first blank line) is split off
//! 2. lines are grouped into message blocks and only allowed users are kept
//! 3. optionally, the result is truncated to a character budget
//! 4. optionally, whitespace is collapsed and leading stamps are removed
//!
//! ## Quick Start
//!
//! ```rust
//! use chatcleanse::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let log = "Channel: #help\n\n[10:30] alice question\n  detail\n[10:31] bob answer\n";
//!
//!     let allow = AllowSet::parse("alice")?;
//!     let config = PipelineConfig::new().with_strip_dates(true);
//!
//!     let out = process_text(log, &allow, &config, None)?;
//!     assert_eq!(out.text, "Channel: #help\n\nalice question\ndetail\n");
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`core`] - the pipeline stages and [`process_file`](core::process_file)
//! - [`config`] - [`PipelineConfig`](config::PipelineConfig), [`ReduceMode`](config::ReduceMode)
//! - [`message`] - [`MessageBlock`]
//! - [`progress`] - per-line progress callbacks
//! - [`settings`] - remembered options for the CLI (feature `settings`)
//! - [`cli`] - CLI types (feature `cli`)
//! - [`error`] - Unified error types ([`ChatcleanseError`], [`Result`])
//! - [`prelude`] - Convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod message;
pub mod progress;
#[cfg(feature = "settings")]
pub mod settings;

// Re-export the main types at the crate root for convenience
pub use error::{ChatcleanseError, Result};
pub use message::MessageBlock;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatcleanse::prelude::*;
/// ```
pub mod prelude {
    pub use crate::MessageBlock;

    // Error types
    pub use crate::error::{ChatcleanseError, Result};

    // Configuration
    pub use crate::config::{DEFAULT_CHAR_BUDGET, PipelineConfig, ReduceMode};

    // Pipeline
    pub use crate::core::{
        AllowSet, Processed, ProcessingStats, filter_chat, process_file, process_lines,
        process_text, split_header,
    };

    // Stages
    pub use crate::core::{exclude_date_stamps, reduce, remove_excess_whitespace};

    // Progress
    pub use crate::progress::{Progress, ProgressCallback};

    // Settings
    #[cfg(feature = "settings")]
    pub use crate::settings::{JsonFileStore, Settings, SettingsStore};
}
