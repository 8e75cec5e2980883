//! Core processing logic for chatcleanse.
//!
//! This module contains:
//! - [`lines`] - Splitting text into newline-terminated lines
//! - [`header`] - Separating the export header from the body
//! - [`allow`] - The set of usernames to keep
//! - [`filter`] - Grouping lines into message blocks and filtering them
//! - [`reduce`] - Character-budget truncation
//! - [`cleanup`] - Whitespace normalization and date-stamp stripping
//! - [`processor`] - The full pipeline and its statistics
//! - [`files`] - Reading logs and writing output
//!
//! # Quick Start
//!
//! ```rust
//! use chatcleanse::core::{AllowSet, PipelineConfig, ReduceMode, process_text};
//!
//! let allow = AllowSet::parse("alice")?;
//! let config = PipelineConfig::new().with_reduce_mode(ReduceMode::Recent);
//! let out = process_text("[1] alice hi\n", &allow, &config, None)?;
//! assert_eq!(out.text, "alice hi\n");
//! # Ok::<(), chatcleanse::ChatcleanseError>(())
//! ```

pub mod allow;
pub mod cleanup;
pub mod files;
pub mod filter;
pub mod header;
pub mod lines;
pub mod processor;
pub mod reduce;

// Re-export main types for convenience
pub use allow::AllowSet;
pub use cleanup::{exclude_date_stamps, remove_excess_whitespace};
pub use filter::{FilterStats, MessageFilter, filter_chat, parse_blocks, parse_message_start};
pub use header::split_header;
pub use lines::split_lines;
pub use processor::{Processed, ProcessingStats, process_file, process_lines, process_text};
pub use reduce::{reduce, truncate_oldest, truncate_recent};

pub use crate::config::{PipelineConfig, ReduceMode};
pub use crate::MessageBlock;
