//! The full filtering pipeline.
//!
//! Stages run strictly in this order:
//!
//! 1. split the header from the body
//! 2. filter the body into message blocks of allowed users
//! 3. reduce `header + blocks` to the character budget (optional)
//! 4. normalize whitespace, then strip date stamps (each optional)
//!
//! The header is attached once in front of the blocks before stage 3, so it
//! counts toward the budget and is subject to both post-processors.
//!
//! # Example
//!
//! ```
//! use chatcleanse::config::PipelineConfig;
//! use chatcleanse::core::allow::AllowSet;
//! use chatcleanse::core::processor::process_text;
//!
//! let log = "Guild: Test\n\n[10:00] alice hi\n[10:01] bob yo\n  more\n";
//! let allow = AllowSet::parse("alice")?;
//!
//! let out = process_text(log, &allow, &PipelineConfig::new(), None)?;
//! assert_eq!(out.text, "Guild: Test\n\nalice hi\n");
//! assert_eq!(out.stats.kept_blocks, 1);
//! # Ok::<(), chatcleanse::ChatcleanseError>(())
//! ```

use std::path::Path;

use crate::MessageBlock;
use crate::config::PipelineConfig;
use crate::core::allow::AllowSet;
use crate::core::cleanup::{exclude_date_stamps, remove_excess_whitespace};
use crate::core::files::{read_log, write_output};
use crate::core::filter::parse_blocks;
use crate::core::header::split_header;
use crate::core::lines::split_lines;
use crate::core::reduce::{char_len, joined_char_len, reduce};
use crate::error::{ChatcleanseError, Result};
use crate::progress::ProgressCallback;

/// Statistics about one pipeline run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessingStats {
    /// All input lines, header included.
    pub total_lines: usize,
    /// Header lines (including the blank separator).
    pub header_lines: usize,
    /// Body lines scanned by the filter.
    pub body_lines: usize,
    /// Message-start lines in the body.
    pub message_start_lines: usize,
    /// Blocks kept for allowed users.
    pub kept_blocks: usize,
    /// Body lines discarded by the filter.
    pub dropped_lines: usize,
    /// Characters in the input as given, before line endings are
    /// normalized.
    pub input_chars: usize,
    /// Characters in the output.
    pub output_chars: usize,
    /// Whether the reducer cut anything.
    pub truncated: bool,
}

impl ProcessingStats {
    /// Percentage of input characters removed by the run.
    pub fn reduction_ratio(&self) -> f64 {
        if self.input_chars == 0 {
            return 0.0;
        }
        (1.0 - (self.output_chars as f64 / self.input_chars as f64)) * 100.0
    }
}

/// Result of a pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Processed {
    /// Final output text.
    pub text: String,
    /// Run statistics.
    pub stats: ProcessingStats,
}

/// Runs the pipeline over already-split lines.
///
/// `progress` is called once per body line during filtering.
///
/// # Errors
///
/// Returns [`ChatcleanseError::MissingInput`] if `allow` is empty.
pub fn process_lines<S: AsRef<str>>(
    lines: &[S],
    allow: &AllowSet,
    config: &PipelineConfig,
    progress: Option<&ProgressCallback>,
) -> Result<Processed> {
    if allow.is_empty() {
        return Err(ChatcleanseError::missing_input("usernames"));
    }

    let (header, body) = split_header(lines);
    tracing::debug!(header = header.len(), body = body.len(), "split header");

    let (blocks, filter_stats) = parse_blocks(body, allow, progress);

    let mut content: Vec<String> = header
        .iter()
        .map(|line| line.as_ref().to_owned())
        .chain(blocks.iter().map(MessageBlock::render))
        .collect();

    let mut truncated = false;
    if config.reduce_mode.is_active() {
        truncated = joined_char_len(&content) > config.char_budget;
        content = reduce(content, config.reduce_mode, config.char_budget);
    }
    if config.strip_whitespace {
        content = remove_excess_whitespace(&content);
    }
    if config.strip_dates {
        content = exclude_date_stamps(content);
    }

    let text = content.concat();
    let stats = ProcessingStats {
        total_lines: lines.len(),
        header_lines: header.len(),
        body_lines: body.len(),
        message_start_lines: filter_stats.message_starts,
        kept_blocks: filter_stats.kept_blocks,
        dropped_lines: filter_stats.dropped_lines,
        input_chars: joined_char_len(lines),
        output_chars: char_len(&text),
        truncated,
    };
    tracing::debug!(?stats, "pipeline finished");

    Ok(Processed { text, stats })
}

/// Splits `text` into lines and runs the pipeline.
///
/// `input_chars` counts `text` itself, so each `\r\n` counts as two characters.
pub fn process_text(
    text: &str,
    allow: &AllowSet,
    config: &PipelineConfig,
    progress: Option<&ProgressCallback>,
) -> Result<Processed> {
    let lines = split_lines(text);
    let mut processed = process_lines(&lines, allow, config, progress)?;
    processed.stats.input_chars = char_len(text);
    Ok(processed)
}

/// Reads `input`, runs the pipeline and writes the result to `output`.
///
/// Nothing is written if reading or processing fails.
pub fn process_file(
    input: &Path,
    output: &Path,
    allow: &AllowSet,
    config: &PipelineConfig,
    progress: Option<&ProgressCallback>,
) -> Result<Processed> {
    let text = read_log(input)?;
    let processed = process_text(&text, allow, config, progress)?;
    write_output(output, &processed.text)?;
    Ok(processed)
}
