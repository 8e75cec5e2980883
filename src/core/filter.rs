//! Group chat-log lines into message blocks and keep allowed users.
//!
//! A *message-start line* begins with a bracketed stamp, a single space and
//! a username token:
//!
//! ```text
//! [2024-01-15 10:30] alice hello everyone
//! ```
//!
//! Every other line is a *continuation line* and belongs to the block opened
//! by the most recent start line. Blocks of users outside the [`AllowSet`]
//! are never opened, so their continuation lines are dropped as well.
//!
//! # Example
//!
//! ```
//! use chatcleanse::core::allow::AllowSet;
//! use chatcleanse::core::filter::filter_chat;
//!
//! let body = [
//!     "[12:00] alice hello",
//!     "[12:01] bob hi there",
//!     "  continued",
//!     "[12:02] alice bye",
//! ];
//! let allow = AllowSet::parse("alice")?;
//!
//! let blocks = filter_chat(&body, &allow);
//! assert_eq!(blocks, vec!["alice hello\n", "alice bye\n"]);
//! # Ok::<(), chatcleanse::ChatcleanseError>(())
//! ```
//!
//! # Behavior Notes
//!
//! - The block text is everything after the first `]`, trimmed, so it still
//!   starts with the username
//! - Two consecutive start lines of the same user give two blocks
//! - Output order is input order
//! - Trimming strips Unicode `White_Space` only; `\x1c`..`\x1f` stay

use std::sync::LazyLock;

use regex::Regex;

use crate::MessageBlock;
use crate::core::allow::AllowSet;
use crate::progress::{Progress, ProgressCallback};

static MESSAGE_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[.*?\] (\S+)").expect("message-start pattern is valid"));

/// A recognized message-start line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageStart<'a> {
    /// The username token after the stamp.
    pub username: &'a str,
    /// Everything after the first `]`, trimmed.
    pub text: &'a str,
}

/// Classifies `line` as a message-start line.
///
/// Returns `None` for continuation lines.
///
/// ```
/// use chatcleanse::core::filter::parse_message_start;
///
/// let start = parse_message_start("[10:00] alice  hi there \n").unwrap();
/// assert_eq!(start.username, "alice");
/// assert_eq!(start.text, "alice  hi there");
///
/// assert!(parse_message_start("  just text").is_none());
/// assert!(parse_message_start("[10:00]alice no space").is_none());
/// ```
pub fn parse_message_start(line: &str) -> Option<MessageStart<'_>> {
    let caps = MESSAGE_START.captures(line)?;
    let username = caps.get(1)?.as_str();
    let text = line.split_once(']').map_or("", |(_, rest)| rest).trim();
    Some(MessageStart { username, text })
}

/// What the filter did with one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOutcome {
    /// Start line of an allowed user; a new block was opened.
    Opened,
    /// Start line of another user; any open block was closed.
    Skipped,
    /// Continuation line appended to the open block.
    Appended,
    /// Continuation line with no open block.
    Dropped,
}

/// Counters collected while filtering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterStats {
    /// Lines fed to the filter.
    pub lines: usize,
    /// Message-start lines seen, allowed or not.
    pub message_starts: usize,
    /// Blocks kept.
    pub kept_blocks: usize,
    /// Lines discarded (skipped start lines plus dropped continuations).
    pub dropped_lines: usize,
}

/// Line-by-line message filter.
///
/// The filter is either closed (no open block) or open on one block.
/// An allowed start line opens a block, any start line flushes the open
/// one, and continuation lines only ever extend the open block.
///
/// ```
/// use chatcleanse::core::allow::AllowSet;
/// use chatcleanse::core::filter::{LineOutcome, MessageFilter};
///
/// let allow = AllowSet::parse("alice")?;
/// let mut filter = MessageFilter::new(&allow);
///
/// assert_eq!(filter.feed("[1] alice hi"), LineOutcome::Opened);
/// assert_eq!(filter.feed("more"), LineOutcome::Appended);
/// assert_eq!(filter.feed("[2] bob no"), LineOutcome::Skipped);
/// assert_eq!(filter.feed("orphan"), LineOutcome::Dropped);
///
/// let (blocks, stats) = filter.finish();
/// assert_eq!(blocks.len(), 1);
/// assert_eq!(stats.dropped_lines, 2);
/// # Ok::<(), chatcleanse::ChatcleanseError>(())
/// ```
#[derive(Debug)]
pub struct MessageFilter<'a> {
    allow: &'a AllowSet,
    open: Option<MessageBlock>,
    blocks: Vec<MessageBlock>,
    stats: FilterStats,
}

impl<'a> MessageFilter<'a> {
    /// Creates a closed filter for the given allow-set.
    pub fn new(allow: &'a AllowSet) -> Self {
        Self {
            allow,
            open: None,
            blocks: Vec::new(),
            stats: FilterStats::default(),
        }
    }

    /// Processes one body line.
    pub fn feed(&mut self, line: &str) -> LineOutcome {
        self.stats.lines += 1;

        if let Some(start) = parse_message_start(line) {
            self.stats.message_starts += 1;
            self.flush();
            if self.allow.contains(start.username) {
                self.open = Some(MessageBlock::new(start.username, start.text));
                return LineOutcome::Opened;
            }
            self.stats.dropped_lines += 1;
            return LineOutcome::Skipped;
        }

        match self.open.as_mut() {
            Some(block) => {
                block.push_line(line.trim());
                LineOutcome::Appended
            }
            None => {
                self.stats.dropped_lines += 1;
                LineOutcome::Dropped
            }
        }
    }

    /// Returns `true` while a block is open.
    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    fn flush(&mut self) {
        if let Some(block) = self.open.take() {
            self.stats.kept_blocks += 1;
            self.blocks.push(block);
        }
    }

    /// Flushes the open block and returns all kept blocks in input order.
    pub fn finish(mut self) -> (Vec<MessageBlock>, FilterStats) {
        self.flush();
        tracing::debug!(
            lines = self.stats.lines,
            starts = self.stats.message_starts,
            kept = self.stats.kept_blocks,
            dropped = self.stats.dropped_lines,
            "message filter finished"
        );
        (self.blocks, self.stats)
    }
}

/// Runs the filter over `lines`, notifying `progress` once per line.
pub fn parse_blocks<S: AsRef<str>>(
    lines: &[S],
    allow: &AllowSet,
    progress: Option<&ProgressCallback>,
) -> (Vec<MessageBlock>, FilterStats) {
    let total = lines.len();
    let mut filter = MessageFilter::new(allow);

    for (i, line) in lines.iter().enumerate() {
        let outcome = filter.feed(line.as_ref());
        tracing::trace!(line = i + 1, ?outcome);
        if let Some(callback) = progress {
            callback(Progress::new(i + 1, Some(total)));
        }
    }

    filter.finish()
}

/// Filters `lines` and renders each kept block as a `\n`-terminated string.
pub fn filter_chat<S: AsRef<str>>(lines: &[S], allow: &AllowSet) -> Vec<String> {
    let (blocks, _) = parse_blocks(lines, allow, None);
    blocks.iter().map(MessageBlock::render).collect()
}
