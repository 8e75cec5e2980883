//! One logical chat message, possibly spanning several lines.
//!
//! A [`MessageBlock`] is opened by a message-start line such as
//! `[2024-01-15 10:30] alice hello` and collects every continuation line
//! that follows until the next message-start line.
//!
//! # Examples
//!
//! ```
//! use chatcleanse::MessageBlock;
//!
//! let mut block = MessageBlock::new("alice", "alice hello");
//! block.push_line("second line");
//!
//! assert_eq!(block.username(), "alice");
//! assert_eq!(block.render(), "alice hello\nsecond line\n");
//! ```

use serde::{Deserialize, Serialize};

/// A message block attributed to exactly one username.
///
/// The username is fixed at creation. Fragments are kept in encounter
/// order; the first fragment is the start line's text after the closing
/// `]` of its timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageBlock {
    username: String,
    fragments: Vec<String>,
}

impl MessageBlock {
    /// Opens a block with the start line's message text.
    pub fn new(username: impl Into<String>, first: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            fragments: vec![first.into()],
        }
    }

    /// Returns the username that owns this block.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the text fragments, one per source line.
    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }

    /// Appends a continuation line.
    pub fn push_line(&mut self, line: impl Into<String>) {
        self.fragments.push(line.into());
    }

    /// Number of source lines in this block.
    pub fn line_count(&self) -> usize {
        self.fragments.len()
    }

    /// Joins the fragments with `\n` and terminates with `\n`.
    pub fn render(&self) -> String {
        let mut out = self.fragments.join("\n");
        out.push('\n');
        out
    }
}

impl std::fmt::Display for MessageBlock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}
