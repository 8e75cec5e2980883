//! Character-budget truncation.
//!
//! Both reducers join their input into one string and, when it is longer
//! than the budget, cut it to exactly `budget` characters. The cut does not
//! snap to line or word boundaries. Lengths are counted in Unicode scalar
//! values, never bytes, so a cut cannot split a multi-byte character.
//!
//! # Example
//!
//! ```
//! use chatcleanse::core::reduce::{truncate_oldest, truncate_recent};
//!
//! let lines = vec!["hello\n".to_string(), "world\n".to_string()];
//!
//! assert_eq!(truncate_recent(lines.clone(), 6), vec!["world\n"]);
//! assert_eq!(truncate_oldest(lines.clone(), 3), vec!["hel"]);
//!
//! // Within budget: returned unchanged
//! assert_eq!(truncate_recent(lines.clone(), 100), lines);
//! ```

use crate::config::ReduceMode;

/// Number of characters (Unicode scalar values) in `s`.
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Total character count of `lines` once joined.
pub fn joined_char_len<S: AsRef<str>>(lines: &[S]) -> usize {
    lines.iter().map(|line| char_len(line.as_ref())).sum()
}

/// Keeps the last `budget` characters.
///
/// Returns a single-element vector when truncation happens, otherwise the
/// input unchanged.
pub fn truncate_recent(lines: Vec<String>, budget: usize) -> Vec<String> {
    let content = lines.concat();
    let len = char_len(&content);
    if len <= budget {
        return lines;
    }

    let start = content
        .char_indices()
        .nth(len - budget)
        .map_or(content.len(), |(idx, _)| idx);
    tracing::debug!(from = len, to = budget, "truncated to most recent characters");
    vec![content[start..].to_owned()]
}

/// Keeps the first `budget` characters.
///
/// Returns a single-element vector when truncation happens, otherwise the
/// input unchanged.
pub fn truncate_oldest(lines: Vec<String>, budget: usize) -> Vec<String> {
    let content = lines.concat();
    let len = char_len(&content);
    if len <= budget {
        return lines;
    }

    let end = content
        .char_indices()
        .nth(budget)
        .map_or(content.len(), |(idx, _)| idx);
    tracing::debug!(from = len, to = budget, "truncated to oldest characters");
    vec![content[..end].to_owned()]
}

/// Applies the reducer selected by `mode`.
pub fn reduce(lines: Vec<String>, mode: ReduceMode, budget: usize) -> Vec<String> {
    match mode {
        ReduceMode::None => lines,
        ReduceMode::Recent => truncate_recent(lines, budget),
        ReduceMode::Oldest => truncate_oldest(lines, budget),
    }
}
