//! Post-processors: whitespace normalization and date-stamp stripping.
//!
//! Both run on the header and the filtered body together, so the header's
//! own line breaks and bracketed lines are affected too.
//!
//! `\s` and trimming follow Unicode `White_Space`; the separator controls
//! `\x1c`..`\x1f` are kept as ordinary characters.

use std::sync::LazyLock;

use regex::Regex;

static BLANK_LINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n").expect("blank-line pattern is valid"));

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

static DATE_STAMP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[.*?\]").expect("date-stamp pattern is valid"));

/// Collapses the joined text into a single line.
///
/// Blank-line runs become one `\n` first, then every whitespace run
/// (newlines included) becomes one space. The result is always a
/// single-element vector.
///
/// ```
/// use chatcleanse::core::cleanup::remove_excess_whitespace;
///
/// let out = remove_excess_whitespace(&["a\n\n\nb   c\n"]);
/// assert_eq!(out, vec!["a b c "]);
/// ```
pub fn remove_excess_whitespace<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    let content: String = lines.iter().map(AsRef::as_ref).collect();
    let content = BLANK_LINES.replace_all(&content, "\n");
    let content = WHITESPACE_RUN.replace_all(&content, " ");
    vec![content.into_owned()]
}

/// Strips a leading `[...]` from one string.
///
/// Matching strings are replaced by everything after their first `]`,
/// trimmed, plus `\n`. Anything else is returned as is.
pub fn strip_date_stamp(line: String) -> String {
    if !DATE_STAMP.is_match(&line) {
        return line;
    }
    let rest = line.split_once(']').map_or("", |(_, rest)| rest).trim();
    format!("{rest}\n")
}

/// Strips leading `[...]` stamps from every string, keeping order.
///
/// ```
/// use chatcleanse::core::cleanup::exclude_date_stamps;
///
/// let out = exclude_date_stamps(vec![
///     "Channel: general\n".to_string(),
///     "[10:00] note\n".to_string(),
/// ]);
/// assert_eq!(out, vec!["Channel: general\n", "note\n"]);
/// ```
pub fn exclude_date_stamps(lines: Vec<String>) -> Vec<String> {
    lines.into_iter().map(strip_date_stamp).collect()
}
