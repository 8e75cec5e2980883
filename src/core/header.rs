//! Separates the export's metadata header from the message body.
//!
//! The header is everything up to and including the first blank line
//! (a line that is empty after trimming). It is opaque to the filter and
//! re-attached in front of the filtered body.
//!
//! "Whitespace" here is Unicode `White_Space`, as used by [`str::trim`].
//! The ASCII separator controls `\x1c`..`\x1f` are not whitespace, so a
//! line holding only one of them is not blank.

/// Splits `lines` at the first blank line.
///
/// Returns `(header, body)`. The blank line belongs to the header. When the
/// input has no blank line the header is empty and the body is the whole
/// input.
///
/// # Example
///
/// ```rust
/// use chatcleanse::core::header::split_header;
///
/// let lines = ["Guild: Test\n", "Channel: general\n", "\n", "[10:00] alice hi\n"];
/// let (header, body) = split_header(&lines);
///
/// assert_eq!(header.len(), 3);
/// assert_eq!(body, &["[10:00] alice hi\n"]);
/// ```
pub fn split_header<S: AsRef<str>>(lines: &[S]) -> (&[S], &[S]) {
    match lines.iter().position(|line| line.as_ref().trim().is_empty()) {
        Some(blank) => lines.split_at(blank + 1),
        None => (&lines[..0], lines),
    }
}
