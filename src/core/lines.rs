//! Line splitting with universal-newline handling.
//!
//! Chat exports come from every platform, so `\r\n` and lone `\r` are
//! normalized to `\n` before the text is cut into lines. Every line keeps
//! its `\n` terminator; only the last line may lack one.

/// Splits `text` into newline-terminated lines.
///
/// # Example
///
/// ```rust
/// use chatcleanse::core::lines::split_lines;
///
/// let lines = split_lines("Server log\r\n\r\n[10:00] alice hi");
/// assert_eq!(lines, vec!["Server log\n", "\n", "[10:00] alice hi"]);
/// ```
pub fn split_lines(text: &str) -> Vec<String> {
    if !text.contains('\r') {
        return text.split_inclusive('\n').map(str::to_owned).collect();
    }

    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
    normalized
        .split_inclusive('\n')
        .map(str::to_owned)
        .collect()
}
