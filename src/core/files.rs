//! Reading chat logs and writing filtered output.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ChatcleanseError, Result};

/// Reads a whole chat log as UTF-8 text.
///
/// # Errors
///
/// Returns [`ChatcleanseError::FileIo`] if the file can't be read and
/// [`ChatcleanseError::Utf8`] if it isn't valid UTF-8.
pub fn read_log(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| ChatcleanseError::file_io(path, e))?;
    let text = String::from_utf8(bytes).map_err(|e| ChatcleanseError::utf8(path, e))?;
    tracing::debug!(path = %path.display(), bytes = text.len(), "read chat log");
    Ok(text)
}

fn temp_sibling(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    path.with_file_name(format!(".{name}.tmp"))
}

/// Writes `text` to `path`, creating parent directories as needed.
///
/// The text goes to a temporary sibling file that is renamed over `path`
/// once fully written, so a failure never leaves a truncated output.
///
/// # Errors
///
/// Returns [`ChatcleanseError::FileIo`] on any filesystem failure.
pub fn write_output(path: &Path, text: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| ChatcleanseError::file_io(parent, e))?;
    }

    let tmp = temp_sibling(path);
    if let Err(e) = fs::write(&tmp, text) {
        let _ = fs::remove_file(&tmp);
        return Err(ChatcleanseError::file_io(&tmp, e));
    }
    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(ChatcleanseError::file_io(path, e));
    }

    tracing::debug!(path = %path.display(), bytes = text.len(), "wrote output");
    Ok(())
}
