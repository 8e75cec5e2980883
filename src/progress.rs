//! Progress reporting for the message scan.
//!
//! The filter calls a [`ProgressCallback`] once for every body line it
//! processes. The callback is a side channel: it never influences which
//! blocks are kept or in what order.
//!
//! # Example
//!
//! ```rust
//! use chatcleanse::progress::{Progress, ProgressCallback};
//! use std::sync::Arc;
//!
//! let callback: ProgressCallback = Arc::new(|progress| {
//!     if let Some(pct) = progress.percentage() {
//!         println!("Progress: {:.1}%", pct);
//!     }
//! });
//!
//! for i in 0..10usize {
//!     callback(Progress::new(i + 1, Some(10)));
//! }
//! ```

use std::sync::Arc;

/// Progress information for the line scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Progress {
    /// Number of body lines processed so far.
    pub lines_processed: usize,

    /// Total body lines to process, if known.
    pub total_lines: Option<usize>,
}

impl Progress {
    /// Creates a new progress instance.
    pub fn new(lines_processed: usize, total_lines: Option<usize>) -> Self {
        Self {
            lines_processed,
            total_lines,
        }
    }

    /// Returns the progress as a percentage (0.0 - 100.0).
    ///
    /// Returns `None` if the total is not known.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chatcleanse::progress::Progress;
    ///
    /// let progress = Progress::new(50, Some(200));
    /// assert_eq!(progress.percentage(), Some(25.0));
    ///
    /// let unknown = Progress::new(50, None);
    /// assert_eq!(unknown.percentage(), None);
    /// ```
    pub fn percentage(&self) -> Option<f64> {
        self.total_lines.map(|total| {
            if total == 0 {
                100.0
            } else {
                (self.lines_processed as f64 / total as f64) * 100.0
            }
        })
    }

    /// Returns whether every known line has been processed.
    pub fn is_complete(&self) -> bool {
        self.total_lines
            .map(|total| self.lines_processed >= total)
            .unwrap_or(false)
    }
}

/// Callback type for receiving progress updates.
pub type ProgressCallback = Arc<dyn Fn(Progress) + Send + Sync>;

/// Creates a progress callback that redraws a single status line on stderr.
///
/// Output is throttled to every `every` lines plus the final line, so large
/// logs don't flood the terminal.
pub fn stderr_progress(every: usize) -> ProgressCallback {
    let every = every.max(1);
    Arc::new(move |progress| {
        let done = progress.is_complete();
        if progress.lines_processed % every != 0 && !done {
            return;
        }
        match progress.total_lines {
            Some(total) => eprint!(
                "\r   Scanned {}/{} lines ({:.1}%)",
                progress.lines_processed,
                total,
                progress.percentage().unwrap_or(100.0)
            ),
            None => eprint!("\r   Scanned {} lines", progress.lines_processed),
        }
        if done {
            eprintln!();
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_percentage() {
        let progress = Progress::new(5, Some(10));
        assert_eq!(progress.percentage(), Some(50.0));
    }

    #[test]
    fn test_progress_percentage_zero_total() {
        let progress = Progress::new(0, Some(0));
        assert_eq!(progress.percentage(), Some(100.0));
        assert!(progress.is_complete());
    }

    #[test]
    fn test_progress_is_complete() {
        assert!(Progress::new(10, Some(10)).is_complete());
        assert!(!Progress::new(5, Some(10)).is_complete());
        assert!(!Progress::new(5, None).is_complete());
    }

    #[test]
    fn test_progress_callback_type() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        let counter = Arc::new(AtomicUsize::new(0));
        let counter_clone = counter.clone();

        let callback: ProgressCallback = Arc::new(move |progress| {
            counter_clone.store(progress.lines_processed, Ordering::SeqCst);
        });

        callback(Progress::new(42, None));
        assert_eq!(counter.load(Ordering::SeqCst), 42);
    }
}
