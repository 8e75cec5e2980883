//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`ReduceOption`] - reducer choice as a clap value
//!
//! Options left out on the command line fall back to the saved settings
//! (see [`crate::settings`]); [`Args::resolve`] performs that merge.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::{DEFAULT_CHAR_BUDGET, PipelineConfig, ReduceMode};
use crate::core::allow::AllowSet;
use crate::error::{ChatcleanseError, Result};
use crate::settings::{DEFAULT_SETTINGS_FILE, Settings};

/// Default output location.
pub const DEFAULT_OUTPUT: &str = "output/filtered_chat_log.txt";

/// Filter an exported chat log down to the messages of chosen users.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatcleanse")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatcleanse general.txt -u \"alice bob\"
    chatcleanse general.txt -u alice -r recent --strip-dates
    chatcleanse general.txt --strip-whitespace -o trimmed.txt
    chatcleanse general.txt            (reuses the last usernames and options)")]
pub struct Args {
    /// Path to the exported chat log
    pub input: Option<PathBuf>,

    /// Usernames to keep, space-separated
    #[arg(short, long, value_name = "NAMES")]
    pub users: Option<String>,

    /// Path to output file
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Trim the result to the character budget
    #[arg(short, long, value_enum, value_name = "MODE")]
    pub reduce: Option<ReduceOption>,

    /// Character budget for --reduce
    #[arg(long, value_name = "CHARS", default_value_t = DEFAULT_CHAR_BUDGET)]
    pub budget: usize,

    /// Collapse all whitespace (output becomes a single line)
    #[arg(long, overrides_with = "keep_whitespace")]
    pub strip_whitespace: bool,

    /// Keep whitespace even if the saved settings strip it
    #[arg(long, overrides_with = "strip_whitespace")]
    pub keep_whitespace: bool,

    /// Remove leading [timestamp] stamps
    #[arg(long, overrides_with = "keep_dates")]
    pub strip_dates: bool,

    /// Keep stamps even if the saved settings strip them
    #[arg(long, overrides_with = "strip_dates")]
    pub keep_dates: bool,

    /// Settings file used for defaults and remembered options
    #[arg(long, value_name = "FILE", default_value = DEFAULT_SETTINGS_FILE)]
    pub settings: PathBuf,

    /// Don't remember this run's options
    #[arg(long)]
    pub no_save: bool,

    /// Show scan progress on stderr
    #[arg(long)]
    pub progress: bool,

    /// Only print errors
    #[arg(short, long)]
    pub quiet: bool,
}

/// A run fully resolved against saved settings.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Input chat log
    pub input: PathBuf,
    /// Output file
    pub output: PathBuf,
    /// Usernames to keep
    pub allow: AllowSet,
    /// Pipeline toggles
    pub config: PipelineConfig,
}

fn pick_flag(enable: bool, disable: bool, saved: bool) -> bool {
    if enable {
        true
    } else if disable {
        false
    } else {
        saved
    }
}

impl Args {
    /// Merges the arguments with `saved`; explicit arguments win.
    ///
    /// # Errors
    ///
    /// Returns [`ChatcleanseError::MissingInput`] when no input file was
    /// given or no usernames are available from either source.
    pub fn resolve(&self, saved: &Settings) -> Result<RunOptions> {
        let input = self
            .input
            .clone()
            .ok_or_else(|| ChatcleanseError::missing_input("input file"))?;

        let allow = match &self.users {
            Some(users) => AllowSet::parse(users)?,
            None => saved.allow_set()?,
        };

        let reduce_mode = self.reduce.map_or(saved.reduce_option, ReduceMode::from);
        let config = PipelineConfig::new()
            .with_reduce_mode(reduce_mode)
            .with_char_budget(self.budget)
            .with_strip_whitespace(pick_flag(
                self.strip_whitespace,
                self.keep_whitespace,
                saved.remove_whitespace,
            ))
            .with_strip_dates(pick_flag(
                self.strip_dates,
                self.keep_dates,
                saved.exclude_dates,
            ));

        Ok(RunOptions {
            input,
            output: self.output.clone(),
            allow,
            config,
        })
    }
}

/// Reducer choice on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default)]
pub enum ReduceOption {
    /// Keep everything
    #[default]
    None,

    /// Keep the most recent messages
    #[value(alias = "newest")]
    Recent,

    /// Keep the oldest messages
    #[value(alias = "first")]
    Oldest,
}

impl std::fmt::Display for ReduceOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", ReduceMode::from(*self))
    }
}

// Conversion to library mode type
impl From<ReduceOption> for ReduceMode {
    fn from(option: ReduceOption) -> ReduceMode {
        match option {
            ReduceOption::None => ReduceMode::None,
            ReduceOption::Recent => ReduceMode::Recent,
            ReduceOption::Oldest => ReduceMode::Oldest,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("chatcleanse").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let args = parse(&["chat.txt"]);
        assert_eq!(args.output, PathBuf::from(DEFAULT_OUTPUT));
        assert_eq!(args.settings, PathBuf::from(DEFAULT_SETTINGS_FILE));
        assert_eq!(args.budget, 16_000);
        assert!(args.reduce.is_none());
    }

    #[test]
    fn test_reduce_aliases() {
        assert_eq!(parse(&["x", "-r", "newest"]).reduce, Some(ReduceOption::Recent));
        assert_eq!(parse(&["x", "--reduce", "oldest"]).reduce, Some(ReduceOption::Oldest));
        assert!(Args::try_parse_from(["chatcleanse", "x", "-r", "middle"]).is_err());
    }

    #[test]
    fn test_resolve_requires_input() {
        let args = parse(&["-u", "alice"]);
        let err = args.resolve(&Settings::default()).unwrap_err();
        assert!(err.is_missing_input());
        assert!(err.to_string().contains("input file"));
    }

    #[test]
    fn test_resolve_requires_usernames() {
        let args = parse(&["chat.txt"]);
        let err = args.resolve(&Settings::default()).unwrap_err();
        assert!(err.to_string().contains("usernames"));
    }

    #[test]
    fn test_resolve_falls_back_to_saved() {
        let saved = Settings {
            usernames: "carol".into(),
            reduce_option: ReduceMode::Oldest,
            remove_whitespace: true,
            exclude_dates: true,
        };
        let run = parse(&["chat.txt"]).resolve(&saved).unwrap();
        assert!(run.allow.contains("carol"));
        assert_eq!(run.config.reduce_mode, ReduceMode::Oldest);
        assert!(run.config.strip_whitespace);
        assert!(run.config.strip_dates);
    }

    #[test]
    fn test_explicit_args_override_saved() {
        let saved = Settings {
            usernames: "carol".into(),
            reduce_option: ReduceMode::Oldest,
            remove_whitespace: true,
            exclude_dates: false,
        };
        let args = parse(&[
            "chat.txt",
            "-u",
            "dave",
            "-r",
            "none",
            "--keep-whitespace",
            "--strip-dates",
        ]);
        let run = args.resolve(&saved).unwrap();
        assert!(run.allow.contains("dave"));
        assert!(!run.allow.contains("carol"));
        assert_eq!(run.config.reduce_mode, ReduceMode::None);
        assert!(!run.config.strip_whitespace);
        assert!(run.config.strip_dates);
    }

    #[test]
    fn test_last_toggle_wins() {
        let args = parse(&["x", "--strip-dates", "--keep-dates"]);
        assert!(!args.strip_dates);
        assert!(args.keep_dates);
    }

    #[test]
    fn test_reduce_option_display() {
        assert_eq!(ReduceOption::Recent.to_string(), "recent");
    }
}
