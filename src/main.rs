//! # chatcleanse CLI
//!
//! Command-line interface for the chatcleanse library.

use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;

use chatcleanse::ChatcleanseError;
use chatcleanse::cli::Args;
use chatcleanse::core::process_file;
use chatcleanse::progress::stderr_progress;
use chatcleanse::settings::{JsonFileStore, Settings, SettingsStore};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), ChatcleanseError> {
    let total_start = Instant::now();
    let args = <Args as ClapParser>::parse();

    let store = JsonFileStore::new(&args.settings);
    let saved = store.load().unwrap_or_else(|e| {
        tracing::warn!(path = %store.path().display(), "ignoring saved settings: {e}");
        Settings::default()
    });
    let options = args.resolve(&saved)?;
    let config = &options.config;

    let say = |line: String| {
        if !args.quiet {
            println!("{line}");
        }
    };

    // Print header
    say(format!("🧹 chatcleanse v{}", env!("CARGO_PKG_VERSION")));
    say("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━".to_string());
    say(format!("📂 Input:   {}", options.input.display()));
    say(format!("💾 Output:  {}", options.output.display()));
    say(format!("👤 Users:   {}", options.allow));
    if config.reduce_mode.is_active() {
        say(format!(
            "✂️  Reduce:  {} ({} chars)",
            config.reduce_mode, config.char_budget
        ));
    }
    if config.strip_whitespace {
        say("🧽 Whitespace: collapsed".to_string());
    }
    if config.strip_dates {
        say("📅 Dates:   stripped".to_string());
    }
    say(String::new());

    say("⏳ Filtering...".to_string());
    let progress = args.progress.then(|| stderr_progress(1_000));
    let processed = process_file(
        &options.input,
        &options.output,
        &options.allow,
        config,
        progress.as_ref(),
    )?;
    let stats = processed.stats;

    if !args.no_save {
        store.save(&Settings::from_run(&options.allow, config))?;
    }

    let total_time = total_start.elapsed();

    say(String::new());
    say(format!("✅ Done! Output saved to {}", options.output.display()));

    // Summary
    say(String::new());
    say("📊 Summary:".to_string());
    say(format!("   Lines:     {} ({} header)", stats.total_lines, stats.header_lines));
    say(format!("   Messages:  {} seen", stats.message_start_lines));
    say(format!("   Kept:      {} blocks", stats.kept_blocks));
    say(format!("   Dropped:   {} lines", stats.dropped_lines));
    if stats.truncated {
        say(format!("   Truncated to {} chars", config.char_budget));
    }
    say(format!(
        "   Size:      {} → {} chars ({:.1}% reduction)",
        stats.input_chars,
        stats.output_chars,
        stats.reduction_ratio()
    ));
    say(format!("   Time:      {:.2}s", total_time.as_secs_f64()));

    Ok(())
}
