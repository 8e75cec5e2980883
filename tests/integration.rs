//! Integration tests for the full pipeline with real files

use chatcleanse::core::ProcessingStats;
use chatcleanse::prelude::*;
use std::fs;
use tempfile::{TempDir, tempdir};

const DISCORD_LOG: &str = "==============================================================
Guild: Rust Community
Channel: help / #beginners
==============================================================

[2024-01-15 10:30] alice does anyone know why this borrow fails?
    let x = &mut v;
    v.push(1);
[2024-01-15 10:31] bob try cloning first
[2024-01-15 10:31] bob or use a block
    {
        let x = &mut v;
    }
[2024-01-15 10:32] carol [link] https://doc.rust-lang.org/book/
[2024-01-15 10:33] alice thanks!
";

fn setup() -> (TempDir, std::path::PathBuf) {
    let dir = tempdir().expect("Failed to create temp dir");
    let input = dir.path().join("general.txt");
    fs::write(&input, DISCORD_LOG).unwrap();
    (dir, input)
}

#[test]
fn test_filter_single_user_file() {
    let (dir, input) = setup();
    let output = dir.path().join("output").join("filtered_chat_log.txt");
    let allow = AllowSet::parse("alice").unwrap();

    let processed = process_file(&input, &output, &allow, &PipelineConfig::new(), None).unwrap();

    let written = fs::read_to_string(&output).unwrap();
    assert_eq!(written, processed.text);
    assert!(written.starts_with("=====") && written.contains("Guild: Rust Community\n"));
    assert!(written.contains(
        "alice does anyone know why this borrow fails?\nlet x = &mut v;\nv.push(1);\n"
    ));
    assert!(written.ends_with("alice thanks!\n"));
    assert!(!written.contains("bob"));
    assert!(!written.contains("cloning"));
    assert!(!written.contains("carol"));
}

#[test]
fn test_stats_for_file() {
    let (dir, input) = setup();
    let output = dir.path().join("out.txt");
    let allow = AllowSet::parse("alice bob").unwrap();

    let processed = process_file(&input, &output, &allow, &PipelineConfig::new(), None).unwrap();
    let stats: ProcessingStats = processed.stats;

    assert_eq!(stats.header_lines, 5);
    assert_eq!(stats.message_start_lines, 5);
    assert_eq!(stats.kept_blocks, 4);
    // carol's start line
    assert_eq!(stats.dropped_lines, 1);
    assert!(stats.output_chars < stats.input_chars);
}

#[test]
fn test_bobs_blocks_stay_separate() {
    let allow = AllowSet::parse("bob").unwrap();
    let out = process_text(DISCORD_LOG, &allow, &PipelineConfig::new(), None).unwrap();
    let body = out.text.split_once("====\n\n").unwrap().1;
    assert_eq!(
        body,
        "bob try cloning first\nbob or use a block\n{\nlet x = &mut v;\n}\n"
    );
}

#[test]
fn test_strip_dates_only_touches_leading_brackets() {
    let allow = AllowSet::parse("carol").unwrap();
    let config = PipelineConfig::new().with_strip_dates(true);
    let out = process_text(DISCORD_LOG, &allow, &config, None).unwrap();
    // carol's block starts with her name, not a bracket
    assert!(out.text.ends_with("carol [link] https://doc.rust-lang.org/book/\n"));
}

#[test]
fn test_whitespace_single_line_output() {
    let allow = AllowSet::parse("alice").unwrap();
    let config = PipelineConfig::new().with_strip_whitespace(true);
    let out = process_text(DISCORD_LOG, &allow, &config, None).unwrap();
    assert!(!out.text.contains('\n'));
    assert!(out.text.contains("Channel: help / #beginners ===="));
    assert!(out.text.ends_with("alice thanks! "));
}

#[test]
fn test_recent_budget_on_large_log() {
    let mut log = String::from("Server export\n\n");
    for i in 0..2_000 {
        log.push_str(&format!("[2024-01-15 10:{:02}] alice message number {i}\n", i % 60));
    }
    let allow = AllowSet::parse("alice").unwrap();
    let config = PipelineConfig::new().with_reduce_mode(ReduceMode::Recent);

    let out = process_text(&log, &allow, &config, None).unwrap();
    assert_eq!(out.text.chars().count(), DEFAULT_CHAR_BUDGET);
    assert!(out.text.ends_with("alice message number 1999\n"));
    assert!(!out.text.contains("Server export"));
    assert!(out.stats.truncated);
}

#[test]
fn test_oldest_budget_keeps_header() {
    let mut log = String::from("Server export\n\n");
    for i in 0..2_000 {
        log.push_str(&format!("[t] alice message number {i}\n"));
    }
    let allow = AllowSet::parse("alice").unwrap();
    let config = PipelineConfig::new().with_reduce_mode(ReduceMode::Oldest);

    let out = process_text(&log, &allow, &config, None).unwrap();
    assert_eq!(out.text.chars().count(), DEFAULT_CHAR_BUDGET);
    assert!(out.text.starts_with("Server export\n\nalice message number 0\n"));
}

#[test]
fn test_missing_input_file_writes_nothing() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("missing.txt");
    let output = dir.path().join("out.txt");
    let allow = AllowSet::parse("alice").unwrap();

    let err = process_file(&input, &output, &allow, &PipelineConfig::new(), None).unwrap_err();
    assert!(err.is_io());
    assert!(!output.exists());
}

#[test]
fn test_settings_roundtrip_through_store() {
    let dir = tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("settings.json"));

    let allow = AllowSet::parse("alice bob").unwrap();
    let config = PipelineConfig::new()
        .with_reduce_mode(ReduceMode::Oldest)
        .with_strip_whitespace(true);
    store.save(&Settings::from_run(&allow, &config)).unwrap();

    let raw: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(store.path()).unwrap()).unwrap();
    assert_eq!(raw["usernames"], "alice bob");
    assert_eq!(raw["reduce_option"], "oldest");
    assert_eq!(raw["remove_whitespace"], true);
    assert_eq!(raw["exclude_dates"], false);

    let loaded = store.load().unwrap();
    assert_eq!(loaded.allow_set().unwrap(), allow);
    assert_eq!(loaded.pipeline_config(), config);
}
