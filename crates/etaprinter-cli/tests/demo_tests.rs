// Rust guideline compliant 2026-02-06

//! Integration tests for the demo workload.

use etaprinter_cli::{run_demo, DemoOptions};
use etaprinter_core::Error;
use std::fs;
use tempfile::TempDir;

fn quick_options(total: u64, batch: u64) -> DemoOptions {
    DemoOptions {
        total,
        batch,
        max_delay_ms: 0,
        seed: 1,
        element_name: Some("bananas".to_string()),
    }
}

fn run_to_file(options: &DemoOptions) -> (etaprinter_cli::RunSummary, String) {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join("progress.txt");
    let file = fs::File::create(&path).expect("Failed to create output file");
    let summary = run_demo(options, file).expect("demo run");
    let content = fs::read_to_string(&path).expect("Failed to read output file");
    (summary, content)
}

#[test]
fn test_demo_processes_every_item() {
    let (summary, content) = run_to_file(&quick_options(100, 10));

    assert_eq!(summary.processed, 100);
    assert_eq!(summary.updates, 10);
    assert!(content.starts_with("\r0% ["));
    assert!(content.ends_with(&format!("100% [{}] Complete.\n", "=".repeat(100))));
    assert_eq!(content.matches("Complete.").count(), 1);
}

#[test]
fn test_demo_truncates_last_batch() {
    let (summary, content) = run_to_file(&quick_options(25, 10));

    assert_eq!(summary.processed, 25);
    assert_eq!(summary.updates, 3);
    assert!(content.contains("\r40% ["));
    assert!(content.contains("\r80% ["));
    assert!(content.ends_with("Complete.\n"));
}

#[test]
fn test_demo_single_batch_renders_terminal_only() {
    let (summary, content) = run_to_file(&quick_options(10, 50));

    assert_eq!(summary.updates, 1);
    let expected = format!(
        "\r0% [{}] \r100% [{}] Complete.\n",
        " ".repeat(100),
        "=".repeat(100)
    );
    assert_eq!(content, expected);
}

#[test]
fn test_demo_rejects_zero_batch() {
    let result = run_demo(&quick_options(10, 0), Vec::new());
    assert!(matches!(result, Err(Error::InvalidArgument(_))));
}

#[test]
fn test_demo_rejects_zero_total() {
    let result = run_demo(&quick_options(0, 5), Vec::new());
    assert!(matches!(result, Err(Error::InvalidArgument(_))));
}

#[test]
fn test_summary_serializes_to_json() {
    let (summary, _) = run_to_file(&quick_options(4, 2));
    let json = serde_json::to_value(&summary).expect("serialize summary");

    assert_eq!(json["processed"], 4);
    assert_eq!(json["updates"], 2);
    assert_eq!(json["element_name"], "bananas");
    assert!(json["elapsed_ms"].is_u64());
}
