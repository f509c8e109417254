//! Integration tests for the candela CLI.
//!
//! These tests verify end-to-end functionality from CSV input through
//! indicator computation to CSV or PNG output, including the exit code
//! contract (0 success, 1 usage, 2 data, 3 computation).

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

/// Get the path to the test fixtures directory.
fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// Run the CLI with given arguments and return the output.
fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_candela"))
        .args(args)
        .output()
        .expect("Failed to execute CLI")
}

/// Run the CLI and capture stdout as string.
fn run_cli_stdout(args: &[&str]) -> String {
    let output = run_cli(args);
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn fixture(name: &str) -> String {
    fixtures_dir().join(name).display().to_string()
}

// =============================================================================
// Indicator End-to-End Tests
// =============================================================================

#[test]
fn test_sma_end_to_end_exact_values() {
    let stdout = run_cli_stdout(&["sma", &fixture("simple_close.csv"), "3"]);

    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec!["sma_3", "2", "3", "4", "5", "6", "7", "8", "9"]
    );
}

#[test]
fn test_ema_end_to_end_exact_values() {
    let stdout = run_cli_stdout(&["ema", &fixture("simple_close.csv"), "3"]);

    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "ema_3",
            "1",
            "1.5",
            "2.25",
            "3.125",
            "4.0625",
            "5.03125",
            "6.015625",
            "7.0078125",
            "8.00390625",
            "9.001953125",
        ]
    );
}

#[test]
fn test_rsi_end_to_end_with_date_alignment() {
    let stdout = run_cli_stdout(&["rsi", &fixture("rsi_series.csv"), "3"]);

    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[0], "date,rsi_3");
    // 10 observations, period 3: 7 output rows starting at input index 3
    assert_eq!(lines.len(), 8);
    assert_eq!(lines[1], "2024-01-04,80");
    assert_eq!(lines[2], "2024-01-05,50");
    assert_eq!(lines[7], "2024-01-12,80");
}

#[test]
fn test_arma_end_to_end_full_length() {
    let output = run_cli(&["arma", &fixture("rsi_series.csv"), "1,1"]);

    assert!(output.status.success(), "ARMA fit should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[0], "date,arma_1_1");
    // Fitted values are one per input observation
    assert_eq!(lines.len(), 11);
    assert!(lines[1].starts_with("2024-01-01,"));

    for line in &lines[1..] {
        let value: f64 = line.split(',').nth(1).unwrap().parse().unwrap();
        assert!(value.is_finite());
    }
}

#[test]
fn test_sma_output_to_file() {
    let input = fixture("simple_close.csv");
    let output_path = std::env::temp_dir().join("candela_cli_sma_out.csv");

    let result = run_cli(&["sma", &input, "3", "-o", output_path.to_str().unwrap()]);

    assert!(result.status.success());
    let content = fs::read_to_string(&output_path).unwrap();
    assert!(content.starts_with("sma_3\n2\n"));

    fs::remove_file(&output_path).ok();
}

#[test]
fn test_date_column_preserved_with_sma_offset() {
    let stdout = run_cli_stdout(&["sma", &fixture("rsi_series.csv"), "3"]);

    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[0], "date,sma_3");
    // First SMA value covers observations 0..=2, so it carries the third date
    assert!(lines[1].starts_with("2024-01-03,"));
    assert_eq!(lines.len(), 9);
}

#[test]
fn test_column_override() {
    let stdout = run_cli_stdout(&[
        "sma",
        &fixture("ohlc.csv"),
        "2",
        "-c",
        "open",
    ]);

    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[0], "date,sma_2");
    // Mean of the first two opens, 10.0 and 11.0
    assert!(lines[1].ends_with(",10.5"));
}

#[test]
fn test_default_period_on_short_input_yields_empty_output() {
    // 10 observations against the default period of 20: header only
    let stdout = run_cli_stdout(&["sma", &fixture("simple_close.csv")]);

    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines, vec!["sma_20"]);
}

// =============================================================================
// Chart End-to-End Tests
// =============================================================================

#[test]
fn test_chart_writes_png() {
    let output_path = std::env::temp_dir().join("candela_cli_chart.png");

    let result = run_cli(&[
        "chart",
        &fixture("ohlc.csv"),
        "-o",
        output_path.to_str().unwrap(),
        "--title",
        "Fixture",
    ]);

    assert!(result.status.success(), "chart should succeed");

    let bytes = fs::read(&output_path).unwrap();
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");

    fs::remove_file(&output_path).ok();
}

#[test]
fn test_chart_invalid_date_format_is_computation_error() {
    let output_path = std::env::temp_dir().join("candela_cli_chart_badfmt.png");

    let result = run_cli(&[
        "chart",
        &fixture("ohlc.csv"),
        "-o",
        output_path.to_str().unwrap(),
        "--date-format",
        "%Q",
    ]);

    assert_eq!(result.status.code(), Some(3));
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("date format"));

    fs::remove_file(&output_path).ok();
}

#[test]
fn test_chart_requires_date_column() {
    let result = run_cli(&[
        "chart",
        &fixture("simple_close.csv"),
        "-o",
        "/tmp/candela_cli_unused.png",
    ]);

    assert_eq!(result.status.code(), Some(2));
}

// =============================================================================
// Exit Code Tests
// =============================================================================

#[test]
fn test_exit_code_success() {
    let output = run_cli(&["sma", &fixture("simple_close.csv"), "3"]);

    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn test_exit_code_usage_error() {
    // Wrong order-pair shape is a usage error
    let output = run_cli(&["arma", &fixture("simple_close.csv"), "1,1,1"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("orders"));
}

#[test]
fn test_exit_code_missing_file() {
    let output = run_cli(&["sma", "/nonexistent/file.csv", "3"]);

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("nonexistent"));
}

#[test]
fn test_exit_code_zero_period_is_computation_error() {
    let output = run_cli(&["sma", &fixture("simple_close.csv"), "0"]);

    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("period"));
}

#[test]
fn test_exit_code_zero_arma_order_is_computation_error() {
    let output = run_cli(&["arma", &fixture("rsi_series.csv"), "0,1"]);

    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("order"));
}

#[test]
fn test_exit_code_arma_short_series() {
    // Three observations cannot support an ARMA(1, 1) fit
    let short = std::env::temp_dir().join("candela_cli_short.csv");
    fs::write(&short, "close\n1\n2\n3\n").unwrap();

    let output = run_cli(&["arma", short.to_str().unwrap(), "1,1"]);

    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("estimation failed"));

    fs::remove_file(&short).ok();
}

// =============================================================================
// Help and Version Tests
// =============================================================================

#[test]
fn test_help_flag() {
    let output = run_cli(&["--help"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("sma"));
    assert!(stdout.contains("chart"));
}

#[test]
fn test_version_flag() {
    let output = run_cli(&["--version"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("candela"));
}

#[test]
fn test_missing_subcommand_is_usage_error() {
    let output = run_cli(&[]);

    assert_eq!(output.status.code(), Some(1));
}
