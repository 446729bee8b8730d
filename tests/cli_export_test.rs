// ABOUTME: Integration tests for the pierre-nutrition binary
// ABOUTME: Runs real commands and checks exported files, printed tables and error exit codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Integration tests for the pierre-nutrition binary.
//!
//! Each test spawns the compiled CLI, so stdout only carries command output
//! and log lines go to stderr.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::fs;
use std::process::Command;
use tempfile::TempDir;

const REFERENCE_CLIENT: [&str; 12] = [
    "--weight-kg",
    "70",
    "--height-cm",
    "175",
    "--age",
    "30",
    "--sex",
    "male",
    "--activity",
    "moderate",
    "--goal",
    "maintain",
];

/// Helper to run CLI command and capture output
fn run_cli(args: &[&str]) -> (i32, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_pierre-nutrition"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    let exit_code = output.status.code().unwrap_or(-1);
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    (exit_code, stdout, stderr)
}

fn calculate_args<'a>(extra: &[&'a str]) -> Vec<&'a str> {
    let mut args = vec!["calculate"];
    args.extend(REFERENCE_CLIENT);
    args.extend_from_slice(extra);
    args
}

#[test]
fn test_cli_help_shows_commands() {
    let (exit_code, stdout, _stderr) = run_cli(&["--help"]);

    assert_eq!(exit_code, 0);
    for command in ["calculate", "rebalance", "presets", "meals"] {
        assert!(stdout.contains(command), "help should mention {command}");
    }
}

#[test]
fn test_calculate_prints_json_report() {
    let (exit_code, stdout, stderr) = run_cli(&calculate_args(&["--client-name", "Jordan Lee"]));

    assert_eq!(exit_code, 0, "stderr: {stderr}");
    let report: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(report["client"]["name"], "Jordan Lee");
    assert_eq!(report["result"]["bmr"], 1649);
    assert_eq!(report["result"]["daily_calories"], 2556);
    assert_eq!(report["result"]["meal_plan"].as_array().unwrap().len(), 4);
}

#[test]
fn test_calculate_writes_csv_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("plan.csv");
    let path_arg = path.to_str().unwrap();

    let (exit_code, stdout, stderr) = run_cli(&calculate_args(&[
        "--preset",
        "keto",
        "--meals",
        "3",
        "--format",
        "csv",
        "--output",
        path_arg,
    ]));

    assert_eq!(exit_code, 0, "stderr: {stderr}");
    assert!(stdout.is_empty());

    let content = fs::read_to_string(&path).unwrap();
    let mut reader = csv::Reader::from_reader(content.as_bytes());
    let rows: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();

    assert_eq!(rows.len(), 4);
    assert_eq!(&rows[0][0], "Breakfast");
    assert_eq!(&rows[0][1], "34");
    let total = &rows[3];
    assert_eq!(&total[0], "Total");
    assert_eq!(&total[2], "2556");
    // 20% of 2556 kcal as protein
    assert_eq!(&total[3], "128");
}

#[test]
fn test_calculate_with_explicit_meal_split() {
    let (exit_code, stdout, stderr) = run_cli(&calculate_args(&["--meal-split", "30,40,30"]));

    assert_eq!(exit_code, 0, "stderr: {stderr}");
    let report: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let calories: Vec<u64> = report["result"]["meal_plan"]
        .as_array()
        .unwrap()
        .iter()
        .map(|meal| meal["calories"].as_u64().unwrap())
        .collect();
    assert_eq!(calories, vec![767, 1022, 767]);
}

#[test]
fn test_katch_without_body_fat_exits_with_data_error() {
    let (exit_code, stdout, stderr) = run_cli(&calculate_args(&["--formula", "katch"]));

    assert_eq!(exit_code, 65);
    assert!(stdout.is_empty());
    assert!(stderr.contains("MISSING_REQUIRED_FIELD"));
    assert!(stderr.contains("body_fat_percent"));
}

#[test]
fn test_oversized_meal_split_exits_with_data_error() {
    let (exit_code, stdout, stderr) = run_cli(&calculate_args(&["--meal-split", "4294967295,101"]));

    assert_eq!(exit_code, 65, "stderr: {stderr}");
    assert!(stdout.is_empty());
    assert!(stderr.contains("VALUE_OUT_OF_RANGE"));
    assert!(stderr.contains("meal_percent"));
}

#[test]
fn test_pretty_log_format_runs_with_debug_output() {
    let output = Command::new(env!("CARGO_BIN_EXE_pierre-nutrition"))
        .args(["meals", "--count", "3", "--verbose"])
        .env_remove("RUST_LOG")
        .env("LOG_FORMAT", "pretty")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("Breakfast"));
    assert!(!String::from_utf8_lossy(&output.stderr).contains("Logging disabled"));
}

#[test]
fn test_invalid_split_exits_with_data_error() {
    let (exit_code, _stdout, stderr) = run_cli(&calculate_args(&[
        "--protein", "30", "--carbs", "40", "--fat", "20",
    ]));

    assert_eq!(exit_code, 65);
    assert!(stderr.contains("INVALID_INPUT"));
}

#[test]
fn test_invalid_environment_config_exits_with_config_error() {
    let output = Command::new(env!("CARGO_BIN_EXE_pierre-nutrition"))
        .arg("presets")
        .env("PIERRE_NUTRITION_DEFAULT_MEAL_COUNT", "many")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(78));
    assert!(String::from_utf8_lossy(&output.stderr).contains("CONFIG_ERROR"));
}

#[test]
fn test_rebalance_prints_new_split() {
    let (exit_code, stdout, stderr) = run_cli(&[
        "rebalance",
        "--protein",
        "30",
        "--carbs",
        "40",
        "--fat",
        "30",
        "--set",
        "protein=50",
    ]);

    assert_eq!(exit_code, 0, "stderr: {stderr}");
    assert!(stdout.contains("50%"));
    assert!(stdout.contains("29%"));
    assert!(stdout.contains("21%"));
    assert!(!stdout.contains("WARNING"));
}

#[test]
fn test_rebalance_rejects_unknown_macro() {
    let (exit_code, _stdout, stderr) = run_cli(&[
        "rebalance",
        "--protein",
        "30",
        "--carbs",
        "40",
        "--fat",
        "30",
        "--set",
        "sugar=10",
    ]);

    assert_eq!(exit_code, 65);
    assert!(stderr.contains("INVALID_INPUT"));
}

#[test]
fn test_presets_lists_every_preset() {
    let (exit_code, stdout, _stderr) = run_cli(&["presets"]);

    assert_eq!(exit_code, 0);
    for name in [
        "Balanced",
        "High Protein",
        "Low Carb",
        "Low Fat",
        "Ketogenic",
        "Mediterranean",
    ] {
        assert!(stdout.contains(name), "presets should list {name}");
    }
}

#[test]
fn test_meals_shows_even_split_and_edit() {
    let (exit_code, stdout, _stderr) = run_cli(&["meals", "--count", "3"]);
    assert_eq!(exit_code, 0);
    assert!(stdout.contains("Breakfast"));
    assert!(stdout.contains("34%"));

    let (exit_code, stdout, _stderr) = run_cli(&["meals", "--count", "3", "--set", "meal1=50"]);
    assert_eq!(exit_code, 0);
    assert!(stdout.contains("50%"));
    assert!(stdout.contains("25%"));

    let (exit_code, _stdout, stderr) = run_cli(&["meals", "--count", "8"]);
    assert_eq!(exit_code, 65);
    assert!(stderr.contains("VALUE_OUT_OF_RANGE"));
}
