//! CLI integration tests for knight-paths
//!
//! These tests run the binary end to end: input resolution from flags, config
//! files and prompts, then text, JSON, board and graph output.

use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

/// Get a command instance for the knight-paths binary
fn knight_cmd() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("knight-paths"));
    cmd.env_remove("KNIGHT_PATHS_CONFIG");
    cmd
}

/// Run a search with `--format json` and parse stdout
fn search_json(args: &[&str]) -> Value {
    let output = knight_cmd()
        .args(args)
        .args(["--format", "json"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    serde_json::from_str(&stdout).unwrap()
}

// =============================================================================
// Search Tests
// =============================================================================

#[test]
fn test_single_move_path() {
    knight_cmd()
        .args(["--start", "a1", "--end", "b3"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Found 1 shortest path(s) from a1 to b3 (1 move(s))",
        ))
        .stdout(predicate::str::contains("Path: a1 -> b3\n"));
}

#[test]
fn test_corner_to_corner_json() {
    let json = search_json(&["--start", "a1", "--end", "h8"]);

    assert_eq!(json["start"], "a1");
    assert_eq!(json["end"], "h8");
    assert_eq!(json["width"], 8);
    assert_eq!(json["height"], 8);
    assert_eq!(json["distance"], 6);
    assert_eq!(json["count"], 108);

    let paths = json["paths"].as_array().unwrap();
    assert_eq!(paths.len(), 108);
    for path in paths {
        let squares = path.as_array().unwrap();
        assert_eq!(squares.len(), 7);
        assert_eq!(squares[0], "a1");
        assert_eq!(squares[6], "h8");
    }
}

#[test]
fn test_paths_are_printed_in_sorted_order() {
    knight_cmd()
        .args(["-s", "a1", "-e", "a2"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Path: a1 -> b3 -> c1 -> a2\nPath: a1 -> c2 -> b4 -> a2\n",
        ));
}

#[test]
fn test_same_square() {
    let json = search_json(&["--start", "a1", "--end", "a1", "--width", "1", "--height", "1"]);

    assert_eq!(json["distance"], 0);
    assert_eq!(json["paths"], serde_json::json!([["a1"]]));
}

#[test]
fn test_count_only() {
    knight_cmd()
        .args(["--start", "a1", "--end", "h8", "--count"])
        .assert()
        .success()
        .stdout("a1 -> h8: 6 move(s), 108 shortest path(s)\n");

    let json = search_json(&["--start", "a1", "--end", "h8", "--count"]);
    assert_eq!(json["count"], 108);
    assert!(json.get("paths").is_none());
}

// =============================================================================
// Error Tests
// =============================================================================

#[test]
fn test_invalid_square() {
    knight_cmd()
        .args(["--start", "z9", "--end", "a1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid square 'z9'"));
}

#[test]
fn test_malformed_square() {
    knight_cmd()
        .args(["--start", "a1", "--end", "knight"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected algebraic notation"));
}

#[test]
fn test_unreachable_on_tiny_board() {
    knight_cmd()
        .args(["--start", "a1", "--end", "b2", "--width", "2", "--height", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "No path found from a1 to b2 on a 2x2 board",
        ));
}

#[test]
fn test_zero_width_board() {
    knight_cmd()
        .args(["--start", "a1", "--end", "a1", "--width", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid board dimensions 0x8"));
}

#[test]
fn test_max_paths_exceeded() {
    knight_cmd()
        .args(["--start", "a1", "--end", "h8", "--max-paths", "10"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "Found 108 shortest paths, more than the limit of 10",
        ));
}

#[test]
fn test_json_errors_on_stderr() {
    let output = knight_cmd()
        .args(["--start", "z9", "--end", "a1", "--format", "json"])
        .assert()
        .failure();

    let stderr = String::from_utf8_lossy(&output.get_output().stderr);
    let json: Value = serde_json::from_str(stderr.trim()).unwrap();
    assert_eq!(json["success"], false);
    assert!(json["error"].as_str().unwrap().contains("z9"));
}

// =============================================================================
// Config Tests
// =============================================================================

#[test]
fn test_json_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{ "start": "a1", "end": "h8" }"#).unwrap();

    let json = search_json(&["--config", path.to_str().unwrap()]);
    assert_eq!(json["count"], 108);
}

#[test]
fn test_toml_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "start = \"a1\"\nend = \"c3\"\nwidth = 3\nheight = 3\n").unwrap();

    let json = search_json(&["--config", path.to_str().unwrap()]);
    assert_eq!(json["width"], 3);
    assert_eq!(json["distance"], 4);
    assert_eq!(json["count"], 2);
}

#[test]
fn test_flags_override_config() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{ "start": "a1", "end": "h8" }"#).unwrap();

    let json = search_json(&["--config", path.to_str().unwrap(), "--end", "b3"]);
    assert_eq!(json["end"], "b3");
    assert_eq!(json["count"], 1);
}

#[test]
fn test_config_from_environment() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{ "start": "d4", "end": "e5" }"#).unwrap();

    knight_cmd()
        .env("KNIGHT_PATHS_CONFIG", &path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Path: d4 -> c6 -> e5"))
        .stdout(predicate::str::contains("Path: d4 -> f3 -> e5"));
}

#[test]
fn test_invalid_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{ "start": "a1", "unknown": true }"#).unwrap();

    knight_cmd()
        .args(["--config", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load config"));
}

#[test]
fn test_missing_config_file() {
    knight_cmd()
        .args(["--config", "/nonexistent/knight-paths.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read config file"));
}

// =============================================================================
// Prompt Tests
// =============================================================================

#[test]
fn test_prompts_for_squares() {
    knight_cmd()
        .write_stdin("a1\nb3\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Path: a1 -> b3"))
        .stderr(predicate::str::contains("Enter the start square"));
}

#[test]
fn test_prompt_without_answer_fails() {
    knight_cmd()
        .args(["--start", "a1"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No end square given"));
}

// =============================================================================
// Presentation Tests
// =============================================================================

#[test]
fn test_board_overlay() {
    knight_cmd()
        .args(["--start", "a1", "--end", "c3", "--width", "3", "--height", "3", "--board"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3 2 1 4\n2 3 . 1\n1 0 3 2\n  a b c\n"));
}

#[test]
fn test_dot_diagram() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("paths.dot");

    knight_cmd()
        .args(["--start", "a1", "--end", "h8", "--dot", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Graph saved as"));

    let dot = fs::read_to_string(&path).unwrap();
    assert!(dot.starts_with("digraph knight_paths {"));
    assert!(dot.contains("\"a1\""));
    assert!(dot.contains("\"h8\""));
}

#[test]
fn test_verbose_logs_to_stderr() {
    knight_cmd()
        .args(["--start", "a1", "--end", "b3", "--verbose"])
        .assert()
        .success()
        .stderr(predicate::str::contains("[verbose:search] Found 1 shortest path(s)"))
        .stdout(predicate::str::contains("[verbose").not());
}
