//! CLI end-to-end tests that invoke the compiled `csspipe` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

fn csspipe(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("csspipe").unwrap();
    cmd.current_dir(dir.path()).env_remove("CSSPIPE_ENV").env_remove("RUST_LOG");
    cmd
}

fn plugin_names(output: &[u8]) -> Vec<String> {
    let value: Value = serde_json::from_slice(output).unwrap();
    value["plugins"]
        .as_array()
        .unwrap()
        .iter()
        .map(|step| step["name"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn test_help_exits_zero() {
    let temp = TempDir::new().unwrap();
    csspipe(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("resolve"));
}

#[test]
fn test_resolve_plain_file() {
    let temp = TempDir::new().unwrap();
    csspipe(&temp)
        .args(["resolve", "example.css"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. autoprefixer"))
        .stdout(predicate::str::contains("2. cssnano"));
}

#[test]
fn test_resolve_json_review_app_legacy() {
    let temp = TempDir::new().unwrap();
    let output = csspipe(&temp)
        .args(["resolve", "app/assets/scss/app-ie8.css", "--json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(
        plugin_names(&output.stdout),
        vec![
            "autoprefixer",
            "postcss-pseudo-classes",
            "postcss-unmq",
            "postcss-unopacity",
            "postcss-color-rgba-fallback",
            "cssnano",
        ]
    );
}

#[test]
fn test_resolve_env_from_environment_variable() {
    let temp = TempDir::new().unwrap();
    let output = csspipe(&temp)
        .env("CSSPIPE_ENV", "staging")
        .args(["resolve", "example.css", "--json"])
        .output()
        .unwrap();

    let value: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["env"], "staging");
}

#[test]
fn test_resolve_from_stdin() {
    let temp = TempDir::new().unwrap();
    let output = csspipe(&temp)
        .args(["resolve", "--stdin", "--json"])
        .write_stdin(r#"{ "env": "production", "file": { "path": "app/views/full-page-examples/search/styles.css" } }"#)
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(plugin_names(&output.stdout), vec!["autoprefixer", "cssnano"]);
}

#[test]
fn test_resolve_from_stdin_ignores_environment_variable() {
    let temp = TempDir::new().unwrap();
    let output = csspipe(&temp)
        .env("CSSPIPE_ENV", "staging")
        .args(["resolve", "--stdin", "--json"])
        .write_stdin(r#"{ "env": "production", "file": "example.css" }"#)
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["env"], "production");
    assert_eq!(plugin_names(&output.stdout), vec!["autoprefixer", "cssnano"]);
}

#[test]
fn test_resolve_bad_stdin_fails() {
    let temp = TempDir::new().unwrap();
    csspipe(&temp)
        .args(["resolve", "--stdin"])
        .write_stdin("not json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid JSON input"));
}

#[test]
fn test_resolve_explain_json() {
    let temp = TempDir::new().unwrap();
    let output = csspipe(&temp)
        .args(["resolve", "app/views/full-page-examples/search/styles.css", "--json", "--explain"])
        .output()
        .unwrap();

    let value: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["matched"]["in_app"], true);
    assert_eq!(value["matched"]["excluded"], true);
    assert_eq!(value["matched"]["legacy"], false);
}

#[test]
fn test_resolve_uses_config_in_working_directory() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("csspipe.toml"),
        "app_subtree = \"review\"\nexcluded_subtrees = []\n",
    )
    .unwrap();

    let output = csspipe(&temp)
        .args(["resolve", "review/styles.css", "--json"])
        .output()
        .unwrap();

    assert_eq!(
        plugin_names(&output.stdout),
        vec!["autoprefixer", "postcss-pseudo-classes", "cssnano"]
    );
}

#[test]
fn test_resolve_with_root() {
    let temp = TempDir::new().unwrap();
    let output = csspipe(&temp)
        .args([
            "resolve",
            "/srv/frontend/app/assets/scss/app.css",
            "--root",
            "/srv/frontend",
            "--json",
        ])
        .output()
        .unwrap();

    assert_eq!(
        plugin_names(&output.stdout),
        vec!["autoprefixer", "postcss-pseudo-classes", "cssnano"]
    );
}

#[test]
fn test_invalid_config_fails_with_message() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("rules.toml"),
        "excluded_subtrees = [\"elsewhere\"]\n",
    )
    .unwrap();

    csspipe(&temp)
        .args(["resolve", "example.css", "--config", "rules.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("elsewhere"));
}

#[test]
fn test_rules_json_shows_defaults() {
    let temp = TempDir::new().unwrap();
    let output = csspipe(&temp).args(["rules", "--json"]).output().unwrap();

    let value: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["app_subtree"], "app");
    assert_eq!(value["legacy_marker"], "ie8");
}

#[test]
fn test_bootstrap_runs_all_stages() {
    let temp = TempDir::new().unwrap();
    let output = csspipe(&temp)
        .args([
            "bootstrap",
            "--install",
            "rustc --version",
            "--server",
            "rustc --version",
            "--launch",
            "rustc --version",
            "--max-workers",
            "2",
            "--json",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["completed"], serde_json::json!(["install", "server", "launch"]));
    assert_eq!(value["listener_threshold"], 3);
}
