#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::path::Path;
use std::process::{Command, Output};

use serde_json::Value;
use tempfile::TempDir;

fn run(dir: &Path, args: &[&str]) -> Output {
    let cli_bin = env!("CARGO_BIN_EXE_landing-cli");
    Command::new(cli_bin)
        .current_dir(dir)
        .env("LANDING_LOG_PROFILE", "test")
        .args(args)
        .output()
        .expect("Failed to run CLI")
}

fn stdout_json(output: &Output) -> Value {
    assert!(
        output.status.success(),
        "CLI failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout is not JSON")
}

#[test]
fn test_seed_then_show_home() {
    let temp = TempDir::new().unwrap();

    let page = stdout_json(&run(temp.path(), &["seed"]));
    assert_eq!(page["slug"], "home");

    let shown = stdout_json(&run(temp.path(), &["show", "--no-seed"]));
    assert_eq!(shown["page"]["id"], page["id"]);
    assert_eq!(shown["hero_sections"].as_array().unwrap().len(), 1);
    assert_eq!(shown["features"].as_array().unwrap().len(), 6);
    assert_eq!(shown["cta_sections"].as_array().unwrap().len(), 1);
}

#[test]
fn test_show_generates_home_on_first_request() {
    let temp = TempDir::new().unwrap();

    let shown = stdout_json(&run(temp.path(), &["show"]));
    assert_eq!(shown["page"]["title"], "Modern Landing Page");
    assert!(temp.path().join(".landing/landing.db").exists());
}

#[test]
fn test_show_partition_caps_featured() {
    let temp = TempDir::new().unwrap();
    run(temp.path(), &["seed"]);

    let shown = stdout_json(&run(temp.path(), &["show", "--partition"]));
    assert_eq!(shown["featured"].as_array().unwrap().len(), 3);
    assert_eq!(shown["others"].as_array().unwrap().len(), 3);
    assert_eq!(shown["featured"][0]["title"], "Lightning Fast Performance");
}

#[test]
fn test_show_missing_page_fails() {
    let temp = TempDir::new().unwrap();

    let output = run(temp.path(), &["show", "pricing"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error:"), "stderr: {}", stderr);
    assert!(stderr.contains("pricing"), "stderr: {}", stderr);
}

#[test]
fn test_second_seed_fails() {
    let temp = TempDir::new().unwrap();
    assert!(run(temp.path(), &["seed"]).status.success());

    let output = run(temp.path(), &["seed"]);
    assert!(!output.status.success());
}

#[test]
fn test_db_flag_overrides_config() {
    let temp = TempDir::new().unwrap();
    let db = temp.path().join("custom.db");
    let db_arg = db.to_str().unwrap();

    stdout_json(&run(temp.path(), &["--db", db_arg, "seed"]));
    assert!(db.exists());
    assert!(!temp.path().join(".landing/landing.db").exists());
}

#[test]
fn test_config_file_sets_home_slug() {
    let temp = TempDir::new().unwrap();
    std::fs::write(
        temp.path().join("landing.toml"),
        "home_slug = \"start\"\nseed_when_missing = false\n",
    )
    .unwrap();

    // "start" is not the sample slug and seeding is off
    let output = run(temp.path(), &["show"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("start"));
}

#[test]
fn test_theme_create_then_get() {
    let temp = TempDir::new().unwrap();

    let created = stdout_json(&run(
        temp.path(),
        &[
            "theme",
            "create",
            "default",
            "--primary",
            "#1e293b",
            "--secondary",
            "#64748b",
            "--accent",
            "#3b82f6",
        ],
    ));
    assert_eq!(created["name"], "default");

    let fetched = stdout_json(&run(temp.path(), &["theme", "get"]));
    assert_eq!(fetched["id"], created["id"]);
    assert_eq!(fetched["accent_color"], "#3b82f6");
}

#[test]
fn test_theme_get_unknown_fails() {
    let temp = TempDir::new().unwrap();

    let output = run(temp.path(), &["theme", "get", "midnight"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("midnight"));
}
