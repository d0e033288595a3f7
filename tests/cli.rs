//! Integration tests for the chronowavel binary.
//!
//! Every test points the binary at its own temporary data directory.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn cli(home: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_chronowavel"));
    cmd.arg("--data-dir").arg(home.path()).env_remove("CHRONOWAVEL_LOG");
    cmd
}

fn add_json(home: &TempDir, text: &str) -> serde_json::Value {
    let output = cli(home)
        .args(["-o", "json", "add", text])
        .output()
        .unwrap();
    assert!(output.status.success());
    serde_json::from_slice(&output.stdout).unwrap()
}

// ============ ADD ============

#[test]
fn test_add_writes_events_file() {
    let home = TempDir::new().unwrap();
    let event = add_json(&home, "Yoga today 7pm");

    assert_eq!(event["title"], "Yoga");
    assert_eq!(event["time"], "19:00");
    assert_eq!(event["duration"], 60);
    assert_eq!(event["color"], "#8B5CF6");
    assert!(event["id"].as_str().unwrap().starts_with("evt_"));

    let stored = fs::read_to_string(home.path().join("events.json")).unwrap();
    let stored: serde_json::Value = serde_json::from_str(&stored).unwrap();
    assert_eq!(stored.as_array().unwrap().len(), 1);
    assert!(stored[0]["createdAt"].is_string());
}

#[test]
fn test_add_parse_only_stores_nothing() {
    let home = TempDir::new().unwrap();
    cli(&home)
        .args(["-o", "json", "add", "--parse-only", "Gym", "session", "Friday", "6am"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"category\": \"health\""))
        .stdout(predicate::str::contains("\"fallback\": false"));

    assert!(!home.path().join("events.json").exists());
}

#[test]
fn test_add_strict_refuses_fallback() {
    let home = TempDir::new().unwrap();
    cli(&home)
        .args(["add", "--strict", "call sam"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Could not recognize"));
}

#[test]
fn test_add_without_text_is_usage_error() {
    let home = TempDir::new().unwrap();
    cli(&home).arg("add").assert().failure();
}

// ============ VIEWS ============

#[test]
fn test_today_lists_added_event() {
    let home = TempDir::new().unwrap();
    add_json(&home, "Team sync today 9am");
    add_json(&home, "Dentist tomorrow 8am");

    cli(&home)
        .args(["-o", "json", "today"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"count\": 1"))
        .stdout(predicate::str::contains("Team sync"));
}

#[test]
fn test_list_empty_pretty() {
    let home = TempDir::new().unwrap();
    cli(&home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No events"));
}

#[test]
fn test_month_json_has_six_weeks() {
    let home = TempDir::new().unwrap();
    let output = cli(&home)
        .args(["-o", "json", "month", "2026-02"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["month"], "February 2026");
    assert_eq!(value["days"].as_array().unwrap().len(), 42);
}

#[test]
fn test_month_rejects_bad_argument() {
    let home = TempDir::new().unwrap();
    cli(&home).args(["month", "feb"]).assert().code(2);
}

#[test]
fn test_agenda_rejects_huge_window() {
    let home = TempDir::new().unwrap();
    cli(&home)
        .args(["agenda", "--days", "4294967295"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--days"));
}

#[test]
fn test_upcoming_limit() {
    let home = TempDir::new().unwrap();
    add_json(&home, "Dentist tomorrow 9am");
    add_json(&home, "Review next week 9am");

    cli(&home)
        .args(["-o", "json", "upcoming", "--limit", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"count\": 1"))
        .stdout(predicate::str::contains("Dentist"));
}

// ============ SEARCH / EXPORT / IMPORT ============

#[test]
fn test_search_ignores_case() {
    let home = TempDir::new().unwrap();
    add_json(&home, "Dentist tomorrow 9am");
    add_json(&home, "Yoga today 7pm");

    cli(&home)
        .args(["-o", "json", "search", "DENTIST"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"count\": 1"))
        .stdout(predicate::str::contains("Dentist"))
        .stdout(predicate::str::contains("Yoga").not());
}

#[test]
fn test_export_import_between_calendars() {
    let source = TempDir::new().unwrap();
    let original = add_json(&source, "Yoga today 7pm");
    let backup = source.path().join("backup.json");

    cli(&source)
        .arg("export")
        .arg(&backup)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 events"));

    let target = TempDir::new().unwrap();
    cli(&target)
        .arg("import")
        .arg(&backup)
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 1 events"));

    let output = cli(&target).args(["export"]).output().unwrap();
    assert!(output.status.success());
    let stored: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(stored.as_array().unwrap().len(), 1);
    assert_eq!(stored[0]["title"], "Yoga");
    assert_eq!(stored[0]["time"], "19:00");
    assert_ne!(stored[0]["id"], original["id"]);
}

#[test]
fn test_import_invalid_file() {
    let home = TempDir::new().unwrap();
    let file = home.path().join("bad.json");
    fs::write(&file, "not json").unwrap();

    cli(&home)
        .arg("import")
        .arg(&file)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid import file"));
    assert!(!home.path().join("events.json").exists());
}

// ============ EDIT / DELETE ============

#[test]
fn test_edit_then_show() {
    let home = TempDir::new().unwrap();
    let event = add_json(&home, "Yoga today 7pm");
    let id = event["id"].as_str().unwrap();

    cli(&home)
        .args(["edit", id, "--time", "18:15", "--location", "Studio B"])
        .assert()
        .success();

    cli(&home)
        .args(["-o", "json", "show", id])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"time\": \"18:15\""))
        .stdout(predicate::str::contains("Studio B"))
        .stdout(predicate::str::contains("updatedAt"));
}

#[test]
fn test_delete_unknown_id() {
    let home = TempDir::new().unwrap();
    cli(&home)
        .args(["delete", "evt_missing"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Event not found"));
}

#[test]
fn test_clear_requires_yes() {
    let home = TempDir::new().unwrap();
    add_json(&home, "Yoga today 7pm");

    cli(&home).arg("clear").assert().code(2);
    assert!(home.path().join("events.json").exists());

    cli(&home).args(["clear", "--yes"]).assert().success();
    assert!(!home.path().join("events.json").exists());
}

// ============ VOICE / CHAT ============

#[test]
fn test_voice_from_stdin() {
    let home = TempDir::new().unwrap();
    cli(&home)
        .args(["-o", "json", "voice"])
        .write_stdin("dentist tomorrow 9am\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Created: Dentist"));
}

#[test]
fn test_voice_blank_transcript_fails() {
    let home = TempDir::new().unwrap();
    cli(&home)
        .arg("voice")
        .write_stdin("   ")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not understand"));
}

#[test]
fn test_chat_session() {
    let home = TempDir::new().unwrap();
    cli(&home)
        .arg("chat")
        .write_stdin("hi\nYoga today 7pm\nwhat is on today\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Event created!"))
        .stdout(predicate::str::contains("You have 1 event today"));
}

// ============ CONFIG ============

#[test]
fn test_config_file_is_honored() {
    let home = TempDir::new().unwrap();
    fs::write(
        home.path().join("config.yaml"),
        "general:\n  default_output: json\n",
    )
    .unwrap();

    cli(&home)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"total\": 0"));
}

#[test]
fn test_config_init_writes_defaults() {
    let home = TempDir::new().unwrap();
    cli(&home).args(["config", "--init"]).assert().success();

    let written = fs::read_to_string(home.path().join("config.yaml")).unwrap();
    assert!(written.contains("agenda_days: 7"));
}

#[test]
fn test_invalid_config_is_reported() {
    let home = TempDir::new().unwrap();
    fs::write(
        home.path().join("config.yaml"),
        "calendar:\n  first_day_of_week: 9\n",
    )
    .unwrap();

    cli(&home)
        .arg("today")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("first_day_of_week"));
}

#[test]
fn test_completions_bash() {
    let home = TempDir::new().unwrap();
    cli(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("chronowavel"));
}
