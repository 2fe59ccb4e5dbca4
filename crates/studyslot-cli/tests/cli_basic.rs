//! End-to-end tests for the studyslot binary against a throwaway data directory.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn studyslot(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("studyslot").unwrap();
    cmd.env("STUDYSLOT_HOME", home.path()).env_remove("STUDYSLOT_LOG");
    cmd
}

fn stdout_json(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&output).unwrap()
}

#[test]
fn roster_list_shows_demo_students() {
    let home = TempDir::new().unwrap();
    studyslot(&home)
        .args(["roster", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("16725193"))
        .stdout(predicate::str::contains("Farel Ahmad"));
}

#[test]
fn login_rejects_unknown_student() {
    let home = TempDir::new().unwrap();
    studyslot(&home)
        .args(["login", "00000000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("student id not found"));
}

#[test]
fn login_then_logout_updates_config() {
    let home = TempDir::new().unwrap();
    studyslot(&home)
        .args(["login", "16725193"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Farel Ahmad"));
    studyslot(&home)
        .args(["config", "get", "session.owner_id"])
        .assert()
        .success()
        .stdout("16725193\n");

    studyslot(&home).arg("logout").assert().success();
    studyslot(&home)
        .args(["config", "get", "session.owner_id"])
        .assert()
        .success()
        .stdout("\n");
}

#[test]
fn task_without_date_or_deadline_is_rejected() {
    let home = TempDir::new().unwrap();
    studyslot(&home)
        .args(["task", "add", "Essay"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));

    let queued = stdout_json(studyslot(&home).args(["task", "list"]));
    assert_eq!(queued.as_array().unwrap().len(), 0);
}

#[test]
fn generate_commits_queue_and_clears_it() {
    let home = TempDir::new().unwrap();
    studyslot(&home).args(["login", "16725193"]).assert().success();
    studyslot(&home)
        .args(["task", "add", "Linear algebra", "--priority", "4", "--difficulty", "1", "--date", "2026-10-19"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Task queued"));
    studyslot(&home)
        .args(["task", "add", "Lab report", "--category", "lab", "--difficulty", "2", "--deadline", "2026-10-19"])
        .assert()
        .success();

    studyslot(&home)
        .args(["schedule", "generate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Placed 2, failed 0"));

    let queued = stdout_json(studyslot(&home).args(["task", "list"]));
    assert!(queued.as_array().unwrap().is_empty());

    let committed = stdout_json(studyslot(&home).args(["schedule", "list"]));
    let tasks = committed.as_array().unwrap();
    assert_eq!(tasks.len(), 2);
    // weight 5 goes before weight 4
    assert_eq!(tasks[0]["title"], "Linear algebra");
    assert_eq!(tasks[0]["start"], "19:00");
    assert_eq!(tasks[0]["end"], "19:30");
    assert_eq!(tasks[1]["start"], "19:30");
    assert_eq!(tasks[1]["end"], "20:30");
    assert_eq!(tasks[1]["owner"], "16725193");
}

#[test]
fn delete_and_reassign_committed_tasks() {
    let home = TempDir::new().unwrap();
    for title in ["First", "Second"] {
        studyslot(&home)
            .args(["task", "add", title, "--difficulty", "2", "--date", "2026-10-19"])
            .assert()
            .success();
    }
    studyslot(&home).args(["schedule", "generate"]).assert().success();

    let committed = stdout_json(studyslot(&home).args(["schedule", "list"]));
    let first = committed[0]["id"].as_str().unwrap().to_string();
    let second = committed[1]["id"].as_str().unwrap().to_string();

    studyslot(&home)
        .args(["schedule", "delete", &first])
        .assert()
        .success()
        .stdout(predicate::str::contains("Task deleted"));
    studyslot(&home)
        .args(["schedule", "delete", &first])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));

    // third Monday of October 2026 is the 19th; 19:00 is free again
    let moved = studyslot(&home)
        .args(["schedule", "reassign", &second, "--weekday", "monday", "--week", "3", "--month", "10", "--year", "2026"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let moved = String::from_utf8(moved).unwrap();
    assert!(moved.contains("\"date\": \"2026-10-19\""));
    assert!(moved.contains("\"start\": \"19:00\""));
}

#[test]
fn reassign_requires_a_target_date() {
    let home = TempDir::new().unwrap();
    studyslot(&home)
        .args(["schedule", "reassign", "abcd1234"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("target date"));
}

#[test]
fn export_csv_to_file() {
    let home = TempDir::new().unwrap();
    studyslot(&home)
        .args(["task", "add", "Quiz, chapter 3", "--date", "2026-10-20"])
        .assert()
        .success();
    studyslot(&home).args(["schedule", "generate"]).assert().success();

    let out = home.path().join("schedule.csv");
    studyslot(&home)
        .args(["export", "csv", "--output"])
        .arg(&out)
        .assert()
        .success();

    let csv = std::fs::read_to_string(&out).unwrap();
    let mut lines = csv.lines();
    assert_eq!(lines.next(), Some("id,title,category,date,start,end,duration_minutes,owner"));
    let row = lines.next().unwrap();
    assert!(row.contains("\"Quiz, chapter 3\",assignment,2026-10-20,19:00,20:00,60,"));
}

#[test]
fn config_set_rejects_inverted_window() {
    let home = TempDir::new().unwrap();
    studyslot(&home)
        .args(["config", "set", "scheduler.window_end", "18:00"])
        .assert()
        .failure();
    studyslot(&home)
        .args(["config", "get", "scheduler.window_end"])
        .assert()
        .success()
        .stdout("22:00\n");

    studyslot(&home)
        .args(["config", "set", "scheduler.max_days_ahead", "7"])
        .assert()
        .success();
    studyslot(&home)
        .args(["config", "get", "scheduler.max_days_ahead"])
        .assert()
        .success()
        .stdout("7\n");
}

#[test]
fn lookahead_beyond_a_year_is_rejected() {
    let home = TempDir::new().unwrap();
    studyslot(&home)
        .args(["schedule", "generate", "--max-days", "1000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));
    studyslot(&home)
        .args(["config", "set", "scheduler.max_days_ahead", "366"])
        .assert()
        .failure();
    studyslot(&home)
        .args(["config", "get", "scheduler.max_days_ahead"])
        .assert()
        .success()
        .stdout("60\n");
}

#[test]
fn week_without_weekday_is_a_usage_error() {
    let home = TempDir::new().unwrap();
    studyslot(&home)
        .args(["task", "add", "Essay", "--date", "2026-10-19", "--week", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--weekday"));

    let queued = stdout_json(studyslot(&home).args(["task", "list"]));
    assert!(queued.as_array().unwrap().is_empty());
}
