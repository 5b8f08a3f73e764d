use assert_cmd::Command;
use chrono::Utc;
use predicates::prelude::*;
use tempfile::TempDir;

use focuspot::config::Paths;
use focuspot::features::focus::{SessionRecord, SessionStore};
use focuspot::storage::Database;

fn focuspot(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("focuspot").unwrap();
    cmd.env("FOCUSPOT_HOME", home.path()).env_remove("FOCUSPOT_LOG");
    cmd
}

fn seed(home: &TempDir, sessions: &[(u64, &str)]) {
    let paths = Paths::with_root(home.path().to_path_buf());
    paths.ensure_dirs().unwrap();
    let mut store = SessionStore::new(Database::open_at(&paths.database).unwrap());
    for (i, (length_sec, label)) in sessions.iter().enumerate() {
        let id = i64::try_from(i).unwrap() + 1;
        store
            .prepend(SessionRecord::new(id, *length_sec, label, Utc::now()))
            .unwrap();
    }
}

#[test]
fn test_history_empty() {
    let home = TempDir::new().unwrap();
    focuspot(&home)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("No sessions yet!"));
}

#[test]
fn test_history_lists_sessions() {
    let home = TempDir::new().unwrap();
    seed(&home, &[(90, "Reading"), (3600, "Writing")]);

    focuspot(&home)
        .args(["history", "--output", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"count\": 2"))
        .stdout(predicate::str::contains("\"lengthSec\": 3600"))
        .stdout(predicate::str::contains("\"label\": \"Writing\""));
}

#[test]
fn test_report_json() {
    let home = TempDir::new().unwrap();
    seed(&home, &[(60, "Focus"), (120, "Focus")]);

    let output = focuspot(&home)
        .args(["report", "-o", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["total_sec"], 180);
    assert_eq!(report["session_count"], 2);
    assert_eq!(report["daily"].as_array().unwrap().len(), 1);
}

#[test]
fn test_report_pretty() {
    let home = TempDir::new().unwrap();
    seed(&home, &[(3600, "Focus")]);

    focuspot(&home)
        .arg("report")
        .env("NO_COLOR", "1")
        .assert()
        .success()
        .stdout(predicate::str::contains("Focus Report"))
        .stdout(predicate::str::contains("This Week"))
        .stdout(predicate::str::contains("1h 0m"));
}

#[test]
fn test_clear_requires_force() {
    let home = TempDir::new().unwrap();
    seed(&home, &[(60, "Focus")]);

    focuspot(&home)
        .arg("clear")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    focuspot(&home)
        .args(["clear", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cleared"));

    focuspot(&home)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("No sessions yet!"));
}

#[test]
fn test_corrupt_history_reads_as_empty() {
    let home = TempDir::new().unwrap();
    let paths = Paths::with_root(home.path().to_path_buf());
    paths.ensure_dirs().unwrap();
    {
        use focuspot::storage::KeyValueStore;
        let mut db = Database::open_at(&paths.database).unwrap();
        db.set("sessions", "definitely not json").unwrap();
    }

    focuspot(&home)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("No sessions yet!"));
}

#[test]
fn test_invalid_config_is_reported() {
    let home = TempDir::new().unwrap();
    std::fs::write(home.path().join("config.yaml"), "timer: [broken").unwrap();

    focuspot(&home)
        .arg("history")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config file"));
}

#[test]
fn test_completions() {
    let home = TempDir::new().unwrap();
    focuspot(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("focuspot"));
}
