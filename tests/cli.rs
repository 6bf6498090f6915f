use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Data dir whose config points at a closed local port
fn offline_dir(transcript: bool) -> TempDir {
    let dir = TempDir::new().unwrap();
    let config = format!(
        r#"{{"api_base_url": "http://127.0.0.1:9", "request_timeout_secs": 2, "transcript_enabled": {}}}"#,
        transcript
    );
    std::fs::write(dir.path().join("config.json"), config).unwrap();
    dir
}

fn restdesk(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("restdesk").unwrap();
    cmd.env("RESTDESK_DATA_DIR", dir.path());
    cmd
}

#[test]
fn help_lists_commands() {
    let dir = offline_dir(false);
    restdesk(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("wizard"))
        .stdout(predicate::str::contains("post"));
}

#[test]
fn config_shows_settings() {
    let dir = offline_dir(false);
    restdesk(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("http://127.0.0.1:9"))
        .stdout(predicate::str::contains("Request timeout:    2s"));
}

#[test]
fn config_init_writes_defaults() {
    let dir = TempDir::new().unwrap();
    restdesk(&dir)
        .args(["config", "--init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("jsonplaceholder.typicode.com"));
    assert!(dir.path().join("config.json").exists());
}

#[test]
fn short_title_is_rejected_locally() {
    let dir = offline_dir(false);
    restdesk(&dir)
        .args(["post", "create", "--title", "Hi", "--body", "long enough body"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Title must be at least 3 characters"));
}

#[test]
fn taken_username_is_rejected_locally() {
    let dir = offline_dir(false);
    restdesk(&dir)
        .args([
            "user", "create", "--name", "Sam", "--username", "samantha", "--email",
            "sam@example.com",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("has been used"));
}

#[test]
fn unreachable_api_is_reported() {
    let dir = offline_dir(false);
    restdesk(&dir)
        .args(["post", "get", "1"])
        .assert()
        .failure();
}

#[test]
fn log_without_transcript_prints_hint() {
    let dir = offline_dir(false);
    restdesk(&dir)
        .arg("log")
        .assert()
        .success()
        .stdout(predicate::str::contains("No transcript"));
}

#[test]
fn transcript_records_failed_validation() {
    let dir = offline_dir(true);
    restdesk(&dir)
        .args(["post", "create", "--title", "Hi", "--body", "long enough body"])
        .assert()
        .failure();

    restdesk(&dir)
        .args(["log", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Timestamp,Type,Kind"))
        .stdout(predicate::str::contains("Title must be at least 3 characters"));
}
