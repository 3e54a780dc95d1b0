use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Command pointed at a throwaway config directory, so tests never touch
/// the developer's real notes.
#[allow(deprecated)]
fn panedeck(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("panedeck").unwrap();
    cmd.env("PANEDECK_CONFIG_DIR", config_dir.path());
    cmd
}

#[test]
fn test_help_flag() {
    let tmp = TempDir::new().unwrap();
    panedeck(&tmp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("mode-aware terminal panes"));
}

#[test]
fn test_version_flag() {
    let tmp = TempDir::new().unwrap();
    panedeck(&tmp)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("panedeck 0.1.0"));
}

#[test]
fn test_help_subcommand() {
    let tmp = TempDir::new().unwrap();
    panedeck(&tmp)
        .arg("help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Usage")
                .and(predicate::str::contains("reset"))
                .and(predicate::str::contains("debug"))
                .and(predicate::str::contains("init")),
        );
}

#[test]
fn test_debug_subcommand() {
    let tmp = TempDir::new().unwrap();
    panedeck(&tmp)
        .arg("debug")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Config directory")
                .and(predicate::str::contains(tmp.path().to_string_lossy()))
                .and(predicate::str::contains("data.json"))
                .and(predicate::str::contains("Tick rate: 250ms")),
        );
}

#[test]
fn test_reset_removes_saved_notes() {
    let tmp = TempDir::new().unwrap();
    let data_file = tmp.path().join("data.json");
    std::fs::write(&data_file, r#"{"title":"Notes","notes":["x"]}"#).unwrap();

    panedeck(&tmp)
        .arg("reset")
        .assert()
        .success()
        .stdout(predicate::str::contains("reset"));
    assert!(!data_file.exists());

    // Second reset with nothing to delete also succeeds
    panedeck(&tmp).arg("reset").assert().success();
}

#[test]
fn test_init_writes_config_once() {
    let tmp = TempDir::new().unwrap();

    panedeck(&tmp)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote default config"));
    assert!(tmp.path().join("config.json").exists());

    panedeck(&tmp)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn test_unknown_subcommand() {
    let tmp = TempDir::new().unwrap();
    panedeck(&tmp)
        .arg("foobar")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}
