#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Create a temp directory with a two-creature roster file.
fn test_roster() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("roster.json"),
        r#"{
  "creatures": [
    { "species": "unicorn", "name": "Comet", "description": "Fast and proud", "cost": 300 },
    { "species": "fairy", "name": "Bramble", "cost": 40, "body": [200, 180, 120], "size": [32, 32] }
  ]
}
"#,
    )
    .unwrap();
    dir
}

fn glimmer() -> Command {
    Command::cargo_bin("glimmer").unwrap()
}

// ---------------------------------------------------------------------------
// init
// ---------------------------------------------------------------------------

#[test]
fn init_writes_starter_roster() {
    let dir = TempDir::new().unwrap();
    glimmer()
        .args(["init"])
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Created roster"));

    let text = fs::read_to_string(dir.path().join("roster.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(json["creatures"].as_array().unwrap().len(), 4);
    assert_eq!(json["creatures"][0]["name"], "Stardust");
}

#[test]
fn init_refuses_to_overwrite() {
    let dir = test_roster();
    let path = dir.path().join("roster.json");
    glimmer()
        .args(["init", "-f", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    assert!(fs::read_to_string(&path).unwrap().contains("Comet"));
}

// ---------------------------------------------------------------------------
// roster
// ---------------------------------------------------------------------------

#[test]
fn roster_defaults_to_starter() {
    glimmer()
        .args(["roster"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Stardust")
                .and(predicate::str::contains("Moonbeam"))
                .and(predicate::str::contains("Pip"))
                .and(predicate::str::contains("Thistle")),
        );
}

#[test]
fn roster_reads_file() {
    let dir = test_roster();
    glimmer()
        .args(["roster", "-f", dir.path().join("roster.json").to_str().unwrap()])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Comet")
                .and(predicate::str::contains("Bramble"))
                .and(predicate::str::contains("Stardust").not()),
        );
}

#[test]
fn roster_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    glimmer()
        .args(["roster", "-f", dir.path().join("nope.json").to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read roster"));
}

#[test]
fn roster_invalid_json_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.json");
    fs::write(&path, "{ \"creatures\": [ { \"species\": \"dragon\" } ] }").unwrap();
    glimmer()
        .args(["roster", "-f", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid roster"));
}

// ---------------------------------------------------------------------------
// simulate
// ---------------------------------------------------------------------------

#[test]
fn simulate_reports_every_creature() {
    glimmer()
        .args(["simulate", "--seconds", "10", "--fps", "10"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("100 frames")
                .and(predicate::str::contains("4 creatures simulated"))
                .and(predicate::str::contains("Creature Status"))
                .and(predicate::str::contains("Stardust"))
                .and(predicate::str::contains("Thistle"))
                // All needs decay alike, so every creature sits at 73.75.
                .and(predicate::str::contains("74")),
        );
}

#[test]
fn simulate_feed_is_reported() {
    glimmer()
        .args([
            "simulate",
            "--seconds",
            "10",
            "--fps",
            "10",
            "--feed",
            "stardust",
        ])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Notable Events")
                .and(predicate::str::contains("Stardust: feed lowers food 40 -> 25")),
        );
}

#[test]
fn simulate_unknown_feed_target_fails() {
    glimmer()
        .args(["simulate", "--seconds", "1", "--feed", "Nobody"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no creature named"));
}

#[test]
fn simulate_verbose_shows_movement() {
    glimmer()
        .args(["simulate", "--seconds", "2", "--fps", "30", "--verbose"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Event Log")
                .and(predicate::str::contains("wanders toward"))
                .and(predicate::str::contains("arrives")),
        );
}

#[test]
fn simulate_urgent_needs_are_notable() {
    glimmer()
        .args(["simulate", "--seconds", "25", "--fps", "10"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("URGENT")
                .and(predicate::str::contains("urgently needs food")),
        );
}

#[test]
fn simulate_is_deterministic() {
    let run = || {
        glimmer()
            .args(["simulate", "--seconds", "5", "--seed", "9"])
            .output()
            .unwrap()
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn simulate_rejects_zero_fps() {
    glimmer()
        .args(["simulate", "--fps", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("fps must be positive"));
}

#[test]
fn simulate_uses_roster_file() {
    let dir = test_roster();
    glimmer()
        .args([
            "simulate",
            "--seconds",
            "3",
            "--width",
            "320",
            "--height",
            "240",
            "-f",
            dir.path().join("roster.json").to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("arena 320x240")
                .and(predicate::str::contains("2 creatures simulated"))
                .and(predicate::str::contains("Bramble")),
        );
}

// ---------------------------------------------------------------------------
// adopt
// ---------------------------------------------------------------------------

#[test]
fn adopt_spends_currency() {
    glimmer()
        .args(["adopt", "pip"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Pip the fairy for 80")
                .and(predicate::str::contains("Currency:   420"))
                .and(predicate::str::contains("Reputation: 1")),
        );
}

#[test]
fn adopt_without_funds_fails() {
    let dir = test_roster();
    glimmer()
        .args([
            "adopt",
            "Comet",
            "--currency",
            "100",
            "-f",
            dir.path().join("roster.json").to_str().unwrap(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("insufficient funds: need 300, have 100"));
}

#[test]
fn adopt_unknown_name_fails() {
    glimmer()
        .args(["adopt", "Unicornicus"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no creature named 'Unicornicus'"));
}

// ---------------------------------------------------------------------------
// misc
// ---------------------------------------------------------------------------

#[test]
fn version_flag() {
    glimmer()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("glimmer"));
}

#[test]
fn help_lists_commands() {
    glimmer().arg("--help").assert().success().stdout(
        predicate::str::contains("init")
            .and(predicate::str::contains("roster"))
            .and(predicate::str::contains("simulate"))
            .and(predicate::str::contains("adopt")),
    );
}
