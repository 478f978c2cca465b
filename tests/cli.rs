#![allow(deprecated)]

#[allow(unused_imports)]
use assert_cmd::cargo::CommandCargoExt;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const NOW: &str = "2025-05-18 12:00:00";

fn cmd() -> assert_cmd::Command {
    let mut c = assert_cmd::Command::cargo_bin("sprout_notes").unwrap();
    c.env("SPROUT_NOW", NOW)
        .env("NO_COLOR", "1")
        .env_remove("SPROUT_REFERENCE_DATE")
        .env_remove("SPROUT_LOG");
    c
}

fn note(temp: &TempDir, body: &str) -> PathBuf {
    let path = temp.path().join("grow.md");
    fs::write(&path, body).unwrap();
    path
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).expect("note file")
}

#[test]
fn stats_creates_then_reports_up_to_date() {
    let temp = TempDir::new().unwrap();
    let path = note(&temp, "Sprouted: 1/1/25\n");

    cmd()
        .args(["stats", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Plant stats section created."));

    assert_eq!(
        read(&path),
        "## Plant Stats\n\
        <sub>Last updated: 2025-05-18 12:00:00</sub>\n\
        Day 137 Week: #20 (5/18/25 - 5/24/25)\n\
        \n\
        Sprouted: 1/1/25\n"
    );

    cmd()
        .args(["stats", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("already up to date"));
}

#[test]
fn stats_update_keeps_following_heading() {
    let temp = TempDir::new().unwrap();
    let body = "## Plant Stats\n\
        <sub>Last updated: 2025-05-01 08:00:00</sub>\n\
        Day 1 Week: #1 (4/27/25 - 5/3/25)\n\
        ## Other Heading\n\
        - basil Sprouted: 3/1/25\n\
        \n\
        free text\n";
    let path = note(&temp, body);

    cmd()
        .args(["stats", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Plant stats section updated."));

    let after = read(&path);
    let refreshed = "Day 78 Week: #12 (5/18/25 - 5/24/25)\n## Other Heading\n";
    assert!(after.contains(refreshed));
    let tail = "## Other Heading\n- basil Sprouted: 3/1/25\n\nfree text\n";
    assert!(after.ends_with(tail));
}

#[test]
fn stats_warns_on_bad_dates_without_failing() {
    let temp = TempDir::new().unwrap();
    let path = note(&temp, "Sprouted: 2/30/24\nSprouted: 5/11/25\n");

    cmd()
        .args(["stats", path.to_str().unwrap()])
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "warning: Invalid or ambiguous date encountered: 2/30/24",
        ));

    assert!(read(&path).contains("Day 7 Week: #2"));
}

#[test]
fn stats_on_empty_note() {
    let temp = TempDir::new().unwrap();
    let path = note(&temp, "");

    cmd()
        .args(["stats", path.to_str().unwrap()])
        .assert()
        .success()
        .stderr(predicate::str::contains("warning").not());

    assert_eq!(
        read(&path),
        "## Plant Stats\n\
        <sub>Last updated: 2025-05-18 12:00:00</sub>\n\
        Day 0 Week: #1 (5/18/25 - 5/24/25)\n"
    );
}

#[test]
fn stats_dry_run_leaves_file_alone() {
    let temp = TempDir::new().unwrap();
    let path = note(&temp, "Sprouted: 5/18/25\n");

    cmd()
        .args(["stats", path.to_str().unwrap(), "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("## Plant Stats\n"))
        .stderr(predicate::str::contains("Plant stats section created."));

    assert_eq!(read(&path), "Sprouted: 5/18/25\n");
}

#[test]
fn annotate_with_fixed_reference_is_idempotent() {
    let temp = TempDir::new().unwrap();
    let path = note(&temp, "Sprouted: 3/1/25\n");

    cmd()
        .args(["annotate", path.to_str().unwrap(), "--on", "5/18/25"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Annotated 1"));
    assert_eq!(read(&path), "Sprouted: 3/1/25 Day#78\n");

    cmd()
        .args(["annotate", path.to_str().unwrap(), "--on", "5/18/25"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to annotate."));
    assert_eq!(read(&path), "Sprouted: 3/1/25 Day#78\n");
}

#[test]
fn annotate_reference_from_env() {
    let temp = TempDir::new().unwrap();
    let path = note(&temp, "a Sprouted: 5/1/25 b\n");

    cmd()
        .env("SPROUT_REFERENCE_DATE", "5/11/25")
        .args(["annotate", path.to_str().unwrap()])
        .assert()
        .success();
    assert_eq!(read(&path), "a Sprouted: 5/1/25 Day#10 b\n");
}

#[test]
fn annotate_rejects_bad_reference() {
    let temp = TempDir::new().unwrap();
    let path = note(&temp, "Sprouted: 3/1/25\n");

    cmd()
        .args(["annotate", path.to_str().unwrap(), "--on", "5/18/2025"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("5/18/2025"));
    assert_eq!(read(&path), "Sprouted: 3/1/25\n");
}

#[test]
fn log_inserts_two_lines_below_trigger() {
    let temp = TempDir::new().unwrap();
    let path = note(&temp, "# Day\n```button\nname Log\n```\nnotes\n");

    cmd()
        .args(["log", path.to_str().unwrap(), "--line", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged at 12:00:00"));

    assert_eq!(
        read(&path),
        "# Day\n```button\nname Log\n🪵 Logged at: 12:00:00\n```\nnotes\n"
    );
}

#[test]
fn log_without_line_aborts_untouched() {
    let temp = TempDir::new().unwrap();
    let path = note(&temp, "a\nb\n");

    cmd()
        .args(["log", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot run without a trigger line"));
    assert_eq!(read(&path), "a\nb\n");
}

#[test]
fn missing_file_is_reported() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("absent.md");

    cmd()
        .args(["stats", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Cannot run without an existing note file",
        ));
    assert!(!path.exists());

    cmd()
        .args(["stats"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Cannot run without an active note file",
        ));
}

#[test]
fn scan_lists_entries_sorted() {
    let temp = TempDir::new().unwrap();
    let path =
        note(&temp, "- pepper Sprouted: 4/1/25\n- basil Sprouted: 3/1/25\n");

    let out = cmd()
        .args(["scan", path.to_str().unwrap()])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let out = String::from_utf8_lossy(&out);
    let lines: Vec<&str> = out.lines().collect();
    assert!(lines[0].starts_with("Date"));
    assert!(lines[2].contains("3/1/25"));
    assert!(lines[2].contains("78") && lines[2].contains("#12"));
    assert!(lines[3].contains("4/1/25") && lines[3].contains("47"));
}

#[test]
fn unknown_command_and_flag_fail() {
    cmd()
        .args(["prune"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown command"));
    cmd()
        .args(["stats", "x.md", "--on", "1/1/25"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown flag for stats"));
}

#[test]
fn alias_binary_runs() {
    let mut c = assert_cmd::Command::cargo_bin("sprout").unwrap();
    c.arg("help")
        .assert()
        .success()
        .stdout(predicate::str::contains("sprout stats"));
}
