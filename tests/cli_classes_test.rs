//! Integration tests for class offerings and enrollment management.

use assert_cmd::Command;
use predicates::prelude::*;

fn gr() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_gr"));
    cmd.args(["--source", "mock"]);
    cmd
}

#[test]
fn test_classes_list_shows_fill() {
    gr().args(["classes", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"total\":2"))
        .stdout(predicate::str::contains("\"percent\":67"));
}

#[test]
fn test_over_enrolled_bar_clamps_but_text_keeps_counts() {
    gr().args(["-H", "classes", "list", "--search", "intermediate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[##########] 14 / 12 (117%)"));
}

#[test]
fn test_classes_show_detail() {
    gr().args(["-H", "classes", "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Beginner (#1)"))
        .stdout(predicate::str::contains("Jane Smith"))
        .stdout(predicate::str::contains("8 / 12 (67%)"));
}

#[test]
fn test_roster_excludes_admin_rows() {
    gr().args(["classes", "roster", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"total\":2"))
        .stdout(predicate::str::contains("Marcus").not());
}

#[test]
fn test_enroll_batch_tally_and_single_reload() {
    // Personnel 4 and 5 exist; 77 does not
    gr().args([
        "classes", "enroll", "1", "--student", "4", "--student", "5", "--student", "77",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("\"succeeded\":2"))
    .stdout(predicate::str::contains("\"failed\":1"))
    .stdout(predicate::str::contains("\"total_after_reload\":4"));
}

#[test]
fn test_drop_requires_yes() {
    gr().args(["-H", "classes", "drop", "101"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("pass --yes to confirm"));
}

#[test]
fn test_set_status_accepts_known_values_only() {
    gr().args(["classes", "set-status", "101", "Completed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("set to Completed"));

    gr().args(["-H", "classes", "set-status", "101", "Expelled"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown enrollment status"));
}

#[test]
fn test_classes_create_defaults_open() {
    gr().args([
        "classes",
        "create",
        "--level",
        "2",
        "--start",
        "2025-03-03",
        "--end",
        "2025-04-07",
        "--room",
        "Studio C",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("\"total_after_reload\":3"))
    .stdout(predicate::str::contains("\"Status\":\"Open\""));
}
