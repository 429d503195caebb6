//! Integration tests for the crew directory: grouped views, batch adds
//! with partial failure, and confirmed removals.

use assert_cmd::Command;
use predicates::prelude::*;

fn gr() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_gr"));
    cmd.args(["--source", "mock"]);
    cmd
}

#[test]
fn test_crew_list_stats() {
    gr().args(["-H", "crew", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("4 of 4 assignments shown"))
        .stdout(predicate::str::contains(
            "4 crew members | 2 duty types | 2 shows supported",
        ));
}

#[test]
fn test_crew_duty_facet() {
    gr().args(["crew", "list", "--duty", "Lighting"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"matched\":2"));
}

#[test]
fn test_crew_by_duty_groups_in_store_order() {
    let output = gr()
        .args(["-H", "crew", "list", "--by-duty"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8(output).unwrap();

    let lighting = text.find("Lighting (2 assignments)").unwrap();
    let sound = text.find("Sound (1 assignment)").unwrap();
    let unassigned = text.find("Unassigned (1 assignment)").unwrap();
    assert!(lighting < sound && sound < unassigned);
}

#[test]
fn test_crew_by_duty_drops_empty_groups() {
    gr().args(["-H", "crew", "list", "--by-duty", "--search", "jane"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sound"))
        .stdout(predicate::str::contains("Lighting").not());
}

#[test]
fn test_crew_batch_add_tallies_partial_failure() {
    // Personnel 5 exists; 42 and 43 do not
    gr().args([
        "crew", "add", "--person", "5", "--person", "42", "--person", "43",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("\"succeeded\":1"))
    .stdout(predicate::str::contains("\"failed\":2"))
    .stdout(predicate::str::contains("\"total_after_reload\":5"));
}

#[test]
fn test_crew_batch_add_human_summary() {
    gr().args(["-H", "crew", "add", "--person", "5", "--person", "42"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 crew member added. 1 failed to add."));
}

#[test]
fn test_crew_remove_requires_yes() {
    gr().args(["-H", "crew", "remove", "11"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("pass --yes to confirm"));
}

#[test]
fn test_crew_remove_with_yes() {
    gr().args(["crew", "remove", "11", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"total_after_reload\":3"));
}

#[test]
fn test_crew_remove_unknown_id_reports_backend_error() {
    gr().args(["-H", "crew", "remove", "99", "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Crew member not found: 99"));
}
