use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

mod common;

#[test]
fn test_cli_lists_sample_booking() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("catering"));

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "id,customer,event_date,event_time,package,guests,base,additional,total,status",
        ))
        .stdout(predicate::str::contains(
            "Juan Dela Cruz",
        ))
        .stdout(predicate::str::contains("Basic Birthday Bash,45,7500.00,0,7500.00,Confirmed"));

    Ok(())
}

#[test]
fn test_cli_json_output() {
    let mut cmd = Command::new(cargo_bin!("catering"));
    cmd.args(["--format", "json", "--upcoming"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"customer\": \"Juan Dela Cruz\""))
        .stdout(predicate::str::contains("\"status\": \"Confirmed\""));
}

#[test]
fn test_cli_empty_store() {
    let mut cmd = Command::new(cargo_bin!("catering"));
    cmd.arg("--no-sample-data");

    cmd.assert().success().stdout(predicate::eq(
        "id,customer,event_date,event_time,package,guests,base,additional,total,status\n",
    ));
}

#[test]
fn test_cli_prints_booking_items() {
    let mut cmd = Command::new(cargo_bin!("catering"));
    cmd.args(["--booking", "1"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with(
            "id,booking,item,unit_type,quantity,cost\n",
        ));
}

#[test]
fn test_cli_prints_booking_items_as_json() {
    let mut cmd = Command::new(cargo_bin!("catering"));
    cmd.args(["--booking", "1", "--format", "json"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("["));
}

#[test]
fn test_cli_unknown_booking_fails() {
    let mut cmd = Command::new(cargo_bin!("catering"));
    cmd.args(["--booking", "99"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Booking 99 not found"));
}

#[test]
fn test_cli_imports_menu_and_reports_bad_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("menu.csv");
    common::write_menu_csv(
        &path,
        &[
            ["Pancit", "Noodles", "1200", "per_tray", "true"],
            ["Broken", "", "not_a_number", "fixed", "true"],
        ],
    )
    .unwrap();

    let mut cmd = Command::new(cargo_bin!("catering"));
    cmd.arg("--menu").arg(&path).args(["--log-level", "error"]);

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Error reading menu item"))
        .stdout(predicate::str::contains("Juan Dela Cruz"));
}
