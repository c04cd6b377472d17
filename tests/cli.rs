use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn cli_shows_help() {
    let mut cmd = Command::cargo_bin("kep").unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("kep"))
        .stdout(predicate::str::contains("table"));
}

#[test]
fn cli_rejects_unknown_frequency() {
    let mut cmd = Command::cargo_bin("kep").unwrap();
    cmd.args(["names", "--freq", "weekly"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("invalid frequency choice"));
}

// Live test (opt-in): cargo test --features online
#[cfg(feature = "online")]
#[test]
fn table_online_quarterly() {
    let mut cmd = Command::cargo_bin("kep").unwrap();
    cmd.args(["table", "--freq", "q", "GDP_yoy", "CPI_rog"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("date\tGDP_yoy\tCPI_rog"));
}

#[test]
fn help_shows_fixed_default_base_url() {
    let mut cmd = Command::cargo_bin("kep").unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--base-url"))
        .stdout(predicate::str::contains(kep_dash::DEFAULT_BASE_URL));
}
