use assert_cmd::Command;
use predicates::prelude::*;

#[allow(deprecated)]
fn mhguard_cmd() -> Command {
    Command::cargo_bin("mhguard").unwrap()
}

#[test]
fn help_works() {
    mhguard_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("explain"));
}

#[test]
fn usage_errors_exit_2() {
    mhguard_cmd().arg("frobnicate").assert().code(2);
    mhguard_cmd().arg("check").assert().code(2);
}

#[test]
fn questions_lists_every_key() {
    mhguard_cmd()
        .arg("questions")
        .assert()
        .success()
        .stdout(predicate::str::contains("collects_health_info"))
        .stdout(predicate::str::contains("offers_substance_use_treatment"))
        .stdout(predicate::str::contains("3a"));
}
