use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_cli_list_operations() {
    let mut cmd = Command::cargo_bin("langcalc").unwrap();
    cmd.arg("list");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("17 operations available"))
        .stdout(predicate::str::contains("symmetric-difference"))
        .stdout(predicate::str::contains("Positive closure (L⁺)"))
        .stdout(predicate::str::contains("Notation:"));
}

#[test]
fn test_cli_show_operation() {
    let mut cmd = Command::cargo_bin("langcalc").unwrap();
    cmd.arg("show").arg("kleene");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Kleene closure (L*)"))
        .stdout(predicate::str::contains("iterations"))
        .stdout(predicate::str::contains("langcalc run kleene L=a,b k=4"));
}

#[test]
fn test_cli_show_unknown_operation() {
    let mut cmd = Command::cargo_bin("langcalc").unwrap();
    cmd.arg("show").arg("nonexistent");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unknown operation"));
}
