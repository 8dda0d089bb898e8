use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_cli_run_set_union() {
    let mut cmd = Command::cargo_bin("langcalc").unwrap();
    cmd.arg("run").arg("union").arg("A=a,b,c").arg("B=b,c,d");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("A ∪ B = {a, b, c, d}"));
}

#[test]
fn test_cli_run_uses_defaults() {
    let mut cmd = Command::cargo_bin("langcalc").unwrap();
    cmd.arg("run").arg("language-concat");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("L1"))
        .stdout(predicate::str::contains("{a, aa, aba}"))
        .stdout(predicate::str::contains(
            "L₁ · L₂ = {aaab, aab, ab, abaab, abab}",
        ));
}

#[test]
fn test_cli_run_raw() {
    let mut cmd = Command::cargo_bin("langcalc").unwrap();
    cmd.arg("run")
        .arg("word-power")
        .arg("w=ab")
        .arg("n=3")
        .arg("--raw");

    cmd.assert().success().stdout("ababab\n");
}

#[test]
fn test_cli_run_kleene_discloses_truncation() {
    let mut cmd = Command::cargo_bin("langcalc").unwrap();
    cmd.arg("run").arg("kleene").arg("L=a").arg("k=2");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "L* (up to 2 iterations) = {ε, a, aa}",
        ))
        .stdout(predicate::str::contains("Note: L* is infinite"));
}

#[test]
fn test_cli_run_empty_language() {
    let mut cmd = Command::cargo_bin("langcalc").unwrap();
    cmd.arg("run").arg("positive").arg("L=").arg("--raw");

    cmd.assert().success().stdout("∅\n");
}

#[test]
fn test_cli_run_unknown_operation() {
    let mut cmd = Command::cargo_bin("langcalc").unwrap();
    cmd.arg("run").arg("powerset");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unknown operation 'powerset'"))
        .stderr(predicate::str::contains("langcalc list"));
}

#[test]
fn test_cli_run_negative_power() {
    let mut cmd = Command::cargo_bin("langcalc").unwrap();
    cmd.arg("run").arg("language-power").arg("n=-1");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid power: -1 is negative"));
}

#[test]
fn test_cli_run_limit_exceeded() {
    let mut cmd = Command::cargo_bin("langcalc").unwrap();
    cmd.arg("run").arg("kleene").arg("k=9");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("max_closure_iterations"));
}

#[test]
fn test_cli_run_limit_override() {
    let mut cmd = Command::cargo_bin("langcalc").unwrap();
    cmd.arg("run")
        .arg("positive")
        .arg("L=a")
        .arg("k=9")
        .arg("--max-closure-iterations")
        .arg("9")
        .arg("--raw");

    cmd.assert().success().stdout(predicate::str::contains("aaaaaaaaa"));
}

#[test]
fn test_cli_run_malformed_input() {
    let mut cmd = Command::cargo_bin("langcalc").unwrap();
    cmd.arg("run").arg("union").arg("a,b,c");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("expected name=value"));
}

#[test]
fn test_cli_run_without_operation() {
    let mut cmd = Command::cargo_bin("langcalc").unwrap();
    cmd.arg("run");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("No operation specified"));
}
