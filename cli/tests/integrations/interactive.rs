use assert_cmd::Command;

#[test]
fn test_interactive_mode_help() {
    // Interactive mode needs a terminal, so only check that the flag is documented
    let mut cmd = Command::cargo_bin("langcalc").unwrap();
    cmd.arg("run").arg("--help");

    let output = cmd.assert().success();
    output.stdout(predicates::str::contains("--interactive"));
}
