use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_describes_the_surface() {
    Command::cargo_bin("ner-probe")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--format"))
        .stdout(predicate::str::contains("--endpoint"))
        .stdout(predicate::str::contains("--interactive"));
}

#[test]
fn blank_text_exits_without_sending() {
    // No server is running here; a blank text must fail before any
    // network activity happens.
    Command::cargo_bin("ner-probe")
        .unwrap()
        .arg("   ")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("empty"));
}

#[test]
fn rejects_unknown_format_values() {
    Command::cargo_bin("ner-probe")
        .unwrap()
        .args(["--format", "xml", "hello"])
        .assert()
        .failure();
}
