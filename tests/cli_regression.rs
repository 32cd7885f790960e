// Regression tests for the pss binary surfaces.
// Requires: assert_cmd, predicates crates in [dev-dependencies]

use std::env;
use std::fs;

use assert_cmd::Command;
use predicates::{prelude::PredicateBooleanExt, str::contains};

#[test]
fn parse_inline_code_prints_success_envelope() {
    let mut cmd = Command::cargo_bin("pss").unwrap();
    cmd.arg("parse")
        .arg("--code")
        .arg("component pss_top { action A {}; }");
    cmd.assert()
        .success()
        .stdout(contains("\"success\": true").and(contains("\"pss_top\"")));
}

#[test]
fn parse_failure_prints_envelope_and_exits_nonzero() {
    let mut cmd = Command::cargo_bin("pss").unwrap();
    cmd.arg("parse").arg("--code").arg("component {");
    cmd.assert()
        .failure()
        .stdout(contains("\"success\": false"))
        .stderr(contains("Expected identifier"));
}

#[test]
fn parse_reads_stdin_when_no_source_given() {
    let mut cmd = Command::cargo_bin("pss").unwrap();
    cmd.arg("parse").write_stdin("component c { action A {} }");
    cmd.assert().success().stdout(contains("\"success\": true"));
}

#[test]
fn parse_reads_a_file() {
    let path = env::temp_dir().join("pss_cli_regression.pss");
    fs::write(&path, "component from_file { action A {}; }").unwrap();

    let mut cmd = Command::cargo_bin("pss").unwrap();
    cmd.arg("parse").arg(&path);
    cmd.assert()
        .success()
        .stdout(contains("\"from_file\""));

    let _ = fs::remove_file(path);
}

#[test]
fn serve_answers_one_request_per_line() {
    let request =
        r#"{"jsonrpc":"2.0","id":1,"method":"parse_pss","params":{"code":"component c { }"}}"#;
    let mut cmd = Command::cargo_bin("pss").unwrap();
    cmd.arg("serve").write_stdin(format!("{request}\n"));
    cmd.assert()
        .success()
        .stdout(contains("\"result\"").and(contains("\"success\":true")))
        .stderr(contains("started on stdio"));
}

#[test]
fn serve_reports_method_not_found() {
    let mut cmd = Command::cargo_bin("pss").unwrap();
    cmd.arg("serve")
        .write_stdin("{\"id\":1,\"method\":\"no_such_method\"}\n");
    cmd.assert().success().stdout(contains("-32601"));
}

#[test]
fn repl_parses_the_builtin_example() {
    let mut cmd = Command::cargo_bin("pss").unwrap();
    cmd.arg("repl").write_stdin("3\n4\n");
    cmd.assert()
        .success()
        .stdout(contains("PARSE RESULT (JSON)").and(contains("\"success\": true")));
}
