use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn prdigest() -> Command {
    let mut cmd = Command::cargo_bin("prdigest").unwrap();
    cmd.env_remove("GITHUB_TOKEN").env_remove("GITHUB_ORG");
    cmd
}

#[test]
fn report_without_token_fails_before_any_request() {
    prdigest()
        .args(["report", "--org", "acme"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("GitHub token is required"));
}

#[test]
fn report_without_org_fails() {
    prdigest()
        .args(["report"])
        .env("GITHUB_TOKEN", "ghp_test")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Organization name is required"));
}

#[test]
fn report_with_missing_explicit_config_fails() {
    prdigest()
        .args(["report", "--org", "acme", "--token", "ghp_test"])
        .args(["--config", "/nonexistent/prdigest.yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read config file"));
}

#[test]
fn report_with_invalid_config_fails() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "per_page: 0").unwrap();

    prdigest()
        .args(["report", "--org", "acme", "--token", "ghp_test", "--config"])
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("per_page must be between 1 and 100"));
}

#[test]
fn report_rejects_unknown_format() {
    prdigest()
        .args(["report", "--org", "acme", "--format", "xml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown output format"));
}

#[test]
fn schema_prints_config_schema() {
    prdigest()
        .arg("schema")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"aliases\""))
        .stdout(predicate::str::contains("\"concurrency\""));
}

#[test]
fn help_lists_subcommands() {
    prdigest()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("report"))
        .stdout(predicate::str::contains("schema"));
}
