use assert_cmd::Command;
use predicates::prelude::*;

#[allow(deprecated)]
fn trendlens() -> Command {
    Command::cargo_bin("trendlens").unwrap()
}

#[test]
fn test_main_help_lists_commands() {
    let mut cmd = trendlens();
    cmd.arg("--help").assert().success().stdout(
        predicate::str::contains("health")
            .and(predicate::str::contains("topics"))
            .and(predicate::str::contains("trends"))
            .and(predicate::str::contains("compare"))
            .and(predicate::str::contains("export"))
            .and(predicate::str::contains("dashboard"))
            .and(predicate::str::contains("config")),
    );
}

#[test]
fn test_timeframe_values() {
    let mut cmd = trendlens();
    cmd.args(["trends", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1m").and(predicate::str::contains("5y")));
}

#[test]
fn test_compare_needs_keywords_or_topic() {
    let mut cmd = trendlens();
    cmd.arg("compare")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--keywords"));
}

#[test]
fn test_keywords_conflict_with_topic() {
    let mut cmd = trendlens();
    cmd.args([
        "compare",
        "--keywords",
        "Roku",
        "--topic",
        "cord_cutting",
        "--sub-topic",
        "devices",
    ])
    .assert()
    .failure()
    .stderr(predicate::str::contains("cannot be used with"));
}
