use crate::common::cmd;
use predicates::prelude::*;

#[test]
fn test_help_lists_subcommands() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("verify"))
        .stdout(predicate::str::contains("extract"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn test_version() {
    cmd()
        .arg("-V")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")))
        .stdout(predicate::str::contains("built at").not());
}

#[test]
fn test_long_version_includes_build_metadata() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")))
        .stdout(predicate::str::contains("built at"))
        .stdout(predicate::str::contains("(unix time)"));
}

#[test]
fn test_missing_subcommand_is_usage_error() {
    cmd().assert().failure().code(2);
}

#[test]
fn test_completions_for_bash() {
    cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("smap-verify"));
}

#[test]
fn test_quiet_conflicts_with_verbose() {
    cmd()
        .args(["-q", "-v", "verify", "Foo.smap"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}
