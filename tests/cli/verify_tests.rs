use crate::common::{cmd, TestContext};
use crate::fixtures::{class_with_smap, EMBEDDED_SMAP, JSP_SMAP};
use predicates::prelude::*;
use serde_json::Value;

#[test]
fn test_verify_valid_smap() {
    let ctx = TestContext::default();
    let path = ctx.create_file("Foo.smap", JSP_SMAP.as_bytes()).unwrap();
    cmd()
        .arg("verify")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("is a correctly formatted SMAP"))
        .stdout(predicate::str::contains("Default stratum: JSP"));
}

#[test]
fn test_verify_class_file_by_extension() {
    let ctx = TestContext::default();
    let path = ctx.create_file("Foo.class", &class_with_smap(JSP_SMAP)).unwrap();
    cmd()
        .arg("verify")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("contains a correctly formatted SMAP"));
}

#[test]
fn test_verify_kind_override() {
    let ctx = TestContext::default();
    let path = ctx.create_file("Foo.bin", &class_with_smap(JSP_SMAP)).unwrap();
    cmd()
        .args(["verify", "--kind", "class"])
        .arg(&path)
        .assert()
        .success();
}

#[test]
fn test_assertion_failure_exit_code() {
    let ctx = TestContext::default();
    let path = ctx
        .create_file("Foo.smap", b"SMAP\nFoo.java\nJava\n*E\n")
        .unwrap();
    cmd()
        .arg("verify")
        .arg(&path)
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains(
            "Assertion #19 failed - There must be at least one StratumSection",
        ));
}

#[test]
fn test_syntax_failure_exit_code() {
    let ctx = TestContext::default();
    let path = ctx.create_file("Foo.smap", b"not a source map\n").unwrap();
    cmd()
        .arg("verify")
        .arg(&path)
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("Not an SMAP"));
}

#[test]
fn test_missing_file_exit_code() {
    cmd()
        .args(["verify", "/nonexistent/Foo.smap"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("File does not exist"));
}

#[test]
fn test_embedded_smap_in_class_file_fails() {
    let ctx = TestContext::default();
    let path = ctx.create_file("Outer.class", &class_with_smap(EMBEDDED_SMAP)).unwrap();
    cmd()
        .arg("verify")
        .arg(&path)
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Assertion #20 failed"));
}

#[test]
fn test_json_success_envelope() {
    let ctx = TestContext::default();
    let path = ctx.create_file("Foo.smap", JSP_SMAP.as_bytes()).unwrap();
    let output = cmd()
        .args(["verify", "--format", "json"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(json["status"], "ok");
    assert_eq!(json["result"]["default_stratum"], "JSP");
    assert_eq!(json["result"]["line_mapping_count"], 1);
    assert!(json["failure"].is_null());
}

#[test]
fn test_json_failure_envelope() {
    let ctx = TestContext::default();
    let path = ctx
        .create_file(
            "Foo.smap",
            b"SMAP\nFoo.java\nJSP\n*S JSP\n*F\n1 a.jsp\n1 b.jsp\n*L\n1:1\n*E\n",
        )
        .unwrap();
    let output = cmd()
        .args(["verify", "--format", "json"])
        .arg(&path)
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(4));
    let json: Value = serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(json["status"], "error");
    assert_eq!(json["failure"]["kind"], "assertion");
    assert_eq!(json["failure"]["rule"], 7);
    assert_eq!(json["failure"]["line"], 7);
}
