use crate::common::{cmd, TestContext};
use crate::fixtures::{class_with_attribute, class_with_smap, JSP_SMAP};
use predicates::prelude::*;
use std::fs;

#[test]
fn test_extract_to_stdout() {
    let ctx = TestContext::default();
    let path = ctx.create_file("Foo.class", &class_with_smap(JSP_SMAP)).unwrap();
    cmd()
        .arg("extract")
        .arg(&path)
        .assert()
        .success()
        .stdout(JSP_SMAP);
}

#[test]
fn test_extract_to_file() {
    let ctx = TestContext::default();
    let path = ctx.create_file("Foo.class", &class_with_smap(JSP_SMAP)).unwrap();
    let out = ctx.temp_path().join("maps").join("Foo.smap");
    cmd()
        .arg("extract")
        .arg(&path)
        .arg("--output")
        .arg(&out)
        .assert()
        .success();
    assert_eq!(fs::read_to_string(out).unwrap(), JSP_SMAP);
}

#[test]
fn test_extract_without_attribute() {
    let ctx = TestContext::default();
    let path = ctx
        .create_file("Foo.class", &class_with_attribute("SourceFile", &[0, 1]))
        .unwrap();
    cmd()
        .arg("extract")
        .arg(&path)
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("No SourceDebugExtension attribute"));
}
