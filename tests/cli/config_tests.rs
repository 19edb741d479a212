use crate::common::{cmd, TestContext};
use crate::fixtures::{class_with_smap, JSP_SMAP};
use serde_json::Value;

#[test]
fn test_config_sets_default_format() {
    let ctx = TestContext::default();
    ctx.create_file(".smap-verify.toml", b"[output]\nformat = \"json\"\n")
        .unwrap();
    ctx.create_file("Foo.smap", JSP_SMAP.as_bytes()).unwrap();
    let output = cmd()
        .current_dir(ctx.temp_path())
        .args(["verify", "Foo.smap"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(json["result"]["generated_file"], "Foo.java");
}

#[test]
fn test_config_class_extensions() {
    let ctx = TestContext::default();
    ctx.create_file(
        ".smap-verify.toml",
        b"[input]\nclass_extensions = [\"cls\"]\n",
    )
    .unwrap();
    ctx.create_file("Foo.cls", &class_with_smap(JSP_SMAP)).unwrap();
    cmd()
        .current_dir(ctx.temp_path())
        .args(["verify", "Foo.cls"])
        .assert()
        .success();
}

#[test]
fn test_config_max_bytes() {
    let ctx = TestContext::default();
    ctx.create_file(".smap-verify.toml", b"[input]\nmax_bytes = 10\n")
        .unwrap();
    ctx.create_file("Foo.smap", JSP_SMAP.as_bytes()).unwrap();
    cmd()
        .current_dir(ctx.temp_path())
        .args(["verify", "Foo.smap"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn test_malformed_config_warns_and_uses_defaults() {
    let ctx = TestContext::default();
    ctx.create_file(".smap-verify.toml", b"[output\nformat = ")
        .unwrap();
    ctx.create_file("Foo.smap", JSP_SMAP.as_bytes()).unwrap();
    cmd()
        .current_dir(ctx.temp_path())
        .args(["verify", "Foo.smap"])
        .assert()
        .success()
        .stderr(predicates::str::contains("Failed to load config"))
        .stdout(predicates::str::contains("is a correctly formatted SMAP"));
}
