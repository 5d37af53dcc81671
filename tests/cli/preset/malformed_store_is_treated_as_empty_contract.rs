use crate::harness::TestContext;
use predicates::prelude::*;
use std::fs;

#[test]
fn malformed_store_reads_as_empty_with_warning() {
    let ctx = TestContext::new();
    fs::create_dir_all(ctx.presets_file().parent().unwrap()).unwrap();
    fs::write(ctx.presets_file(), "{ definitely not json").unwrap();

    ctx.cli()
        .args(["preset", "list", "--custom"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No custom presets found."))
        .stderr(predicate::str::contains("WARN"));
}

#[test]
fn presets_file_location_can_be_overridden() {
    let ctx = TestContext::new();
    let custom_path = ctx.home().join("elsewhere").join("presets.json");

    ctx.cli()
        .env("COMPADCN_PRESETS_FILE", &custom_path)
        .args(["preset", "create", "My Kit", "button"])
        .assert()
        .success();

    assert!(custom_path.exists());
    assert!(!ctx.presets_file().exists());
}
