use crate::harness::TestContext;
use predicates::prelude::*;
use std::fs;

#[test]
fn delete_missing_preset_leaves_store_byte_identical() {
    let ctx = TestContext::new();

    ctx.create_preset(&["My Kit", "button"]);
    let before = fs::read(ctx.presets_file()).unwrap();

    ctx.cli()
        .args(["preset", "delete", "nope", "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Preset \"nope\" not found"));

    assert_eq!(fs::read(ctx.presets_file()).unwrap(), before);
}

#[test]
fn builtin_presets_cannot_be_deleted() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["preset", "delete", "core", "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));

    ctx.cli().args(["preset", "show", "core"]).assert().success();
    assert!(!ctx.presets_file().exists());
}
