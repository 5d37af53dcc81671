use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn list_shows_builtin_and_custom_presets() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["preset", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Built-in Presets:"))
        .stdout(predicate::str::contains("Core Components (core)"))
        .stdout(predicate::str::contains("Dashboard"))
        .stdout(predicate::str::contains("No custom presets found."));

    ctx.create_preset(&["My Kit", "button"]);

    ctx.cli()
        .args(["preset", "list", "--custom"])
        .assert()
        .success()
        .stdout(predicate::str::contains("My Kit (my-kit)"))
        .stdout(predicate::str::contains("Built-in Presets:").not());

    ctx.cli()
        .args(["preset", "list", "--builtin"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Custom Presets:").not());
}

#[test]
fn list_flags_conflict() {
    let ctx = TestContext::new();

    ctx.cli().args(["preset", "list", "--builtin", "--custom"]).assert().failure();
}
