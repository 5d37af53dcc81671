use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn create_merges_bases_and_explicit_components() {
    let ctx = TestContext::new();

    ctx.create_preset(&["Small Kit", "button", "badge"]);

    ctx.cli()
        .args(["preset", "create", "Big Kit", "badge", "tabs", "--base", "small-kit", "-b", "core"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(big-kit)"));

    // small-kit {button, badge} + core {button, input, label, card, dialog, separator} + tabs
    ctx.cli()
        .args(["preset", "show", "big-kit"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total: 8 components"))
        .stdout(predicate::str::contains("Tabs (tabs)"))
        .stdout(predicate::str::contains("Custom preset based on small-kit, core with 8 components"));
}

#[test]
fn create_from_bases_only() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["preset", "create", "Core Copy", "--base", "core", "-d", "Same as core"])
        .assert()
        .success();

    ctx.cli()
        .args(["preset", "show", "core-copy"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Same as core"))
        .stdout(predicate::str::contains("Total: 6 components"));
}

#[test]
fn create_rejects_unknown_base() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["preset", "create", "Broken Kit", "button", "--base", "ghost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Base preset \"ghost\" not found"));

    assert!(!ctx.presets_file().exists());
}
