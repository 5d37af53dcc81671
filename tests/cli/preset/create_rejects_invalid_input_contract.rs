use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn create_rejects_short_name() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["preset", "create", "ab", "button"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 3 characters"));

    assert!(!ctx.presets_file().exists());
}

#[test]
fn create_rejects_symbols_in_name() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["preset", "create", "kit!", "button"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid preset name"));
}

#[test]
fn create_lists_unknown_components() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["preset", "create", "Ghost Kit", "button", "ghost", "phantom"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid components: ghost, phantom"));

    assert!(!ctx.presets_file().exists());
}

#[test]
fn create_without_components_is_rejected() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["preset", "create", "Empty Kit"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least one component"));

    assert!(!ctx.presets_file().exists());
}
