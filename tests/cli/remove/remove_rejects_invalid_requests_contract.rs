use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn not_installed_components_are_reported() {
    let ctx = TestContext::new();
    ctx.install(&["button"]);

    ctx.cli()
        .args(["remove", "button", "card", "dialog", "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not installed: card, dialog"));

    assert!(ctx.component_exists("button"));
}

#[test]
fn uninitialized_project_is_rejected() {
    let ctx = TestContext::uninitialized();

    ctx.cli()
        .args(["remove", "button", "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("components.json not found"));
}

#[test]
fn confirmation_required_without_terminal() {
    let ctx = TestContext::new();
    ctx.install(&["card"]);

    ctx.cli().args(["remove", "card"]).assert().failure().stderr(predicate::str::contains("--yes"));
    assert!(ctx.component_exists("card"));
}
