use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn removing_required_component_is_refused() {
    let ctx = TestContext::new();
    ctx.install(&["button", "card", "alert-dialog", "pagination"]);

    ctx.cli()
        .args(["remove", "button", "card", "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot remove components due to internal dependencies"))
        .stderr(predicate::str::contains("button is required by: alert-dialog, pagination"));

    // All-or-nothing: card stays even though nothing needs it.
    assert!(ctx.component_exists("button"));
    assert!(ctx.component_exists("card"));
}

#[test]
fn removing_component_with_its_dependents_proceeds() {
    let ctx = TestContext::new();
    ctx.install(&["button", "alert-dialog", "card"]);

    ctx.cli()
        .args(["remove", "button", "alert-dialog", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 2 component(s)"));

    assert!(!ctx.component_exists("button"));
    assert!(!ctx.component_exists("alert-dialog"));
    assert!(ctx.component_exists("card"));
}
