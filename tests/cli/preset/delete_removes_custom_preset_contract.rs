use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn delete_by_label_removes_resolved_preset() {
    let ctx = TestContext::new();

    ctx.create_preset(&["My Kit", "button"]);
    ctx.create_preset(&["Other Kit", "card"]);

    ctx.cli()
        .args(["preset", "delete", "MY KIT", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted custom preset \"My Kit\""));

    ctx.cli().args(["preset", "show", "my-kit"]).assert().failure();
    ctx.cli().args(["preset", "show", "other-kit"]).assert().success();
}

#[test]
fn delete_without_terminal_requires_yes() {
    let ctx = TestContext::new();

    ctx.create_preset(&["My Kit", "button"]);

    ctx.cli()
        .args(["preset", "delete", "my-kit"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--yes"));

    ctx.cli().args(["preset", "show", "my-kit"]).assert().success();
}
