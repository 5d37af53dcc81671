use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn preset_short_aliases() {
    let ctx = TestContext::new();

    ctx.cli().args(["p", "c", "Alias Kit", "button"]).assert().success();
    ctx.cli()
        .args(["p", "ls"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Alias Kit (alias-kit)"));
    ctx.cli().args(["p", "s", "alias-kit"]).assert().success();
    ctx.cli().args(["p", "rm", "alias-kit", "-y"]).assert().success();
}
