use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn all_deps_uninstalls_only_unneeded_packages() {
    let ctx = TestContext::new();
    // badge shares @radix-ui/react-slot and class-variance-authority with button.
    ctx.install(&["button", "alert-dialog", "badge"]);

    ctx.cli()
        .args(["remove", "button", "alert-dialog", "--all-deps", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[dry-run] npm uninstall @radix-ui/react-alert-dialog"))
        .stdout(predicate::str::contains("react-slot").not());
}

#[test]
fn explicit_deps_are_limited_to_removable_ones() {
    let ctx = TestContext::new();
    ctx.install(&["tabs", "badge"]);

    ctx.cli()
        .args(["remove", "tabs", "--deps", "@radix-ui/react-tabs,@radix-ui/react-slot", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[dry-run] npm uninstall @radix-ui/react-tabs\n"));
}

#[test]
fn packages_kept_by_default() {
    let ctx = TestContext::new();
    ctx.install(&["tabs"]);

    ctx.cli()
        .args(["remove", "tabs", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Packages no longer needed (kept): @radix-ui/react-tabs"))
        .stdout(predicate::str::contains("[dry-run]").not());
}

#[test]
fn deps_flags_conflict() {
    let ctx = TestContext::new();
    ctx.install(&["tabs"]);

    ctx.cli().args(["remove", "tabs", "--deps", "x", "--all-deps", "--yes"]).assert().failure();
    assert!(ctx.component_exists("tabs"));
}
