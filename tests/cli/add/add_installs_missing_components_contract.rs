use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn add_skips_installed_components() {
    let ctx = TestContext::new();
    ctx.install(&["button"]);

    ctx.cli()
        .args(["add", "button", "card", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Already installed (skipping): button"))
        .stdout(predicate::str::contains("[dry-run] npx shadcn@latest add card"));
}

#[test]
fn add_rejects_unknown_components() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["a", "card", "ghost", "-y"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid components: ghost"));
}

#[test]
fn add_with_everything_installed_does_nothing() {
    let ctx = TestContext::new();
    ctx.install(&["card"]);

    ctx.cli()
        .args(["add", "card", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to install."))
        .stdout(predicate::str::contains("[dry-run]").not());
}

#[test]
fn package_manager_follows_lock_file() {
    let ctx = TestContext::new();
    std::fs::remove_file(ctx.work_dir().join("package-lock.json")).unwrap();
    std::fs::write(ctx.work_dir().join("pnpm-lock.yaml"), "").unwrap();

    ctx.cli()
        .args(["add", "card", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[dry-run] pnpm dlx shadcn@latest add card"));
}
