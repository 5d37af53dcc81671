use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn create_rejects_existing_custom_preset() {
    let ctx = TestContext::new();

    ctx.create_preset(&["My Kit", "button"]);

    for name in ["My Kit", "my-kit", "my kit"] {
        ctx.cli()
            .args(["preset", "create", name, "card"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("already exists"));
    }
}

#[test]
fn create_rejects_builtin_names() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["preset", "create", "Core Components", "card"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Preset \"Core Components\" already exists"));

    ctx.cli()
        .args(["preset", "create", "dashboard", "card"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    assert!(!ctx.presets_file().exists());
}
