use crate::harness::TestContext;
use predicates::prelude::*;
use std::fs;

#[test]
fn remove_strips_imports_from_sources() {
    let ctx = TestContext::new();
    ctx.install(&["card", "badge"]);
    ctx.write_source(
        "src/app/page.tsx",
        "import { Card } from \"@/components/ui/card\";\nimport { Badge } from \"@/components/ui/badge\";\n\nexport default function Page() {}\n",
    );

    ctx.cli()
        .args(["rm", "card", "-y"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed imports from 1 file(s)"));

    let page = fs::read_to_string(ctx.work_dir().join("src/app/page.tsx")).unwrap();
    assert!(!page.contains("components/ui/card"));
    assert!(page.contains("components/ui/badge"));
    assert!(!ctx.component_exists("card"));
    assert!(ctx.component_exists("badge"));
}
