use crate::harness::project;
use compadcn::{AppError, lint_at};
use tempfile::TempDir;

#[test]
fn lint_public_api_contract() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    project::scaffold(root);
    project::install(root, &["badge", "card"]);
    project::write_source(root, "app/layout.tsx", "import { Badge } from \"@/components/ui/badge\";\n");

    let report = lint_at(root).unwrap();

    assert_eq!(report.used, vec!["badge".to_string()]);
    assert_eq!(report.unused, vec!["card".to_string()]);
}

#[test]
fn lint_requires_components_json() {
    let temp = TempDir::new().unwrap();

    assert!(matches!(lint_at(temp.path()), Err(AppError::ProjectNotInitialized(_))));
}
