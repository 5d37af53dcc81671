use crate::app::api::{self, DependencySelection, RemoveOptions};
use crate::app::commands::remove::select_dependencies;
use crate::domain::AppError;

use super::{cancelled, prompt};

pub(super) fn run_remove(
    components: Vec<String>,
    deps: Vec<String>,
    all_deps: bool,
    yes: bool,
) -> Result<(), AppError> {
    let root = std::env::current_dir()?;

    let requested = if components.is_empty() {
        let installed = api::installed_components_at(&root)?;
        if installed.is_empty() {
            println!("No components installed.");
            return Ok(());
        }
        match prompt::multi_select("Select components to remove", &installed)? {
            Some(indices) => indices.into_iter().map(|i| installed[i].clone()).collect(),
            None => return cancelled("Cancelled"),
        }
    } else {
        components
    };

    let plan = api::plan_remove_at(&root, &requested)?;
    if plan.components.is_empty() {
        println!("No components selected for removal.");
        return Ok(());
    }

    println!("Components to be removed:");
    for id in &plan.components {
        println!("  • {}", id);
    }

    let selection = if all_deps {
        DependencySelection::All
    } else if !deps.is_empty() {
        DependencySelection::Only(deps)
    } else if !plan.removable_dependencies.is_empty() && !yes && prompt::is_interactive() {
        let packages: Vec<String> = plan.removable_dependencies.iter().cloned().collect();
        match prompt::multi_select("Select dependencies to remove (optional)", &packages)? {
            Some(indices) => {
                DependencySelection::Only(indices.into_iter().map(|i| packages[i].clone()).collect())
            }
            None => return cancelled("Cancelled"),
        }
    } else {
        if !plan.removable_dependencies.is_empty() {
            let packages: Vec<&str> = plan.removable_dependencies.iter().map(String::as_str).collect();
            println!("Packages no longer needed (kept): {}", packages.join(", "));
        }
        DependencySelection::Keep
    };

    let selected = select_dependencies(&plan, &selection);
    let dependency_count = selected.len();
    let question = if dependency_count > 0 {
        format!(
            "Remove {} component(s) and {} dependenc{}?",
            plan.components.len(),
            dependency_count,
            if dependency_count == 1 { "y" } else { "ies" }
        )
    } else {
        format!("Remove {} component(s)?", plan.components.len())
    };
    if !prompt::confirm(&question, false, yes)? {
        return cancelled("Cancelled");
    }

    let options = RemoveOptions { dependencies: DependencySelection::Only(selected) };
    let outcome = api::remove_at(&root, &plan, &options)?;

    for warning in &outcome.warnings {
        println!("⚠️  {}", warning);
    }
    if outcome.modified_files > 0 {
        println!("  Removed imports from {} file(s)", outcome.modified_files);
    }
    if outcome.uninstalled.is_empty() {
        println!("✅ Removed {} component(s)", outcome.removed.len());
    } else {
        println!(
            "✅ Removed {} component(s) and uninstalled {}",
            outcome.removed.len(),
            outcome.uninstalled.join(", ")
        );
    }
    Ok(())
}
