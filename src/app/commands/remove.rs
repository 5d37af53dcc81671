//! Remove installed components after a dependency safety check.

use std::collections::BTreeSet;

use crate::domain::{AppError, DependencyConflictResolver};
use crate::ports::{ComponentCatalog, ComponentFiles, DependencyUninstaller, InstalledComponents};

/// Which removable external packages to uninstall alongside the components.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DependencySelection {
    #[default]
    Keep,
    All,
    Only(Vec<String>),
}

/// Options for [`execute`].
#[derive(Debug, Clone, Default)]
pub struct RemoveOptions {
    pub dependencies: DependencySelection,
}

/// A removal that passed validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemovalPlan {
    pub components: Vec<String>,
    /// Packages no surviving component declares.
    pub removable_dependencies: BTreeSet<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemovalOutcome {
    pub removed: Vec<String>,
    pub warnings: Vec<String>,
    pub modified_files: usize,
    pub uninstalled: Vec<String>,
}

/// Validate a removal request against the installed set and the catalog.
///
/// Every requested component must be installed, and none may still be needed
/// by a component that stays. Any conflict refuses the whole batch.
pub fn plan<C, P>(catalog: &C, project: &P, requested: &[String]) -> Result<RemovalPlan, AppError>
where
    C: ComponentCatalog,
    P: InstalledComponents,
{
    let installed = project.installed_components()?;

    let mut seen = BTreeSet::new();
    let components: Vec<String> =
        requested.iter().filter(|id| seen.insert(id.as_str())).cloned().collect();

    let missing: Vec<String> =
        components.iter().filter(|id| !installed.contains(id)).cloned().collect();
    if !missing.is_empty() {
        return Err(AppError::ComponentsNotInstalled(missing));
    }

    let report = DependencyConflictResolver::compute_conflicts(catalog, &components, &installed);
    if report.is_blocked() {
        return Err(AppError::RemovalBlocked(report));
    }

    let removable_dependencies =
        DependencyConflictResolver::compute_removable_external_deps(catalog, &components, &installed);

    Ok(RemovalPlan { components, removable_dependencies })
}

/// Packages to uninstall for `selection`, restricted to removable ones.
pub fn select_dependencies(plan: &RemovalPlan, selection: &DependencySelection) -> Vec<String> {
    match selection {
        DependencySelection::Keep => Vec::new(),
        DependencySelection::All => plan.removable_dependencies.iter().cloned().collect(),
        DependencySelection::Only(packages) => packages
            .iter()
            .filter(|package| {
                let removable = plan.removable_dependencies.contains(*package);
                if !removable {
                    log::warn!("Skipping '{}': still required or not declared by removed components", package);
                }
                removable
            })
            .cloned()
            .collect(),
    }
}

/// Delete component files, strip their imports, then uninstall selected packages.
pub fn execute<F, U>(
    files: &F,
    uninstaller: &U,
    plan: &RemovalPlan,
    options: &RemoveOptions,
) -> Result<RemovalOutcome, AppError>
where
    F: ComponentFiles,
    U: DependencyUninstaller,
{
    let dependencies = select_dependencies(plan, &options.dependencies);

    let report = files.remove_component_files(&plan.components)?;
    let modified_files = files.strip_imports(&plan.components)?;
    log::info!("Removed {} component(s), updated {} file(s)", report.removed.len(), modified_files);

    if !dependencies.is_empty() {
        uninstaller.uninstall(&dependencies)?;
    }

    Ok(RemovalOutcome {
        removed: report.removed,
        warnings: report.warnings,
        modified_files,
        uninstalled: dependencies,
    })
}
