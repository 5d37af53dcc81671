//! Install catalog components that are not present yet.

use std::collections::BTreeSet;

use crate::domain::{AppError, ComponentDescriptor};
use crate::ports::{ComponentCatalog, ComponentInstaller, InstalledComponents};

/// Components to hand to the installer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddPlan {
    /// Requested components that are not installed, in request order.
    pub to_install: Vec<String>,
    /// Requested components skipped because they already exist.
    pub already_installed: Vec<String>,
}

impl AddPlan {
    pub fn is_empty(&self) -> bool {
        self.to_install.is_empty()
    }
}

/// Validate `requested` against the catalog and drop installed ones.
pub fn plan<C, P>(catalog: &C, project: &P, requested: &[String]) -> Result<AddPlan, AppError>
where
    C: ComponentCatalog,
    P: InstalledComponents,
{
    let invalid: Vec<String> = requested.iter().filter(|id| !catalog.contains(id)).cloned().collect();
    if !invalid.is_empty() {
        return Err(AppError::InvalidComponents(invalid));
    }

    let installed: BTreeSet<String> = project.installed_components()?.into_iter().collect();

    let mut seen = BTreeSet::new();
    let mut plan = AddPlan::default();
    for id in requested {
        if !seen.insert(id.as_str()) {
            continue;
        }
        if installed.contains(id) {
            plan.already_installed.push(id.clone());
        } else {
            plan.to_install.push(id.clone());
        }
    }
    Ok(plan)
}

/// Catalog components not installed yet, in catalog order.
pub fn available<'c, C, P>(catalog: &'c C, project: &P) -> Result<Vec<&'c ComponentDescriptor>, AppError>
where
    C: ComponentCatalog,
    P: InstalledComponents,
{
    let installed: BTreeSet<String> = project.installed_components()?.into_iter().collect();
    Ok(catalog.list_all().into_iter().filter(|c| !installed.contains(c.id.as_str())).collect())
}

pub fn execute<I: ComponentInstaller>(installer: &I, plan: &AddPlan) -> Result<(), AppError> {
    if plan.is_empty() {
        return Ok(());
    }
    log::info!("Installing {} component(s): {}", plan.to_install.len(), plan.to_install.join(", "));
    installer.install(&plan.to_install)
}
