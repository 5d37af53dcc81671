//! Removal safety: internal dependency conflicts and removable external packages.

use std::collections::BTreeSet;
use std::fmt;

use crate::ports::ComponentCatalog;

/// One blocked component and the installed components that still need it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConflictEntry {
    pub component: String,
    pub dependents: Vec<String>,
}

/// Result of a removal safety check.
///
/// Empty means every requested component can be removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConflictReport {
    entries: Vec<ConflictEntry>,
}

impl ConflictReport {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Any requested component blocked blocks the whole batch.
    pub fn is_blocked(&self) -> bool {
        !self.is_empty()
    }

    pub fn entries(&self) -> &[ConflictEntry] {
        &self.entries
    }

    /// Dependents recorded for `component`, if it is blocked.
    pub fn dependents_of(&self, component: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|entry| entry.component == component)
            .map(|entry| entry.dependents.as_slice())
    }
}

impl fmt::Display for ConflictReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            writeln!(f, "  • {} is required by: {}", entry.component, entry.dependents.join(", "))?;
        }
        write!(
            f,
            "To remove these components, you must also remove the components that depend on them."
        )
    }
}

/// Pure computations over the catalog and two component sets.
///
/// Callers guarantee `to_remove ⊆ installed`; membership is not re-checked here.
pub struct DependencyConflictResolver;

impl DependencyConflictResolver {
    /// Map each requested component to the surviving installed components that
    /// declare it as an internal dependency.
    ///
    /// Dependents are listed in `installed` order. Components unknown to the
    /// catalog never block anything.
    pub fn compute_conflicts<C: ComponentCatalog>(
        catalog: &C,
        to_remove: &[String],
        installed: &[String],
    ) -> ConflictReport {
        let removing: BTreeSet<&str> = to_remove.iter().map(String::as_str).collect();
        let survivors: Vec<&str> = installed
            .iter()
            .map(String::as_str)
            .filter(|id| !removing.contains(id))
            .collect();

        let mut entries = Vec::new();
        for component in to_remove {
            let dependents: Vec<String> = survivors
                .iter()
                .filter(|survivor| {
                    catalog.get(survivor).is_some_and(|descriptor| descriptor.requires(component))
                })
                .map(|survivor| survivor.to_string())
                .collect();

            if !dependents.is_empty() {
                entries.push(ConflictEntry { component: component.clone(), dependents });
            }
        }

        ConflictReport { entries }
    }

    /// External packages declared by the removed components that no surviving
    /// component still declares.
    pub fn compute_removable_external_deps<C: ComponentCatalog>(
        catalog: &C,
        to_remove: &[String],
        installed: &[String],
    ) -> BTreeSet<String> {
        let removing: BTreeSet<&str> = to_remove.iter().map(String::as_str).collect();

        let mut candidates: BTreeSet<String> = to_remove
            .iter()
            .filter_map(|id| catalog.get(id))
            .flat_map(|descriptor| descriptor.external_dependencies.iter().cloned())
            .collect();

        for survivor in installed.iter().filter(|id| !removing.contains(id.as_str())) {
            if let Some(descriptor) = catalog.get(survivor) {
                for package in &descriptor.external_dependencies {
                    candidates.remove(package);
                }
            }
        }

        candidates
    }
}
