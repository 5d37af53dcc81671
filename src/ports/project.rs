//! Ports onto the target project: installed components, usage, and file removal.

use std::collections::BTreeSet;

use crate::domain::AppError;

/// Reports which components currently exist in the project.
pub trait InstalledComponents {
    /// Installed component ids, duplicate-free, in a stable order.
    ///
    /// Read fresh on every call; other tools may change the project between runs.
    fn installed_components(&self) -> Result<Vec<String>, AppError>;
}

/// Finds which components are imported somewhere in the project sources.
pub trait UsageScanner {
    /// The subset of `candidates` referenced by a literal import path.
    fn used_components(&self, candidates: &[String]) -> Result<BTreeSet<String>, AppError>;
}

/// Outcome of deleting generated component files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileRemovalReport {
    pub removed: Vec<String>,
    pub warnings: Vec<String>,
}

/// Deletes generated component files and their imports.
pub trait ComponentFiles {
    /// Delete the generated file of each component. Missing files are warnings.
    fn remove_component_files(&self, ids: &[String]) -> Result<FileRemovalReport, AppError>;

    /// Remove import statements of the given components; returns the number of
    /// modified files.
    fn strip_imports(&self, ids: &[String]) -> Result<usize, AppError>;
}
