//! Find installed components that no source file imports.

use crate::domain::AppError;
use crate::ports::{InstalledComponents, UsageScanner};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LintReport {
    pub installed: Vec<String>,
    pub used: Vec<String>,
    pub unused: Vec<String>,
}

impl LintReport {
    /// Command that removes every unused component.
    pub fn suggested_command(&self) -> Option<String> {
        if self.unused.is_empty() {
            None
        } else {
            Some(format!("compadcn remove {}", self.unused.join(" ")))
        }
    }
}

pub fn execute<P>(project: &P) -> Result<LintReport, AppError>
where
    P: InstalledComponents + UsageScanner,
{
    let installed = project.installed_components()?;
    let used_set = project.used_components(&installed)?;

    let (used, unused): (Vec<String>, Vec<String>) =
        installed.iter().cloned().partition(|id| used_set.contains(id));
    Ok(LintReport { installed, used, unused })
}
