//! Ports onto the external scaffolding tool and package manager.

use crate::domain::AppError;

/// Materializes component files through the external scaffolding tool.
pub trait ComponentInstaller {
    fn install(&self, ids: &[String]) -> Result<(), AppError>;
}

/// Removes third-party packages through the detected package manager.
pub trait DependencyUninstaller {
    fn uninstall(&self, packages: &[String]) -> Result<(), AppError>;
}
