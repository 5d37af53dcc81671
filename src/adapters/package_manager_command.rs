use std::path::PathBuf;
use std::process::Command;

use super::package_manager::PackageManager;
use crate::domain::AppError;
use crate::ports::{ComponentInstaller, DependencyUninstaller};

/// When set to a non-empty value other than `0`, commands are printed, not run.
pub const DRY_RUN_ENV: &str = "COMPADCN_DRY_RUN";

/// Runs the scaffolding tool and package manager in the project root.
#[derive(Debug, Clone)]
pub struct PackageManagerCommand {
    root: PathBuf,
    manager: PackageManager,
    dry_run: bool,
}

impl PackageManagerCommand {
    pub fn new(root: PathBuf, manager: PackageManager) -> Self {
        Self { root, manager, dry_run: dry_run_from_env() }
    }

    /// Detect the package manager for `root`.
    pub fn detect(root: PathBuf) -> Self {
        let manager = PackageManager::detect(&root);
        Self::new(root, manager)
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn manager(&self) -> PackageManager {
        self.manager
    }

    fn run(&self, program: &str, args: &[String]) -> Result<(), AppError> {
        let display = format!("{} {}", program, args.join(" "));
        if self.dry_run {
            println!("[dry-run] {}", display);
            return Ok(());
        }

        log::info!("Running {}", display);
        // Inherit stdio: the scaffolding tool may prompt.
        let status = Command::new(program)
            .args(args)
            .current_dir(&self.root)
            .status()
            .map_err(|e| AppError::CommandFailed { command: display.clone(), details: e.to_string() })?;

        if !status.success() {
            let details = match status.code() {
                Some(code) => format!("exited with status {}", code),
                None => "terminated by signal".to_string(),
            };
            return Err(AppError::CommandFailed { command: display, details });
        }
        Ok(())
    }
}

fn dry_run_from_env() -> bool {
    std::env::var(DRY_RUN_ENV).is_ok_and(|value| !value.is_empty() && value != "0")
}

impl ComponentInstaller for PackageManagerCommand {
    fn install(&self, ids: &[String]) -> Result<(), AppError> {
        if ids.is_empty() {
            return Ok(());
        }
        let (program, args) = self.manager.install_command(ids);
        self.run(&program, &args)
    }
}

impl DependencyUninstaller for PackageManagerCommand {
    fn uninstall(&self, packages: &[String]) -> Result<(), AppError> {
        if packages.is_empty() {
            return Ok(());
        }
        let (program, args) = self.manager.uninstall_command(packages);
        self.run(&program, &args)
    }
}
