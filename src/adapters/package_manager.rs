//! Package manager detection and command lines.

use std::fmt;
use std::path::Path;
use std::process::{Command, Stdio};

/// Environment variable set by package managers for scripts they launch.
pub const USER_AGENT_ENV: &str = "npm_config_user_agent";

const SCAFFOLD_PACKAGE: &str = "shadcn@latest";

/// Supported JavaScript package managers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    Npm,
    Pnpm,
    Yarn,
    Bun,
}

impl PackageManager {
    /// Lock files in detection priority order.
    const LOCK_FILES: [(&'static str, PackageManager); 4] = [
        ("bun.lockb", PackageManager::Bun),
        ("pnpm-lock.yaml", PackageManager::Pnpm),
        ("yarn.lock", PackageManager::Yarn),
        ("package-lock.json", PackageManager::Npm),
    ];

    pub fn binary(self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Yarn => "yarn",
            PackageManager::Bun => "bun",
        }
    }

    /// Detect the manager used by the project at `root`.
    ///
    /// Order: the user agent of the invoking manager, lock files, binaries
    /// present on PATH, then npm.
    pub fn detect(root: &Path) -> Self {
        let user_agent = std::env::var(USER_AGENT_ENV).ok();
        Self::detect_with(root, user_agent.as_deref(), is_on_path)
    }

    pub fn detect_with(
        root: &Path,
        user_agent: Option<&str>,
        probe: impl Fn(&str) -> bool,
    ) -> Self {
        if let Some(manager) = user_agent.and_then(Self::from_user_agent) {
            log::debug!("Package manager from user agent: {}", manager);
            return manager;
        }

        if let Some((lock_file, manager)) =
            Self::LOCK_FILES.iter().find(|(lock_file, _)| root.join(lock_file).exists())
        {
            log::debug!("Package manager from {}: {}", lock_file, manager);
            return *manager;
        }

        for manager in [PackageManager::Pnpm, PackageManager::Yarn, PackageManager::Bun] {
            if probe(manager.binary()) {
                log::debug!("Package manager found on PATH: {}", manager);
                return manager;
            }
        }

        PackageManager::Npm
    }

    fn from_user_agent(user_agent: &str) -> Option<Self> {
        if user_agent.starts_with("yarn") {
            Some(PackageManager::Yarn)
        } else if user_agent.starts_with("pnpm") {
            Some(PackageManager::Pnpm)
        } else if user_agent.starts_with("bun") {
            Some(PackageManager::Bun)
        } else if user_agent.starts_with("npm") {
            Some(PackageManager::Npm)
        } else {
            None
        }
    }

    /// Program and arguments that run the scaffolding tool's `add`.
    pub fn install_command(self, ids: &[String]) -> (String, Vec<String>) {
        let (program, prefix): (&str, &[&str]) = match self {
            PackageManager::Npm => ("npx", &[]),
            PackageManager::Pnpm => ("pnpm", &["dlx"]),
            PackageManager::Yarn => ("yarn", &["dlx"]),
            PackageManager::Bun => ("bunx", &["--bun"]),
        };
        let mut args: Vec<String> = prefix.iter().map(|s| s.to_string()).collect();
        args.push(SCAFFOLD_PACKAGE.to_string());
        args.push("add".to_string());
        args.extend(ids.iter().cloned());
        (program.to_string(), args)
    }

    /// Program and arguments that remove third-party packages.
    pub fn uninstall_command(self, packages: &[String]) -> (String, Vec<String>) {
        let verb = match self {
            PackageManager::Npm => "uninstall",
            PackageManager::Pnpm | PackageManager::Yarn | PackageManager::Bun => "remove",
        };
        let mut args = vec![verb.to_string()];
        args.extend(packages.iter().cloned());
        (self.binary().to_string(), args)
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.binary())
    }
}

fn is_on_path(binary: &str) -> bool {
    Command::new(binary)
        .arg("--version")
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .is_ok_and(|status| status.success())
}
