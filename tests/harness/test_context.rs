//! Shared testing harness for `compadcn` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use super::project;

/// Testing harness providing an isolated environment for CLI exercises.
pub(crate) struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

impl TestContext {
    /// Create an isolated home and an initialized project directory.
    pub(crate) fn new() -> Self {
        let ctx = Self::uninitialized();
        project::scaffold(ctx.work_dir());
        ctx
    }

    /// Create an isolated home and an empty project directory.
    pub(crate) fn uninitialized() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        fs::create_dir_all(root.path().join("home")).expect("Failed to create test home");
        Self { root, work_dir }
    }

    /// Absolute path to the emulated `$HOME` directory.
    pub(crate) fn home(&self) -> PathBuf {
        self.root.path().join("home")
    }

    /// Path to the project directory used for CLI invocations.
    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Custom preset document under the emulated home.
    pub(crate) fn presets_file(&self) -> PathBuf {
        self.home().join(".compadcn").join("custom-presets.json")
    }

    /// Build a command for invoking the compiled binary in the project directory.
    ///
    /// External commands are printed instead of spawned.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("compadcn").expect("Failed to locate compadcn binary");
        cmd.current_dir(&self.work_dir)
            .env("HOME", self.home())
            .env("COMPADCN_DRY_RUN", "1")
            .env_remove("COMPADCN_PRESETS_FILE")
            .env_remove("npm_config_user_agent")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Mark components as installed.
    pub(crate) fn install(&self, ids: &[&str]) {
        project::install(&self.work_dir, ids);
    }

    pub(crate) fn write_source(&self, relative: &str, content: &str) {
        project::write_source(&self.work_dir, relative, content);
    }

    pub(crate) fn component_exists(&self, id: &str) -> bool {
        project::component_path(&self.work_dir, id).exists()
    }

    /// Run `preset create` with the given arguments and assert success.
    pub(crate) fn create_preset(&self, args: &[&str]) {
        self.cli().args(["preset", "create"]).args(args).assert().success();
    }
}
