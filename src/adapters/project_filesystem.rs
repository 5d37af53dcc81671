//! Filesystem adapter for the target project.
//!
//! Locates the generated component directory through `components.json`,
//! lists installed components, scans sources for imports, and deletes
//! generated files.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use regex::Regex;
use serde::Deserialize;
use walkdir::{DirEntry, WalkDir};

use crate::domain::AppError;
use crate::ports::{ComponentFiles, FileRemovalReport, InstalledComponents, UsageScanner};

/// Marker file written by the scaffolding tool's own `init`.
pub const COMPONENTS_CONFIG: &str = "components.json";

const DEFAULT_UI_ALIAS: &str = "@/components/ui";
const COMPONENT_EXTENSION: &str = "tsx";
const SCAN_DIRS: [&str; 4] = ["src", "app", "pages", "components"];
const EXCLUDED_DIRS: [&str; 5] = ["node_modules", ".next", "dist", "build", ".git"];
const SOURCE_EXTENSIONS: [&str; 4] = ["tsx", "ts", "jsx", "js"];

#[derive(Debug, Deserialize)]
struct ComponentsConfig {
    #[serde(default)]
    aliases: Aliases,
}

#[derive(Debug, Default, Deserialize)]
struct Aliases {
    ui: Option<String>,
    components: Option<String>,
}

impl ComponentsConfig {
    fn ui_alias(&self) -> String {
        if let Some(ui) = &self.aliases.ui {
            return ui.clone();
        }
        match &self.aliases.components {
            Some(components) => format!("{}/ui", components.trim_end_matches('/')),
            None => DEFAULT_UI_ALIAS.to_string(),
        }
    }
}

/// Project rooted at a directory on disk.
#[derive(Debug, Clone)]
pub struct FilesystemProject {
    root: PathBuf,
}

impl FilesystemProject {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Project rooted at the current directory.
    pub fn current() -> Result<Self, AppError> {
        Ok(Self::new(std::env::current_dir()?))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Whether the scaffolding tool has been initialized here.
    pub fn is_initialized(&self) -> bool {
        self.root.join(COMPONENTS_CONFIG).exists()
    }

    /// Directory holding generated component files.
    pub fn ui_dir(&self) -> Result<PathBuf, AppError> {
        let config_path = self.root.join(COMPONENTS_CONFIG);
        if !config_path.exists() {
            log::error!("{} not found in {}", COMPONENTS_CONFIG, self.root.display());
            return Err(AppError::ProjectNotInitialized(self.root.display().to_string()));
        }

        let raw = fs::read_to_string(&config_path)?;
        let config: ComponentsConfig =
            serde_json::from_str(&raw).map_err(|e| AppError::ParseError {
                what: COMPONENTS_CONFIG.to_string(),
                details: e.to_string(),
            })?;

        Ok(self.resolve_alias(&config.ui_alias()))
    }

    /// Map an import alias such as `@/components/ui` onto a directory.
    ///
    /// `@/` and `~/` point at `src/` when it holds the directory, else at the root.
    fn resolve_alias(&self, alias: &str) -> PathBuf {
        let Some(rest) = alias.strip_prefix("@/").or_else(|| alias.strip_prefix("~/")) else {
            return self.root.join(alias);
        };

        let under_src = self.root.join("src").join(rest);
        if under_src.exists() {
            return under_src;
        }
        let under_root = self.root.join(rest);
        if under_root.exists() { under_root } else { under_src }
    }

    fn source_files(&self) -> Vec<PathBuf> {
        let mut files = Vec::new();
        for dir in SCAN_DIRS {
            let dir_path = self.root.join(dir);
            if !dir_path.is_dir() {
                continue;
            }
            for entry in WalkDir::new(&dir_path)
                .into_iter()
                .filter_entry(|entry| !is_excluded_dir(entry))
                .filter_map(Result::ok)
            {
                if entry.file_type().is_file() && is_source_file(entry.path()) {
                    files.push(entry.into_path());
                }
            }
        }
        files
    }
}

fn is_excluded_dir(entry: &DirEntry) -> bool {
    entry.file_type().is_dir()
        && entry.file_name().to_str().is_some_and(|name| EXCLUDED_DIRS.contains(&name))
}

fn is_source_file(path: &Path) -> bool {
    path.extension().and_then(|ext| ext.to_str()).is_some_and(|ext| SOURCE_EXTENSIONS.contains(&ext))
}

/// Literal `import { … } from "…/components/ui/<id>"` pattern.
fn import_pattern(component: &str) -> Result<Regex, AppError> {
    let pattern = format!(
        r#"import\s+\{{[^}}]*\}}\s+from\s+['"][^'"]*/components/ui/{}['"];?"#,
        regex::escape(component)
    );
    Regex::new(&pattern).map_err(|e| AppError::ParseError {
        what: format!("import pattern for '{}'", component),
        details: e.to_string(),
    })
}

impl InstalledComponents for FilesystemProject {
    fn installed_components(&self) -> Result<Vec<String>, AppError> {
        let ui_dir = self.ui_dir()?;
        if !ui_dir.is_dir() {
            log::debug!("UI directory {} does not exist", ui_dir.display());
            return Ok(Vec::new());
        }

        let mut installed = Vec::new();
        for entry in fs::read_dir(&ui_dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let file_name = entry.file_name().to_string_lossy().to_string();
            if file_name.ends_with(".d.ts") {
                continue;
            }
            if let Some(stem) = file_name.strip_suffix(&format!(".{}", COMPONENT_EXTENSION)) {
                installed.push(stem.to_string());
            }
        }
        installed.sort();
        Ok(installed)
    }
}

impl UsageScanner for FilesystemProject {
    fn used_components(&self, candidates: &[String]) -> Result<BTreeSet<String>, AppError> {
        let patterns = candidates
            .iter()
            .map(|id| import_pattern(id).map(|re| (id, re)))
            .collect::<Result<Vec<_>, _>>()?;

        let mut used = BTreeSet::new();
        for path in self.source_files() {
            let content = match fs::read_to_string(&path) {
                Ok(content) => content,
                Err(err) => {
                    log::debug!("Skipping unreadable file {}: {}", path.display(), err);
                    continue;
                }
            };
            for (id, pattern) in &patterns {
                if !used.contains(*id) && pattern.is_match(&content) {
                    used.insert((*id).clone());
                }
            }
        }
        Ok(used)
    }
}

impl ComponentFiles for FilesystemProject {
    fn remove_component_files(&self, ids: &[String]) -> Result<FileRemovalReport, AppError> {
        let ui_dir = self.ui_dir()?;
        if !ui_dir.is_dir() {
            return Err(AppError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("UI components directory not found: {}", ui_dir.display()),
            )));
        }

        let mut report = FileRemovalReport::default();
        for id in ids {
            let path = ui_dir.join(format!("{}.{}", id, COMPONENT_EXTENSION));
            if !path.exists() {
                report.warnings.push(format!("Component file not found: {}.{}", id, COMPONENT_EXTENSION));
                continue;
            }
            match fs::remove_file(&path) {
                Ok(()) => report.removed.push(id.clone()),
                Err(err) => report.warnings.push(format!("Failed to remove {}: {}", id, err)),
            }
        }
        Ok(report)
    }

    fn strip_imports(&self, ids: &[String]) -> Result<usize, AppError> {
        let patterns = ids.iter().map(|id| import_pattern(id)).collect::<Result<Vec<_>, _>>()?;
        let empty_import = Regex::new(r"(?m)^[ \t]*import\s+\{\s*\}\s+from[^;\n]+;?[ \t]*$")
            .map_err(|e| AppError::ParseError { what: "empty import pattern".into(), details: e.to_string() })?;
        let blank_runs = Regex::new(r"\n[ \t]*\n[ \t]*\n(?:[ \t]*\n)*")
            .map_err(|e| AppError::ParseError { what: "blank line pattern".into(), details: e.to_string() })?;

        let mut modified = 0;
        for path in self.source_files() {
            let Ok(content) = fs::read_to_string(&path) else {
                continue;
            };

            let mut updated = content.clone();
            for pattern in &patterns {
                updated = pattern.replace_all(&updated, "").into_owned();
            }
            updated = empty_import.replace_all(&updated, "").into_owned();

            if updated != content {
                updated = blank_runs.replace_all(&updated, "\n\n").into_owned();
                fs::write(&path, &updated)?;
                modified += 1;
            }
        }
        Ok(modified)
    }
}
