//! JSON file-backed custom preset repository.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, CustomPresetDocument};
use crate::ports::PresetRepository;

/// Directory under `$HOME` holding per-user state.
pub const CONFIG_DIR_NAME: &str = ".compadcn";
/// File name of the custom preset document.
pub const PRESETS_FILE_NAME: &str = "custom-presets.json";
/// Environment variable overriding the preset document location.
pub const PRESETS_FILE_ENV: &str = "COMPADCN_PRESETS_FILE";

/// Stores the custom preset document as pretty-printed JSON.
#[derive(Debug, Clone)]
pub struct JsonPresetRepository {
    path: PathBuf,
}

impl JsonPresetRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Repository at the per-user default location.
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self::new(Self::default_path()?))
    }

    /// `$COMPADCN_PRESETS_FILE`, or `$HOME/.compadcn/custom-presets.json`.
    pub fn default_path() -> Result<PathBuf, AppError> {
        if let Some(path) = std::env::var_os(PRESETS_FILE_ENV).filter(|v| !v.is_empty()) {
            return Ok(PathBuf::from(path));
        }
        let home = dirs::home_dir().ok_or_else(|| {
            AppError::Io(io::Error::new(io::ErrorKind::NotFound, "no home directory"))
        })?;
        Ok(home.join(CONFIG_DIR_NAME).join(PRESETS_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn store_error(&self, err: impl ToString) -> AppError {
        AppError::PresetStore { path: self.path.display().to_string(), details: err.to_string() }
    }
}

impl PresetRepository for JsonPresetRepository {
    fn load(&self) -> Result<CustomPresetDocument, AppError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Ok(CustomPresetDocument::default());
            }
            Err(err) => {
                log::warn!(
                    "Failed to read custom presets at {}, starting with empty config: {}",
                    self.path.display(),
                    err
                );
                return Ok(CustomPresetDocument::default());
            }
        };

        match serde_json::from_str(&raw) {
            Ok(document) => Ok(document),
            Err(err) => {
                log::warn!(
                    "Failed to load custom presets at {}, starting with empty config: {}",
                    self.path.display(),
                    err
                );
                Ok(CustomPresetDocument::default())
            }
        }
    }

    fn save(&self, document: &CustomPresetDocument) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| self.store_error(e))?;
        }
        let json = serde_json::to_string_pretty(document).map_err(|e| self.store_error(e))?;
        fs::write(&self.path, json).map_err(|e| self.store_error(e))?;
        log::debug!("Saved {} custom preset(s) to {}", document.presets.len(), self.path.display());
        Ok(())
    }
}
