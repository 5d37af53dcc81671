use std::io;

use thiserror::Error;

use crate::domain::conflicts::ConflictReport;

/// Library-wide error type for compadcn operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// The working directory is not a project set up for the component generator.
    #[error("components.json not found in {0}. Make sure you're in a shadcn project.")]
    ProjectNotInitialized(String),

    /// Component identifier is malformed.
    #[error("Invalid component identifier '{0}': must be alphanumeric with hyphens or underscores")]
    InvalidComponentId(String),

    /// One or more component ids are not part of the catalog.
    #[error("Invalid components: {}", .0.join(", "))]
    InvalidComponents(Vec<String>),

    /// One or more requested components are not present in the project.
    #[error("The following components are not installed: {}", .0.join(", "))]
    ComponentsNotInstalled(Vec<String>),

    /// Removal refused because surviving components depend on the requested ones.
    #[error("Cannot remove components due to internal dependencies:\n{0}")]
    RemovalBlocked(ConflictReport),

    /// Preset name failed validation.
    #[error("Invalid preset name '{name}': {reason}")]
    InvalidPresetName { name: String, reason: String },

    /// A preset with the same id or label already exists.
    #[error("Preset \"{0}\" already exists")]
    PresetExists(String),

    /// A preset would end up without any component.
    #[error("A preset must contain at least one component")]
    EmptyPreset,

    /// Preset lookup failed where a preset is required.
    #[error("Preset \"{0}\" not found")]
    PresetNotFound(String),

    /// A base preset named during creation could not be resolved.
    #[error("Base preset \"{0}\" not found")]
    BasePresetNotFound(String),

    /// Custom preset store could not be written.
    #[error("Failed to save custom presets to {path}: {details}")]
    PresetStore { path: String, details: String },

    /// Embedded catalog data is inconsistent.
    #[error("Invalid catalog entry '{entry}': {reason}")]
    InvalidCatalog { entry: String, reason: String },

    /// External command failed or could not be spawned.
    #[error("Command '{command}' failed: {details}")]
    CommandFailed { command: String, details: String },

    /// Interactive prompt failed.
    #[error("Prompt failed: {0}")]
    Prompt(String),

    /// Parse error.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },
}

impl AppError {
    /// Provide an `io::ErrorKind`-like view for callers that branch on error class.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::InvalidComponentId(_)
            | AppError::InvalidComponents(_)
            | AppError::ComponentsNotInstalled(_)
            | AppError::InvalidPresetName { .. }
            | AppError::EmptyPreset
            | AppError::InvalidCatalog { .. }
            | AppError::ParseError { .. } => io::ErrorKind::InvalidInput,
            AppError::ProjectNotInitialized(_)
            | AppError::PresetNotFound(_)
            | AppError::BasePresetNotFound(_) => io::ErrorKind::NotFound,
            AppError::PresetExists(_) => io::ErrorKind::AlreadyExists,
            AppError::RemovalBlocked(_) => io::ErrorKind::ResourceBusy,
            AppError::PresetStore { .. } | AppError::CommandFailed { .. } | AppError::Prompt(_) => {
                io::ErrorKind::Other
            }
        }
    }

    /// Whether the error was raised before anything was mutated.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            AppError::InvalidComponentId(_)
                | AppError::InvalidComponents(_)
                | AppError::ComponentsNotInstalled(_)
                | AppError::InvalidPresetName { .. }
                | AppError::PresetExists(_)
                | AppError::EmptyPreset
        )
    }
}
