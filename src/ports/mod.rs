mod builtin_presets;
mod component_catalog;
mod package_manager;
mod preset_repository;
mod project;

pub use builtin_presets::BuiltinPresetSource;
pub use component_catalog::ComponentCatalog;
pub use package_manager::{ComponentInstaller, DependencyUninstaller};
pub use preset_repository::PresetRepository;
pub use project::{ComponentFiles, FileRemovalReport, InstalledComponents, UsageScanner};
