//! API Facade for the application.
//!
//! Glues context creation to command execution. Project operations take the
//! project root; preset operations take the custom preset file. The variants
//! without `_at` use the current directory and the per-user preset file.

use std::path::{Path, PathBuf};

use crate::adapters::catalog::{EmbeddedComponentCatalog, EmbeddedPresetCatalog};
use crate::adapters::package_manager_command::PackageManagerCommand;
use crate::adapters::preset_store_json::JsonPresetRepository;
use crate::adapters::project_filesystem::FilesystemProject;
use crate::app::{
    AppContext,
    commands::{add, components, init, lint, preset, remove},
};
use crate::ports::InstalledComponents;

pub use crate::app::commands::add::AddPlan;
pub use crate::app::commands::init::{InitOptions, InitOutcome};
pub use crate::app::commands::lint::LintReport;
pub use crate::app::commands::remove::{
    DependencySelection, RemovalOutcome, RemovalPlan, RemoveOptions,
};
pub use crate::app::services::{
    CreatePresetOptions, DeleteOutcome, PresetListFilter, PresetListing, PresetLookup,
};
pub use crate::domain::{AppError, ComponentDescriptor, ComponentId, Preset, PresetSource};

type DefaultContext = AppContext<EmbeddedComponentCatalog, EmbeddedPresetCatalog, JsonPresetRepository>;

/// Create an `AppContext` backed by the preset file at `store`.
fn create_context(store: PathBuf) -> Result<DefaultContext, AppError> {
    let catalog = EmbeddedComponentCatalog::new()?;
    let presets = EmbeddedPresetCatalog::new(&catalog)?;
    Ok(AppContext::new(catalog, presets, JsonPresetRepository::new(store)))
}

fn default_store() -> Result<PathBuf, AppError> {
    JsonPresetRepository::default_path()
}

// =============================================================================
// Catalog API
// =============================================================================

/// Every component the scaffolding tool can generate.
pub fn components() -> Result<Vec<ComponentDescriptor>, AppError> {
    let catalog = EmbeddedComponentCatalog::new()?;
    Ok(components::list(&catalog).into_iter().cloned().collect())
}

/// Catalog components that declare `id` as an internal dependency.
pub fn component_dependents(id: &str) -> Result<Vec<ComponentDescriptor>, AppError> {
    let catalog = EmbeddedComponentCatalog::new()?;
    Ok(components::dependents_of(&catalog, id).into_iter().cloned().collect())
}

// =============================================================================
// Project API
// =============================================================================

/// Validate components to add in the current directory.
pub fn plan_add(requested: &[String]) -> Result<AddPlan, AppError> {
    plan_add_at(std::env::current_dir()?, requested)
}

pub fn plan_add_at(root: impl Into<PathBuf>, requested: &[String]) -> Result<AddPlan, AppError> {
    let catalog = EmbeddedComponentCatalog::new()?;
    let project = FilesystemProject::new(root.into());
    add::plan(&catalog, &project, requested)
}

/// Catalog components not yet installed at `root`.
pub fn available_components_at(root: impl Into<PathBuf>) -> Result<Vec<ComponentDescriptor>, AppError> {
    let catalog = EmbeddedComponentCatalog::new()?;
    let project = FilesystemProject::new(root.into());
    Ok(add::available(&catalog, &project)?.into_iter().cloned().collect())
}

/// Run the installer for a validated plan.
pub fn install_at(root: impl Into<PathBuf>, plan: &AddPlan) -> Result<(), AppError> {
    let installer = PackageManagerCommand::detect(root.into());
    add::execute(&installer, plan)
}

/// Installed component ids at `root`.
pub fn installed_components_at(root: impl Into<PathBuf>) -> Result<Vec<String>, AppError> {
    FilesystemProject::new(root.into()).installed_components()
}

/// Validate a removal request in the current directory.
pub fn plan_remove(requested: &[String]) -> Result<RemovalPlan, AppError> {
    plan_remove_at(std::env::current_dir()?, requested)
}

pub fn plan_remove_at(
    root: impl Into<PathBuf>,
    requested: &[String],
) -> Result<RemovalPlan, AppError> {
    let catalog = EmbeddedComponentCatalog::new()?;
    let project = FilesystemProject::new(root.into());
    remove::plan(&catalog, &project, requested)
}

/// Remove files and packages of a validated plan.
pub fn remove_at(
    root: impl Into<PathBuf>,
    plan: &RemovalPlan,
    options: &RemoveOptions,
) -> Result<RemovalOutcome, AppError> {
    let root = root.into();
    let project = FilesystemProject::new(root.clone());
    let uninstaller = PackageManagerCommand::detect(root);
    remove::execute(&project, &uninstaller, plan, options)
}

/// Report installed components that nothing imports.
pub fn lint() -> Result<LintReport, AppError> {
    lint_at(std::env::current_dir()?)
}

pub fn lint_at(root: impl Into<PathBuf>) -> Result<LintReport, AppError> {
    lint::execute(&FilesystemProject::new(root.into()))
}

/// Install a selection, saving it as a custom preset first when asked.
pub fn init(options: InitOptions) -> Result<InitOutcome, AppError> {
    init_at(std::env::current_dir()?, default_store()?, options)
}

pub fn init_at(
    root: impl Into<PathBuf>,
    store: impl Into<PathBuf>,
    options: InitOptions,
) -> Result<InitOutcome, AppError> {
    let root = root.into();
    let ctx = create_context(store.into())?;
    let project = FilesystemProject::new(root.clone());
    let installer = PackageManagerCommand::detect(root);
    init::execute(&ctx, &project, &installer, options)
}

// =============================================================================
// Preset API
// =============================================================================

/// Resolve a preset identifier against builtin and custom presets.
pub fn find_preset(identifier: &str) -> Result<PresetLookup, AppError> {
    find_preset_at(default_store()?, identifier)
}

pub fn find_preset_at(store: impl Into<PathBuf>, identifier: &str) -> Result<PresetLookup, AppError> {
    create_context(store.into())?.resolver().find_preset(identifier)
}

/// Resolve a custom preset only.
pub fn find_custom_preset(identifier: &str) -> Result<Option<Preset>, AppError> {
    find_custom_preset_at(default_store()?, identifier)
}

pub fn find_custom_preset_at(
    store: impl Into<PathBuf>,
    identifier: &str,
) -> Result<Option<Preset>, AppError> {
    create_context(store.into())?.resolver().find_custom_preset(identifier)
}

/// Resolve a preset, failing with `PresetNotFound` on a miss.
pub fn show_preset(identifier: &str) -> Result<Preset, AppError> {
    show_preset_at(default_store()?, identifier)
}

pub fn show_preset_at(store: impl Into<PathBuf>, identifier: &str) -> Result<Preset, AppError> {
    preset::show(&create_context(store.into())?, identifier)
}

pub fn list_presets(filter: PresetListFilter) -> Result<PresetListing, AppError> {
    list_presets_at(default_store()?, filter)
}

pub fn list_presets_at(
    store: impl Into<PathBuf>,
    filter: PresetListFilter,
) -> Result<PresetListing, AppError> {
    preset::list(&create_context(store.into())?, filter)
}

/// Deduplicated component ids of the given base presets.
pub fn merge_base_presets_at(
    store: impl Into<PathBuf>,
    bases: &[String],
) -> Result<Vec<ComponentId>, AppError> {
    create_context(store.into())?.resolver().merge_base_presets(bases)
}

/// Validate and persist a custom preset.
pub fn create_preset(
    name: &str,
    components: &[String],
    options: CreatePresetOptions,
) -> Result<Preset, AppError> {
    create_preset_at(default_store()?, name, components, options)
}

pub fn create_preset_at(
    store: impl Into<PathBuf>,
    name: &str,
    components: &[String],
    options: CreatePresetOptions,
) -> Result<Preset, AppError> {
    preset::create(&create_context(store.into())?, name, components, options)
}

/// Delete a custom preset by id or label.
pub fn delete_preset(identifier: &str) -> Result<Preset, AppError> {
    delete_preset_at(default_store()?, identifier)
}

pub fn delete_preset_at(store: impl Into<PathBuf>, identifier: &str) -> Result<Preset, AppError> {
    preset::delete(&create_context(store.into())?, identifier)
}

/// Resolve a preset and plan installation of its missing components.
pub fn plan_preset_install(identifier: &str) -> Result<(Preset, AddPlan), AppError> {
    plan_preset_install_at(std::env::current_dir()?, default_store()?, identifier)
}

pub fn plan_preset_install_at(
    root: impl Into<PathBuf>,
    store: impl Into<PathBuf>,
    identifier: &str,
) -> Result<(Preset, AddPlan), AppError> {
    let ctx = create_context(store.into())?;
    let project = FilesystemProject::new(root.into());
    preset::plan_install(&ctx, &project, identifier)
}

/// Location of the per-user custom preset file.
pub fn preset_store_path() -> Result<PathBuf, AppError> {
    default_store()
}

/// Whether `root` holds a scaffolding tool configuration.
pub fn is_initialized_at(root: &Path) -> bool {
    FilesystemProject::new(root.to_path_buf()).is_initialized()
}
