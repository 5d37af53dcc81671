//! Preset subcommands: install, list, show, create, delete.

use crate::app::AppContext;
use crate::app::commands::add::{self, AddPlan};
use crate::app::services::{
    CreatePresetOptions, DeleteOutcome, PresetListFilter, PresetListing, PresetLookup,
};
use crate::domain::{AppError, Preset};
use crate::ports::{BuiltinPresetSource, ComponentCatalog, InstalledComponents, PresetRepository};

/// Resolve `identifier`, failing when it names no preset.
pub fn show<C, B, R>(ctx: &AppContext<C, B, R>, identifier: &str) -> Result<Preset, AppError>
where
    C: ComponentCatalog,
    B: BuiltinPresetSource,
    R: PresetRepository,
{
    ctx.resolver()
        .find_preset(identifier)?
        .into_preset()
        .ok_or_else(|| AppError::PresetNotFound(identifier.to_string()))
}

pub fn list<C, B, R>(
    ctx: &AppContext<C, B, R>,
    filter: PresetListFilter,
) -> Result<PresetListing, AppError>
where
    C: ComponentCatalog,
    B: BuiltinPresetSource,
    R: PresetRepository,
{
    ctx.resolver().list_presets(filter)
}

/// Resolve a preset and plan installation of its missing components.
pub fn plan_install<C, B, R, P>(
    ctx: &AppContext<C, B, R>,
    project: &P,
    identifier: &str,
) -> Result<(Preset, AddPlan), AppError>
where
    C: ComponentCatalog,
    B: BuiltinPresetSource,
    R: PresetRepository,
    P: InstalledComponents,
{
    let lookup = ctx.resolver().find_preset(identifier)?;
    if let PresetLookup::FoundCustom(preset) = &lookup {
        log::debug!("Installing custom preset '{}'", preset.id);
    }
    let preset =
        lookup.into_preset().ok_or_else(|| AppError::PresetNotFound(identifier.to_string()))?;

    let plan = add::plan(ctx.catalog(), project, &preset.component_ids())?;
    Ok((preset, plan))
}

pub fn create<C, B, R>(
    ctx: &AppContext<C, B, R>,
    name: &str,
    components: &[String],
    options: CreatePresetOptions,
) -> Result<Preset, AppError>
where
    C: ComponentCatalog,
    B: BuiltinPresetSource,
    R: PresetRepository,
{
    ctx.resolver().create_preset(name, components, options)
}

/// Delete a custom preset. A miss is an error at this level.
pub fn delete<C, B, R>(ctx: &AppContext<C, B, R>, identifier: &str) -> Result<Preset, AppError>
where
    C: ComponentCatalog,
    B: BuiltinPresetSource,
    R: PresetRepository,
{
    match ctx.resolver().delete_preset(identifier)? {
        DeleteOutcome::Deleted(preset) => Ok(preset),
        DeleteOutcome::NotFound => Err(AppError::PresetNotFound(identifier.to_string())),
    }
}
