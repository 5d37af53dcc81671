//! Pick components for a fresh project, optionally save them as a preset, and install.

use crate::app::AppContext;
use crate::app::commands::add;
use crate::app::services::CreatePresetOptions;
use crate::domain::{AppError, Preset};
use crate::ports::{
    BuiltinPresetSource, ComponentCatalog, ComponentInstaller, InstalledComponents,
    PresetRepository,
};

#[derive(Debug, Clone, Default)]
pub struct InitOptions {
    pub components: Vec<String>,
    /// Save the selection as a custom preset under this name first.
    pub save_as: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct InitOutcome {
    pub installed: Vec<String>,
    pub skipped: Vec<String>,
    pub preset: Option<Preset>,
}

pub fn execute<C, B, R, P, I>(
    ctx: &AppContext<C, B, R>,
    project: &P,
    installer: &I,
    options: InitOptions,
) -> Result<InitOutcome, AppError>
where
    C: ComponentCatalog,
    B: BuiltinPresetSource,
    R: PresetRepository,
    P: InstalledComponents,
    I: ComponentInstaller,
{
    let plan = add::plan(ctx.catalog(), project, &options.components)?;

    let preset = match &options.save_as {
        Some(name) => Some(ctx.resolver().create_preset(
            name,
            &options.components,
            CreatePresetOptions::default(),
        )?),
        None => None,
    };

    add::execute(installer, &plan)?;

    Ok(InitOutcome { installed: plan.to_install, skipped: plan.already_installed, preset })
}
