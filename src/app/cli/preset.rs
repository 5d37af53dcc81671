//! Preset subcommands.

use clap::Subcommand;

use crate::app::api::{self, CreatePresetOptions, Preset, PresetListFilter};
use crate::domain::AppError;

use super::{cancelled, label_list, prompt};

#[derive(Subcommand)]
pub enum PresetCommands {
    /// Install every component of a preset
    #[clap(visible_alias = "i")]
    Install {
        /// Preset id or label
        preset: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// List builtin and custom presets
    #[clap(visible_alias = "ls")]
    List {
        /// Only builtin presets
        #[arg(long, conflicts_with = "custom")]
        builtin: bool,
        /// Only custom presets
        #[arg(long)]
        custom: bool,
    },
    /// Show the components of a preset
    #[clap(visible_alias = "s")]
    Show {
        /// Preset id or label
        preset: String,
    },
    /// Create a custom preset
    #[clap(visible_alias = "c")]
    Create {
        /// Display name; the id is derived from it
        name: String,
        /// Component ids
        components: Vec<String>,
        /// Description (generated when omitted)
        #[arg(short, long)]
        description: Option<String>,
        /// Preset whose components are included (repeatable)
        #[arg(short, long = "base")]
        bases: Vec<String>,
    },
    /// Delete a custom preset
    #[clap(visible_alias = "rm")]
    Delete {
        /// Preset id or label
        preset: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

pub(super) fn run_preset(command: PresetCommands) -> Result<(), AppError> {
    match command {
        PresetCommands::Install { preset, yes } => run_install(&preset, yes),
        PresetCommands::List { builtin, custom } => {
            run_list(PresetListFilter { builtin_only: builtin, custom_only: custom })
        }
        PresetCommands::Show { preset } => run_show(&preset),
        PresetCommands::Create { name, components, description, bases } => {
            run_create(&name, components, CreatePresetOptions { description, bases })
        }
        PresetCommands::Delete { preset, yes } => run_delete(&preset, yes),
    }
}

fn origin(preset: &Preset) -> &'static str {
    if preset.is_custom() { "custom" } else { "builtin" }
}

fn run_install(identifier: &str, yes: bool) -> Result<(), AppError> {
    let root = std::env::current_dir()?;
    let (preset, plan) = api::plan_preset_install(identifier)?;

    println!("Installing preset: {} ({} components)", preset.label, preset.components.len());
    if !plan.already_installed.is_empty() {
        println!("Already installed (skipping): {}", plan.already_installed.join(", "));
    }
    if plan.is_empty() {
        println!("✅ Every component of \"{}\" is already installed", preset.label);
        return Ok(());
    }

    println!("Components to install:");
    for id in &plan.to_install {
        println!("  • {}", id);
    }
    if !prompt::confirm("Proceed with installation?", true, yes)? {
        return cancelled("Installation cancelled");
    }

    api::install_at(&root, &plan)?;
    println!("✅ Preset \"{}\" installed", preset.label);
    Ok(())
}

fn run_list(filter: PresetListFilter) -> Result<(), AppError> {
    let listing = api::list_presets(filter)?;

    if !filter.custom_only {
        println!("Built-in Presets:");
        for preset in &listing.builtin {
            println!("  • {} ({}) - {}", preset.label, preset.id, preset.description);
            println!("    Components: {}", preset.components.len());
        }
        println!();
    }

    if !filter.builtin_only {
        println!("Custom Presets:");
        if listing.custom.is_empty() {
            println!("  No custom presets found.");
        }
        for preset in &listing.custom {
            println!("  • {} ({}) - {}", preset.label, preset.id, preset.description);
            match preset.created_at {
                Some(created_at) => println!(
                    "    Components: {} | Created: {}",
                    preset.components.len(),
                    created_at.format("%Y-%m-%d")
                ),
                None => println!("    Components: {}", preset.components.len()),
            }
        }
    }
    Ok(())
}

fn run_show(identifier: &str) -> Result<(), AppError> {
    let preset = api::show_preset(identifier)?;

    println!("{} ({}) [{}]", preset.label, preset.id, origin(&preset));
    println!("{}", preset.description);
    println!("\nComponents:");
    for component in &preset.components {
        println!("  • {} ({})", component.label, component.id);
    }
    println!("\nTotal: {} components", preset.components.len());
    if let Some(created_at) = preset.created_at {
        println!("Created: {}", created_at.format("%Y-%m-%d"));
    }
    Ok(())
}

fn run_create(
    name: &str,
    components: Vec<String>,
    options: CreatePresetOptions,
) -> Result<(), AppError> {
    let components = if components.is_empty() && options.bases.is_empty() && prompt::is_interactive()
    {
        let catalog = api::components()?;
        match prompt::multi_select("Select components for the preset", &label_list(&catalog))? {
            Some(indices) => indices.into_iter().map(|i| catalog[i].id.to_string()).collect(),
            None => return cancelled("Cancelled"),
        }
    } else {
        components
    };

    let preset = api::create_preset(name, &components, options)?;

    println!("✅ Created custom preset \"{}\" ({})", preset.label, preset.id);
    println!("  {} component(s): {}", preset.components.len(), preset.component_ids().join(", "));
    Ok(())
}

fn run_delete(identifier: &str, yes: bool) -> Result<(), AppError> {
    let preset = api::find_custom_preset(identifier)?
        .ok_or_else(|| AppError::PresetNotFound(identifier.to_string()))?;

    let question = format!("Delete custom preset \"{}\"?", preset.label);
    if !prompt::confirm(&question, false, yes)? {
        return cancelled("Cancelled");
    }

    let deleted = api::delete_preset(&preset.id)?;
    println!("✅ Deleted custom preset \"{}\"", deleted.label);
    Ok(())
}
