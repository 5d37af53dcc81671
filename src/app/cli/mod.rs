//! CLI Adapter.

mod init;
mod preset;
mod prompt;
mod remove;

use std::io::Write;

use clap::{Parser, Subcommand};

use crate::app::api;
use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "compadcn")]
#[command(version)]
#[command(
    about = "Add, remove, lint and bundle shadcn/ui components",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pick components, optionally save them as a preset, and install them
    #[clap(visible_alias = "i")]
    Init {
        /// Components to install (prompts when empty)
        components: Vec<String>,
        /// Save the selection as a custom preset with this name
        #[arg(short, long)]
        save_as: Option<String>,
        /// Skip confirmation prompts
        #[arg(short, long)]
        yes: bool,
    },
    /// Install components that are not present yet
    #[clap(visible_alias = "a")]
    Add {
        /// Component ids (prompts when empty)
        components: Vec<String>,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Remove installed components, their imports, and optionally their packages
    #[clap(visible_alias = "rm")]
    Remove {
        /// Component ids (prompts when empty)
        components: Vec<String>,
        /// Packages to uninstall, comma separated
        #[arg(long, value_delimiter = ',', conflicts_with = "all_deps")]
        deps: Vec<String>,
        /// Uninstall every package no remaining component needs
        #[arg(long)]
        all_deps: bool,
        /// Skip confirmation prompts
        #[arg(short, long)]
        yes: bool,
    },
    /// Report installed components that no source file imports
    #[clap(visible_alias = "l")]
    Lint,
    /// Manage builtin and custom presets
    #[clap(visible_alias = "p")]
    Preset {
        #[command(subcommand)]
        command: preset::PresetCommands,
    },
    /// List every component in the catalog
    #[clap(visible_alias = "c")]
    Components {
        /// Show dependency details for a single component
        #[arg(long)]
        detail: Option<String>,
    },
}

/// Entry point for the CLI.
pub fn run() {
    init_logger();
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Init { components, save_as, yes } => init::run_init(components, save_as, yes),
        Commands::Add { components, yes } => run_add(components, yes),
        Commands::Remove { components, deps, all_deps, yes } => {
            remove::run_remove(components, deps, all_deps, yes)
        }
        Commands::Lint => run_lint(),
        Commands::Preset { command } => preset::run_preset(command),
        Commands::Components { detail } => run_components(detail),
    };

    if let Err(e) = result {
        log::debug!("Command failed: {:?}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Warnings by default; `RUST_LOG` overrides.
fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();
}

fn cancelled(message: &str) -> Result<(), AppError> {
    println!("{}", message);
    Ok(())
}

fn label_list(components: &[api::ComponentDescriptor]) -> Vec<String> {
    components.iter().map(|c| format!("{} ({})", c.label, c.id)).collect()
}

fn run_add(components: Vec<String>, yes: bool) -> Result<(), AppError> {
    let root = std::env::current_dir()?;

    let requested = if components.is_empty() {
        let available = api::available_components_at(&root)?;
        if available.is_empty() {
            println!("All components are already installed.");
            return Ok(());
        }
        match prompt::multi_select("Pick the components to install", &label_list(&available))? {
            Some(indices) => indices.into_iter().map(|i| available[i].id.to_string()).collect(),
            None => return cancelled("Cancelled"),
        }
    } else {
        components
    };

    let plan = api::plan_add_at(&root, &requested)?;
    if !plan.already_installed.is_empty() {
        println!("Already installed (skipping): {}", plan.already_installed.join(", "));
    }
    if plan.is_empty() {
        println!("Nothing to install.");
        return Ok(());
    }

    println!("Components to be installed:");
    for id in &plan.to_install {
        println!("  • {}", id);
    }
    if !prompt::confirm("Proceed with installation?", true, yes)? {
        return cancelled("Installation cancelled");
    }

    api::install_at(&root, &plan)?;
    println!("✅ Installed {} component(s)", plan.to_install.len());
    Ok(())
}

fn run_lint() -> Result<(), AppError> {
    let report = api::lint()?;

    if report.installed.is_empty() {
        println!("No components installed.");
        return Ok(());
    }

    println!(
        "Scanned {} installed component(s): {} used, {} unused",
        report.installed.len(),
        report.used.len(),
        report.unused.len()
    );

    match report.suggested_command() {
        None => println!("✅ All installed components are in use"),
        Some(command) => {
            println!("\nUnused components:");
            for id in &report.unused {
                println!("  • {}", id);
            }
            println!("\nTo remove them, run:\n  {}", command);
        }
    }
    Ok(())
}

fn run_components(detail: Option<String>) -> Result<(), AppError> {
    let components = api::components()?;

    if let Some(id) = detail {
        let component = components
            .iter()
            .find(|c| c.id.as_str() == id)
            .ok_or_else(|| AppError::InvalidComponents(vec![id.clone()]))?;
        println!("{} ({})", component.label, component.id);
        if !component.internal_dependencies.is_empty() {
            println!("\nRequires:");
            for dep in &component.internal_dependencies {
                println!("  • {}", dep);
            }
        }
        let dependents = api::component_dependents(&id)?;
        if !dependents.is_empty() {
            println!("\nRequired by:");
            for dependent in &dependents {
                println!("  • {}", dependent.id);
            }
        }
        if !component.external_dependencies.is_empty() {
            println!("\nPackages:");
            for package in &component.external_dependencies {
                println!("  • {}", package);
            }
        }
        return Ok(());
    }

    println!("Available components:");
    for component in &components {
        println!("  {} - {}", component.id, component.label);
    }
    Ok(())
}
