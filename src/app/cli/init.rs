use crate::app::api::{self, InitOptions};
use crate::domain::AppError;

use super::{cancelled, label_list, prompt};

pub(super) fn run_init(
    components: Vec<String>,
    save_as: Option<String>,
    yes: bool,
) -> Result<(), AppError> {
    let components = if components.is_empty() {
        let catalog = api::components()?;
        match prompt::multi_select("Pick the components to install", &label_list(&catalog))? {
            Some(indices) => indices.into_iter().map(|i| catalog[i].id.to_string()).collect(),
            None => return cancelled("Cancelled"),
        }
    } else {
        components
    };

    if components.is_empty() {
        println!("No components selected.");
        return Ok(());
    }

    let save_as = match save_as {
        Some(name) => Some(name),
        None if !yes && prompt::is_interactive() => {
            if prompt::confirm("Save this selection as a preset?", false, false)? {
                match prompt::text("Preset name")? {
                    Some(name) => Some(name),
                    None => return cancelled("Cancelled"),
                }
            } else {
                None
            }
        }
        None => None,
    };

    if !prompt::confirm("Proceed with installation?", true, yes)? {
        return cancelled("Installation cancelled");
    }

    let outcome = api::init(InitOptions { components, save_as })?;

    if let Some(preset) = &outcome.preset {
        println!("✅ Saved preset \"{}\" ({})", preset.label, preset.id);
    }
    if !outcome.skipped.is_empty() {
        println!("Already installed (skipping): {}", outcome.skipped.join(", "));
    }
    println!("✅ Installed {} component(s)", outcome.installed.len());
    Ok(())
}
