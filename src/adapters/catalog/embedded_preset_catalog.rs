//! Builtin preset adapter - loads compiled-in presets and resolves their components.

use std::collections::BTreeSet;

use serde::Deserialize;

use super::CATALOG_DIR;
use crate::domain::{AppError, Preset, PresetSource};
use crate::ports::{BuiltinPresetSource, ComponentCatalog};

const PRESETS_DIR: &str = "presets";

/// Metadata parsed from `presets/<id>.toml`.
#[derive(Debug, Deserialize)]
struct PresetMeta {
    /// Position in listings.
    #[serde(default)]
    order: u32,
    label: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    components: Vec<String>,
}

/// Presets shipped with the binary. Loaded once, never mutated.
#[derive(Debug, Clone)]
pub struct EmbeddedPresetCatalog {
    presets: Vec<Preset>,
}

impl EmbeddedPresetCatalog {
    /// Load every embedded preset, resolving component ids against `catalog`.
    pub fn new<C: ComponentCatalog>(catalog: &C) -> Result<Self, AppError> {
        let dir = CATALOG_DIR.get_dir(PRESETS_DIR).ok_or_else(|| AppError::InvalidCatalog {
            entry: PRESETS_DIR.to_string(),
            reason: "missing from embedded assets".to_string(),
        })?;

        let mut entries = Vec::new();
        for file in dir.files() {
            let path = file.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("toml") {
                continue;
            }
            let Some(id) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };
            let content = file.contents_utf8().ok_or_else(|| AppError::InvalidCatalog {
                entry: id.to_string(),
                reason: "not valid UTF-8".to_string(),
            })?;
            entries.push((id.to_string(), content));
        }

        let mut loaded = Vec::with_capacity(entries.len());
        for (id, content) in entries {
            loaded.push(parse_preset(&id, content, catalog)?);
        }
        loaded.sort_by(|(a_order, a), (b_order, b)| a_order.cmp(b_order).then(a.id.cmp(&b.id)));

        Ok(Self { presets: loaded.into_iter().map(|(_, preset)| preset).collect() })
    }

    /// Build a catalog from already-resolved presets.
    pub fn from_presets(presets: Vec<Preset>) -> Self {
        Self { presets }
    }
}

fn parse_preset<C: ComponentCatalog>(
    id: &str,
    content: &str,
    catalog: &C,
) -> Result<(u32, Preset), AppError> {
    let meta: PresetMeta = toml::from_str(content).map_err(|e| AppError::InvalidCatalog {
        entry: id.to_string(),
        reason: e.to_string(),
    })?;

    let mut seen = BTreeSet::new();
    let mut components = Vec::with_capacity(meta.components.len());
    for component_id in &meta.components {
        if !seen.insert(component_id.as_str()) {
            return Err(AppError::InvalidCatalog {
                entry: id.to_string(),
                reason: format!("component '{}' listed twice", component_id),
            });
        }
        let descriptor = catalog.get(component_id).ok_or_else(|| AppError::InvalidCatalog {
            entry: id.to_string(),
            reason: format!("unknown component '{}'", component_id),
        })?;
        components.push(descriptor.clone());
    }

    let preset = Preset {
        id: id.to_string(),
        label: meta.label,
        description: meta.description,
        components,
        source: PresetSource::Builtin,
        created_at: None,
    };
    Ok((meta.order, preset))
}

impl BuiltinPresetSource for EmbeddedPresetCatalog {
    fn builtin_presets(&self) -> &[Preset] {
        &self.presets
    }
}
