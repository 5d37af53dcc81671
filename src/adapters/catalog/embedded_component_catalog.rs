//! Component catalog adapter - loads component descriptors from embedded assets.

use std::collections::{BTreeMap, BTreeSet};

use serde::Deserialize;

use super::{CATALOG_DIR, embedded_text};
use crate::domain::{AppError, ComponentDescriptor, ComponentId};
use crate::ports::ComponentCatalog;

const COMPONENTS_FILE: &str = "components.toml";

/// Top-level layout of `components.toml`.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    component: Vec<ComponentMeta>,
}

/// One `[[component]]` table.
#[derive(Debug, Deserialize)]
struct ComponentMeta {
    id: String,
    /// Display label (defaults to the id when missing).
    label: Option<String>,
    #[serde(default)]
    dependencies: Vec<String>,
    #[serde(default)]
    internal_dependencies: Vec<String>,
}

/// Catalog of every component the scaffolding tool can generate.
#[derive(Debug, Clone)]
pub struct EmbeddedComponentCatalog {
    components: Vec<ComponentDescriptor>,
    index: BTreeMap<String, usize>,
}

impl EmbeddedComponentCatalog {
    /// Load the catalog compiled into the binary.
    pub fn new() -> Result<Self, AppError> {
        let content = embedded_text(&CATALOG_DIR, COMPONENTS_FILE)?;
        Self::from_toml(content)
    }

    /// Parse and validate a catalog document.
    pub fn from_toml(content: &str) -> Result<Self, AppError> {
        let file: CatalogFile = toml::from_str(content).map_err(|e| AppError::ParseError {
            what: COMPONENTS_FILE.to_string(),
            details: e.to_string(),
        })?;

        let mut components = Vec::with_capacity(file.component.len());
        let mut index = BTreeMap::new();

        for meta in file.component {
            let id = ComponentId::new(&meta.id).map_err(|_| AppError::InvalidCatalog {
                entry: meta.id.clone(),
                reason: "invalid component id".to_string(),
            })?;

            if index.contains_key(id.as_str()) {
                return Err(AppError::InvalidCatalog {
                    entry: meta.id,
                    reason: "declared more than once".to_string(),
                });
            }

            let mut internal_dependencies = BTreeSet::new();
            for dep in &meta.internal_dependencies {
                let dep_id = ComponentId::new(dep).map_err(|_| AppError::InvalidCatalog {
                    entry: meta.id.clone(),
                    reason: format!("invalid internal dependency '{}'", dep),
                })?;
                if dep_id == id {
                    return Err(AppError::InvalidCatalog {
                        entry: meta.id.clone(),
                        reason: "component cannot depend on itself".to_string(),
                    });
                }
                internal_dependencies.insert(dep_id);
            }

            let label = meta.label.unwrap_or_else(|| meta.id.clone());
            index.insert(id.to_string(), components.len());
            components.push(ComponentDescriptor {
                id,
                label,
                external_dependencies: meta.dependencies.into_iter().collect(),
                internal_dependencies,
            });
        }

        // Internal dependencies must point inside the catalog.
        for component in &components {
            if let Some(missing) =
                component.internal_dependencies.iter().find(|dep| !index.contains_key(dep.as_str()))
            {
                return Err(AppError::InvalidCatalog {
                    entry: component.id.to_string(),
                    reason: format!("unknown internal dependency '{}'", missing),
                });
            }
        }

        Ok(Self { components, index })
    }
}

impl ComponentCatalog for EmbeddedComponentCatalog {
    fn get(&self, id: &str) -> Option<&ComponentDescriptor> {
        self.index.get(id).map(|&position| &self.components[position])
    }

    fn list_all(&self) -> Vec<&ComponentDescriptor> {
        self.components.iter().collect()
    }
}
