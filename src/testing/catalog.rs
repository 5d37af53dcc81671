use std::collections::BTreeMap;

use crate::domain::{ComponentDescriptor, ComponentId, Preset, PresetSource};
use crate::ports::{BuiltinPresetSource, ComponentCatalog};

/// Build a descriptor from plain strings.
pub fn make_component(id: &str, external: &[&str], internal: &[&str]) -> ComponentDescriptor {
    ComponentDescriptor {
        id: ComponentId::new(id).unwrap(),
        label: id.to_string(),
        external_dependencies: external.iter().map(|s| s.to_string()).collect(),
        internal_dependencies: internal.iter().map(|s| ComponentId::new(s).unwrap()).collect(),
    }
}

/// Build a builtin preset whose components carry no dependencies.
pub fn make_preset(id: &str, label: &str, components: &[&str]) -> Preset {
    Preset {
        id: id.to_string(),
        label: label.to_string(),
        description: format!("{} preset", label),
        components: components.iter().map(|c| make_component(c, &[], &[])).collect(),
        source: PresetSource::Builtin,
        created_at: None,
    }
}

/// In-memory component catalog.
#[derive(Debug, Clone, Default)]
pub struct TestCatalog {
    components: Vec<ComponentDescriptor>,
    index: BTreeMap<String, usize>,
}

impl TestCatalog {
    pub fn new(components: Vec<ComponentDescriptor>) -> Self {
        let index = components.iter().enumerate().map(|(i, c)| (c.id.to_string(), i)).collect();
        Self { components, index }
    }
}

impl ComponentCatalog for TestCatalog {
    fn get(&self, id: &str) -> Option<&ComponentDescriptor> {
        self.index.get(id).map(|&i| &self.components[i])
    }

    fn list_all(&self) -> Vec<&ComponentDescriptor> {
        self.components.iter().collect()
    }
}

/// Fixed list of builtin presets.
#[derive(Debug, Clone, Default)]
pub struct TestPresets {
    presets: Vec<Preset>,
}

impl TestPresets {
    pub fn new(presets: Vec<Preset>) -> Self {
        Self { presets }
    }
}

impl BuiltinPresetSource for TestPresets {
    fn builtin_presets(&self) -> &[Preset] {
        &self.presets
    }
}
