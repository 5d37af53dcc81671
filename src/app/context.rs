use crate::app::services::PresetResolver;
use crate::ports::{BuiltinPresetSource, ComponentCatalog, PresetRepository};

/// Application context holding dependencies for command execution.
pub struct AppContext<C: ComponentCatalog, B: BuiltinPresetSource, R: PresetRepository> {
    catalog: C,
    presets: B,
    repository: R,
}

impl<C: ComponentCatalog, B: BuiltinPresetSource, R: PresetRepository> AppContext<C, B, R> {
    /// Create a new application context.
    pub fn new(catalog: C, presets: B, repository: R) -> Self {
        Self { catalog, presets, repository }
    }

    /// Get a reference to the component catalog.
    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Get a reference to the builtin preset source.
    pub fn presets(&self) -> &B {
        &self.presets
    }

    /// Get a reference to the custom preset repository.
    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Preset resolver bound to this context.
    pub fn resolver(&self) -> PresetResolver<'_, B, C, R> {
        PresetResolver::new(&self.presets, &self.catalog, &self.repository)
    }
}
