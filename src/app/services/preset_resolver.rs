//! Preset lookup, composition, and persistence of custom presets.

use std::collections::BTreeSet;

use chrono::Utc;

use crate::domain::{
    AppError, ComponentDescriptor, ComponentId, Preset, StoredPreset, derive_preset_id,
    validate_preset_name,
};
use crate::ports::{BuiltinPresetSource, ComponentCatalog, PresetRepository};

/// Result of resolving a preset identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresetLookup {
    FoundBuiltin(Preset),
    FoundCustom(Preset),
    NotFound,
}

impl PresetLookup {
    pub fn is_found(&self) -> bool {
        !matches!(self, PresetLookup::NotFound)
    }

    pub fn preset(&self) -> Option<&Preset> {
        match self {
            PresetLookup::FoundBuiltin(preset) | PresetLookup::FoundCustom(preset) => Some(preset),
            PresetLookup::NotFound => None,
        }
    }

    pub fn into_preset(self) -> Option<Preset> {
        match self {
            PresetLookup::FoundBuiltin(preset) | PresetLookup::FoundCustom(preset) => Some(preset),
            PresetLookup::NotFound => None,
        }
    }
}

/// Result of deleting a custom preset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted(Preset),
    NotFound,
}

/// Optional inputs of [`PresetResolver::create_preset`].
#[derive(Debug, Clone, Default)]
pub struct CreatePresetOptions {
    /// Description; a generated one is used when absent or blank.
    pub description: Option<String>,
    /// Identifiers of presets whose components are merged in.
    pub bases: Vec<String>,
}

/// Which preset groups to list. Both flags unset lists everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct PresetListFilter {
    pub builtin_only: bool,
    pub custom_only: bool,
}

/// Presets grouped by origin.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PresetListing {
    /// Builtin presets in declared order.
    pub builtin: Vec<Preset>,
    /// Custom presets ordered by id.
    pub custom: Vec<Preset>,
}

/// Resolves presets across the builtin set and the custom preset store.
pub struct PresetResolver<'a, B, C, R>
where
    B: BuiltinPresetSource,
    C: ComponentCatalog,
    R: PresetRepository,
{
    builtin: &'a B,
    catalog: &'a C,
    repository: &'a R,
}

impl<'a, B, C, R> PresetResolver<'a, B, C, R>
where
    B: BuiltinPresetSource,
    C: ComponentCatalog,
    R: PresetRepository,
{
    pub fn new(builtin: &'a B, catalog: &'a C, repository: &'a R) -> Self {
        Self { builtin, catalog, repository }
    }

    /// Resolve `identifier` to a preset.
    ///
    /// Order: builtin id, builtin label, custom id, custom label. Labels
    /// compare case-insensitively; the first match wins.
    pub fn find_preset(&self, identifier: &str) -> Result<PresetLookup, AppError> {
        let builtin = self.builtin.builtin_presets();

        if let Some(preset) = builtin.iter().find(|p| p.id == identifier) {
            return Ok(PresetLookup::FoundBuiltin(preset.clone()));
        }

        let document = self.repository.load()?;

        if let Some(preset) = builtin.iter().find(|p| p.label_matches(identifier)) {
            let wanted = identifier.to_lowercase();
            if let Some(shadowed) =
                document.presets.values().find(|stored| stored.label.to_lowercase() == wanted)
            {
                log::warn!(
                    "Preset label \"{}\" matches builtin preset '{}' and custom preset '{}'; using the builtin one",
                    identifier,
                    preset.id,
                    shadowed.id
                );
            }
            return Ok(PresetLookup::FoundBuiltin(preset.clone()));
        }

        match document.resolve(identifier) {
            Some(stored) => Ok(PresetLookup::FoundCustom(stored.to_preset())),
            None => Ok(PresetLookup::NotFound),
        }
    }

    /// Union of the component ids of every base preset, first-seen order.
    ///
    /// Fails on the first identifier that resolves to nothing.
    pub fn merge_base_presets(&self, bases: &[String]) -> Result<Vec<ComponentId>, AppError> {
        let mut seen = BTreeSet::new();
        let mut merged = Vec::new();

        for base in bases {
            let preset = self
                .find_preset(base)?
                .into_preset()
                .ok_or_else(|| AppError::BasePresetNotFound(base.clone()))?;
            for component in preset.components {
                if seen.insert(component.id.to_string()) {
                    merged.push(component.id);
                }
            }
        }

        Ok(merged)
    }

    /// Validate and persist a new custom preset.
    ///
    /// Nothing is written unless every check passes.
    pub fn create_preset(
        &self,
        name: &str,
        explicit_components: &[String],
        options: CreatePresetOptions,
    ) -> Result<Preset, AppError> {
        let label = validate_preset_name(name)?;
        let id = derive_preset_id(&label);

        if self.find_preset(&label)?.is_found() || self.find_preset(&id)?.is_found() {
            return Err(AppError::PresetExists(label));
        }

        let mut effective: Vec<String> =
            self.merge_base_presets(&options.bases)?.iter().map(|c| c.to_string()).collect();
        for component in explicit_components {
            let component = component.trim();
            if !component.is_empty() && !effective.iter().any(|existing| existing == component) {
                effective.push(component.to_string());
            }
        }

        if effective.is_empty() {
            return Err(AppError::EmptyPreset);
        }

        let invalid: Vec<String> =
            effective.iter().filter(|c| !self.catalog.contains(c)).cloned().collect();
        if !invalid.is_empty() {
            return Err(AppError::InvalidComponents(invalid));
        }

        let components: Vec<ComponentDescriptor> =
            effective.iter().filter_map(|c| self.catalog.get(c)).cloned().collect();

        let description = options
            .description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| default_description(&options.bases, components.len()));

        let stored = StoredPreset {
            id: id.clone(),
            label,
            description,
            components,
            created_at: Utc::now(),
        };

        let mut document = self.repository.load()?;
        document.presets.insert(id, stored.clone());
        self.repository.save(&document)?;

        log::info!("Created custom preset '{}' with {} component(s)", stored.id, stored.components.len());
        Ok(stored.to_preset())
    }

    /// Custom preset by id, then by case-insensitive label. Builtins are ignored.
    pub fn find_custom_preset(&self, identifier: &str) -> Result<Option<Preset>, AppError> {
        Ok(self.repository.load()?.resolve(identifier).map(StoredPreset::to_preset))
    }

    /// Delete a custom preset by id, then by case-insensitive label.
    ///
    /// Builtin presets are never deleted. A miss performs no write.
    pub fn delete_preset(&self, identifier: &str) -> Result<DeleteOutcome, AppError> {
        let mut document = self.repository.load()?;

        let Some(id) = document.resolve(identifier).map(|stored| stored.id.clone()) else {
            return Ok(DeleteOutcome::NotFound);
        };
        let Some(removed) = document.presets.remove(&id) else {
            return Ok(DeleteOutcome::NotFound);
        };

        self.repository.save(&document)?;
        log::info!("Deleted custom preset '{}'", id);
        Ok(DeleteOutcome::Deleted(removed.to_preset()))
    }

    /// Builtin and custom presets, filtered by origin.
    pub fn list_presets(&self, filter: PresetListFilter) -> Result<PresetListing, AppError> {
        let mut listing = PresetListing::default();

        if !filter.custom_only {
            listing.builtin = self.builtin.builtin_presets().to_vec();
        }
        if !filter.builtin_only {
            let document = self.repository.load()?;
            listing.custom = document.presets.values().map(StoredPreset::to_preset).collect();
        }

        Ok(listing)
    }
}

fn default_description(bases: &[String], count: usize) -> String {
    if bases.is_empty() {
        format!("Custom preset with {} components", count)
    } else {
        format!("Custom preset based on {} with {} components", bases.join(", "), count)
    }
}
