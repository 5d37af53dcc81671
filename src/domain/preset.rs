//! Preset domain model: named, deduplicated collections of components.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::identifiers::validation::validate_preset_name_chars;
use crate::domain::{AppError, ComponentDescriptor};

/// Minimum length of a trimmed preset name.
pub const MIN_PRESET_NAME_LEN: usize = 3;

/// Where a preset comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresetSource {
    /// Compiled into the binary, immutable.
    Builtin,
    /// Created by the user and persisted in the custom preset store.
    Custom,
}

/// A named collection of components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preset {
    pub id: String,
    pub label: String,
    pub description: String,
    pub components: Vec<ComponentDescriptor>,
    pub source: PresetSource,
    /// Creation time; custom presets only.
    pub created_at: Option<DateTime<Utc>>,
}

impl Preset {
    pub fn is_custom(&self) -> bool {
        self.source == PresetSource::Custom
    }

    /// Component ids in declared order.
    pub fn component_ids(&self) -> Vec<String> {
        self.components.iter().map(|c| c.id.to_string()).collect()
    }

    /// Case-insensitive label comparison used by identifier lookups.
    pub fn label_matches(&self, identifier: &str) -> bool {
        self.label.to_lowercase() == identifier.to_lowercase()
    }
}

/// Derive a stable preset id from a display name.
///
/// Lowercases, turns whitespace runs into a single hyphen, strips anything
/// outside `[a-z0-9-]`, collapses hyphen runs, and trims hyphens at both ends.
/// Applying it to its own output is a no-op.
pub fn derive_preset_id(name: &str) -> String {
    let mut hyphenated = String::with_capacity(name.len());
    let mut in_whitespace = false;
    for c in name.to_lowercase().chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                hyphenated.push('-');
            }
            in_whitespace = true;
        } else {
            hyphenated.push(c);
            in_whitespace = false;
        }
    }

    let mut id = String::with_capacity(hyphenated.len());
    for c in hyphenated.chars().filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-')
    {
        if c == '-' && id.ends_with('-') {
            continue;
        }
        id.push(c);
    }

    id.trim_matches('-').to_string()
}

/// Validate a user-supplied preset name and return its trimmed form.
pub fn validate_preset_name(name: &str) -> Result<String, AppError> {
    let trimmed = name.trim();
    let invalid = |reason: &str| AppError::InvalidPresetName {
        name: name.to_string(),
        reason: reason.to_string(),
    };

    if trimmed.is_empty() {
        return Err(invalid("name is required"));
    }
    if trimmed.chars().count() < MIN_PRESET_NAME_LEN {
        return Err(invalid("name must be at least 3 characters long"));
    }
    if !validate_preset_name_chars(trimmed) {
        return Err(invalid("only letters, digits, hyphens, underscores and spaces are allowed"));
    }
    if derive_preset_id(trimmed).is_empty() {
        return Err(invalid("name must contain at least one ASCII letter or digit"));
    }
    Ok(trimmed.to_string())
}

/// A custom preset as persisted in the preset document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredPreset {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub components: Vec<ComponentDescriptor>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl StoredPreset {
    pub fn to_preset(&self) -> Preset {
        Preset {
            id: self.id.clone(),
            label: self.label.clone(),
            description: self.description.clone(),
            components: self.components.clone(),
            source: PresetSource::Custom,
            created_at: Some(self.created_at),
        }
    }
}

/// The whole custom preset store, read and rewritten as one document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomPresetDocument {
    #[serde(default)]
    pub presets: BTreeMap<String, StoredPreset>,
}

impl CustomPresetDocument {
    /// Find a stored preset by exact id, then by case-insensitive label.
    pub fn resolve(&self, identifier: &str) -> Option<&StoredPreset> {
        self.presets.get(identifier).or_else(|| {
            let wanted = identifier.to_lowercase();
            self.presets.values().find(|p| p.label.to_lowercase() == wanted)
        })
    }
}
