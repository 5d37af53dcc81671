pub mod component;
pub mod conflicts;
pub mod error;
pub mod identifiers;
pub mod preset;

pub use component::{ComponentDescriptor, ComponentId};
pub use conflicts::{ConflictEntry, ConflictReport, DependencyConflictResolver};
pub use error::AppError;
pub use preset::{
    CustomPresetDocument, Preset, PresetSource, StoredPreset, derive_preset_id,
    validate_preset_name,
};
