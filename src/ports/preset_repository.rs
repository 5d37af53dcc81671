//! Custom preset persistence port.

use crate::domain::{AppError, CustomPresetDocument};

/// Whole-document storage for user-defined presets.
///
/// The document is read in full and rewritten in full; there is no locking,
/// so concurrent writers race and the later one wins.
pub trait PresetRepository {
    /// Load the current document. An absent or unreadable store yields an
    /// empty document.
    fn load(&self) -> Result<CustomPresetDocument, AppError>;

    /// Replace the stored document.
    fn save(&self, document: &CustomPresetDocument) -> Result<(), AppError>;
}
