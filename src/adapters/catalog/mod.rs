//! Embedded catalog assets: components and builtin presets.

mod embedded_component_catalog;
mod embedded_preset_catalog;

use include_dir::{Dir, include_dir};

use crate::domain::AppError;

pub use embedded_component_catalog::EmbeddedComponentCatalog;
pub use embedded_preset_catalog::EmbeddedPresetCatalog;

/// Embedded catalog directory.
static CATALOG_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/src/assets/catalog");

/// Read an embedded file as UTF-8.
fn embedded_text<'a>(dir: &'a Dir<'a>, path: &str) -> Result<&'a str, AppError> {
    let file = dir.get_file(path).ok_or_else(|| AppError::InvalidCatalog {
        entry: path.to_string(),
        reason: "missing from embedded assets".to_string(),
    })?;
    file.contents_utf8().ok_or_else(|| AppError::InvalidCatalog {
        entry: path.to_string(),
        reason: "not valid UTF-8".to_string(),
    })
}
