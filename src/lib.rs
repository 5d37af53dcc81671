//! compadcn: add, remove, lint and bundle shadcn/ui components.
//!
//! The core decides which installed components can be removed without
//! breaking the ones that stay, and resolves named presets (builtin or
//! user-defined) into deduplicated component sets.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::*;
pub use domain::{ConflictEntry, ConflictReport, DependencyConflictResolver, derive_preset_id};
