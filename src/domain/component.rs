//! Component domain model.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::AppError;
use crate::impl_validated_id;

/// A validated component identifier.
///
/// Guarantees:
/// - Non-empty
/// - Contains only ASCII alphanumeric characters, `-`, or `_`
/// - No path traversal components (/, \\, .., etc.)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ComponentId(String);

impl_validated_id!(ComponentId, AppError::InvalidComponentId);

/// A UI component the scaffolding tool knows how to generate.
///
/// The serialized field names match the custom preset document
/// (`value`, `dependencies`, `internal_dependencies`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentDescriptor {
    /// Stable identifier, also the generated file stem.
    #[serde(rename = "value")]
    pub id: ComponentId,
    /// Display name.
    pub label: String,
    /// Third-party packages the component needs.
    #[serde(rename = "dependencies", default)]
    pub external_dependencies: BTreeSet<String>,
    /// Other catalog components this one structurally requires.
    #[serde(default)]
    pub internal_dependencies: BTreeSet<ComponentId>,
}

impl ComponentDescriptor {
    /// Whether this component declares `other` as an internal dependency.
    pub fn requires(&self, other: &str) -> bool {
        self.internal_dependencies.contains(other)
    }
}
