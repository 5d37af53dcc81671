//! Component catalog port definition.

use crate::domain::ComponentDescriptor;

/// Trait for accessing the component catalog.
pub trait ComponentCatalog {
    /// Get a component by id.
    fn get(&self, id: &str) -> Option<&ComponentDescriptor>;

    /// List all available components in catalog order.
    fn list_all(&self) -> Vec<&ComponentDescriptor>;

    /// Get all component ids in catalog order.
    fn names(&self) -> Vec<&str> {
        self.list_all().into_iter().map(|c| c.id.as_str()).collect()
    }

    /// Whether `id` names a known component.
    fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }
}
