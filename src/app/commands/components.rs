//! Catalog listing.

use crate::domain::ComponentDescriptor;
use crate::ports::ComponentCatalog;

/// Every catalog component in declared order.
pub fn list<C: ComponentCatalog>(catalog: &C) -> Vec<&ComponentDescriptor> {
    catalog.list_all()
}

/// Components that declare `id` as an internal dependency.
pub fn dependents_of<'c, C: ComponentCatalog>(catalog: &'c C, id: &str) -> Vec<&'c ComponentDescriptor> {
    catalog.list_all().into_iter().filter(|c| c.requires(id)).collect()
}
