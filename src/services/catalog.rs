//! Catalog service: the component library behind the left-hand panel.
//!
//! DESIGN
//! ======
//! `CatalogStore` is the seam a durable backend would implement. The
//! in-memory `MemoryCatalog` keeps components in insertion order, which is
//! the order the panel lists them in. Components are immutable once added;
//! the only mutation after `add` is `remove`.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use canvas::placement::{CatalogComponent, ComponentId};
use tracing::info;
use uuid::Uuid;

use crate::error::ValidationError;

/// Components the editor starts with when seeding is enabled.
pub const STARTER_CATALOG: [(&str, f64); 4] = [
    ("Aluminum Headrail", 15.75),
    ("Blackout Fabric (sq ft)", 5.50),
    ("Plastic Chain Control", 3.20),
    ("Mounting Brackets (pair)", 2.50),
];

pub trait CatalogStore {
    /// Add a component.
    ///
    /// # Errors
    ///
    /// Returns `BlankName` for an empty or whitespace-only name and
    /// `InvalidCost` for a negative or non-finite cost.
    fn add(&mut self, name: &str, cost: f64) -> Result<CatalogComponent, ValidationError>;

    /// Remove a component, returning it if it was present.
    fn remove(&mut self, id: &ComponentId) -> Option<CatalogComponent>;

    fn get(&self, id: &ComponentId) -> Option<CatalogComponent>;

    /// All components in insertion order.
    fn list(&self) -> Vec<CatalogComponent>;
}

/// Check a component's name and cost.
///
/// # Errors
///
/// See [`CatalogStore::add`].
pub fn validate_component(name: &str, cost: f64) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::BlankName);
    }
    if !cost.is_finite() || cost < 0.0 {
        return Err(ValidationError::InvalidCost);
    }
    Ok(())
}

#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    components: Vec<CatalogComponent>,
}

impl MemoryCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A catalog holding [`STARTER_CATALOG`].
    #[must_use]
    pub fn seeded() -> Self {
        let components = STARTER_CATALOG
            .iter()
            .map(|&(name, cost)| CatalogComponent { id: Uuid::new_v4(), name: name.to_string(), cost })
            .collect();
        Self { components }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

impl CatalogStore for MemoryCatalog {
    fn add(&mut self, name: &str, cost: f64) -> Result<CatalogComponent, ValidationError> {
        validate_component(name, cost)?;
        let component = CatalogComponent { id: Uuid::new_v4(), name: name.trim().to_string(), cost };
        self.components.push(component.clone());
        info!(component_id = %component.id, name = %component.name, cost, "component added");
        Ok(component)
    }

    fn remove(&mut self, id: &ComponentId) -> Option<CatalogComponent> {
        let idx = self.components.iter().position(|c| c.id == *id)?;
        let removed = self.components.remove(idx);
        info!(component_id = %removed.id, "component removed");
        Some(removed)
    }

    fn get(&self, id: &ComponentId) -> Option<CatalogComponent> {
        self.components.iter().find(|c| c.id == *id).cloned()
    }

    fn list(&self) -> Vec<CatalogComponent> {
        self.components.clone()
    }
}
