//! Assembly service: saved blind designs.
//!
//! DESIGN
//! ======
//! An assembly is a named snapshot of the canvas: its placement records and
//! the total cost at save time. Saving a draft without an id creates a new
//! record; saving with an id overwrites that record in place. `createdAt`
//! is fixed by the first save and `updatedAt` only moves forward.
//!
//! `MemoryAssemblies` keeps records in first-save order. A draft whose id
//! was deleted in the meantime is inserted again under the same id.

#[cfg(test)]
#[path = "assembly_test.rs"]
mod assembly_test;

use canvas::placement::PlacementRecord;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use tracing::info;
use uuid::Uuid;

use crate::error::ValidationError;

pub type AssemblyId = Uuid;

/// A saved assembly, in the shape it is persisted and exported as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assembly {
    pub id: AssemblyId,
    pub name: String,
    pub component_placements: Vec<PlacementRecord>,
    pub total_cost: f64,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl Assembly {
    /// Serialize as a JSON document.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parse a JSON document produced by [`Assembly::to_json`].
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error for malformed input.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

/// What the editor hands to the store on save.
#[derive(Debug, Clone, PartialEq)]
pub struct AssemblyDraft {
    /// `None` for an assembly that has never been saved.
    pub id: Option<AssemblyId>,
    pub name: String,
    pub placements: Vec<PlacementRecord>,
    pub total_cost: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Created,
    Updated,
}

/// Result of a successful save.
#[derive(Debug, Clone, PartialEq)]
pub struct Saved {
    pub assembly: Assembly,
    pub outcome: SaveOutcome,
}

pub trait AssemblyStore {
    /// Create or update an assembly from `draft`.
    ///
    /// # Errors
    ///
    /// Returns `BlankAssemblyName` when the draft name is empty or blank.
    fn save(&mut self, draft: AssemblyDraft) -> Result<Saved, ValidationError>;

    /// Remove an assembly, returning it if it was present.
    fn remove(&mut self, id: &AssemblyId) -> Option<Assembly>;

    fn get(&self, id: &AssemblyId) -> Option<Assembly>;

    /// All assemblies in first-save order.
    fn list(&self) -> Vec<Assembly>;
}

#[derive(Debug, Clone, Default)]
pub struct MemoryAssemblies {
    assemblies: Vec<Assembly>,
}

impl MemoryAssemblies {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.assemblies.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assemblies.is_empty()
    }

    /// [`AssemblyStore::save`] with an explicit clock reading.
    ///
    /// # Errors
    ///
    /// Returns `BlankAssemblyName` when the draft name is empty or blank.
    pub fn save_at(&mut self, draft: AssemblyDraft, now: OffsetDateTime) -> Result<Saved, ValidationError> {
        if draft.name.trim().is_empty() {
            return Err(ValidationError::BlankAssemblyName);
        }

        let existing = draft.id.and_then(|id| self.assemblies.iter().position(|a| a.id == id));
        let Some(idx) = existing else {
            let assembly = Assembly {
                id: draft.id.unwrap_or_else(Uuid::new_v4),
                name: draft.name,
                component_placements: draft.placements,
                total_cost: draft.total_cost,
                created_at: now,
                updated_at: now,
            };
            info!(assembly_id = %assembly.id, total = assembly.total_cost, "assembly created");
            self.assemblies.push(assembly.clone());
            return Ok(Saved { assembly, outcome: SaveOutcome::Created });
        };

        let record = &mut self.assemblies[idx];
        record.name = draft.name;
        record.component_placements = draft.placements;
        record.total_cost = draft.total_cost;
        record.updated_at = now.max(record.updated_at);
        info!(assembly_id = %record.id, total = record.total_cost, "assembly updated");
        Ok(Saved { assembly: record.clone(), outcome: SaveOutcome::Updated })
    }
}

impl AssemblyStore for MemoryAssemblies {
    fn save(&mut self, draft: AssemblyDraft) -> Result<Saved, ValidationError> {
        self.save_at(draft, OffsetDateTime::now_utc())
    }

    fn remove(&mut self, id: &AssemblyId) -> Option<Assembly> {
        let idx = self.assemblies.iter().position(|a| a.id == *id)?;
        let removed = self.assemblies.remove(idx);
        info!(assembly_id = %removed.id, "assembly removed");
        Some(removed)
    }

    fn get(&self, id: &AssemblyId) -> Option<Assembly> {
        self.assemblies.iter().find(|a| a.id == *id).cloned()
    }

    fn list(&self) -> Vec<Assembly> {
        self.assemblies.clone()
    }
}
