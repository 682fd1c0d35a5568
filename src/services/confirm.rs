//! Two-step confirmation for destructive actions.
//!
//! A delete request opens a `ConfirmDialog` carrying the pending action.
//! Nothing is mutated until the host confirms; cancelling drops the request.
//! There is one slot, so opening a dialog replaces any open one.

#[cfg(test)]
#[path = "confirm_test.rs"]
mod confirm_test;

use canvas::placement::ComponentId;

use crate::services::assembly::AssemblyId;

/// The mutation a dialog runs on confirm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingAction {
    DeleteAssembly { id: AssemblyId, name: String },
    DeleteComponent { id: ComponentId, name: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmDialog {
    pub title: String,
    pub message: String,
    pub action: PendingAction,
}

impl ConfirmDialog {
    #[must_use]
    pub fn delete_assembly(id: AssemblyId, name: &str) -> Self {
        Self {
            title: format!("Delete: {name}"),
            message: format!("Delete local assembly \"{name}\"?"),
            action: PendingAction::DeleteAssembly { id, name: name.to_string() },
        }
    }

    #[must_use]
    pub fn delete_component(id: ComponentId, name: &str) -> Self {
        Self {
            title: format!("Delete: {name}"),
            message: format!("Delete component \"{name}\" from local library?"),
            action: PendingAction::DeleteComponent { id, name: name.to_string() },
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ConfirmSlot {
    open: Option<ConfirmDialog>,
}

impl ConfirmSlot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Open `dialog`, returning the one it replaced.
    pub fn open(&mut self, dialog: ConfirmDialog) -> Option<ConfirmDialog> {
        self.open.replace(dialog)
    }

    #[must_use]
    pub fn current(&self) -> Option<&ConfirmDialog> {
        self.open.as_ref()
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    /// Close the dialog and hand back its action for the caller to run.
    pub fn confirm(&mut self) -> Option<PendingAction> {
        self.open.take().map(|d| d.action)
    }

    /// Close the dialog without running anything.
    pub fn cancel(&mut self) -> Option<ConfirmDialog> {
        self.open.take()
    }
}
