//! Editor shell: sequences the stores, the canvas engine, notifications,
//! and confirmation dialogs.
//!
//! DESIGN
//! ======
//! The host (a UI layer) owns one `Editor` and forwards user intents to it.
//! Canvas and pointer methods return the engine's `Action` list unchanged so
//! the host can attach listeners, set cursors and re-render. Store-facing
//! methods update the toast slot as a side effect.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here is fatal. Form validation errors are returned to the caller
//! for inline display. A blank assembly name on save is returned and also
//! shown as an error toast. Malformed drag payloads and unknown ids are
//! ignored and produce no actions.

#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

use std::time::Instant;

use canvas::engine::{Action, EngineCore};
use canvas::geom::{CanvasRect, Point};
use canvas::payload;
use canvas::placement::{CatalogComponent, ComponentId, InstanceId};
use tracing::{debug, info, warn};

use crate::config::EditorConfig;
use crate::error::ValidationError;
use crate::services::assembly::{AssemblyDraft, AssemblyId, AssemblyStore, MemoryAssemblies, SaveOutcome};
use crate::services::catalog::{CatalogStore, MemoryCatalog};
use crate::services::confirm::{ConfirmDialog, ConfirmSlot, PendingAction};
use crate::services::notify::{Notification, NotificationKind, Notifier};

pub struct Editor<C = MemoryCatalog, A = MemoryAssemblies> {
    catalog: C,
    assemblies: A,
    engine: EngineCore,
    notifier: Notifier,
    confirm: ConfirmSlot,
    name: String,
    editing_id: Option<AssemblyId>,
    default_name: String,
}

impl Editor {
    /// Editor over in-memory stores, seeded per `config`.
    #[must_use]
    pub fn from_config(config: &EditorConfig) -> Self {
        let catalog = if config.seed_catalog { MemoryCatalog::seeded() } else { MemoryCatalog::new() };
        Self::new(catalog, MemoryAssemblies::new(), config)
    }
}

impl<C: CatalogStore, A: AssemblyStore> Editor<C, A> {
    #[must_use]
    pub fn new(catalog: C, assemblies: A, config: &EditorConfig) -> Self {
        let rect = CanvasRect::new(0.0, 0.0, config.canvas_width, config.canvas_height);
        Self {
            catalog,
            assemblies,
            engine: EngineCore::new(rect),
            notifier: Notifier::new(config.notify_ttl),
            confirm: ConfirmSlot::new(),
            name: config.default_name.clone(),
            editing_id: None,
            default_name: config.default_name.clone(),
        }
    }

    // --- Catalog ---

    /// Add a component from the library form's raw text fields.
    ///
    /// # Errors
    ///
    /// `EmptyFields` when either field is blank, `InvalidCost` when the
    /// cost does not parse as a non-negative number.
    pub fn add_component(&mut self, name: &str, cost_text: &str) -> Result<CatalogComponent, ValidationError> {
        let name = name.trim();
        let cost_text = cost_text.trim();
        if name.is_empty() || cost_text.is_empty() {
            return Err(ValidationError::EmptyFields);
        }
        let cost = match cost_text.parse::<f64>() {
            Ok(cost) if cost.is_finite() && cost >= 0.0 => cost,
            _ => return Err(ValidationError::InvalidCost),
        };
        let component = self.catalog.add(name, cost)?;
        self.notify(format!("Component \"{}\" added locally!", component.name), NotificationKind::Success);
        Ok(component)
    }

    /// Drag data for a catalog component, or `None` if it is not in the
    /// catalog.
    #[must_use]
    pub fn drag_payload(&self, id: &ComponentId) -> Option<String> {
        let component = self.catalog.get(id)?;
        match payload::encode(&component) {
            Ok(raw) => Some(raw),
            Err(e) => {
                warn!(error = %e, component_id = %id, "failed to encode drag payload");
                None
            }
        }
    }

    /// Open the delete confirmation for a catalog component. Returns
    /// `false` for an unknown id.
    pub fn request_delete_component(&mut self, id: &ComponentId) -> bool {
        let Some(component) = self.catalog.get(id) else {
            return false;
        };
        self.confirm.open(ConfirmDialog::delete_component(component.id, &component.name));
        true
    }

    // --- Canvas ---

    pub fn set_canvas_rect(&mut self, rect: CanvasRect) -> Vec<Action> {
        self.engine.set_canvas_rect(rect)
    }

    /// Drop handler. `client` is the drop point in client space.
    pub fn drop_payload(&mut self, raw: &str, client: Point) -> Vec<Action> {
        match payload::decode(raw) {
            Ok(component) => self.engine.drop_component(&component, client),
            Err(e) => {
                debug!(error = %e, "ignoring drop");
                Vec::new()
            }
        }
    }

    pub fn remove_instance(&mut self, id: &InstanceId) -> Vec<Action> {
        self.engine.remove_instance(id)
    }

    pub fn on_instance_pointer_down(&mut self, id: &InstanceId, pointer: Point, element_origin: Point) -> Vec<Action> {
        self.engine.on_instance_pointer_down(id, pointer, element_origin)
    }

    pub fn on_line_target_pointer_down(&mut self, id: &InstanceId, pointer: Point) -> Vec<Action> {
        self.engine.on_line_target_pointer_down(id, pointer)
    }

    pub fn on_pointer_down(&mut self, pointer: Point) -> Vec<Action> {
        self.engine.on_pointer_down(pointer)
    }

    pub fn on_pointer_move(&mut self, pointer: Point) -> Vec<Action> {
        self.engine.on_pointer_move(pointer)
    }

    pub fn on_pointer_up(&mut self, pointer: Point) -> Vec<Action> {
        self.engine.on_pointer_up(pointer)
    }

    // --- Assemblies ---

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Save the canvas as the assembly under edit, creating it on first save.
    ///
    /// # Errors
    ///
    /// `BlankAssemblyName` when the name is blank; an error toast is shown too.
    pub fn save(&mut self) -> Result<SaveOutcome, ValidationError> {
        let draft = AssemblyDraft {
            id: self.editing_id,
            name: self.name.clone(),
            placements: self.engine.snapshot(),
            total_cost: self.engine.total_cost(),
        };
        let saved = match self.assemblies.save(draft) {
            Ok(saved) => saved,
            Err(e) => {
                self.notify(e.to_string(), NotificationKind::Error);
                return Err(e);
            }
        };
        self.editing_id = Some(saved.assembly.id);
        let verb = match saved.outcome {
            SaveOutcome::Created => "saved",
            SaveOutcome::Updated => "updated",
        };
        self.notify(format!("Assembly \"{}\" {verb} locally!", saved.assembly.name), NotificationKind::Success);
        Ok(saved.outcome)
    }

    /// Replace the canvas with a saved assembly. Unknown ids are ignored.
    pub fn load(&mut self, id: &AssemblyId) -> Vec<Action> {
        let Some(assembly) = self.assemblies.get(id) else {
            debug!(assembly_id = %id, "load of unknown assembly ignored");
            return Vec::new();
        };
        let actions = self.engine.load(&assembly.component_placements);
        self.editing_id = Some(assembly.id);
        self.notify(format!("Assembly \"{}\" loaded locally.", assembly.name), NotificationKind::Success);
        self.name = assembly.name;
        actions
    }

    /// Clear the canvas and start an unsaved assembly with the default name.
    pub fn new_assembly(&mut self) -> Vec<Action> {
        let actions = self.engine.clear();
        self.name.clone_from(&self.default_name);
        self.editing_id = None;
        self.notify("New assembly started.", NotificationKind::Info);
        actions
    }

    /// Open the delete confirmation for a saved assembly. Returns `false`
    /// for an unknown id.
    pub fn request_delete_assembly(&mut self, id: &AssemblyId) -> bool {
        let Some(assembly) = self.assemblies.get(id) else {
            return false;
        };
        self.confirm.open(ConfirmDialog::delete_assembly(assembly.id, &assembly.name));
        true
    }

    /// Run the pending confirmation, if any.
    pub fn confirm(&mut self) -> Vec<Action> {
        let Some(action) = self.confirm.confirm() else {
            return Vec::new();
        };
        info!(?action, "confirmed");
        match action {
            PendingAction::DeleteAssembly { id, name } => {
                self.assemblies.remove(&id);
                self.notify(format!("Local assembly \"{name}\" deleted."), NotificationKind::Success);
                if self.editing_id == Some(id) {
                    return self.new_assembly();
                }
                Vec::new()
            }
            PendingAction::DeleteComponent { id, name } => {
                self.catalog.remove(&id);
                self.notify(format!("Local component \"{name}\" deleted."), NotificationKind::Success);
                Vec::new()
            }
        }
    }

    /// Close the pending confirmation without running it.
    pub fn cancel(&mut self) {
        self.confirm.cancel();
    }

    // --- Queries ---

    #[must_use]
    pub fn total_cost(&self) -> f64 {
        self.engine.total_cost()
    }

    /// Total cost with two decimals, e.g. `18.25`.
    #[must_use]
    pub fn formatted_total(&self) -> String {
        format!("{:.2}", self.engine.total_cost())
    }

    /// Id of the saved assembly being edited; `None` until first save.
    #[must_use]
    pub fn editing_id(&self) -> Option<AssemblyId> {
        self.editing_id
    }

    #[must_use]
    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    #[must_use]
    pub fn assemblies(&self) -> &A {
        &self.assemblies
    }

    #[must_use]
    pub fn engine(&self) -> &EngineCore {
        &self.engine
    }

    #[must_use]
    pub fn pending_confirmation(&self) -> Option<&ConfirmDialog> {
        self.confirm.current()
    }

    /// Whether a confirmation dialog is waiting for an answer.
    #[must_use]
    pub fn is_confirming(&self) -> bool {
        self.confirm.is_open()
    }

    /// The toast to display at `now`.
    #[must_use]
    pub fn notification(&self, now: Instant) -> Option<&Notification> {
        self.notifier.visible_at(now)
    }

    /// Expire the toast if its TTL has run out. Returns whether the host
    /// should hide it.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.notifier.expire(now)
    }

    /// Close the toast before its TTL runs out.
    pub fn dismiss_notification(&mut self) {
        self.notifier.dismiss();
    }

    fn notify(&mut self, message: impl Into<String>, kind: NotificationKind) {
        self.notifier.show(message, kind);
    }
}
