use crate::consts::{CURSOR_DEFAULT, CURSOR_GRABBING, CURSOR_MOVE};
use crate::drag::{DragKind, DragRejected, DragState, DragTarget};
use crate::geom::{CanvasRect, Point};
use crate::hit::{self, HitPart};
use crate::placement::{CatalogComponent, InstanceId, PlacedInstance, PlacementRecord, Placements};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    InstanceCreated(PlacedInstance),
    InstanceMoved { id: InstanceId, x: f64, y: f64 },
    LineTargetMoved { id: InstanceId, x: f64, y: f64 },
    InstanceRemoved { id: InstanceId },
    /// The whole placement list was replaced (load or clear).
    PlacementsReplaced,
    TotalChanged(f64),
    /// Attach window-level pointer-move/up listeners; a drag just started.
    CapturePointer,
    /// Detach the window-level listeners; the drag is over.
    ReleasePointer,
    /// Stop the triggering event from reaching canvas-level handlers.
    StopPropagation,
    SetCursor(String),
    RenderNeeded,
}

impl Action {
    /// The instance carried by an `InstanceCreated` action.
    #[must_use]
    pub fn created(&self) -> Option<&PlacedInstance> {
        match self {
            Self::InstanceCreated(inst) => Some(inst),
            _ => None,
        }
    }
}

/// Placement canvas plus the drag controller that edits it.
///
/// The drag state is private: it only changes through the pointer handlers
/// below, and any mutation that makes the dragged instance disappear also
/// ends the drag so the host's global listeners are released.
#[derive(Debug, Clone, Default)]
pub struct EngineCore {
    placements: Placements,
    drag: DragState,
    canvas: CanvasRect,
}

impl EngineCore {
    /// Create an engine for a drop zone at `canvas` (client space).
    #[must_use]
    pub fn new(canvas: CanvasRect) -> Self {
        Self { placements: Placements::new(canvas.bounds()), drag: DragState::Idle, canvas }
    }

    // --- Canvas geometry ---

    /// Record the drop zone's current client rectangle. Instances outside a
    /// shrunken canvas are pulled back in. An empty rectangle means the drop
    /// zone is not measured yet and leaves placements untouched.
    pub fn set_canvas_rect(&mut self, rect: CanvasRect) -> Vec<Action> {
        let resized = rect.bounds() != self.canvas.bounds();
        self.canvas = rect;
        if !resized || rect.bounds().is_empty() {
            return Vec::new();
        }
        self.placements.resize(rect.bounds());
        vec![Action::RenderNeeded]
    }

    // --- Placement mutations ---

    /// Drop a catalog component at client-space `client`.
    pub fn drop_component(&mut self, component: &CatalogComponent, client: Point) -> Vec<Action> {
        let inst = self.placements.drop_component(component, self.canvas.to_local(client));
        vec![
            Action::InstanceCreated(inst),
            Action::TotalChanged(self.placements.total_cost()),
            Action::RenderNeeded,
        ]
    }

    /// Remove a placed instance. Unknown ids produce no actions.
    pub fn remove_instance(&mut self, id: &InstanceId) -> Vec<Action> {
        if self.placements.remove(id).is_none() {
            return Vec::new();
        }
        let mut actions = Vec::new();
        if self.drag.cancel(id) {
            push_release(&mut actions);
        }
        actions.push(Action::InstanceRemoved { id: *id });
        actions.push(Action::TotalChanged(self.placements.total_cost()));
        actions.push(Action::RenderNeeded);
        actions
    }

    /// Replace the placement list with persisted records.
    pub fn load(&mut self, records: &[PlacementRecord]) -> Vec<Action> {
        let mut actions = Vec::new();
        self.finish_drag(&mut actions);
        self.placements.load_from(records, self.canvas.bounds());
        actions.push(Action::PlacementsReplaced);
        actions.push(Action::TotalChanged(self.placements.total_cost()));
        actions.push(Action::RenderNeeded);
        actions
    }

    /// Empty the canvas.
    pub fn clear(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();
        self.finish_drag(&mut actions);
        self.placements.clear();
        actions.push(Action::PlacementsReplaced);
        actions.push(Action::TotalChanged(0.0));
        actions.push(Action::RenderNeeded);
        actions
    }

    // --- Input events ---

    /// Pointer-down on an instance body. `element_origin` is the client-space
    /// top-left of the instance element.
    pub fn on_instance_pointer_down(&mut self, id: &InstanceId, pointer: Point, element_origin: Point) -> Vec<Action> {
        match self.begin_instance_drag(id, pointer, element_origin) {
            Ok(()) => vec![Action::CapturePointer, Action::SetCursor(CURSOR_GRABBING.into()), Action::RenderNeeded],
            Err(_) => Vec::new(),
        }
    }

    /// Pointer-down on a leader-line target handle. The event never
    /// propagates to the canvas, even when the drag is rejected.
    pub fn on_line_target_pointer_down(&mut self, id: &InstanceId, pointer: Point) -> Vec<Action> {
        match self.begin_line_target_drag(id, pointer) {
            Ok(()) => vec![
                Action::StopPropagation,
                Action::CapturePointer,
                Action::SetCursor(CURSOR_MOVE.into()),
                Action::RenderNeeded,
            ],
            Err(_) => vec![Action::StopPropagation],
        }
    }

    /// Pointer-down anywhere on the canvas; hit-tests and dispatches to the
    /// body or line-target handler. Points outside the canvas are ignored.
    pub fn on_pointer_down(&mut self, pointer: Point) -> Vec<Action> {
        let local = self.canvas.to_local(pointer);
        if !self.placements.bounds().contains(local) {
            return Vec::new();
        }
        let Some(hit) = hit::hit_test(local, &self.placements) else {
            return Vec::new();
        };
        match hit.part {
            HitPart::Body => {
                let Some(inst) = self.placements.get(&hit.instance_id) else {
                    return Vec::new();
                };
                let body = hit::body_origin(inst);
                let origin = self.canvas.origin();
                let element_origin = Point::new(origin.x + body.x, origin.y + body.y);
                self.on_instance_pointer_down(&hit.instance_id, pointer, element_origin)
            }
            HitPart::LineTarget => self.on_line_target_pointer_down(&hit.instance_id, pointer),
        }
    }

    /// Pointer-move from the window-level listener.
    pub fn on_pointer_move(&mut self, pointer: Point) -> Vec<Action> {
        let Some(target) = self.drag.target(pointer, self.canvas.origin()) else {
            return Vec::new();
        };
        let moved = match target {
            DragTarget::Instance { id, to } => self
                .placements
                .move_instance(&id, to)
                .map(|p| Action::InstanceMoved { id, x: p.x, y: p.y }),
            DragTarget::LineTarget { id, to } => self
                .placements
                .move_line_target(&id, to)
                .map(|p| Action::LineTargetMoved { id, x: p.x, y: p.y }),
        };
        let mut actions = Vec::new();
        match moved {
            Some(action) => {
                actions.push(action);
                actions.push(Action::RenderNeeded);
            }
            None => self.finish_drag(&mut actions),
        }
        actions
    }

    /// Pointer-up from the window-level listener; ends any active drag.
    pub fn on_pointer_up(&mut self, _pointer: Point) -> Vec<Action> {
        let mut actions = Vec::new();
        self.finish_drag(&mut actions);
        actions
    }

    // --- Queries ---

    #[must_use]
    pub fn placements(&self) -> &Placements {
        &self.placements
    }

    #[must_use]
    pub fn instances(&self) -> &[PlacedInstance] {
        self.placements.instances()
    }

    #[must_use]
    pub fn instance(&self, id: &InstanceId) -> Option<&PlacedInstance> {
        self.placements.get(id)
    }

    #[must_use]
    pub fn total_cost(&self) -> f64 {
        self.placements.total_cost()
    }

    #[must_use]
    pub fn snapshot(&self) -> Vec<PlacementRecord> {
        self.placements.snapshot()
    }

    #[must_use]
    pub fn drag(&self) -> DragState {
        self.drag
    }

    #[must_use]
    pub fn drag_kind(&self) -> DragKind {
        self.drag.kind()
    }

    #[must_use]
    pub fn canvas_rect(&self) -> CanvasRect {
        self.canvas
    }

    // --- Drag transitions ---

    fn begin_instance_drag(&mut self, id: &InstanceId, pointer: Point, element_origin: Point) -> Result<(), DragRejected> {
        if !self.placements.contains(id) {
            return Err(DragRejected::UnknownInstance(*id));
        }
        self.drag.begin_instance(*id, pointer, element_origin)
    }

    fn begin_line_target_drag(&mut self, id: &InstanceId, pointer: Point) -> Result<(), DragRejected> {
        if !self.placements.contains(id) {
            return Err(DragRejected::UnknownInstance(*id));
        }
        self.drag.begin_line_target(*id, pointer, self.canvas.origin())
    }

    /// End the active drag, if any, and tell the host to drop its listeners.
    fn finish_drag(&mut self, actions: &mut Vec<Action>) {
        if self.drag.end().is_some() {
            push_release(actions);
        }
    }
}

fn push_release(actions: &mut Vec<Action>) {
    actions.push(Action::ReleasePointer);
    actions.push(Action::SetCursor(CURSOR_DEFAULT.into()));
    actions.push(Action::RenderNeeded);
}
