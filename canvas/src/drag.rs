//! Pointer-drag state machine for placed instances and their leader lines.
//!
//! A drag starts on pointer-down over an instance body or a line-target
//! handle and ends on pointer-up. While it is active every pointer-move is
//! turned into a `DragTarget` that the engine applies to the placement list.
//! Only one drag can be active; a second start is rejected.
//!
//! The state is only changed through `begin_instance`, `begin_line_target`,
//! `end`, and `cancel`.

#[cfg(test)]
#[path = "drag_test.rs"]
mod drag_test;

use crate::geom::Point;
use crate::placement::InstanceId;

/// Which kind of drag is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragKind {
    #[default]
    Idle,
    MovingInstance,
    MovingLineTarget,
}

/// The active drag gesture, if any.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    /// No drag in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// The user is moving an instance body.
    MovingInstance {
        id: InstanceId,
        /// Pointer minus the instance element's top-left at press time.
        offset: Point,
    },
    /// The user is moving an instance's leader-line target.
    MovingLineTarget {
        id: InstanceId,
        /// Pointer minus the canvas origin at press time.
        offset: Point,
    },
}

/// Why a drag could not start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DragRejected {
    #[error("a drag is already active on instance {active}")]
    Busy { active: InstanceId },
    #[error("instance not found: {0}")]
    UnknownInstance(InstanceId),
}

/// Canvas-local destination computed for one pointer-move. Not yet clamped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragTarget {
    Instance { id: InstanceId, to: Point },
    LineTarget { id: InstanceId, to: Point },
}

impl DragState {
    #[must_use]
    pub fn kind(&self) -> DragKind {
        match self {
            Self::Idle => DragKind::Idle,
            Self::MovingInstance { .. } => DragKind::MovingInstance,
            Self::MovingLineTarget { .. } => DragKind::MovingLineTarget,
        }
    }

    #[must_use]
    pub fn active_id(&self) -> Option<InstanceId> {
        match self {
            Self::Idle => None,
            Self::MovingInstance { id, .. } | Self::MovingLineTarget { id, .. } => Some(*id),
        }
    }

    /// Pointer offset captured at press time; zero when idle.
    #[must_use]
    pub fn offset(&self) -> Point {
        match self {
            Self::Idle => Point::default(),
            Self::MovingInstance { offset, .. } | Self::MovingLineTarget { offset, .. } => *offset,
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::Idle)
    }

    /// Start moving an instance body. `element_origin` is the client-space
    /// top-left of the instance element.
    ///
    /// # Errors
    ///
    /// Returns `Busy` if a drag is already active.
    pub fn begin_instance(&mut self, id: InstanceId, pointer: Point, element_origin: Point) -> Result<(), DragRejected> {
        self.ensure_idle()?;
        *self = Self::MovingInstance { id, offset: pointer.offset_from(element_origin) };
        Ok(())
    }

    /// Start moving a leader-line target. `canvas_origin` is the client-space
    /// top-left of the drop zone.
    ///
    /// # Errors
    ///
    /// Returns `Busy` if a drag is already active.
    pub fn begin_line_target(&mut self, id: InstanceId, pointer: Point, canvas_origin: Point) -> Result<(), DragRejected> {
        self.ensure_idle()?;
        *self = Self::MovingLineTarget { id, offset: pointer.offset_from(canvas_origin) };
        Ok(())
    }

    /// Where a pointer at client-space `pointer` moves the dragged item.
    /// `None` when idle.
    #[must_use]
    pub fn target(&self, pointer: Point, canvas_origin: Point) -> Option<DragTarget> {
        let local = pointer.offset_from(canvas_origin);
        match *self {
            Self::Idle => None,
            Self::MovingInstance { id, offset } => Some(DragTarget::Instance { id, to: local.offset_from(offset) }),
            Self::MovingLineTarget { id, .. } => Some(DragTarget::LineTarget { id, to: local }),
        }
    }

    /// Return to idle. Yields the id that was being dragged.
    pub fn end(&mut self) -> Option<InstanceId> {
        let id = self.active_id();
        *self = Self::Idle;
        id
    }

    /// Abandon the drag if it is on `id`. Returns whether one was dropped.
    pub fn cancel(&mut self, id: &InstanceId) -> bool {
        if self.active_id() != Some(*id) {
            return false;
        }
        *self = Self::Idle;
        true
    }

    fn ensure_idle(&self) -> Result<(), DragRejected> {
        match self.active_id() {
            Some(active) => Err(DragRejected::Busy { active }),
            None => Ok(()),
        }
    }
}
