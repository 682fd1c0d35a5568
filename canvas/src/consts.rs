//! Shared numeric constants for the canvas crate.

// ── Loading ─────────────────────────────────────────────────────

/// Position given to a persisted placement whose x/y is missing.
pub const DEFAULT_PLACEMENT_X: f64 = 50.0;
pub const DEFAULT_PLACEMENT_Y: f64 = 50.0;

/// Canvas size assumed when an assembly is loaded before the drop zone
/// has been measured.
pub const FALLBACK_CANVAS_WIDTH: f64 = 200.0;
pub const FALLBACK_CANVAS_HEIGHT: f64 = 150.0;

// ── Hit-testing ─────────────────────────────────────────────────

/// Body box of a placed instance, anchored at its top-left `(x, y)`, in CSS pixels.
pub const INSTANCE_BOX_WIDTH: f64 = 150.0;
pub const INSTANCE_BOX_HEIGHT: f64 = 72.0;

/// Radius of the leader-line target handle in CSS pixels.
pub const LINE_TARGET_RADIUS_PX: f64 = 6.0;

// ── Cursors ─────────────────────────────────────────────────────

pub const CURSOR_GRABBING: &str = "grabbing";
pub const CURSOR_MOVE: &str = "move";
pub const CURSOR_DEFAULT: &str = "default";
