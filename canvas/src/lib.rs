//! Placement canvas and pointer-drag engine for the blind assembly editor.
//!
//! The crate is host-agnostic: the UI layer forwards pointer events and the
//! drop zone's client rectangle, and carries out the [`engine::Action`]s that
//! come back (attach or release window listeners, stop propagation,
//! re-render). Nothing here touches the DOM or logs.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | [`engine::EngineCore`]: placements + drag controller behind pointer handlers |
//! | [`placement`] | Catalog components, placed instances, persisted records, the placement list |
//! | [`drag`] | The drag state machine (`Idle` / `MovingInstance` / `MovingLineTarget`) |
//! | [`geom`] | Points, canvas bounds, clamping, client-to-canvas conversion |
//! | [`hit`] | Hit-testing instance bodies and leader-line handles |
//! | [`payload`] | Drag payload codec between the library panel and the canvas |
//! | [`consts`] | Shared numeric constants (defaults, box sizes, handle radius) |

pub mod consts;
pub mod drag;
pub mod engine;
pub mod geom;
pub mod hit;
pub mod payload;
pub mod placement;
