//! Blind assembly editor core.
//!
//! A catalog of priced components, a canvas the user drops them onto and
//! drags around (each placement with a leader line to a point on the
//! blind), and named assemblies saved from the canvas. The canvas and its
//! pointer-drag engine live in the `canvas` crate; this crate adds the
//! stores, the editor shell that sequences them, and the ambient setup.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`editor`] | [`Editor`]: catalog form, drop handling, save/load/new, confirmed deletes |
//! | [`services::catalog`] | `CatalogStore` trait and the in-memory component library |
//! | [`services::assembly`] | `AssemblyStore` trait, saved assemblies, JSON export |
//! | [`services::notify`] | Single-slot toast with a TTL |
//! | [`services::confirm`] | Two-step confirmation for deletes |
//! | [`config`] | [`EditorConfig`] from environment variables |
//! | [`error`] | [`ValidationError`] and the [`ErrorCode`] trait |
//! | [`logging`] | `tracing` subscriber setup |

pub mod config;
pub mod editor;
pub mod error;
pub mod logging;
pub mod services;

pub use canvas;
pub use config::EditorConfig;
pub use editor::Editor;
pub use error::{ErrorCode, ValidationError};
