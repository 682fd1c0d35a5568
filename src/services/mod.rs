//! Stores and UI-state services behind the editor shell.
//!
//! ARCHITECTURE
//! ============
//! Each service owns one concern so the shell in `editor` only sequences
//! calls and turns results into notifications.

pub mod assembly;
pub mod catalog;
pub mod confirm;
pub mod notify;
