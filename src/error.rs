//! Error taxonomy shared by the stores and the editor shell.
//!
//! DESIGN
//! ======
//! Nothing in the editor is fatal. Validation failures are recovered where
//! they happen and shown as an inline form message or an error toast; the
//! `Display` text of each variant is that message. `ErrorCode` adds a stable
//! machine-readable code next to it.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Stable machine-readable code for an error.
pub trait ErrorCode: std::fmt::Display {
    fn error_code(&self) -> &'static str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Name and cost cannot be empty.")]
    EmptyFields,
    #[error("Component name cannot be blank.")]
    BlankName,
    #[error("Please enter a valid positive cost.")]
    InvalidCost,
    #[error("Enter assembly name.")]
    BlankAssemblyName,
}

impl ErrorCode for ValidationError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyFields => "E_EMPTY_FIELDS",
            Self::BlankName => "E_BLANK_NAME",
            Self::InvalidCost => "E_INVALID_COST",
            Self::BlankAssemblyName => "E_BLANK_ASSEMBLY_NAME",
        }
    }
}
