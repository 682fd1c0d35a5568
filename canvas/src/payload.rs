//! Drag payload codec between the library panel and the canvas drop handler.
//!
//! The panel serializes a `CatalogComponent` into the drag data on drag
//! start; the canvas decodes it on drop. A payload that fails to parse, or
//! that carries a blank name or an invalid cost, is rejected so the drop
//! handler can ignore it without creating a placement.

#[cfg(test)]
#[path = "payload_test.rs"]
mod payload_test;

use crate::placement::CatalogComponent;

/// MIME type the payload is registered under in the drag data transfer.
pub const PAYLOAD_MIME: &str = "application/json";

#[derive(Debug, thiserror::Error)]
pub enum PayloadError {
    #[error("malformed drag payload: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("drag payload has a blank name")]
    BlankName,
    #[error("drag payload has an invalid cost: {0}")]
    InvalidCost(f64),
}

/// Serialize a catalog component as a drag payload.
///
/// # Errors
///
/// Returns `Malformed` if serialization fails.
pub fn encode(component: &CatalogComponent) -> Result<String, PayloadError> {
    Ok(serde_json::to_string(component)?)
}

/// Parse a drag payload back into a catalog component.
///
/// # Errors
///
/// Returns `Malformed` for non-JSON or wrongly shaped input, `BlankName` or
/// `InvalidCost` when the record itself is not a valid component.
pub fn decode(raw: &str) -> Result<CatalogComponent, PayloadError> {
    let component: CatalogComponent = serde_json::from_str(raw)?;
    if component.name.trim().is_empty() {
        return Err(PayloadError::BlankName);
    }
    if !component.cost.is_finite() || component.cost < 0.0 {
        return Err(PayloadError::InvalidCost(component.cost));
    }
    Ok(component)
}
