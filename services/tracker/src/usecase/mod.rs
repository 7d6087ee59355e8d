pub mod activity;
pub mod arrival;
pub mod dashboard;
pub mod delivery;
pub mod security_status;

use crate::domain::types::normalize_identifier;
use crate::error::TrackerServiceError;

/// Trimmed device identifier, or `InvalidBarcode` when blank.
fn require_identifier(raw: &str) -> Result<String, TrackerServiceError> {
    normalize_identifier(raw)
        .map(str::to_owned)
        .ok_or(TrackerServiceError::InvalidBarcode)
}
