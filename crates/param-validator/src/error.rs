//! Validation Error Types

use thiserror::Error;

/// Errors during parameter buffer validation
///
/// All of these are reported synchronously at submission time; a rejected
/// buffer never enters the pending queue and the caller may resubmit a
/// corrected one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A field value does not fit its hardware register field
    #[error("{field} value {value} is out of range [{min}, {max}]")]
    InvalidField {
        field: &'static str,
        value: u32,
        min: u32,
        max: u32,
    },

    /// Histogram update requested on hardware without the statistics block
    #[error("histogram statistics not available on this device")]
    UnsupportedCapability,

    /// Histogram window does not fit the active frame geometry or budget
    #[error("histogram geometry violation: {0}")]
    GeometryViolation(String),
}
