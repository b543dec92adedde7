//! # Error Types
//!
//! Structured error types for conc_core. Construction is the only fallible
//! boundary in this crate: once a [`Section`](crate::section::Section) exists,
//! every capacity function is plain arithmetic and cannot fail.
//!
//! Numeric edge cases (a neutral-axis ratio above 1, a plain-concrete
//! effective depth of `D - 50 <= 0`) are deliberately NOT errors. The
//! underlying code formulas do not clamp them, so neither do we; such values
//! propagate as ordinary (possibly non-physical) results for the caller to
//! sanity-check.
//!
//! ## Example
//!
//! ```rust
//! use conc_core::errors::{ConcError, ConcResult};
//!
//! fn validate_width(width_mm: f64) -> ConcResult<()> {
//!     if width_mm <= 0.0 {
//!         return Err(ConcError::invalid_parameter(
//!             "width_mm",
//!             width_mm.to_string(),
//!             "Width must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for conc_core operations
pub type ConcResult<T> = Result<T, ConcError>;

/// Structured error type for section construction.
///
/// Each variant provides specific context about what went wrong,
/// enabling programmatic handling by callers.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum ConcError {
    /// A geometry, material, or reinforcement input is invalid
    /// (non-positive, or a derived quantity lands out of range)
    #[error("Invalid parameter '{field}': {value} - {reason}")]
    InvalidParameter {
        field: String,
        value: String,
        reason: String,
    },
}

impl ConcError {
    /// Create an InvalidParameter error
    pub fn invalid_parameter(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        ConcError::InvalidParameter {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            ConcError::InvalidParameter { .. } => "INVALID_PARAMETER",
        }
    }

    /// The name of the offending input field
    pub fn field(&self) -> &str {
        match self {
            ConcError::InvalidParameter { field, .. } => field,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = ConcError::invalid_parameter("fc_mpa", "-32", "Concrete strength must be positive");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: ConcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_code_and_field() {
        let error = ConcError::invalid_parameter("depth_mm", "0", "Depth must be positive");
        assert_eq!(error.error_code(), "INVALID_PARAMETER");
        assert_eq!(error.field(), "depth_mm");
    }

    #[test]
    fn test_display_includes_context() {
        let error = ConcError::invalid_parameter("bar_spacing_mm", "-100", "Spacing must be positive");
        let msg = error.to_string();
        assert!(msg.contains("bar_spacing_mm"));
        assert!(msg.contains("-100"));
    }
}
