//! # Error Types
//!
//! Structured error types for quote_core. Every variant carries enough
//! context for a Form Host to choose a user-facing message without
//! parsing strings.
//!
//! ## Example
//!
//! ```rust
//! use quote_core::errors::{QuoteError, QuoteResult};
//!
//! fn validate_width(width_m: f64) -> QuoteResult<()> {
//!     if width_m < 0.5 {
//!         return Err(QuoteError::invalid_dimension(
//!             "width_m",
//!             width_m.to_string(),
//!             "Width must be at least 0.5 m",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for quote_core operations
pub type QuoteResult<T> = Result<T, QuoteError>;

/// Structured error type for quoting operations.
///
/// All variants are user-recoverable by correcting the form and
/// resubmitting, except [`QuoteError::UnknownMaterial`], which signals
/// an inconsistency between the request and the price table.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum QuoteError {
    /// A required selection was left empty
    #[error("Missing selection: {field}")]
    MissingSelection { field: String },

    /// Panel requested in a material the panel table does not carry
    #[error("Panels are not available in '{material}'")]
    UnsupportedMaterialForPanel { material: String },

    /// Material absent from the standard price table.
    ///
    /// Unreachable when the material field is enum-constrained; kept as
    /// a fallback so a table/request mismatch surfaces instead of
    /// panicking.
    #[error("Unknown material: {material}")]
    UnknownMaterial { material: String },

    /// A dimension is outside its accepted range
    #[error("Invalid dimension '{field}': {value} - {reason}")]
    InvalidDimension {
        field: String,
        value: String,
        reason: String,
    },
}

impl QuoteError {
    /// Create a MissingSelection error
    pub fn missing_selection(field: impl Into<String>) -> Self {
        QuoteError::MissingSelection {
            field: field.into(),
        }
    }

    /// Create an UnsupportedMaterialForPanel error
    pub fn unsupported_material_for_panel(material: impl Into<String>) -> Self {
        QuoteError::UnsupportedMaterialForPanel {
            material: material.into(),
        }
    }

    /// Create an UnknownMaterial error
    pub fn unknown_material(material: impl Into<String>) -> Self {
        QuoteError::UnknownMaterial {
            material: material.into(),
        }
    }

    /// Create an InvalidDimension error
    pub fn invalid_dimension(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        QuoteError::InvalidDimension {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Check if the user can recover by correcting the form
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, QuoteError::UnknownMaterial { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            QuoteError::MissingSelection { .. } => "MISSING_SELECTION",
            QuoteError::UnsupportedMaterialForPanel { .. } => "UNSUPPORTED_MATERIAL_FOR_PANEL",
            QuoteError::UnknownMaterial { .. } => "UNKNOWN_MATERIAL",
            QuoteError::InvalidDimension { .. } => "INVALID_DIMENSION",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = QuoteError::invalid_dimension("height_m", "0.2", "Height must be at least 0.5 m");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: QuoteError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            QuoteError::missing_selection("material").error_code(),
            "MISSING_SELECTION"
        );
        assert_eq!(
            QuoteError::unsupported_material_for_panel("granite").error_code(),
            "UNSUPPORTED_MATERIAL_FOR_PANEL"
        );
    }

    #[test]
    fn test_recoverability() {
        assert!(QuoteError::missing_selection("material").is_recoverable());
        assert!(QuoteError::unsupported_material_for_panel("granite").is_recoverable());
        assert!(!QuoteError::unknown_material("granite").is_recoverable());
    }

    #[test]
    fn test_display_messages() {
        let e = QuoteError::unsupported_material_for_panel("Granite");
        assert_eq!(e.to_string(), "Panels are not available in 'Granite'");
    }
}
