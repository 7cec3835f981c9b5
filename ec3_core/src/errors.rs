//! # Error Types
//!
//! Structured error types for ec3_core. Design checks deliberately have very
//! few failure paths: an unrecognised steel grade is the only condition that
//! aborts a member check. Everything else (zero capacity, zero length, a
//! fully class 4 section) is reported as data in the result record.
//!
//! ## Example
//!
//! ```rust
//! use ec3_core::errors::{CalcError, CalcResult};
//!
//! fn validate_span(span_m: f64) -> CalcResult<()> {
//!     if span_m < 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "span_m",
//!             span_m.to_string(),
//!             "Span cannot be negative",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for ec3_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for design-check operations.
///
/// Each variant carries enough context for a caller (human or program)
/// to correct the input and retry.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// Steel grade string is not one of the tabulated grades
    #[error("Unknown steel grade '{grade}'. Use S235/S275/S355/S450.")]
    UnknownGrade { grade: String },

    /// An input value is invalid (out of range, unknown selector, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Section designation not found in a catalog
    #[error("Section not found: {designation}")]
    SectionNotFound { designation: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Schema version mismatch
    #[error("Version mismatch: file version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },
}

impl CalcError {
    /// Create an UnknownGrade error
    pub fn unknown_grade(grade: impl Into<String>) -> Self {
        CalcError::UnknownGrade {
            grade: grade.into(),
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a SectionNotFound error
    pub fn section_not_found(designation: impl Into<String>) -> Self {
        CalcError::SectionNotFound {
            designation: designation.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        CalcError::SerializationError {
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::UnknownGrade { .. } => "UNKNOWN_GRADE",
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::SectionNotFound { .. } => "SECTION_NOT_FOUND",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CalcError::VersionMismatch { .. } => "VERSION_MISMATCH",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::unknown_grade("S420");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("UnknownGrade"));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::unknown_grade("X").error_code(), "UNKNOWN_GRADE");
        assert_eq!(CalcError::section_not_found("UB 1x1x1").error_code(), "SECTION_NOT_FOUND");
        assert_eq!(
            CalcError::invalid_input("buckling_curve", "z", "bad").error_code(),
            "INVALID_INPUT"
        );
    }

    #[test]
    fn test_error_message_names_grade() {
        let msg = CalcError::unknown_grade("s420").to_string();
        assert!(msg.contains("s420"));
        assert!(msg.contains("S235/S275/S355/S450"));
    }
}
