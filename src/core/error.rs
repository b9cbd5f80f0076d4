//! Error types for shapeguard.
//!
//! Uses thiserror for structured errors. Two families exist:
//! - [`ValidationError`]: an expected, recoverable mismatch between data and
//!   a template, reported through a [`ValidationReport`]
//! - [`SchemaError`] / [`MergeError`]: broken input contracts (a template that
//!   is not a map, a non-numeric count) that callers are not expected to
//!   recover from

use crate::core::path::KeyPath;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Top-level error type for shapeguard.
///
/// This enum encompasses all error categories and enables automatic
/// conversion between specific error types.
#[derive(Error, Debug)]
pub enum ShapeguardError {
    /// Data did not match its template.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A template or data document broke its input contract.
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),

    /// A frequency map broke its input contract.
    #[error("Merge error: {0}")]
    Merge(#[from] MergeError),
}

/// The two kinds of validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A key is missing from the data, or present in data but not the template.
    MismatchedKeys,
    /// A key is present but its value has the wrong type or shape.
    BadType,
}

impl ErrorKind {
    /// The message prefix for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::MismatchedKeys => "mismatched keys",
            ErrorKind::BadType => "bad type",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single validation failure.
///
/// Renders as `"<kind>: <dotted path>"`.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationError {
    /// Key missing from data, or extra key not declared by the template.
    #[error("mismatched keys: {path}")]
    MismatchedKeys {
        /// Offending key.
        path: KeyPath,
    },

    /// Value has the wrong primitive type.
    #[error("bad type: {path}")]
    BadType {
        /// Offending key.
        path: KeyPath,
    },

    /// Template expects a nested map but the value is not one.
    #[error("bad type: {path}")]
    NotAMap {
        /// Offending key.
        path: KeyPath,
    },
}

/// Broken input contracts for templates and data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// A template, or a nested part of one, is not a JSON object.
    #[error("template at '{path}' must be a map, got {found}")]
    TemplateNotAMap {
        /// Where in the template the problem is; root for the whole template.
        path: KeyPath,
        /// Kind of JSON value found instead.
        found: String,
    },

    /// The data document is not a JSON object.
    #[error("data must be a map, got {found}")]
    DataNotAMap {
        /// Kind of value found instead.
        found: String,
    },

    /// A template leaf is not one of the known type tags.
    #[error("unknown type tag '{tag}' at '{path}'")]
    UnknownTypeTag {
        /// Template key holding the leaf.
        path: KeyPath,
        /// The unrecognized tag, or the JSON kind for non-string leaves.
        tag: String,
    },
}

/// Broken input contracts for frequency maps.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MergeError {
    /// An input is not a JSON object.
    #[error("frequency map #{index} must be a map, got {found}")]
    NotAMap {
        /// Position of the input.
        index: usize,
        /// Kind of JSON value found instead.
        found: String,
    },

    /// A count is not an integer.
    #[error("count for '{word}' in frequency map #{index} is not an integer: {found}")]
    NonNumericCount {
        /// Position of the input.
        index: usize,
        /// Word whose count is invalid.
        word: String,
        /// Kind of JSON value found instead.
        found: String,
    },
}

// ============================================================================
// Error Utilities
// ============================================================================

impl ValidationError {
    /// Which of the two failure kinds this is.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ValidationError::MismatchedKeys { .. } => ErrorKind::MismatchedKeys,
            ValidationError::BadType { .. } | ValidationError::NotAMap { .. } => {
                ErrorKind::BadType
            }
        }
    }

    /// Path of the offending key.
    pub fn path(&self) -> &KeyPath {
        match self {
            ValidationError::MismatchedKeys { path }
            | ValidationError::BadType { path }
            | ValidationError::NotAMap { path } => path,
        }
    }

    /// Get suggestion for fixing this error.
    pub fn suggested_fix(&self) -> Option<String> {
        match self {
            ValidationError::MismatchedKeys { path } => Some(format!(
                "Make sure '{}' is present in both the data and the template",
                path
            )),
            ValidationError::BadType { path } => {
                Some(format!("Change the value at '{}' to the declared type", path))
            }
            ValidationError::NotAMap { path } => {
                Some(format!("Replace the value at '{}' with a nested map", path))
            }
        }
    }
}

/// Result type alias for template and data parsing.
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Result type alias for merge input parsing.
pub type MergeResult<T> = Result<T, MergeError>;

// ============================================================================
// Validation Report
// ============================================================================

/// Outcome of a validation call: `(ok, error)`.
///
/// `error` is empty iff `ok` is true.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Whether validation passed.
    pub ok: bool,
    /// Formatted diagnostic, empty on success.
    pub error: String,
    /// The structured failure, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<ValidationError>,
}

impl ValidationReport {
    /// A passing report.
    pub fn passed() -> Self {
        Self {
            ok: true,
            error: String::new(),
            failure: None,
        }
    }

    /// A failing report carrying `error`.
    pub fn failed(error: ValidationError) -> Self {
        Self {
            ok: false,
            error: error.to_string(),
            failure: Some(error),
        }
    }

    /// The `(ok, error)` pair.
    pub fn as_pair(&self) -> (bool, &str) {
        (self.ok, &self.error)
    }

    /// Convert back into a `Result`.
    pub fn into_result(self) -> Result<(), ValidationError> {
        match self.failure {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::passed()
    }
}

impl From<Result<(), ValidationError>> for ValidationReport {
    fn from(result: Result<(), ValidationError>) -> Self {
        match result {
            Ok(()) => Self::passed(),
            Err(error) => Self::failed(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ValidationError::MismatchedKeys { path: KeyPath::parse("a") };
        assert_eq!(err.to_string(), "mismatched keys: a");

        let err = ValidationError::BadType { path: KeyPath::parse("a.b") };
        assert_eq!(err.to_string(), "bad type: a.b");
    }

    #[test]
    fn test_not_a_map_renders_as_bad_type() {
        let err = ValidationError::NotAMap { path: KeyPath::parse("a") };
        assert_eq!(err.to_string(), "bad type: a");
        assert_eq!(err.kind(), ErrorKind::BadType);
    }

    #[test]
    fn test_kind_prefix_matches_message() {
        let err = ValidationError::MismatchedKeys { path: KeyPath::parse("x.y") };
        assert!(err.to_string().starts_with(err.kind().as_str()));
        assert_eq!(err.path().to_string(), "x.y");
    }

    #[test]
    fn test_suggestions() {
        let err = ValidationError::BadType { path: KeyPath::parse("age") };
        assert!(err.suggested_fix().unwrap().contains("age"));
    }

    #[test]
    fn test_validation_report() {
        let report = ValidationReport::passed();
        assert_eq!(report.as_pair(), (true, ""));

        let report = ValidationReport::failed(ValidationError::BadType {
            path: KeyPath::parse("a"),
        });
        assert_eq!(report.as_pair(), (false, "bad type: a"));
        assert!(report.into_result().is_err());
    }

    #[test]
    fn test_report_serializes_for_callers() {
        let report = ValidationReport::failed(ValidationError::MismatchedKeys {
            path: KeyPath::parse("a.b"),
        });
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "ok": false,
                "error": "mismatched keys: a.b",
                "failure": {"MismatchedKeys": {"path": ["a", "b"]}}
            })
        );

        let back: ValidationReport = serde_json::from_value(json).unwrap();
        assert_eq!(back, report);

        let json = serde_json::to_value(ValidationReport::passed()).unwrap();
        assert_eq!(json, serde_json::json!({"ok": true, "error": ""}));
    }

    #[test]
    fn test_top_level_conversion() {
        let err: ShapeguardError = MergeError::NotAMap {
            index: 0,
            found: "array".to_string(),
        }
        .into();
        assert!(matches!(err, ShapeguardError::Merge(_)));
    }
}
