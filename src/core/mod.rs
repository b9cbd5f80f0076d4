//! Core types shared by validation and merging.
//!
//! This module contains:
//! - Value types and primitive type tags
//! - Dotted key paths
//! - Error types and the validation report

pub mod types;
pub mod path;
pub mod error;

// Re-export commonly used types
pub use types::{Value, ValueKind, ValueMap, PrimitiveType};
pub use path::KeyPath;
pub use error::{ShapeguardError, ValidationError, SchemaError, MergeError, ErrorKind, ValidationReport};
