//! # Shapeguard - Structural Validation for Nested Maps
//!
//! Shapeguard checks that nested key-value data has the shape a template
//! expects, and merges word-frequency maps.
//!
//! ## Features
//!
//! - **Template validation**: declared keys, primitive types and nested maps
//! - **Single diagnostic**: the first failure is reported as `"<kind>: <path>"`
//! - **Frequency merging**: counts summed per word, highest count first
//!
//! ## Quick Start
//!
//! ```rust
//! use shapeguard::prelude::*;
//! use serde_json::json;
//!
//! let template = Template::builder()
//!     .field("name", PrimitiveType::String)
//!     .nested("stats", Template::builder().field("age", PrimitiveType::Integer).build())
//!     .build();
//!
//! let data = match Value::from(json!({"name": "Ada", "stats": {"age": "old"}})) {
//!     Value::Map(map) => map,
//!     _ => unreachable!(),
//! };
//!
//! let report = validate(&data, &template);
//! assert_eq!(report.as_pair(), (false, "bad type: stats.age"));
//!
//! let merged = merge(&[
//!     FrequencyMap::from([("a", 1), ("b", 2)]),
//!     FrequencyMap::from([("a", 3)]),
//! ]);
//! assert_eq!(merged.most_common(), vec![("a", 4), ("b", 2)]);
//! ```
//!
//! ## Architecture
//!
//! - [`core`]: Values, type tags, key paths and error types
//! - [`validation`]: Templates and the recursive validator
//! - [`merge`]: Frequency maps and merge strategies

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod core;
pub mod merge;
pub mod validation;

/// Prelude module for convenient imports.
///
/// Import everything commonly needed with:
/// ```rust
/// use shapeguard::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use crate::core::types::{PrimitiveType, Value, ValueKind, ValueMap};
    pub use crate::core::path::KeyPath;

    // Errors
    pub use crate::core::error::{
        ErrorKind, MergeError, SchemaError, ShapeguardError, ValidationError, ValidationReport,
    };

    // Validation
    pub use crate::validation::template::{Template, TemplateBuilder, TemplateNode};
    pub use crate::validation::validator::{check, validate, validate_at, validate_json};

    // Merging
    pub use crate::merge::frequency::FrequencyMap;
    pub use crate::merge::strategy::{
        merge, merge_json, merge_with_accumulator, merge_with_counter, MergeOptions,
        MergeStrategy, Merger, StrategyKind,
    };
}

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
