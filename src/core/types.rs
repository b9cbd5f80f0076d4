//! Runtime values and the primitive type tags they are checked against.
//!
//! The type system uses an enum-based approach:
//! - Closed set of kinds: every value maps to exactly one [`ValueKind`]
//! - Type checks are plain pattern matches, never reflection
//! - Serialization: serde handles enums natively

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An ordered string-keyed map of values.
pub type ValueMap = IndexMap<String, Value>;

/// A runtime value that can appear in validated data.
///
/// Maps keep insertion order so that diagnostics are reported in a
/// deterministic key order.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Signed integer, wide enough for every JSON integer (`i64` and `u64`)
    Integer(i128),
    /// 64-bit floating point number
    Float(f64),
    /// UTF-8 string
    String(String),
    /// Boolean value
    Boolean(bool),
    /// Sequence of values
    Array(Vec<Value>),
    /// Nested key-value map
    Map(ValueMap),
    /// Represents absence of value
    Null,
}

/// The runtime kind of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// [`Value::Integer`]
    Integer,
    /// [`Value::Float`]
    Float,
    /// [`Value::String`]
    String,
    /// [`Value::Boolean`]
    Boolean,
    /// [`Value::Array`]
    Array,
    /// [`Value::Map`]
    Map,
    /// [`Value::Null`]
    Null,
}

/// Primitive type tags a template leaf may declare.
///
/// `Boolean` and `Integer` are distinct: a boolean never satisfies an
/// integer check and vice versa. Integers do not satisfy `Float` either.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveType {
    /// Whole numbers, `"integer"` or `"int"`
    #[serde(alias = "int")]
    Integer,
    /// Text, `"string"` or `"str"`
    #[serde(alias = "str")]
    String,
    /// Floating point numbers, `"float"`
    Float,
    /// `true` / `false`, `"boolean"` or `"bool"`
    #[serde(alias = "bool")]
    Boolean,
}

// ============================================================================
// Value Implementation
// ============================================================================

impl Value {
    /// Get the runtime kind of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Integer(_) => ValueKind::Integer,
            Value::Float(_) => ValueKind::Float,
            Value::String(_) => ValueKind::String,
            Value::Boolean(_) => ValueKind::Boolean,
            Value::Array(_) => ValueKind::Array,
            Value::Map(_) => ValueKind::Map,
            Value::Null => ValueKind::Null,
        }
    }

    /// Try to get this value as a map reference.
    pub fn as_map(&self) -> Option<&ValueMap> {
        if let Value::Map(map) = self {
            Some(map)
        } else {
            None
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Boolean(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Integer(i128::from(i))
                } else if let Some(u) = n.as_u64() {
                    Value::Integer(i128::from(u))
                } else {
                    Value::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(arr) => {
                Value::Array(arr.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(obj) => {
                Value::Map(obj.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Integer => "integer",
            ValueKind::Float => "float",
            ValueKind::String => "string",
            ValueKind::Boolean => "boolean",
            ValueKind::Array => "array",
            ValueKind::Map => "map",
            ValueKind::Null => "null",
        };
        f.write_str(name)
    }
}

/// Kind name of a raw JSON value, used in contract-violation messages.
pub(crate) fn json_kind(json: &serde_json::Value) -> &'static str {
    match json {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "map",
    }
}

// ============================================================================
// PrimitiveType Implementation
// ============================================================================

impl PrimitiveType {
    /// Check if a value matches this primitive type.
    pub fn matches(&self, value: &Value) -> bool {
        self.accepts(value.kind())
    }

    /// Check if a runtime kind satisfies this primitive type.
    pub fn accepts(&self, kind: ValueKind) -> bool {
        matches!(
            (self, kind),
            (PrimitiveType::Integer, ValueKind::Integer)
                | (PrimitiveType::String, ValueKind::String)
                | (PrimitiveType::Float, ValueKind::Float)
                | (PrimitiveType::Boolean, ValueKind::Boolean)
        )
    }

    /// The canonical tag name, as accepted by [`FromStr`].
    pub fn tag(&self) -> &'static str {
        match self {
            PrimitiveType::Integer => "integer",
            PrimitiveType::String => "string",
            PrimitiveType::Float => "float",
            PrimitiveType::Boolean => "boolean",
        }
    }
}

impl FromStr for PrimitiveType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "integer" | "int" => Ok(PrimitiveType::Integer),
            "string" | "str" => Ok(PrimitiveType::String),
            "float" => Ok(PrimitiveType::Float),
            "boolean" | "bool" => Ok(PrimitiveType::Boolean),
            other => Err(format!("unknown type tag '{}'", other)),
        }
    }
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
