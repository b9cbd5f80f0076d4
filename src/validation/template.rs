//! Templates describing the expected shape of nested data.

use crate::core::error::{SchemaError, SchemaResult};
use crate::core::path::KeyPath;
use crate::core::types::{json_kind, PrimitiveType};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// What a template expects at a single key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TemplateNode {
    /// A leaf value of the given primitive type.
    Primitive(PrimitiveType),
    /// A nested map matching the sub-template.
    Nested(Template),
}

/// Ordered mapping from key to expected type or sub-template.
///
/// Keys are checked in insertion order, which decides which failure is
/// reported when several keys are wrong.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Template {
    fields: IndexMap<String, TemplateNode>,
}

impl Template {
    /// Create an empty template.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start building a template.
    pub fn builder() -> TemplateBuilder {
        TemplateBuilder::new()
    }

    /// Parse a template from JSON.
    ///
    /// Objects become nested templates and strings are type tags
    /// (`"integer"`, `"string"`, `"float"`, `"boolean"`). Anything else is a
    /// contract violation.
    pub fn from_json(json: &serde_json::Value) -> SchemaResult<Self> {
        Self::parse_object(json, &KeyPath::root())
    }

    fn parse_object(json: &serde_json::Value, path: &KeyPath) -> SchemaResult<Self> {
        let obj = json.as_object().ok_or_else(|| SchemaError::TemplateNotAMap {
            path: path.clone(),
            found: json_kind(json).to_string(),
        })?;

        let mut template = Template::new();
        for (key, expected) in obj {
            let child = path.child(key);
            let node = match expected {
                serde_json::Value::Object(_) => {
                    TemplateNode::Nested(Self::parse_object(expected, &child)?)
                }
                serde_json::Value::String(tag) => {
                    let primitive = tag.parse::<PrimitiveType>().map_err(|_| {
                        SchemaError::UnknownTypeTag {
                            path: child.clone(),
                            tag: tag.clone(),
                        }
                    })?;
                    TemplateNode::Primitive(primitive)
                }
                other => {
                    return Err(SchemaError::UnknownTypeTag {
                        path: child,
                        tag: json_kind(other).to_string(),
                    })
                }
            };
            template.fields.insert(key.clone(), node);
        }
        Ok(template)
    }

    /// Add or replace a key.
    pub fn insert(&mut self, key: impl Into<String>, node: TemplateNode) {
        self.fields.insert(key.into(), node);
    }

    /// Look up the expectation for a key.
    pub fn get(&self, key: &str) -> Option<&TemplateNode> {
        self.fields.get(key)
    }

    /// Check whether the template declares a key.
    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Iterate over declared keys in template order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &TemplateNode)> {
        self.fields.iter()
    }

    /// Number of declared keys at this level.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the template declares no keys.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Builder for [`Template`].
#[derive(Debug, Default)]
pub struct TemplateBuilder {
    template: Template,
}

impl TemplateBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a primitive-typed key.
    pub fn field(mut self, key: impl Into<String>, ty: PrimitiveType) -> Self {
        self.template.insert(key, TemplateNode::Primitive(ty));
        self
    }

    /// Declare a key holding a nested map.
    pub fn nested(mut self, key: impl Into<String>, template: Template) -> Self {
        self.template.insert(key, TemplateNode::Nested(template));
        self
    }

    /// Build the template.
    pub fn build(self) -> Template {
        self.template
    }
}
