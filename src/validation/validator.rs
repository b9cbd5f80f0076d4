//! Recursive, fail-fast structural validation.
//!
//! Traversal order is fixed: template keys in template order (recursing into
//! nested templates as they are met), then extra data keys in data order.
//! The first failure found is the only one reported.

use crate::core::error::{SchemaError, SchemaResult, ValidationError, ValidationReport};
use crate::core::path::KeyPath;
use crate::core::types::{Value, ValueMap};
use crate::validation::template::{Template, TemplateNode};
use log::{debug, trace};

/// Validate `data` against `template`, starting at the root path.
pub fn validate(data: &ValueMap, template: &Template) -> ValidationReport {
    validate_at(data, template, &KeyPath::root())
}

/// Validate `data` against `template`, prefixing diagnostics with `path`.
pub fn validate_at(data: &ValueMap, template: &Template, path: &KeyPath) -> ValidationReport {
    let result = check(data, template, path);
    if let Err(error) = &result {
        debug!("validation failed: {} at '{}'", error.kind(), error.path());
    }
    ValidationReport::from(result)
}

/// Validate JSON data against a JSON template.
///
/// Non-map data or a malformed template is a [`SchemaError`], distinct from
/// a failing report.
pub fn validate_json(
    data: &serde_json::Value,
    template: &serde_json::Value,
) -> SchemaResult<ValidationReport> {
    let template = Template::from_json(template)?;
    let data = match Value::from(data.clone()) {
        Value::Map(map) => map,
        other => {
            return Err(SchemaError::DataNotAMap {
                found: other.kind().to_string(),
            })
        }
    };
    Ok(validate(&data, &template))
}

/// Structured form of [`validate_at`].
pub fn check(data: &ValueMap, template: &Template, path: &KeyPath) -> Result<(), ValidationError> {
    for (key, expected) in template.iter() {
        let current = path.child(key);
        trace!("checking '{}'", current);

        let value = data
            .get(key)
            .ok_or_else(|| ValidationError::MismatchedKeys { path: current.clone() })?;

        match expected {
            TemplateNode::Nested(sub) => {
                let nested = value
                    .as_map()
                    .ok_or_else(|| ValidationError::NotAMap { path: current.clone() })?;
                check(nested, sub, &current)?;
            }
            TemplateNode::Primitive(ty) => {
                if !ty.matches(value) {
                    return Err(ValidationError::BadType { path: current });
                }
            }
        }
    }

    if let Some(extra) = data.keys().find(|key| !template.contains_key(key)) {
        return Err(ValidationError::MismatchedKeys {
            path: path.child(extra),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::PrimitiveType;
    use serde_json::json;

    fn data(json: serde_json::Value) -> ValueMap {
        match Value::from(json) {
            Value::Map(map) => map,
            other => panic!("expected map, got {}", other.kind()),
        }
    }

    fn int_template() -> Template {
        Template::builder().field("a", PrimitiveType::Integer).build()
    }

    #[test]
    fn test_matching_data_passes() {
        let _ = env_logger::builder().is_test(true).try_init();

        let template = Template::builder()
            .field("name", PrimitiveType::String)
            .field("age", PrimitiveType::Integer)
            .field("height", PrimitiveType::Float)
            .field("active", PrimitiveType::Boolean)
            .nested(
                "address",
                Template::builder()
                    .field("city", PrimitiveType::String)
                    .field("zip", PrimitiveType::Integer)
                    .build(),
            )
            .build();
        let data = data(json!({
            "name": "Ada",
            "age": 36,
            "height": 1.65,
            "active": true,
            "address": {"city": "London", "zip": 12345}
        }));

        let report = validate(&data, &template);
        assert_eq!(report.as_pair(), (true, ""));
        assert!(report.failure.is_none());
    }

    #[test]
    fn test_missing_key() {
        let report = validate(&data(json!({})), &int_template());
        assert_eq!(report.as_pair(), (false, "mismatched keys: a"));
    }

    #[test]
    fn test_wrong_primitive_type() {
        let report = validate(&data(json!({"a": "x"})), &int_template());
        assert_eq!(report.as_pair(), (false, "bad type: a"));
    }

    #[test]
    fn test_extra_key() {
        let report = validate(&data(json!({"a": 1, "b": 2})), &int_template());
        assert_eq!(report.as_pair(), (false, "mismatched keys: b"));
    }

    #[test]
    fn test_nested_type_mismatch() {
        let template = Template::builder()
            .nested("a", Template::builder().field("b", PrimitiveType::Integer).build())
            .build();
        let report = validate(&data(json!({"a": {"b": "x"}})), &template);
        assert_eq!(report.as_pair(), (false, "bad type: a.b"));
    }

    #[test]
    fn test_nested_value_not_a_map() {
        let template = Template::builder()
            .nested("a", Template::builder().field("b", PrimitiveType::Integer).build())
            .build();
        let report = validate(&data(json!({"a": 5})), &template);
        assert_eq!(report.as_pair(), (false, "bad type: a"));
        assert!(matches!(report.failure, Some(ValidationError::NotAMap { .. })));
    }

    #[test]
    fn test_nested_missing_and_extra_keys() {
        let template = Template::builder()
            .nested("a", Template::builder().field("b", PrimitiveType::Integer).build())
            .build();

        let report = validate(&data(json!({"a": {}})), &template);
        assert_eq!(report.error, "mismatched keys: a.b");

        let report = validate(&data(json!({"a": {"b": 1, "c": 2}})), &template);
        assert_eq!(report.error, "mismatched keys: a.c");
    }

    #[test]
    fn test_boolean_does_not_satisfy_integer() {
        let report = validate(&data(json!({"a": true})), &int_template());
        assert_eq!(report.error, "bad type: a");

        let template = Template::builder().field("a", PrimitiveType::Boolean).build();
        let report = validate(&data(json!({"a": 1})), &template);
        assert_eq!(report.error, "bad type: a");
    }

    #[test]
    fn test_integer_does_not_satisfy_float() {
        let template = Template::builder().field("a", PrimitiveType::Float).build();
        let report = validate(&data(json!({"a": 1})), &template);
        assert_eq!(report.error, "bad type: a");
    }

    #[test]
    fn test_template_keys_checked_before_extra_keys() {
        // "z" is extra and comes first in the data, but "a" is missing and
        // template keys are checked first.
        let report = validate(&data(json!({"z": 0})), &int_template());
        assert_eq!(report.error, "mismatched keys: a");
    }

    #[test]
    fn test_first_failure_in_template_order_wins() {
        let template = Template::builder()
            .field("first", PrimitiveType::Integer)
            .field("second", PrimitiveType::Integer)
            .build();
        let report = validate(&data(json!({"second": "x", "first": "y"})), &template);
        assert_eq!(report.error, "bad type: first");
    }

    #[test]
    fn test_first_extra_key_in_data_order_wins() {
        let report = validate(&data(json!({"a": 1, "y": 0, "x": 0})), &int_template());
        assert_eq!(report.error, "mismatched keys: y");
    }

    #[test]
    fn test_validate_at_prefixes_path() {
        let report = validate_at(&data(json!({"a": "x"})), &int_template(), &KeyPath::parse("root"));
        assert_eq!(report.error, "bad type: root.a");
    }

    #[test]
    fn test_empty_template_and_data() {
        let report = validate(&ValueMap::new(), &Template::new());
        assert!(report.ok);
    }

    #[test]
    fn test_validate_json() {
        let report = validate_json(
            &json!({"user": {"id": 1, "name": "x"}}),
            &json!({"user": {"id": "integer", "name": "string"}}),
        )
        .unwrap();
        assert!(report.ok);

        let report = validate_json(&json!({"user": {"id": "1"}}), &json!({"user": {"id": "integer"}}))
            .unwrap();
        assert_eq!(report.error, "bad type: user.id");
    }

    #[test]
    fn test_validate_json_accepts_unsigned_integers_beyond_i64() {
        let report = validate_json(
            &json!({"a": 18446744073709551615u64}),
            &json!({"a": "integer"}),
        )
        .unwrap();
        assert_eq!(report.as_pair(), (true, ""));
    }

    #[test]
    fn test_validate_json_contract_violations() {
        let err = validate_json(&json!([1, 2]), &json!({"a": "integer"})).unwrap_err();
        assert_eq!(err, SchemaError::DataNotAMap { found: "array".to_string() });

        let err = validate_json(&json!({}), &json!("integer")).unwrap_err();
        assert!(matches!(err, SchemaError::TemplateNotAMap { .. }));
    }
}
