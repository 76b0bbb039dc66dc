//! Recursive response validation
//!
//! The top-level entry point [`validate_response`] performs only the
//! required-property checks of the root schema and delegates every declared
//! property to the recursive workhorse, which dispatches on the fragment's
//! type kind, recurses through arrays and objects, and backtracks through
//! `anyOf` alternatives. Violations accumulate in check order; nothing
//! short-circuits except a null value and a passing `anyOf` alternative.
//!
//! Message wording is a contract: consumers snapshot these strings.
//!
//! Copyright (c) 2025 Respec Team
//! Licensed under the Apache-2.0 license

use crate::error::Result;
use crate::loader;
use crate::schema::{Fragment, SchemaDocument, TypeKind};
use crate::validation::formats::validate_string_format;
use serde_json::Value;
use std::path::Path;

/// Validate a response body against a schema fragment.
///
/// Applies the fragment's required-property checks at the root, then
/// validates each declared property present in the body. Returns every
/// violation found; an empty list means the body conforms.
pub fn validate_response(body: &Value, fragment: &Fragment) -> Vec<String> {
    let mut errors = Vec::new();

    for name in &fragment.object.required {
        if body.get(name).is_none() {
            errors.push(format!("Missing required property: {name}"));
        }
    }

    for (name, property) in &fragment.object.properties {
        if let Some(value) = body.get(name) {
            validate_property(name, value, property, &mut errors);
        }
    }

    errors
}

/// Recursive workhorse: validate one value against one fragment, appending
/// violations attributed to `path`.
fn validate_property(path: &str, value: &Value, fragment: &Fragment, errors: &mut Vec<String>) {
    // Null short-circuits everything else
    if value.is_null() {
        if !fragment.nullable {
            errors.push(format!("Property {path} cannot be null"));
        }
        return;
    }

    if let Some(kind) = &fragment.kind {
        match kind {
            TypeKind::String {
                format,
                min_length,
                max_length,
            } => match value.as_str() {
                None => errors.push(format!("Property {path} should be a string")),
                Some(text) => {
                    if let Some(format) = format {
                        validate_string_format(path, text, *format, errors);
                    }
                    let length = text.chars().count() as u64;
                    if let Some(min) = min_length {
                        if length < *min {
                            errors.push(format!("Property {path} is too short (min: {min})"));
                        }
                    }
                    if let Some(max) = max_length {
                        if length > *max {
                            errors.push(format!("Property {path} is too long (max: {max})"));
                        }
                    }
                }
            },

            TypeKind::Number { minimum, maximum } => match value.as_f64() {
                None => errors.push(format!("Property {path} should be a number")),
                Some(number) => validate_range(path, number, *minimum, *maximum, errors),
            },

            TypeKind::Integer { minimum, maximum } => match value.as_f64() {
                None => errors.push(format!("Property {path} should be a number")),
                Some(number) => {
                    // Literal underlying-type check: a float-typed whole
                    // number still fails integer
                    if !value.is_i64() && !value.is_u64() {
                        errors.push(format!("Property {path} should be an integer"));
                    }
                    validate_range(path, number, *minimum, *maximum, errors);
                }
            },

            TypeKind::Boolean => {
                if !value.is_boolean() {
                    errors.push(format!("Property {path} should be a boolean"));
                }
            }

            TypeKind::Array {
                items,
                min_items,
                max_items,
            } => match value.as_array() {
                None => errors.push(format!("Property {path} should be an array")),
                Some(elements) => {
                    if let Some(item_fragment) = items {
                        for (index, element) in elements.iter().enumerate() {
                            validate_property(
                                &format!("{path}[{index}]"),
                                element,
                                item_fragment,
                                errors,
                            );
                        }
                    }
                    let count = elements.len() as u64;
                    if let Some(min) = min_items {
                        if count < *min {
                            errors.push(format!("Property {path} has too few items (min: {min})"));
                        }
                    }
                    if let Some(max) = max_items {
                        if count > *max {
                            errors.push(format!("Property {path} has too many items (max: {max})"));
                        }
                    }
                }
            },

            TypeKind::Object => match value.as_object() {
                None => errors.push(format!("Property {path} should be an object")),
                Some(map) => {
                    for (name, property) in &fragment.object.properties {
                        if let Some(nested) = map.get(name) {
                            validate_property(&format!("{path}.{name}"), nested, property, errors);
                        }
                    }
                    for name in &fragment.object.required {
                        if !map.contains_key(name) {
                            errors.push(format!("Missing required property {path}.{name}"));
                        }
                    }
                }
            },
        }
    }

    // Union alternatives run in addition to any declared type: the value
    // passes if one alternative validates clean, otherwise every collected
    // sub-error is reported under a summary line.
    if let Some(alternatives) = &fragment.any_of {
        let mut collected = Vec::new();
        let mut matched = false;

        for alternative in alternatives {
            let mut alternative_errors = Vec::new();
            validate_property(path, value, alternative, &mut alternative_errors);
            if alternative_errors.is_empty() {
                matched = true;
                break;
            }
            collected.extend(alternative_errors);
        }

        if !matched {
            errors.push(format!("Property {path} does not match any allowed schemas"));
            errors.extend(collected.into_iter().map(|error| format!("  - {error}")));
        }
    }
}

fn validate_range(
    path: &str,
    number: f64,
    minimum: Option<f64>,
    maximum: Option<f64>,
    errors: &mut Vec<String>,
) {
    if let Some(min) = minimum {
        if number < min {
            errors.push(format!("Property {path} is too small (min: {min})"));
        }
    }
    if let Some(max) = maximum {
        if number > max {
            errors.push(format!("Property {path} is too large (max: {max})"));
        }
    }
}

/// Source of captured response bodies, fulfilled externally by the HTTP
/// layer
pub trait ResponseSource {
    /// Fetch the response body observed for `(method, path)`, if any
    fn resolve_response_body(&self, method: &str, path: &str) -> Option<Value>;
}

/// Validates observed response bodies against a loaded schema document.
///
/// A validator may be constructed without a document, in which case every
/// endpoint resolves to "no schema" and validation is skipped.
#[derive(Debug, Clone, Default)]
pub struct ResponseValidator {
    document: Option<SchemaDocument>,
}

impl ResponseValidator {
    /// Create a validator over a compiled schema document
    pub fn new(document: SchemaDocument) -> Self {
        Self {
            document: Some(document),
        }
    }

    /// Load and compile a schema document from a YAML or JSON file
    pub fn from_path(path: &Path) -> Result<Self> {
        Ok(Self::new(loader::load_document(path)?))
    }

    /// Compile a pre-parsed schema document
    pub fn from_value(raw: Value) -> Result<Self> {
        Ok(Self::new(SchemaDocument::from_value(raw)?))
    }

    /// Create a validator with no schema; every check is skipped
    pub fn without_schema() -> Self {
        Self::default()
    }

    /// The loaded document, if any
    pub fn document(&self) -> Option<&SchemaDocument> {
        self.document.as_ref()
    }

    /// Resolve the response schema for an endpoint, if one is registered
    pub fn schema_for_endpoint(&self, method: &str, path: &str) -> Option<&Fragment> {
        self.document
            .as_ref()
            .and_then(|document| document.schema_for_endpoint(method, path))
    }

    /// Validate a response body observed for an endpoint.
    ///
    /// `None` means no schema is registered for the endpoint and the check
    /// must be skipped; `Some(violations)` is the validation outcome.
    pub fn validate_endpoint(
        &self,
        method: &str,
        path: &str,
        body: &Value,
    ) -> Option<Vec<String>> {
        self.schema_for_endpoint(method, path)
            .map(|fragment| validate_response(body, fragment))
    }

    /// Pull the body for an endpoint from a [`ResponseSource`] and validate
    /// it. `None` when the source has no body or no schema applies.
    pub fn check_source<S: ResponseSource>(
        &self,
        source: &S,
        method: &str,
        path: &str,
    ) -> Option<Vec<String>> {
        let body = source.resolve_response_body(method, path)?;
        self.validate_endpoint(method, path, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn validate(value: Value, schema: Value) -> Vec<String> {
        let fragment = Fragment::compile(&schema);
        let mut errors = Vec::new();
        validate_property("x", &value, &fragment, &mut errors);
        errors
    }

    #[test]
    fn test_unconstrained_fragment_accepts_anything() {
        for value in [json!(null), json!(42), json!("text"), json!([1, 2]), json!({"a": 1})] {
            assert!(validate(value, json!({})).is_empty());
        }
    }

    #[test]
    fn test_null_handling() {
        assert!(validate(json!(null), json!({"type": "string", "nullable": true})).is_empty());
        assert_eq!(
            validate(json!(null), json!({"type": "string"})),
            vec!["Property x cannot be null"]
        );
        // Null stops further checks even when other constraints would fail
        assert_eq!(
            validate(json!(null), json!({"type": "string", "minLength": 5, "nullable": true})),
            Vec::<String>::new()
        );
    }

    #[test]
    fn test_string_type_and_length() {
        assert_eq!(
            validate(json!(12), json!({"type": "string"})),
            vec!["Property x should be a string"]
        );
        assert_eq!(
            validate(json!("ab"), json!({"type": "string", "minLength": 3})),
            vec!["Property x is too short (min: 3)"]
        );
        assert_eq!(
            validate(json!("abcdef"), json!({"type": "string", "maxLength": 4})),
            vec!["Property x is too long (max: 4)"]
        );
    }

    #[test]
    fn test_string_format_and_length_fire_together() {
        let errors = validate(
            json!("nope"),
            json!({"type": "string", "format": "email", "minLength": 10}),
        );
        assert_eq!(
            errors,
            vec![
                "Property x should be a valid email address",
                "Property x is too short (min: 10)",
            ]
        );
    }

    #[test]
    fn test_number_type_and_range() {
        assert_eq!(
            validate(json!("42"), json!({"type": "number"})),
            vec!["Property x should be a number"]
        );
        assert!(validate(json!(3.5), json!({"type": "number"})).is_empty());
        assert_eq!(
            validate(json!(1), json!({"type": "number", "minimum": 5})),
            vec!["Property x is too small (min: 5)"]
        );
        assert_eq!(
            validate(json!(10), json!({"type": "integer", "maximum": 9})),
            vec!["Property x is too large (max: 9)"]
        );
    }

    #[test]
    fn test_integer_rejects_float_typed_whole_numbers() {
        assert!(validate(json!(3), json!({"type": "integer"})).is_empty());
        assert_eq!(
            validate(json!(3.0), json!({"type": "integer"})),
            vec!["Property x should be an integer"]
        );
        assert_eq!(
            validate(json!(3.5), json!({"type": "integer"})),
            vec!["Property x should be an integer"]
        );
    }

    #[test]
    fn test_boolean_type() {
        assert!(validate(json!(false), json!({"type": "boolean"})).is_empty());
        assert_eq!(
            validate(json!("true"), json!({"type": "boolean"})),
            vec!["Property x should be a boolean"]
        );
        // Booleans are not numbers in this dialect
        assert_eq!(
            validate(json!(true), json!({"type": "number"})),
            vec!["Property x should be a number"]
        );
    }

    #[test]
    fn test_array_element_accumulation() {
        let errors = validate(
            json!(["ok", 1, "ok", 2]),
            json!({"type": "array", "items": {"type": "string"}}),
        );
        assert_eq!(
            errors,
            vec![
                "Property x[1] should be a string",
                "Property x[3] should be a string",
            ]
        );
    }

    #[test]
    fn test_array_length_constraints() {
        assert_eq!(
            validate(json!([1]), json!({"type": "array", "minItems": 2})),
            vec!["Property x has too few items (min: 2)"]
        );
        assert_eq!(
            validate(json!([1, 2, 3]), json!({"type": "array", "maxItems": 2})),
            vec!["Property x has too many items (max: 2)"]
        );
    }

    #[test]
    fn test_nested_object_paths() {
        let errors = validate(
            json!({"zip": 12345}),
            json!({
                "type": "object",
                "properties": {"zip": {"type": "string"}},
                "required": ["zip", "city"]
            }),
        );
        assert_eq!(
            errors,
            vec![
                "Property x.zip should be a string",
                "Missing required property x.city",
            ]
        );
    }

    #[test]
    fn test_undeclared_properties_are_ignored() {
        let errors = validate(
            json!({"declared": "ok", "extra": {"anything": [1, 2, 3]}}),
            json!({"type": "object", "properties": {"declared": {"type": "string"}}}),
        );
        assert!(errors.is_empty());
    }

    #[test]
    fn test_any_of_short_circuits_on_success() {
        let errors = validate(
            json!(5),
            json!({"anyOf": [{"type": "string"}, {"type": "integer"}]}),
        );
        assert!(errors.is_empty());
    }

    #[test]
    fn test_any_of_exhaustive_failure_reports_all_alternatives() {
        let errors = validate(
            json!(true),
            json!({"anyOf": [{"type": "string"}, {"type": "integer"}]}),
        );
        assert_eq!(
            errors,
            vec![
                "Property x does not match any allowed schemas",
                "  - Property x should be a string",
                "  - Property x should be a number",
            ]
        );
    }

    #[test]
    fn test_any_of_runs_alongside_declared_type() {
        let errors = validate(
            json!(7),
            json!({"type": "string", "anyOf": [{"type": "boolean"}]}),
        );
        assert_eq!(
            errors,
            vec![
                "Property x should be a string",
                "Property x does not match any allowed schemas",
                "  - Property x should be a boolean",
            ]
        );
    }

    #[test]
    fn test_validate_response_top_level() {
        let fragment = Fragment::compile(&json!({
            "type": "object",
            "required": ["id", "name"],
            "properties": {
                "id": {"type": "integer"},
                "name": {"type": "string"}
            }
        }));
        let errors = validate_response(&json!({"id": "seven"}), &fragment);
        assert_eq!(
            errors,
            vec![
                "Missing required property: name",
                "Property id should be a string",
            ]
        );
    }

    #[test]
    fn test_validate_response_is_deterministic() {
        let fragment = Fragment::compile(&json!({
            "required": ["a", "b"],
            "properties": {
                "c": {"type": "string"},
                "d": {"type": "integer"}
            }
        }));
        let body = json!({"c": 1, "d": "x"});
        let first = validate_response(&body, &fragment);
        let second = validate_response(&body, &fragment);
        assert_eq!(first, second);
        assert_eq!(first.len(), 4);
    }

    struct FixedSource(Value);

    impl ResponseSource for FixedSource {
        fn resolve_response_body(&self, _method: &str, _path: &str) -> Option<Value> {
            Some(self.0.clone())
        }
    }

    #[test]
    fn test_check_source_round_trip() {
        let validator = ResponseValidator::from_value(json!({
            "paths": {
                "/api/health": {
                    "get": {
                        "responses": {
                            "200": {
                                "content": {
                                    "application/json": {
                                        "schema": {
                                            "type": "object",
                                            "required": ["status"],
                                            "properties": {"status": {"type": "string"}}
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }))
        .unwrap();

        let source = FixedSource(json!({"status": "ok"}));
        assert_eq!(
            validator.check_source(&source, "GET", "/api/health"),
            Some(vec![])
        );

        let bad = FixedSource(json!({}));
        assert_eq!(
            validator.check_source(&bad, "GET", "/api/health"),
            Some(vec!["Missing required property: status".to_string()])
        );

        // Unregistered endpoint: skip, not a failure
        assert_eq!(validator.check_source(&source, "GET", "/api/unknown"), None);
    }

    #[test]
    fn test_validator_without_schema_skips_everything() {
        let validator = ResponseValidator::without_schema();
        assert!(validator.schema_for_endpoint("GET", "/api/agents").is_none());
        assert!(validator
            .validate_endpoint("GET", "/api/agents", &json!({}))
            .is_none());
    }
}
