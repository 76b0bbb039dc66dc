//! Compiled schema fragments
//!
//! A [`Fragment`] is one node of the schema tree describing the shape a
//! JSON value must have. Fragments are compiled from the raw document in a
//! single recursive pass at load time; validation only ever walks the
//! typed tree.
//!
//! The dialect is deliberately permissive: an unrecognized `type` compiles
//! to no type constraint, an unrecognized `format` to no format check, and
//! constraint fields of the wrong JSON type are ignored. A fragment with
//! neither a type constraint nor `anyOf` accepts any value.
//!
//! Copyright (c) 2025 Respec Team
//! Licensed under the Apache-2.0 license

use serde_json::Value;

/// One node of the compiled schema tree
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fragment {
    /// Whether an explicit `null` satisfies this fragment
    pub nullable: bool,
    /// The declared `type` constraint, if one was recognized
    pub kind: Option<TypeKind>,
    /// Union alternatives from `anyOf`; may coexist with `kind`
    pub any_of: Option<Vec<Fragment>>,
    /// `properties`/`required`, compiled regardless of the declared type.
    ///
    /// Kept outside [`TypeKind::Object`] because the top-level entry point
    /// applies required-property checks to any root schema, while nested
    /// validation only consults this when the type is `object`.
    pub object: ObjectConstraint,
}

/// Type-specific constraints, dispatched exhaustively during validation
#[derive(Debug, Clone, PartialEq)]
pub enum TypeKind {
    String {
        format: Option<StringFormat>,
        min_length: Option<u64>,
        max_length: Option<u64>,
    },
    Number {
        minimum: Option<f64>,
        maximum: Option<f64>,
    },
    Integer {
        minimum: Option<f64>,
        maximum: Option<f64>,
    },
    Boolean,
    Array {
        items: Option<Box<Fragment>>,
        min_items: Option<u64>,
        max_items: Option<u64>,
    },
    Object,
}

/// Recognized string formats; unknown formats compile to no check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringFormat {
    DateTime,
    Email,
    Uuid,
    Url,
}

impl StringFormat {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "date-time" => Some(Self::DateTime),
            "email" => Some(Self::Email),
            "uuid" => Some(Self::Uuid),
            "uri" | "url" => Some(Self::Url),
            _ => None,
        }
    }
}

/// Declared object shape: properties in declaration order plus required names
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectConstraint {
    pub properties: Vec<(String, Fragment)>,
    pub required: Vec<String>,
}

impl ObjectConstraint {
    /// Whether the constraint declares anything at all
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty() && self.required.is_empty()
    }

    /// Look up a declared property fragment by name
    pub fn property(&self, name: &str) -> Option<&Fragment> {
        self.properties
            .iter()
            .find(|(prop, _)| prop == name)
            .map(|(_, fragment)| fragment)
    }
}

impl Fragment {
    /// Compile a raw schema fragment into its typed form
    pub fn compile(raw: &Value) -> Self {
        let nullable = raw.get("nullable").and_then(Value::as_bool).unwrap_or(false);

        let kind = raw
            .get("type")
            .and_then(Value::as_str)
            .and_then(|ty| Self::compile_kind(ty, raw));

        let any_of = raw.get("anyOf").and_then(Value::as_array).map(|alternatives| {
            alternatives.iter().map(Fragment::compile).collect()
        });

        Fragment {
            nullable,
            kind,
            any_of,
            object: Self::compile_object(raw),
        }
    }

    fn compile_kind(ty: &str, raw: &Value) -> Option<TypeKind> {
        match ty {
            "string" => Some(TypeKind::String {
                format: raw
                    .get("format")
                    .and_then(Value::as_str)
                    .and_then(StringFormat::from_name),
                min_length: raw.get("minLength").and_then(Value::as_u64),
                max_length: raw.get("maxLength").and_then(Value::as_u64),
            }),
            "number" => Some(TypeKind::Number {
                minimum: raw.get("minimum").and_then(Value::as_f64),
                maximum: raw.get("maximum").and_then(Value::as_f64),
            }),
            "integer" => Some(TypeKind::Integer {
                minimum: raw.get("minimum").and_then(Value::as_f64),
                maximum: raw.get("maximum").and_then(Value::as_f64),
            }),
            "boolean" => Some(TypeKind::Boolean),
            "array" => Some(TypeKind::Array {
                items: raw.get("items").map(|items| Box::new(Fragment::compile(items))),
                min_items: raw.get("minItems").and_then(Value::as_u64),
                max_items: raw.get("maxItems").and_then(Value::as_u64),
            }),
            "object" => Some(TypeKind::Object),
            _ => None,
        }
    }

    fn compile_object(raw: &Value) -> ObjectConstraint {
        let properties = raw
            .get("properties")
            .and_then(Value::as_object)
            .map(|map| {
                map.iter()
                    .map(|(name, spec)| (name.clone(), Fragment::compile(spec)))
                    .collect()
            })
            .unwrap_or_default();

        let required = raw
            .get("required")
            .and_then(Value::as_array)
            .map(|names| {
                names
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        ObjectConstraint {
            properties,
            required,
        }
    }

    /// A fragment with no constraints; accepts any value
    pub fn permissive() -> Self {
        Self::default()
    }
}
