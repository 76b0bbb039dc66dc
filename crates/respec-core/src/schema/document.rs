//! Compiled schema documents
//!
//! A [`SchemaDocument`] is the immutable, fully compiled form of an
//! OpenAPI-subset document: every registered path template becomes a
//! [`Route`] with a pre-compiled match pattern, and every operation's
//! success response schema becomes a [`Fragment`]. Registration order is
//! preserved; the matcher relies on it to break ties between overlapping
//! templates.
//!
//! Copyright (c) 2025 Respec Team
//! Licensed under the Apache-2.0 license

use crate::error::{Error, Result};
use crate::schema::Fragment;
use regex::Regex;
use serde_json::Value;

/// Response status codes checked, in order, for a JSON body schema
const SUCCESS_CODES: [&str; 2] = ["200", "201"];

/// Content type under which response schemas are registered
const JSON_CONTENT_TYPE: &str = "application/json";

/// Immutable compiled schema document
#[derive(Debug, Clone)]
pub struct SchemaDocument {
    routes: Vec<Route>,
}

/// One registered path template with its operations
#[derive(Debug, Clone)]
pub struct Route {
    template: String,
    pattern: Regex,
    operations: Vec<Operation>,
}

/// One HTTP operation registered under a route
#[derive(Debug, Clone)]
pub struct Operation {
    method: String,
    response: Option<Fragment>,
}

impl SchemaDocument {
    /// Compile a parsed schema document.
    ///
    /// The root must be a JSON object. A missing `paths` key yields an
    /// empty route table; a `paths` value that is not an object, or a
    /// template that does not compile to a matchable pattern, is rejected.
    pub fn from_value(raw: Value) -> Result<Self> {
        let root = raw
            .as_object()
            .ok_or_else(|| Error::invalid_document("root must be a JSON object"))?;

        let mut routes = Vec::new();
        if let Some(paths) = root.get("paths") {
            let paths = paths
                .as_object()
                .ok_or_else(|| Error::invalid_document("'paths' must be an object"))?;

            for (template, path_item) in paths {
                routes.push(Route::compile(template, path_item)?);
            }
        }

        Ok(Self { routes })
    }

    /// Registered routes, in registration order
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }
}

impl Route {
    fn compile(template: &str, path_item: &Value) -> Result<Self> {
        let pattern = template_pattern(template)?;

        // Non-operation path-item keys (parameters, summary, ...) compile
        // to operations with no response schema; method lookup never hits
        // them.
        let operations = path_item
            .as_object()
            .map(|item| {
                item.iter()
                    .map(|(method, spec)| Operation {
                        method: method.to_lowercase(),
                        response: extract_response_schema(spec),
                    })
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            template: template.to_string(),
            pattern,
            operations,
        })
    }

    /// The raw template string, e.g. `/api/agents/{id}`
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Whether the template matches a concrete, normalized path
    pub fn matches(&self, path: &str) -> bool {
        self.pattern.is_match(path)
    }

    /// Look up an operation by lowercased method name
    pub fn operation(&self, method: &str) -> Option<&Operation> {
        self.operations.iter().find(|op| op.method == method)
    }

    /// All registered operations
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }
}

impl Operation {
    /// Lowercased HTTP method name
    pub fn method(&self) -> &str {
        &self.method
    }

    /// The compiled 200/201 JSON response schema, if one is declared
    pub fn response(&self) -> Option<&Fragment> {
        self.response.as_ref()
    }
}

/// Compile a path template into an anchored regex, substituting each
/// `{name}` placeholder with a non-empty, slash-free wildcard.
fn template_pattern(template: &str) -> Result<Regex> {
    let mut pattern = String::with_capacity(template.len() + 16);
    pattern.push('^');

    let mut rest = template;
    while let Some(open) = rest.find('{') {
        let (literal, tail) = rest.split_at(open);
        pattern.push_str(literal);
        match tail.find('}') {
            Some(close) => {
                pattern.push_str("([^/]+)");
                rest = &tail[close + 1..];
            }
            None => {
                // Unbalanced brace: treat the remainder as literal text
                pattern.push_str(tail);
                rest = "";
            }
        }
    }
    pattern.push_str(rest);
    pattern.push('$');

    Regex::new(&pattern).map_err(|e| Error::invalid_template(template, e))
}

/// Walk an operation spec down to its success response schema fragment:
/// `responses -> 200|201 -> content -> application/json -> schema`.
fn extract_response_schema(operation_spec: &Value) -> Option<Fragment> {
    let responses = operation_spec.get("responses")?;

    for status_code in SUCCESS_CODES {
        if let Some(schema) = responses
            .get(status_code)
            .and_then(|response| response.get("content"))
            .and_then(|content| content.get(JSON_CONTENT_TYPE))
            .and_then(|media| media.get("schema"))
        {
            return Some(Fragment::compile(schema));
        }
    }

    None
}
