//! Endpoint resolution: concrete request paths to response schemas
//!
//! Templates are tried in registration order: an exact template match
//! first, then each pre-compiled `{param}` pattern. The first route that
//! matches the path and carries the requested method wins; overlapping
//! templates are resolved by registration order, not specificity.
//!
//! Copyright (c) 2025 Respec Team
//! Licensed under the Apache-2.0 license

use crate::schema::{Fragment, SchemaDocument};
use tracing::trace;

impl SchemaDocument {
    /// Resolve the response schema registered for `(method, path)`.
    ///
    /// `None` means no schema applies; callers must skip validation for
    /// the response rather than fail. A matching operation that declares
    /// no 200/201 JSON body also resolves to `None` - the scan stops at
    /// the first method match either way.
    pub fn schema_for_endpoint(&self, method: &str, path: &str) -> Option<&Fragment> {
        let method = method.to_lowercase();
        let path = normalize_path(path);

        // Exact template match first
        for route in self.routes() {
            if route.template() == path {
                if let Some(operation) = route.operation(&method) {
                    trace!(template = route.template(), %method, "exact route match");
                    return operation.response();
                }
                break;
            }
        }

        // Parametrized match, first registration wins
        for route in self.routes() {
            if route.matches(&path) {
                if let Some(operation) = route.operation(&method) {
                    trace!(template = route.template(), %method, "pattern route match");
                    return operation.response();
                }
            }
        }

        None
    }
}

/// Normalize a concrete request path: no trailing slashes, one leading slash
pub(crate) fn normalize_path(path: &str) -> String {
    let trimmed = path.trim_end_matches('/');
    if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}
