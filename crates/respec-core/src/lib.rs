//! Respec Core - schema-driven validation of API response bodies
//!
//! This crate interprets a pre-loaded OpenAPI-subset schema document and
//! checks observed JSON response bodies against it, reporting every
//! deviation as a flat list of human-readable violation strings.
//!
//! ## Main Components
//!
//! - **Loader**: parse a schema document from YAML or JSON and compile it
//!   into a typed route table ([`SchemaDocument`])
//! - **Path Matching**: resolve a concrete `(method, path)` pair to the
//!   response schema fragment registered for it, honoring `{param}`
//!   placeholders
//! - **Validation**: recursively validate a JSON value against a
//!   [`Fragment`], accumulating all violations instead of stopping at the
//!   first
//!
//! ## Quick Start
//!
//! ```rust
//! use respec_core::{SchemaDocument, validate_response};
//! use serde_json::json;
//!
//! let document = SchemaDocument::from_value(json!({
//!     "paths": {
//!         "/api/agents/{id}": {
//!             "get": {
//!                 "responses": {
//!                     "200": {
//!                         "content": {
//!                             "application/json": {
//!                                 "schema": {
//!                                     "type": "object",
//!                                     "required": ["id", "name"],
//!                                     "properties": {
//!                                         "id": {"type": "string", "format": "uuid"},
//!                                         "name": {"type": "string"}
//!                                     }
//!                                 }
//!                             }
//!                         }
//!                     }
//!                 }
//!             }
//!         }
//!     }
//! })).unwrap();
//!
//! let fragment = document.schema_for_endpoint("GET", "/api/agents/42").unwrap();
//! let violations = validate_response(&json!({"name": 7}), fragment);
//! assert_eq!(violations, vec![
//!     "Missing required property: id".to_string(),
//!     "Property name should be a string".to_string(),
//! ]);
//! ```
//!
//! An empty violation list means the body conforms. A `None` from path
//! resolution means no schema is registered for the endpoint; callers must
//! treat that as "skip validation", not as a failure.
//!
//! Copyright (c) 2025 Respec Team
//! Licensed under the Apache-2.0 license

pub mod error;
pub mod loader;
pub mod matcher;
pub mod schema;
pub mod validation;

pub use error::{Error, Result};
pub use loader::{load_document, Format};
pub use schema::{Fragment, ObjectConstraint, SchemaDocument, StringFormat, TypeKind};
pub use validation::{
    validate_response, ResponseSource, ResponseValidator,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
