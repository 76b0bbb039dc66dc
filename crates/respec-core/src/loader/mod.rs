//! Loading schema documents from disk
//!
//! Reading and parsing happen once; the parsed value is compiled into a
//! [`SchemaDocument`] so validation never inspects raw JSON schema
//! structure. Malformed documents fail here, not per-validation.
//!
//! Copyright (c) 2025 Respec Team
//! Licensed under the Apache-2.0 license

pub mod parser;

pub use parser::{parse_content, parse_file, Format};

use crate::error::Result;
use crate::schema::SchemaDocument;
use std::path::Path;
use tracing::debug;

/// Load and compile a schema document from a YAML or JSON file
pub fn load_document(path: &Path) -> Result<SchemaDocument> {
    let raw = parser::parse_file(path)?;
    let document = SchemaDocument::from_value(raw)?;
    debug!(
        path = %path.display(),
        routes = document.routes().len(),
        "loaded schema document"
    );
    Ok(document)
}
