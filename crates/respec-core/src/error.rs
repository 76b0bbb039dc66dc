//! Error types for schema document loading
//!
//! Violations found during validation are data, not errors; only failures
//! to load or compile a schema document surface through this module.
//!
//! Copyright (c) 2025 Respec Team
//! Licensed under the Apache-2.0 license

use std::path::PathBuf;
use thiserror::Error;

/// Result type for loader and compile operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while reading or compiling a schema document
#[derive(Error, Debug)]
pub enum Error {
    /// File I/O errors
    #[error("Failed to read schema file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON parsing errors
    #[error("Failed to parse JSON schema '{path}': {source}")]
    JsonParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// YAML parsing errors
    #[error("Failed to parse YAML schema '{path}': {source}")]
    YamlParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// Unsupported file format
    #[error("Unsupported file format for '{path}'. Expected .yaml, .yml, or .json")]
    UnsupportedFormat { path: PathBuf },

    /// Structural problems in the schema document itself
    #[error("Invalid schema document: {reason}")]
    InvalidDocument { reason: String },

    /// A path template that does not compile to a matchable pattern
    #[error("Invalid path template '{template}': {source}")]
    InvalidTemplate {
        template: String,
        #[source]
        source: regex::Error,
    },
}

impl Error {
    /// Create an I/O error with path context
    pub fn io(path: PathBuf, source: std::io::Error) -> Self {
        Self::Io { path, source }
    }

    /// Create a JSON parsing error with path context
    pub fn json_parse(path: PathBuf, source: serde_json::Error) -> Self {
        Self::JsonParse { path, source }
    }

    /// Create a YAML parsing error with path context
    pub fn yaml_parse(path: PathBuf, source: serde_yaml::Error) -> Self {
        Self::YamlParse { path, source }
    }

    /// Create an unsupported format error
    pub fn unsupported_format(path: PathBuf) -> Self {
        Self::UnsupportedFormat { path }
    }

    /// Create an invalid document error
    pub fn invalid_document<R: Into<String>>(reason: R) -> Self {
        Self::InvalidDocument {
            reason: reason.into(),
        }
    }

    /// Create an invalid template error
    pub fn invalid_template<T: Into<String>>(template: T, source: regex::Error) -> Self {
        Self::InvalidTemplate {
            template: template.into(),
            source,
        }
    }

    /// Get the file path associated with this error, if any
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::Io { path, .. } => Some(path),
            Self::JsonParse { path, .. } => Some(path),
            Self::YamlParse { path, .. } => Some(path),
            Self::UnsupportedFormat { path } => Some(path),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_path_context() {
        let path = PathBuf::from("openapi.yaml");
        let err = Error::io(
            path.clone(),
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        );
        assert!(matches!(err, Error::Io { .. }));
        assert_eq!(err.path(), Some(&path));
        assert!(err.to_string().contains("openapi.yaml"));
    }

    #[test]
    fn test_invalid_document_has_no_path() {
        let err = Error::invalid_document("root must be an object");
        assert_eq!(err.path(), None);
        assert!(err.to_string().contains("root must be an object"));
    }
}
