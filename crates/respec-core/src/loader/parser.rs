//! Schema document parsing for YAML and JSON formats
//!
//! Copyright (c) 2025 Respec Team
//! Licensed under the Apache-2.0 license

use crate::error::{Error, Result};
use serde_json::Value;
use std::path::Path;

/// Supported file formats for schema documents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// YAML format (.yaml, .yml)
    Yaml,
    /// JSON format (.json)
    Json,
}

impl Format {
    /// Detect format from file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        if let Some(extension) = path.extension().and_then(|ext| ext.to_str()) {
            match extension.to_lowercase().as_str() {
                "yaml" | "yml" => Ok(Format::Yaml),
                "json" => Ok(Format::Json),
                _ => Err(Error::unsupported_format(path.to_path_buf())),
            }
        } else {
            Err(Error::unsupported_format(path.to_path_buf()))
        }
    }

    /// Get file extensions for this format
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            Format::Yaml => &["yaml", "yml"],
            Format::Json => &["json"],
        }
    }
}

/// Parse a schema file, detecting format from the extension
pub fn parse_file(path: &Path) -> Result<Value> {
    let format = Format::from_path(path)?;
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::io(path.to_path_buf(), e))?;

    parse_content(&content, format, path)
}

/// Parse schema content with an explicit format
pub fn parse_content(content: &str, format: Format, path: &Path) -> Result<Value> {
    match format {
        Format::Yaml => parse_yaml(content, path),
        Format::Json => parse_json(content, path),
    }
}

/// Parse YAML content into a JSON value for uniform handling downstream
pub fn parse_yaml(content: &str, path: &Path) -> Result<Value> {
    let yaml_value: serde_yaml::Value = serde_yaml::from_str(content)
        .map_err(|e| Error::yaml_parse(path.to_path_buf(), e))?;

    serde_json::to_value(yaml_value).map_err(|e| Error::json_parse(path.to_path_buf(), e))
}

/// Parse JSON content
pub fn parse_json(content: &str, path: &Path) -> Result<Value> {
    serde_json::from_str(content).map_err(|e| Error::json_parse(path.to_path_buf(), e))
}
