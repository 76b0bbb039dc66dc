//! String format checks
//!
//! Each check is a pattern match, nothing more: `date-time` is a prefix
//! check with no calendar validity, `email` and `url` are the usual
//! pragmatic approximations. Unknown formats never get this far; they
//! compile to no check.
//!
//! Copyright (c) 2025 Respec Team
//! Licensed under the Apache-2.0 license

use crate::schema::StringFormat;
use once_cell::sync::Lazy;
use regex::Regex;

static DATE_TIME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}").expect("date-time pattern")
});

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("email pattern")
});

static UUID: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$")
        .expect("uuid pattern")
});

static URL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^https?://[^\s/$.?#].[^\s]*$").expect("url pattern"));

/// Check a string value against a format, appending at most one violation
pub(crate) fn validate_string_format(
    path: &str,
    value: &str,
    format: StringFormat,
    errors: &mut Vec<String>,
) {
    match format {
        StringFormat::DateTime => {
            if !DATE_TIME.is_match(value) {
                errors.push(format!("Property {path} should be in ISO date-time format"));
            }
        }
        StringFormat::Email => {
            if !EMAIL.is_match(value) {
                errors.push(format!("Property {path} should be a valid email address"));
            }
        }
        StringFormat::Uuid => {
            if !UUID.is_match(value) {
                errors.push(format!("Property {path} should be a valid UUID"));
            }
        }
        StringFormat::Url => {
            if !URL.is_match(value) {
                errors.push(format!("Property {path} should be a valid URL"));
            }
        }
    }
}
