//! Compiled schema model: documents, routes, and fragments
//!
//! Copyright (c) 2025 Respec Team
//! Licensed under the Apache-2.0 license

pub mod document;
pub mod fragment;

pub use document::{Operation, Route, SchemaDocument};
pub use fragment::{Fragment, ObjectConstraint, StringFormat, TypeKind};
