//! Response body validation
//!
//! Copyright (c) 2025 Respec Team
//! Licensed under the Apache-2.0 license

mod formats;
mod validator;

pub use validator::{validate_response, ResponseSource, ResponseValidator};
