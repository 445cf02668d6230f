//! Response body types shared across route modules.

use serde::{Deserialize, Serialize};

/// Body for operations that report only an outcome ("Task updated").
/// Also used for validation failures and lookup misses, which surface a
/// human-readable message rather than an error string.
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Body for malformed-input and infrastructure failures. The underlying
/// error text is surfaced to the caller unmasked.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
