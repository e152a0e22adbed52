//! Error types for A2A task records and operations

use std::fmt;

use serde_json::Value;
use thiserror::Error;

/// Standard JSON-RPC error codes
pub const PARSE_ERROR: i64 = -32700;
pub const INVALID_REQUEST: i64 = -32600;
pub const METHOD_NOT_FOUND: i64 = -32601;
pub const INVALID_PARAMS: i64 = -32602;
pub const INTERNAL_ERROR: i64 = -32603;

/// Raised when a record cannot be constructed from the given fields
///
/// Construction is all-or-nothing: a record either passes every type,
/// presence and literal-set check or no record is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub struct ValidationError {
    /// Name of the offending field, when known
    pub field: Option<String>,

    /// Human-readable description of the violation
    pub message: String,
}

impl ValidationError {
    /// Create a validation error that is not tied to a single field
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            field: None,
            message: message.into(),
        }
    }

    /// Create a validation error for a named field
    pub fn field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: Some(field.into()),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.field {
            Some(field) => write!(f, "{}: {}", field, self.message),
            None => f.write_str(&self.message),
        }
    }
}

impl From<serde_json::Error> for ValidationError {
    fn from(err: serde_json::Error) -> Self {
        ValidationError::new(err.to_string())
    }
}

/// Main error type for A2A task operations
#[derive(Debug, Error)]
pub enum A2AError {
    /// A record or request violated its schema
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Protocol-level error (malformed envelope, unsupported codec use, etc.)
    #[error("Protocol error: {0}")]
    Protocol(String),

    /// Error object carried by a JSON-RPC response
    #[error("JSON-RPC error {code}: {message}")]
    JsonRpc {
        code: i64,
        message: String,
        data: Option<Value>,
    },

    /// The JSON-RPC method is not one of the task operations
    #[error("Method not found: {0}")]
    MethodNotFound(String),
}

impl A2AError {
    /// JSON-RPC error code matching this error
    pub fn code(&self) -> i64 {
        match self {
            A2AError::Validation(_) => INVALID_PARAMS,
            A2AError::Serialization(_) => PARSE_ERROR,
            A2AError::Protocol(_) => INVALID_REQUEST,
            A2AError::JsonRpc { code, .. } => *code,
            A2AError::MethodNotFound(_) => METHOD_NOT_FOUND,
        }
    }
}

/// Result type alias for A2A operations
pub type A2AResult<T> = Result<T, A2AError>;
