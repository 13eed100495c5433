//! Error types for film request handlers.

use std::error::Error;
use std::fmt;

use serde_json::{json, Value};

use crate::store::StoreError;

/// Outcome of a handler that did not succeed.
#[derive(Debug)]
pub enum ApiError {
    /// Required film fields missing or of the wrong type/sign.
    InvalidData,
    /// Path id is not an unsigned integer.
    InvalidId(String),
    /// Malformed request answered with a bare 400.
    BadRequest,
    /// No film with the requested id.
    NotFound,
    /// A unique key (title, id) is already taken.
    Conflict(String),
    /// The last film already holds the largest possible id.
    IdExhausted,
    /// Persisting the collection failed.
    Storage(StoreError),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::InvalidData => write!(f, "Invalid film data"),
            ApiError::InvalidId(_) => write!(f, "Invalid film id"),
            ApiError::BadRequest => write!(f, "bad request"),
            ApiError::NotFound => write!(f, "not found"),
            ApiError::Conflict(msg) => write!(f, "{}", msg),
            ApiError::IdExhausted => write!(f, "No film id available"),
            ApiError::Storage(e) => write!(f, "storage error: {}", e),
        }
    }
}

impl Error for ApiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ApiError::Storage(e) => Some(e),
            _ => None,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::Storage(err)
    }
}

impl ApiError {
    /// Map this error to an HTTP status code.
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::InvalidData => 400,
            ApiError::InvalidId(_) => 400,
            ApiError::BadRequest => 400,
            ApiError::NotFound => 404,
            ApiError::Conflict(_) => 409,
            ApiError::IdExhausted => 500,
            ApiError::Storage(_) => 500,
        }
    }

    /// JSON body to send with the status, `None` for an empty body.
    ///
    /// Storage details (paths, OS errors) stay in the logs.
    pub fn body(&self) -> Option<Value> {
        match self {
            ApiError::BadRequest | ApiError::NotFound => None,
            ApiError::Storage(_) => Some(json!({ "error": "Failed to save films" })),
            _ => Some(json!({ "error": self.to_string() })),
        }
    }
}
