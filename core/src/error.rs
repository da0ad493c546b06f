//! Error types for the Reply.io client.
//!
//! # Design
//! `ApiError` is what the dispatcher reports: either the server answered
//! with a non-2xx status (kept with its raw body), or the request never got
//! a response. Its `Display` is the human-readable classification of that
//! failure. Resource methods wrap it in `ReplyError`, which prefixes the
//! description of the operation that failed.

use thiserror::Error;

/// Message used when a failure carries no HTTP response.
pub const UNKNOWN_ERROR: &str =
    "Status code: unknown - Unknown error occurred while making the API request.";

/// Failure of a single dispatched request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The server answered with a status outside 2xx.
    #[error("{}", classify(.status, .body))]
    Status { status: u16, body: String },

    /// The request did not produce a response (connection, DNS, TLS, ...).
    #[error("{}", UNKNOWN_ERROR)]
    Transport(String),

    /// The request payload could not be serialized to JSON.
    #[error("Request payload could not be serialized: {0}")]
    Serialization(String),
}

impl ApiError {
    /// HTTP status of the response, when there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Error returned by every resource method.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("An error occurred while {action}: {source}")]
pub struct ReplyError {
    action: String,
    #[source]
    source: ApiError,
}

impl ReplyError {
    pub fn new(action: impl Into<String>, source: ApiError) -> Self {
        Self {
            action: action.into(),
            source,
        }
    }

    /// Description of the operation that failed, e.g. `getting list of contacts`.
    pub fn action(&self) -> &str {
        &self.action
    }

    pub fn api_error(&self) -> &ApiError {
        &self.source
    }

    pub fn status(&self) -> Option<u16> {
        self.source.status()
    }
}

/// Classify a response status into one of the fixed messages.
pub fn status_message(status: u16, body: &str) -> String {
    match status {
        400 => format!(
            "Status code: {status} - Wrong input parameter: {}",
            render_body(body)
        ),
        401 => format!("Status code: {status} - User not found. Invalid API key."),
        403 => format!(
            "Status code: {status} - Access denied. The API key doesn't have access to the requested resource."
        ),
        404 => format!(
            "Status code: {status} - The requested resource could not be found: {}",
            render_body(body)
        ),
        500 => format!("Status code: {status} - Internal Server Error. Please try again later."),
        _ => format!(
            "Status code: {status} - Unexpected error: {}",
            render_body(body)
        ),
    }
}

fn classify(status: &u16, body: &str) -> String {
    status_message(*status, body)
}

/// Render a response body as compact JSON. Bodies that are not JSON are
/// rendered as a JSON string literal.
fn render_body(body: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(value) => value.to_string(),
        Err(_) => serde_json::Value::String(body.to_string()).to_string(),
    }
}
