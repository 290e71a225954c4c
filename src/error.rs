//! Error types for Chatdesk
//!
//! This module defines the error types used throughout the client,
//! using `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Main error type for Chatdesk operations
///
/// Transport failures (`Transport`, `BackendStatus`, `MalformedResponse`)
/// never reach the presentation layer during a chat exchange: the
/// controller turns them into a fallback assistant message. The remaining
/// variants are returned to callers directly.
#[derive(Error, Debug)]
pub enum ChatdeskError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Transport-level errors (client construction, connection failures)
    #[error("Transport error: {0}")]
    Transport(String),

    /// Backend answered with a non-success HTTP status
    #[error("Backend returned status {status}: {body}")]
    BackendStatus {
        /// HTTP status code returned by the backend
        status: u16,
        /// Raw response body, possibly empty
        body: String,
    },

    /// Backend answered 2xx but the body did not have the expected shape
    #[error("Malformed backend response: {0}")]
    MalformedResponse(String),

    /// A session id that is not present in the session list
    #[error("Unknown session: {0}")]
    UnknownSession(String),

    /// A send is already outstanding for the target session
    #[error("A message is already being sent in session {0}")]
    SendInFlight(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type alias for Chatdesk operations
///
/// Uses `anyhow::Error` so callers can attach context while still being able
/// to `downcast_ref::<ChatdeskError>()` when they need the specific kind.
pub type Result<T> = anyhow::Result<T>;
