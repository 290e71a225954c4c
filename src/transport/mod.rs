//! Transport to the chat backend
//!
//! This module defines the [`ChatTransport`] trait the chat controller talks
//! to. Concrete implementations live in submodules:
//!
//! - [`http::HttpTransport`] -- JSON over HTTP against the backend's `/chat`
//!   route.
//! - [`fake::FakeTransport`] -- in-process scripted transport for tests.
//!
//! One call to [`ChatTransport::post_chat`] is one request to the backend.
//! Transports never retry; failures are returned to the caller, which decides
//! how to present them.

use async_trait::async_trait;

use crate::chat::SessionId;
use crate::config::BackendConfig;
use crate::error::{ChatdeskError, Result};

pub mod fake;
pub mod http;

pub use fake::FakeTransport;
pub use http::HttpTransport;

/// Abstraction over the backend connection
///
/// The controller owns its transport as `Box<dyn ChatTransport>`.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    /// Sends one user message and returns the backend's reply text
    ///
    /// # Arguments
    ///
    /// * `message` - The user's message, verbatim
    /// * `session_id` - Session the message belongs to
    ///
    /// # Errors
    ///
    /// Returns error if the request cannot be sent, the backend answers with
    /// a non-success status, or the response body is not a reply object.
    async fn post_chat(&self, message: &str, session_id: &SessionId) -> Result<String>;

    /// Asks the backend whether it is up and returns its status text
    ///
    /// # Default Implementation
    ///
    /// Reports that health checks are not supported by this transport.
    async fn health(&self) -> Result<String> {
        Err(ChatdeskError::Transport(
            "Health checks are not supported by this transport".to_string(),
        )
        .into())
    }
}

/// Create the HTTP transport described by the backend configuration
///
/// # Errors
///
/// Returns error if the base URL is invalid or the HTTP client cannot be built
pub fn create_transport(config: &BackendConfig) -> Result<Box<dyn ChatTransport>> {
    Ok(Box::new(HttpTransport::new(config.clone())?))
}
