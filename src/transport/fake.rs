//! In-process fake transport for tests
//!
//! [`FakeTransport`] replays a script of replies and failures instead of
//! talking to a backend, and records every request it receives so tests can
//! assert on what the controller sent.
//!
//! # Example
//!
//! ```
//! use chatdesk::chat::SessionId;
//! use chatdesk::transport::{ChatTransport, FakeTransport};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let transport = FakeTransport::new();
//! transport.push_reply("Have you tried turning it off and on again?").await;
//! transport.push_failure("connection refused").await;
//!
//! let id = SessionId::from("s1");
//! assert!(transport.post_chat("help", &id).await.is_ok());
//! assert!(transport.post_chat("help", &id).await.is_err());
//! assert_eq!(transport.requests().await.len(), 2);
//! # }
//! ```

use std::collections::VecDeque;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::chat::SessionId;
use crate::error::{ChatdeskError, Result};
use crate::transport::ChatTransport;

/// A request observed by [`FakeTransport`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub message: String,
    pub session_id: SessionId,
}

/// Scripted, in-memory [`ChatTransport`]
///
/// Each call to [`ChatTransport::post_chat`] pops the next scripted entry.
/// An exhausted script answers with a transport error, the same way an
/// unreachable backend would.
#[derive(Debug, Default)]
pub struct FakeTransport {
    script: Mutex<VecDeque<std::result::Result<String, String>>>,
    requests: Mutex<Vec<RecordedRequest>>,
    health_status: Option<String>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fake whose health check reports `status`
    pub fn with_health(status: impl Into<String>) -> Self {
        Self {
            health_status: Some(status.into()),
            ..Self::default()
        }
    }

    /// Queue a successful reply
    pub async fn push_reply(&self, reply: impl Into<String>) {
        self.script.lock().await.push_back(Ok(reply.into()));
    }

    /// Queue a failed exchange
    pub async fn push_failure(&self, reason: impl Into<String>) {
        self.script.lock().await.push_back(Err(reason.into()));
    }

    /// Requests received so far, oldest first
    pub async fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().await.clone()
    }
}

#[async_trait]
impl ChatTransport for FakeTransport {
    async fn post_chat(&self, message: &str, session_id: &SessionId) -> Result<String> {
        self.requests.lock().await.push(RecordedRequest {
            message: message.to_string(),
            session_id: session_id.clone(),
        });

        match self.script.lock().await.pop_front() {
            Some(Ok(reply)) => Ok(reply),
            Some(Err(reason)) => Err(ChatdeskError::Transport(reason).into()),
            None => Err(ChatdeskError::Transport("FakeTransport: script exhausted".to_string()).into()),
        }
    }

    async fn health(&self) -> Result<String> {
        self.health_status
            .clone()
            .ok_or_else(|| ChatdeskError::Transport("FakeTransport: backend down".to_string()).into())
    }
}
