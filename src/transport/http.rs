//! HTTP transport for the chat backend
//!
//! Talks JSON to the backend's two routes:
//!
//! - `POST {base_url}/chat` with `{"message", "session_id"}`, answered by
//!   `{"reply"}`.
//! - `GET {base_url}/` answered by `{"status"}`.

use crate::chat::SessionId;
use crate::config::BackendConfig;
use crate::error::{ChatdeskError, Result};
use crate::transport::ChatTransport;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Request body for `POST /chat`
#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
    session_id: &'a str,
}

/// Response body for `POST /chat`
#[derive(Debug, Deserialize)]
struct ChatResponse {
    reply: String,
}

/// Response body for `GET /`
#[derive(Debug, Deserialize)]
struct HealthResponse {
    status: String,
}

/// reqwest-backed [`ChatTransport`]
///
/// # Examples
///
/// ```no_run
/// use chatdesk::chat::SessionId;
/// use chatdesk::config::BackendConfig;
/// use chatdesk::transport::{ChatTransport, HttpTransport};
///
/// # async fn example() -> chatdesk::error::Result<()> {
/// let transport = HttpTransport::new(BackendConfig::default())?;
/// let reply = transport
///     .post_chat("My laptop will not boot", &SessionId::generate())
///     .await?;
/// println!("{}", reply);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    /// Create a new HTTP transport
    ///
    /// # Errors
    ///
    /// Returns error if the base URL does not parse or the HTTP client cannot
    /// be built
    pub fn new(config: BackendConfig) -> Result<Self> {
        let parsed = url::Url::parse(&config.base_url).map_err(|e| {
            ChatdeskError::Config(format!("Invalid backend URL '{}': {}", config.base_url, e))
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ChatdeskError::Config(format!(
                "Backend URL must use http or https: {}",
                config.base_url
            ))
            .into());
        }

        let mut builder = Client::builder().user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));
        if let Some(seconds) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(seconds));
        }
        let client = builder
            .build()
            .map_err(|e| ChatdeskError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        let base_url = config.base_url.trim_end_matches('/').to_string();
        tracing::info!("Initialized HTTP transport: base_url={}", base_url);

        Ok(Self { client, base_url })
    }

    /// Base URL requests are sent to, without a trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn chat_url(&self) -> String {
        format!("{}/chat", self.base_url)
    }

    fn health_url(&self) -> String {
        format!("{}/", self.base_url)
    }

    /// Reads a response body, failing on non-success status
    async fn read_success_body(response: reqwest::Response) -> Result<String> {
        let status = response.status();
        let body = response.text().await.map_err(|e| {
            ChatdeskError::Transport(format!("Failed to read backend response: {}", e))
        })?;

        if !status.is_success() {
            tracing::warn!("Backend returned error {}: {}", status, body);
            return Err(ChatdeskError::BackendStatus {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        Ok(body)
    }
}

#[async_trait]
impl ChatTransport for HttpTransport {
    async fn post_chat(&self, message: &str, session_id: &SessionId) -> Result<String> {
        let url = self.chat_url();
        tracing::debug!(session_id = %session_id, "POST {}", url);

        let response = self
            .client
            .post(&url)
            .json(&ChatRequest {
                message,
                session_id: session_id.as_str(),
            })
            .send()
            .await
            .map_err(|e| {
                ChatdeskError::Transport(format!("Failed to reach chat backend: {}", e))
            })?;

        let body = Self::read_success_body(response).await?;
        let parsed: ChatResponse = serde_json::from_str(&body)
            .map_err(|e| ChatdeskError::MalformedResponse(format!("{}: {}", e, body)))?;

        tracing::debug!(session_id = %session_id, "Received reply ({} chars)", parsed.reply.chars().count());
        Ok(parsed.reply)
    }

    async fn health(&self) -> Result<String> {
        let url = self.health_url();
        tracing::debug!("GET {}", url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            ChatdeskError::Transport(format!("Failed to reach chat backend: {}", e))
        })?;

        let body = Self::read_success_body(response).await?;
        let parsed: HealthResponse = serde_json::from_str(&body)
            .map_err(|e| ChatdeskError::MalformedResponse(format!("{}: {}", e, body)))?;

        Ok(parsed.status)
    }
}
