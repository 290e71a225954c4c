//! Chat controller
//!
//! Owns the [`ChatState`] and the [`ChatTransport`] and exposes the three
//! user intents the presentation layer forwards: start a new chat, select a
//! session, send a message.

use crate::chat::session::SessionId;
use crate::chat::state::{ChatState, PendingSend, SendOutcome};
use crate::error::Result;
use crate::transport::ChatTransport;

/// Session manager that talks to the chat backend
///
/// # Examples
///
/// ```
/// use chatdesk::chat::{ChatController, FALLBACK_REPLY};
/// use chatdesk::transport::FakeTransport;
///
/// # #[tokio::main]
/// # async fn main() -> chatdesk::error::Result<()> {
/// let transport = FakeTransport::new();
/// transport.push_reply("Restart the print spooler.").await;
///
/// let mut controller = ChatController::new(Box::new(transport), 30);
/// let outcome = controller.send_message("Printer is offline").await?;
/// assert_eq!(outcome.assistant_text(), "Restart the print spooler.");
///
/// // The script is empty now, so the next exchange falls back.
/// let outcome = controller.send_message("Still offline").await?;
/// assert_eq!(outcome.assistant_text(), FALLBACK_REPLY);
/// # Ok(())
/// # }
/// ```
pub struct ChatController {
    state: ChatState,
    transport: Box<dyn ChatTransport>,
}

impl ChatController {
    /// Creates a controller with no sessions
    ///
    /// # Arguments
    ///
    /// * `transport` - Backend connection used for every send
    /// * `title_max_chars` - Characters of the first message kept in a session title
    pub fn new(transport: Box<dyn ChatTransport>, title_max_chars: usize) -> Self {
        Self {
            state: ChatState::new(title_max_chars),
            transport,
        }
    }

    /// Read-only view handed to the presentation layer
    pub fn state(&self) -> &ChatState {
        &self.state
    }

    pub fn transport(&self) -> &dyn ChatTransport {
        self.transport.as_ref()
    }

    /// New-chat intent
    pub fn create_new_session(&mut self) -> SessionId {
        let id = self.state.create_new_session();
        tracing::info!(session_id = %id, "Started new chat");
        id
    }

    /// Select-session intent
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::ChatdeskError::UnknownSession`] for an id not in
    /// the session list; the current selection is cleared.
    pub fn select_session(&mut self, id: &SessionId) -> Result<()> {
        self.state.select_session(id)
    }

    /// Send intent: one full exchange with the backend
    ///
    /// Appends the user message, performs one transport request and appends
    /// the reply or the fallback message. Transport failures never surface as
    /// errors here; they become the fallback reply.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::ChatdeskError::SendInFlight`] when the target
    /// session already has a send outstanding.
    pub async fn send_message(&mut self, content: &str) -> Result<SendOutcome> {
        let pending = self.begin_send(content)?;
        let outcome = self.deliver(&pending).await;
        Ok(self.complete_send(pending, outcome))
    }

    /// First half of a send; see [`ChatState::begin_send`]
    pub fn begin_send(&mut self, content: &str) -> Result<PendingSend> {
        self.state.begin_send(content)
    }

    /// Performs the network exchange for a pending send
    ///
    /// Does not touch the state, so callers can render the loading state
    /// while this is awaited.
    pub async fn deliver(&self, pending: &PendingSend) -> Result<String> {
        self.transport
            .post_chat(pending.message(), pending.session_id())
            .await
    }

    /// Second half of a send; see [`ChatState::complete_send`]
    pub fn complete_send(&mut self, pending: PendingSend, outcome: Result<String>) -> SendOutcome {
        self.state.complete_send(pending, outcome)
    }
}

impl std::fmt::Debug for ChatController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatController")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
