//! Owned chat state
//!
//! `ChatState` holds everything the client knows about its conversations:
//! the session list, which session is current, and which sessions have a
//! send outstanding. It has no I/O of its own; the controller drives the
//! transport and feeds results back through [`ChatState::complete_send`].
//! The presentation layer only ever receives `&ChatState`.

use crate::chat::session::{Session, SessionId};
use crate::chat::store::SessionStore;
use crate::error::{ChatdeskError, Result};
use std::collections::HashSet;

/// Assistant message appended when the backend could not produce a reply
pub const FALLBACK_REPLY: &str = "Sorry, I'm having trouble connecting to the server. Please make sure the backend is running and try again.";

/// A send whose user message is appended but whose reply has not arrived
///
/// Returned by [`ChatState::begin_send`] and consumed by
/// [`ChatState::complete_send`], so every initiated send is resolved at most
/// once.
#[derive(Debug)]
#[must_use = "a pending send must be completed or the session stays loading"]
pub struct PendingSend {
    session_id: SessionId,
    message: String,
}

impl PendingSend {
    /// Session the reply will be appended to
    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    /// Text to send to the backend
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// How a send was resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    /// The backend replied; the reply was appended verbatim
    Delivered { session_id: SessionId, reply: String },
    /// The exchange failed; [`FALLBACK_REPLY`] was appended instead
    Fallback { session_id: SessionId, reason: String },
}

impl SendOutcome {
    pub fn session_id(&self) -> &SessionId {
        match self {
            Self::Delivered { session_id, .. } | Self::Fallback { session_id, .. } => session_id,
        }
    }

    /// Text of the assistant message that was appended
    pub fn assistant_text(&self) -> &str {
        match self {
            Self::Delivered { reply, .. } => reply,
            Self::Fallback { .. } => FALLBACK_REPLY,
        }
    }

    pub fn is_delivered(&self) -> bool {
        matches!(self, Self::Delivered { .. })
    }
}

/// Session list, current selection and in-flight sends
#[derive(Debug, Clone)]
pub struct ChatState {
    store: SessionStore,
    current: Option<SessionId>,
    in_flight: HashSet<SessionId>,
    title_max_chars: usize,
}

impl ChatState {
    /// Creates an empty state
    ///
    /// # Arguments
    ///
    /// * `title_max_chars` - Characters of the first message kept in a session title
    pub fn new(title_max_chars: usize) -> Self {
        Self {
            store: SessionStore::new(),
            current: None,
            in_flight: HashSet::new(),
            title_max_chars,
        }
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.store
    }

    pub fn current_session_id(&self) -> Option<&SessionId> {
        self.current.as_ref()
    }

    /// The session the message window shows, if any
    pub fn current_session(&self) -> Option<&Session> {
        self.current.as_ref().and_then(|id| self.store.get(id))
    }

    /// True while any send is outstanding
    pub fn is_loading(&self) -> bool {
        !self.in_flight.is_empty()
    }

    /// True while a send to `id` is outstanding
    pub fn is_session_loading(&self, id: &SessionId) -> bool {
        self.in_flight.contains(id)
    }

    /// Creates an empty session, puts it first in the list and makes it current
    pub fn create_new_session(&mut self) -> SessionId {
        let id = self.store.prepend(Session::new());
        tracing::debug!(session_id = %id, "Created new session");
        self.current = Some(id.clone());
        id
    }

    /// Makes `id` the current session
    ///
    /// # Errors
    ///
    /// Returns [`ChatdeskError::UnknownSession`] when no session has this id.
    /// The current selection is cleared in that case, so no other session is
    /// left looking current.
    pub fn select_session(&mut self, id: &SessionId) -> Result<()> {
        if self.store.contains(id) {
            self.current = Some(id.clone());
            Ok(())
        } else {
            tracing::warn!(session_id = %id, "Selected unknown session; clearing selection");
            self.current = None;
            Err(ChatdeskError::UnknownSession(id.to_string()).into())
        }
    }

    /// Starts a send: resolves the target session and appends the user message
    ///
    /// Creates a session first when none is current. The first message of a
    /// session also sets its title.
    ///
    /// # Errors
    ///
    /// Returns [`ChatdeskError::SendInFlight`] if the target session already
    /// has a send outstanding. Nothing is appended in that case.
    pub fn begin_send(&mut self, content: impl Into<String>) -> Result<PendingSend> {
        let content = content.into();
        let session_id = match self.current_session().map(|s| s.id().clone()) {
            Some(id) => id,
            None => self.create_new_session(),
        };

        if self.in_flight.contains(&session_id) {
            return Err(ChatdeskError::SendInFlight(session_id.to_string()).into());
        }

        let title_max_chars = self.title_max_chars;
        let session = self
            .store
            .get_mut(&session_id)
            .ok_or_else(|| ChatdeskError::UnknownSession(session_id.to_string()))?;
        session.push_user_message(content.clone(), title_max_chars);

        self.in_flight.insert(session_id.clone());
        tracing::debug!(session_id = %session_id, "Send started");

        Ok(PendingSend {
            session_id,
            message: content,
        })
    }

    /// Finishes a send with the transport's result
    ///
    /// Appends the reply, or [`FALLBACK_REPLY`] on any failure, to the
    /// session the send started in, whether or not it is still current.
    pub fn complete_send(&mut self, pending: PendingSend, outcome: Result<String>) -> SendOutcome {
        let PendingSend { session_id, .. } = pending;
        self.in_flight.remove(&session_id);

        let result = match outcome {
            Ok(reply) => SendOutcome::Delivered {
                session_id: session_id.clone(),
                reply,
            },
            Err(err) => {
                let reason = format!("{:#}", err);
                tracing::error!(session_id = %session_id, error = %reason, "Chat request failed");
                SendOutcome::Fallback {
                    session_id: session_id.clone(),
                    reason,
                }
            }
        };

        match self.store.get_mut(&session_id) {
            Some(session) => session.push_assistant_message(result.assistant_text()),
            None => tracing::warn!(session_id = %session_id, "Reply for a session that no longer exists"),
        }

        result
    }
}
