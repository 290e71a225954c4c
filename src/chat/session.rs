//! Chat sessions and session identity
//!
//! A session is one conversation thread: a stable id, a sidebar title and the
//! ordered list of messages exchanged in it.

use crate::chat::message::Message;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Title given to a session until its first message arrives
pub const DEFAULT_SESSION_TITLE: &str = "New Chat";

/// Number of characters of the first message kept in a derived title
pub const DEFAULT_TITLE_MAX_CHARS: usize = 30;

/// Suffix appended to a derived title when the first message was cut
pub const TITLE_ELLIPSIS: &str = "...";

/// Identifier of a chat session
///
/// Freshly generated ids are UUID v4 strings. The same id is sent to the
/// backend as `session_id`, which keys the backend's own conversation memory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Generates a new, never-before-used session id
    ///
    /// # Examples
    ///
    /// ```
    /// use chatdesk::chat::SessionId;
    ///
    /// let a = SessionId::generate();
    /// let b = SessionId::generate();
    /// assert_ne!(a, b);
    /// assert!(!a.as_str().is_empty());
    /// ```
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for SessionId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for SessionId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Derives a sidebar title from the first message of a session
///
/// Keeps the first `max_chars` characters and appends `...` only when the
/// message was longer than that. Counting is done in `char`s so multi-byte
/// text is never split inside a code point.
///
/// # Examples
///
/// ```
/// use chatdesk::chat::session::derive_title;
///
/// assert_eq!(derive_title("Hi", 30), "Hi");
/// assert_eq!(derive_title("abcdef", 3), "abc...");
/// ```
pub fn derive_title(content: &str, max_chars: usize) -> String {
    let mut chars = content.chars();
    let head: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() {
        format!("{}{}", head, TITLE_ELLIPSIS)
    } else {
        head
    }
}

/// One conversation thread
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    id: SessionId,
    title: String,
    created_at: DateTime<Local>,
    messages: Vec<Message>,
}

impl Session {
    /// Creates an empty session with a fresh id and the default title
    pub fn new() -> Self {
        Self {
            id: SessionId::generate(),
            title: DEFAULT_SESSION_TITLE.to_string(),
            created_at: Local::now(),
            messages: Vec::new(),
        }
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn created_at(&self) -> DateTime<Local> {
        self.created_at
    }

    /// Creation time as shown in the sidebar (`HH:MM`, local time)
    pub fn display_timestamp(&self) -> String {
        self.created_at.format("%H:%M").to_string()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Appends a user message
    ///
    /// When this is the first message of the session the title is rewritten
    /// from its content; later messages never touch the title.
    pub fn push_user_message(&mut self, content: impl Into<String>, title_max_chars: usize) {
        let content = content.into();
        if self.messages.is_empty() {
            self.title = derive_title(&content, title_max_chars);
        }
        self.messages.push(Message::user(content));
    }

    /// Appends an assistant message
    pub fn push_assistant_message(&mut self, content: impl Into<String>) {
        self.messages.push(Message::assistant(content));
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
