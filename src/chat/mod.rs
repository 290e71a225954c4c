//! Session and message state for the chat client
//!
//! - `message`: message and role types
//! - `session`: session identity, titles and per-session history
//! - `store`: newest-first in-memory session list
//! - `state`: owned state (sessions, current selection, in-flight sends)
//! - `controller`: user intents and the exchange with the transport

pub mod controller;
pub mod message;
pub mod session;
pub mod state;
pub mod store;

pub use controller::ChatController;
pub use message::{Message, Role};
pub use session::{Session, SessionId, DEFAULT_SESSION_TITLE, DEFAULT_TITLE_MAX_CHARS};
pub use state::{ChatState, PendingSend, SendOutcome, FALLBACK_REPLY};
pub use store::SessionStore;
