//! Chatdesk - terminal client for an IT support chat backend
//!
//! This library keeps an in-memory list of chat sessions, sends each user
//! message to the backend with its session id, and renders the conversation
//! in the terminal.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//!
//! - `chat`: Sessions, messages, the owned chat state and the controller
//! - `transport`: Backend abstraction and its HTTP and scripted implementations
//! - `ui`: Terminal rendering of the chat state
//! - `commands`: CLI command handlers, including the interactive REPL
//! - `config`: Configuration management and validation
//! - `error`: Error types and result aliases
//! - `cli`: Command-line interface definition
//!
//! # Example
//!
//! ```no_run
//! use chatdesk::{ChatController, Config};
//! use chatdesk::transport::create_transport;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load("config.yaml", &Default::default())?;
//!     config.validate()?;
//!
//!     let transport = create_transport(&config.backend)?;
//!     let mut controller = ChatController::new(transport, config.chat.title_max_chars);
//!     let outcome = controller.send_message("My VPN keeps disconnecting").await?;
//!     println!("{}", outcome.assistant_text());
//!     Ok(())
//! }
//! ```

pub mod chat;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod transport;
pub mod ui;

// Re-export commonly used types
pub use chat::{ChatController, ChatState, Message, Role, SendOutcome, Session, SessionId};
pub use config::Config;
pub use error::{ChatdeskError, Result};
pub use transport::{ChatTransport, FakeTransport, HttpTransport};
