//! Terminal presentation of the chat state
//!
//! Everything here renders from a read-only [`ChatState`](crate::chat::ChatState)
//! into `String`s; the REPL in [`crate::commands::chat`] decides when to print
//! them. No business logic lives in this module.
//!
//! - `sidebar`: "New Chat" action and the "Recent Chats" list
//! - `message_window`: incremental printing of the current conversation
//! - `input_bar`: what counts as a submittable line

pub mod input_bar;
pub mod message_window;
pub mod sidebar;

pub use input_bar::InputBar;
pub use message_window::MessageWindow;
pub use sidebar::render_sidebar;

use crate::chat::{Message, Role};
use colored::Colorize;

/// Name shown for assistant messages and on the welcome screen
pub const ASSISTANT_NAME: &str = "Q";

const BANNER_WIDTH: usize = 62;

/// Application header with the new-chat hint
pub fn render_header() -> String {
    let rule = "═".repeat(BANNER_WIDTH);
    let title = format!(
        "{:^width$}",
        "Chatdesk - IT Support Chat",
        width = BANNER_WIDTH
    );
    format!(
        "\n╔{rule}╗\n║{title}║\n╚{rule}╝\n\n{} start a new chat, {} list commands, {} quit\n",
        "/new".cyan(),
        "/help".cyan(),
        "exit".cyan(),
    )
}

/// Greeting shown for an empty conversation
pub fn render_welcome() -> String {
    format!(
        "\n  {}\n  {}\n",
        format!("Hey, 👋 I'm {},", ASSISTANT_NAME).bold(),
        "How can I help you?".dimmed()
    )
}

/// Indicator printed while a send is outstanding
pub fn render_loading() -> String {
    format!("{} {}", format!("{}:", ASSISTANT_NAME).bold().cyan(), "...".dimmed())
}

/// One chat bubble
pub fn render_message(message: &Message) -> String {
    let speaker = match message.role() {
        Role::User => "You:".bold().green(),
        Role::Assistant => format!("{}:", ASSISTANT_NAME).bold().cyan(),
    };
    format!("{} {}", speaker, message.content())
}
