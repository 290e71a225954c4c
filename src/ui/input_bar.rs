//! Input policy for the message prompt

use colored::Colorize;

/// Hint shown under the header
pub const PLACEHOLDER: &str = "Enter your message...";

/// Decides which typed lines become send intents
#[derive(Debug, Default, Clone, Copy)]
pub struct InputBar;

impl InputBar {
    pub fn new() -> Self {
        Self
    }

    /// Prompt string; dimmed while input is disabled
    pub fn prompt(&self, is_loading: bool) -> String {
        if is_loading {
            format!("{} ", "…".dimmed())
        } else {
            format!("{} ", ">".green().bold())
        }
    }

    /// Returns the text to send, if any
    ///
    /// Input is trimmed. Whitespace-only input is dropped, and nothing is
    /// submitted while a send is outstanding.
    ///
    /// # Examples
    ///
    /// ```
    /// use chatdesk::ui::InputBar;
    ///
    /// let bar = InputBar::new();
    /// assert_eq!(bar.submit("  reset my password \n", false), Some("reset my password".to_string()));
    /// assert_eq!(bar.submit("   ", false), None);
    /// assert_eq!(bar.submit("hello", true), None);
    /// ```
    pub fn submit(&self, line: &str, is_loading: bool) -> Option<String> {
        if is_loading {
            return None;
        }
        let trimmed = line.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }
}
