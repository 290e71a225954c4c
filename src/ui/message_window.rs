//! Incremental conversation output
//!
//! A terminal cannot scroll a widget, so "keep the newest message visible"
//! becomes "print only what the user has not seen yet". [`MessageWindow`]
//! remembers which session it last drew and how many of its messages are on
//! screen.

use crate::chat::{ChatState, SessionId};
use crate::ui::{render_loading, render_message, render_welcome};
use colored::Colorize;

/// Tracks what part of the current conversation is already printed
#[derive(Debug, Default)]
pub struct MessageWindow {
    drawn: bool,
    session: Option<SessionId>,
    title: Option<String>,
    printed: usize,
    loading_shown: bool,
}

impl MessageWindow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the text that brings the screen in line with `state`
    ///
    /// The first call and any call after the current session changed produce
    /// a full redraw. Otherwise only messages appended since the previous call
    /// are returned, preceded by the title line if the session was renamed and
    /// followed by the loading indicator when a send has just started.
    /// An empty string means nothing changed.
    ///
    /// # Examples
    ///
    /// ```
    /// use chatdesk::chat::ChatState;
    /// use chatdesk::ui::MessageWindow;
    ///
    /// let mut state = ChatState::new(30);
    /// let mut window = MessageWindow::new();
    /// assert!(window.update(&state).contains("How can I help you?"));
    /// assert!(window.update(&state).is_empty());
    ///
    /// let pending = state.begin_send("Wi-Fi is down").unwrap();
    /// assert!(window.update(&state).contains("Wi-Fi is down"));
    /// state.complete_send(pending, Ok("Reconnect to CORP-5G.".to_string()));
    /// assert!(window.update(&state).contains("Reconnect to CORP-5G."));
    /// ```
    pub fn update(&mut self, state: &ChatState) -> String {
        let current = state.current_session_id();
        if !self.drawn || self.session.as_ref() != current {
            return self.redraw(state);
        }

        let session = state.current_session();
        let messages = session.map(|s| s.messages()).unwrap_or_default();

        let mut lines = Vec::new();
        let title = session.map(|s| s.title().to_string());
        if title != self.title {
            if let Some(title) = &title {
                lines.push(title_line(title));
            }
            self.title = title;
        }
        for message in messages.iter().skip(self.printed) {
            lines.push(render_message(message));
        }
        self.printed = messages.len();

        let loading = state.is_loading();
        if loading && !self.loading_shown {
            lines.push(render_loading());
        }
        self.loading_shown = loading;

        join_lines(lines)
    }

    fn redraw(&mut self, state: &ChatState) -> String {
        let session = state.current_session();
        let loading = state.is_loading();
        let messages = session.map(|s| s.messages()).unwrap_or_default();

        let mut lines = Vec::new();
        if let Some(session) = session {
            lines.push(title_line(session.title()));
        }
        if messages.is_empty() && !loading {
            lines.push(render_welcome());
        }
        lines.extend(messages.iter().map(render_message));
        if loading {
            lines.push(render_loading());
        }

        self.drawn = true;
        self.session = session.map(|s| s.id().clone());
        self.title = session.map(|s| s.title().to_string());
        self.printed = messages.len();
        self.loading_shown = loading;

        join_lines(lines)
    }
}

fn title_line(title: &str) -> String {
    format!("\n── {} ──", title.bold())
}

fn join_lines(lines: Vec<String>) -> String {
    if lines.is_empty() {
        String::new()
    } else {
        let mut out = lines.join("\n");
        out.push('\n');
        out
    }
}
