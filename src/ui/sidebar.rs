//! Session list rendering

use crate::chat::{ChatState, DEFAULT_SESSION_TITLE};
use colored::Colorize;
use prettytable::{format, row, Table};

/// Marker placed in front of the current session's row
pub const CURRENT_MARKER: &str = "▶";

/// Renders the "New Chat" action followed by the "Recent Chats" list
///
/// Rows follow store order (newest first) and are numbered from 1; that
/// number is what `/select` accepts.
///
/// # Examples
///
/// ```
/// use chatdesk::chat::ChatState;
/// use chatdesk::ui::render_sidebar;
///
/// let mut state = ChatState::new(30);
/// state.create_new_session();
/// let sidebar = render_sidebar(&state);
/// assert!(sidebar.contains("Recent Chats"));
/// ```
pub fn render_sidebar(state: &ChatState) -> String {
    let mut out = format!(
        "\n{} {}\n\n{}\n",
        "+".green(),
        format!("{} (/new)", DEFAULT_SESSION_TITLE).bold(),
        "Recent Chats".bold()
    );

    if state.sessions().is_empty() {
        out.push_str(&format!("{}\n", "  No chats yet.".yellow()));
        return out;
    }

    let current = state.current_session_id();
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_CLEAN);

    for (index, session) in state.sessions().iter().enumerate() {
        let marker = if Some(session.id()) == current {
            CURRENT_MARKER
        } else {
            " "
        };
        let busy = if state.is_session_loading(session.id()) {
            "..."
        } else {
            ""
        };
        table.add_row(row![
            marker,
            r->(index + 1),
            session.title(),
            session.display_timestamp(),
            busy
        ]);
    }

    out.push_str(&table.to_string());
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(sidebar: &str) -> Vec<&str> {
        sidebar
            .lines()
            .skip_while(|line| !line.contains("Recent Chats"))
            .skip(1)
            .filter(|line| !line.trim().is_empty())
            .collect()
    }

    fn row_of<'a>(sidebar: &'a str, title: &str) -> &'a str {
        rows(sidebar)
            .into_iter()
            .find(|line| line.contains(title))
            .unwrap_or_else(|| panic!("no row for {title} in:\n{sidebar}"))
    }

    #[test]
    fn test_empty_sidebar() {
        let state = ChatState::new(30);
        let sidebar = render_sidebar(&state);
        assert!(sidebar.contains("New Chat"));
        assert!(sidebar.contains("Recent Chats"));
        assert!(sidebar.contains("No chats yet."));
    }

    #[test]
    fn test_rows_in_store_order_with_current_marker() {
        let mut state = ChatState::new(30);
        let pending = state.begin_send("Outlook crashes").unwrap();
        state.complete_send(pending, Ok("Try safe mode.".to_string()));
        state.create_new_session();

        let sidebar = render_sidebar(&state);
        let rows = rows(&sidebar);
        assert_eq!(rows.len(), 2);
        assert!(rows[0].contains(DEFAULT_SESSION_TITLE));
        assert!(rows[1].contains("Outlook crashes"));

        let newest: Vec<&str> = rows[0].split_whitespace().collect();
        assert_eq!(newest[0], CURRENT_MARKER);
        assert_eq!(newest[1], "1");
        let older: Vec<&str> = rows[1].split_whitespace().collect();
        assert_eq!(older[0], "2");
    }

    #[test]
    fn test_row_shows_timestamp() {
        let mut state = ChatState::new(30);
        let id = state.create_new_session();
        let stamp = state.sessions().get(&id).unwrap().display_timestamp();

        let sidebar = render_sidebar(&state);
        assert!(row_of(&sidebar, DEFAULT_SESSION_TITLE).contains(&stamp));
    }

    #[test]
    fn test_row_marks_busy_session() {
        let mut state = ChatState::new(30);
        let pending = state.begin_send("Printer jam").unwrap();

        let sidebar = render_sidebar(&state);
        assert!(row_of(&sidebar, "Printer jam").contains("..."));

        state.complete_send(pending, Ok("Open tray 2.".to_string()));
        let sidebar = render_sidebar(&state);
        assert!(!row_of(&sidebar, "Printer jam").contains("..."));
    }
}
