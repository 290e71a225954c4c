//! Special commands parser for the interactive chat
//!
//! Lines starting with `/` are session commands rather than messages for the
//! backend. They cover the sidebar actions (new chat, list and select
//! sessions) plus help, a backend health check and exit.
//!
//! Command names are case-insensitive; arguments keep their case.

use thiserror::Error;

/// Errors that can occur when parsing special commands
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Unknown command was entered
    #[error("Unknown command: {0}\n\nType '/help' to see available commands")]
    UnknownCommand(String),

    /// Command was given an unsupported argument
    #[error("Unsupported argument for {command}: {arg}\n\nType '/help' to see valid usage")]
    UnsupportedArgument { command: String, arg: String },

    /// Command requires an argument but none was provided
    #[error("Command {command} requires an argument\n\nUsage: {usage}")]
    MissingArgument { command: String, usage: String },
}

/// How `/select` names a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionSelector {
    /// One-based row number from `/sessions`
    Index(usize),
    /// Full session id
    Id(String),
}

/// Special commands that can be executed during interactive chat
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecialCommand {
    /// Start a new, empty session and make it current
    NewChat,

    /// Show the session list
    ListSessions,

    /// Make another session current
    SelectSession(SessionSelector),

    /// Ask the backend whether it is up
    Health,

    /// Display help information
    Help,

    /// Exit the interactive session
    Exit,

    /// Not a special command
    ///
    /// The input should be sent as a chat message.
    None,
}

/// Parse a user input string into a special command
///
/// # Arguments
///
/// * `input` - The user input string to parse
///
/// # Returns
///
/// Returns Ok(SpecialCommand) for valid commands or SpecialCommand::None for
/// regular messages.
///
/// # Errors
///
/// Returns CommandError::UnknownCommand if input starts with "/" but is not a valid command.
/// Returns CommandError::UnsupportedArgument if a command receives an invalid argument.
/// Returns CommandError::MissingArgument if `/select` is given no argument.
///
/// # Examples
///
/// ```
/// use chatdesk::commands::special_commands::{
///     parse_special_command, SessionSelector, SpecialCommand,
/// };
///
/// assert_eq!(parse_special_command("/new"), Ok(SpecialCommand::NewChat));
/// assert_eq!(
///     parse_special_command("/select 2"),
///     Ok(SpecialCommand::SelectSession(SessionSelector::Index(2)))
/// );
/// assert_eq!(parse_special_command("my mouse is broken"), Ok(SpecialCommand::None));
/// ```
pub fn parse_special_command(input: &str) -> Result<SpecialCommand, CommandError> {
    let trimmed = input.trim();
    let lower = trimmed.to_lowercase();

    // If input doesn't start with "/", it's not a command (except exit/quit)
    if !trimmed.starts_with('/') && lower != "exit" && lower != "quit" {
        return Ok(SpecialCommand::None);
    }

    let (name, arg) = match trimmed.split_once(char::is_whitespace) {
        Some((name, rest)) => (name.to_lowercase(), rest.trim()),
        None => (lower.clone(), ""),
    };

    match name.as_str() {
        "/new" | "/clear" => no_argument("/new", arg, SpecialCommand::NewChat),
        "/sessions" | "/list" => no_argument("/sessions", arg, SpecialCommand::ListSessions),
        "/select" => parse_selector(arg).map(SpecialCommand::SelectSession),
        "/health" => no_argument("/health", arg, SpecialCommand::Health),
        "/help" | "/?" => Ok(SpecialCommand::Help),
        "/exit" | "/quit" | "exit" | "quit" => Ok(SpecialCommand::Exit),
        _ => Err(CommandError::UnknownCommand(trimmed.to_string())),
    }
}

fn no_argument(
    command: &str,
    arg: &str,
    parsed: SpecialCommand,
) -> Result<SpecialCommand, CommandError> {
    if arg.is_empty() {
        Ok(parsed)
    } else {
        Err(CommandError::UnsupportedArgument {
            command: command.to_string(),
            arg: arg.to_string(),
        })
    }
}

fn parse_selector(arg: &str) -> Result<SessionSelector, CommandError> {
    if arg.is_empty() {
        return Err(CommandError::MissingArgument {
            command: "/select".to_string(),
            usage: "/select <number|session-id>".to_string(),
        });
    }

    match arg.parse::<usize>() {
        Ok(0) => Err(CommandError::UnsupportedArgument {
            command: "/select".to_string(),
            arg: arg.to_string(),
        }),
        Ok(index) => Ok(SessionSelector::Index(index)),
        Err(_) => Ok(SessionSelector::Id(arg.to_string())),
    }
}

/// Display help text for special commands
///
/// # Examples
///
/// ```
/// use chatdesk::commands::special_commands::print_help;
///
/// print_help();
/// ```
pub fn print_help() {
    println!(
        r#"
Special Commands for Interactive Chat
=====================================

SESSIONS:
  /new              - Start a new chat
  /clear            - Same as /new
  /sessions         - Show recent chats, newest first
  /list             - Same as /sessions
  /select <n>       - Switch to chat number <n> from /sessions
  /select <id>      - Switch to the chat with session id <id>

BACKEND:
  /health           - Check that the chat backend is reachable

SESSION CONTROL:
  /help             - Show this help message
  /?                - Same as /help
  exit              - Exit interactive mode
  quit              - Same as exit

NOTES:
  - Command names are case-insensitive
  - Regular text (not starting with /) is sent to the backend
  - The first message of a chat becomes its title
"#
    );
}
