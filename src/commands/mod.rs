/*!
Command handlers for the CLI

This module provides command handlers invoked by the CLI entrypoint.

It exposes three top-level command modules:

- `chat`   - Interactive chat with session list
- `send`   - Send one message and print the reply
- `health` - Check that the backend answers

Handlers build a transport from the configuration and drive the
[`ChatController`](crate::chat::ChatController) or the transport directly.
*/

use crate::chat::{ChatController, ChatState, SessionId, FALLBACK_REPLY};
use crate::commands::special_commands::{
    parse_special_command, print_help, SessionSelector, SpecialCommand,
};
use crate::config::Config;
use crate::error::{ChatdeskError, Result};
use crate::transport::{create_transport, ChatTransport};
use crate::ui::{render_header, render_sidebar, InputBar, MessageWindow};
use colored::Colorize;
use std::io::Write;

// Special commands parser for the chat REPL
pub mod special_commands;

// Chat command handler
pub mod chat {
    //! Interactive chat handler.
    //!
    //! Runs a readline loop. Slash commands become session intents, everything
    //! else is sent to the backend through the controller while the message
    //! window shows the loading indicator.

    use super::*;
    use crate::ui::input_bar::PLACEHOLDER;
    use rustyline::error::ReadlineError;
    use rustyline::DefaultEditor;

    /// Start interactive chat mode
    ///
    /// # Arguments
    ///
    /// * `config` - Global configuration (consumed)
    ///
    /// # Errors
    ///
    /// Returns error if the transport cannot be created or the terminal
    /// cannot be initialised
    pub async fn run_chat(config: Config) -> Result<()> {
        tracing::info!("Starting interactive chat mode");

        let transport = create_transport(&config.backend)?;
        let mut controller = ChatController::new(transport, config.chat.title_max_chars);
        let input = InputBar::new();
        let mut window = MessageWindow::new();

        let mut rl = DefaultEditor::new()?;

        print!("{}", render_header());
        println!("{}", PLACEHOLDER.dimmed());
        print!("{}", window.update(controller.state()));

        loop {
            let prompt = input.prompt(controller.state().is_loading());
            match rl.readline(&prompt) {
                Ok(line) => {
                    match parse_special_command(&line) {
                        Ok(SpecialCommand::NewChat) => {
                            controller.create_new_session();
                            print!("{}", window.update(controller.state()));
                            continue;
                        }
                        Ok(SpecialCommand::ListSessions) => {
                            print!("{}", render_sidebar(controller.state()));
                            println!();
                            continue;
                        }
                        Ok(SpecialCommand::SelectSession(selector)) => {
                            if let Err(e) = select(&mut controller, &selector) {
                                eprintln!("{}", format!("Error: {}", e).red());
                            }
                            print!("{}", window.update(controller.state()));
                            continue;
                        }
                        Ok(SpecialCommand::Health) => {
                            report_health(controller.transport()).await;
                            continue;
                        }
                        Ok(SpecialCommand::Help) => {
                            print_help();
                            continue;
                        }
                        Ok(SpecialCommand::Exit) => break,
                        Ok(SpecialCommand::None) => {}
                        Err(e) => {
                            eprintln!("{}", e.to_string().red());
                            continue;
                        }
                    }

                    let Some(message) = input.submit(&line, controller.state().is_loading())
                    else {
                        continue;
                    };
                    rl.add_history_entry(message.as_str())?;

                    let pending = match controller.begin_send(&message) {
                        Ok(pending) => pending,
                        Err(e) => {
                            eprintln!("{}", format!("Error: {}", e).red());
                            continue;
                        }
                    };
                    print!("{}", window.update(controller.state()));
                    std::io::stdout().flush().map_err(ChatdeskError::Io)?;

                    let outcome = controller.deliver(&pending).await;
                    controller.complete_send(pending, outcome);
                    print!("{}", window.update(controller.state()));
                }
                Err(ReadlineError::Interrupted) => {
                    println!("CTRL-C");
                    break;
                }
                Err(ReadlineError::Eof) => {
                    println!("CTRL-D");
                    break;
                }
                Err(err) => {
                    tracing::error!("Readline error: {:?}", err);
                    break;
                }
            }
        }

        println!("Goodbye!");
        Ok(())
    }

    /// Applies a `/select` argument to the controller
    ///
    /// An id that is not in the list clears the current selection. A row
    /// number past the end of the list leaves the selection untouched.
    ///
    /// # Errors
    ///
    /// Returns [`ChatdeskError::UnknownSession`] when nothing matches
    pub fn select(controller: &mut ChatController, selector: &SessionSelector) -> Result<()> {
        let id = match selector {
            SessionSelector::Id(id) => SessionId::from(id.as_str()),
            SessionSelector::Index(index) => resolve_index(controller.state(), *index)?,
        };
        controller.select_session(&id)
    }

    fn resolve_index(state: &ChatState, index: usize) -> Result<SessionId> {
        index
            .checked_sub(1)
            .and_then(|i| state.sessions().get_by_index(i))
            .map(|session| session.id().clone())
            .ok_or_else(|| ChatdeskError::UnknownSession(format!("#{}", index)).into())
    }

}

// One-shot send handler
pub mod send {
    //! Non-interactive send.

    use super::*;

    /// Send one message and print the reply
    ///
    /// Prints the fallback message when the exchange fails and returns the
    /// underlying error so the process exits non-zero.
    ///
    /// # Arguments
    ///
    /// * `config` - Global configuration (consumed)
    /// * `message` - Message text
    /// * `session_id` - Session to continue; a fresh id is generated if `None` or blank
    ///
    /// # Errors
    ///
    /// Returns error if the transport cannot be created or the exchange fails
    pub async fn run_send(config: Config, message: String, session_id: Option<String>) -> Result<()> {
        let transport = create_transport(&config.backend)?;
        let reply = send_once(transport.as_ref(), &message, session_id).await?;
        println!("{}", reply);
        Ok(())
    }

    /// Performs a single exchange on `transport`
    ///
    /// # Errors
    ///
    /// Returns an error for empty input or a failed exchange; the fallback
    /// message has already been printed in the latter case
    pub async fn send_once(
        transport: &dyn ChatTransport,
        message: &str,
        session_id: Option<String>,
    ) -> Result<String> {
        let message = message.trim();
        if message.is_empty() {
            anyhow::bail!("Message cannot be empty");
        }

        let session_id = session_id
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty())
            .map(SessionId::from)
            .unwrap_or_else(SessionId::generate);
        tracing::info!(session_id = %session_id, "Sending message");

        match transport.post_chat(message, &session_id).await {
            Ok(reply) => Ok(reply),
            Err(e) => {
                tracing::error!(session_id = %session_id, "Chat request failed: {:#}", e);
                println!("{}", FALLBACK_REPLY);
                Err(e)
            }
        }
    }

}

// Backend health handler
pub mod health {
    //! Backend health check.

    use super::*;

    /// Print the backend status
    ///
    /// # Errors
    ///
    /// Returns error if the backend cannot be reached or answers with an
    /// unexpected body
    pub async fn run_health(config: Config) -> Result<()> {
        let transport = create_transport(&config.backend)?;
        let status = transport.health().await?;
        println!("{}", status);
        Ok(())
    }
}

/// Prints the health check result inside the REPL
async fn report_health(transport: &dyn ChatTransport) {
    match transport.health().await {
        Ok(status) => println!("Backend status: {}", status.green()),
        Err(e) => eprintln!("{}", format!("Backend unreachable: {}", e).red()),
    }
}
