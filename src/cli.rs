//! Command-line interface definition for Chatdesk
//!
//! This module defines the CLI structure using clap's derive API,
//! providing the interactive chat, one-shot send and health commands.

use clap::{Parser, Subcommand};

/// Chatdesk - terminal client for an IT support chat backend
///
/// Keeps a list of chat sessions for the lifetime of the process and sends
/// each message to the backend together with its session id.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatdesk")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = crate::config::DEFAULT_CONFIG_PATH)]
    pub config: Option<String>,

    /// Override the backend base URL from config
    #[arg(long)]
    pub base_url: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for Chatdesk
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Start the interactive chat
    Chat,

    /// Send a single message and print the reply
    Send {
        /// Message text
        message: String,

        /// Session id to send with; a new one is generated when omitted
        #[arg(short, long)]
        session_id: Option<String>,
    },

    /// Check that the backend is reachable
    Health,
}

impl Cli {
    /// Parse command line arguments
    ///
    /// # Returns
    ///
    /// Returns the parsed CLI structure
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

impl Default for Cli {
    fn default() -> Self {
        Self {
            config: Some(crate::config::DEFAULT_CONFIG_PATH.to_string()),
            base_url: None,
            verbose: false,
            command: Commands::Chat,
        }
    }
}
