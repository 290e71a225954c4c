//! Chatdesk - terminal client for an IT support chat backend
//!
//! Main entry point for the chatdesk binary.

use anyhow::Result;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use chatdesk::cli::{Cli, Commands};
use chatdesk::commands;
use chatdesk::config::{Config, DEFAULT_CONFIG_PATH};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let cli = Cli::parse_args();

    // Initialize tracing
    init_tracing(cli.verbose);

    // Load configuration
    let config_path = cli.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
    let config = Config::load(config_path, &cli)?;

    // Validate configuration
    config.validate()?;

    // Execute command
    match cli.command {
        Commands::Chat => {
            commands::chat::run_chat(config).await?;
            Ok(())
        }
        Commands::Send {
            message,
            session_id,
        } => {
            tracing::debug!("Starting one-shot send");
            commands::send::run_send(config, message, session_id).await?;
            Ok(())
        }
        Commands::Health => {
            tracing::debug!("Checking backend health");
            commands::health::run_health(config).await?;
            Ok(())
        }
    }
}

/// Initialize tracing subscriber with environment filter
///
/// Logs go to stderr so they do not interleave with chat output.
fn init_tracing(verbose: bool) {
    let default_directive = if verbose {
        "chatdesk=debug"
    } else {
        "chatdesk=info"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
