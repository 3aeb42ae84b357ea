//! Dynamite Countdown - a desktop countdown timer
//!
//! A countdown timer that renders the remaining time, beeps every second,
//! and blinks with an explosion sound once it expires. The daemon owns
//! the countdown; the other commands control it over a Unix socket.

use anyhow::Result;
use clap::{CommandFactory, Parser};

use dynamite::cli::{Cli, Commands, Display, IpcClient};
use dynamite::daemon::{self, DaemonOptions};

/// Main entry point
#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize logging
    init_tracing();

    // Parse command line arguments
    let cli = Cli::parse();

    // Execute command
    if let Err(e) = execute(cli).await {
        Display::show_error(&e.to_string());
        std::process::exit(1);
    }
}

/// Initializes the tracing subscriber for logging.
fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}

/// Executes the CLI command.
async fn execute(cli: Cli) -> Result<()> {
    // Set verbose logging if requested
    if cli.verbose {
        tracing::info!("Verbose mode enabled");
    }

    match cli.command {
        Some(Commands::Set(args)) => {
            let seconds = args.total_seconds().map_err(anyhow::Error::msg)?;
            let client = IpcClient::new()?;
            let response = client.set(seconds).await?;
            Display::show_set_success(&response);
        }
        Some(Commands::Reset) => {
            let client = IpcClient::new()?;
            let response = client.reset().await?;
            Display::show_reset_success(&response);
        }
        Some(Commands::Pause) => {
            let client = IpcClient::new()?;
            let response = client.pause().await?;
            Display::show_pause_success(&response);
        }
        Some(Commands::Mute) => {
            let client = IpcClient::new()?;
            let response = client.mute().await?;
            Display::show_mute_success(&response);
        }
        Some(Commands::Status) => {
            let client = IpcClient::new()?;
            let response = client.status().await?;
            Display::show_status(&response);
        }
        Some(Commands::Quit) => {
            let client = IpcClient::new()?;
            let response = client.quit().await?;
            Display::show_quit_success(&response);
        }
        Some(Commands::Daemon(args)) => {
            let options = DaemonOptions {
                socket_path: args.socket,
                sounds_dir: args.sounds_dir,
                no_sound: args.no_sound,
                seconds: args.seconds,
                muted: args.muted,
            };
            daemon::run(options).await?;
        }
        Some(Commands::Completions { shell }) => {
            generate_completions(shell);
        }
        None => {
            // No command provided, show help
            Cli::command().print_help()?;
        }
    }

    Ok(())
}

/// Generates shell completion scripts.
fn generate_completions(shell: clap_complete::Shell) {
    use clap_complete::generate;
    use std::io;

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    generate(shell, &mut cmd, bin_name, &mut io::stdout());
}

// ============================================================================
// Tests
// ============================================================================
