//! Command definitions for the Dynamite countdown CLI.
//!
//! Uses clap derive macro for argument parsing.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

// ============================================================================
// CLI Structure
// ============================================================================

/// Dynamite Countdown - a desktop countdown timer with audio cues
#[derive(Parser, Debug)]
#[command(
    name = "dynamite",
    version,
    about = "A countdown timer with beep and explosion cues",
    long_about = "A countdown timer that renders the remaining time, beeps every second,\n\
                  and blinks with an explosion sound once it expires.\n\
                  The daemon owns the countdown; the other commands control it.",
    propagate_version = true
)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

// ============================================================================
// Subcommands
// ============================================================================

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Set a new duration and restart the countdown
    Set(SetArgs),

    /// Restart the countdown with the configured duration
    Reset,

    /// Toggle pause
    Pause,

    /// Toggle audio cues
    Mute,

    /// Show the current countdown status
    Status,

    /// Shut down the daemon
    Quit,

    /// Run the countdown daemon
    Daemon(DaemonArgs),

    /// Generate shell completion scripts
    Completions {
        /// Shell type for completion script
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

// ============================================================================
// Set Command Arguments
// ============================================================================

/// Arguments for the set command
///
/// Mirrors the custom-time dialog of the widget: hours, minutes and
/// seconds entered separately, each defaulting to zero. Negative values
/// are rejected during parsing and never reach the daemon.
#[derive(Args, Debug, Clone, Default)]
pub struct SetArgs {
    /// Hours component of the new duration
    #[arg(short = 'H', long, default_value = "0")]
    pub hours: u32,

    /// Minutes component of the new duration
    #[arg(short = 'M', long, default_value = "0")]
    pub minutes: u32,

    /// Seconds component of the new duration
    #[arg(short = 'S', long, default_value = "0")]
    pub seconds: u32,
}

impl SetArgs {
    /// Returns the total duration in seconds.
    ///
    /// # Errors
    ///
    /// Returns an error if the combination overflows `u32`.
    pub fn total_seconds(&self) -> Result<u32, String> {
        self.hours
            .checked_mul(3600)
            .and_then(|h| h.checked_add(self.minutes.checked_mul(60)?))
            .and_then(|hm| hm.checked_add(self.seconds))
            .ok_or_else(|| "Duration is too large".to_string())
    }
}

// ============================================================================
// Daemon Command Arguments
// ============================================================================

/// Arguments for the daemon command
#[derive(Args, Debug, Clone)]
pub struct DaemonArgs {
    /// Countdown duration in seconds
    #[arg(short, long, default_value = "3600")]
    pub seconds: u32,

    /// Start with audio cues muted
    #[arg(short, long)]
    pub muted: bool,

    /// Disable the audio device entirely
    #[arg(long)]
    pub no_sound: bool,

    /// Directory searched for beep.* and explosion.* sound files
    #[arg(long, value_name = "DIR")]
    pub sounds_dir: Option<PathBuf>,

    /// Socket path for IPC (defaults to ~/.dynamite/dynamite.sock)
    #[arg(long, value_name = "PATH")]
    pub socket: Option<PathBuf>,
}

impl Default for DaemonArgs {
    fn default() -> Self {
        Self {
            seconds: 3600,
            muted: false,
            no_sound: false,
            sounds_dir: None,
            socket: None,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
