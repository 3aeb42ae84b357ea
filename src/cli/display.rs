//! Display utilities for the countdown CLI.
//!
//! This module provides formatted output for:
//! - Success messages
//! - Error messages
//! - Status display

use crate::types::IpcResponse;

// ============================================================================
// Display
// ============================================================================

/// Display utilities for CLI output.
pub struct Display;

impl Display {
    /// Shows a success message for a set command.
    pub fn show_set_success(response: &IpcResponse) {
        println!("* Timer set");
        Self::show_remaining(response);
    }

    /// Shows a success message for a reset command.
    pub fn show_reset_success(response: &IpcResponse) {
        println!("* Timer reset");
        Self::show_remaining(response);
    }

    /// Shows the result of a pause toggle.
    pub fn show_pause_success(response: &IpcResponse) {
        println!("|| {}", response.message);
        Self::show_remaining(response);
    }

    /// Shows the result of a mute toggle.
    pub fn show_mute_success(response: &IpcResponse) {
        println!("~ {}", response.message);
    }

    /// Shows a success message for a quit command.
    pub fn show_quit_success(_response: &IpcResponse) {
        println!("[] Daemon shut down");
    }

    /// Shows the current countdown status.
    pub fn show_status(response: &IpcResponse) {
        println!("Dynamite Countdown Status");
        println!("-------------------------");

        if let Some(data) = &response.data {
            let state = data.state.as_deref().unwrap_or("unknown");
            let state_display = match state {
                "running" => "Running",
                "paused" => "Paused",
                "expired" => "Expired (blinking)",
                _ => state,
            };
            println!("State: {}", state_display);

            if let Some(display) = &data.display {
                println!("Remaining: {}", display);
            }
            if let Some(total) = data.total_seconds {
                println!("Configured: {}", crate::types::format_hms(total));
            }
            if let Some(muted) = data.muted {
                println!("Sound: {}", if muted { "muted" } else { "on" });
            }
        } else {
            println!("The daemon is not running");
        }
    }

    /// Shows an error message.
    pub fn show_error(message: &str) {
        eprintln!("Error: {}", message);
    }

    /// Prints the remaining time line from a response, if present.
    fn show_remaining(response: &IpcResponse) {
        if let Some(data) = &response.data {
            if let Some(display) = &data.display {
                println!("  Remaining: {}", display);
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ResponseData;

    fn response_with_display(display: &str) -> IpcResponse {
        IpcResponse::success(
            "Timer set",
            Some(ResponseData {
                state: Some("running".to_string()),
                remaining_seconds: Some(600),
                total_seconds: Some(600),
                muted: Some(false),
                display: Some(display.to_string()),
            }),
        )
    }

    // Display methods only print; these tests verify they tolerate every
    // response shape without panicking.

    #[test]
    fn test_show_helpers_with_data() {
        let response = response_with_display("00:10:00");
        Display::show_set_success(&response);
        Display::show_reset_success(&response);
        Display::show_pause_success(&response);
        Display::show_mute_success(&response);
        Display::show_quit_success(&response);
        Display::show_status(&response);
    }

    #[test]
    fn test_show_helpers_without_data() {
        let response = IpcResponse::success("OK", None);
        Display::show_set_success(&response);
        Display::show_status(&response);
    }

    #[test]
    fn test_show_status_expired() {
        let mut response = response_with_display("00:00:00");
        if let Some(data) = response.data.as_mut() {
            data.state = Some("expired".to_string());
        }
        Display::show_status(&response);
    }

    #[test]
    fn test_show_error() {
        Display::show_error("something went wrong");
    }
}
