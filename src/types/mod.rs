//! Core data types for the Dynamite countdown timer.
//!
//! This module defines the data structures used for:
//! - Countdown state and its tick-driven transitions
//! - Timer configuration
//! - IPC request/response serialization

use serde::{Deserialize, Serialize};

// ============================================================================
// CountdownPhase
// ============================================================================

/// Represents the current phase of the countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CountdownPhase {
    /// Actively counting down
    Running,
    /// Countdown reactions are suspended
    Paused,
    /// Remaining time reached zero; the display is blinking
    Expired,
}

impl CountdownPhase {
    /// Returns the string representation of the phase.
    pub fn as_str(&self) -> &'static str {
        match self {
            CountdownPhase::Running => "running",
            CountdownPhase::Paused => "paused",
            CountdownPhase::Expired => "expired",
        }
    }
}

impl Default for CountdownPhase {
    fn default() -> Self {
        CountdownPhase::Running
    }
}

// ============================================================================
// CountdownConfig
// ============================================================================

/// Configuration for the countdown timer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountdownConfig {
    /// Initial and reset duration in seconds
    pub default_seconds: u32,
    /// Whether audio cues start muted
    pub start_muted: bool,
}

impl Default for CountdownConfig {
    fn default() -> Self {
        Self {
            // One hour, the stock duration of the widget
            default_seconds: 3600,
            start_muted: false,
        }
    }
}

impl CountdownConfig {
    /// Creates a new configuration with the specified duration.
    pub fn with_default_seconds(mut self, seconds: u32) -> Self {
        self.default_seconds = seconds;
        self
    }

    /// Creates a new configuration with the specified mute setting.
    pub fn with_start_muted(mut self, muted: bool) -> Self {
        self.start_muted = muted;
        self
    }
}

// ============================================================================
// TickOutcome
// ============================================================================

/// The result of applying one clock tick to the countdown state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The countdown is paused; nothing changed.
    Skipped,
    /// One second elapsed; contains the remaining time after the decrement.
    Counted {
        /// Remaining seconds after this tick
        remaining_seconds: u32,
    },
    /// The countdown hit zero on this tick and entered the expired phase.
    JustExpired,
    /// Already expired; visibility flipped for the blink effect.
    Blinked {
        /// Visibility after the flip
        visible: bool,
    },
}

// ============================================================================
// CountdownState
// ============================================================================

/// Represents the current state of the countdown.
///
/// All mutation happens through the methods below; the engine translates
/// each outcome into side-effect events for the display and sound
/// collaborators.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountdownState {
    /// Configured duration the timer resets to
    pub total_seconds: u32,
    /// Seconds left in the current run
    pub remaining_seconds: u32,
    /// Suppresses beep and explosion playback when true
    pub muted: bool,
    /// Suppresses tick reactions when true
    pub paused: bool,
    /// True once the remaining time has reached zero
    pub expired: bool,
    /// Visibility of the rendered text; toggled per tick while expired
    pub visible: bool,
}

impl CountdownState {
    /// Creates a new CountdownState from the given configuration.
    ///
    /// The countdown starts running with the full duration remaining.
    pub fn new(config: &CountdownConfig) -> Self {
        Self {
            total_seconds: config.default_seconds,
            remaining_seconds: config.default_seconds,
            muted: config.start_muted,
            paused: false,
            expired: false,
            visible: true,
        }
    }

    /// Applies one clock tick.
    ///
    /// While paused this is a no-op. While running it decrements the
    /// remaining time; the tick that finds the remaining time already at
    /// zero performs the expiry transition, and every tick after that
    /// flips visibility for the blink effect.
    pub fn tick(&mut self) -> TickOutcome {
        if self.paused {
            return TickOutcome::Skipped;
        }

        if self.expired {
            self.visible = !self.visible;
            return TickOutcome::Blinked {
                visible: self.visible,
            };
        }

        if self.remaining_seconds > 0 {
            self.remaining_seconds -= 1;
            TickOutcome::Counted {
                remaining_seconds: self.remaining_seconds,
            }
        } else {
            self.expired = true;
            self.visible = true;
            TickOutcome::JustExpired
        }
    }

    /// Sets a new duration and restarts the countdown.
    ///
    /// Cancels any blink in progress and forces the text visible. The
    /// countdown re-enters the running phase regardless of prior state.
    pub fn set(&mut self, seconds: u32) {
        self.total_seconds = seconds;
        self.remaining_seconds = seconds;
        self.expired = false;
        self.visible = true;
        self.paused = false;
    }

    /// Restarts the countdown with the currently configured duration.
    pub fn reset(&mut self) {
        self.set(self.total_seconds);
    }

    /// Toggles the paused flag.
    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Toggles the muted flag.
    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
    }

    /// Returns the current phase.
    ///
    /// Paused takes precedence over expired: a paused countdown reports
    /// `Paused` even when the blink phase was interrupted.
    pub fn phase(&self) -> CountdownPhase {
        if self.paused {
            CountdownPhase::Paused
        } else if self.expired {
            CountdownPhase::Expired
        } else {
            CountdownPhase::Running
        }
    }

    /// Returns the remaining time formatted as `HH:MM:SS`.
    pub fn formatted_time(&self) -> String {
        format_hms(self.remaining_seconds)
    }
}

/// Formats a second count as `HH:MM:SS` with zero-padded 2-digit fields.
///
/// Hour counts of 100 or more widen the field rather than truncate.
pub fn format_hms(total_seconds: u32) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

// ============================================================================
// IPC Types
// ============================================================================

/// IPC request from client to daemon.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "lowercase")]
pub enum IpcRequest {
    /// Set a new duration and restart the countdown
    Set {
        /// New duration in seconds
        seconds: u32,
    },
    /// Restart the countdown with the configured duration
    Reset,
    /// Toggle pause
    Pause,
    /// Toggle mute
    Mute,
    /// Query the current status
    Status,
    /// Shut down the daemon
    Quit,
}

/// Response data for IPC responses.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResponseData {
    /// Current phase
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Remaining seconds
    #[serde(rename = "remainingSeconds", skip_serializing_if = "Option::is_none")]
    pub remaining_seconds: Option<u32>,
    /// Configured duration in seconds
    #[serde(rename = "totalSeconds", skip_serializing_if = "Option::is_none")]
    pub total_seconds: Option<u32>,
    /// Whether audio cues are muted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub muted: Option<bool>,
    /// Remaining time formatted as HH:MM:SS
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
}

impl ResponseData {
    /// Creates response data from the countdown state.
    pub fn from_countdown_state(state: &CountdownState) -> Self {
        Self {
            state: Some(state.phase().as_str().to_string()),
            remaining_seconds: Some(state.remaining_seconds),
            total_seconds: Some(state.total_seconds),
            muted: Some(state.muted),
            display: Some(state.formatted_time()),
        }
    }
}

/// IPC response from daemon to client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IpcResponse {
    /// Response status ("success" or "error")
    pub status: String,
    /// Human-readable message
    pub message: String,
    /// Optional response data
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<ResponseData>,
}

impl IpcResponse {
    /// Creates a success response.
    pub fn success(message: impl Into<String>, data: Option<ResponseData>) -> Self {
        Self {
            status: "success".to_string(),
            message: message.into(),
            data,
        }
    }

    /// Creates an error response.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: message.into(),
            data: None,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // ------------------------------------------------------------------------
    // CountdownPhase Tests
    // ------------------------------------------------------------------------

    mod countdown_phase_tests {
        use super::*;

        #[test]
        fn test_default_is_running() {
            assert_eq!(CountdownPhase::default(), CountdownPhase::Running);
        }

        #[test]
        fn test_as_str() {
            assert_eq!(CountdownPhase::Running.as_str(), "running");
            assert_eq!(CountdownPhase::Paused.as_str(), "paused");
            assert_eq!(CountdownPhase::Expired.as_str(), "expired");
        }

        #[test]
        fn test_serialize_deserialize() {
            let phase = CountdownPhase::Expired;
            let json = serde_json::to_string(&phase).unwrap();
            assert_eq!(json, "\"expired\"");

            let deserialized: CountdownPhase = serde_json::from_str(&json).unwrap();
            assert_eq!(deserialized, CountdownPhase::Expired);
        }
    }

    // ------------------------------------------------------------------------
    // CountdownConfig Tests
    // ------------------------------------------------------------------------

    mod countdown_config_tests {
        use super::*;

        #[test]
        fn test_default_values() {
            let config = CountdownConfig::default();
            assert_eq!(config.default_seconds, 3600);
            assert!(!config.start_muted);
        }

        #[test]
        fn test_builder_pattern() {
            let config = CountdownConfig::default()
                .with_default_seconds(600)
                .with_start_muted(true);

            assert_eq!(config.default_seconds, 600);
            assert!(config.start_muted);
        }

        #[test]
        fn test_serialize_deserialize() {
            let config = CountdownConfig::default().with_default_seconds(90);
            let json = serde_json::to_string(&config).unwrap();
            let deserialized: CountdownConfig = serde_json::from_str(&json).unwrap();
            assert_eq!(config, deserialized);
        }
    }

    // ------------------------------------------------------------------------
    // format_hms Tests
    // ------------------------------------------------------------------------

    mod format_hms_tests {
        use super::*;

        #[test]
        fn test_zero() {
            assert_eq!(format_hms(0), "00:00:00");
        }

        #[test]
        fn test_seconds_only() {
            assert_eq!(format_hms(45), "00:00:45");
        }

        #[test]
        fn test_minutes_and_seconds() {
            assert_eq!(format_hms(90), "00:01:30");
        }

        #[test]
        fn test_one_hour() {
            assert_eq!(format_hms(3600), "01:00:00");
        }

        #[test]
        fn test_eight_hours() {
            assert_eq!(format_hms(8 * 3600), "08:00:00");
        }

        #[test]
        fn test_mixed() {
            assert_eq!(format_hms(3661), "01:01:01");
            assert_eq!(format_hms(7325), "02:02:05");
        }

        #[test]
        fn test_large_hours_widen_field() {
            // 100 hours overflows the 2-digit field by widening, not truncating
            assert_eq!(format_hms(100 * 3600), "100:00:00");
        }

        #[test]
        fn test_round_trip() {
            for s in [0u32, 1, 59, 60, 61, 3599, 3600, 3661, 86400, 123_456] {
                let text = format_hms(s);
                let parts: Vec<u32> = text.split(':').map(|p| p.parse().unwrap()).collect();
                assert_eq!(parts.len(), 3);
                assert_eq!(parts[0] * 3600 + parts[1] * 60 + parts[2], s);
            }
        }
    }

    // ------------------------------------------------------------------------
    // CountdownState Tests
    // ------------------------------------------------------------------------

    mod countdown_state_tests {
        use super::*;

        fn running_state(seconds: u32) -> CountdownState {
            CountdownState::new(&CountdownConfig::default().with_default_seconds(seconds))
        }

        #[test]
        fn test_new_state() {
            let state = CountdownState::new(&CountdownConfig::default());

            assert_eq!(state.total_seconds, 3600);
            assert_eq!(state.remaining_seconds, 3600);
            assert!(!state.muted);
            assert!(!state.paused);
            assert!(!state.expired);
            assert!(state.visible);
            assert_eq!(state.phase(), CountdownPhase::Running);
        }

        #[test]
        fn test_new_state_start_muted() {
            let config = CountdownConfig::default().with_start_muted(true);
            let state = CountdownState::new(&config);
            assert!(state.muted);
        }

        #[test]
        fn test_tick_counts_down() {
            let mut state = running_state(3);

            assert_eq!(
                state.tick(),
                TickOutcome::Counted {
                    remaining_seconds: 2
                }
            );
            assert_eq!(
                state.tick(),
                TickOutcome::Counted {
                    remaining_seconds: 1
                }
            );
            assert_eq!(
                state.tick(),
                TickOutcome::Counted {
                    remaining_seconds: 0
                }
            );
            assert!(!state.expired);
        }

        #[test]
        fn test_expiry_deferred_to_next_tick() {
            let mut state = running_state(1);

            // Reaches zero without expiring
            assert_eq!(
                state.tick(),
                TickOutcome::Counted {
                    remaining_seconds: 0
                }
            );
            assert!(!state.expired);

            // The next tick performs the expiry transition
            assert_eq!(state.tick(), TickOutcome::JustExpired);
            assert!(state.expired);
            assert!(state.visible);
            assert_eq!(state.phase(), CountdownPhase::Expired);
        }

        #[test]
        fn test_blink_alternates_visibility() {
            let mut state = running_state(0);
            assert_eq!(state.tick(), TickOutcome::JustExpired);

            assert_eq!(state.tick(), TickOutcome::Blinked { visible: false });
            assert_eq!(state.tick(), TickOutcome::Blinked { visible: true });
            assert_eq!(state.tick(), TickOutcome::Blinked { visible: false });
            assert_eq!(state.tick(), TickOutcome::Blinked { visible: true });
        }

        #[test]
        fn test_paused_tick_is_noop() {
            let mut state = running_state(10);
            state.toggle_pause();

            for _ in 0..5 {
                assert_eq!(state.tick(), TickOutcome::Skipped);
            }
            assert_eq!(state.remaining_seconds, 10);
            assert!(!state.expired);
        }

        #[test]
        fn test_paused_blink_is_noop() {
            let mut state = running_state(0);
            state.tick(); // expire
            state.toggle_pause();

            assert_eq!(state.tick(), TickOutcome::Skipped);
            assert!(state.visible);
        }

        #[test]
        fn test_set_restarts_from_any_state() {
            let mut state = running_state(0);
            state.tick(); // expire
            state.tick(); // blink off
            state.toggle_pause();

            state.set(600);

            assert_eq!(state.total_seconds, 600);
            assert_eq!(state.remaining_seconds, 600);
            assert!(!state.expired);
            assert!(state.visible);
            assert!(!state.paused);
            assert_eq!(state.phase(), CountdownPhase::Running);
        }

        #[test]
        fn test_set_zero_does_not_expire_immediately() {
            let mut state = running_state(30);

            state.set(0);

            assert!(!state.expired);
            assert_eq!(state.remaining_seconds, 0);

            // Expiry happens on the following tick
            assert_eq!(state.tick(), TickOutcome::JustExpired);
        }

        #[test]
        fn test_reset_reapplies_configured_duration() {
            let mut state = running_state(5);
            state.tick();
            state.tick();
            assert_eq!(state.remaining_seconds, 3);

            state.reset();

            assert_eq!(state.remaining_seconds, 5);
            assert_eq!(state.total_seconds, 5);
        }

        #[test]
        fn test_toggle_pause() {
            let mut state = running_state(10);

            state.toggle_pause();
            assert!(state.paused);
            assert_eq!(state.phase(), CountdownPhase::Paused);

            state.toggle_pause();
            assert!(!state.paused);
            assert_eq!(state.phase(), CountdownPhase::Running);
        }

        #[test]
        fn test_toggle_mute_leaves_countdown_alone() {
            let mut state = running_state(10);

            state.toggle_mute();
            assert!(state.muted);
            assert_eq!(state.remaining_seconds, 10);
            assert_eq!(state.phase(), CountdownPhase::Running);

            state.toggle_mute();
            assert!(!state.muted);
        }

        #[test]
        fn test_paused_phase_wins_over_expired() {
            let mut state = running_state(0);
            state.tick(); // expire
            state.toggle_pause();

            assert_eq!(state.phase(), CountdownPhase::Paused);
        }

        #[test]
        fn test_formatted_time() {
            let state = running_state(3661);
            assert_eq!(state.formatted_time(), "01:01:01");
        }

        #[test]
        fn test_serialize_deserialize() {
            let mut state = running_state(120);
            state.tick();
            state.toggle_mute();

            let json = serde_json::to_string(&state).unwrap();
            let deserialized: CountdownState = serde_json::from_str(&json).unwrap();

            assert_eq!(deserialized.remaining_seconds, 119);
            assert_eq!(deserialized.total_seconds, 120);
            assert!(deserialized.muted);
        }
    }

    // ------------------------------------------------------------------------
    // IPC Types Tests
    // ------------------------------------------------------------------------

    mod ipc_tests {
        use super::*;

        #[test]
        fn test_ipc_request_set_serialize() {
            let request = IpcRequest::Set { seconds: 600 };
            let json = serde_json::to_string(&request).unwrap();
            assert_eq!(json, r#"{"command":"set","seconds":600}"#);
        }

        #[test]
        fn test_ipc_request_set_deserialize() {
            let json = r#"{"command":"set","seconds":90}"#;
            let request: IpcRequest = serde_json::from_str(json).unwrap();
            assert!(matches!(request, IpcRequest::Set { seconds: 90 }));
        }

        #[test]
        fn test_ipc_request_set_rejects_negative_seconds() {
            // Negative durations never reach the engine; deserialization fails
            let json = r#"{"command":"set","seconds":-5}"#;
            let result: Result<IpcRequest, _> = serde_json::from_str(json);
            assert!(result.is_err());
        }

        #[test]
        fn test_ipc_request_simple_commands() {
            let commands = vec![
                (r#"{"command":"reset"}"#, "reset"),
                (r#"{"command":"pause"}"#, "pause"),
                (r#"{"command":"mute"}"#, "mute"),
                (r#"{"command":"status"}"#, "status"),
                (r#"{"command":"quit"}"#, "quit"),
            ];

            for (json, expected) in commands {
                let request: IpcRequest = serde_json::from_str(json).unwrap();
                match (&request, expected) {
                    (IpcRequest::Reset, "reset") => {}
                    (IpcRequest::Pause, "pause") => {}
                    (IpcRequest::Mute, "mute") => {}
                    (IpcRequest::Status, "status") => {}
                    (IpcRequest::Quit, "quit") => {}
                    _ => panic!("Unexpected request type for {}", json),
                }
            }
        }

        #[test]
        fn test_response_data_from_countdown_state() {
            let config = CountdownConfig::default().with_default_seconds(600);
            let mut state = CountdownState::new(&config);
            state.tick();
            state.toggle_mute();

            let data = ResponseData::from_countdown_state(&state);

            assert_eq!(data.state, Some("running".to_string()));
            assert_eq!(data.remaining_seconds, Some(599));
            assert_eq!(data.total_seconds, Some(600));
            assert_eq!(data.muted, Some(true));
            assert_eq!(data.display, Some("00:09:59".to_string()));
        }

        #[test]
        fn test_ipc_response_success() {
            let response = IpcResponse::success(
                "Timer set",
                Some(ResponseData {
                    state: Some("running".to_string()),
                    remaining_seconds: Some(600),
                    total_seconds: Some(600),
                    muted: Some(false),
                    display: Some("00:10:00".to_string()),
                }),
            );

            assert_eq!(response.status, "success");
            assert_eq!(response.message, "Timer set");
            assert!(response.data.is_some());
        }

        #[test]
        fn test_ipc_response_error() {
            let response = IpcResponse::error("Daemon is not running");

            assert_eq!(response.status, "error");
            assert_eq!(response.message, "Daemon is not running");
            assert!(response.data.is_none());
        }

        #[test]
        fn test_ipc_response_serialize_skips_none() {
            let response = IpcResponse::success("OK", None);
            let json = serde_json::to_string(&response).unwrap();
            assert!(json.contains("\"status\":\"success\""));
            assert!(!json.contains("data"));
        }

        #[test]
        fn test_ipc_response_deserialize() {
            let json = r#"{"status":"success","message":"OK","data":{"state":"expired","remainingSeconds":0,"totalSeconds":30}}"#;
            let response: IpcResponse = serde_json::from_str(json).unwrap();

            assert_eq!(response.status, "success");
            let data = response.data.unwrap();
            assert_eq!(data.state, Some("expired".to_string()));
            assert_eq!(data.remaining_seconds, Some(0));
            assert_eq!(data.total_seconds, Some(30));
        }
    }
}
