//! Countdown engine for the Dynamite timer.
//!
//! This module provides the core countdown functionality:
//! - Tick-driven state transitions (Running → Expired, blink loop)
//! - Countdown with tokio::time::interval
//! - Event firing for the display surface and sound device
//!
//! The engine performs no rendering or audio playback itself; every side
//! effect is an outbound [`CountdownEvent`]. Tests drive it by calling
//! [`CountdownEngine::tick`] directly, without real time passing.

use anyhow::{Context, Result};
use tokio::sync::mpsc;
use tokio::time::{interval, Duration, MissedTickBehavior};

use crate::types::{CountdownConfig, CountdownState, TickOutcome};

// ============================================================================
// CountdownEvent
// ============================================================================

/// Side-effect requests and notifications emitted by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CountdownEvent {
    /// Render the given text on the display surface
    Render {
        /// Remaining time formatted as HH:MM:SS
        text: String,
    },
    /// Play the per-second beep cue
    Beep,
    /// Play the one-time explosion cue
    Explosion,
    /// Show or hide the rendered text (blink effect)
    Visibility {
        /// Whether the text should be visible
        visible: bool,
    },
    /// The countdown reached zero and entered the expired phase
    Expired,
    /// Pause was toggled
    Paused {
        /// Paused state after the toggle
        paused: bool,
    },
    /// Mute was toggled
    Muted {
        /// Muted state after the toggle
        muted: bool,
    },
    /// A new duration was applied
    TimerSet {
        /// The new duration in seconds
        seconds: u32,
    },
}

// ============================================================================
// CountdownEngine
// ============================================================================

/// Countdown engine that owns the timer state and emits side-effect events.
pub struct CountdownEngine {
    /// Current countdown state
    state: CountdownState,
    /// Event sender channel
    event_tx: mpsc::UnboundedSender<CountdownEvent>,
}

impl CountdownEngine {
    /// Creates a new CountdownEngine with the given configuration and
    /// event channel.
    pub fn new(config: CountdownConfig, event_tx: mpsc::UnboundedSender<CountdownEvent>) -> Self {
        Self {
            state: CountdownState::new(&config),
            event_tx,
        }
    }

    /// Runs the 1 Hz tick loop.
    ///
    /// The driving clock keeps ticking while paused; `tick` itself decides
    /// whether to react. This method should be spawned as a separate tokio
    /// task.
    pub async fn run(&mut self) -> Result<()> {
        let mut ticker = interval(Duration::from_secs(1));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        // The first interval tick completes immediately; consume it so the
        // countdown loses its first second a full second after launch.
        ticker.tick().await;

        loop {
            ticker.tick().await;
            self.tick()?;
        }
    }

    /// Processes one clock tick.
    ///
    /// - Running with time left: decrement, render, beep unless muted.
    /// - Running at zero: enter the expired phase, explode unless muted.
    /// - Expired: flip visibility for the blink effect.
    /// - Paused: no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if the event channel is closed.
    pub fn tick(&mut self) -> Result<()> {
        match self.state.tick() {
            TickOutcome::Skipped => {}
            TickOutcome::Counted { .. } => {
                self.send(CountdownEvent::Render {
                    text: self.state.formatted_time(),
                })?;
                if !self.state.muted {
                    self.send(CountdownEvent::Beep)?;
                }
            }
            TickOutcome::JustExpired => {
                self.send(CountdownEvent::Expired)?;
                if !self.state.muted {
                    self.send(CountdownEvent::Explosion)?;
                }
            }
            TickOutcome::Blinked { visible } => {
                self.send(CountdownEvent::Visibility { visible })?;
            }
        }

        Ok(())
    }

    /// Sets a new duration and restarts the countdown.
    ///
    /// Cancels blinking, forces the text visible and immediately renders
    /// the new value. Setting zero seconds emits no expiry side effects;
    /// the next tick performs the expired transition.
    ///
    /// # Errors
    ///
    /// Returns an error if the event channel is closed.
    pub fn set_timer(&mut self, seconds: u32) -> Result<()> {
        self.state.set(seconds);

        self.send(CountdownEvent::TimerSet { seconds })?;
        self.send(CountdownEvent::Visibility { visible: true })?;
        self.send(CountdownEvent::Render {
            text: self.state.formatted_time(),
        })?;

        Ok(())
    }

    /// Restarts the countdown with the currently configured duration.
    ///
    /// # Errors
    ///
    /// Returns an error if the event channel is closed.
    pub fn reset(&mut self) -> Result<()> {
        self.set_timer(self.state.total_seconds)
    }

    /// Toggles the paused flag.
    ///
    /// # Errors
    ///
    /// Returns an error if the event channel is closed.
    pub fn toggle_pause(&mut self) -> Result<()> {
        self.state.toggle_pause();
        self.send(CountdownEvent::Paused {
            paused: self.state.paused,
        })
    }

    /// Toggles the muted flag.
    ///
    /// Only gates future audio emissions; countdown and blinking are
    /// unaffected.
    ///
    /// # Errors
    ///
    /// Returns an error if the event channel is closed.
    pub fn toggle_mute(&mut self) -> Result<()> {
        self.state.toggle_mute();
        self.send(CountdownEvent::Muted {
            muted: self.state.muted,
        })
    }

    /// Returns a reference to the current countdown state.
    pub fn state(&self) -> &CountdownState {
        &self.state
    }

    fn send(&self, event: CountdownEvent) -> Result<()> {
        self.event_tx
            .send(event)
            .context("Failed to send countdown event")
    }
}

// ============================================================================
// Tests
// ============================================================================
