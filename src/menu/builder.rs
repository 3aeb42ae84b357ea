//! Menu building and item state management for the context menu.
//!
//! This module handles:
//! - Menu item configuration and labels
//! - Label selection based on countdown state (Mute/Unmute, Pause/Resume)
//!
//! The configuration logic is platform-independent and fully testable.
//! Building a native menu from a [`MenuConfig`] is the host surface's job.

use crate::types::CountdownState;

// ============================================================================
// Time Presets
// ============================================================================

/// A fixed duration offered in the context menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimePreset {
    /// Menu label
    pub label: &'static str,
    /// Duration in seconds
    pub seconds: u32,
}

/// The duration presets, longest first, as offered by the context menu.
pub const TIME_PRESETS: &[TimePreset] = &[
    TimePreset {
        label: "Set to 8 Hours",
        seconds: 8 * 3600,
    },
    TimePreset {
        label: "Set to 4 Hours",
        seconds: 4 * 3600,
    },
    TimePreset {
        label: "Set to 1 Hour",
        seconds: 3600,
    },
    TimePreset {
        label: "Set to 30 Minutes",
        seconds: 30 * 60,
    },
    TimePreset {
        label: "Set to 15 Minutes",
        seconds: 15 * 60,
    },
    TimePreset {
        label: "Set to 10 Minutes",
        seconds: 10 * 60,
    },
    TimePreset {
        label: "Set to 5 Minutes",
        seconds: 5 * 60,
    },
    TimePreset {
        label: "Set to 1 Minute",
        seconds: 60,
    },
    TimePreset {
        label: "Set to 30 Seconds",
        seconds: 30,
    },
];

// ============================================================================
// MenuItemConfig
// ============================================================================

/// Configuration for a menu item.
#[derive(Debug, Clone)]
pub struct MenuItemConfig {
    /// Display text for the menu item
    pub text: String,
    /// Whether the menu item is enabled (clickable)
    pub enabled: bool,
}

impl MenuItemConfig {
    /// Creates a new menu item configuration.
    pub fn new(text: impl Into<String>, enabled: bool) -> Self {
        Self {
            text: text.into(),
            enabled,
        }
    }
}

// ============================================================================
// MenuConfig
// ============================================================================

/// Complete context-menu configuration based on the countdown state.
#[derive(Debug, Clone)]
pub struct MenuConfig {
    /// Mute/Unmute toggle
    pub mute: MenuItemConfig,
    /// Reset Timer item
    pub reset: MenuItemConfig,
    /// Pause/Resume toggle
    pub pause: MenuItemConfig,
    /// Fixed duration presets, in [`TIME_PRESETS`] order
    pub presets: Vec<MenuItemConfig>,
    /// Set Custom Time item
    pub custom_time: MenuItemConfig,
    /// Quit item
    pub quit: MenuItemConfig,
}

// ============================================================================
// MenuBuilder
// ============================================================================

/// Builds menu configuration based on countdown state.
#[derive(Debug, Default)]
pub struct MenuBuilder;

impl MenuBuilder {
    /// Creates a new MenuBuilder.
    pub fn new() -> Self {
        Self
    }

    /// Builds a complete menu configuration for the current state.
    ///
    /// Every item is always enabled; the toggles read back the state they
    /// would switch away from ("Unmute" while muted, "Resume" while
    /// paused).
    pub fn build(&self, state: &CountdownState) -> MenuConfig {
        MenuConfig {
            mute: MenuItemConfig::new(Self::mute_label(state), true),
            reset: MenuItemConfig::new("Reset Timer", true),
            pause: MenuItemConfig::new(Self::pause_label(state), true),
            presets: TIME_PRESETS
                .iter()
                .map(|preset| MenuItemConfig::new(preset.label, true))
                .collect(),
            custom_time: MenuItemConfig::new("Set Custom Time", true),
            quit: MenuItemConfig::new("Quit", true),
        }
    }

    /// Returns the mute toggle label for the given state.
    pub fn mute_label(state: &CountdownState) -> &'static str {
        if state.muted {
            "Unmute"
        } else {
            "Mute"
        }
    }

    /// Returns the pause toggle label for the given state.
    pub fn pause_label(state: &CountdownState) -> &'static str {
        if state.paused {
            "Resume"
        } else {
            "Pause"
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
