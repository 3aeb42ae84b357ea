//! Event handling for context-menu interactions.
//!
//! This module handles:
//! - Menu event processing
//! - Command dispatching based on menu item clicks
//!
//! The action types and click mapping are platform-independent. Actual
//! window chrome and native menu construction are out of scope; a host
//! surface feeds clicked item ids into [`EventHandler`].

use std::fmt;

use super::builder::TIME_PRESETS;

// ============================================================================
// MenuAction
// ============================================================================

/// Actions that can be triggered from the context menu.
///
/// These actions are platform-independent and represent what the user
/// wants to do. Dispatching to the engine happens elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Toggle audio cues on or off
    ToggleMute,
    /// Restart the countdown with the configured duration
    Reset,
    /// Toggle pause
    TogglePause,
    /// Set a new duration in seconds and restart
    SetTimer(u32),
    /// Open the custom-time entry flow
    SetCustomTime,
    /// Quit the application
    Quit,
}

impl fmt::Display for MenuAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuAction::ToggleMute => write!(f, "mute"),
            MenuAction::Reset => write!(f, "reset"),
            MenuAction::TogglePause => write!(f, "pause"),
            MenuAction::SetTimer(seconds) => write!(f, "set({})", seconds),
            MenuAction::SetCustomTime => write!(f, "set-custom"),
            MenuAction::Quit => write!(f, "quit"),
        }
    }
}

impl MenuAction {
    /// Returns the IPC command name for this action.
    pub fn as_command(&self) -> &'static str {
        match self {
            MenuAction::ToggleMute => "mute",
            MenuAction::Reset => "reset",
            MenuAction::TogglePause => "pause",
            MenuAction::SetTimer(_) | MenuAction::SetCustomTime => "set",
            MenuAction::Quit => "quit",
        }
    }
}

// ============================================================================
// MenuItemId
// ============================================================================

/// Identifiers for menu items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuItemId {
    /// Mute/Unmute menu item
    Mute,
    /// Reset Timer menu item
    Reset,
    /// Pause/Resume menu item
    Pause,
    /// One of the fixed duration presets, by index into [`TIME_PRESETS`]
    Preset(usize),
    /// Set Custom Time menu item
    CustomTime,
    /// Quit menu item
    Quit,
    /// Unknown or unhandled menu item
    Unknown,
}

impl MenuItemId {
    /// Converts a menu item id to the corresponding action.
    ///
    /// Returns `None` for unknown items and out-of-range preset indices.
    pub fn to_action(&self) -> Option<MenuAction> {
        match self {
            MenuItemId::Mute => Some(MenuAction::ToggleMute),
            MenuItemId::Reset => Some(MenuAction::Reset),
            MenuItemId::Pause => Some(MenuAction::TogglePause),
            MenuItemId::Preset(index) => TIME_PRESETS
                .get(*index)
                .map(|preset| MenuAction::SetTimer(preset.seconds)),
            MenuItemId::CustomTime => Some(MenuAction::SetCustomTime),
            MenuItemId::Quit => Some(MenuAction::Quit),
            MenuItemId::Unknown => None,
        }
    }
}

// ============================================================================
// EventHandler
// ============================================================================

/// Handles menu events and converts them to actions.
#[derive(Debug, Default)]
pub struct EventHandler;

impl EventHandler {
    /// Creates a new EventHandler.
    pub fn new() -> Self {
        Self
    }

    /// Processes a menu item click and returns the corresponding action.
    ///
    /// # Arguments
    ///
    /// * `item_id` - The id of the clicked menu item
    ///
    /// # Returns
    ///
    /// The action to perform, or `None` if the item doesn't trigger one.
    pub fn handle_click(&self, item_id: MenuItemId) -> Option<MenuAction> {
        let action = item_id.to_action();

        if let Some(ref action) = action {
            tracing::info!(action = %action, "Menu action received");
        }

        action
    }

    /// Logs the result of an action execution.
    pub fn log_action_result(&self, action: &MenuAction, success: bool) {
        if success {
            tracing::info!(action = %action, "Menu action succeeded");
        } else {
            tracing::error!(action = %action, "Menu action failed");
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
