//! Context-menu logic for the countdown timer.
//!
//! The overlay widget is controlled through a right-click menu: duration
//! presets, a custom-time entry, mute/pause toggles, reset and quit. This
//! module provides the platform-independent half of that menu:
//!
//! - `builder`: menu configuration derived from the countdown state
//! - `event`: action types and click handling
//!
//! Native menu construction and window chrome are out of scope; a host
//! surface renders a [`MenuConfig`] and feeds clicks back through
//! [`EventHandler`].

pub mod builder;
pub mod event;

pub use builder::{MenuBuilder, MenuConfig, MenuItemConfig, TimePreset, TIME_PRESETS};
pub use event::{EventHandler, MenuAction, MenuItemId};
