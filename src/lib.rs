//! Dynamite Countdown Library
//!
//! This library provides the core functionality for the Dynamite
//! countdown timer. It includes:
//! - Countdown engine with tick-driven state transitions
//! - IPC server/client for daemon-CLI communication
//! - CLI command parsing and display utilities
//! - Type definitions for configuration and state
//! - Sound playback for the beep and explosion cues
//! - Display surface abstraction with a terminal implementation
//! - Context-menu configuration for a host overlay surface

pub mod cli;
pub mod daemon;
pub mod menu;
pub mod sound;
pub mod surface;
pub mod types;

// Re-export commonly used types for convenience
pub use types::{
    format_hms, CountdownConfig, CountdownPhase, CountdownState, IpcRequest, IpcResponse,
    ResponseData, TickOutcome,
};

// Re-export engine types
pub use daemon::{CountdownEngine, CountdownEvent};

// Re-export menu types
pub use menu::{EventHandler, MenuAction, MenuBuilder, MenuConfig, MenuItemConfig, MenuItemId};

// Re-export sound types
pub use sound::{
    find_cue_sound, resolve_sound, try_create_player, MockSoundPlayer, RodioSoundPlayer,
    SoundCue, SoundError, SoundPlayer, SoundSource,
};

// Re-export surface types
pub use surface::{
    run_surface_loop, ConsoleSurface, DisplaySurface, MockSurface, SurfaceCall, SurfaceUpdate,
};
