//! Daemon module for the countdown timer.
//!
//! This module contains the core daemon functionality:
//! - `countdown`: Countdown engine with tick-driven transitions
//! - `ipc`: Unix Domain Socket server for CLI commands
//! - `service`: wiring of engine, surface, sound and IPC

pub mod countdown;
pub mod ipc;
pub mod service;

pub use countdown::{CountdownEngine, CountdownEvent};
pub use ipc::{IpcServer, RequestHandler};
pub use service::{run, DaemonOptions};
