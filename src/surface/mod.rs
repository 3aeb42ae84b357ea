//! Display surface for the countdown timer.
//!
//! The engine never draws anything itself; it emits render and visibility
//! requests that a surface carries out. This module provides:
//!
//! - `DisplaySurface`: the collaborator trait (render text, show/hide)
//! - `SurfaceUpdate`: messages sent from the engine side (tokio) to the
//!   surface thread over a crossbeam channel
//! - `ConsoleSurface`: a terminal implementation
//! - `MockSurface`: a recording implementation for tests
//!
//! The actual overlay window chrome (background image, drag-to-move) is
//! out of scope; a surface only needs to display a line of text and blank
//! it for the blink effect.

mod console;

pub use console::ConsoleSurface;

use crossbeam_channel::Receiver;
use tracing::{debug, warn};

// ============================================================================
// DisplaySurface
// ============================================================================

/// Trait for display surface implementations.
pub trait DisplaySurface {
    /// Renders the given text, replacing whatever was shown before.
    fn render(&self, text: &str);

    /// Shows or hides the rendered text.
    fn set_visible(&self, visible: bool);
}

// ============================================================================
// SurfaceUpdate
// ============================================================================

/// Updates sent to the display surface from the daemon event loop.
///
/// Used with crossbeam-channel to move rendering requests from the timer
/// engine (running in tokio) to the surface's dedicated thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceUpdate {
    /// Replace the displayed text
    Render(String),
    /// Show or hide the displayed text
    SetVisible(bool),
    /// Shut down the surface thread
    Shutdown,
}

/// Drains surface updates onto a surface until `Shutdown` arrives or the
/// sending side disconnects.
///
/// Intended to run on a dedicated thread owned by the daemon.
pub fn run_surface_loop<S: DisplaySurface>(rx: Receiver<SurfaceUpdate>, surface: S) {
    loop {
        match rx.recv() {
            Ok(SurfaceUpdate::Render(text)) => surface.render(&text),
            Ok(SurfaceUpdate::SetVisible(visible)) => surface.set_visible(visible),
            Ok(SurfaceUpdate::Shutdown) => {
                debug!("Surface loop shutting down");
                break;
            }
            Err(_) => {
                warn!("Surface update channel disconnected");
                break;
            }
        }
    }
}

// ============================================================================
// MockSurface
// ============================================================================

/// A call recorded by [`MockSurface`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceCall {
    /// `render` was invoked with the contained text
    Render(String),
    /// `set_visible` was invoked with the contained flag
    SetVisible(bool),
}

/// Mock display surface for testing.
#[derive(Debug, Default)]
pub struct MockSurface {
    calls: std::sync::Mutex<Vec<SurfaceCall>>,
}

impl MockSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all recorded calls in order.
    #[must_use]
    pub fn calls(&self) -> Vec<SurfaceCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Returns the rendered texts in order.
    #[must_use]
    pub fn rendered(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter_map(|c| match c {
                SurfaceCall::Render(text) => Some(text.clone()),
                SurfaceCall::SetVisible(_) => None,
            })
            .collect()
    }

    /// Returns the visibility flags in order.
    #[must_use]
    pub fn visibility_changes(&self) -> Vec<bool> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter_map(|c| match c {
                SurfaceCall::SetVisible(v) => Some(*v),
                SurfaceCall::Render(_) => None,
            })
            .collect()
    }

    pub fn clear(&self) {
        self.calls.lock().unwrap().clear();
    }
}

impl DisplaySurface for MockSurface {
    fn render(&self, text: &str) {
        self.calls
            .lock()
            .unwrap()
            .push(SurfaceCall::Render(text.to_string()));
    }

    fn set_visible(&self, visible: bool) {
        self.calls
            .lock()
            .unwrap()
            .push(SurfaceCall::SetVisible(visible));
    }
}

impl<S: DisplaySurface + ?Sized> DisplaySurface for &S {
    fn render(&self, text: &str) {
        (**self).render(text);
    }

    fn set_visible(&self, visible: bool) {
        (**self).set_visible(visible);
    }
}

impl<S: DisplaySurface + ?Sized> DisplaySurface for std::sync::Arc<S> {
    fn render(&self, text: &str) {
        (**self).render(text);
    }

    fn set_visible(&self, visible: bool) {
        (**self).set_visible(visible);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::unbounded;

    mod mock_surface_tests {
        use super::*;

        #[test]
        fn test_records_renders_in_order() {
            let surface = MockSurface::new();

            surface.render("00:00:03");
            surface.render("00:00:02");
            surface.set_visible(false);

            assert_eq!(surface.rendered(), vec!["00:00:03", "00:00:02"]);
            assert_eq!(surface.visibility_changes(), vec![false]);
        }

        #[test]
        fn test_clear() {
            let surface = MockSurface::new();
            surface.render("x");

            surface.clear();

            assert!(surface.calls().is_empty());
        }
    }

    mod surface_loop_tests {
        use super::*;
        use std::sync::Arc;

        #[test]
        fn test_loop_applies_updates_until_shutdown() {
            let (tx, rx) = unbounded();
            let surface = Arc::new(MockSurface::new());

            tx.send(SurfaceUpdate::Render("00:10:00".to_string()))
                .unwrap();
            tx.send(SurfaceUpdate::SetVisible(false)).unwrap();
            tx.send(SurfaceUpdate::Shutdown).unwrap();

            run_surface_loop(rx, Arc::clone(&surface));

            assert_eq!(
                surface.calls(),
                vec![
                    SurfaceCall::Render("00:10:00".to_string()),
                    SurfaceCall::SetVisible(false),
                ]
            );
        }

        #[test]
        fn test_loop_exits_on_disconnect() {
            let (tx, rx) = unbounded::<SurfaceUpdate>();
            let surface = MockSurface::new();

            drop(tx);

            // Must return instead of blocking forever
            run_surface_loop(rx, &surface);
        }
    }
}
