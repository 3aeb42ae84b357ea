//! Terminal display surface.
//!
//! Renders the countdown on a single terminal line using carriage-return
//! overwrites. Hiding blanks the line, which reproduces the blink effect
//! of the overlay widget in a terminal.

use std::io::Write;
use std::sync::Mutex;

use tracing::debug;

use super::DisplaySurface;

/// A display surface that writes to stdout.
#[derive(Debug, Default)]
pub struct ConsoleSurface {
    /// Last rendered text, re-shown when visibility returns.
    last_text: Mutex<String>,
}

impl ConsoleSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrites the current terminal line with `text`.
    ///
    /// Pads with spaces so a shorter string fully covers a longer one.
    fn write_line(text: &str) {
        let mut stdout = std::io::stdout().lock();
        let _ = write!(stdout, "\r{:<12}", text);
        let _ = stdout.flush();
    }
}

impl DisplaySurface for ConsoleSurface {
    fn render(&self, text: &str) {
        let mut last = self.last_text.lock().unwrap();
        last.clear();
        last.push_str(text);
        Self::write_line(text);
    }

    fn set_visible(&self, visible: bool) {
        if visible {
            let last = self.last_text.lock().unwrap();
            Self::write_line(&last);
        } else {
            Self::write_line("");
        }
        debug!(visible, "Console surface visibility changed");
    }
}
