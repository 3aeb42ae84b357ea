//! Sound playback system for the countdown timer.
//!
//! This module provides the audio collaborator, including:
//!
//! - The beep and explosion cues and their source resolution
//! - Embedded fallback cue data
//! - Non-blocking audio playback
//! - Graceful degradation when audio is unavailable
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐
//! │   SoundPlayer    │ ← Main interface
//! └────────┬─────────┘
//!          │
//!          ▼
//! ┌──────────────────┐     ┌──────────────────┐
//! │   SoundSource    │────▶│   Sound Files    │
//! │  (beep /         │     │  (sounds dir)    │
//! │   explosion)     │     ├──────────────────┤
//! │                  │────▶│  Embedded Cues   │
//! └──────────────────┘     │   (fallback)     │
//!                          └──────────────────┘
//! ```
//!
//! Muting is enforced by the countdown engine: a muted engine never
//! requests playback. The player's own `disabled` flag is the
//! device-level kill switch used by `--no-sound`.

mod cue;
mod embedded;
mod error;
mod player;

pub use cue::{find_cue_sound, resolve_sound, SoundCue, SoundSource};
pub use embedded::{
    get_embedded_sound, get_embedded_sound_format, BEEP_SOUND_DATA, EXPLOSION_SOUND_DATA,
};
pub use error::SoundError;
pub use player::{try_create_player, RodioSoundPlayer};

/// Trait for sound playback implementations.
///
/// Abstracts the playback functionality, allowing for different
/// implementations (rodio-based, mock for testing).
pub trait SoundPlayer {
    /// Plays a cue from the given source.
    ///
    /// Implementations should be non-blocking; the cue plays in the
    /// background.
    ///
    /// # Errors
    ///
    /// Returns an error if playback fails.
    fn play(&self, source: &SoundSource) -> Result<(), SoundError>;

    /// Returns true if the audio system is available.
    fn is_available(&self) -> bool;

    /// Returns true if sound playback is disabled.
    fn is_disabled(&self) -> bool;

    /// Enables sound playback.
    fn enable(&self);

    /// Disables sound playback.
    fn disable(&self);
}

impl SoundPlayer for RodioSoundPlayer {
    fn play(&self, source: &SoundSource) -> Result<(), SoundError> {
        RodioSoundPlayer::play(self, source)
    }

    fn is_available(&self) -> bool {
        RodioSoundPlayer::is_available(self)
    }

    fn is_disabled(&self) -> bool {
        RodioSoundPlayer::is_disabled(self)
    }

    fn enable(&self) {
        RodioSoundPlayer::enable(self)
    }

    fn disable(&self) {
        RodioSoundPlayer::disable(self)
    }
}

/// Mock sound player for testing.
#[derive(Debug, Default)]
pub struct MockSoundPlayer {
    play_calls: std::sync::Mutex<Vec<SoundSource>>,
    available: std::sync::atomic::AtomicBool,
    disabled: std::sync::atomic::AtomicBool,
    should_fail: std::sync::atomic::AtomicBool,
}

impl MockSoundPlayer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            play_calls: std::sync::Mutex::new(Vec::new()),
            available: std::sync::atomic::AtomicBool::new(true),
            disabled: std::sync::atomic::AtomicBool::new(false),
            should_fail: std::sync::atomic::AtomicBool::new(false),
        }
    }

    pub fn set_available(&self, available: bool) {
        self.available
            .store(available, std::sync::atomic::Ordering::SeqCst);
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail
            .store(should_fail, std::sync::atomic::Ordering::SeqCst);
    }

    #[must_use]
    pub fn play_count(&self) -> usize {
        self.play_calls.lock().unwrap().len()
    }

    /// Returns the number of plays recorded for a specific cue.
    #[must_use]
    pub fn cue_count(&self, cue: SoundCue) -> usize {
        self.play_calls
            .lock()
            .unwrap()
            .iter()
            .filter(|s| s.cue() == cue)
            .count()
    }

    #[must_use]
    pub fn get_play_calls(&self) -> Vec<SoundSource> {
        self.play_calls.lock().unwrap().clone()
    }

    pub fn clear_calls(&self) {
        self.play_calls.lock().unwrap().clear();
    }
}

impl SoundPlayer for MockSoundPlayer {
    fn play(&self, source: &SoundSource) -> Result<(), SoundError> {
        if self.should_fail.load(std::sync::atomic::Ordering::SeqCst) {
            return Err(SoundError::PlaybackError("Mock failure".to_string()));
        }
        if self.disabled.load(std::sync::atomic::Ordering::SeqCst) {
            return Ok(());
        }
        self.play_calls.lock().unwrap().push(source.clone());
        Ok(())
    }

    fn is_available(&self) -> bool {
        self.available.load(std::sync::atomic::Ordering::SeqCst)
    }

    fn is_disabled(&self) -> bool {
        self.disabled.load(std::sync::atomic::Ordering::SeqCst)
    }

    fn enable(&self) {
        self.disabled
            .store(false, std::sync::atomic::Ordering::SeqCst);
    }

    fn disable(&self) {
        self.disabled
            .store(true, std::sync::atomic::Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_records_cues() {
        let player = MockSoundPlayer::new();

        player.play(&SoundSource::embedded(SoundCue::Beep)).unwrap();
        player.play(&SoundSource::embedded(SoundCue::Beep)).unwrap();
        player
            .play(&SoundSource::embedded(SoundCue::Explosion))
            .unwrap();

        assert_eq!(player.play_count(), 3);
        assert_eq!(player.cue_count(SoundCue::Beep), 2);
        assert_eq!(player.cue_count(SoundCue::Explosion), 1);
    }

    #[test]
    fn test_mock_disabled_skips_recording() {
        let player = MockSoundPlayer::new();
        player.disable();

        player.play(&SoundSource::embedded(SoundCue::Beep)).unwrap();

        assert_eq!(player.play_count(), 0);
    }

    #[test]
    fn test_mock_failure() {
        let player = MockSoundPlayer::new();
        player.set_should_fail(true);

        let result = player.play(&SoundSource::embedded(SoundCue::Beep));
        assert!(result.is_err());
    }

    #[test]
    fn test_mock_clear_calls() {
        let player = MockSoundPlayer::new();
        player.play(&SoundSource::embedded(SoundCue::Beep)).unwrap();

        player.clear_calls();

        assert_eq!(player.play_count(), 0);
    }

    #[test]
    fn test_embedded_cue_data() {
        for cue in [SoundCue::Beep, SoundCue::Explosion] {
            let data = get_embedded_sound(cue);
            assert!(!data.is_empty());
            assert_eq!(&data[0..4], b"RIFF");
        }
    }
}
