//! Embedded cue data.
//!
//! Fallback audio for the beep and explosion cues, compiled into the
//! binary so the timer is audible without any sound files installed.
//!
//! Note: In a production build these would contain actual audio data.
//! For now they carry minimal valid WAV headers for testing.

use super::cue::SoundCue;

/// Embedded beep cue (minimal WAV format for testing).
///
/// WAV format structure:
/// - RIFF header (12 bytes)
/// - fmt chunk (24 bytes)
/// - data chunk header (8 bytes)
/// - audio data (variable)
pub const BEEP_SOUND_DATA: &[u8] = &[
    // RIFF header
    0x52, 0x49, 0x46, 0x46, // "RIFF"
    0x24, 0x00, 0x00, 0x00, // File size - 8 (36 bytes)
    0x57, 0x41, 0x56, 0x45, // "WAVE"
    // fmt chunk
    0x66, 0x6D, 0x74, 0x20, // "fmt "
    0x10, 0x00, 0x00, 0x00, // Chunk size (16 bytes)
    0x01, 0x00, // Audio format (1 = PCM)
    0x01, 0x00, // Number of channels (1 = mono)
    0x44, 0xAC, 0x00, 0x00, // Sample rate (44100 Hz)
    0x88, 0x58, 0x01, 0x00, // Byte rate (44100 * 1 * 2 = 88200)
    0x02, 0x00, // Block align (1 * 2 = 2)
    0x10, 0x00, // Bits per sample (16)
    // data chunk header
    0x64, 0x61, 0x74, 0x61, // "data"
    0x00, 0x00, 0x00, 0x00, // Data size (0 bytes - silent)
];

/// Embedded explosion cue (minimal WAV format for testing).
pub const EXPLOSION_SOUND_DATA: &[u8] = &[
    // RIFF header
    0x52, 0x49, 0x46, 0x46, // "RIFF"
    0x24, 0x00, 0x00, 0x00, // File size - 8 (36 bytes)
    0x57, 0x41, 0x56, 0x45, // "WAVE"
    // fmt chunk
    0x66, 0x6D, 0x74, 0x20, // "fmt "
    0x10, 0x00, 0x00, 0x00, // Chunk size (16 bytes)
    0x01, 0x00, // Audio format (1 = PCM)
    0x02, 0x00, // Number of channels (2 = stereo)
    0x44, 0xAC, 0x00, 0x00, // Sample rate (44100 Hz)
    0x10, 0xB1, 0x02, 0x00, // Byte rate (44100 * 2 * 2 = 176400)
    0x04, 0x00, // Block align (2 * 2 = 4)
    0x10, 0x00, // Bits per sample (16)
    // data chunk header
    0x64, 0x61, 0x74, 0x61, // "data"
    0x00, 0x00, 0x00, 0x00, // Data size (0 bytes - silent)
];

/// Returns the embedded audio data for a cue.
#[must_use]
pub const fn get_embedded_sound(cue: SoundCue) -> &'static [u8] {
    match cue {
        SoundCue::Beep => BEEP_SOUND_DATA,
        SoundCue::Explosion => EXPLOSION_SOUND_DATA,
    }
}

/// Returns the format description of the embedded cues.
#[must_use]
pub const fn get_embedded_sound_format() -> &'static str {
    "WAV (16-bit PCM, 44.1kHz)"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_sounds_exist() {
        assert!(!get_embedded_sound(SoundCue::Beep).is_empty());
        assert!(!get_embedded_sound(SoundCue::Explosion).is_empty());
    }

    #[test]
    fn test_embedded_sounds_have_riff_header() {
        for cue in [SoundCue::Beep, SoundCue::Explosion] {
            let data = get_embedded_sound(cue);
            assert_eq!(&data[0..4], b"RIFF", "bad header for {}", cue);
            assert_eq!(&data[8..12], b"WAVE", "bad format for {}", cue);
            assert_eq!(&data[12..16], b"fmt ", "missing fmt chunk for {}", cue);
        }
    }

    #[test]
    fn test_cues_have_distinct_data() {
        assert_ne!(BEEP_SOUND_DATA, EXPLOSION_SOUND_DATA);
    }

    #[test]
    fn test_embedded_sound_format_description() {
        let format = get_embedded_sound_format();
        assert!(format.contains("WAV"));
        assert!(format.contains("PCM"));
    }
}
