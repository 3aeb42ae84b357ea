//! Sound cue and source management.
//!
//! The countdown uses two named cues: a per-second beep and a one-time
//! explosion at expiry. Each cue resolves to a file in a user-supplied
//! sounds directory when present, and to an embedded fallback otherwise.

use std::path::{Path, PathBuf};

// ============================================================================
// SoundCue
// ============================================================================

/// The audio cues the countdown can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    /// Played once per countdown second
    Beep,
    /// Played once when the countdown expires
    Explosion,
}

impl SoundCue {
    /// Returns the string representation of the cue.
    pub fn as_str(&self) -> &'static str {
        match self {
            SoundCue::Beep => "beep",
            SoundCue::Explosion => "explosion",
        }
    }

    /// Returns the file stem looked up in a sounds directory.
    pub fn file_stem(&self) -> &'static str {
        self.as_str()
    }
}

impl std::fmt::Display for SoundCue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SoundSource
// ============================================================================

/// Represents where the audio data for a cue comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SoundSource {
    /// A sound file on disk (e.g. `sounds/explosion.mp3`).
    File {
        /// The cue this file plays for
        cue: SoundCue,
        /// The full path to the sound file
        path: PathBuf,
    },
    /// A sound compiled into the binary.
    Embedded {
        /// The cue this data plays for
        cue: SoundCue,
    },
}

impl SoundSource {
    /// Creates a new file-backed sound source.
    #[must_use]
    pub fn file(cue: SoundCue, path: impl Into<PathBuf>) -> Self {
        Self::File {
            cue,
            path: path.into(),
        }
    }

    /// Creates a new embedded sound source.
    #[must_use]
    pub fn embedded(cue: SoundCue) -> Self {
        Self::Embedded { cue }
    }

    /// Returns the cue this source plays.
    #[must_use]
    pub fn cue(&self) -> SoundCue {
        match self {
            Self::File { cue, .. } | Self::Embedded { cue } => *cue,
        }
    }

    /// Returns true if this is a file-backed sound.
    #[must_use]
    pub fn is_file(&self) -> bool {
        matches!(self, Self::File { .. })
    }

    /// Returns true if this is an embedded sound.
    #[must_use]
    pub fn is_embedded(&self) -> bool {
        matches!(self, Self::Embedded { .. })
    }

    /// Returns the file path if this is a file-backed sound.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::File { path, .. } => Some(path),
            Self::Embedded { .. } => None,
        }
    }
}

/// Audio file extensions tried when resolving a cue, in order of priority.
const SUPPORTED_EXTENSIONS: &[&str] = &["wav", "mp3", "flac", "ogg"];

/// Looks for a cue's sound file in the given directory.
///
/// Tries `<dir>/<stem>.<ext>` for each supported extension and returns the
/// first match. Returns `None` if the directory has no matching file.
#[must_use]
pub fn find_cue_sound(dir: &Path, cue: SoundCue) -> Option<SoundSource> {
    for ext in SUPPORTED_EXTENSIONS {
        let candidate = dir.join(format!("{}.{}", cue.file_stem(), ext));
        if candidate.is_file() {
            return Some(SoundSource::file(cue, candidate));
        }
    }
    None
}

/// Resolves the source for a cue.
///
/// Uses a file from `sounds_dir` when one exists, falling back to the
/// embedded cue data otherwise.
#[must_use]
pub fn resolve_sound(sounds_dir: Option<&Path>, cue: SoundCue) -> SoundSource {
    sounds_dir
        .and_then(|dir| find_cue_sound(dir, cue))
        .unwrap_or_else(|| SoundSource::embedded(cue))
}

// ============================================================================
// Tests
// ============================================================================
