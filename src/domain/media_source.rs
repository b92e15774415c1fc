use std::path::{Path, PathBuf};

/// Coarse classification of an uploaded file, decided once from its
/// extension. Anything that is not a known video container is handed to the
/// transcription engine as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Video,
    Audio,
}

impl MediaKind {
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match ext.as_deref() {
            Some("mp4" | "m4v" | "mov" | "avi" | "mkv" | "webm" | "mpg" | "mpeg" | "wmv"
            | "flv" | "ts") => Self::Video,
            _ => Self::Audio,
        }
    }
}

/// The audio input for one request: either the upload itself, or a track
/// extracted from a video upload. Exactly one variant exists per request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaSource {
    RawAudio {
        audio: PathBuf,
    },
    ExtractedAudio {
        audio: PathBuf,
        source_video: PathBuf,
    },
}

impl MediaSource {
    pub fn audio_path(&self) -> &Path {
        match self {
            Self::RawAudio { audio } => audio,
            Self::ExtractedAudio { audio, .. } => audio,
        }
    }
}
