use std::path::Path;

use serde::{Deserialize, Serialize};

/// User-facing summary length category, mapped to token bounds
/// passed to the generative engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SummaryLength {
    Short,
    #[default]
    Medium,
    Long,
}

impl SummaryLength {
    /// `(min, max)` token bounds embedded into the summarization prompt.
    pub fn token_bounds(&self) -> (u32, u32) {
        match self {
            SummaryLength::Short => (50, 150),
            SummaryLength::Medium => (100, 300),
            SummaryLength::Long => (200, 500),
        }
    }
}

/// Video extensions accepted for upload; anything else the UI rejects.
pub const VIDEO_EXTENSIONS: [&str; 4] = ["mp4", "avi", "mov", "mkv"];
pub const AUDIO_EXTENSION: &str = "mp3";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Audio,
    Video,
}

/// One media source per job. The CLI enforces mutual exclusivity.
#[derive(Debug, Clone)]
pub enum JobInput {
    Url(String),
    Upload { file_name: String, bytes: Vec<u8> },
}

impl JobInput {
    /// Classifies an uploaded file by its declared extension,
    /// case-insensitively. `mp3` is audio-only; everything else is
    /// treated as video.
    pub fn media_kind(file_name: &str) -> MediaKind {
        let ext = Path::new(file_name)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some(AUDIO_EXTENSION) => MediaKind::Audio,
            _ => MediaKind::Video,
        }
    }
}

#[derive(Debug, Clone)]
pub struct JobRequest {
    pub input: JobInput,
    pub length: SummaryLength,
}

/// Final artifacts of a successful job. No partial results exist;
/// a failed job yields a [`crate::PipelineError`] instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobResult {
    pub summary: String,
    pub transcript: String,
}
