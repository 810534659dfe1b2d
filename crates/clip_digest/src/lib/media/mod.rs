pub mod downloader;
pub mod extractor;

use std::{
    future::Future,
    path::{Path, PathBuf},
};

use crate::progress::Reporter;

/// Fetches a remote media resource to a local path, reporting byte
/// progress through the caller's sink whenever the total size is known.
pub trait MediaDownloader {
    fn download(
        &self,
        url: &str,
        dest: &Path,
        reporter: &dyn Reporter,
    ) -> impl Future<Output = anyhow::Result<PathBuf>> + Send;
}

/// Transcodes a video file into a normalized audio file: mono,
/// 16-bit linear PCM, 16 kHz. Overwrites any pre-existing output.
pub trait AudioExtractor {
    fn extract(
        &self,
        video_path: &Path,
        audio_dest: &Path,
    ) -> impl Future<Output = anyhow::Result<PathBuf>> + Send;
}
