use std::path::{Path, PathBuf};

use crate::media::AudioExtractor;

/// Extracts audio by shelling out to `ffmpeg` with fixed codec
/// parameters suited for speech recognition.
#[derive(Debug, Clone)]
pub struct FfmpegExtractor {
    ffmpeg_bin: PathBuf,
}

impl FfmpegExtractor {
    const SAMPLE_RATE: u32 = 16_000;

    pub fn new() -> Self {
        Self {
            ffmpeg_bin: PathBuf::from("ffmpeg"),
        }
    }

    pub fn with_binary(mut self, path: impl Into<PathBuf>) -> Self {
        self.ffmpeg_bin = path.into();
        self
    }
}

impl Default for FfmpegExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioExtractor for FfmpegExtractor {
    #[tracing::instrument(skip(self))]
    async fn extract(&self, video_path: &Path, audio_dest: &Path) -> anyhow::Result<PathBuf> {
        let output = tokio::process::Command::new(&self.ffmpeg_bin)
            .arg("-i")
            .arg(video_path)
            .args(["-vn", "-acodec", "pcm_s16le"])
            .args(["-ar", &Self::SAMPLE_RATE.to_string()])
            .args(["-ac", "1"])
            .arg("-y")
            .arg(audio_dest)
            .output()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to spawn ffmpeg"))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            anyhow::bail!(
                "ffmpeg exited with {}: {}",
                output.status,
                stderr.trim_end()
            );
        }

        if !audio_dest.exists() {
            anyhow::bail!(
                "ffmpeg did not produce expected file: {}",
                audio_dest.display()
            );
        }
        Ok(audio_dest.to_path_buf())
    }
}
