use std::{
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use clip_digest::media::AudioExtractor;

#[derive(Clone)]
pub struct MockExtractor {
    pub calls: Arc<Mutex<Vec<PathBuf>>>,
    pub fail_with: Option<String>,
    pub side_file: Option<String>,
}

impl Default for MockExtractor {
    fn default() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
            side_file: None,
        }
    }
}

impl MockExtractor {
    pub fn failing(msg: &str) -> Self {
        Self {
            fail_with: Some(msg.to_string()),
            ..Default::default()
        }
    }

    /// Also drops an extra file next to the extracted audio, outside
    /// the pipeline's artifact tracking.
    pub fn with_side_file(name: &str) -> Self {
        Self {
            side_file: Some(name.to_string()),
            ..Default::default()
        }
    }
}

impl AudioExtractor for MockExtractor {
    async fn extract(&self, video_path: &Path, audio_dest: &Path) -> anyhow::Result<PathBuf> {
        self.calls.lock().unwrap().push(video_path.to_path_buf());
        if let Some(ref msg) = self.fail_with {
            return Err(anyhow::anyhow!("{}", msg));
        }
        std::fs::write(audio_dest, b"fake pcm audio")?;
        if let Some(ref name) = self.side_file {
            let dir = audio_dest.parent().expect("audio dest has a parent");
            std::fs::write(dir.join(name), b"untracked leftover")?;
        }
        Ok(audio_dest.to_path_buf())
    }
}
