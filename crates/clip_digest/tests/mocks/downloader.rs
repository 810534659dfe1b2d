use std::{
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use clip_digest::{media::MediaDownloader, progress::Reporter};

#[derive(Clone)]
pub struct MockDownloader {
    pub bytes: Vec<u8>,
    pub progress_steps: Vec<u8>,
    pub calls: Arc<Mutex<Vec<String>>>,
    pub fail_with: Option<String>,
}

impl Default for MockDownloader {
    fn default() -> Self {
        Self {
            bytes: b"fake video bytes".to_vec(),
            progress_steps: vec![12, 47, 81],
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }
}

impl MockDownloader {
    pub fn failing(msg: &str) -> Self {
        Self {
            fail_with: Some(msg.to_string()),
            ..Default::default()
        }
    }
}

impl MediaDownloader for MockDownloader {
    async fn download(
        &self,
        url: &str,
        dest: &Path,
        reporter: &dyn Reporter,
    ) -> anyhow::Result<PathBuf> {
        self.calls.lock().unwrap().push(url.to_string());
        if let Some(ref msg) = self.fail_with {
            return Err(anyhow::anyhow!("{}", msg));
        }
        for percent in &self.progress_steps {
            reporter.progress(*percent, &format!("Download Progress: {percent}%"));
        }
        std::fs::write(dest, &self.bytes)?;
        reporter.progress(100, "Download Progress: 100%");
        Ok(dest.to_path_buf())
    }
}
