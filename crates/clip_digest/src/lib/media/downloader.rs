use std::path::{Path, PathBuf};

use futures::StreamExt;
use tokio::io::AsyncWriteExt;

use crate::{media::MediaDownloader, progress::Reporter};

/// Streaming HTTP downloader. Progress percent is derived from the
/// response's `Content-Length` when present; without it only the
/// final 100% event is emitted.
#[derive(Debug, Clone)]
pub struct HttpDownloader {
    client: reqwest::Client,
}

impl HttpDownloader {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for HttpDownloader {
    fn default() -> Self {
        Self::new()
    }
}

impl MediaDownloader for HttpDownloader {
    #[tracing::instrument(skip(self, reporter))]
    async fn download(
        &self,
        url: &str,
        dest: &Path,
        reporter: &dyn Reporter,
    ) -> anyhow::Result<PathBuf> {
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to make http request"))?
            .error_for_status()?;

        let total_bytes = resp.content_length().unwrap_or(0);
        let mut downloaded_bytes = 0u64;
        let mut last_percent = 0u8;

        let mut file = tokio::fs::File::create(dest).await?;
        let mut stream = resp.bytes_stream();

        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            file.write_all(&chunk).await?;
            downloaded_bytes += chunk.len() as u64;

            if total_bytes > 0 {
                let percent = ((downloaded_bytes * 100) / total_bytes).min(100) as u8;
                // keep the reported percent monotonically non-decreasing
                if percent > last_percent {
                    last_percent = percent;
                    reporter.progress(percent, &format!("Download Progress: {percent}%"));
                }
            }
        }
        file.flush().await?;

        reporter.progress(100, "Download Progress: 100%");

        if !dest.exists() {
            anyhow::bail!("download did not produce expected file: {}", dest.display());
        }
        Ok(dest.to_path_buf())
    }
}
