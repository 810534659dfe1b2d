pub mod builder;

use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::{
    cleanup::remove_artifacts,
    error::PipelineError,
    format_summary,
    media::{AudioExtractor, MediaDownloader},
    progress::Reporter,
    types::{JobInput, JobRequest, JobResult, MediaKind},
    Summarizer, Transcriber,
};

// The core video summarization pipeline
pub struct SummaryPipeline<D, E, T, S, R>
where
    D: MediaDownloader + Send + Sync + 'static,
    E: AudioExtractor + Send + Sync + 'static,
    T: Transcriber + Send + Sync + 'static,
    S: Summarizer + Send + Sync + 'static,
    R: Reporter + 'static,
{
    pub(crate) workdir: PathBuf,
    pub(crate) downloader: D,
    pub(crate) extractor: E,
    pub(crate) transcriber: T,
    pub(crate) summarizer: S,
    pub(crate) reporter: R,
}

impl<D, E, T, S, R> SummaryPipeline<D, E, T, S, R>
where
    D: MediaDownloader + Send + Sync + 'static,
    E: AudioExtractor + Send + Sync + 'static,
    T: Transcriber + Send + Sync + 'static,
    S: Summarizer + Send + Sync + 'static,
    R: Reporter + 'static,
{
    const VIDEO_FILENAME: &'static str = "video.mp4";
    const AUDIO_FILENAME: &'static str = "audio.wav";

    /// Runs one job end to end. Every temp artifact created along the
    /// way is removed before this returns, on success and on every
    /// failure path alike.
    #[tracing::instrument(skip_all, fields(length = ?request.length))]
    pub async fn run(&self, request: JobRequest) -> Result<JobResult, PipelineError> {
        // namespace temp artifacts per job so concurrent jobs cannot
        // clobber each other's files
        let job_dir = self.workdir.join(Uuid::new_v4().to_string());
        let mut artifacts: Vec<PathBuf> = Vec::new();

        let result = self.run_stages(&request, &job_dir, &mut artifacts).await;

        remove_artifacts(artifacts.iter().map(PathBuf::as_path));
        match std::fs::remove_dir(&job_dir) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                tracing::warn!(error = %e, path = %job_dir.display(), "Failed to remove job directory")
            }
        }

        match &result {
            Ok(_) => self.reporter.status("Processing complete!"),
            Err(e) => tracing::error!(error = %e, "Pipeline failed"),
        }
        result
    }

    async fn run_stages(
        &self,
        request: &JobRequest,
        job_dir: &Path,
        artifacts: &mut Vec<PathBuf>,
    ) -> Result<JobResult, PipelineError> {
        let audio_path = match &request.input {
            JobInput::Url(url) => {
                let video_path = self.download(url, job_dir, artifacts).await?;
                self.extract(&video_path, job_dir, artifacts).await?
            }
            JobInput::Upload { file_name, bytes } => {
                match JobInput::media_kind(file_name) {
                    // mp3 uploads are already audio; extraction is skipped
                    MediaKind::Audio => self.store_upload(file_name, bytes, job_dir, artifacts)?,
                    MediaKind::Video => {
                        let video_path = self.store_upload(file_name, bytes, job_dir, artifacts)?;
                        self.extract(&video_path, job_dir, artifacts).await?
                    }
                }
            }
        };

        let transcript = self.transcribe(&audio_path).await?;
        let summary = self.summarize(&transcript, request).await?;

        Ok(JobResult {
            summary,
            transcript,
        })
    }

    #[tracing::instrument(skip(self, artifacts))]
    async fn download(
        &self,
        url: &str,
        job_dir: &Path,
        artifacts: &mut Vec<PathBuf>,
    ) -> Result<PathBuf, PipelineError> {
        self.reporter.status("Downloading video...");

        if let Err(e) = std::fs::create_dir_all(job_dir) {
            tracing::error!(error = %e, "Failed to create job directory");
            return Err(self.fail("Video download failed!", PipelineError::Acquisition));
        }

        let video_path = job_dir.join(Self::VIDEO_FILENAME);
        match self
            .downloader
            .download(url, &video_path, &self.reporter)
            .await
        {
            Ok(path) => {
                artifacts.push(path.clone());
                Ok(path)
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to download video");
                Err(self.fail("Video download failed!", PipelineError::Acquisition))
            }
        }
    }

    #[tracing::instrument(skip(self, bytes, artifacts))]
    fn store_upload(
        &self,
        file_name: &str,
        bytes: &[u8],
        job_dir: &Path,
        artifacts: &mut Vec<PathBuf>,
    ) -> Result<PathBuf, PipelineError> {
        let kind = JobInput::media_kind(file_name);
        let (status_label, failure_label, dest_name) = match kind {
            MediaKind::Audio => (
                "Processing uploaded audio...",
                "Audio upload failed!",
                "uploaded_audio.mp3".to_string(),
            ),
            MediaKind::Video => {
                let ext = Path::new(file_name)
                    .extension()
                    .and_then(|e| e.to_str())
                    .map(|e| e.to_ascii_lowercase())
                    .unwrap_or_else(|| "mp4".into());
                (
                    "Processing uploaded video...",
                    "Video upload failed!",
                    format!("uploaded_video.{ext}"),
                )
            }
        };
        self.reporter.status(status_label);

        let dest = job_dir.join(dest_name);
        let write = std::fs::create_dir_all(job_dir).and_then(|_| std::fs::write(&dest, bytes));
        if let Err(e) = write {
            tracing::error!(error = %e, path = %dest.display(), "Failed to store uploaded file");
            return Err(self.fail(failure_label, PipelineError::Acquisition));
        }

        artifacts.push(dest.clone());
        Ok(dest)
    }

    #[tracing::instrument(skip(self, artifacts))]
    async fn extract(
        &self,
        video_path: &Path,
        job_dir: &Path,
        artifacts: &mut Vec<PathBuf>,
    ) -> Result<PathBuf, PipelineError> {
        self.reporter.status("Extracting audio...");

        let audio_dest = job_dir.join(Self::AUDIO_FILENAME);
        match self.extractor.extract(video_path, &audio_dest).await {
            Ok(path) => {
                artifacts.push(path.clone());
                Ok(path)
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to extract audio");
                Err(self.fail("Audio extraction failed!", PipelineError::Extraction))
            }
        }
    }

    #[tracing::instrument(skip(self))]
    async fn transcribe(&self, audio_path: &Path) -> Result<String, PipelineError> {
        self.reporter.status("Transcribing audio...");

        if !audio_path.exists() {
            tracing::error!(path = %audio_path.display(), "Audio file not found for transcription");
            return Err(self.fail("Transcription failed!", PipelineError::Transcription));
        }

        match self.transcriber.transcribe(audio_path).await {
            Ok(resp) if !resp.text.is_empty() => Ok(resp.text),
            Ok(_) => {
                tracing::error!("Transcriber returned empty text");
                Err(self.fail("Transcription failed!", PipelineError::Transcription))
            }
            Err(e) => {
                tracing::error!(error = ?e, "Failed to transcribe audio");
                Err(self.fail("Transcription failed!", PipelineError::Transcription))
            }
        }
    }

    #[tracing::instrument(skip_all)]
    async fn summarize(
        &self,
        transcript: &str,
        request: &JobRequest,
    ) -> Result<String, PipelineError> {
        self.reporter.status("Summarizing text...");

        // a whitespace-only transcript never reaches the model
        if transcript.trim().is_empty() {
            tracing::error!("No transcript available to summarize");
            return Err(self.fail("Summarization failed!", PipelineError::Summarization));
        }

        match self.summarizer.summarize(transcript, request.length).await {
            Ok(resp) => Ok(format_summary(&resp.summary)),
            Err(e) => {
                tracing::error!(error = ?e, "Failed to summarize transcript");
                Err(self.fail("Summarization failed!", PipelineError::Summarization))
            }
        }
    }

    fn fail(&self, label: &str, error: PipelineError) -> PipelineError {
        self.reporter.status(label);
        error
    }
}
