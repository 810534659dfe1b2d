/// Stage-level failure taxonomy. Each variant's `Display` is the
/// user-facing label the UI shows; the underlying collaborator error
/// is logged at the stage boundary rather than carried here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PipelineError {
    /// Download or upload did not produce a local media file.
    #[error("Media acquisition failed!")]
    Acquisition,
    /// Transcoding engine error or missing output.
    #[error("Audio extraction failed!")]
    Extraction,
    /// Missing/unreadable audio or empty model output.
    #[error("Transcription failed!")]
    Transcription,
    /// Empty transcript or generative-engine error.
    #[error("Summarization failed!")]
    Summarization,
}
