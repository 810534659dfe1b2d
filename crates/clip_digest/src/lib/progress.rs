/// Sink for user-facing pipeline feedback. The rendering layer is one
/// implementation; [`TracingReporter`] is another.
pub trait Reporter: Send + Sync {
    /// Stage-level status label, emitted before each stage and on
    /// terminal states ("Downloading video...", "Transcription failed!").
    fn status(&self, label: &str);

    /// Byte-level download progress, `percent` in `0..=100`. Only
    /// emitted for URL-sourced media; the `100` event tells the sink
    /// to clear its indicator.
    fn progress(&self, percent: u8, label: &str);
}

/// Reporter that forwards everything to the tracing subscriber.
#[derive(Debug, Default, Clone)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn status(&self, label: &str) {
        tracing::info!(status = %label, "Pipeline status");
    }

    fn progress(&self, percent: u8, label: &str) {
        tracing::debug!(percent, label = %label, "Download progress");
    }
}
