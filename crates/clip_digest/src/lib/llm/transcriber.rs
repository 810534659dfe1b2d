use std::{fmt::Debug, future::Future, path::Path};

use serde::Deserialize;

/// Speech-to-text boundary. Implementations use a fixed model
/// configuration; no language hint, default decoding.
pub trait Transcriber {
    const TRANSCRIBER_MODEL: &'static str;

    type Error: Debug;

    fn transcribe(
        &self,
        audio_path: &Path,
    ) -> impl Future<Output = Result<TranscribeResponse, Self::Error>> + Send;
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranscribeResponse {
    pub text: String,
}
