mod cleanup;
mod error;
mod llm;
pub mod media;
mod pipeline;
pub mod progress;
pub mod tracing;
pub mod types;

pub use cleanup::remove_artifacts;
pub use error::PipelineError;
pub use llm::gemini;
pub use llm::openai;
pub use llm::{
    summarizer::{format_summary, summary_prompt, Summarizer, SummaryResponse},
    transcriber::{TranscribeResponse, Transcriber},
};
pub use pipeline::{builder::SummaryPipelineBuilder, SummaryPipeline};
