pub mod downloader;
pub mod extractor;
pub mod reporter;
pub mod summarizer;
pub mod transcriber;
