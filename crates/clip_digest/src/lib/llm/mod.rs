pub mod gemini;
pub mod openai;
pub mod summarizer;
pub mod transcriber;
