use std::path::PathBuf;

use clap::{ArgGroup, Parser};
use clip_digest::{
    gemini::GeminiClient,
    media::{downloader::HttpDownloader, extractor::FfmpegExtractor},
    openai::OpenAiClient,
    progress::TracingReporter,
    tracing::init_tracing_subscriber,
    types::{JobInput, JobRequest, SummaryLength, AUDIO_EXTENSION, VIDEO_EXTENSIONS},
    SummaryPipelineBuilder,
};

#[derive(Parser)]
#[command(name = "clip-digest", about = "Video transcript and summary pipeline")]
#[command(group = ArgGroup::new("source").required(true))]
struct Cli {
    /// Video URL to download and summarize
    #[arg(long, group = "source")]
    url: Option<String>,

    /// Local media file to summarize (mp4, avi, mov, mkv, mp3)
    #[arg(long, group = "source")]
    file: Option<PathBuf>,

    /// Summary length category
    #[arg(long, value_enum, default_value = "medium")]
    length: SummaryLength,

    /// Gemini API key (summarization)
    #[arg(long, env = "GEMINI_API_KEY")]
    gemini_api_key: String,

    /// OpenAI API key (Whisper transcription)
    #[arg(long, env = "OPENAI_API_KEY")]
    openai_api_key: String,

    /// Working directory for temp media files
    #[arg(long, default_value = "/var/tmp/clip-digest")]
    workdir: PathBuf,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    init_tracing_subscriber()?;

    let input = match (cli.url, cli.file) {
        (Some(url), _) => JobInput::Url(url),
        (_, Some(path)) => {
            let file_name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .ok_or_else(|| anyhow::anyhow!("--file must point to a regular file"))?;
            let ext = path
                .extension()
                .and_then(|e| e.to_str())
                .map(|e| e.to_ascii_lowercase())
                .unwrap_or_default();
            if ext != AUDIO_EXTENSION && !VIDEO_EXTENSIONS.contains(&ext.as_str()) {
                anyhow::bail!(
                    "unsupported file type '.{ext}', expected one of: {}, {AUDIO_EXTENSION}",
                    VIDEO_EXTENSIONS.join(", ")
                );
            }
            let bytes = tokio::fs::read(&path).await?;
            JobInput::Upload { file_name, bytes }
        }
        _ => unreachable!("clap enforces exactly one source"),
    };

    let pipeline = SummaryPipelineBuilder::new(&cli.workdir)
        .downloader(HttpDownloader::new())
        .extractor(FfmpegExtractor::new())
        .transcriber(OpenAiClient::new(&cli.openai_api_key))
        .summarizer(GeminiClient::new(&cli.gemini_api_key))
        .reporter(TracingReporter)
        .build();

    let result = pipeline
        .run(JobRequest {
            input,
            length: cli.length,
        })
        .await?;

    println!("Transcript:\n{}\n", result.transcript);
    println!("Summary:\n{}", result.summary);

    Ok(())
}
