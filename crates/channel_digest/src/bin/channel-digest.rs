use std::{num::NonZeroUsize, path::PathBuf};

use anyhow::Context;
use clap::Parser;

use channel_digest::{
    openai::OpenAIClient,
    tracing::init_tracing_subscriber,
    yt::{lister::YtDlpLister, transcript::YtTranscriptProvider},
    CompletionClient, JsonFileStore, TranscriptSummarizer, VideoDigestProcessorBuilder,
};

#[derive(Parser)]
#[command(
    name = "channel-digest",
    about = "Summarize the latest videos of a YouTube channel"
)]
struct Cli {
    /// API key for the completion service
    #[arg(long, env = "GROQ_API_KEY", hide_env_values = true)]
    api_key: String,

    /// OpenAI-compatible API base URL
    #[arg(long, env = "LLM_BASE_URL", default_value = OpenAIClient::DEFAULT_BASE_URL)]
    base_url: String,

    /// Completion model identifier
    #[arg(long, env = "LLM_MODEL", default_value = <OpenAIClient as CompletionClient>::DEFAULT_MODEL)]
    model: String,

    /// Sampling temperature
    #[arg(long, env = "LLM_TEMPERATURE", default_value_t = OpenAIClient::DEFAULT_TEMPERATURE)]
    temperature: f32,

    /// Retries for transient completion failures
    #[arg(long, env = "LLM_MAX_RETRIES", default_value_t = OpenAIClient::DEFAULT_MAX_RETRIES)]
    max_retries: u32,

    /// Channel URL or handle, e.g. `@zad-academy`
    #[arg(long, env = "CHANNEL_URL")]
    channel: String,

    /// Label attached to every output record
    #[arg(long, env = "REFERENCE_LABEL")]
    reference: String,

    /// Maximum videos to process per run
    #[arg(long, env = "MAX_VIDEOS", default_value = "5")]
    max_videos: NonZeroUsize,

    /// Output JSON document
    #[arg(long, env = "OUTPUT_PATH", default_value = JsonFileStore::DEFAULT_PATH)]
    output: PathBuf,

    /// Transcript language code
    #[arg(long, env = "TRANSCRIPT_LANGUAGE", default_value = "en")]
    language: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    init_tracing_subscriber()?;

    let completion = OpenAIClient::new(cli.api_key)
        .with_base_url(cli.base_url)
        .with_model(cli.model)
        .with_temperature(cli.temperature)
        .with_max_retries(cli.max_retries);
    let transcripts =
        YtTranscriptProvider::new().context("Failed to initialize transcript client")?;

    let summarizer = TranscriptSummarizer::new(transcripts, completion).with_language(cli.language);

    let processor = VideoDigestProcessorBuilder::new()
        .channel_lister(YtDlpLister::default())
        .summarizer(summarizer)
        .store(JsonFileStore::new(cli.output))
        .max_videos(cli.max_videos.get())
        .build();

    let records = processor.run(&cli.channel, &cli.reference).await;
    tracing::info!(count = records.len(), "Finished processing channel");

    Ok(())
}
