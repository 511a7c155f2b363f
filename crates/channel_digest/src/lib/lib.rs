pub mod error;
mod llm;
pub mod parser;
mod processor;
pub mod text;
pub mod tracing;
pub mod types;
pub mod yt;

pub use digest_store::{JsonFileStore, RecordStore, VideoRecord};
pub use llm::openai;
pub use llm::{
    completion::CompletionClient,
    summarizer::{Summarizer, TranscriptSummarizer},
};
pub use processor::{
    builder::VideoDigestProcessorBuilder, PipelineResult, VideoDigestProcessor, DEFAULT_MAX_VIDEOS,
};
pub use types::{ListingEntry, TranscriptEntry, Video};
pub use yt::transcript::TranscriptSource;
