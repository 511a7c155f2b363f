use std::future::Future;

use crate::{text::truncate_words, yt::TranscriptProvider, CompletionClient, TranscriptSource};

pub trait Summarizer {
    /// Produces a short summary of the video's transcript, or `None` when no
    /// summary can be produced for any reason.
    fn summarize(&self, video_id: &str) -> impl Future<Output = Option<String>>;
}

/// Summarizes a video from its transcript: fetch, truncate, complete.
pub struct TranscriptSummarizer<P, C> {
    transcripts: TranscriptSource<P>,
    completion: C,
    language: String,
}

impl<P, C> TranscriptSummarizer<P, C>
where
    P: TranscriptProvider,
    C: CompletionClient,
{
    pub const DEFAULT_LANGUAGE: &'static str = "en";
    /// Transcripts are cut to this many words before prompting.
    pub const WORD_LIMIT: usize = 1000;
    const PROMPT_TEMPLATE: &'static str = include_str!("./prompts/summarize.txt");

    pub fn new(provider: P, completion: C) -> Self {
        TranscriptSummarizer {
            transcripts: TranscriptSource::new(provider),
            completion,
            language: Self::DEFAULT_LANGUAGE.into(),
        }
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn render_prompt(transcript: &str) -> String {
        Self::PROMPT_TEMPLATE
            .trim_end()
            .replace("{transcript}", transcript)
    }
}

impl<P, C> Summarizer for TranscriptSummarizer<P, C>
where
    P: TranscriptProvider,
    C: CompletionClient,
{
    #[tracing::instrument(skip(self), fields(language = %self.language))]
    async fn summarize(&self, video_id: &str) -> Option<String> {
        let Some(transcript) = self
            .transcripts
            .fetch(video_id, &self.language)
            .await
            .filter(|text| !text.trim().is_empty())
        else {
            tracing::warn!("Transcript not available");
            return None;
        };

        let truncated = truncate_words(&transcript, Self::WORD_LIMIT);
        let prompt = Self::render_prompt(&truncated);

        self.completion
            .complete(&prompt)
            .await
            .inspect_err(|e| tracing::error!(error = ?e, "Failed to generate summary"))
            .ok()
    }
}
