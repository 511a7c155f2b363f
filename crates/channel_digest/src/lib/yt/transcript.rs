use itertools::Itertools;
use yt_transcript_rs::api::YouTubeTranscriptApi;

use crate::{error::TranscriptError, yt::TranscriptProvider, TranscriptEntry};

/// Caption retrieval backed by YouTube's transcript endpoints.
pub struct YtTranscriptProvider {
    api: YouTubeTranscriptApi,
}

impl YtTranscriptProvider {
    pub fn new() -> Result<Self, TranscriptError> {
        let api = YouTubeTranscriptApi::new(None, None, None)
            .map_err(|e| TranscriptError::Client(e.to_string()))?;

        Ok(YtTranscriptProvider { api })
    }
}

impl TranscriptProvider for YtTranscriptProvider {
    type Error = TranscriptError;

    async fn get(&self, video_id: &str, language: &str) -> Result<Vec<TranscriptEntry>, Self::Error> {
        let transcript = self
            .api
            .fetch_transcript(video_id, &[language], false)
            .await
            .map_err(|e| TranscriptError::Unavailable {
                video_id: video_id.to_string(),
                language: language.to_string(),
                reason: e.to_string(),
            })?;

        Ok(transcript
            .snippets
            .into_iter()
            .map(|snippet| TranscriptEntry::new(snippet.text))
            .collect())
    }
}

/// Plain-text view over a [`TranscriptProvider`].
#[derive(Debug, Clone)]
pub struct TranscriptSource<P> {
    provider: P,
}

impl<P: TranscriptProvider> TranscriptSource<P> {
    pub fn new(provider: P) -> Self {
        TranscriptSource { provider }
    }

    /// Returns the spoken text of the transcript, or `None` if the provider
    /// could not supply one. Failures are logged, never returned.
    #[tracing::instrument(skip(self))]
    pub async fn fetch(&self, video_id: &str, language: &str) -> Option<String> {
        let entries = self
            .provider
            .get(video_id, language)
            .await
            .inspect_err(|e| tracing::warn!(error = ?e, "Failed to fetch transcript"))
            .ok()?;

        Some(spoken_text(&entries))
    }
}

/// Joins the non-annotation entries with single spaces, in order.
pub fn spoken_text(entries: &[TranscriptEntry]) -> String {
    entries
        .iter()
        .filter(|entry| !entry.is_annotation())
        .map(|entry| entry.text.as_str())
        .join(" ")
}
