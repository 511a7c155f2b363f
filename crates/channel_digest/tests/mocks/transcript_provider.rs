use channel_digest::{yt::TranscriptProvider, TranscriptEntry};
use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

/// Serves canned transcripts; unknown video ids fail as if transcripts were disabled.
#[derive(Clone, Default)]
pub struct MockTranscriptProvider {
    pub transcripts: HashMap<String, Vec<String>>,
    pub calls: Arc<Mutex<Vec<(String, String)>>>,
}

impl MockTranscriptProvider {
    pub fn with_transcript(mut self, video_id: &str, entries: &[&str]) -> Self {
        self.transcripts.insert(
            video_id.to_string(),
            entries.iter().map(|e| e.to_string()).collect(),
        );
        self
    }
}

impl TranscriptProvider for MockTranscriptProvider {
    type Error = anyhow::Error;

    async fn get(&self, video_id: &str, language: &str) -> anyhow::Result<Vec<TranscriptEntry>> {
        self.calls
            .lock()
            .unwrap()
            .push((video_id.to_string(), language.to_string()));

        self.transcripts
            .get(video_id)
            .map(|entries| entries.iter().map(TranscriptEntry::new).collect())
            .ok_or_else(|| anyhow::anyhow!("Transcripts are disabled for {}", video_id))
    }
}
