use channel_digest::Summarizer;
use std::{
    collections::HashSet,
    sync::{Arc, Mutex},
};

/// Summarizes every video as `"summary of <id>"` except the ones told to fail.
#[derive(Clone, Default)]
pub struct MockSummarizer {
    pub failing_ids: HashSet<String>,
    pub calls: Arc<Mutex<Vec<String>>>,
}

impl MockSummarizer {
    pub fn failing_for(ids: &[&str]) -> Self {
        Self {
            failing_ids: ids.iter().map(|id| id.to_string()).collect(),
            ..Default::default()
        }
    }
}

impl Summarizer for MockSummarizer {
    async fn summarize(&self, video_id: &str) -> Option<String> {
        self.calls.lock().unwrap().push(video_id.to_string());
        if self.failing_ids.contains(video_id) {
            return None;
        }
        Some(format!("summary of {video_id}"))
    }
}
