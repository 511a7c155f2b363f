use channel_digest::{yt::ChannelLister, ListingEntry};
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
pub struct MockChannelLister {
    pub entries: Vec<ListingEntry>,
    pub calls: Arc<Mutex<Vec<String>>>,
    pub fail_with: Option<String>,
}

impl MockChannelLister {
    pub fn new(entries: Vec<ListingEntry>) -> Self {
        Self {
            entries,
            ..Default::default()
        }
    }

    /// `count` complete entries with ids `vid0`, `vid1`, ...
    pub fn with_videos(count: usize) -> Self {
        Self::new(
            (0..count)
                .map(|i| ListingEntry::new(format!("vid{i}"), format!("Video {i}")))
                .collect(),
        )
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            fail_with: Some(msg.to_string()),
            ..Default::default()
        }
    }
}

impl ChannelLister for MockChannelLister {
    type Error = anyhow::Error;

    async fn list_videos(&self, channel_reference: &str) -> anyhow::Result<Vec<ListingEntry>> {
        self.calls
            .lock()
            .unwrap()
            .push(channel_reference.to_string());
        if let Some(ref msg) = self.fail_with {
            return Err(anyhow::anyhow!("{}", msg));
        }
        Ok(self.entries.clone())
    }
}
