use channel_digest::{RecordStore, VideoRecord};
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
pub struct MockRecordStore {
    /// One element per `save_records` call
    pub saved: Arc<Mutex<Vec<Vec<VideoRecord>>>>,
    pub fail_with: Option<String>,
}

impl MockRecordStore {
    pub fn failing(msg: &str) -> Self {
        Self {
            fail_with: Some(msg.to_string()),
            ..Default::default()
        }
    }
}

impl RecordStore for MockRecordStore {
    async fn save_records(&self, records: &[VideoRecord]) -> anyhow::Result<()> {
        self.saved.lock().unwrap().push(records.to_vec());
        if let Some(ref msg) = self.fail_with {
            return Err(anyhow::anyhow!("{}", msg));
        }
        Ok(())
    }
}
