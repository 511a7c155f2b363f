use std::future::Future;

use crate::VideoRecord;

pub mod json_file;

pub trait RecordStore {
    /// Replaces whatever the store holds with `records`, in order.
    fn save_records(
        &self,
        records: &[VideoRecord],
    ) -> impl Future<Output = anyhow::Result<()>> + Send;
}

impl<T: RecordStore + Send + Sync> RecordStore for &T {
    async fn save_records(&self, records: &[VideoRecord]) -> anyhow::Result<()> {
        (**self).save_records(records).await
    }
}
