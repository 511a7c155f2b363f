pub mod builder;

use digest_store::{RecordStore, VideoRecord};

use crate::{yt::ChannelLister, ListingEntry, Summarizer, Video};

/// Videos processed per run unless the builder is told otherwise.
pub const DEFAULT_MAX_VIDEOS: usize = 5;

/// Records produced by one run, in listing order.
pub type PipelineResult = Vec<VideoRecord>;

/// Drives one channel through listing, per-video summarization and persistence.
///
/// Videos are processed strictly one after another. A video that cannot be
/// summarized still yields a record, with its title as content.
#[derive(Debug)]
pub struct VideoDigestProcessor<L, S, D>
where
    L: ChannelLister,
    S: Summarizer,
    D: RecordStore + Send + Sync,
{
    channel_lister: L,
    summarizer: S,
    store: D,
    max_videos: usize,
}

impl<L, S, D> VideoDigestProcessor<L, S, D>
where
    L: ChannelLister,
    S: Summarizer,
    D: RecordStore + Send + Sync,
{
    pub fn max_videos(&self) -> usize {
        self.max_videos
    }

    /// Lists the channel, treating a listing failure as an empty channel.
    #[tracing::instrument(skip(self))]
    async fn list_entries(&self, channel_reference: &str) -> Vec<ListingEntry> {
        self.channel_lister
            .list_videos(channel_reference)
            .await
            .inspect_err(|e| tracing::error!(error = ?e, "Failed to list channel videos"))
            .unwrap_or_default()
    }

    /// Keeps the first `max_videos` complete entries. Incomplete entries are
    /// skipped and do not count against the cap.
    fn select_videos(entries: Vec<ListingEntry>, max_videos: usize) -> Vec<Video> {
        entries
            .into_iter()
            .filter_map(|entry| {
                let video = entry.clone().into_video();
                if video.is_none() {
                    tracing::warn!(entry = ?entry, "Incomplete video information; skipping");
                }
                video
            })
            .take(max_videos)
            .collect()
    }

    #[tracing::instrument(skip(self))]
    pub async fn run(&self, channel_reference: &str, reference_label: &str) -> PipelineResult {
        let entries = self.list_entries(channel_reference).await;
        if entries.is_empty() {
            tracing::info!("No videos found for the provided channel reference");
        }

        let videos = Self::select_videos(entries, self.max_videos);
        tracing::info!(count = videos.len(), "Processing videos");

        let mut records = Vec::with_capacity(videos.len());
        for Video { video_id, title } in videos {
            tracing::info!(video_id = %video_id, title = %title, "Processing video");

            let summary = self.summarizer.summarize(&video_id).await;
            if summary.is_none() {
                tracing::warn!(video_id = %video_id, "No summary produced; falling back to title");
            }

            records.push(VideoRecord::new(&video_id, title, summary, reference_label));
        }

        if let Err(e) = self.store.save_records(&records).await {
            tracing::error!(error = ?e, "Failed to persist video records");
        }

        records
    }
}
