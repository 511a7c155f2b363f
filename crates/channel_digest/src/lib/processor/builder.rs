use digest_store::RecordStore;

use crate::{processor::DEFAULT_MAX_VIDEOS, yt::ChannelLister, Summarizer, VideoDigestProcessor};

pub struct VideoDigestProcessorBuilder<L = (), S = (), D = ()> {
    channel_lister: L,
    summarizer: S,
    store: D,
    max_videos: usize,
}

impl VideoDigestProcessorBuilder {
    pub fn new() -> Self {
        Self {
            channel_lister: (),
            summarizer: (),
            store: (),
            max_videos: DEFAULT_MAX_VIDEOS,
        }
    }
}

impl Default for VideoDigestProcessorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<L, S, D> VideoDigestProcessorBuilder<L, S, D> {
    pub fn channel_lister<L2: ChannelLister>(
        self,
        channel_lister: L2,
    ) -> VideoDigestProcessorBuilder<L2, S, D> {
        VideoDigestProcessorBuilder {
            channel_lister,
            summarizer: self.summarizer,
            store: self.store,
            max_videos: self.max_videos,
        }
    }

    pub fn summarizer<S2: Summarizer>(self, summarizer: S2) -> VideoDigestProcessorBuilder<L, S2, D> {
        VideoDigestProcessorBuilder {
            channel_lister: self.channel_lister,
            summarizer,
            store: self.store,
            max_videos: self.max_videos,
        }
    }

    pub fn store<D2: RecordStore + Send + Sync>(
        self,
        store: D2,
    ) -> VideoDigestProcessorBuilder<L, S, D2> {
        VideoDigestProcessorBuilder {
            channel_lister: self.channel_lister,
            summarizer: self.summarizer,
            store,
            max_videos: self.max_videos,
        }
    }

    pub fn max_videos(mut self, max_videos: usize) -> Self {
        self.max_videos = max_videos;
        self
    }
}

impl<L, S, D> VideoDigestProcessorBuilder<L, S, D>
where
    L: ChannelLister,
    S: Summarizer,
    D: RecordStore + Send + Sync,
{
    pub fn build(self) -> VideoDigestProcessor<L, S, D> {
        VideoDigestProcessor {
            channel_lister: self.channel_lister,
            summarizer: self.summarizer,
            store: self.store,
            max_videos: self.max_videos,
        }
    }
}
