pub mod lister;
pub mod transcript;

use std::{fmt::Debug, future::Future};

use crate::{ListingEntry, TranscriptEntry};

pub trait ChannelLister {
    type Error: Debug;

    /// Lists the channel's videos in channel order, without descending into
    /// nested playlists or channels.
    fn list_videos(
        &self,
        channel_reference: &str,
    ) -> impl Future<Output = Result<Vec<ListingEntry>, Self::Error>>;
}

pub trait TranscriptProvider {
    type Error: Debug;

    /// Fetches the caption entries for `video_id` in exactly `language`.
    fn get(
        &self,
        video_id: &str,
        language: &str,
    ) -> impl Future<Output = Result<Vec<TranscriptEntry>, Self::Error>>;
}
