use serde::{Deserialize, Serialize};

/// One summarized video, as written to the output document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoRecord {
    pub title: String,
    pub url: String,
    /// Summary text, or the title when no summary could be produced
    pub content: String,
    pub reference: String,
}

impl VideoRecord {
    pub const YOUTUBE_VIDEO_BASE_URL: &str = "https://www.youtube.com/watch";

    /// Builds the record for `video_id`, falling back to `title` as the
    /// content when `summary` is absent or empty.
    pub fn new(
        video_id: &str,
        title: impl Into<String>,
        summary: Option<String>,
        reference: impl Into<String>,
    ) -> Self {
        let title = title.into();
        let content = summary
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| title.clone());

        VideoRecord {
            url: Self::watch_url(video_id),
            title,
            content,
            reference: reference.into(),
        }
    }

    pub fn watch_url(video_id: &str) -> String {
        format!("{}?v={}", Self::YOUTUBE_VIDEO_BASE_URL, video_id)
    }
}
