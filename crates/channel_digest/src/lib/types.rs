use serde::Deserialize;

/// `yt-dlp --flat-playlist --dump-single-json` output, reduced to what the
/// pipeline reads.
#[derive(Debug, Deserialize)]
pub struct FlatPlaylist {
    #[serde(default)]
    pub entries: Vec<Option<ListingEntry>>,
}

/// A channel listing entry as reported by the lister. Either field may be
/// missing; see [`ListingEntry::into_video`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ListingEntry {
    pub id: Option<String>,
    pub title: Option<String>,
}

impl ListingEntry {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        ListingEntry {
            id: Some(id.into()),
            title: Some(title.into()),
        }
    }

    /// Returns `None` when the id or title is missing or blank.
    pub fn into_video(self) -> Option<Video> {
        let video_id = self.id.filter(|id| !id.trim().is_empty())?;
        let title = self.title.filter(|title| !title.trim().is_empty())?;
        Some(Video { video_id, title })
    }
}

/// A listing entry that carries both an id and a title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Video {
    pub video_id: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptEntry {
    pub text: String,
}

impl TranscriptEntry {
    pub fn new(text: impl Into<String>) -> Self {
        TranscriptEntry { text: text.into() }
    }

    /// Bracketed entries such as `[Music]` are non-speech markup.
    pub fn is_annotation(&self) -> bool {
        self.text.starts_with('[')
    }
}
