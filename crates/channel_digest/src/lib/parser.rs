//! # Channel Listing Parser
//!
//! This module turns a user supplied channel reference into a URL yt-dlp can
//! list, and parses yt-dlp's flat playlist dump back into listing entries.

use std::{borrow::Cow, sync::LazyLock};

use regex::Regex;

use crate::{error::Error, types::FlatPlaylist, ListingEntry};

static CHANNEL_HANDLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^@?([A-Za-z0-9._-]+)$").unwrap());

const YOUTUBE_BASE_URL: &str = "https://www.youtube.com";

/// Resolves a channel reference to a listable URL.
///
/// Point references at a channel's `/videos` tab: a channel root URL makes
/// yt-dlp list the channel's tabs rather than its videos.
///
/// # Parameters
/// * `channel_reference`: A channel URL (with or without a scheme), a handle path such as
///   `@name/videos`, or a bare handle with or without the leading `@`.
///
/// # Returns
/// * `Ok(Cow::Borrowed(..))` if the reference already is a URL with a scheme.
/// * `Ok(Cow::Owned(..))` with the channel's `/videos` tab for a bare handle, the
///   youtube.com URL for a handle path, or an `https://` URL for a scheme-less host.
/// * `Err(Error::InvalidChannelReference)` if the reference is blank or contains whitespace.
pub fn normalize_channel_reference(channel_reference: &str) -> Result<Cow<'_, str>, Error> {
    let trimmed = channel_reference.trim();

    if trimmed.is_empty() || trimmed == "@" || trimmed.contains(char::is_whitespace) {
        return Err(Error::InvalidChannelReference(
            channel_reference.to_string(),
        ));
    }

    if trimmed.contains("://") {
        return Ok(Cow::Borrowed(trimmed));
    }

    if let Some(handle) = CHANNEL_HANDLE_RE.captures(trimmed).and_then(|cap| cap.get(1)) {
        return Ok(Cow::Owned(format!(
            "{YOUTUBE_BASE_URL}/@{}/videos",
            handle.as_str()
        )));
    }

    if trimmed.starts_with('@') {
        return Ok(Cow::Owned(format!("{YOUTUBE_BASE_URL}/{trimmed}")));
    }

    Ok(Cow::Owned(format!("https://{}", trimmed.trim_start_matches('/'))))
}

/// Parses the JSON document printed by `yt-dlp --flat-playlist --dump-single-json`.
///
/// Entries are returned in listing order. `null` entries are dropped; entries
/// missing an id or title are kept so the caller can account for them.
#[tracing::instrument(skip_all)]
pub fn parse_flat_playlist(json: &[u8]) -> Result<Vec<ListingEntry>, Error> {
    if json.iter().all(u8::is_ascii_whitespace) {
        return Err(Error::ParseError("yt-dlp produced no output"));
    }

    let playlist = serde_json::from_slice::<FlatPlaylist>(json)?;

    Ok(playlist.entries.into_iter().flatten().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_pass_through() {
        let url = "https://www.youtube.com/@zad-academy/videos";
        assert!(matches!(
            normalize_channel_reference(url),
            Ok(Cow::Borrowed(u)) if u == url
        ));
    }

    #[test]
    fn test_handles_expand_to_videos_tab() {
        assert_eq!(
            normalize_channel_reference("@zad-academy").unwrap(),
            "https://www.youtube.com/@zad-academy/videos"
        );
        assert_eq!(
            normalize_channel_reference(" zad.academy ").unwrap(),
            "https://www.youtube.com/@zad.academy/videos"
        );
    }

    #[test]
    fn test_scheme_less_urls_get_https() {
        assert_eq!(
            normalize_channel_reference("www.youtube.com/@zad-academy/videos").unwrap(),
            "https://www.youtube.com/@zad-academy/videos"
        );
        assert_eq!(
            normalize_channel_reference("youtube.com/@zad-academy").unwrap(),
            "https://youtube.com/@zad-academy"
        );
    }

    #[test]
    fn test_handle_paths_resolve_against_youtube() {
        assert_eq!(
            normalize_channel_reference("@zad-academy/videos").unwrap(),
            "https://www.youtube.com/@zad-academy/videos"
        );
        assert_eq!(
            normalize_channel_reference("@zad-academy/streams").unwrap(),
            "https://www.youtube.com/@zad-academy/streams"
        );
    }

    #[test]
    fn test_invalid_references_are_rejected() {
        for reference in ["", "   ", "not a handle", "@", "www.youtube.com/@zad academy"] {
            assert!(
                matches!(
                    normalize_channel_reference(reference),
                    Err(Error::InvalidChannelReference(_))
                ),
                "{reference:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_flat_playlist_keeps_order() {
        let json = br#"{
            "id": "UC123",
            "title": "Zad Academy - Videos",
            "_type": "playlist",
            "entries": [
                {"_type": "url", "id": "abc", "title": "Intro", "url": "https://www.youtube.com/watch?v=abc"},
                {"_type": "url", "id": "def", "title": "Part 2", "duration": 600.0}
            ]
        }"#;

        let entries = parse_flat_playlist(json).unwrap();
        assert_eq!(
            entries,
            vec![
                ListingEntry::new("abc", "Intro"),
                ListingEntry::new("def", "Part 2")
            ]
        );
    }

    #[test]
    fn test_parse_flat_playlist_tolerates_partial_entries() {
        let json = br#"{"entries": [null, {"id": "abc"}, {"title": "No id", "id": null}, {"id": "def", "title": "Ok"}]}"#;

        let entries = parse_flat_playlist(json).unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].title, None);
        assert_eq!(entries[1].id, None);
        assert_eq!(entries[2], ListingEntry::new("def", "Ok"));
    }

    #[test]
    fn test_parse_flat_playlist_without_entries() {
        let entries = parse_flat_playlist(br#"{"id": "abc", "title": "Single video"}"#).unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_parse_flat_playlist_rejects_garbage() {
        assert!(matches!(
            parse_flat_playlist(b"\n"),
            Err(Error::ParseError(_))
        ));
        assert!(matches!(
            parse_flat_playlist(b"{invalid: json}"),
            Err(Error::Json(_))
        ));
    }
}
