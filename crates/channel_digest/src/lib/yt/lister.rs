use std::{io::ErrorKind, path::PathBuf};

use crate::{
    error::Error,
    parser::{normalize_channel_reference, parse_flat_playlist},
    yt::ChannelLister,
    ListingEntry,
};

/// Lists channel videos by shelling out to `yt-dlp` in flat-playlist mode.
#[derive(Debug, Clone)]
pub struct YtDlpLister {
    binary: PathBuf,
}

impl YtDlpLister {
    const BINARY: &str = "yt-dlp";

    pub fn new(binary: impl Into<PathBuf>) -> Self {
        YtDlpLister {
            binary: binary.into(),
        }
    }
}

impl Default for YtDlpLister {
    fn default() -> Self {
        Self::new(Self::BINARY)
    }
}

impl ChannelLister for YtDlpLister {
    type Error = Error;

    /// Lists `channel_reference` flat. Pass a `/videos` URL (or a bare handle,
    /// which expands to one); a channel root URL lists its tabs instead.
    #[tracing::instrument(skip(self))]
    async fn list_videos(&self, channel_reference: &str) -> Result<Vec<ListingEntry>, Self::Error> {
        let url = normalize_channel_reference(channel_reference)?;

        let output = tokio::process::Command::new(&self.binary)
            .args(["--flat-playlist", "--dump-single-json", "--no-warnings"])
            .arg(&*url)
            .output()
            .await
            .map_err(|e| {
                if e.kind() == ErrorKind::NotFound {
                    Error::ToolNotFound(Self::BINARY)
                } else {
                    Error::Io(e)
                }
            })
            .inspect_err(|e| tracing::error!(error = ?e, "Failed to run yt-dlp"))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::ToolFailed(format!(
                "{} exited with {}: {}",
                Self::BINARY,
                output.status,
                stderr.trim()
            )));
        }

        let entries = parse_flat_playlist(&output.stdout)?;
        tracing::debug!(count = entries.len(), url = %url, "Listed channel entries");

        Ok(entries)
    }
}
