#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Parse error: {0}")]
    ParseError(&'static str),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid channel reference: {0:?}")]
    InvalidChannelReference(String),
    #[error("External tool not found: {0}. Please install it and ensure it's in your PATH.")]
    ToolNotFound(&'static str),
    #[error("External tool failed: {0}")]
    ToolFailed(String),
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptError {
    #[error("Transcript client setup failed: {0}")]
    Client(String),
    #[error("Transcript unavailable for {video_id} ({language}): {reason}")]
    Unavailable {
        video_id: String,
        language: String,
        reason: String,
    },
}
