//! Error handling for Tubeserve

use thiserror::Error;

/// Main error type for Tubeserve
#[derive(Debug, Error)]
pub enum TubeserveError {
    #[error("yt-dlp not found. Please install yt-dlp")]
    EngineNotFound,

    #[error("Invalid or unsupported URL: {0}")]
    InvalidUrl(String),

    #[error("Video unavailable: {0}")]
    VideoUnavailable(String),

    #[error("The video service is rate limiting requests. Try again later")]
    RateLimited,

    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to extract video info: {0}")]
    Extraction(String),

    #[error("File not found after download")]
    FileMissing,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Turn yt-dlp stderr output into a typed error.
///
/// yt-dlp reports failures as free text on stderr; a handful of
/// substrings reliably identify the interesting cases.
pub fn classify_engine_stderr(stderr: &str) -> TubeserveError {
    let lower = stderr.to_lowercase();
    let message = primary_error_line(stderr);

    if lower.contains("unsupported url") || lower.contains("is not a valid url") {
        return TubeserveError::InvalidUrl(message);
    }

    if lower.contains("video unavailable")
        || lower.contains("private video")
        || lower.contains("has been removed")
    {
        return TubeserveError::VideoUnavailable(message);
    }

    if lower.contains("429")
        || lower.contains("rate-limit")
        || lower.contains("sign in to confirm")
    {
        return TubeserveError::RateLimited;
    }

    if lower.contains("timed out")
        || lower.contains("timeout")
        || lower.contains("unable to download")
        || lower.contains("connection")
    {
        return TubeserveError::Network(message);
    }

    TubeserveError::Extraction(message)
}

/// Pick the most useful line of stderr: the first `ERROR:` line if
/// present, otherwise the first non-empty line.
fn primary_error_line(stderr: &str) -> String {
    let lines: Vec<&str> = stderr.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
    let line = lines
        .iter()
        .find(|l| l.starts_with("ERROR:"))
        .or_else(|| lines.first())
        .copied()
        .unwrap_or("yt-dlp failed without output");
    line.trim_start_matches("ERROR:").trim().to_string()
}
