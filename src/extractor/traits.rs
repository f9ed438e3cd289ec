use crate::extractor::models::VideoInfo;
use crate::utils::error::TubeserveError;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Core trait for media extraction engines
///
/// This trait isolates the request handlers from the specific engine
/// (yt-dlp today; anything that can resolve a URL to a media file).
#[async_trait]
pub trait Extractor: Send + Sync {
    /// Returns a unique identifier for this engine (e.g., "yt-dlp")
    fn id(&self) -> &'static str;

    /// Whether the engine is usable (its binary was found, etc.)
    fn ready(&self) -> bool {
        true
    }

    /// Fetches video metadata without downloading anything
    async fn probe(&self, url: &str) -> Result<VideoInfo, TubeserveError>;

    /// Resolves, downloads and muxes the media for `url` into `dest_dir`,
    /// using the engine format expression `format_expr`.
    ///
    /// Returns the path of the produced file.
    async fn fetch(
        &self,
        url: &str,
        format_expr: &str,
        dest_dir: &Path,
    ) -> Result<PathBuf, TubeserveError>;
}
