//! yt-dlp wrapper for video extraction
//!
//! This module drives the yt-dlp CLI: a metadata probe via `--dump-json`
//! and a fetch that lets yt-dlp download and mux into a scratch directory.

use crate::extractor::models::VideoInfo;
use crate::extractor::traits::Extractor;
use crate::utils::error::{classify_engine_stderr, TubeserveError};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::process::Command as AsyncCommand;
use tracing::{debug, error, info, warn};

/// Media extractor backed by the yt-dlp CLI
pub struct YtDlpExtractor {
    binary: Option<PathBuf>,
}

impl YtDlpExtractor {
    /// Initialize the extractor, locating yt-dlp if possible.
    ///
    /// A missing binary is not fatal here: the server still starts and
    /// every request surfaces `EngineNotFound` until yt-dlp is installed.
    pub fn new() -> Self {
        let binary = find_ytdlp();
        match &binary {
            Some(path) => info!("Found yt-dlp at: {}", path.display()),
            None => warn!("yt-dlp not found; extraction requests will fail"),
        }
        Self { binary }
    }

    /// Path of the yt-dlp binary in use, if one was found.
    pub fn binary_path(&self) -> Option<&Path> {
        self.binary.as_deref()
    }

    fn binary(&self) -> Result<&Path, TubeserveError> {
        self.binary.as_deref().ok_or(TubeserveError::EngineNotFound)
    }
}

impl Default for YtDlpExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Extractor for YtDlpExtractor {
    fn id(&self) -> &'static str {
        "yt-dlp"
    }

    fn ready(&self) -> bool {
        self.binary.is_some()
    }

    /// Extract video information without downloading
    /// Uses: yt-dlp --dump-json --no-download
    async fn probe(&self, url: &str) -> Result<VideoInfo, TubeserveError> {
        debug!("Probing video info for URL: {}", url);

        let output = AsyncCommand::new(self.binary()?)
            .arg("--dump-json")
            .arg("--no-download")
            .arg("--no-playlist")
            .arg("--no-warnings")
            .arg(url)
            .output()
            .await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            error!("yt-dlp probe failed: {}", stderr.trim());
            return Err(classify_engine_stderr(&stderr));
        }

        let json = String::from_utf8_lossy(&output.stdout);
        let info: VideoInfo = serde_json::from_str(json.trim())?;
        Ok(info)
    }

    /// Download and mux the media into `dest_dir`
    /// Uses: yt-dlp -f <expr> --merge-output-format mp4 -o <dest>/%(title)s.%(ext)s
    async fn fetch(
        &self,
        url: &str,
        format_expr: &str,
        dest_dir: &Path,
    ) -> Result<PathBuf, TubeserveError> {
        debug!(
            "Fetching {} with format expression {} into {}",
            url,
            format_expr,
            dest_dir.display()
        );

        let template = dest_dir.join("%(title)s.%(ext)s");
        let output = AsyncCommand::new(self.binary()?)
            .arg("-f")
            .arg(format_expr)
            .arg("--merge-output-format")
            .arg("mp4")
            .arg("--no-playlist")
            .arg("--no-warnings")
            .arg("-o")
            .arg(&template)
            .arg(url)
            .output()
            .await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            error!("yt-dlp fetch failed: {}", stderr.trim());
            return Err(classify_engine_stderr(&stderr));
        }

        resolve_produced_file(dest_dir).await
    }
}

/// Locate the single file yt-dlp produced in the scratch directory.
///
/// The merge step can change the extension (e.g. webm parts -> mp4), so
/// instead of guessing the final name we list the directory and take the
/// one regular file that is not a leftover `.part`.
async fn resolve_produced_file(dest_dir: &Path) -> Result<PathBuf, TubeserveError> {
    let mut entries = tokio::fs::read_dir(dest_dir).await?;
    let mut produced = None;

    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if !entry.file_type().await?.is_file() {
            continue;
        }
        if path.extension().map_or(false, |ext| ext == "part") {
            continue;
        }
        produced = Some(path);
    }

    produced.ok_or(TubeserveError::FileMissing)
}

// ============================================================
// yt-dlp Detection Functions
// ============================================================

/// Find the yt-dlp binary, checking PATH first and then common
/// installation locations.
pub fn find_ytdlp() -> Option<PathBuf> {
    if let Ok(path) = which::which("yt-dlp") {
        if path.exists() {
            return Some(path);
        }
    }

    let common_paths = [
        // Homebrew (Apple Silicon)
        "/opt/homebrew/bin/yt-dlp",
        // Homebrew (Intel) / manual install
        "/usr/local/bin/yt-dlp",
        // System package
        "/usr/bin/yt-dlp",
        // pip user install
        "~/.local/bin/yt-dlp",
    ];

    for path_str in common_paths {
        let expanded = if let Some(rest) = path_str.strip_prefix("~/") {
            match dirs::home_dir() {
                Some(home) => home.join(rest),
                None => continue,
            }
        } else {
            PathBuf::from(path_str)
        };

        if expanded.exists() && is_executable(&expanded) {
            return Some(expanded);
        }
    }

    None
}

/// Check if a file is executable
fn is_executable(path: &Path) -> bool {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;

        if let Ok(metadata) = std::fs::metadata(path) {
            return metadata.permissions().mode() & 0o111 != 0;
        }
        false
    }

    #[cfg(not(unix))]
    {
        path.exists()
    }
}

// ============================================================
// Tests
// ============================================================
