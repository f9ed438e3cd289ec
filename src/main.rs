//! Tubeserve - web front-end for yt-dlp
//!
//! Serves a small page that accepts a video URL and a quality, hands the
//! actual extraction to yt-dlp, and streams the fetched file back.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use tubeserve::extractor::{Extractor, YtDlpExtractor, DEFAULT_QUALITY};
use tubeserve::utils::{paths, AppSettings};

#[derive(Parser)]
#[command(name = "tubeserve", about = "Web front-end for yt-dlp video fetching")]
struct Args {
    /// Address to listen on
    #[arg(long, env = "TUBESERVE_BIND", default_value = "127.0.0.1:5000")]
    bind: String,

    /// Root directory for fetched files
    #[arg(long, env = "TUBESERVE_DOWNLOADS")]
    downloads_dir: Option<PathBuf>,

    /// Quality used when a request does not specify one
    #[arg(long, default_value = DEFAULT_QUALITY)]
    default_quality: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = AppSettings {
        bind_address: args.bind,
        downloads_root: args
            .downloads_dir
            .unwrap_or_else(|| AppSettings::default().downloads_root),
        default_quality: args.default_quality,
    };

    info!(
        version = env!("CARGO_PKG_VERSION"),
        bind_address = %settings.bind_address,
        downloads_root = %settings.downloads_root.display(),
        "tubeserve starting"
    );

    paths::ensure_downloads_root(&settings.downloads_root).await?;

    let extractor = YtDlpExtractor::new();
    if !extractor.ready() {
        // Keep serving; requests will report the missing engine.
        warn!("yt-dlp not found in PATH or common locations");
        warn!("The server will run, but extraction requests will fail.");
        warn!("Install it with: pip install yt-dlp  (or: brew install yt-dlp)");
    }

    tubeserve::server::serve(settings, Arc::new(extractor) as Arc<dyn Extractor>).await
}
