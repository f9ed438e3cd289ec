//! Tubeserve library

pub mod extractor;
pub mod server;
pub mod utils;

// Re-export main types for easier use
pub use extractor::{Extractor, Format, VideoInfo, YtDlpExtractor};
pub use server::{router, AppState};
pub use utils::{AppSettings, TubeserveError};
