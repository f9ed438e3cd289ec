pub mod format;
pub mod models;
pub mod traits;
pub mod urls;
pub mod ytdlp;

pub use format::{available_qualities, format_expr, DEFAULT_QUALITY};
pub use models::{Format, VideoInfo};
pub use traits::Extractor;
pub use urls::is_youtube_url;
pub use ytdlp::YtDlpExtractor;
