//! Data structures for video information

use serde::{Deserialize, Serialize};

/// Video information as reported by yt-dlp's `--dump-json`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoInfo {
    pub id: String,
    pub title: String,
    /// Canonical video page URL. The engine also emits a top-level
    /// `url` (the resolved media URL) for some videos; only the page
    /// URL is wanted here.
    #[serde(rename = "webpage_url")]
    pub url: String,
    /// Duration in seconds. yt-dlp emits integers for most extractors
    /// and floats for some, so this stays an f64.
    #[serde(default)]
    pub duration: Option<f64>,
    pub thumbnail: Option<String>,
    pub uploader: Option<String>,
    #[serde(default)]
    pub formats: Vec<Format>,
}

/// Video format information
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Format {
    pub format_id: String,
    #[serde(default)]
    pub ext: String,
    pub vcodec: Option<String>,
    pub acodec: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    #[serde(default)]
    pub filesize: Option<u64>,
    pub format_note: Option<String>,
}

impl Format {
    /// True when the format carries a video stream.
    pub fn has_video(&self) -> bool {
        self.vcodec
            .as_deref()
            .map_or(false, |v| v != "none" && !v.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_dump_json() {
        let json = r#"{
            "id": "dQw4w9WgXcQ",
            "title": "Sample Video",
            "webpage_url": "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
            "duration": 212,
            "thumbnail": "https://i.ytimg.com/vi/dQw4w9WgXcQ/hq720.jpg",
            "uploader": "Sample Channel",
            "formats": [
                {"format_id": "137", "ext": "mp4", "vcodec": "avc1.640028", "acodec": "none", "height": 1080, "width": 1920},
                {"format_id": "140", "ext": "m4a", "vcodec": "none", "acodec": "mp4a.40.2"}
            ],
            "extractor": "youtube",
            "view_count": 123456
        }"#;

        let info: VideoInfo = serde_json::from_str(json).expect("parse");
        assert_eq!(info.id, "dQw4w9WgXcQ");
        assert_eq!(info.duration, Some(212.0));
        assert_eq!(info.formats.len(), 2);
        assert!(info.formats[0].has_video());
        assert!(!info.formats[1].has_video());
    }

    #[test]
    fn missing_optional_fields_default() {
        let json = r#"{"id": "x", "title": "t", "webpage_url": "https://youtu.be/x"}"#;
        let info: VideoInfo = serde_json::from_str(json).expect("parse");
        assert!(info.duration.is_none());
        assert!(info.thumbnail.is_none());
        assert!(info.formats.is_empty());
    }

    #[test]
    fn fractional_duration_is_accepted() {
        let json = r#"{"id": "x", "title": "t", "webpage_url": "https://youtu.be/x", "duration": 61.5}"#;
        let info: VideoInfo = serde_json::from_str(json).expect("parse");
        assert_eq!(info.duration, Some(61.5));
    }
}
