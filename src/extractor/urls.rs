//! Request URL validation
//!
//! The service only delegates URLs that look like YouTube video pages;
//! everything else is rejected before yt-dlp is ever spawned.

use url::Url;

const YOUTUBE_HOSTS: [&str; 4] = [
    "youtube.com",
    "youtu.be",
    "youtube-nocookie.com",
    "music.youtube.com",
];

/// True when `raw` parses as an http(s) URL on a YouTube host.
pub fn is_youtube_url(raw: &str) -> bool {
    let Ok(parsed) = Url::parse(raw) else {
        return false;
    };
    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return false;
    }
    let Some(host) = parsed.host_str() else {
        return false;
    };
    let host = host.strip_prefix("www.").unwrap_or(host);
    YOUTUBE_HOSTS
        .iter()
        .any(|known| host == *known || host.ends_with(&format!(".{}", known)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_video_urls() {
        assert!(is_youtube_url("https://www.youtube.com/watch?v=dQw4w9WgXcQ"));
        assert!(is_youtube_url("https://youtube.com/watch?v=dQw4w9WgXcQ"));
        assert!(is_youtube_url("https://youtu.be/dQw4w9WgXcQ"));
        assert!(is_youtube_url("https://m.youtube.com/watch?v=dQw4w9WgXcQ"));
        assert!(is_youtube_url("https://music.youtube.com/watch?v=abc"));
        assert!(is_youtube_url("http://www.youtube.com/shorts/abc123"));
    }

    #[test]
    fn rejects_other_hosts() {
        assert!(!is_youtube_url("https://vimeo.com/12345"));
        assert!(!is_youtube_url("https://example.com/watch?v=abc"));
        assert!(!is_youtube_url("https://notyoutube.com/watch?v=abc"));
        assert!(!is_youtube_url("https://youtube.com.evil.org/watch"));
    }

    #[test]
    fn rejects_non_http_schemes_and_garbage() {
        assert!(!is_youtube_url("ftp://youtube.com/watch?v=abc"));
        assert!(!is_youtube_url("file:///etc/passwd"));
        assert!(!is_youtube_url("not a url"));
        assert!(!is_youtube_url(""));
    }
}
