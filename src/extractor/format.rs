//! Quality selection
//!
//! Maps the quality labels the front-end offers onto yt-dlp format
//! expressions, and derives which labels make sense for a given video.

use crate::extractor::models::Format;

/// Quality used when a request does not specify one
pub const DEFAULT_QUALITY: &str = "1080p";

/// Standard quality ladder offered by the front-end, highest first
const QUALITY_LADDER: [(&str, u32); 4] =
    [("1080p", 1080), ("720p", 720), ("480p", 480), ("360p", 360)];

/// Build the yt-dlp format expression for a quality label.
///
/// Known labels cap the video height; anything else falls back to
/// `best` rather than erroring.
pub fn format_expr(quality: &str) -> String {
    match ladder_height(quality) {
        Some(height) => format!(
            "bestvideo[height<={h}]+bestaudio/best[height<={h}]",
            h = height
        ),
        None => "best".to_string(),
    }
}

/// Quality labels from the standard ladder that the given formats can
/// actually satisfy. Heights are matched with a 10% tolerance since
/// extractors report values like 1072 or 406 for non-16:9 sources.
pub fn available_qualities(formats: &[Format]) -> Vec<String> {
    QUALITY_LADDER
        .iter()
        .filter(|(_, target)| {
            let min = target * 9 / 10;
            let max = target * 11 / 10;
            formats.iter().any(|f| {
                f.has_video() && f.height.map_or(false, |h| h >= min && h <= max)
            })
        })
        .map(|(label, _)| label.to_string())
        .collect()
}

fn ladder_height(quality: &str) -> Option<u32> {
    let height: u32 = quality.trim().trim_end_matches('p').parse().ok()?;
    QUALITY_LADDER
        .iter()
        .any(|(_, h)| *h == height)
        .then_some(height)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video_format(height: u32) -> Format {
        Format {
            format_id: format!("{}p", height),
            ext: "mp4".to_string(),
            vcodec: Some("avc1.640028".to_string()),
            acodec: Some("none".to_string()),
            width: Some(height * 16 / 9),
            height: Some(height),
            ..Default::default()
        }
    }

    fn audio_format() -> Format {
        Format {
            format_id: "140".to_string(),
            ext: "m4a".to_string(),
            vcodec: Some("none".to_string()),
            acodec: Some("mp4a.40.2".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn known_labels_cap_the_height() {
        assert_eq!(
            format_expr("720p"),
            "bestvideo[height<=720]+bestaudio/best[height<=720]"
        );
        // bare number works too
        assert_eq!(
            format_expr("1080"),
            "bestvideo[height<=1080]+bestaudio/best[height<=1080]"
        );
    }

    #[test]
    fn unknown_labels_fall_back_to_best() {
        assert_eq!(format_expr("4k"), "best");
        assert_eq!(format_expr("best"), "best");
        assert_eq!(format_expr(""), "best");
        assert_eq!(format_expr("144p"), "best");
    }

    #[test]
    fn available_qualities_follow_format_heights() {
        let formats = vec![
            video_format(1080),
            video_format(720),
            video_format(360),
            audio_format(),
        ];
        assert_eq!(available_qualities(&formats), vec!["1080p", "720p", "360p"]);
    }

    #[test]
    fn near_heights_match_with_tolerance() {
        // 4:3 source reporting 406 lines still counts as 360p
        let formats = vec![video_format(406)];
        assert_eq!(available_qualities(&formats), vec!["360p"]);
    }

    #[test]
    fn audio_only_yields_no_qualities() {
        assert!(available_qualities(&[audio_format()]).is_empty());
    }
}
