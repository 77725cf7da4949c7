pub mod cache;
pub mod config;
pub mod metadata;
pub mod output;
pub mod resolver;
pub mod timecode;

use serde::Serialize;

/// Everything extracted from one YouTube URL or bare video ID
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VideoUrlInfo {
    /// 11-character video ID, or empty when `is_valid` is false
    pub video_id: String,
    /// Start offset in whole seconds, if the input carried one
    pub start_time: Option<u64>,
    /// Verbatim `list` query parameter, if present
    pub playlist_id: Option<String>,
    pub is_valid: bool,
    /// The caller's input, untouched
    pub original_input: String,
    /// `https://www.youtube.com/watch?v=<id>` when valid, else the input
    pub canonical_url: String,
}

/// Canonical watch-page form of a video reference
pub fn canonical_url(video_id: &str) -> String {
    format!("https://www.youtube.com/watch?v={video_id}")
}

/// Watch-page URL that starts playback at `start_seconds`.
/// Does not check that `video_id` is well formed; that's the caller's job.
pub fn timestamped_url(video_id: &str, start_seconds: u64) -> String {
    format!("https://www.youtube.com/watch?v={video_id}&t={start_seconds}s")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_url() {
        assert_eq!(
            canonical_url("dQw4w9WgXcQ"),
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ"
        );
    }

    #[test]
    fn test_timestamped_url() {
        assert_eq!(
            timestamped_url("dQw4w9WgXcQ", 90),
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=90s"
        );
    }

    #[test]
    fn test_timestamped_url_zero() {
        assert_eq!(
            timestamped_url("dQw4w9WgXcQ", 0),
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=0s"
        );
    }
}
