use eyre::{Result, bail};
use log::debug;
use serde::{Deserialize, Serialize};

const OEMBED_ENDPOINT: &str = "https://www.youtube.com/oembed";

/// Video metadata as reported by YouTube's oEmbed endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoMetadata {
    pub title: String,
    pub author_name: String,
    pub thumbnail_url: String,
}

/// Fetch title, channel, and thumbnail for a video via oEmbed.
///
/// Needs no API key. Fails for private, deleted, or never-existing videos;
/// syntactic validity of the ID does not imply the video exists.
pub async fn fetch_oembed(client: &reqwest::Client, video_id: &str) -> Result<VideoMetadata> {
    let watch_url = crate::canonical_url(video_id);
    debug!("Fetching oEmbed metadata for {video_id}");

    let resp = client
        .get(OEMBED_ENDPOINT)
        .query(&[("url", watch_url.as_str()), ("format", "json")])
        .send()
        .await?;

    if !resp.status().is_success() {
        let status = resp.status();
        bail!("oEmbed endpoint returned {status} for video {video_id}");
    }

    let metadata: VideoMetadata = resp.json().await?;
    Ok(metadata)
}
