use std::path::PathBuf;

use eyre::Result;
use log::debug;

use crate::metadata::VideoMetadata;

fn cache_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from(".cache"))
        .join("yturl")
        .join("oembed")
}

fn cache_path(video_id: &str) -> PathBuf {
    cache_dir().join(format!("{video_id}.json"))
}

/// Load cached metadata, if available.
pub fn load(video_id: &str) -> Option<VideoMetadata> {
    let path = cache_path(video_id);
    let data = std::fs::read_to_string(&path).ok()?;
    let metadata: VideoMetadata = serde_json::from_str(&data).ok()?;
    debug!("Cache hit: {}", path.display());
    Some(metadata)
}

/// Save metadata to the cache.
pub fn save(video_id: &str, metadata: &VideoMetadata) -> Result<()> {
    let path = cache_path(video_id);
    std::fs::create_dir_all(cache_dir())?;
    let data = serde_json::to_string_pretty(metadata)?;
    std::fs::write(&path, data)?;
    debug!("Cached oEmbed metadata: {}", path.display());
    Ok(())
}
