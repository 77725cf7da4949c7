use eyre::Result;
use serde::Serialize;

use crate::metadata::VideoMetadata;
use crate::{VideoUrlInfo, timestamped_url};

/// Render a parse result as human-readable text
pub fn render_text(info: &VideoUrlInfo, metadata: Option<&VideoMetadata>) -> String {
    if !info.is_valid {
        return format!("not a YouTube video reference: {}", info.original_input);
    }

    let mut lines = vec![
        format!("Video ID:  {}", info.video_id),
        format!("Canonical: {}", info.canonical_url),
    ];
    if let Some(start) = info.start_time {
        lines.push(format!("Start:     {start}s"));
        lines.push(format!("Jump link: {}", timestamped_url(&info.video_id, start)));
    }
    if let Some(ref playlist) = info.playlist_id {
        lines.push(format!("Playlist:  {playlist}"));
    }
    if let Some(meta) = metadata {
        lines.push(format!("Title:     {}", meta.title));
        lines.push(format!("Channel:   {}", meta.author_name));
        lines.push(format!("Thumbnail: {}", meta.thumbnail_url));
    }
    lines.join("\n")
}

#[derive(Serialize)]
struct Record<'a> {
    #[serde(flatten)]
    info: &'a VideoUrlInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    metadata: Option<&'a VideoMetadata>,
}

/// Render a parse result (plus optional oEmbed metadata) as pretty JSON
pub fn render_json(info: &VideoUrlInfo, metadata: Option<&VideoMetadata>) -> Result<String> {
    Ok(serde_json::to_string_pretty(&Record { info, metadata })?)
}

/// Render just the URL: canonical, or timestamped when a start was parsed
pub fn render_url(info: &VideoUrlInfo) -> String {
    match info.start_time {
        Some(start) => timestamped_url(&info.video_id, start),
        None => info.canonical_url.clone(),
    }
}
