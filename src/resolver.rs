use std::sync::LazyLock;

use log::debug;
use regex::Regex;
use reqwest::Url;

use crate::{VideoUrlInfo, canonical_url, timecode};

/// Recognized URL shapes, tried in order; the first structural match wins.
/// Each capture group must land on exactly 11 identifier characters.
const URL_SHAPES: [(&str, &str); 11] = [
    ("watch", r"(?i:(?:https?://)?(?:www\.)?youtube\.com)/watch\?v=([A-Za-z0-9_-]{11})"),
    ("short-link", r"(?i:(?:https?://)?youtu\.be)/([A-Za-z0-9_-]{11})"),
    ("embed", r"(?i:(?:https?://)?(?:www\.)?youtube\.com)/embed/([A-Za-z0-9_-]{11})"),
    ("mobile", r"(?i:(?:https?://)?m\.youtube\.com)/watch\?v=([A-Za-z0-9_-]{11})"),
    ("gaming", r"(?i:(?:https?://)?(?:www\.)?youtube\.com)/gaming/watch\?v=([A-Za-z0-9_-]{11})"),
    ("tv", r"(?i:(?:https?://)?(?:www\.)?youtube\.com)/tv/watch/([A-Za-z0-9_-]{11})"),
    ("music", r"(?i:(?:https?://)?music\.youtube\.com)/watch\?v=([A-Za-z0-9_-]{11})"),
    ("shorts", r"(?i:(?:https?://)?(?:www\.)?youtube\.com)/shorts/([A-Za-z0-9_-]{11})"),
    ("live", r"(?i:(?:https?://)?(?:www\.)?youtube\.com)/live/([A-Za-z0-9_-]{11})"),
    (
        "attribution-link",
        r"(?i:(?:https?://)?(?:www\.)?youtube\.com)/attribution_link\?.*v=([A-Za-z0-9_-]{11})",
    ),
    (
        "watch-extra-params",
        r"(?i:(?:https?://)?(?:www\.)?youtube\.com)/watch\?.*[&?]v=([A-Za-z0-9_-]{11})",
    ),
];

static SHAPES: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    URL_SHAPES
        .iter()
        .map(|(name, pattern)| {
            // An ID embedded in a longer identifier-alphabet run is not a match
            let re = Regex::new(&format!("{pattern}(?:[^A-Za-z0-9_-]|$)"))
                .expect("URL shape pattern must compile");
            (*name, re)
        })
        .collect()
});

static BARE_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]{11}$").expect("bare ID pattern must compile"));

static FALLBACK_TIME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[&?]t=([^&]+)").expect("time fallback pattern must compile"));

static FALLBACK_LIST_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[&?]list=([^&]+)").expect("list fallback pattern must compile"));

/// Extract the 11-character video ID from a URL in any recognized shape,
/// or from a bare ID. Returns `None` for anything else; foreign domains and
/// malformed text are expected inputs, not errors.
pub fn extract_video_id(input: &str) -> Option<String> {
    let input = input.trim();

    // Fast path for callers that already hold a known-good ID
    if BARE_ID_RE.is_match(input) {
        return Some(input.to_string());
    }

    for (name, re) in SHAPES.iter() {
        if let Some(caps) = re.captures(input) {
            debug!("input matched {name} URL shape");
            return Some(caps[1].to_string());
        }
    }

    None
}

/// Parse an arbitrary string into a full [`VideoUrlInfo`].
/// Never fails: unrecognized input yields `is_valid: false`.
pub fn parse(input: &str) -> VideoUrlInfo {
    let trimmed = input.trim();
    let video_id = extract_video_id(trimmed);

    // Bare IDs never carry auxiliary metadata, so only look at the query
    // string when there is one
    let (start_time, playlist_id) = match video_id {
        Some(_) if trimmed.contains('?') => query_metadata(trimmed),
        _ => (None, None),
    };

    match video_id {
        Some(id) => VideoUrlInfo {
            canonical_url: canonical_url(&id),
            video_id: id,
            start_time,
            playlist_id,
            is_valid: true,
            original_input: input.to_string(),
        },
        None => VideoUrlInfo {
            video_id: String::new(),
            start_time: None,
            playlist_id: None,
            is_valid: false,
            original_input: input.to_string(),
            canonical_url: input.to_string(),
        },
    }
}

/// True iff the input identifies a YouTube video
pub fn is_valid(input: &str) -> bool {
    extract_video_id(input).is_some()
}

/// Canonical `https://www.youtube.com/watch?v=<id>` form, or `None` when the
/// input does not identify a video
pub fn normalize(input: &str) -> Option<String> {
    extract_video_id(input).map(|id| canonical_url(&id))
}

/// Pull start time and playlist ID out of the query string. Structured URL
/// parse first, regex over the raw string when the input is not a well-formed
/// URL.
fn query_metadata(input: &str) -> (Option<u64>, Option<String>) {
    let parsed = Url::parse(input).or_else(|_| Url::parse(&format!("https://{input}")));

    match parsed {
        Ok(url) => {
            let mut t_param = None;
            let mut start_param = None;
            let mut playlist = None;
            for (key, value) in url.query_pairs() {
                match key.as_ref() {
                    "t" if t_param.is_none() => t_param = Some(value.into_owned()),
                    "start" if start_param.is_none() => start_param = Some(value.into_owned()),
                    "list" if playlist.is_none() => playlist = Some(value.into_owned()),
                    _ => {}
                }
            }
            // `t` wins over `start`; an unparsable value is dropped, not an error
            let start_time = t_param
                .or(start_param)
                .and_then(|v| timecode::parse_time_param(&v));
            (start_time, playlist)
        }
        Err(_) => fallback_query_metadata(input),
    }
}

fn fallback_query_metadata(input: &str) -> (Option<u64>, Option<String>) {
    let start_time = FALLBACK_TIME_RE
        .captures(input)
        .and_then(|caps| timecode::parse_time_param(&caps[1]));
    let playlist = FALLBACK_LIST_RE
        .captures(input)
        .map(|caps| caps[1].to_string());
    (start_time, playlist)
}
