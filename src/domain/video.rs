use regex::Regex;
use url::Url;

const VIDEO_ID_LEN: usize = 11;

// An id candidate is anchored by "v=", "/shorts/" or a bare "/" and must be
// a terminated run: a 12th id character after the anchor disqualifies it.
const FALLBACK_PATTERN: &str = r"(?:v=|/shorts/|/)([A-Za-z0-9_-]{11})(?:[^A-Za-z0-9_-]|$)";

/// An 11-character YouTube video identifier.
///
/// Only ever built through [`VideoId::new`] or [`extract_video_id`], so a
/// value of this type is always exactly 11 characters of `A-Za-z0-9_-`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoId(String);

impl VideoId {
    pub fn new(candidate: &str) -> Option<Self> {
        let is_id_char = |c: char| c.is_ascii_alphanumeric() || c == '_' || c == '-';
        if candidate.len() == VIDEO_ID_LEN && candidate.chars().all(is_id_char) {
            Some(Self(candidate.to_string()))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for VideoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Extract a video id from any of the YouTube URL shapes.
///
/// Tries a structured parse first: the first path segment on `youtu.be`
/// hosts, the segment after `/shorts/`, else the `v` query parameter. If
/// that yields no valid id the raw string is scanned for an anchored
/// 11-character run. Malformed input never errors, it just returns `None`.
pub fn extract_video_id(input: &str) -> Option<VideoId> {
    let candidate = Url::parse(input)
        .ok()
        .and_then(|url| structured_candidate(&url));

    if let Some(id) = candidate.as_deref().and_then(VideoId::new) {
        return Some(id);
    }

    fallback_candidate(input)
}

fn structured_candidate(url: &Url) -> Option<String> {
    let host = url.host_str()?;

    if host.contains("youtu.be") {
        return url.path_segments()?.next().map(str::to_string);
    }

    if url.path().starts_with("/shorts/") {
        return url.path_segments()?.nth(1).map(str::to_string);
    }

    url.query_pairs()
        .find(|(key, _)| key == "v")
        .map(|(_, value)| value.to_string())
}

fn fallback_candidate(input: &str) -> Option<VideoId> {
    let re = Regex::new(FALLBACK_PATTERN).ok()?;
    re.captures(input)
        .and_then(|caps| caps.get(1))
        .and_then(|m| VideoId::new(m.as_str()))
}

/// Host check used to gate the submit button; extraction is stricter.
pub fn is_youtube_url(input: &str) -> bool {
    Url::parse(input)
        .ok()
        .and_then(|url| {
            url.host_str()
                .map(|host| host.contains("youtube.com") || host.contains("youtu.be"))
        })
        .unwrap_or(false)
}

/// Cleans pasted input the way the form field does: trim whitespace, cut
/// everything from the first `&`, cut a `?si=` share suffix.
pub fn normalize_url_input(input: &str) -> String {
    let cleaned = input.trim();
    let cleaned = cleaned.split_once('&').map_or(cleaned, |(head, _)| head);
    let cleaned = cleaned.split_once("?si=").map_or(cleaned, |(head, _)| head);
    cleaned.to_string()
}

/// Thumbnail location derived from the id alone, independent of whatever
/// the conversion API returns.
pub fn thumbnail_url(id: &VideoId) -> String {
    format!("https://img.youtube.com/vi/{}/hqdefault.jpg", id)
}
