use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

/// Every URL shape that can carry a video id, compiled once.
///
/// Capture group 1 is the id. The trailing group consumes one delimiter
/// character (or end of text) so that a 12-character token never yields
/// an 11-character prefix.
static VIDEO_URL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?x)
        (?i:https?://)?
        (?i:(?:www|m|music)\.)?
        (?:
            (?i:youtube\.com)/
            (?:
                (?i:watch)\?(?:[^\s\#]*?&(?:amp;)?)?v=
              | (?i:embed|shorts|live|v)/
            )
          | (?i:youtube-nocookie\.com/embed)/
          | (?i:youtu\.be)/
        )
        ([A-Za-z0-9_-]{11})
        (?:[^A-Za-z0-9_-]|$)
        ",
    )
    .expect("Failed to compile video url regex")
});

static VIDEO_ID_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]{11}$").expect("Failed to compile video id regex"));

/// An 11-character YouTube video identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct VideoId(String);

impl VideoId {
    /// Returns `None` unless `value` is exactly 11 characters from the id alphabet.
    pub fn parse(value: &str) -> Option<Self> {
        VIDEO_ID_REGEX
            .is_match(value)
            .then(|| Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Canonical short-form link, `https://youtu.be/<id>`.
    pub fn short_url(&self) -> String {
        format!("https://youtu.be/{}", self.0)
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Scan `text` for YouTube links and return their ids, first occurrence wins.
pub fn extract(text: &str) -> Vec<VideoId> {
    let mut seen = HashSet::new();
    let mut ids = Vec::new();

    for id in scan(text) {
        if seen.insert(id.clone()) {
            ids.push(id);
        }
    }

    ids
}

/// Merge id lists from several inputs, keeping global first-occurrence order.
pub fn merge(lists: impl IntoIterator<Item = Vec<VideoId>>) -> Vec<VideoId> {
    let mut seen = HashSet::new();
    lists
        .into_iter()
        .flatten()
        .filter(|id| seen.insert(id.clone()))
        .collect()
}

fn scan(text: &str) -> impl Iterator<Item = VideoId> + '_ {
    VIDEO_URL_REGEX.captures_iter(text).filter_map(move |caps| {
        let whole = caps.get(0)?;

        // "notyoutube.com/..." must not match as "youtube.com/..."; a match
        // that starts with its scheme cannot be the tail of another host
        let has_scheme = whole
            .as_str()
            .get(..4)
            .is_some_and(|s| s.eq_ignore_ascii_case("http"));
        let glued = !has_scheme
            && text[..whole.start()]
                .chars()
                .next_back()
                .is_some_and(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_');
        if glued {
            return None;
        }

        caps.get(1).map(|m| VideoId(m.as_str().to_string()))
    })
}

/// True when `text` contains at least one recognisable video link.
pub fn contains_video_link(text: &str) -> bool {
    scan(text).next().is_some()
}
