use crate::app::errors::{AppError, AppResult};
use crate::config::Config;
use crate::extract::VideoId;
use crate::metadata::fetchers::MetadataSource;
use crate::metadata::normalize::{parse_iso8601_duration, parse_published_date};
use crate::metadata::types::VideoRecord;
use reqwest::StatusCode;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::time::Duration;

/// Hard limit of ids per `videos.list` call.
pub const MAX_BATCH_SIZE: usize = 50;

const USER_AGENT: &str = concat!("ytx/", env!("CARGO_PKG_VERSION"));
const PARTS: &str = "snippet,contentDetails,statistics";

const QUOTA_REASONS: &[&str] = &[
    "quotaExceeded",
    "dailyLimitExceeded",
    "rateLimitExceeded",
    "userRateLimitExceeded",
    "RATE_LIMIT_EXCEEDED",
];

const BAD_KEY_REASONS: &[&str] = &["keyInvalid", "keyExpired", "API_KEY_INVALID"];

#[derive(Debug, Deserialize)]
struct VideoListResponse {
    #[serde(default)]
    items: Vec<VideoItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VideoItem {
    id: Option<String>,
    snippet: Option<Snippet>,
    content_details: Option<ContentDetails>,
    statistics: Option<Statistics>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Snippet {
    title: Option<String>,
    channel_title: Option<String>,
    published_at: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ContentDetails {
    duration: Option<String>,
}

/// Counts arrive as decimal strings.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Statistics {
    view_count: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize, Default)]
struct ErrorBody {
    #[serde(default)]
    message: String,
    #[serde(default)]
    errors: Vec<ErrorReason>,
    #[serde(default)]
    details: Vec<ErrorReason>,
}

#[derive(Debug, Deserialize)]
struct ErrorReason {
    reason: Option<String>,
}

/// YouTube Data API v3 client for the `videos` endpoint.
pub struct YouTubeFetcher {
    base_url: String,
    timeout: Duration,
    batch_size: usize,
}

impl YouTubeFetcher {
    pub fn new(base_url: &str, timeout: Duration, batch_size: usize) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
            batch_size: batch_size.clamp(1, MAX_BATCH_SIZE),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            &config.api_base_url,
            Duration::from_secs(config.timeout_secs),
            config.batch_size,
        )
    }

    fn request_batch(
        &self,
        client: &reqwest::blocking::Client,
        batch: &[VideoId],
        api_key: &str,
    ) -> AppResult<VideoListResponse> {
        let ids = batch
            .iter()
            .map(VideoId::as_str)
            .collect::<Vec<_>>()
            .join(",");

        log::debug!("requesting {} ids from {}/videos", batch.len(), self.base_url);

        let resp = client
            .get(format!("{}/videos", self.base_url))
            .query(&[("part", PARTS), ("id", ids.as_str()), ("key", api_key)])
            .send()?;

        let status = resp.status();
        let body = resp.text()?;

        if !status.is_success() {
            let err = classify_error(status, &body);
            log::warn!("videos request failed with {status}: {err}");
            return Err(err);
        }

        serde_json::from_str(&body)
            .map_err(|e| AppError::network(format!("invalid response from videos endpoint: {e}")))
    }
}

impl MetadataSource for YouTubeFetcher {
    fn fetch(&self, ids: &[VideoId], api_key: &str) -> AppResult<HashMap<VideoId, VideoRecord>> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let api_key = api_key.trim();
        if api_key.is_empty() {
            return Err(AppError::auth(
                "API key missing (export YTX_API_KEY or set api_key in the config file)",
            ));
        }

        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(self.timeout)
            .build()?;

        let mut records = HashMap::with_capacity(ids.len());
        for batch in ids.chunks(self.batch_size) {
            let resp = self.request_batch(&client, batch, api_key)?;
            records.extend(records_from_response(resp, batch));
        }

        log::info!("fetcher={} resolved {}/{} ids", self.name(), records.len(), ids.len());

        Ok(records)
    }

    fn name(&self) -> &'static str {
        "YouTube"
    }
}

/// Keep only requested ids whose metadata is complete.
fn records_from_response(
    resp: VideoListResponse,
    requested: &[VideoId],
) -> HashMap<VideoId, VideoRecord> {
    let requested: HashSet<&str> = requested.iter().map(VideoId::as_str).collect();

    resp.items
        .into_iter()
        .filter_map(item_to_record)
        .filter(|record| requested.contains(record.id.as_str()))
        .map(|record| (record.id.clone(), record))
        .collect()
}

fn item_to_record(item: VideoItem) -> Option<VideoRecord> {
    let id = item.id.as_deref().and_then(VideoId::parse)?;

    let Some(snippet) = item.snippet else {
        log::debug!("{id}: dropped, no snippet");
        return None;
    };

    let Some(title) = snippet.title else {
        log::debug!("{id}: dropped, no title");
        return None;
    };

    let Some(published_at) = snippet.published_at.as_deref().and_then(parse_published_date) else {
        log::debug!("{id}: dropped, bad publishedAt {:?}", snippet.published_at);
        return None;
    };

    let raw_duration = item.content_details.and_then(|cd| cd.duration);
    let Some(duration) = raw_duration.as_deref().and_then(parse_iso8601_duration) else {
        log::debug!("{id}: dropped, bad duration {raw_duration:?}");
        return None;
    };

    let view_count = item
        .statistics
        .and_then(|s| s.view_count)
        .and_then(|v| v.parse::<u64>().ok());

    Some(
        VideoRecord::new(
            id,
            title,
            duration,
            published_at,
            snippet.channel_title.unwrap_or_default(),
        )
        .with_view_count(view_count),
    )
}

/// Map a non-success response to the error taxonomy.
fn classify_error(status: StatusCode, body: &str) -> AppError {
    let error = serde_json::from_str::<ErrorEnvelope>(body)
        .map(|e| e.error)
        .unwrap_or_default();

    let reasons: Vec<&str> = error
        .errors
        .iter()
        .chain(error.details.iter())
        .filter_map(|r| r.reason.as_deref())
        .collect();
    let has_reason = |wanted: &[&str]| reasons.iter().any(|r| wanted.contains(r));

    let message = if error.message.is_empty() {
        status.to_string()
    } else {
        error.message.clone()
    };

    if status == StatusCode::TOO_MANY_REQUESTS || has_reason(QUOTA_REASONS) {
        return AppError::quota(message);
    }

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => AppError::auth(message),
        StatusCode::BAD_REQUEST if has_reason(BAD_KEY_REASONS) || message.contains("API key") => {
            AppError::auth(message)
        }
        _ => AppError::network(format!("unexpected status {status}: {message}")),
    }
}
