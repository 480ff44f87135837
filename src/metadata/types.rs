use crate::extract::VideoId;
use chrono::NaiveDate;
use serde::Serialize;

/// Metadata for one resolved video.
///
/// Field order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VideoRecord {
    pub id: VideoId,
    pub title: String,
    /// Whole seconds.
    pub duration: u64,
    /// Serialized as `YYYY-MM-DD`.
    pub published_at: NaiveDate,
    pub url: String,
    pub channel: String,
    /// `None` when the uploader hides statistics.
    pub view_count: Option<u64>,
}

impl VideoRecord {
    pub fn new(
        id: VideoId,
        title: impl Into<String>,
        duration: u64,
        published_at: NaiveDate,
        channel: impl Into<String>,
    ) -> Self {
        let url = id.short_url();
        Self {
            id,
            title: title.into(),
            duration,
            published_at,
            url,
            channel: channel.into(),
            view_count: None,
        }
    }

    pub fn with_view_count(mut self, view_count: Option<u64>) -> Self {
        self.view_count = view_count;
        self
    }
}
