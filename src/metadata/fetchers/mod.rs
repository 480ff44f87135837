pub mod youtube;

use crate::app::errors::AppResult;
use crate::extract::VideoId;
use crate::metadata::types::VideoRecord;
use std::collections::HashMap;

pub use youtube::YouTubeFetcher;

/// A service that resolves video ids to metadata.
pub trait MetadataSource {
    /// Resolve `ids`. Ids the service has no usable data for are absent from
    /// the returned map; only whole-request failures are errors.
    fn fetch(&self, ids: &[VideoId], api_key: &str) -> AppResult<HashMap<VideoId, VideoRecord>>;

    /// Get the name of this source for logging
    fn name(&self) -> &'static str;
}
