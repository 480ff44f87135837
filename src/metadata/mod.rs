pub mod fetchers;
pub mod normalize;
pub mod types;

pub use fetchers::{MetadataSource, YouTubeFetcher};
pub use types::VideoRecord;
