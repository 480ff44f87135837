pub mod errors;
pub mod input;

use crate::clipboard;
use crate::extract::{self, VideoId};
use crate::format::OutputFormat;
use crate::metadata::{MetadataSource, VideoRecord};
use errors::AppResult;

/// Where the text to scan comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Clipboard,
    /// Urls, file paths, or a mix.
    Arguments(Vec<String>),
}

#[derive(Debug, Clone)]
pub struct ExtractionOptions {
    pub source: InputSource,
    pub output_format: OutputFormat,
}

/// Extract ids from every input, deduplicated across inputs.
pub fn collect_ids(source: &InputSource) -> AppResult<Vec<VideoId>> {
    let lists = match source {
        InputSource::Clipboard => vec![extract::extract(&clipboard::read_text()?)],
        InputSource::Arguments(args) => args
            .iter()
            .map(|arg| -> AppResult<Vec<VideoId>> {
                let ids = extract::extract(&input::argument_text(arg)?);
                log::info!("{arg}: {} ids", ids.len());
                Ok(ids)
            })
            .collect::<AppResult<Vec<_>>>()?,
    };

    Ok(extract::merge(lists))
}

/// Resolve `ids` through `source`, keeping extraction order and dropping
/// ids the service did not return.
pub fn fetch_records(
    ids: &[VideoId],
    source: &dyn MetadataSource,
    api_key: &str,
) -> AppResult<Vec<VideoRecord>> {
    let mut resolved = source.fetch(ids, api_key)?;

    let records: Vec<VideoRecord> = ids.iter().filter_map(|id| resolved.remove(id)).collect();

    if records.len() < ids.len() {
        log::info!(
            "{} of {} ids returned no usable metadata",
            ids.len() - records.len(),
            ids.len()
        );
    }

    Ok(records)
}

/// The whole pipeline short of rendering.
pub fn extract_and_fetch(
    options: &ExtractionOptions,
    source: &dyn MetadataSource,
    api_key: &str,
) -> AppResult<Vec<VideoRecord>> {
    let ids = collect_ids(&options.source)?;
    fetch_records(&ids, source, api_key)
}
