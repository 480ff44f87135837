use crate::{
    app::{self, errors::AppResult, ExtractionOptions},
    config::Config,
    format::format_records,
    metadata::{MetadataSource, YouTubeFetcher},
};

use super::Args;

pub fn handle_run(args: Args, config: &Config) -> AppResult<()> {
    let options = args.extraction_options();
    let fetcher = YouTubeFetcher::from_config(config);

    let output = render(&options, args.debug, &fetcher, config.api_key())?;

    if !output.is_empty() {
        println!("{output}");
    }

    Ok(())
}

/// Everything `handle_run` prints, computed before anything is written so
/// a fatal error leaves stdout untouched.
pub fn render(
    options: &ExtractionOptions,
    debug: bool,
    source: &dyn MetadataSource,
    api_key: &str,
) -> AppResult<String> {
    if debug {
        let ids = app::collect_ids(&options.source)?;
        return Ok(ids
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join("\n"));
    }

    let records = app::extract_and_fetch(options, source, api_key)?;
    Ok(format_records(&records, options.output_format))
}
