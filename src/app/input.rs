use crate::app::errors::{AppError, AppResult};
use crate::extract;
use std::path::Path;

/// Text to scan for one positional argument.
///
/// An existing file is read whole. Anything else must either contain a
/// video link or be an absolute http(s) url; a url without links is valid
/// and simply yields no ids.
pub fn argument_text(arg: &str) -> AppResult<String> {
    let path = Path::new(arg);

    if path.is_dir() {
        return Err(AppError::input(format!("{arg}: is a directory")));
    }

    if path.is_file() {
        log::debug!("{arg}: reading file");
        return std::fs::read_to_string(path).map_err(|e| match AppError::from(e) {
            AppError::Input(message) => AppError::input(format!("{arg}: {message}")),
            other => other,
        });
    }

    if extract::contains_video_link(arg) || is_web_url(arg) {
        return Ok(arg.to_string());
    }

    Err(AppError::input(format!(
        "{arg:?} is neither a URL nor an existing file"
    )))
}

fn is_web_url(arg: &str) -> bool {
    url::Url::parse(arg.trim())
        .map(|u| matches!(u.scheme(), "http" | "https") && u.host_str().is_some())
        .unwrap_or(false)
}
