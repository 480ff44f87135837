use crate::app::errors::{AppError, AppResult};
use std::process::{Command, Stdio};

#[cfg(target_os = "macos")]
const PASTE_COMMANDS: &[&[&str]] = &[&["pbpaste"]];

#[cfg(windows)]
const PASTE_COMMANDS: &[&[&str]] = &[&["powershell", "-NoProfile", "-Command", "Get-Clipboard"]];

#[cfg(all(unix, not(target_os = "macos")))]
const PASTE_COMMANDS: &[&[&str]] = &[
    &["wl-paste", "--no-newline"],
    &["xclip", "-selection", "clipboard", "-o"],
    &["xsel", "--clipboard", "--output"],
];

#[cfg(not(any(unix, windows)))]
const PASTE_COMMANDS: &[&[&str]] = &[];

/// Read the system clipboard as text.
///
/// Tries each platform paste tool in turn and uses the first that runs
/// successfully. Whitespace-only contents are an input error.
pub fn read_text() -> AppResult<String> {
    let mut last_error = None;

    for cmd in PASTE_COMMANDS {
        match run_paste(cmd) {
            Ok(text) => return non_empty(text),
            Err(e) => {
                log::debug!("{}: {e}", cmd[0]);
                last_error = Some(e);
            }
        }
    }

    Err(AppError::input(format!(
        "cannot read clipboard: {}",
        last_error.unwrap_or_else(|| "no paste tool for this platform".into())
    )))
}

fn run_paste(cmd: &[&str]) -> Result<String, String> {
    let output = Command::new(cmd[0])
        .args(&cmd[1..])
        .stdin(Stdio::null())
        .output()
        .map_err(|e| e.to_string())?;

    if !output.status.success() {
        return Err(format!(
            "{} exited with {}: {}",
            cmd[0],
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        ));
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

fn non_empty(text: String) -> AppResult<String> {
    if text.trim().is_empty() {
        Err(AppError::input("clipboard is empty"))
    } else {
        Ok(text)
    }
}
