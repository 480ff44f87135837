use crate::metadata::types::VideoRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Json,
    /// `- [title (m:ss)](https://youtu.be/id)`
    Markdown,
    /// Markdown plus ` - YYYY-MM-DD`.
    MarkdownExtended,
}

/// Render `records` newest first. Records with the same date keep their
/// relative order.
pub fn format_records(records: &[VideoRecord], mode: OutputFormat) -> String {
    let mut sorted: Vec<&VideoRecord> = records.iter().collect();
    sorted.sort_by(|a, b| b.published_at.cmp(&a.published_at));

    match mode {
        OutputFormat::Json => serde_json::to_string_pretty(&sorted)
            .expect("Video records have string keys and always serialize"),
        OutputFormat::Markdown => sorted
            .iter()
            .map(|r| markdown_link(r))
            .collect::<Vec<_>>()
            .join("\n"),
        OutputFormat::MarkdownExtended => sorted
            .iter()
            .map(|r| format!("{} - {}", markdown_link(r), r.published_at.format("%Y-%m-%d")))
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

fn markdown_link(record: &VideoRecord) -> String {
    format!(
        "- [{} ({})]({})",
        markdown_safe(&record.title),
        format_duration(record.duration),
        record.url
    )
}

/// Brackets in a title would end the link text early.
fn markdown_safe(title: &str) -> String {
    title.replace('[', "(").replace(']', ")")
}

/// `H:MM:SS` from one hour up, `M:SS` below.
pub fn format_duration(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;

    if hours > 0 {
        format!("{hours}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes}:{secs:02}")
    }
}
