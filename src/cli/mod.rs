use clap::Parser;

mod handlers;

pub use handlers::*;

use crate::app::{ExtractionOptions, InputSource};
use crate::format::OutputFormat;

/// Extract YouTube video links from text and list their metadata,
/// newest first.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// YouTube urls, or files containing them
    #[clap(conflicts_with = "clipboard", required_unless_present = "clipboard")]
    pub inputs: Vec<String>,

    /// Read input from the system clipboard
    #[clap(short, long, default_value = "false")]
    pub clipboard: bool,

    /// Print a Markdown link list
    #[clap(short, long, default_value = "false", conflicts_with = "extended")]
    pub markdown: bool,

    /// Print a Markdown link list with publish dates
    #[clap(short = 'x', long, default_value = "false")]
    pub extended: bool,

    /// Only print the extracted video ids.
    /// Nothing is fetched and no API key is needed.
    #[clap(short, long, default_value = "false")]
    pub debug: bool,
}

impl Args {
    pub fn output_format(&self) -> OutputFormat {
        if self.extended {
            OutputFormat::MarkdownExtended
        } else if self.markdown {
            OutputFormat::Markdown
        } else {
            OutputFormat::Json
        }
    }

    pub fn extraction_options(&self) -> ExtractionOptions {
        let source = if self.clipboard {
            InputSource::Clipboard
        } else {
            InputSource::Arguments(self.inputs.clone())
        };

        ExtractionOptions {
            source,
            output_format: self.output_format(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_json_from_arguments() {
        let args = Args::try_parse_from(["ytx", "https://youtu.be/dQw4w9WgXcQ", "links.txt"]).unwrap();
        let options = args.extraction_options();

        assert_eq!(options.output_format, OutputFormat::Json);
        assert_eq!(
            options.source,
            InputSource::Arguments(vec!["https://youtu.be/dQw4w9WgXcQ".into(), "links.txt".into()])
        );
    }

    #[test]
    fn test_markdown_flags() {
        let args = Args::try_parse_from(["ytx", "-m", "x"]).unwrap();
        assert_eq!(args.output_format(), OutputFormat::Markdown);

        let args = Args::try_parse_from(["ytx", "-x", "x"]).unwrap();
        assert_eq!(args.output_format(), OutputFormat::MarkdownExtended);

        assert!(Args::try_parse_from(["ytx", "-m", "-x", "x"]).is_err());
    }

    #[test]
    fn test_clipboard_excludes_arguments() {
        let args = Args::try_parse_from(["ytx", "-c"]).unwrap();
        assert_eq!(args.extraction_options().source, InputSource::Clipboard);

        assert!(Args::try_parse_from(["ytx", "-c", "https://youtu.be/dQw4w9WgXcQ"]).is_err());
    }

    #[test]
    fn test_input_required() {
        assert!(Args::try_parse_from(["ytx"]).is_err());
        assert!(Args::try_parse_from(["ytx", "-m"]).is_err());
    }
}
