use clap::builder::NonEmptyStringValueParser;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pdfind")]
#[command(about = "Search PDF files for text, grep style")]
#[command(version)]
pub struct Cli {
    /// Text to search for (case insensitive)
    #[arg(value_parser = NonEmptyStringValueParser::new())]
    pub pattern: String,

    /// PDF files or directories to search
    #[arg(default_value = ".")]
    pub paths: Vec<PathBuf>,

    /// Highlight matches (`--color` alone means true)
    #[arg(
        long,
        default_value_t = true,
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub color: bool,

    /// Characters of context to show on each side of a match
    #[arg(long, default_value_t = 30)]
    pub context: usize,

    /// Output style: grep, csv or json
    #[arg(long = "out-style", default_value = "grep")]
    pub out_style: String,
}
