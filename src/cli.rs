use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// flake8-style diagnostics on stdout
    Text,
    /// Structured JSON report
    Json,
}

impl From<OutputFormat> for crate::io::output::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => Self::Text,
            OutputFormat::Json => Self::Json,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "annolint")]
#[command(about = "Lints Python type annotations for excessive complexity and length", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Files or directories to lint
    #[arg(default_value = ".")]
    pub paths: Vec<PathBuf>,

    /// Maximum allowed annotation nesting depth (default 3)
    #[arg(long = "max-annotations-complexity", value_name = "N")]
    pub max_annotations_complexity: Option<usize>,

    /// Maximum allowed flattened annotation length (default 7)
    #[arg(long = "max-annotations-len", value_name = "N")]
    pub max_annotations_len: Option<usize>,

    /// Permit deprecated comment-style (# type:) annotations
    #[arg(long = "enable-old-style-annotations")]
    pub enable_old_style_annotations: bool,

    /// Configuration file (defaults to .annolint.toml in the current directory)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Glob patterns for paths to skip
    #[arg(long, value_delimiter = ',')]
    pub ignore: Vec<String>,
}
