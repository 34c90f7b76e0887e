//! Shared CLI arguments, output-format selection, and terminal styling.

use crate::error::MedirError;
use std::fmt;
use std::str::FromStr;

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table output
    #[default]
    Table,
    /// Machine-readable JSON output
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Table => write!(f, "table"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = MedirError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            other => Err(MedirError::ConfigValue {
                field: "format".into(),
                message: format!("Unknown output format: {other}"),
                suggestion: "Use: table, json".into(),
            }),
        }
    }
}

/// Flags shared by every medir CLI tool.
///
/// Flatten into a clap `Parser` with `#[command(flatten)]`.
#[derive(Debug, Clone, clap::Args)]
pub struct CommonArgs {
    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose output with additional details
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

impl CommonArgs {
    /// Resolve the flags into a [`Cli`] configuration value.
    pub fn to_cli(&self) -> Cli {
        Cli { quiet: self.quiet, verbose: self.verbose, format: self.format }
    }
}

/// Resolved CLI configuration passed to command handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cli {
    /// Suppress non-essential output
    pub quiet: bool,
    /// Verbose output
    pub verbose: bool,
    /// Output format
    pub format: OutputFormat,
}

impl Cli {
    /// Whether non-essential output should be suppressed.
    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    /// Whether verbose output is requested.
    pub fn is_verbose(&self) -> bool {
        self.verbose && !self.quiet
    }
}

impl Default for Cli {
    fn default() -> Self {
        Self { quiet: false, verbose: false, format: OutputFormat::Table }
    }
}

/// ANSI styling for consistent terminal output across medir tools.
pub mod styles {
    /// Section header (bold cyan).
    pub fn header(text: &str) -> String {
        format!("\x1b[1;36m{text}\x1b[0m")
    }

    /// Success message (green check).
    pub fn success(text: &str) -> String {
        format!("\x1b[32m✓ {text}\x1b[0m")
    }

    /// Error message (red cross).
    pub fn error(text: &str) -> String {
        format!("\x1b[31m✗ {text}\x1b[0m")
    }

    /// Warning message (yellow).
    pub fn warning(text: &str) -> String {
        format!("\x1b[33m⚠ {text}\x1b[0m")
    }

    /// Informational message (cyan).
    pub fn info(text: &str) -> String {
        format!("\x1b[36m{text}\x1b[0m")
    }
}
