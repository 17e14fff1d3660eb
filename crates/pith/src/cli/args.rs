//! Clap argument definitions for the `pith` CLI.

use clap::{ArgAction, Args, Parser, Subcommand};
use pith_config::{Config, OverflowPolicy, ParseSettingError, SplitMode};
use pith_rank::SplitOptions;

/// Parse an overflow policy from a string.
fn parse_overflow(s: &str) -> Result<OverflowPolicy, String> {
    s.parse().map_err(|e: ParseSettingError| e.to_string())
}

/// Parse a split mode from a string.
fn parse_split_mode(s: &str) -> Result<SplitMode, String> {
    s.parse().map_err(|e: ParseSettingError| e.to_string())
}

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "pith")]
#[command(about = "Select the passages of a document most relevant to a query")]
pub struct Cli {
    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short = 'v', long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Shared flags that control how documents are split into passages.
#[derive(Args, Debug, Clone, Default)]
pub struct SplitArgs {
    /// Passage splitting: paragraphs, sentences [default: paragraphs]
    #[arg(long, value_parser = parse_split_mode)]
    pub split: Option<SplitMode>,

    /// Target passage size when splitting by sentence [default: 1000]
    #[arg(long)]
    pub passage_chars: Option<usize>,
}

impl SplitArgs {
    /// Applies the flags to the configured split settings.
    pub fn options(&self, config: &Config) -> SplitOptions {
        let mut options = SplitOptions::from(&config.split);
        if let Some(mode) = self.split {
            options.mode = mode;
        }
        if let Some(chars) = self.passage_chars {
            options.passage_chars = chars;
        }
        options
    }
}

/// Arguments for `pith select`.
#[derive(Args, Debug, Clone)]
pub struct SelectCommand {
    /// Document to read, or - for stdin
    pub file: String,

    /// Query words
    #[arg(required = true)]
    pub query: Vec<String>,

    /// Maximum characters of selected text [default: 2000]
    #[arg(short = 'n', long)]
    pub max_length: Option<usize>,

    /// Handling of a passage that does not fit: stop, skip, truncate [default: stop]
    #[arg(long, value_parser = parse_overflow)]
    pub overflow: Option<OverflowPolicy>,

    #[command(flatten)]
    /// Passage splitting overrides.
    pub split: SplitArgs,

    /// Emphasize query terms in the output
    #[arg(long, conflicts_with = "json")]
    pub highlight: bool,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `pith rank`.
#[derive(Args, Debug, Clone)]
pub struct RankCommand {
    /// Document to read, or - for stdin
    pub file: String,

    /// Query words
    #[arg(required = true)]
    pub query: Vec<String>,

    /// Maximum passages to show [default: 10]
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    #[command(flatten)]
    /// Passage splitting overrides.
    pub split: SplitArgs,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `pith chunks`.
#[derive(Args, Debug, Clone)]
pub struct ChunksCommand {
    /// Document to read, or - for stdin
    pub file: String,

    /// Characters per chunk [default: 4000]
    #[arg(short = 's', long)]
    pub size: Option<usize>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `pith inspect`.
#[derive(Args, Debug, Clone)]
pub struct InspectCommand {
    /// Document to read, or - for stdin
    pub file: String,

    /// Maximum terms to show [default: 20]
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    #[command(flatten)]
    /// Passage splitting overrides.
    pub split: SplitArgs,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `pith init`.
#[derive(Args, Debug, Clone)]
pub struct InitCommand {
    /// Create global ~/.pith.toml instead
    #[arg(long)]
    pub global: bool,

    /// Overwrite existing configuration file
    #[arg(long)]
    pub force: bool,
}

/// Supported `pith` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Print the passages most relevant to a query, within a character budget
    #[command(after_help = "\
EXAMPLES:
  pith select manual.txt garbage collector
  pith select -n 500 notes.md 'error handling'
  cat report.txt | pith select - quarterly revenue --highlight
  pith select --split sentences scan.txt warranty terms")]
    Select(SelectCommand),

    /// Show how every passage of a document scores against a query
    Rank(RankCommand),

    /// Cut a document into fixed-size chunks for summarization
    Chunks(ChunksCommand),

    /// Show passage and term statistics for a document
    Inspect(InspectCommand),

    /// Initialize pith configuration in current directory
    Init(InitCommand),

    /// Show effective configuration settings
    Config,

    /// Validate configuration and diagnose issues
    Check,
}

/// Parses CLI arguments.
pub fn parse_cli() -> Cli {
    Cli::parse()
}
