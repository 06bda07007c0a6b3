use std::path::PathBuf;

use clap::Parser;
use jdelta_report::Locale;

#[derive(Parser, Debug)]
#[command(
    name = "jdelta",
    about = "Structural diff for JSON documents",
    version,
)]
pub struct Cli {
    /// Old document: a file path, `-` for stdin, or document text with --inline
    pub old: String,

    /// New document: a file path, `-` for stdin, or document text with --inline
    pub new: String,

    /// Treat OLD and NEW as document text instead of paths
    #[arg(long)]
    pub inline: bool,

    #[arg(long, default_value = "text")]
    pub format: OutputFormat,

    /// Report language (en, zh)
    #[arg(long)]
    pub locale: Option<Locale>,

    /// TOML configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Reject documents nested deeper than this (never more than 128)
    #[arg(long)]
    pub max_depth: Option<usize>,

    #[arg(long)]
    pub no_color: bool,

    /// Exit with status 1 when the documents differ
    #[arg(long)]
    pub exit_code: bool,

    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
