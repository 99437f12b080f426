use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Scan the configured corpus and write the keyword table (default).
    Build(BuildArgs),
    /// Run the extractor on individual pages and print what it finds.
    Extract(ExtractArgs),
    /// Look up a keyword or documentation file name in a written table.
    Lookup(LookupArgs),
}

impl Default for Commands {
    fn default() -> Self {
        Self::Build(BuildArgs::default())
    }
}

/// Arguments for `kwdex build`.
#[derive(Clone, Debug, Default, Args)]
pub struct BuildArgs {
    /// Output file (overrides `output.path`).
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Only build these versions (repeatable; overrides `versions`).
    #[arg(long = "version", value_name = "VERSION")]
    pub versions: Vec<String>,
    /// Write single-line JSON.
    #[arg(long)]
    pub compact: bool,
}

/// Arguments for `kwdex extract`.
#[derive(Clone, Debug, Args)]
pub struct ExtractArgs {
    /// Documentation pages to extract.
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<PathBuf>,
}

/// Arguments for `kwdex lookup`.
#[derive(Clone, Debug, Args)]
pub struct LookupArgs {
    /// Keyword (with or without `*`) or page file name.
    pub word: String,
    /// Table to read (defaults to `output.path`).
    #[arg(long)]
    pub table: Option<PathBuf>,
    /// Restrict to one version.
    #[arg(long = "version", value_name = "VERSION")]
    pub version: Option<String>,
    /// Restrict to one application.
    #[arg(long)]
    pub app: Option<String>,
}
