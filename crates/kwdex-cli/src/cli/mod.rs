use std::path::PathBuf;

use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{ColorMode, GlobalFlags, OutputFormat, ProgressMode};
pub use root_commands::Commands;

/// Top-level CLI parser for the `kwdex` binary.
#[derive(Debug, Parser)]
#[command(
    name = "kwdex",
    version,
    about = "kwdex - keyword lookup tables from simulator documentation"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (errors only, no progress)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Extra config file layered over the user and project files
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Colorize table output: auto, always, never
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorMode,

    /// Progress bar: auto, on, off
    #[arg(long, global = true, default_value = "auto")]
    pub progress: ProgressMode,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            config: self.config.clone(),
            color: self.color,
            progress: self.progress,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use clap::{CommandFactory, Parser};
    use pretty_assertions::assert_eq;

    use super::{Cli, ColorMode, Commands, GlobalFlags, OutputFormat, ProgressMode};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_means_build() {
        let cli = Cli::try_parse_from(["kwdex"]).expect("cli should parse");
        assert!(cli.command.is_none());
        assert!(matches!(cli.command.unwrap_or_default(), Commands::Build(_)));
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "kwdex",
            "--format",
            "table",
            "--verbose",
            "--color",
            "never",
            "build",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert_eq!(cli.color, ColorMode::Never);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Some(Commands::Build(_))));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["kwdex", "lookup", "date", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        let Some(Commands::Lookup(args)) = cli.command else {
            panic!("expected lookup");
        };
        assert_eq!(args.word, "date");
    }

    #[test]
    fn build_flags() {
        let cli = Cli::try_parse_from([
            "kwdex",
            "build",
            "--output",
            "out.json",
            "--version",
            "2022.10",
            "--version",
            "2023.10",
            "--compact",
        ])
        .expect("cli should parse");

        let Some(Commands::Build(args)) = cli.command else {
            panic!("expected build");
        };
        assert_eq!(args.output.as_deref(), Some(Path::new("out.json")));
        assert_eq!(args.versions, vec!["2022.10", "2023.10"]);
        assert!(args.compact);
    }

    #[test]
    fn extract_requires_a_file() {
        assert!(Cli::try_parse_from(["kwdex", "extract"]).is_err());
        let cli = Cli::try_parse_from(["kwdex", "extract", "a.htm", "b.htm"])
            .expect("cli should parse");
        let Some(Commands::Extract(args)) = cli.command else {
            panic!("expected extract");
        };
        assert_eq!(args.files.len(), 2);
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        assert!(Cli::try_parse_from(["kwdex", "--quiet", "--verbose"]).is_err());
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        assert!(Cli::try_parse_from(["kwdex", "--format", "xml"]).is_err());
    }

    #[test]
    fn global_flags_extraction_copies_values() {
        let cli = Cli::try_parse_from(["kwdex", "--config", "/tmp/kwdex.toml", "--progress", "off"])
            .expect("cli should parse");
        let flags: GlobalFlags = cli.global_flags();
        assert_eq!(flags.config.as_deref(), Some(Path::new("/tmp/kwdex.toml")));
        assert_eq!(flags.progress, ProgressMode::Off);
        assert_eq!(flags.format, OutputFormat::Json);
    }
}
