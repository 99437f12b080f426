use anyhow::Context;
use clap::Parser;
use kwdex_config::KwdexConfig;

mod cli;
mod commands;
mod output;
mod pipeline;
mod progress;
mod ui;

fn main() {
    if let Err(error) = run() {
        eprintln!("kwdex error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let flags = cli.global_flags();
    ui::init(&flags);

    let command = cli.command.unwrap_or_default();
    if let cli::Commands::Extract(args) = &command {
        return commands::extract::handle(args, &flags);
    }

    let config = load_config(&flags)?;
    commands::dispatch::dispatch(command, &config, &flags)
}

fn load_config(flags: &cli::GlobalFlags) -> anyhow::Result<KwdexConfig> {
    KwdexConfig::load_with_dotenv(flags.config.as_deref()).context("failed to load configuration")
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("KWDEX_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    // stdout carries the rendered output
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
