use kwdex_config::KwdexConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: Commands, config: &KwdexConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Build(args) => commands::build::handle(&args, config, flags),
        Commands::Lookup(args) => commands::lookup::handle(&args, config, flags),
        Commands::Extract(args) => commands::extract::handle(&args, flags),
    }
}
