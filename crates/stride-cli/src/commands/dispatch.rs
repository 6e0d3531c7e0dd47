use stride_config::StrideConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: Commands, config: &StrideConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Sort(args) => commands::sort::handle(&args, config, flags),
        Commands::Search(args) => commands::search::handle(&args, config, flags),
        Commands::Bench(args) => commands::bench::handle(&args, config, flags),
        Commands::Run(args) => commands::run::handle(&args, config, flags),
        Commands::Interactive => commands::interactive::handle(config),
        Commands::Sample => commands::sample::handle(),
    }
}
