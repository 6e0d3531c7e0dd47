use stride_config::StrideConfig;
use stride_order::strategy_for;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SortArgs;
use crate::commands::shared::files::{load_input, save_ordered};
use crate::commands::shared::parse::{resolve_output, resolve_strategy};
use crate::commands::shared::sort_response;
use crate::output::output;

pub fn handle(args: &SortArgs, config: &StrideConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let strategy = resolve_strategy(args.strategy.as_deref(), config)?;
    let report = load_input(&args.input)?;

    let sorted = strategy_for(strategy).sort(&report.sessions);
    tracing::debug!(%strategy, count = sorted.len(), "sessions ordered");

    output(&sort_response(strategy, &sorted, report.skipped.len()), flags.format)?;

    if let Some(path) = resolve_output(args.output.as_deref(), args.no_save, config) {
        save_ordered(&path, &sorted)?;
    }
    Ok(())
}
