use anyhow::Context;
use stride_config::StrideConfig;
use stride_order::filter_sessions;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SearchArgs;
use crate::commands::shared::files::load_input;
use crate::commands::shared::parse::resolve_threshold;
use crate::commands::shared::search_response;
use crate::output::output;

pub fn handle(args: &SearchArgs, config: &StrideConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let min_energy = resolve_threshold(args.min_energy.as_deref(), config.search.min_energy)?
        .context("no threshold given: pass --min-energy or set search.min_energy")?;
    let report = load_input(&args.input)?;

    let matches = filter_sessions(&report.sessions, min_energy);
    output(
        &search_response(min_energy, report.sessions.len(), &matches),
        flags.format,
    )
}
