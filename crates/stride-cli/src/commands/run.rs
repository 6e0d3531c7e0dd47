use stride_config::StrideConfig;
use stride_core::record::parse_threshold;
use stride_core::responses::BatchResponse;
use stride_order::{PerformanceHarness, filter_sessions, strategy_for};

use crate::cli::root_commands::RunArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::files::{load_input, save_ordered};
use crate::commands::shared::parse::{resolve_output, resolve_strategy};
use crate::commands::shared::{search_response, sort_response};
use crate::output::chart::timing_chart;
use crate::output::output;
use crate::ui;

/// Load, order, time, search the ordered sequence, then persist.
pub fn handle(args: &RunArgs, config: &StrideConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let strategy = resolve_strategy(args.strategy.as_deref(), config)?;
    let report = load_input(&args.input)?;

    let sorted = strategy_for(strategy).sort(&report.sessions);
    let timing = PerformanceHarness::new(args.rounds.unwrap_or(config.bench.rounds))
        .compare(&report.sessions);

    let search = search_threshold(args.min_energy.as_deref(), config).map(|min_energy| {
        let matches = filter_sessions(&sorted, min_energy);
        search_response(min_energy, sorted.len(), &matches)
    });

    let saved_to = match resolve_output(args.output.as_deref(), args.no_save, config) {
        Some(path) => {
            save_ordered(&path, &sorted)?;
            Some(path.display().to_string())
        }
        None => None,
    };

    let response = BatchResponse {
        sorted: sort_response(strategy, &sorted, report.skipped.len()),
        timing,
        search,
        saved_to,
    };
    output(&response, flags.format)?;

    if flags.format == OutputFormat::Table {
        println!("\n{}", timing_chart(&response.timing, config.bench.chart_width));
    }
    Ok(())
}

/// A bad `--min-energy` skips the search instead of failing the batch.
fn search_threshold(raw: Option<&str>, config: &StrideConfig) -> Option<f64> {
    match raw {
        Some(raw) => match parse_threshold(raw) {
            Ok(value) => Some(value),
            Err(error) => {
                tracing::warn!(%error, "search skipped");
                ui::status(&format!("{error}; search skipped"));
                None
            }
        },
        None => config.search.min_energy,
    }
}
