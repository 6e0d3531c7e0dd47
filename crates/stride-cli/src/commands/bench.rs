use std::fs;

use anyhow::Context;
use stride_config::StrideConfig;
use stride_order::PerformanceHarness;

use crate::cli::root_commands::BenchArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::files::load_input;
use crate::output::chart::timing_chart;
use crate::output::output;
use crate::ui;

pub fn handle(args: &BenchArgs, config: &StrideConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let report = load_input(&args.input)?;
    let harness = PerformanceHarness::new(args.rounds.unwrap_or(config.bench.rounds));
    let timing = harness.compare(&report.sessions);

    output(&timing, flags.format)?;

    let chart = timing_chart(&timing, config.bench.chart_width);
    if flags.format == OutputFormat::Table {
        println!("\n{chart}");
    }
    if let Some(path) = &args.chart {
        fs::write(path, format!("{chart}\n"))
            .with_context(|| format!("failed to write chart to {}", path.display()))?;
        ui::status(&format!("chart written to {}", path.display()));
    }
    Ok(())
}
