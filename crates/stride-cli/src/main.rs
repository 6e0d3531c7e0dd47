use anyhow::Context;
use clap::Parser;
use stride_config::StrideConfig;

mod cli;
mod commands;
mod output;
mod ui;

fn main() {
    if let Err(error) = run() {
        eprintln!("stride error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let flags = cli.global_flags();
    init_tracing(&flags)?;
    ui::init(&flags);

    if matches!(cli.command, cli::Commands::Sample) {
        return commands::sample::handle();
    }

    let config = StrideConfig::load_with_dotenv().context("failed to load stride configuration")?;
    tracing::debug!(?config, "configuration loaded");

    commands::dispatch::dispatch(cli.command, &config, &flags)
}

fn init_tracing(flags: &cli::GlobalFlags) -> anyhow::Result<()> {
    let level = if flags.quiet {
        "error"
    } else if flags.verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("STRIDE_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
