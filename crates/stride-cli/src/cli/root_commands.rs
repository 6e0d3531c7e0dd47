use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Order sessions from a CSV file and save the result.
    Sort(SortArgs),
    /// List sessions meeting an energy threshold whose predicate holds.
    Search(SearchArgs),
    /// Time insertion and merge ordering on the same input.
    Bench(BenchArgs),
    /// Full batch: order, time, search and save.
    Run(RunArgs),
    /// Menu-driven session over stdin/stdout.
    Interactive,
    /// Print an example input file.
    Sample,
}

#[derive(Clone, Debug, Args)]
pub struct SortArgs {
    /// Input CSV file.
    pub input: PathBuf,
    /// Strategy: insertion or merge (defaults to config `sort.strategy`).
    #[arg(short, long)]
    pub strategy: Option<String>,
    /// Output CSV file (defaults to config `output.path`).
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Do not write the output file.
    #[arg(long)]
    pub no_save: bool,
}

#[derive(Clone, Debug, Args)]
pub struct SearchArgs {
    /// Input CSV file.
    pub input: PathBuf,
    /// Minimum energy burned (defaults to config `search.min_energy`).
    #[arg(short, long)]
    pub min_energy: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct BenchArgs {
    /// Input CSV file.
    pub input: PathBuf,
    /// Rounds per strategy (defaults to config `bench.rounds`).
    #[arg(short, long)]
    pub rounds: Option<u32>,
    /// Also write the bar chart to this file.
    #[arg(long)]
    pub chart: Option<PathBuf>,
}

#[derive(Clone, Debug, Args)]
pub struct RunArgs {
    /// Input CSV file.
    pub input: PathBuf,
    /// Strategy: insertion or merge (defaults to config `sort.strategy`).
    #[arg(short, long)]
    pub strategy: Option<String>,
    /// Minimum energy burned; search is skipped when neither this nor config sets one.
    #[arg(short, long)]
    pub min_energy: Option<String>,
    /// Rounds per strategy for the timing step.
    #[arg(short, long)]
    pub rounds: Option<u32>,
    /// Output CSV file (defaults to config `output.path`).
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Do not write the output file.
    #[arg(long)]
    pub no_save: bool,
}
