use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{ColorMode, GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `stride` binary.
#[derive(Debug, Parser)]
#[command(
    name = "stride",
    version,
    about = "stride - order, search and time activity session records"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "table")]
    pub format: OutputFormat,

    /// Colorize table output: auto, always, never
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorMode,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub const fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            color: self.color,
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::{CommandFactory, Parser};

    use super::{Cli, ColorMode, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["stride", "--format", "json", "--verbose", "sample"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Sample));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["stride", "sample", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
    }

    #[test]
    fn defaults_to_table_and_auto_color() {
        let cli = Cli::try_parse_from(["stride", "sample"]).expect("cli should parse");
        let flags = cli.global_flags();
        assert_eq!(flags.format, OutputFormat::Table);
        assert_eq!(flags.color, ColorMode::Auto);
        assert!(!flags.quiet);
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["stride", "--format", "xml", "sample"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn sort_takes_input_and_options() {
        let cli = Cli::try_parse_from([
            "stride",
            "sort",
            "data.csv",
            "--strategy",
            "insertion",
            "--output",
            "out.csv",
        ])
        .expect("cli should parse");

        let Commands::Sort(args) = cli.command else {
            panic!("expected sort command");
        };
        assert_eq!(args.input, PathBuf::from("data.csv"));
        assert_eq!(args.strategy.as_deref(), Some("insertion"));
        assert_eq!(args.output, Some(PathBuf::from("out.csv")));
        assert!(!args.no_save);
    }

    #[test]
    fn run_accepts_threshold_as_text() {
        let cli = Cli::try_parse_from(["stride", "run", "data.csv", "--min-energy", "abc"])
            .expect("threshold is validated by the command, not clap");

        let Commands::Run(args) = cli.command else {
            panic!("expected run command");
        };
        assert_eq!(args.min_energy.as_deref(), Some("abc"));
    }

    #[test]
    fn search_requires_input() {
        assert!(Cli::try_parse_from(["stride", "search"]).is_err());
    }
}
