//! Menu-driven session over stdin/stdout.
//!
//! Rejected menu answers and thresholds print a message instead of failing;
//! only closed input and I/O errors end the session with an error.

use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::Context;
use stride_config::StrideConfig;
use stride_core::entities::Session;
use stride_core::enums::SortStrategy;
use stride_core::errors::CoreError;
use stride_core::record::{RawSession, parse_threshold};
use stride_order::{PerformanceHarness, filter_sessions, strategy_for};
use stride_store::{load_sessions, save_sessions};

use crate::commands::sample::EXAMPLE;
use crate::output::chart::timing_chart;

pub fn handle(config: &StrideConfig) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut prompter = Prompter::new(stdin.lock(), stdout.lock());
    run_session(&mut prompter, config)
}

/// Line-oriented question/answer channel.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `prompt` and read one line. `None` means input is exhausted.
    pub fn ask(&mut self, prompt: &str) -> anyhow::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Like [`ask`](Self::ask), but closed input is an error.
    pub fn require(&mut self, prompt: &str) -> anyhow::Result<String> {
        self.ask(prompt)?
            .with_context(|| format!("input closed while waiting for: {}", prompt.trim()))
    }

    pub fn say(&mut self, text: impl AsRef<str>) -> anyhow::Result<()> {
        writeln!(self.output, "{}", text.as_ref())?;
        Ok(())
    }

    #[cfg(test)]
    fn into_output(self) -> W {
        self.output
    }
}

pub fn run_session<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    config: &StrideConfig,
) -> anyhow::Result<()> {
    prompter.say("\nExample CSV format you can use:")?;
    prompter.say(EXAMPLE)?;

    let choice = prompter.require("\nLoad sessions from (1) a CSV file or (2) manual entry? ")?;
    let sessions = match choice.trim() {
        "1" => {
            let path = prompter.require("Path to the CSV file: ")?;
            load_file(prompter, Path::new(path.trim()))?
        }
        "2" => manual_entry(prompter)?,
        other => {
            let error = CoreError::InvalidChoice {
                prompt: "input source (expected 1 or 2)".into(),
                value: other.to_string(),
            };
            prompter.say(format!("{error}. Exiting."))?;
            return Ok(());
        }
    };

    if sessions.is_empty() {
        prompter.say("No sessions to process.")?;
        return Ok(());
    }

    let strategy = choose_strategy(prompter)?;
    let sorted = strategy_for(strategy).sort(&sessions);

    prompter.say(format!("\nSorted sessions ({} sort):", strategy.label()))?;
    for session in &sorted {
        prompter.say(session.to_string())?;
    }

    let report = PerformanceHarness::new(config.bench.rounds).compare(&sessions);
    prompter.say("")?;
    for timing in &report.timings {
        prompter.say(format!("{} sort time: {:.6}s", timing.label, timing.mean_secs))?;
    }
    prompter.say(timing_chart(&report, config.bench.chart_width))?;

    search(prompter, &sorted)?;

    if config.output.save {
        let path = Path::new(&config.output.path);
        save_sessions(path, &sorted)
            .with_context(|| format!("failed to save sessions to {}", path.display()))?;
        prompter.say(format!("\nSorted sessions saved to '{}'.", path.display()))?;
    }
    Ok(())
}

fn load_file<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    path: &Path,
) -> anyhow::Result<Vec<Session>> {
    let report = load_sessions(path)
        .with_context(|| format!("failed to load sessions from {}", path.display()))?;
    for skipped in &report.skipped {
        prompter.say(format!("Row {} skipped: {}", skipped.line, skipped.reason))?;
    }
    Ok(report.sessions)
}

fn manual_entry<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
) -> anyhow::Result<Vec<Session>> {
    let mut sessions = Vec::new();
    prompter.say("\n--- Enter sessions (type 'done' to finish) ---")?;

    loop {
        let Some(owner) = prompter.ask("Owner name (or 'done' to stop): ")? else {
            break;
        };
        if owner.trim().eq_ignore_ascii_case("done") {
            break;
        }

        let Some(raw) = read_fields(prompter, owner)? else {
            break;
        };
        match Session::try_from(raw) {
            Ok(session) => {
                if let Err(error) = session.validate_predicate() {
                    prompter.say(format!(
                        "Warning: predicate '{}' is malformed ({error}); it will evaluate to false.",
                        session.predicate_expr()
                    ))?;
                }
                sessions.push(session);
            }
            Err(error) => prompter.say(format!("Invalid input: {error}. Session discarded."))?,
        }
    }
    Ok(sessions)
}

/// Remaining fields for one manual entry; `None` if input closes midway.
fn read_fields<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    owner: String,
) -> anyhow::Result<Option<RawSession>> {
    let questions = [
        "Duration (minutes): ",
        "Energy burned: ",
        "Goal met? (true/false): ",
        "Logged streak? (true/false): ",
        "Predicate over p and q (e.g. p and q): ",
    ];
    let mut answers = Vec::with_capacity(questions.len());
    for question in questions {
        match prompter.ask(question)? {
            Some(answer) => answers.push(answer),
            None => return Ok(None),
        }
    }

    let mut answers = answers.into_iter();
    let mut next = || answers.next().unwrap_or_default();
    Ok(Some(RawSession {
        owner,
        duration_minutes: next(),
        energy_burned: next(),
        goal_met: next(),
        logged_streak: next(),
        predicate_expr: next(),
    }))
}

fn choose_strategy<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
) -> anyhow::Result<SortStrategy> {
    prompter.say("\nChoose a sorting strategy:")?;
    prompter.say("1. Insertion sort (loop-based)")?;
    prompter.say("2. Merge sort (recursive)")?;

    loop {
        let answer = prompter.require("Enter choice (1 or 2): ")?;
        match SortStrategy::from_menu_choice(&answer) {
            Ok(strategy) => return Ok(strategy),
            Err(error) => prompter.say(error.to_string())?,
        }
    }
}

fn search<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    sorted: &[&Session],
) -> anyhow::Result<()> {
    let Some(answer) = prompter.ask("\nMinimum energy burned to search for: ")? else {
        return Ok(());
    };

    match parse_threshold(&answer) {
        Ok(min_energy) => {
            let matches = filter_sessions(sorted, min_energy);
            prompter.say(format!(
                "\nSearch results (energy >= {min_energy} and predicate true):"
            ))?;
            if matches.is_empty() {
                prompter.say("(no matches)")?;
            }
            for session in matches {
                prompter.say(session.to_string())?;
            }
        }
        Err(error) => prompter.say(format!("{error}; search skipped."))?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use stride_config::StrideConfig;

    use super::{Prompter, run_session};

    fn no_save() -> StrideConfig {
        let mut config = StrideConfig::default();
        config.output.save = false;
        config
    }

    fn transcript(input: &str, config: &StrideConfig) -> anyhow::Result<String> {
        let mut prompter = Prompter::new(Cursor::new(input.to_string()), Vec::new());
        run_session(&mut prompter, config)?;
        Ok(String::from_utf8(prompter.into_output()).expect("utf8 output"))
    }

    fn position(haystack: &str, needle: &str) -> usize {
        haystack
            .find(needle)
            .unwrap_or_else(|| panic!("missing {needle:?} in:\n{haystack}"))
    }

    #[test]
    fn manual_entry_sorts_and_searches() {
        let input = "2\n\
                     Alice\n45\n400\ntrue\ntrue\np and q\n\
                     Bob\n30\n250\ntrue\nfalse\np and q\n\
                     Charlie\n60\n600\ntrue\ntrue\np or not q\n\
                     done\n\
                     1\n\
                     300\n";
        let out = transcript(input, &no_save()).expect("session should finish");

        let listing = position(&out, "Sorted sessions (Insertion sort):");
        let bob = position(&out, "Bob - 30min - 250 energy - predicate: false");
        let alice = position(&out, "Alice - 45min - 400 energy - predicate: true");
        let charlie = position(&out, "Charlie - 60min - 600 energy - predicate: true");
        assert!(listing < bob && bob < alice && alice < charlie);

        let results = position(&out, "Search results (energy >= 300 and predicate true):");
        assert!(out[results..].contains("Alice"));
        assert!(out[results..].contains("Charlie"));
        assert!(!out[results..].contains("Bob"));

        assert!(out.contains("Insertion sort time:"));
        assert!(out.contains("Merge sort time:"));
    }

    #[test]
    fn bad_field_discards_entry_and_continues() {
        let input = "2\n\
                     Zed\nlong\n100\ntrue\ntrue\np\n\
                     Amy\n10\n100\nyes\nno\np and not q\n\
                     done\n2\n\n";
        let out = transcript(input, &no_save()).expect("session should finish");

        assert!(out.contains("Invalid input: invalid duration_minutes 'long'"));
        assert!(out.contains("Amy - 10min - 100 energy - predicate: true"));
        assert!(!out.contains("Zed -"));
    }

    #[test]
    fn invalid_source_choice_exits_cleanly() {
        let out = transcript("3\n", &no_save()).expect("rejection is not an error");
        assert!(out.contains("invalid choice '3' for input source"));
        assert!(!out.contains("Sorted sessions"));
    }

    #[test]
    fn invalid_strategy_choice_asks_again() {
        let input = "2\nAmy\n10\n100\ntrue\ntrue\np\ndone\n9\n2\n\n";
        let out = transcript(input, &no_save()).expect("session should finish");

        assert!(out.contains("invalid choice '9' for sort strategy"));
        assert!(out.contains("Sorted sessions (Merge sort):"));
    }

    #[test]
    fn invalid_threshold_skips_search() {
        let input = "2\nAmy\n10\n100\ntrue\ntrue\np\ndone\n1\nplenty\n";
        let out = transcript(input, &no_save()).expect("session should finish");

        assert!(out.contains("invalid search threshold 'plenty'"));
        assert!(!out.contains("Search results"));
    }

    #[test]
    fn malformed_predicate_is_kept_with_warning() {
        let input = "2\nAmy\n10\n100\ntrue\ntrue\np xor q\ndone\n1\n0\n";
        let out = transcript(input, &no_save()).expect("session should finish");

        assert!(out.contains("Warning: predicate 'p xor q' is malformed"));
        assert!(out.contains("Amy - 10min - 100 energy - predicate: false"));
    }

    #[test]
    fn closed_input_before_strategy_is_an_error() {
        let input = "2\nAmy\n10\n100\ntrue\ntrue\np\ndone\n";
        let err = transcript(input, &no_save()).expect_err("no strategy answer");
        assert!(err.to_string().contains("input closed"));
    }

    #[test]
    fn csv_source_saves_sorted_output() {
        let dir = tempfile::tempdir().expect("tempdir");
        let input_path = dir.path().join("in.csv");
        let output_path = dir.path().join("out.csv");
        std::fs::write(&input_path, crate::commands::sample::EXAMPLE).expect("write input");

        let mut config = StrideConfig::default();
        config.output.path = output_path.display().to_string();

        let input = format!("1\n{}\n2\n\n", input_path.display());
        let out = transcript(&input, &config).expect("session should finish");
        assert!(out.contains("Sorted sessions saved to"));

        let saved = std::fs::read_to_string(&output_path).expect("saved file");
        let owners: Vec<&str> = saved
            .lines()
            .skip(1)
            .filter_map(|line| line.split(',').next())
            .collect();
        assert_eq!(owners, ["Diana", "Bob", "Alice", "Charlie"]);
    }
}
