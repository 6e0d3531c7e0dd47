use serde::Serialize;
use stride_core::entities::SessionRow;
use stride_core::responses::{BatchResponse, SearchResponse, SortResponse, TimingReport};

use crate::cli::OutputFormat;
use crate::ui;

pub mod chart;
pub mod table;

use table::{TableOptions, render_table};

/// Human-readable rendering used by `--format table`.
pub trait TableView {
    fn to_table(&self, options: TableOptions) -> String;
}

/// Render a response to a string in the requested format.
pub fn render<T: Serialize + TableView>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => Ok(value.to_table(table_options())),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a response in the requested format.
pub fn output<T: Serialize + TableView>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

fn table_options() -> TableOptions {
    let prefs = ui::prefs();
    TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

const SESSION_HEADERS: [&str; 7] = [
    "owner",
    "minutes",
    "energy",
    "goal_met",
    "streak",
    "predicate",
    "value",
];

fn session_rows(rows: &[SessionRow]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|row| {
            vec![
                row.owner.clone(),
                row.duration_minutes.to_string(),
                row.energy_burned.to_string(),
                row.goal_met.to_string(),
                row.logged_streak.to_string(),
                row.predicate_expr.clone(),
                row.predicate_value.to_string(),
            ]
        })
        .collect()
}

impl TableView for SortResponse {
    fn to_table(&self, options: TableOptions) -> String {
        let mut caption = format!(
            "Sorted {} session(s) with {} sort",
            self.sessions.len(),
            self.strategy.label()
        );
        if self.skipped_rows > 0 {
            caption.push_str(&format!(" ({} malformed row(s) skipped)", self.skipped_rows));
        }
        let body = render_table(&SESSION_HEADERS, &session_rows(&self.sessions), options);
        format!("{caption}\n{body}")
    }
}

impl TableView for SearchResponse {
    fn to_table(&self, options: TableOptions) -> String {
        let caption = format!(
            "{} of {} session(s) with energy >= {} and predicate true",
            self.matches.len(),
            self.searched,
            self.min_energy
        );
        let body = render_table(&SESSION_HEADERS, &session_rows(&self.matches), options);
        format!("{caption}\n{body}")
    }
}

impl TableView for TimingReport {
    fn to_table(&self, options: TableOptions) -> String {
        let caption = format!(
            "Timing over {} session(s), {} round(s) per strategy",
            self.input_len, self.rounds
        );
        let rows = self
            .timings
            .iter()
            .map(|timing| {
                vec![
                    timing.label.clone(),
                    format!("{:.6}", timing.best_secs),
                    format!("{:.6}", timing.mean_secs),
                ]
            })
            .collect::<Vec<_>>();
        let body = render_table(&["strategy", "best_secs", "mean_secs"], &rows, options);
        format!("{caption}\n{body}")
    }
}

impl TableView for BatchResponse {
    fn to_table(&self, options: TableOptions) -> String {
        let mut sections = vec![self.sorted.to_table(options), self.timing.to_table(options)];
        sections.push(
            self.search
                .as_ref()
                .map_or_else(|| String::from("Search skipped"), |search| search.to_table(options)),
        );
        if let Some(path) = &self.saved_to {
            sections.push(format!("Saved to {path}"));
        }
        sections.join("\n\n")
    }
}
