use std::io::IsTerminal;
use std::sync::OnceLock;

use crate::cli::{ColorMode, GlobalFlags, OutputFormat};

/// Terminal settings resolved once at startup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiPrefs {
    /// Color `true`/`false` cells in session tables.
    pub table_color: bool,
    /// `COLUMNS`, when set. Tables shrink toward it but never below their
    /// header widths.
    pub term_width: Option<usize>,
    pub quiet: bool,
}

static UI_PREFS: OnceLock<UiPrefs> = OnceLock::new();

pub fn init(flags: &GlobalFlags) {
    let prefs = resolve(
        flags,
        std::io::stdout().is_terminal(),
        std::env::var_os("NO_COLOR").is_some(),
        std::env::var("COLUMNS").ok().as_deref(),
    );
    let _ = UI_PREFS.set(prefs);
}

#[must_use]
pub fn prefs() -> UiPrefs {
    UI_PREFS.get().copied().unwrap_or_default()
}

fn resolve(flags: &GlobalFlags, stdout_tty: bool, no_color: bool, columns: Option<&str>) -> UiPrefs {
    let tables = flags.format == OutputFormat::Table;
    let table_color = tables
        && match flags.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => stdout_tty && !no_color,
        };

    UiPrefs {
        table_color,
        term_width: columns
            .and_then(|value| value.trim().parse::<usize>().ok())
            .filter(|width| *width > 0),
        quiet: flags.quiet,
    }
}

/// Progress line on stderr, suppressed by `--quiet`. Stdout stays reserved for
/// command output so `--format json` can be piped.
pub fn status(message: &str) {
    if !prefs().quiet {
        eprintln!("{message}");
    }
}
