use stride_core::responses::TimingReport;

const BAR: char = '#';

/// Text bar chart of strategy timings, one bar per strategy, scaled so the
/// slowest strategy spans `width` characters.
#[must_use]
pub fn timing_chart(report: &TimingReport, width: usize) -> String {
    let bars = report
        .timings
        .iter()
        .map(|timing| (timing.label.as_str(), timing.mean_secs))
        .collect::<Vec<_>>();
    render_bar_chart("Sorting performance (mean seconds)", &bars, width)
}

#[must_use]
pub fn render_bar_chart(title: &str, bars: &[(&str, f64)], width: usize) -> String {
    let label_width = bars
        .iter()
        .map(|(label, _)| label.chars().count())
        .max()
        .unwrap_or(0);
    let max = bars.iter().map(|(_, value)| *value).fold(0.0_f64, f64::max);

    let mut lines = Vec::with_capacity(bars.len() + 1);
    lines.push(title.to_string());
    for (label, value) in bars {
        let filled = bar_length(*value, max, width);
        lines.push(format!(
            "{label:<label_width$} | {bar:<width$} {value:.6}s",
            bar = BAR.to_string().repeat(filled)
        ));
    }
    lines.join("\n")
}

/// Scaled bar length. Any positive value gets at least one cell.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn bar_length(value: f64, max: f64, width: usize) -> usize {
    if max <= 0.0 || value <= 0.0 || !value.is_finite() {
        return 0;
    }
    let scaled = (value / max * width as f64).round() as usize;
    scaled.clamp(1, width)
}
