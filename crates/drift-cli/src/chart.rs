use drift_core::{ChartEntry, Translator};

const BAR_WIDTH: usize = 40;

/// Horizontal bar chart, one row per entry, scaled to the longest duration.
pub fn render_bar_chart(entries: &[ChartEntry], translator: &Translator) {
    let max_seconds = entries
        .iter()
        .map(|entry| entry.total_seconds)
        .fold(0.0, f64::max);
    let total_seconds: f64 = entries.iter().map(|entry| entry.total_seconds).sum();
    let label_width = entries
        .iter()
        .map(|entry| entry.label.len())
        .max()
        .unwrap_or(0);

    println!("{}", translator.get("dashboard.unit"));
    println!();

    for entry in entries {
        let bar = "█".repeat(bar_length(entry.total_seconds, max_seconds, BAR_WIDTH));
        println!(
            "{:<label_width$}  {:<BAR_WIDTH$}  {:>8} ({}%)",
            entry.label,
            bar,
            format_minutes(entry.total_seconds),
            percentage(entry.total_seconds, total_seconds)
        );
    }

    println!();
    print_total(total_seconds, translator);
}

/// Share-of-total breakdown, the terminal stand-in for a doughnut chart.
pub fn render_pie_chart(entries: &[ChartEntry], translator: &Translator) {
    let total_seconds: f64 = entries.iter().map(|entry| entry.total_seconds).sum();
    let label_width = entries
        .iter()
        .map(|entry| entry.label.len() + 1)
        .max()
        .unwrap_or(0);

    println!("{}", translator.get("dashboard.unit"));
    println!();

    for (index, entry) in entries.iter().enumerate() {
        let prefix = if index == entries.len() - 1 {
            "└──"
        } else {
            "├──"
        };
        println!(
            "{} {:<label_width$} {:>8} ({}%)",
            prefix,
            format!("{}:", entry.label),
            format_minutes(entry.total_seconds),
            percentage(entry.total_seconds, total_seconds)
        );
    }

    println!();
    print_total(total_seconds, translator);
}

fn print_total(total_seconds: f64, translator: &Translator) {
    println!(
        "{}: {} min",
        translator.get("dashboard.total"),
        format_minutes(total_seconds)
    );
}

/// Durations are charted in minutes with two decimals.
fn format_minutes(seconds: f64) -> String {
    format!("{:.2}", seconds / 60.0)
}

fn percentage(seconds: f64, total: f64) -> u32 {
    if total > 0.0 {
        (seconds / total * 100.0) as u32
    } else {
        0
    }
}

fn bar_length(seconds: f64, max: f64, width: usize) -> usize {
    if max <= 0.0 || seconds <= 0.0 {
        return 0;
    }

    let scaled = (seconds / max * width as f64).round() as usize;
    scaled.max(1)
}
