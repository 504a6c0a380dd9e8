use indicatif::ProgressStyle;
use tracing::Span;
use tracing_indicatif::span_ext::IndicatifSpanExt;

const TICKS: &[&str] = &[
    "▁▁▁▁▁",
    "▁▂▂▂▁",
    "▁▄▂▄▁",
    "▂▄▆▄▂",
    "▄▆█▆▄",
    "▂▄▆▄▂",
    "▁▄▂▄▁",
    "▁▂▂▂▁",
];

fn style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.blue} {msg} [{pos}/{len}] {elapsed}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_strings(TICKS)
}

/// Turns the span into a progress bar over `total` hosts.
pub fn start(span: &Span, total: usize) {
    span.pb_set_style(&style());
    span.pb_set_length(total as u64);
    span.pb_set_message("Scanning hosts...");
}

pub fn advance(span: &Span, ip: &str) {
    span.pb_inc(1);
    span.pb_set_message(&format!("Last finished: {ip}"));
}
