use indicatif::ProgressStyle;
use tracing_indicatif::TickSettings;

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

/// Style of the spinner drawn while an interface is being scanned.
pub fn scan_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.blue} scanning {span_fields}")
        .expect("spinner template is valid")
        .tick_strings(TICKS)
}

/// Spinners only redraw when their span changes. A steady tick would keep
/// rewriting the terminal line sudo prints its password prompt on.
pub fn tick_settings() -> TickSettings {
    TickSettings {
        default_tick_interval: None,
        ..Default::default()
    }
}
