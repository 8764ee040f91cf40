// Rust guideline compliant 2026-02-06

//! Status line rendering.
//!
//! Everything here is a pure function of already computed values; the
//! tracker decides what to render and when.

use crate::estimate::SpeedUnit;
use std::fmt::Write as _;
use std::time::Duration;

/// Number of cells between the brackets of the bar.
pub const BAR_WIDTH: usize = 100;

/// Text appended to the final bar on the terminal transition.
pub const COMPLETE_SUFFIX: &str = "Complete.\n";

const SECONDS_PER_MINUTE: u64 = 60;
const SECONDS_PER_HOUR: u64 = 60 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: u64 = 24 * SECONDS_PER_HOUR;

/// Renders the fixed-width progress bar.
///
/// Format is `"<pct>% [" + 100 cells + "] "`. Cells before the head are `=`,
/// the head is `>`, the rest are blank. At 100% every cell is `=` and at 0%
/// there is no head.
///
/// # Arguments
///
/// * `percentage` - Completion percentage in `0..=100`
#[must_use]
pub fn render_bar(percentage: u8) -> String {
    let pct = usize::from(percentage);
    let mut bar = String::with_capacity(BAR_WIDTH + 8);
    let _ = write!(bar, "{pct}% [");

    for i in 0..BAR_WIDTH {
        let cell = if pct == 100 || i + 1 < pct {
            '='
        } else if i + 1 == pct {
            '>'
        } else {
            ' '
        };
        bar.push(cell);
    }

    bar.push_str("] ");
    bar
}

/// Renders the status when no speed estimate is available.
#[must_use]
pub fn render_percentage_only(percentage: u8) -> String {
    render_bar(percentage)
}

/// Renders the bar followed by throughput and ETA.
///
/// Produces e.g. `42% [...] 12 bananas/s ETA 1m3s`. The speed is truncated
/// to an integer.
///
/// # Arguments
///
/// * `element_name` - Optional name of the processed items
/// * `percentage` - Completion percentage in `0..=100`
/// * `speed` - Items per `unit`
/// * `unit` - Unit the speed is expressed in
/// * `eta` - Estimated remaining time
#[must_use]
pub fn render_full(
    element_name: Option<&str>,
    percentage: u8,
    speed: f64,
    unit: SpeedUnit,
    eta: Duration,
) -> String {
    let mut status = render_bar(percentage);
    let _ = write!(status, "{}", speed as u64);
    if let Some(name) = element_name {
        status.push(' ');
        status.push_str(name);
    }
    let _ = write!(status, "/{} ETA {}", unit, format_duration(eta));
    status
}

/// Renders the terminal status line, without the leading carriage return.
#[must_use]
pub fn render_complete() -> String {
    let mut status = render_bar(100);
    status.push_str(COMPLETE_SUFFIX);
    status
}

/// Splits a duration into its nonzero day, hour, minute and second parts.
///
/// Sub-second remainders are dropped.
#[must_use]
pub fn duration_components(duration: Duration) -> Vec<(u64, char)> {
    let mut secs = duration.as_secs();
    let mut parts = Vec::with_capacity(4);

    for (size, suffix) in [
        (SECONDS_PER_DAY, 'd'),
        (SECONDS_PER_HOUR, 'h'),
        (SECONDS_PER_MINUTE, 'm'),
        (1, 's'),
    ] {
        let value = secs / size;
        secs %= size;
        if value > 0 {
            parts.push((value, suffix));
        }
    }

    parts
}

/// Formats a duration as its nonzero components, e.g. `2h15m3s`.
///
/// Durations shorter than one second render as `0s`.
#[must_use]
pub fn format_duration(duration: Duration) -> String {
    let parts = duration_components(duration);
    if parts.is_empty() {
        return "0s".to_string();
    }

    let mut out = String::new();
    for (value, suffix) in parts {
        let _ = write!(out, "{value}{suffix}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_components_skip_zero_fields() {
        let duration = Duration::from_secs(SECONDS_PER_DAY + 5);
        assert_eq!(duration_components(duration), vec![(1, 'd'), (5, 's')]);
    }

    #[test]
    fn test_render_complete_ends_with_suffix() {
        let line = render_complete();
        assert!(line.starts_with("100% ["));
        assert!(line.ends_with("] Complete.\n"));
    }
}
