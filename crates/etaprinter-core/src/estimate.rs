// Rust guideline compliant 2026-02-06

//! Speed and ETA estimation from a single measured step.
//!
//! A step reports how many items were processed and how many milliseconds
//! elapsed. Millisecond resolution is coarse compared to fast batches, so the
//! estimator groups items until one group takes a measurable amount of time:
//!
//! - [`StepTiming::measure`] picks the grouping
//! - [`select_speed`] picks the finest time unit with a nonzero rate
//! - [`eta`] extrapolates the grouping over the remaining items

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Unit used when displaying throughput.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpeedUnit {
    /// Items per second.
    Second,
    /// Items per minute.
    Minute,
    /// Items per hour.
    Hour,
    /// Items per day.
    Day,
}

impl SpeedUnit {
    /// All units, finest first.
    pub const ALL: [SpeedUnit; 4] = [
        SpeedUnit::Second,
        SpeedUnit::Minute,
        SpeedUnit::Hour,
        SpeedUnit::Day,
    ];

    /// Short label printed after the slash, e.g. `12 items/mn`.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            SpeedUnit::Second => "s",
            SpeedUnit::Minute => "mn",
            SpeedUnit::Hour => "h",
            SpeedUnit::Day => "d",
        }
    }

    /// Factor converting the previous (finer) unit into this one.
    /// Seconds are reached from milliseconds.
    fn step_factor(self) -> u128 {
        match self {
            SpeedUnit::Second => 1000,
            SpeedUnit::Minute => 60,
            SpeedUnit::Hour => 60,
            SpeedUnit::Day => 24,
        }
    }
}

impl fmt::Display for SpeedUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Measured duration of one group of items within a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepTiming {
    /// Number of items that make up one group.
    pub items_per_group: u64,
    /// Milliseconds spent on one group. Always positive.
    pub duration_millis: u64,
}

impl StepTiming {
    /// Derives a positive group duration from one step.
    ///
    /// Dividing `elapsed_millis` by `step_count` truncates to zero whenever
    /// items take less than a millisecond each. Instead items are grouped by
    /// `g`: the step holds `step_count / g` groups, each taking
    /// `elapsed_millis / (step_count / g)` milliseconds, and the smallest `g`
    /// giving a nonzero duration wins. The search is bounded by `step_count`
    /// and solved in closed form: `step_count / g <= elapsed_millis` first
    /// holds at `g = step_count / (elapsed_millis + 1) + 1`.
    ///
    /// # Arguments
    ///
    /// * `step_count` - Items processed during the step
    /// * `elapsed_millis` - Wall-clock milliseconds spent on the step
    ///
    /// # Returns
    ///
    /// `None` when no grouping yields a measurable duration, which happens
    /// for empty steps and for steps that finished within the same
    /// millisecond.
    #[must_use]
    pub fn measure(step_count: u64, elapsed_millis: u64) -> Option<Self> {
        if step_count == 0 || elapsed_millis == 0 {
            return None;
        }

        let items_per_group = step_count / elapsed_millis.saturating_add(1) + 1;
        let groups = step_count / items_per_group;
        if groups == 0 {
            return None;
        }

        let duration_millis = elapsed_millis / groups;
        (duration_millis > 0).then_some(Self {
            items_per_group,
            duration_millis,
        })
    }
}

/// Throughput and remaining time derived from the latest step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimate {
    /// Items processed per `unit`.
    pub speed: f64,
    /// Unit the speed is expressed in.
    pub unit: SpeedUnit,
    /// Estimated time until all remaining items are processed.
    pub eta: Duration,
}

impl Estimate {
    /// Builds an estimate from a measured step and the items left to process.
    #[must_use]
    pub fn new(timing: StepTiming, remaining: u64) -> Self {
        let (speed, unit) = select_speed(timing);
        Self {
            speed,
            unit,
            eta: eta(timing, remaining),
        }
    }
}

/// Picks the finest unit whose rate is at least one item, falling back to days.
///
/// # Returns
///
/// The rate in items per unit and the selected unit.
#[must_use]
pub fn select_speed(timing: StepTiming) -> (f64, SpeedUnit) {
    let items = u128::from(timing.items_per_group);
    let duration = u128::from(timing.duration_millis);
    let mut speed_factor: u128 = 1;
    let mut selected = (0.0, SpeedUnit::Day);

    for unit in SpeedUnit::ALL {
        speed_factor *= unit.step_factor();
        let scaled = speed_factor * items;
        selected = (scaled as f64 / duration as f64, unit);
        // Integer rate would be nonzero.
        if scaled >= duration {
            break;
        }
    }

    selected
}

/// Extrapolates the measured grouping over `remaining` items.
#[must_use]
pub fn eta(timing: StepTiming, remaining: u64) -> Duration {
    let millis = u128::from(remaining) * u128::from(timing.duration_millis)
        / u128::from(timing.items_per_group);
    Duration::from_millis(u64::try_from(millis).unwrap_or(u64::MAX))
}

/// Integer completion percentage, truncated.
///
/// `total` must be positive and `processed` must not exceed it.
#[must_use]
pub fn percentage(processed: u64, total: u64) -> u8 {
    let pct = u128::from(processed) * 100 / u128::from(total.max(1));
    pct.min(100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_two_items_in_one_millisecond() {
        let timing = StepTiming::measure(2, 1).expect("measurable");
        assert_eq!(
            timing,
            StepTiming {
                items_per_group: 2,
                duration_millis: 1
            }
        );
    }

    #[test]
    fn test_measure_slow_items_use_single_item_groups() {
        let timing = StepTiming::measure(4, 1000).expect("measurable");
        assert_eq!(timing.items_per_group, 1);
        assert_eq!(timing.duration_millis, 250);
    }

    #[test]
    fn test_measure_zero_elapsed_is_unmeasurable() {
        assert_eq!(StepTiming::measure(10, 0), None);
        assert_eq!(StepTiming::measure(0, 10), None);
    }

    #[test]
    fn test_select_speed_prefers_seconds() {
        let timing = StepTiming {
            items_per_group: 1,
            duration_millis: 100,
        };
        let (speed, unit) = select_speed(timing);
        assert_eq!(unit, SpeedUnit::Second);
        assert_eq!(speed as u64, 10);
    }

    #[test]
    fn test_select_speed_escalates_to_minutes() {
        let timing = StepTiming {
            items_per_group: 1,
            duration_millis: 30_000,
        };
        let (speed, unit) = select_speed(timing);
        assert_eq!(unit, SpeedUnit::Minute);
        assert_eq!(speed as u64, 2);
    }

    #[test]
    fn test_select_speed_falls_back_to_days() {
        let timing = StepTiming {
            items_per_group: 1,
            duration_millis: 10 * 86_400_000,
        };
        let (speed, unit) = select_speed(timing);
        assert_eq!(unit, SpeedUnit::Day);
        assert!(speed > 0.0 && speed < 1.0);
    }

    #[test]
    fn test_eta_scales_with_remaining() {
        let timing = StepTiming {
            items_per_group: 2,
            duration_millis: 500,
        };
        assert_eq!(eta(timing, 10), Duration::from_millis(2500));
        assert_eq!(eta(timing, 0), Duration::ZERO);
    }

    #[test]
    fn test_percentage_truncates() {
        assert_eq!(percentage(2, 42), 4);
        assert_eq!(percentage(0, 42), 0);
        assert_eq!(percentage(42, 42), 100);
    }
}
