// Rust guideline compliant 2026-02-06

//! Demo workload: a gorilla eating a pile of bananas in batches.
//!
//! Each banana takes a pseudo-random time to eat, drawn from a seeded
//! generator so runs are reproducible. Progress is reported after every
//! batch and the tracker closes itself once the last banana is eaten.

use etaprinter_core::{Error, Result, TrackerBuilder};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::io::Write;
use std::thread;
use std::time::{Duration, Instant};
use tracing::info;

/// Parameters of a demo run.
#[derive(Debug, Clone)]
pub struct DemoOptions {
    /// Number of bananas.
    pub total: u64,
    /// Bananas eaten between two progress updates.
    pub batch: u64,
    /// Upper bound, exclusive, on the time to eat one banana.
    pub max_delay_ms: u64,
    /// Seed for the banana durations.
    pub seed: u64,
    /// Item name shown next to the speed.
    pub element_name: Option<String>,
}

impl Default for DemoOptions {
    fn default() -> Self {
        Self {
            total: 1000,
            batch: 10,
            max_delay_ms: 5,
            seed: 42,
            element_name: Some("bananas".to_string()),
        }
    }
}

/// Outcome of a completed run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Items processed.
    pub processed: u64,
    /// Progress updates sent to the tracker.
    pub updates: u64,
    /// Wall-clock duration of the run.
    pub elapsed_ms: u64,
    /// Item name, if any.
    pub element_name: Option<String>,
}

/// A banana and how long it takes to eat.
#[derive(Debug, Clone, Copy)]
pub struct Banana {
    duration: Duration,
}

impl Banana {
    /// Time needed to eat this banana.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }
}

/// Generates `count` bananas with durations in `0..max_delay_ms`.
#[must_use]
pub fn generate_bananas(count: u64, max_delay_ms: u64, seed: u64) -> Vec<Banana> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let millis = if max_delay_ms == 0 {
                0
            } else {
                rng.gen_range(0..max_delay_ms)
            };
            Banana {
                duration: Duration::from_millis(millis),
            }
        })
        .collect()
}

fn eat(bananas: &[Banana]) {
    for banana in bananas {
        thread::sleep(banana.duration);
    }
}

/// Runs the demo, drawing the progress bar on `sink`.
///
/// # Arguments
///
/// * `options` - Run parameters
/// * `sink` - Destination for the progress bar, released when the run ends
///
/// # Errors
///
/// Returns an error if:
/// - `total` or `batch` is zero
/// - The sink rejects a write
pub fn run_demo<W: Write>(options: &DemoOptions, sink: W) -> Result<RunSummary> {
    if options.batch == 0 {
        return Err(Error::InvalidArgument(
            "batch size must be positive".to_string(),
        ));
    }

    let started = Instant::now();
    let bananas = generate_bananas(options.total, options.max_delay_ms, options.seed);

    let mut builder = TrackerBuilder::new(options.total).owns_sink(true);
    if let Some(name) = &options.element_name {
        builder = builder.element_name(name.clone());
    }
    let mut tracker = builder.build(sink)?;

    let mut updates = 0;
    for chunk in bananas.chunks(usize::try_from(options.batch).unwrap_or(usize::MAX)) {
        eat(chunk);
        tracker.update(chunk.len() as u64)?;
        updates += 1;
    }

    let summary = RunSummary {
        processed: tracker.processed(),
        updates,
        elapsed_ms: u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
        element_name: options.element_name.clone(),
    };
    info!(
        processed = summary.processed,
        updates = summary.updates,
        elapsed_ms = summary.elapsed_ms,
        "demo finished"
    );
    Ok(summary)
}
