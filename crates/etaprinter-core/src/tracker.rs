// Rust guideline compliant 2026-02-06

//! Batch progress tracker.
//!
//! A [`Tracker`] is created once per batch job with the number of items to
//! process. Each call to [`Tracker::update`] reports the items finished since
//! the previous call; the tracker measures the elapsed time, estimates speed
//! and ETA, and redraws the status line on its sink. Reaching the total
//! closes the tracker:
//!
//! - Active → Closed when `processed == total`
//! - Active → Closed on [`Tracker::finish`]
//!
//! Any call after that fails with [`Error::ClosedTracker`].

use crate::clock::{Clock, SystemClock};
use crate::estimate::{self, Estimate, StepTiming};
use crate::status;
use crate::{Error, Result};
use std::io::{self, Stdout, Write};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Lifecycle state of a tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackerState {
    /// Accepting updates.
    Active,
    /// Terminal render written; no further updates allowed.
    Closed,
}

impl TrackerState {
    /// Moves to `Closed`.
    ///
    /// # Returns
    ///
    /// `true` if this call performed the transition, `false` if the state
    /// was already closed.
    pub fn close(&mut self) -> bool {
        let was_active = *self == TrackerState::Active;
        *self = TrackerState::Closed;
        was_active
    }
}

/// Construction parameters for a [`Tracker`].
#[derive(Debug, Clone)]
pub struct TrackerBuilder<C = SystemClock> {
    total: u64,
    element_name: Option<String>,
    owns_sink: bool,
    clock: C,
}

impl TrackerBuilder<SystemClock> {
    /// Starts a builder for a batch of `total` items.
    #[must_use]
    pub fn new(total: u64) -> Self {
        Self {
            total,
            element_name: None,
            owns_sink: false,
            clock: SystemClock,
        }
    }
}

impl<C: Clock> TrackerBuilder<C> {
    /// Sets the item name shown next to the speed, e.g. `bananas`.
    #[must_use]
    pub fn element_name(mut self, name: impl Into<String>) -> Self {
        self.element_name = Some(name.into());
        self
    }

    /// Whether the tracker releases the sink on its terminal transition.
    #[must_use]
    pub fn owns_sink(mut self, owns_sink: bool) -> Self {
        self.owns_sink = owns_sink;
        self
    }

    /// Replaces the time source.
    #[must_use]
    pub fn clock<C2: Clock>(self, clock: C2) -> TrackerBuilder<C2> {
        TrackerBuilder {
            total: self.total,
            element_name: self.element_name,
            owns_sink: self.owns_sink,
            clock,
        }
    }

    /// Creates the tracker and writes the initial 0% status.
    ///
    /// # Arguments
    ///
    /// * `sink` - Destination for the status line
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `total` is zero
    /// - The initial status cannot be written
    pub fn build<W: Write>(self, sink: W) -> Result<Tracker<W, C>> {
        if self.total == 0 {
            return Err(Error::InvalidArgument(
                "total number of items to process must be positive".to_string(),
            ));
        }

        let last_step = self.clock.now();
        let mut tracker = Tracker {
            element_name: self.element_name,
            total: self.total,
            processed: 0,
            last_step,
            state: TrackerState::Active,
            sink: Some(sink),
            owns_sink: self.owns_sink,
            clock: self.clock,
        };
        debug!(total = tracker.total, "tracker created");
        tracker.update(0)?;
        Ok(tracker)
    }
}

/// Progress bar with speed and ETA for a batch of known size.
pub struct Tracker<W: Write, C: Clock = SystemClock> {
    element_name: Option<String>,
    total: u64,
    processed: u64,
    last_step: Instant,
    state: TrackerState,
    sink: Option<W>,
    owns_sink: bool,
    clock: C,
}

impl Tracker<Stdout, SystemClock> {
    /// Creates an unnamed tracker printing to standard output.
    ///
    /// # Errors
    ///
    /// Returns an error if `total` is zero or stdout cannot be written.
    pub fn stdout(total: u64) -> Result<Self> {
        TrackerBuilder::new(total).build(io::stdout())
    }
}

impl<W: Write> Tracker<W, SystemClock> {
    /// Creates a tracker writing to `sink`. The sink is not released on
    /// completion; use [`TrackerBuilder::owns_sink`] for that.
    ///
    /// # Errors
    ///
    /// Returns an error if `total` is zero or the initial status cannot be
    /// written.
    pub fn new(element_name: Option<&str>, total: u64, sink: W) -> Result<Self> {
        let mut builder = TrackerBuilder::new(total);
        if let Some(name) = element_name {
            builder = builder.element_name(name);
        }
        builder.build(sink)
    }
}

impl<W: Write, C: Clock> Tracker<W, C> {
    /// Reports `step_count` newly processed items and redraws the status.
    ///
    /// A zero step only redraws the bar; no speed is estimated. Reaching the
    /// total closes the tracker and writes the terminal status instead.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The tracker is already closed
    /// - The step would push the processed count past the total
    /// - The sink rejects the write; the processed count is kept anyway
    pub fn update(&mut self, step_count: u64) -> Result<()> {
        if self.state == TrackerState::Closed {
            return Err(Error::ClosedTracker);
        }

        let processed = self
            .processed
            .checked_add(step_count)
            .filter(|processed| *processed <= self.total)
            .ok_or_else(|| {
                Error::InvalidArgument(format!(
                    "step of {} items exceeds remaining {} of {}",
                    step_count,
                    self.total - self.processed,
                    self.total
                ))
            })?;

        let now = self.clock.now();
        let elapsed_millis =
            u64::try_from(now.saturating_duration_since(self.last_step).as_millis())
                .unwrap_or(u64::MAX);
        let timing = StepTiming::measure(step_count, elapsed_millis);
        self.last_step = now;
        self.processed = processed;

        debug!(
            step_count,
            elapsed_millis,
            processed,
            total = self.total,
            ?timing,
            "progress update"
        );

        if processed == self.total {
            return self.close();
        }

        let percentage = self.percentage();
        let line = match timing {
            Some(timing) => {
                let estimate = Estimate::new(timing, self.total - processed);
                status::render_full(
                    self.element_name.as_deref(),
                    percentage,
                    estimate.speed,
                    estimate.unit,
                    estimate.eta,
                )
            }
            None => status::render_percentage_only(percentage),
        };
        self.write_line(&line)
    }

    /// Writes the terminal status without waiting for the total.
    ///
    /// # Errors
    ///
    /// Returns an error if the tracker is already closed or the sink
    /// rejects the write.
    pub fn finish(&mut self) -> Result<()> {
        if self.state == TrackerState::Closed {
            return Err(Error::ClosedTracker);
        }
        self.close()
    }

    /// Number of items processed so far.
    #[must_use]
    pub fn processed(&self) -> u64 {
        self.processed
    }

    /// Number of items in the batch.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Truncated completion percentage.
    #[must_use]
    pub fn percentage(&self) -> u8 {
        estimate::percentage(self.processed, self.total)
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> TrackerState {
        self.state
    }

    /// Whether the terminal status was written.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.state == TrackerState::Closed
    }

    /// Item name shown next to the speed.
    #[must_use]
    pub fn element_name(&self) -> Option<&str> {
        self.element_name.as_deref()
    }

    /// Hands back the sink, unless it was owned and already released.
    #[must_use]
    pub fn into_sink(mut self) -> Option<W> {
        self.sink.take()
    }

    fn close(&mut self) -> Result<()> {
        if !self.state.close() {
            return Ok(());
        }
        info!(
            processed = self.processed,
            total = self.total,
            "batch complete"
        );

        let written = self.write_line(&status::render_complete());
        if self.owns_sink {
            // Dropping the sink closes it.
            drop(self.sink.take());
        }
        written
    }

    fn write_line(&mut self, line: &str) -> Result<()> {
        let Some(sink) = self.sink.as_mut() else {
            return Ok(());
        };
        sink.write_all(b"\r")?;
        sink.write_all(line.as_bytes())?;
        sink.flush()?;
        Ok(())
    }
}

impl<W: Write, C: Clock> Drop for Tracker<W, C> {
    fn drop(&mut self) {
        let Some(sink) = self.sink.as_mut() else {
            return;
        };
        if self.state == TrackerState::Active {
            warn!(
                processed = self.processed,
                total = self.total,
                "tracker dropped before the batch completed"
            );
        }
        if let Err(err) = sink.flush() {
            warn!(error = %err, "failed to flush sink on drop");
        }
    }
}

impl<W: Write, C: Clock> std::fmt::Debug for Tracker<W, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tracker")
            .field("element_name", &self.element_name)
            .field("total", &self.total)
            .field("processed", &self.processed)
            .field("state", &self.state)
            .field("owns_sink", &self.owns_sink)
            .finish()
    }
}
