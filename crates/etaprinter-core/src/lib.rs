// Rust guideline compliant 2026-02-06

//! ETA Printer Core Library
//!
//! This crate renders a console progress bar with throughput and ETA for a
//! batch job of known size:
//! - Tracker (cumulative state, step timing, terminal transition)
//! - Estimation (per-item duration grouping, speed unit, ETA)
//! - Status rendering (fixed-width bar, duration formatting)
//! - Configuration and error types

pub mod clock;
pub mod config;
pub mod error;
pub mod estimate;
pub mod status;
pub mod tracker;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{Config, OutputTarget};
pub use error::{Error, ErrorCode, Result};
pub use estimate::{Estimate, SpeedUnit, StepTiming};
pub use status::{format_duration, render_bar, render_full, render_percentage_only};
pub use tracker::{Tracker, TrackerBuilder, TrackerState};
