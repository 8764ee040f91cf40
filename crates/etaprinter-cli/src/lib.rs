// Rust guideline compliant 2026-02-06

//! ETA printer demo library.
//!
//! Exposes the demo workload and logging setup for use in tests.

pub mod demo;
pub mod logging;

pub use demo::{run_demo, DemoOptions, RunSummary};
pub use logging::{init_tracing, parse_log_level};
