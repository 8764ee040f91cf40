// Rust guideline compliant 2026-02-06

//! ETA Printer Demo
//!
//! Simulates a batch job and draws its progress bar with speed and ETA.

use anyhow::Context;
use clap::Parser;
use etaprinter_cli::{init_tracing, run_demo, DemoOptions};
use etaprinter_core::{Config, OutputTarget};
use std::io;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "eta-demo",
    version,
    about = "Progress bar with speed and ETA for a simulated batch job",
    after_help = "Examples:\n  eta-demo\n  eta-demo --total 500 --batch 25 --element-name rows\n  eta-demo --stderr --json > summary.json\n"
)]
struct Cli {
    /// Number of items to process
    #[arg(long, default_value_t = 1000)]
    total: u64,

    /// Items processed between two progress updates
    #[arg(long, default_value_t = 10)]
    batch: u64,

    /// Upper bound on the simulated time per item, in milliseconds
    #[arg(long, default_value_t = 5)]
    max_delay_ms: u64,

    /// Seed for the simulated item durations
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Item name shown next to the speed
    #[arg(long)]
    element_name: Option<String>,

    /// Draw the progress bar on stderr instead of stdout
    #[arg(long)]
    stderr: bool,

    /// Configuration file path
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log level (error, warn, info, debug)
    #[arg(long)]
    log_level: Option<String>,

    /// Write JSON logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Print a JSON run summary on stdout when done
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref()).context("failed to load configuration")?;
    let log_level = cli.log_level.as_deref().unwrap_or(&config.log_level);
    let _guard = init_tracing(log_level, cli.log_file.as_deref())?;

    let output = if cli.stderr {
        OutputTarget::Stderr
    } else {
        config.output
    };
    let options = DemoOptions {
        total: cli.total,
        batch: cli.batch,
        max_delay_ms: cli.max_delay_ms,
        seed: cli.seed,
        element_name: cli.element_name.or(config.element_name),
    };

    let summary = match output {
        OutputTarget::Stdout => run_demo(&options, io::stdout()),
        OutputTarget::Stderr => run_demo(&options, io::stderr()),
    }
    .context("demo run failed")?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }

    Ok(())
}
