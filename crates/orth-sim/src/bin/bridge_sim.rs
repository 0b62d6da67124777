use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use orth_sim::{SimConfig, Simulation};
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "bridge-sim",
    version,
    about = "Build bridges on random cells of an N-dimensional grid until a path spans axis 0"
)]
struct Cli {
    /// Comma-separated axis lengths, axis 0 first (e.g. 15,10 or 4,4,4).
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true, default_values_t = vec![15, 10])]
    dims: Vec<i32>,

    /// Seed for reproducible runs; omit for a different run each time.
    #[arg(long)]
    seed: Option<u64>,

    /// Pause between placements in milliseconds.
    #[arg(long, default_value_t = 300)]
    delay_ms: u64,

    /// Give up after this many placements.
    #[arg(long)]
    max_steps: Option<u64>,

    /// Log the grid every N placements.
    #[arg(long, default_value_t = 1)]
    render_every: u64,

    /// Do not log the grid, only the start and the final report.
    #[arg(long)]
    quiet: bool,
}

fn main() -> Result<ExitCode> {
    init_tracing();
    let cli = Cli::parse();

    let config = SimConfig {
        lengths: cli.dims,
        seed: cli.seed,
        step_delay: Duration::from_millis(cli.delay_ms),
        max_steps: cli.max_steps,
        render_every: (!cli.quiet).then_some(cli.render_every),
    };

    let mut sim = Simulation::new(config).context("failed to set up simulation")?;
    let report = sim.run().context("simulation aborted")?;
    info!(
        "{} after {} bridges ({:.1}% of {} cells occupied)",
        report.outcome,
        report.steps,
        report.occupied_fraction() * 100.0,
        report.cell_count
    );

    Ok(if report.outcome.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
