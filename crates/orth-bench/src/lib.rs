//! Benchmark profiles for the orthotope bridge grid.
//!
//! - [`reference_config`]: 100x100 grid (10K cells), no pacing, no rendering
//! - [`stress_config`]: 32x32x32 grid (~32K cells) for higher-dimensional runs
//! - [`filled_grid`]: a grid with a fixed fraction of random bridges

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::time::Duration;

use orth_core::GridError;
use orth_grid::Grid;
use orth_sim::SimConfig;

/// 100x100 simulation that runs flat out with no grid output.
pub fn reference_config(seed: u64) -> SimConfig {
    unpaced(vec![100, 100], seed)
}

/// 32x32x32 simulation, same settings as [`reference_config`].
pub fn stress_config(seed: u64) -> SimConfig {
    unpaced(vec![32, 32, 32], seed)
}

/// Seeded grid with `fraction` of its cells built on (rounded down).
pub fn filled_grid(lengths: &[i32], fraction: f64, seed: u64) -> Result<Grid, GridError> {
    let mut grid = Grid::with_seed(lengths, seed)?;
    let target = (grid.cell_count() as f64 * fraction.clamp(0.0, 1.0)) as usize;
    for _ in 0..target {
        grid.occupy_random()?;
    }
    Ok(grid)
}

fn unpaced(lengths: Vec<i32>, seed: u64) -> SimConfig {
    SimConfig {
        lengths,
        seed: Some(seed),
        step_delay: Duration::ZERO,
        max_steps: None,
        render_every: None,
    }
}
