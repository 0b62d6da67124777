//! The bridge-building loop.
//!
//! [`Simulation`] owns a [`Grid`] and advances it one random placement at a
//! time. [`step()`](Simulation::step) is the single-placement primitive;
//! [`run()`](Simulation::run) drives it to completion with pacing and
//! logging and returns a [`SimReport`].
//!
//! Spanning is checked before the first placement and after every
//! placement, so a run stops on the step that completes the first path.

use std::fmt;
use std::thread;

use orth_core::{Coord, GridError};
use orth_grid::Grid;
use tracing::{debug, info, warn};

use crate::config::SimConfig;
use crate::error::SimError;

// ── StepOutcome ───────────────────────────────────────────────────

/// Result of a single [`Simulation::step()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// A bridge was placed and the grid does not span yet.
    Continue {
        /// Cell that received the bridge.
        placed: Coord,
    },
    /// A bridge was placed and the grid now spans axis 0.
    Spanned {
        /// Cell that received the bridge.
        placed: Coord,
    },
    /// No empty cell was left; nothing was placed.
    Exhausted,
}

impl StepOutcome {
    /// Whether the loop should stop after this step.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Continue { .. })
    }

    /// The cell built on this step, if any.
    pub fn placed(&self) -> Option<&Coord> {
        match self {
            Self::Continue { placed } | Self::Spanned { placed } => Some(placed),
            Self::Exhausted => None,
        }
    }
}

// ── Outcome / SimReport ───────────────────────────────────────────

/// Why a [`Simulation::run()`] stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// A connected path of bridges joins both faces of axis 0.
    Spanned,
    /// Every cell holds a bridge and nothing spans.
    Exhausted,
    /// The configured `max_steps` was reached first.
    StepLimit,
}

impl Outcome {
    /// `true` only for [`Outcome::Spanned`].
    pub fn is_success(self) -> bool {
        self == Self::Spanned
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Spanned => write!(f, "spanned"),
            Self::Exhausted => write!(f, "exhausted"),
            Self::StepLimit => write!(f, "step limit reached"),
        }
    }
}

/// Summary of a finished run.
#[derive(Clone, Debug, PartialEq)]
pub struct SimReport {
    /// Why the run stopped.
    pub outcome: Outcome,
    /// Bridges placed by this simulation.
    pub steps: u64,
    /// Occupied cells at the end of the run.
    pub occupied: usize,
    /// Total cells in the grid.
    pub cell_count: usize,
    /// Size of the spanning cluster, when the grid spans.
    pub cluster_size: Option<usize>,
}

impl SimReport {
    /// Fraction of cells occupied at the end of the run.
    pub fn occupied_fraction(&self) -> f64 {
        if self.cell_count == 0 {
            return 0.0;
        }
        self.occupied as f64 / self.cell_count as f64
    }
}

// ── Simulation ────────────────────────────────────────────────────

/// A single bridge-building run over one grid.
pub struct Simulation {
    grid: Grid,
    config: SimConfig,
    steps: u64,
}

impl Simulation {
    /// Validate `config` and allocate an all-empty grid.
    pub fn new(config: SimConfig) -> Result<Self, SimError> {
        config.validate()?;
        let grid = build_grid(&config)?;
        Ok(Self {
            grid,
            config,
            steps: 0,
        })
    }

    /// Place one bridge on a uniformly random empty cell and report
    /// whether the grid now spans.
    ///
    /// A full grid yields [`StepOutcome::Exhausted`] rather than an error;
    /// only corrupt grid state is returned as `Err`.
    pub fn step(&mut self) -> Result<StepOutcome, SimError> {
        let placed = match self.grid.occupy_random() {
            Ok(coord) => coord,
            Err(GridError::Exhausted { .. }) => return Ok(StepOutcome::Exhausted),
            Err(e) => return Err(e.into()),
        };
        self.steps += 1;
        if self.grid.is_spanning()? {
            Ok(StepOutcome::Spanned { placed })
        } else {
            Ok(StepOutcome::Continue { placed })
        }
    }

    /// Step until the grid spans, fills up, or hits `max_steps`.
    ///
    /// Sleeps `step_delay` between placements and logs the rendered grid
    /// every `render_every` placements at `info` level.
    pub fn run(&mut self) -> Result<SimReport, SimError> {
        info!(
            lengths = ?self.config.lengths,
            cells = self.grid.cell_count(),
            seed = ?self.config.seed,
            "starting bridge simulation"
        );

        if self.grid.is_spanning()? {
            return self.finish(Outcome::Spanned);
        }

        loop {
            if let Some(limit) = self.config.max_steps {
                if self.steps >= limit {
                    warn!(steps = self.steps, "step limit reached before any path spanned");
                    return self.finish(Outcome::StepLimit);
                }
            }

            let outcome = self.step()?;
            if let Some(placed) = outcome.placed() {
                debug!(step = self.steps, ?placed, "placed bridge");
                self.maybe_render();
            }

            match outcome {
                StepOutcome::Continue { .. } => {}
                StepOutcome::Spanned { .. } => return self.finish(Outcome::Spanned),
                StepOutcome::Exhausted => {
                    warn!(cells = self.grid.cell_count(), "grid full without a spanning path");
                    return self.finish(Outcome::Exhausted);
                }
            }

            if !self.config.step_delay.is_zero() {
                thread::sleep(self.config.step_delay);
            }
        }
    }

    /// Discard all bridges and start again with a fresh grid.
    ///
    /// `seed` replaces the configured seed for the new run.
    pub fn reset(&mut self, seed: Option<u64>) -> Result<(), SimError> {
        self.config.seed = seed;
        self.grid = build_grid(&self.config)?;
        self.steps = 0;
        Ok(())
    }

    /// The grid being built on.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The configuration this simulation was built from.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Bridges placed so far.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    fn maybe_render(&self) {
        if let Some(every) = self.config.render_every {
            if self.steps % every == 0 {
                info!(step = self.steps, "\n{}", self.grid);
            }
        }
    }

    fn finish(&self, outcome: Outcome) -> Result<SimReport, SimError> {
        let cluster_size = self.grid.spanning_cluster()?.map(|cells| cells.len());
        let report = SimReport {
            outcome,
            steps: self.steps,
            occupied: self.grid.occupied_count(),
            cell_count: self.grid.cell_count(),
            cluster_size,
        };
        info!(
            %outcome,
            steps = report.steps,
            occupied = report.occupied,
            cells = report.cell_count,
            cluster = ?report.cluster_size,
            "simulation finished"
        );
        Ok(report)
    }
}

fn build_grid(config: &SimConfig) -> Result<Grid, GridError> {
    match config.seed {
        Some(seed) => Grid::with_seed(&config.lengths, seed),
        None => Grid::new(&config.lengths),
    }
}

impl fmt::Debug for Simulation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Simulation")
            .field("lengths", &self.grid.lengths())
            .field("seed", &self.config.seed)
            .field("steps", &self.steps)
            .field("occupied", &self.grid.occupied_count())
            .finish()
    }
}
