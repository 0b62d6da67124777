//! Simulation configuration and validation.
//!
//! [`SimConfig`] describes one run of the bridge-building driver.
//! [`validate()`](SimConfig::validate) rejects configurations that could
//! never produce a meaningful run before any grid is allocated.

use std::error::Error;
use std::fmt;
use std::time::Duration;

// ── SimConfig ─────────────────────────────────────────────────────

/// Parameters for a [`Simulation`](crate::Simulation).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimConfig {
    /// Axis lengths of the grid, axis 0 first. Spanning is checked along
    /// axis 0. Default: `[15, 10]`.
    pub lengths: Vec<i32>,
    /// RNG seed. `None` seeds from the thread-local generator, so each run
    /// differs. Default: `None`.
    pub seed: Option<u64>,
    /// Pause between consecutive placements. Default: 300 ms.
    pub step_delay: Duration,
    /// Stop after this many placements even if nothing spans.
    /// Default: `None` (run until the grid spans or fills up).
    pub max_steps: Option<u64>,
    /// Log the rendered grid every N placements. `None` disables grid
    /// output. Default: `Some(1)`.
    pub render_every: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            lengths: vec![15, 10],
            seed: None,
            step_delay: Duration::from_millis(300),
            max_steps: None,
            render_every: Some(1),
        }
    }
}

impl SimConfig {
    /// Check the configuration for values that can never yield a run.
    ///
    /// A 0-dimensional grid is a valid engine shape but has no cells, so it
    /// is refused here rather than reported as an immediate exhaustion.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.lengths.is_empty() {
            return Err(ConfigError::NoDimensions);
        }
        if let Some((axis, &value)) = self.lengths.iter().enumerate().find(|(_, len)| **len <= 0) {
            return Err(ConfigError::InvalidLength { axis, value });
        }
        if self.max_steps == Some(0) {
            return Err(ConfigError::ZeroStepLimit);
        }
        if self.render_every == Some(0) {
            return Err(ConfigError::ZeroRenderInterval);
        }
        Ok(())
    }
}

// ── ConfigError ───────────────────────────────────────────────────

/// Errors detected during [`SimConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// No axis lengths were given.
    NoDimensions,
    /// An axis length is zero or negative.
    InvalidLength {
        /// Index of the offending axis.
        axis: usize,
        /// The rejected length.
        value: i32,
    },
    /// `max_steps` is `Some(0)`, which would stop before the first step.
    ZeroStepLimit,
    /// `render_every` is `Some(0)`.
    ZeroRenderInterval,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoDimensions => write!(f, "at least one axis length is required"),
            Self::InvalidLength { axis, value } => {
                write!(f, "axis {axis} has length {value}, must be positive")
            }
            Self::ZeroStepLimit => write!(f, "max_steps must be at least 1"),
            Self::ZeroRenderInterval => write!(f, "render_every must be at least 1"),
        }
    }
}

impl Error for ConfigError {}
