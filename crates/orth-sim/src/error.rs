//! Error type for the simulation driver.

use crate::config::ConfigError;
use orth_core::GridError;
use std::error::Error;
use std::fmt;

/// Errors that abort a [`Simulation`](crate::Simulation).
///
/// Running out of empty cells is not an error here: it is reported as
/// [`Outcome::Exhausted`](crate::Outcome::Exhausted).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SimError {
    /// The configuration failed validation.
    Config(ConfigError),
    /// The grid rejected an operation or detected corrupt state.
    Grid(GridError),
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Grid(e) => write!(f, "grid: {e}"),
        }
    }
}

impl Error for SimError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Grid(e) => Some(e),
        }
    }
}

impl From<ConfigError> for SimError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<GridError> for SimError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}
