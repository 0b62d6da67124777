//! Error kinds for grid construction, cell access and traversal.
//!
//! Every fallible engine operation returns a [`GridError`]. The set is
//! closed: caller misuse (`InvalidDimensions`, `OutOfBounds`), a normal
//! terminal condition (`Exhausted`), and two kinds that indicate a broken
//! internal invariant (`InvalidKeyFormat`, `CorruptState`).

use crate::Coord;
use std::error::Error;
use std::fmt;

/// Errors from orthotope grid operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// A non-positive axis length was supplied at construction, or the
    /// total cell count does not fit in `usize`.
    InvalidDimensions {
        /// The rejected dimension lengths.
        lengths: Vec<i32>,
        /// What went wrong.
        reason: String,
    },
    /// A coordinate has the wrong arity or a component outside its axis.
    OutOfBounds {
        /// The offending coordinate.
        coord: Coord,
        /// Human-readable description of the valid range.
        bounds: String,
    },
    /// A random occupation was requested but no empty cell remains.
    Exhausted {
        /// Total number of cells in the grid, all of them occupied.
        cell_count: usize,
    },
    /// A key did not decode to a sequence of integers.
    InvalidKeyFormat {
        /// The full key being decoded.
        key: String,
        /// The component that failed to parse.
        component: String,
    },
    /// A cell was found in both partition sets or in neither.
    CorruptState {
        /// The cell whose membership is inconsistent.
        coord: Coord,
        /// Which consistency check failed.
        reason: String,
    },
}

impl GridError {
    /// Returns `true` for kinds that can only arise from a broken internal
    /// invariant, never from caller input.
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            Self::InvalidKeyFormat { .. } | Self::CorruptState { .. }
        )
    }
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { lengths, reason } => {
                write!(f, "invalid dimensions {lengths:?}: {reason}")
            }
            Self::OutOfBounds { coord, bounds } => {
                write!(f, "coordinate {coord:?} out of bounds: {bounds}")
            }
            Self::Exhausted { cell_count } => {
                write!(f, "no unoccupied cell left to build on ({cell_count} cells)")
            }
            Self::InvalidKeyFormat { key, component } => {
                write!(f, "invalid key format {key:?}: component {component:?} is not an integer")
            }
            Self::CorruptState { coord, reason } => {
                write!(f, "corrupt partition state at {coord:?}: {reason}")
            }
        }
    }
}

impl Error for GridError {}
