//! Text rendering of small grids.
//!
//! 1-D grids render as a single line, 2-D grids as one line per axis-1
//! value with axis 0 running left to right. Each cell is written as a space
//! followed by its marker. Grids with three or more axes render as
//! [`UNSUPPORTED_MARKER`]; the 0-D grid renders as the empty string.

use crate::grid::{CellState, Grid};
use std::fmt;

/// Marker for a cell holding a bridge.
pub const BRIDGE_MARKER: char = 'B';
/// Marker for an empty cell.
pub const EMPTY_MARKER: char = '.';
/// Rendering of any grid with three or more axes.
pub const UNSUPPORTED_MARKER: &str = "HIGHER DIMENSIONS UNSUPPORTED";

impl Grid {
    /// Render the grid as text. Equivalent to `to_string()`.
    pub fn render(&self) -> String {
        self.to_string()
    }

    fn write_cell(&self, f: &mut fmt::Formatter<'_>, coord: &[i32]) -> fmt::Result {
        let marker = match self.shape().rank(coord).map(|rank| self.flag(rank)) {
            Some(CellState::Bridge) => BRIDGE_MARKER,
            _ => EMPTY_MARKER,
        };
        write!(f, " {marker}")
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self.lengths() {
            [] => Ok(()),
            [len] => {
                for x in 0..len {
                    self.write_cell(f, &[x])?;
                }
                Ok(())
            }
            [len0, len1] => {
                for y in 0..len1 {
                    for x in 0..len0 {
                        self.write_cell(f, &[x, y])?;
                    }
                    writeln!(f)?;
                }
                Ok(())
            }
            _ => f.write_str(UNSUPPORTED_MARKER),
        }
    }
}
