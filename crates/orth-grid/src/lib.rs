//! The bridge grid engine.
//!
//! A [`Grid`] partitions every cell of an [`Orthotope`] into bridges
//! (occupied) and non-bridges (empty). Cells move one way only, from empty
//! to occupied, either at a chosen coordinate ([`Grid::occupy`]) or at a
//! uniformly random empty cell ([`Grid::occupy_random`]).
//! [`Grid::is_spanning`] reports whether some connected cluster of bridges
//! touches both faces of axis 0.
//!
//! # Example
//!
//! ```
//! use orth_grid::Grid;
//!
//! let mut grid = Grid::with_seed(&[3, 4], 7).unwrap();
//! grid.occupy(&[0, 1]).unwrap();
//! grid.occupy(&[1, 1]).unwrap();
//! assert!(!grid.is_spanning().unwrap());
//! grid.occupy(&[2, 1]).unwrap();
//! assert!(grid.is_spanning().unwrap());
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod grid;
pub mod partition;
pub mod render;
pub mod span;

pub use grid::{CellState, Grid};
pub use orth_core::{Coord, CoordKey, GridError};
pub use orth_space::Orthotope;
pub use partition::Partition;
pub use render::{BRIDGE_MARKER, EMPTY_MARKER, UNSUPPORTED_MARKER};
