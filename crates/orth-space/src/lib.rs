//! Bounded orthotope shapes for bridge grids.
//!
//! [`Orthotope`] describes the cell space of a grid: one length per axis,
//! the mixed-radix mapping between coordinates and linear ranks, bounds
//! validation, and axis-aligned (2·D) neighbourhoods. It holds no cell
//! state; occupancy lives in `orth-grid`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod orthotope;

#[cfg(test)]
pub(crate) mod compliance;

pub use orthotope::{NeighbourRanks, Orthotope};
