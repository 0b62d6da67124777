//! Key-addressed view of the bridge/non-bridge partition.

use crate::grid::Grid;
use indexmap::IndexSet;
use orth_core::{encode, CoordKey, GridError};

/// Both partition sets of a [`Grid`], keyed by canonical [`CoordKey`].
///
/// Keys appear in canonical cell order. Built on demand by
/// [`Grid::partition`]; later changes to the grid are not reflected.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Partition {
    /// Keys of cells holding a bridge.
    pub occupied: IndexSet<CoordKey>,
    /// Keys of cells still empty.
    pub empty: IndexSet<CoordKey>,
}

impl Partition {
    /// Total number of keys across both sets.
    pub fn len(&self) -> usize {
        self.occupied.len() + self.empty.len()
    }

    /// Returns `true` if both sets are empty (the 0-dimensional grid).
    pub fn is_empty(&self) -> bool {
        self.occupied.is_empty() && self.empty.is_empty()
    }

    /// Returns `true` if `key` is in both sets or in neither.
    pub fn is_misplaced(&self, key: &CoordKey) -> bool {
        self.occupied.contains(key) == self.empty.contains(key)
    }
}

impl Grid {
    /// Materialise both partition sets as canonical keys.
    ///
    /// Returns `Err(GridError::CorruptState)` on the first cell that is in
    /// both sets or in neither.
    pub fn partition(&self) -> Result<Partition, GridError> {
        let mut partition = Partition::default();
        for (rank, coord) in self.shape().canonical_ordering().into_iter().enumerate() {
            let key = encode(&coord);
            if self.membership(rank)? {
                partition.occupied.insert(key);
            } else {
                partition.empty.insert(key);
            }
        }
        Ok(partition)
    }
}
