//! Test utilities for orthotope grid development.
//!
//! Provides grid fixtures with preset bridges, the reference scenarios
//! used across test suites, and a partition invariant assertion that
//! cross-checks the flag store against the key-addressed view.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use orth_core::encode;
use orth_grid::Grid;

/// Build a seeded grid and place a bridge on every coordinate in `bridges`.
///
/// Panics if the lengths are invalid or a bridge is out of bounds; fixtures
/// are expected to be well-formed.
pub fn grid_with_bridges(lengths: &[i32], bridges: &[&[i32]]) -> Grid {
    let mut grid = Grid::with_seed(lengths, 0).expect("fixture lengths must be valid");
    for bridge in bridges {
        grid.occupy(bridge)
            .unwrap_or_else(|e| panic!("fixture bridge {bridge:?}: {e}"));
    }
    grid
}

/// Assert the partition invariant through every public view of the grid.
///
/// - the internal sweep passes;
/// - both key sets together hold exactly `cell_count` distinct keys;
/// - no key is in both sets;
/// - each cell's `is_occupied` answer matches the set holding its key.
pub fn assert_partition_invariant(grid: &Grid) {
    grid.check_invariants()
        .unwrap_or_else(|e| panic!("invariant sweep failed: {e}"));

    let partition = grid.partition().expect("partition view");
    assert_eq!(
        partition.len(),
        grid.cell_count(),
        "occupied ({}) + empty ({}) != cell_count ({})",
        partition.occupied.len(),
        partition.empty.len(),
        grid.cell_count()
    );
    assert_eq!(partition.occupied.len(), grid.occupied_count());
    assert_eq!(partition.empty.len(), grid.empty_count());

    for key in &partition.occupied {
        assert!(!partition.empty.contains(key), "key {key} in both sets");
    }
    for coord in grid.shape().canonical_ordering() {
        let key = encode(&coord);
        let occupied = grid.is_occupied(&coord).expect("in-bounds lookup");
        assert_eq!(
            occupied,
            partition.occupied.contains(&key),
            "is_occupied({coord:?}) disagrees with the key view"
        );
    }
}
