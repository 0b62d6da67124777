//! Orthotope contract test helpers.
//!
//! These functions verify the invariants every shape must satisfy,
//! whatever its dimension count. Reused across the orthotope test module.

use crate::orthotope::Orthotope;
use indexmap::IndexSet;

/// Assert that `b in neighbours(a)` implies `a in neighbours(b)`.
pub fn assert_neighbours_symmetric(shape: &Orthotope) {
    for coord in shape.canonical_ordering() {
        for nb in shape.neighbours(&coord).unwrap() {
            let nb_neighbours = shape.neighbours(&nb).unwrap();
            assert!(
                nb_neighbours.contains(&coord),
                "neighbour symmetry violated: {nb:?} in N({coord:?}) but {coord:?} not in N({nb:?})"
            );
        }
    }
}

/// Assert that the rank form of the neighbourhood matches the coordinate form.
pub fn assert_neighbour_ranks_match_coords(shape: &Orthotope) {
    for (rank, coord) in shape.canonical_ordering().into_iter().enumerate() {
        let by_coord: Vec<usize> = shape
            .neighbours(&coord)
            .unwrap()
            .iter()
            .map(|nb| shape.rank(nb).unwrap())
            .collect();
        let by_rank: Vec<usize> = shape.neighbour_ranks(rank).collect();
        assert_eq!(
            by_coord, by_rank,
            "neighbour_ranks({rank}) disagrees with neighbours({coord:?})"
        );
    }
}

/// Assert that `canonical_ordering` returns exactly `cell_count` unique
/// in-bounds coords whose position equals their rank.
pub fn assert_canonical_ordering_complete(shape: &Orthotope) {
    let ordering = shape.canonical_ordering();
    assert_eq!(
        ordering.len(),
        shape.cell_count(),
        "canonical_ordering length ({}) != cell_count ({})",
        ordering.len(),
        shape.cell_count()
    );
    let unique: IndexSet<_> = ordering.iter().collect();
    assert_eq!(
        unique.len(),
        shape.cell_count(),
        "canonical_ordering has duplicates"
    );
    for (i, coord) in ordering.iter().enumerate() {
        assert_eq!(shape.rank(coord), Some(i), "rank({coord:?}) != {i}");
    }
}

/// Assert that two calls to `canonical_ordering` return the same result.
pub fn assert_canonical_ordering_deterministic(shape: &Orthotope) {
    let a = shape.canonical_ordering();
    let b = shape.canonical_ordering();
    assert_eq!(a, b, "canonical_ordering is non-deterministic");
}

/// Run all compliance checks on a shape.
pub fn run_full_compliance(shape: &Orthotope) {
    assert_neighbours_symmetric(shape);
    assert_neighbour_ranks_match_coords(shape);
    assert_canonical_ordering_complete(shape);
    assert_canonical_ordering_deterministic(shape);
}
