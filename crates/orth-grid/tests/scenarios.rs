//! Integration test: reference bridge layouts and their spanning results.

use orth_grid::{Grid, GridError};
use orth_test_utils::fixtures::{self, Scenario};
use orth_test_utils::{assert_partition_invariant, grid_with_bridges};

fn check(scenario: &Scenario) {
    let grid = scenario.build();
    assert_eq!(
        grid.is_spanning().unwrap(),
        scenario.spans,
        "scenario '{}'",
        scenario.name
    );
    assert_eq!(grid.occupied_count(), scenario.bridges.len());
    assert_partition_invariant(&grid);
}

#[test]
fn reference_scenarios() {
    for scenario in fixtures::ALL {
        check(scenario);
    }
}

#[test]
fn adding_the_missing_link_completes_the_bridge() {
    let mut grid = fixtures::BROKEN_3X4.build();
    assert!(!grid.is_spanning().unwrap());
    grid.occupy(&[1, 0]).unwrap();
    assert!(grid.is_spanning().unwrap());
}

#[test]
fn zero_dimensional_grid_rejects_every_lookup() {
    let grid = Grid::new(&[]).unwrap();
    let p = grid.partition().unwrap();
    assert!(p.occupied.is_empty() && p.empty.is_empty());
    let coords: [&[i32]; 3] = [&[], &[0], &[0, 0]];
    for coord in coords {
        assert!(matches!(
            grid.is_occupied(coord),
            Err(GridError::OutOfBounds { .. })
        ));
    }
}

#[test]
fn rendering_a_scenario() {
    let grid = grid_with_bridges(&[3, 2], &[&[0, 0], &[1, 0], &[1, 1]]);
    assert_eq!(grid.to_string(), " B B .\n . B .\n");
    assert!(!grid.is_spanning().unwrap());
}
