//! Integration test: randomised fills keep the partition invariant and
//! eventually span.

use orth_grid::{Grid, GridError};
use orth_test_utils::assert_partition_invariant;

fn fill_until_spanning(lengths: &[i32], seed: u64) -> (Grid, usize) {
    let mut grid = Grid::with_seed(lengths, seed).unwrap();
    let total = grid.cell_count();
    let mut steps = 0;
    while !grid.is_spanning().unwrap() {
        let before = grid.empty_count();
        let placed = grid.occupy_random().unwrap();
        steps += 1;
        assert!(grid.is_occupied(&placed).unwrap());
        assert_eq!(grid.empty_count(), before - 1);
        assert_eq!(grid.occupied_count() + grid.empty_count(), total);
    }
    (grid, steps)
}

#[test]
fn random_fill_2d_spans_before_exhaustion() {
    for seed in 0..20 {
        let (grid, steps) = fill_until_spanning(&[15, 10], seed);
        // At least one bridge per column of axis 0 is needed.
        assert!(steps >= 15, "seed {seed}: spanned after {steps} steps");
        assert!(steps <= grid.cell_count());
        assert_partition_invariant(&grid);
    }
}

#[test]
fn random_fill_3d_spans() {
    for seed in 0..5 {
        let (grid, _) = fill_until_spanning(&[5, 4, 3], seed);
        let cluster = grid.spanning_cluster().unwrap().expect("spanning cluster");
        assert!(cluster.iter().any(|c| c[0] == 0));
        assert!(cluster.iter().any(|c| c[0] == 4));
        assert_partition_invariant(&grid);
    }
}

#[test]
fn invariant_holds_after_every_step_to_exhaustion() {
    let mut grid = Grid::with_seed(&[3, 3, 2], 99).unwrap();
    assert_partition_invariant(&grid);
    loop {
        match grid.occupy_random() {
            Ok(_) => assert_partition_invariant(&grid),
            Err(GridError::Exhausted { cell_count }) => {
                assert_eq!(cell_count, 18);
                break;
            }
            Err(other) => panic!("unexpected error: {other}"),
        }
    }
    assert_eq!(grid.empty_count(), 0);
    assert!(grid.is_spanning().unwrap());
    assert_eq!(
        grid.occupy_random(),
        Err(GridError::Exhausted { cell_count: 18 })
    );
    assert_partition_invariant(&grid);
}
