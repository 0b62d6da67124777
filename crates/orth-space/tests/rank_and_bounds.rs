use orth_core::GridError;
use orth_space::Orthotope;

#[test]
fn rank_handles_valid_and_invalid_coords() {
    let s = Orthotope::new(&[3, 4]).unwrap();
    assert_eq!(s.rank(&[2, 1]), Some(9));
    assert_eq!(s.rank(&[2]), None);
    assert_eq!(s.rank(&[3, 1]), None);
    assert_eq!(s.rank(&[2, 1, 0]), None);
}

#[test]
fn bounds_description_lists_every_axis() {
    let s = Orthotope::new(&[15, 10, 2]).unwrap();
    assert_eq!(s.bounds(), "[0, 15) x [0, 10) x [0, 2)");
}

#[test]
fn neighbour_ranks_cover_1d_and_3d_shapes() {
    let line = Orthotope::new(&[5]).unwrap();
    assert_eq!(line.neighbour_ranks(0).collect::<Vec<_>>(), vec![1]);
    assert_eq!(line.neighbour_ranks(2).collect::<Vec<_>>(), vec![1, 3]);
    assert_eq!(line.neighbour_ranks(4).collect::<Vec<_>>(), vec![3]);

    // 2x2x2 cube: rank 0 = [0,0,0]; strides are [4, 2, 1].
    let cube = Orthotope::new(&[2, 2, 2]).unwrap();
    assert_eq!(cube.neighbour_ranks(0).collect::<Vec<_>>(), vec![4, 2, 1]);
    assert_eq!(cube.neighbour_ranks(7).collect::<Vec<_>>(), vec![3, 5, 6]);
}

#[test]
fn high_dimensional_coords_spill_without_error() {
    let lengths = [2; 10];
    let s = Orthotope::new(&lengths).unwrap();
    assert_eq!(s.cell_count(), 1024);
    let corner = s.coord_of(0).unwrap();
    assert_eq!(corner.len(), 10);
    assert_eq!(s.neighbours(&corner).unwrap().len(), 10);
}

#[test]
fn out_of_bounds_error_carries_offending_coord() {
    let s = Orthotope::new(&[2, 2]).unwrap();
    match s.check_bounds(&[0, 9]) {
        Err(GridError::OutOfBounds { coord, bounds }) => {
            assert_eq!(coord.as_slice(), &[0, 9]);
            assert_eq!(bounds, "[0, 2) x [0, 2)");
        }
        other => panic!("expected OutOfBounds, got {other:?}"),
    }
}
