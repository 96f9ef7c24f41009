use planes::{Cell, Grid8, Marker, Orientation, PlacementError, Plane};

#[test]
fn test_left_plane_matches_known_cells() {
    let plane = Plane::new(Cell::new(2, 0), Orientation::Left);
    let expected = [
        (2, 0),
        (0, 1),
        (1, 1),
        (2, 1),
        (3, 1),
        (4, 1),
        (2, 2),
        (1, 3),
        (2, 3),
        (3, 3),
    ];
    assert_eq!(plane.cells().len(), 10);
    for (r, c) in expected {
        assert!(plane.contains(Cell::new(r, c)), "missing ({}, {})", r, c);
    }
}

#[test]
fn test_cabin_is_first_cell_and_cells_are_distinct() {
    for orientation in Orientation::ALL {
        let cabin = Cell::new(4, 4);
        let plane = Plane::new(cabin, orientation);
        assert_eq!(plane.cells()[0], cabin);
        let mut cells = plane.cells().to_vec();
        cells.sort_unstable();
        cells.dedup();
        assert_eq!(cells.len(), 10);
    }
}

#[test]
fn test_opposite_orientations_reflect_through_the_cabin() {
    let cabin = Cell::new(3, 3);
    let up = Plane::new(cabin, Orientation::Up);
    let down = Plane::new(cabin, Orientation::Down);
    for (u, d) in up.cells().iter().zip(down.cells()) {
        assert_eq!(d.row - cabin.row, cabin.row - u.row);
        assert_eq!(d.col - cabin.col, cabin.col - u.col);
    }
    let left = Plane::new(cabin, Orientation::Left);
    let right = Plane::new(cabin, Orientation::Right);
    for (l, r) in left.cells().iter().zip(right.cells()) {
        assert_eq!(r.row - cabin.row, cabin.row - l.row);
        assert_eq!(r.col - cabin.col, cabin.col - l.col);
    }
}

#[test]
fn test_validate_accepts_in_bounds_plane() {
    let board = Grid8::default();
    let plane = Plane::new(Cell::new(2, 0), Orientation::Left);
    assert!(plane.validate(&board).is_ok());
}

#[test]
fn test_validate_rejects_out_of_range_cabin() {
    let board = Grid8::default();
    let plane = Plane::new(Cell::new(-1, 3), Orientation::Down);
    assert_eq!(
        plane.validate(&board).unwrap_err(),
        PlacementError::InvalidCabin(Cell::new(-1, 3))
    );
}

#[test]
fn test_validate_rejects_cells_off_the_board() {
    let board = Grid8::default();
    // cabin in range, but the body pokes past the left edge
    let plane = Plane::new(Cell::new(2, 0), Orientation::Right);
    assert!(matches!(
        plane.validate(&board).unwrap_err(),
        PlacementError::OutsidePlayingArea(_)
    ));
}

#[test]
fn test_validate_rejects_overlap() {
    let mut board = Grid8::default();
    let first = Plane::new(Cell::new(2, 0), Orientation::Left);
    for &cell in first.cells() {
        board.set(cell, Marker::Plane).unwrap();
    }
    let second = Plane::new(Cell::new(2, 1), Orientation::Left);
    assert!(matches!(
        second.validate(&board).unwrap_err(),
        PlacementError::OverlapsExistingPlane(_)
    ));
    // validation never wrote to the board
    assert_eq!(board.count(Marker::Plane), 10);
}
