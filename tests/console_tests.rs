use planes::console::{parse_cell, parse_orientation};
use planes::{Cell, Orientation};

#[test]
fn test_parses_standard_coordinates() {
    assert_eq!(parse_cell("A4"), Some(Cell::new(3, 0)));
    assert_eq!(parse_cell("h8"), Some(Cell::new(7, 7)));
    assert_eq!(parse_cell("E7"), Some(Cell::new(6, 4)));
}

#[test]
fn test_rejects_malformed_coordinates() {
    assert_eq!(parse_cell(""), None);
    assert_eq!(parse_cell("44"), None);
    assert_eq!(parse_cell("A0"), None);
    assert_eq!(parse_cell("A9"), None);
    assert_eq!(parse_cell("J4"), None);
    assert_eq!(parse_cell("AA"), None);
}

#[test]
fn test_parses_orientations() {
    assert_eq!(parse_orientation("up"), Some(Orientation::Up));
    assert_eq!(parse_orientation("DOWN"), Some(Orientation::Down));
    assert_eq!(parse_orientation("l"), Some(Orientation::Left));
    assert_eq!(parse_orientation("r"), Some(Orientation::Right));
    assert_eq!(parse_orientation("sideways"), None);
}
