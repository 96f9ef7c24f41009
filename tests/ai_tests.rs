use std::collections::HashSet;

use planes::{Cell, Targeting};
use rand::rngs::SmallRng;
use rand::SeedableRng;

const CORNERS: [Cell; 4] = [
    Cell::new(0, 0),
    Cell::new(0, 7),
    Cell::new(7, 0),
    Cell::new(7, 7),
];

#[test]
fn test_corners_are_never_chosen_and_targets_never_repeat() {
    let mut rng = SmallRng::seed_from_u64(99);
    let mut targeting = Targeting::new();
    let mut seen = HashSet::new();
    // 60 draws exhaust every non-corner cell exactly once
    for _ in 0..60 {
        let cell = targeting.next_target(&mut rng);
        assert!(cell.in_bounds());
        assert!(!CORNERS.contains(&cell));
        assert!(seen.insert(cell), "cell {} chosen twice", cell);
    }
}

#[test]
fn test_neighbors_are_probed_after_a_hit() {
    let mut rng = SmallRng::seed_from_u64(7);
    let mut targeting = Targeting::new();
    let hit = Cell::new(3, 3);
    targeting.enqueue_neighbors(hit, &mut rng);
    assert_eq!(targeting.queue_len(), 4);
    let neighbors = [
        Cell::new(2, 3),
        Cell::new(4, 3),
        Cell::new(3, 2),
        Cell::new(3, 4),
    ];
    for _ in 0..4 {
        let cell = targeting.next_target(&mut rng);
        assert!(neighbors.contains(&cell));
    }
    assert_eq!(targeting.queue_len(), 0);
}

#[test]
fn test_edge_neighbors_stay_in_bounds() {
    let mut rng = SmallRng::seed_from_u64(7);
    let mut targeting = Targeting::new();
    targeting.enqueue_neighbors(Cell::new(0, 3), &mut rng);
    assert_eq!(targeting.queue_len(), 3);
}

#[test]
fn test_visited_neighbors_are_not_requeued() {
    let mut rng = SmallRng::seed_from_u64(1);
    let mut targeting = Targeting::new();
    // (0,1) sits next to the pre-visited corner (0,0) and the edge
    targeting.enqueue_neighbors(Cell::new(0, 1), &mut rng);
    assert_eq!(targeting.queue_len(), 2);
}

#[test]
fn test_destroying_a_plane_abandons_the_local_search() {
    let mut rng = SmallRng::seed_from_u64(3);
    let mut targeting = Targeting::new();
    targeting.enqueue_neighbors(Cell::new(3, 3), &mut rng);
    assert!(targeting.queue_len() > 0);
    let cells = [Cell::new(5, 5), Cell::new(5, 6)];
    targeting.plane_destroyed(&cells);
    assert_eq!(targeting.queue_len(), 0);
    assert!(targeting.is_visited(Cell::new(5, 5)));
    assert!(targeting.is_visited(Cell::new(5, 6)));
}
