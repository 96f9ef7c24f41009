//! Computer shot selection: random search plus neighbor probing.

use std::collections::{HashSet, VecDeque};

use rand::seq::SliceRandom;
use rand::Rng;

use crate::common::Cell;
use crate::config::BOARD_SIZE;

/// Targeting state for the computer player.
///
/// Every chosen cell lands in `visited` and is never picked again by the
/// random search. After a non-destroying hit, the free neighbors of the hit
/// cell are queued and worked through breadth-first until the queue drains
/// or the plane goes down.
pub struct Targeting {
    visited: HashSet<Cell>,
    queue: VecDeque<Cell>,
}

impl Targeting {
    /// Fresh targeting state. The four corners are seeded as visited
    /// opening probes; no plane can occupy a corner, so nothing is lost.
    pub fn new() -> Self {
        let last = BOARD_SIZE as i8 - 1;
        let visited = HashSet::from([
            Cell::new(0, 0),
            Cell::new(0, last),
            Cell::new(last, 0),
            Cell::new(last, last),
        ]);
        Targeting {
            visited,
            queue: VecDeque::new(),
        }
    }

    /// Choose the next shot: the queue front while probing around a hit,
    /// otherwise a random unvisited cell. The chosen cell is recorded as
    /// visited before it is returned.
    pub fn next_target<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Cell {
        let cell = match self.queue.pop_front() {
            Some(cell) => cell,
            None => self.random_unvisited(rng),
        };
        self.visited.insert(cell);
        cell
    }

    /// Rejection-sample an unvisited cell. Unbounded in the worst case, but
    /// expected O(1) while most of the board is unexplored; with 64 cells
    /// and 20 plane segments the game ends long before sampling degrades.
    fn random_unvisited<R: Rng + ?Sized>(&self, rng: &mut R) -> Cell {
        let n = BOARD_SIZE as i8;
        loop {
            let cell = Cell::new(rng.random_range(0..n), rng.random_range(0..n));
            if !self.visited.contains(&cell) {
                return cell;
            }
        }
    }

    /// After a non-destroying hit, queue the in-bounds unvisited
    /// 4-neighbors of `cell` in random order.
    pub fn enqueue_neighbors<R: Rng + ?Sized>(&mut self, cell: Cell, rng: &mut R) {
        let mut directions: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
        directions.shuffle(rng);
        for (dr, dc) in directions {
            let next = Cell::new(cell.row + dr, cell.col + dc);
            if next.in_bounds() && !self.visited.contains(&next) {
                self.queue.push_back(next);
            }
        }
    }

    /// After destroying a plane, absorb its cells into the visited set and
    /// abandon the local search.
    pub fn plane_destroyed(&mut self, cells: &[Cell]) {
        self.visited.extend(cells.iter().copied());
        self.queue.clear();
    }

    /// Whether `cell` has already been chosen or absorbed.
    pub fn is_visited(&self, cell: Cell) -> bool {
        self.visited.contains(&cell)
    }

    /// Number of queued follow-up probes.
    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }
}

impl Default for Targeting {
    fn default() -> Self {
        Self::new()
    }
}
