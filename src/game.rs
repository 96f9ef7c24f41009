//! Core game state: boards, plane lists and turn resolution.

use log::debug;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::ai::Targeting;
use crate::common::{Cell, HitResult, PlacementError, Winner};
use crate::config::{BOARD_SIZE, PLANES_PER_SIDE};
use crate::grid::{Grid8, Marker};
use crate::plane::{Orientation, Plane};

/// The game engine: both sides' boards and planes, the player's record of
/// shots at the computer, and the computer's targeting state.
///
/// The engine is the sole owner and mutator of its grids. Board getters
/// return by-value snapshots, so callers can never alias engine state.
pub struct GameEngine {
    player_board: Grid8,
    computer_board: Grid8,
    hit_board: Grid8,
    player_planes: Vec<Plane>,
    computer_planes: Vec<Plane>,
    targeting: Targeting,
    rng: SmallRng,
}

impl GameEngine {
    /// New engine with an OS-seeded RNG. The computer's planes are placed
    /// immediately; the player's side starts empty.
    pub fn new() -> Self {
        Self::with_rng(SmallRng::from_rng(&mut rand::rng()))
    }

    /// New engine with a fixed seed, for reproducible games.
    pub fn from_seed(seed: u64) -> Self {
        Self::with_rng(SmallRng::seed_from_u64(seed))
    }

    /// New engine drawing all randomness from `rng`.
    pub fn with_rng(mut rng: SmallRng) -> Self {
        let mut computer_board = Grid8::new(Marker::Empty);
        let computer_planes = place_random_planes(&mut computer_board, &mut rng);
        GameEngine {
            player_board: Grid8::new(Marker::Empty),
            computer_board,
            hit_board: Grid8::new(Marker::Empty),
            player_planes: Vec::new(),
            computer_planes,
            targeting: Targeting::new(),
            rng,
        }
    }

    /// Throw away all progress and start a fresh game. State is rebuilt
    /// wholesale; the RNG stream carries on from where it was.
    pub fn reset(&mut self) {
        *self = Self::with_rng(self.rng.clone());
    }

    /// Snapshot of the board holding the player's planes.
    pub fn player_board(&self) -> Grid8 {
        self.player_board
    }

    /// Snapshot of the board holding the computer's planes.
    pub fn computer_board(&self) -> Grid8 {
        self.computer_board
    }

    /// Snapshot of the player's record of shots at the computer.
    pub fn hit_board(&self) -> Grid8 {
        self.hit_board
    }

    /// Number of planes still alive on the player's side.
    pub fn player_planes_left(&self) -> usize {
        self.player_planes.len()
    }

    /// Number of planes still alive on the computer's side.
    pub fn computer_planes_left(&self) -> usize {
        self.computer_planes.len()
    }

    /// Validate and place one of the player's planes.
    ///
    /// The engine does not cap the number of planes; the front end is
    /// responsible for stopping after two.
    pub fn add_player_plane(
        &mut self,
        cabin: Cell,
        orientation: Orientation,
    ) -> Result<(), PlacementError> {
        let plane = Plane::new(cabin, orientation);
        plane.validate(&self.player_board)?;
        for &cell in plane.cells() {
            self.player_board.set(cell, Marker::Plane)?;
        }
        debug!("player plane placed: cabin {} heading {}", cabin, orientation);
        self.player_planes.push(plane);
        Ok(())
    }

    /// Resolve the player's shot at `cell`.
    ///
    /// A cabin strike destroys the whole plane, revealing it on both the
    /// computer board and the shot board. A repeat shot at an already
    /// resolved cell re-applies the same classification; the cell no longer
    /// reads as a live segment, so it counts as a miss.
    pub fn player_hit(&mut self, cell: Cell) -> Result<HitResult, PlacementError> {
        if !cell.in_bounds() {
            return Err(PlacementError::OutsidePlayingArea(cell));
        }
        if let Some(i) = self.computer_planes.iter().position(|p| p.cabin() == cell) {
            let plane = self.computer_planes.remove(i);
            for &c in plane.cells() {
                self.computer_board.set(c, Marker::Hit)?;
                self.hit_board.set(c, Marker::Hit)?;
            }
            debug!("player destroyed the plane at {}", cell);
            return Ok(HitResult::Cabin);
        }
        if self.computer_board.get(cell)? == Marker::Plane {
            self.computer_board.set(cell, Marker::Hit)?;
            self.hit_board.set(cell, Marker::Hit)?;
            return Ok(HitResult::Hit);
        }
        self.hit_board.set(cell, Marker::Miss)?;
        Ok(HitResult::Miss)
    }

    /// Let the computer take its shot against the player's board.
    ///
    /// A cabin strike reveals the destroyed plane and sends the search back
    /// to random scanning; a segment hit queues the neighboring cells for
    /// follow-up probes.
    pub fn computer_hit(&mut self) -> Result<HitResult, PlacementError> {
        let cell = self.targeting.next_target(&mut self.rng);
        debug!("computer targets {}", cell);
        if let Some(i) = self.player_planes.iter().position(|p| p.cabin() == cell) {
            let plane = self.player_planes.remove(i);
            for &c in plane.cells() {
                self.player_board.set(c, Marker::Hit)?;
            }
            self.targeting.plane_destroyed(plane.cells());
            return Ok(HitResult::Cabin);
        }
        if self.player_board.get(cell)? == Marker::Plane {
            self.player_board.set(cell, Marker::Hit)?;
            self.targeting.enqueue_neighbors(cell, &mut self.rng);
            return Ok(HitResult::Hit);
        }
        self.player_board.set(cell, Marker::Miss)?;
        Ok(HitResult::Miss)
    }

    /// The winner, if either side is out of planes.
    pub fn winner(&self) -> Option<Winner> {
        if self.computer_planes.is_empty() {
            Some(Winner::Human)
        } else if self.player_planes.is_empty() {
            Some(Winner::Computer)
        } else {
            None
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Stamp `PLANES_PER_SIDE` random valid planes onto `board`.
///
/// Candidates are drawn uniformly (any cabin, any orientation) and invalid
/// ones retried silently. There is no iteration cap; with two ten-cell
/// planes on an 8×8 board a valid candidate always turns up quickly.
fn place_random_planes<R: Rng>(board: &mut Grid8, rng: &mut R) -> Vec<Plane> {
    let n = BOARD_SIZE as i8;
    let mut planes = Vec::with_capacity(PLANES_PER_SIDE);
    while planes.len() < PLANES_PER_SIDE {
        let cabin = Cell::new(rng.random_range(0..n), rng.random_range(0..n));
        let orientation = Orientation::ALL[rng.random_range(0..Orientation::ALL.len())];
        let plane = Plane::new(cabin, orientation);
        if plane.validate(board).is_err() {
            continue;
        }
        for &cell in plane.cells() {
            // in range: the plane was just validated against this board
            let _ = board.set(cell, Marker::Plane);
        }
        debug!("computer plane placed: cabin {} heading {}", cabin, orientation);
        planes.push(plane);
    }
    planes
}
