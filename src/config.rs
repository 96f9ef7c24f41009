pub const BOARD_SIZE: usize = 8;
pub const PLANES_PER_SIDE: usize = 2;
pub const PLANE_CELLS: usize = 10;
