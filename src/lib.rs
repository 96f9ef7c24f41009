mod ai;
mod common;
mod config;
pub mod console;
mod game;
mod grid;
mod logging;
mod plane;

pub use ai::*;
pub use common::*;
pub use config::*;
pub use console::Console;
pub use game::*;
pub use grid::*;
pub use logging::init_logging;
pub use plane::*;
