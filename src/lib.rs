mod error;
mod grid;
mod pattern;
mod render;
mod rules;
mod simulation;
mod utils;

pub use error::{Error, Result};
pub use grid::{dead_state, random_state, Cell, Grid};
pub use pattern::{load_game_state, parse_pattern};
pub use render::render;
pub use rules::{next_board_state, next_cell_value, number_of_neighbors};
pub use simulation::Simulation;
pub use utils::{init_logging, Config, TickLimiter};
