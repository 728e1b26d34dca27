#![warn(clippy::all)]

use anyhow::Context;
use conway_console::{init_logging, load_game_state, Config, Simulation};

fn main() -> anyhow::Result<()> {
    init_logging();

    let grid = load_game_state(Config::PATTERN_PATH)
        .with_context(|| format!("cannot start from `{}`", Config::PATTERN_PATH))?;
    let mut sim = Simulation::new(grid, Config::TICK);
    sim.run(&mut std::io::stdout().lock(), None)?;
    Ok(())
}
