use conway_console::{init_logging, random_state, Config, Simulation};

fn main() -> anyhow::Result<()> {
    init_logging();

    let grid = random_state(Config::RANDOM_HEIGHT, Config::RANDOM_WIDTH);
    tracing::info!(
        height = grid.height(),
        width = grid.width(),
        population = grid.population(),
        "starting from random grid"
    );
    let mut sim = Simulation::new(grid, Config::TICK);
    sim.run(&mut std::io::stdout().lock(), None)?;
    Ok(())
}
