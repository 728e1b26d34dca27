use std::{
    io::{self, Write},
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    time::Duration,
};

use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{Clear, ClearType},
};

use crate::{next_board_state, render, Grid, TickLimiter};

/// Owns the current generation and drives the render/step/pause loop.
pub struct Simulation {
    grid: Grid,           // Current generation.
    generation: u64,      // Number of steps taken since the initial grid.
    limiter: TickLimiter, // Pause between generations.
    stop: Arc<AtomicBool>,
}

impl Simulation {
    pub fn new(grid: Grid, tick: Duration) -> Self {
        Self {
            grid,
            generation: 0,
            limiter: TickLimiter::new(tick),
            stop: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn tick(&self) -> Duration {
        self.limiter.interval()
    }

    /// Setting the returned flag ends `run` before the next generation is drawn.
    pub fn stop_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.stop)
    }

    /// Replaces the current grid with its successor.
    pub fn step(&mut self) -> &Grid {
        self.grid = next_board_state(&self.grid);
        self.generation += 1;
        tracing::debug!(
            generation = self.generation,
            population = self.grid.population(),
            "step"
        );
        &self.grid
    }

    /// Draws the current generation over the previous one at the top of `out`.
    pub fn draw<W: Write>(&self, out: &mut W) -> io::Result<()> {
        queue!(out, MoveTo(0, 0), Clear(ClearType::FromCursorDown))?;
        out.write_all(render(&self.grid).as_bytes())?;
        out.flush()
    }

    /// Renders, steps and pauses until `limit` generations have been shown,
    /// or forever if `limit` is `None`.
    pub fn run<W: Write>(&mut self, out: &mut W, limit: Option<u64>) -> io::Result<()> {
        let mut shown = 0;
        while limit.map_or(true, |n| shown < n) {
            if self.stop.load(Ordering::Relaxed) {
                tracing::info!(generation = self.generation, "stopped");
                break;
            }
            self.draw(out)?;
            self.step();
            self.limiter.delay();
            shown += 1;
        }
        Ok(())
    }
}
