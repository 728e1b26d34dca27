use std::{
    thread::sleep,
    time::{Duration, Instant},
};

/// Paces the driver loop to one generation per `interval`.
pub struct TickLimiter {
    interval: Duration,
    tick_timer: Instant,
}

impl TickLimiter {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            tick_timer: Instant::now(),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Blocks for whatever is left of the interval since the previous call.
    pub fn delay(&mut self) {
        let elapsed = self.tick_timer.elapsed();
        if self.interval > elapsed {
            sleep(self.interval - elapsed);
        }
        self.tick_timer = Instant::now();
    }
}

impl Default for TickLimiter {
    fn default() -> Self {
        Self::new(crate::Config::TICK)
    }
}
