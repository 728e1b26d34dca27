mod config;
mod logging;
mod tick_limit;

pub use config::Config;
pub use logging::init_logging;
pub use tick_limit::TickLimiter;
