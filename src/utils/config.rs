use std::time::Duration;

pub struct Config;

impl Config {
    pub const RANDOM_HEIGHT: usize = 30;
    pub const RANDOM_WIDTH: usize = 80;
    pub const PATTERN_PATH: &'static str = "./Patterns/gosper_glider_gun.txt";

    pub const TICK: Duration = Duration::from_millis(30);

    pub const LIVE_GLYPH: char = '#';
    pub const DEAD_GLYPH: char = ' ';
    pub const BORDER_HORIZONTAL: char = '-';
    pub const BORDER_VERTICAL: char = '|';

    pub const LOG_FILTER: &'static str = "warn";
}
