use std::fmt;

use crate::{Cell, Config, Grid};

/// Draws `grid` inside a frame of `-` and `|`, one text line per row.
pub fn render(grid: &Grid) -> String {
    grid.to_string()
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let border = Config::BORDER_HORIZONTAL
            .to_string()
            .repeat(self.width() + 2);
        writeln!(f, "{}", border)?;
        for row in self.rows() {
            let line = row
                .iter()
                .map(|&c| match c {
                    Cell::Live => Config::LIVE_GLYPH,
                    Cell::Dead => Config::DEAD_GLYPH,
                })
                .collect::<String>();
            writeln!(
                f,
                "{}{}{}",
                Config::BORDER_VERTICAL,
                line,
                Config::BORDER_VERTICAL
            )?;
        }
        writeln!(f, "{}", border)
    }
}
