use std::path::Path;

use crate::{Cell, Error, Grid, Result};

/// Parses a pattern where each line is a row of `0`/`1` characters.
///
/// Trailing blank lines are ignored; every other line must be as long as the first.
pub fn parse_pattern(data: &str) -> Result<Grid> {
    let mut lines = data.lines().collect::<Vec<_>>();
    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    let width = lines.first().ok_or(Error::EmptyPattern)?.chars().count();

    let mut grid = Grid::blank(lines.len(), width);
    for (row, line) in lines.iter().enumerate() {
        let found = line.chars().count();
        if found != width {
            return Err(Error::RaggedRow {
                row,
                expected: width,
                found,
            });
        }
        for (col, c) in line.chars().enumerate() {
            let cell = Cell::from_char(c).ok_or(Error::InvalidCellChar { row, col, found: c })?;
            grid.set(row, col, cell);
        }
    }
    Ok(grid)
}

/// Reads the whole file at `path` and parses it as a pattern.
pub fn load_game_state(path: impl AsRef<Path>) -> Result<Grid> {
    let path = path.as_ref();
    let data = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let grid = parse_pattern(&data)?;
    tracing::info!(
        path = %path.display(),
        height = grid.height(),
        width = grid.width(),
        population = grid.population(),
        "loaded pattern"
    );
    Ok(grid)
}

impl std::str::FromStr for Grid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_pattern(s)
    }
}
