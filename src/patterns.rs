use clap::ValueEnum;
use thiserror::Error;

use crate::cell::CellState;
use crate::grid::Grid;
use crate::grid::GridError;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PatternError {
    #[error("Unknown glyph '{glyph}' at line {line}, column {column}")]
    UnknownGlyph {
        line: usize,
        column: usize,
        glyph: char,
    },

    #[error("Invalid seed: {0}")]
    Grid(#[from] GridError),
}

/// Built-in seeds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Pattern {
    /// Period 2 oscillator, a vertical line of three cells
    #[default]
    Blinker,

    /// The smallest spaceship
    Glider,

    /// 2x2 still life
    Block,

    /// Period 2 oscillator made of two blocks
    Beacon,

    /// Nothing at all
    Empty,
}

impl Pattern {
    pub fn seed(&self) -> Grid {
        match self {
            Pattern::Blinker => blinker(),
            Pattern::Glider => glider(),
            Pattern::Block => block(),
            Pattern::Beacon => beacon(),
            Pattern::Empty => literal(&["."]),
        }
    }
}

/// A 5x5 seed with a vertical blinker in the middle column
pub fn blinker() -> Grid {
    literal(&[".....", "..O..", "..O..", "..O..", "....."])
}

pub fn glider() -> Grid {
    literal(&[".O.", "..O", "OOO"])
}

pub fn block() -> Grid {
    literal(&["....", ".OO.", ".OO.", "...."])
}

pub fn beacon() -> Grid {
    literal(&["OO..", "OO..", "..OO", "..OO"])
}

fn literal(rows: &[&str]) -> Grid {
    let rows = rows
        .iter()
        .map(|row| row.bytes().map(|b| CellState::from(b == b'O')));

    match Grid::from_seed(rows) {
        Ok(grid) => grid,
        Err(e) => unreachable!("built-in patterns are well formed: {e}"),
    }
}

/// Parse a plain text seed, one line per row.
///
/// `O`, `o`, `#`, `*` and `1` are alive. `.`, `X`, `x`, `0` and space are dead. Trailing blank
/// lines are ignored, and every other line must be just as long as the first.
pub fn parse_seed(text: &str) -> Result<Grid, PatternError> {
    let lines: Vec<&str> = text.trim_end_matches(['\n', '\r']).lines().collect();

    let mut rows = Vec::with_capacity(lines.len());

    for (line, text) in lines.iter().enumerate() {
        let mut row = Vec::with_capacity(text.len());

        for (column, glyph) in text.chars().enumerate() {
            let cell = match glyph {
                'O' | 'o' | '#' | '*' | '1' => CellState::Alive,
                '.' | 'X' | 'x' | '0' | ' ' => CellState::Dead,
                glyph => {
                    return Err(PatternError::UnknownGlyph {
                        line: line + 1,
                        column: column + 1,
                        glyph,
                    });
                }
            };

            row.push(cell);
        }

        rows.push(row);
    }

    Ok(Grid::from_seed(rows)?)
}
