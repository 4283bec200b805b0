use thiserror::Error;
use tracing::trace;

use crate::cell::CellState;
use crate::cell::InvalidCellValue;
use crate::coord::Coord;
use crate::coord::Size;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("Invalid grid dimensions {width}x{height}")]
    InvalidDimension { width: usize, height: usize },

    #[error("Seed row {row} has {found} cells, expected {expected}")]
    InconsistentSeedShape {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Seed row {row}, column {column}: {source}")]
    InvalidCell {
        row: usize,
        column: usize,
        #[source]
        source: InvalidCellValue,
    },

    #[error("Cell ({x}, {y}) is outside of the {width}x{height} grid")]
    OutOfBounds {
        x: isize,
        y: isize,
        width: usize,
        height: usize,
    },
}

/// A fixed-size, zero-padded Life grid.
///
/// Reads outside of the grid always see [`CellState::Dead`], as if the grid were surrounded by an
/// infinite border of dead cells. Nothing wraps around.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Row-major cell storage, `width * height` long
    cells: Vec<CellState>,

    width: usize,
    height: usize,

    /// Number of times [`Grid::advance`] has been called
    generation: u64,
}

impl Grid {
    /// Create an all-dead grid
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        let len = width
            .checked_mul(height)
            .filter(|&len| len > 0 && len <= isize::MAX as usize)
            .ok_or(GridError::InvalidDimension { width, height })?;

        Ok(Self {
            cells: vec![CellState::Dead; len],
            width,
            height,
            generation: 0,
        })
    }

    /// Create a grid from literal rows. The grid is as tall as there are rows, and as wide as the
    /// first row. Every other row must be just as wide.
    pub fn from_seed<R, C>(rows: R) -> Result<Self, GridError>
    where
        R: IntoIterator,
        R::Item: IntoIterator<Item = C>,
        C: Into<CellState>,
    {
        let mut cells: Vec<CellState> = Vec::new();
        let mut width = 0;
        let mut height = 0;

        for (row, line) in rows.into_iter().enumerate() {
            let before = cells.len();
            cells.extend(line.into_iter().map(Into::into));
            let found = cells.len() - before;

            if row == 0 {
                width = found;
            } else if found != width {
                return Err(GridError::InconsistentSeedShape {
                    row,
                    expected: width,
                    found,
                });
            }

            height += 1;
        }

        if width == 0 || height == 0 {
            return Err(GridError::InvalidDimension { width, height });
        }

        Ok(Self {
            cells,
            width,
            height,
            generation: 0,
        })
    }

    /// Like [`Grid::from_seed`] but for `0`/`1` integer rows. Any other value is
    /// [`GridError::InvalidCell`].
    pub fn from_bits<R, B>(rows: R) -> Result<Self, GridError>
    where
        R: IntoIterator<Item = B>,
        B: AsRef<[u8]>,
    {
        let rows = rows
            .into_iter()
            .enumerate()
            .map(|(row, bits)| {
                bits.as_ref()
                    .iter()
                    .enumerate()
                    .map(|(column, &bit)| {
                        CellState::try_from(bit).map_err(|source| GridError::InvalidCell {
                            row,
                            column,
                            source,
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_seed(rows)
    }

    /// Create a `width` by `height` grid with `seed` stamped on it, its top-left corner at `at`.
    pub fn with_pattern(
        width: usize,
        height: usize,
        seed: &Grid,
        at: Coord,
    ) -> Result<Self, GridError> {
        let mut grid = Self::new(width, height)?;

        for (y, row) in seed.rows().enumerate() {
            for (x, &cell) in row.iter().enumerate() {
                if cell.is_alive() {
                    let (x, y) = ((at.x + x) as isize, (at.y + y) as isize);
                    grid.set(x, y, cell)?;
                }
            }
        }

        Ok(grid)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// Iterate over the rows of the grid, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[CellState]> {
        self.cells.chunks_exact(self.width)
    }

    /// Read a cell. Anything outside of the grid is dead.
    pub fn get(&self, x: isize, y: isize) -> CellState {
        if !self.size().contains(x, y) {
            return CellState::Dead;
        }

        self.cells[self.index(x as usize, y as usize)]
    }

    /// Write a cell. Unlike [`Grid::get`], writing outside of the grid is an error.
    pub fn set(&mut self, x: isize, y: isize, state: CellState) -> Result<(), GridError> {
        if !self.size().contains(x, y) {
            return Err(GridError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }

        let i = self.index(x as usize, y as usize);
        self.cells[i] = state;

        Ok(())
    }

    /// Compute the next generation.
    ///
    /// For every cell we sum the 3x3 block centered on it, the cell itself included:
    ///   - `3` means the cell is alive next generation: either it was dead with 3 live
    ///     neighbors, or it was alive with 2.
    ///   - `4` means the cell keeps its state: alive with 3 live neighbors survives, dead with 4
    ///     stays dead.
    ///   - Anything else means the cell is dead.
    ///
    /// The next generation is built in a separate buffer, so every sum only ever sees the previous
    /// generation.
    pub fn advance(&mut self) {
        let mut next = Vec::with_capacity(self.cells.len());

        for y in 0..self.height as isize {
            for x in 0..self.width as isize {
                let state = match self.neighborhood_sum(x, y) {
                    3 => CellState::Alive,
                    4 => self.get(x, y),
                    _ => CellState::Dead,
                };

                next.push(state);
            }
        }

        self.cells = next;
        self.generation += 1;

        trace!(generation = self.generation, "advanced grid");
    }

    /// Sum of the 3x3 block centered on `(x, y)`, `(x, y)` included
    fn neighborhood_sum(&self, x: isize, y: isize) -> u8 {
        let mut sum = 0;

        for dy in -1..=1 {
            for dx in -1..=1 {
                sum += self.get(x + dx, y + dy).as_count();
            }
        }

        sum
    }

    fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }
}
