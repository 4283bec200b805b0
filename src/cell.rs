use thiserror::Error;

/// State of a single grid position.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellState {
    #[default]
    Dead,
    Alive,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid cell value {0}, expected 0 or 1")]
pub struct InvalidCellValue(pub u8);

impl CellState {
    /// The opposite state
    pub const fn toggled(self) -> Self {
        match self {
            CellState::Dead => CellState::Alive,
            CellState::Alive => CellState::Dead,
        }
    }

    pub const fn is_alive(self) -> bool {
        matches!(self, CellState::Alive)
    }

    /// Contribution of this cell to a neighborhood sum
    pub const fn as_count(self) -> u8 {
        match self {
            CellState::Dead => 0,
            CellState::Alive => 1,
        }
    }
}

impl From<bool> for CellState {
    fn from(alive: bool) -> Self {
        if alive {
            CellState::Alive
        } else {
            CellState::Dead
        }
    }
}

impl TryFrom<u8> for CellState {
    type Error = InvalidCellValue;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(CellState::Dead),
            1 => Ok(CellState::Alive),
            n => Err(InvalidCellValue(n)),
        }
    }
}
