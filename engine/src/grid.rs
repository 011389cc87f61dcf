use std::fmt;
use std::str::FromStr;

use crate::error::{GridError, Result};
use crate::grid::CellState::{Alive, Dead};

/// State of a single cell. The discriminants are the sentinel values used at
/// the integer boundary (`1` alive, `-1` dead).
#[repr(i8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellState {
    Dead = -1,
    Alive = 1,
}

impl CellState {
    pub fn value(self) -> i8 {
        self as i8
    }

    pub fn is_alive(self) -> bool {
        self == Alive
    }

    pub fn flipped(self) -> Self {
        match self {
            Alive => Dead,
            Dead => Alive,
        }
    }

    /// State of this cell in the next generation, given its live neighbor count.
    ///
    /// Birth and survival collapse into one test: three live neighbors always
    /// yield a live cell, two keep a live cell alive, anything else is dead.
    pub fn next(self, live_neighbors: usize) -> Self {
        match (self, live_neighbors) {
            (_, 3) | (Alive, 2) => Alive,
            _ => Dead,
        }
    }
}

impl TryFrom<i8> for CellState {
    type Error = i8;

    fn try_from(value: i8) -> std::result::Result<Self, Self::Error> {
        match value {
            1 => Ok(Alive),
            -1 => Ok(Dead),
            other => Err(other),
        }
    }
}

/// A square, edge-bounded grid of cells.
///
/// Every constructor validates that the grid is square and non-empty, and no
/// method mutates an existing grid: operations that change cells return a new
/// one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Vec<CellState>>,
}

impl Grid {
    /// The canonical blank grid: every cell dead.
    pub fn blank(side: usize) -> Result<Self> {
        if side == 0 {
            return Err(GridError::InvalidDimension { side });
        }
        Ok(Grid {
            cells: vec![vec![Dead; side]; side],
        })
    }

    pub fn from_rows(cells: Vec<Vec<CellState>>) -> Result<Self> {
        let side = cells.len();
        if side == 0 {
            return Err(GridError::InvalidDimension { side });
        }
        if let Some((row, found)) = cells
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != side)
        {
            return Err(GridError::InvalidGridShape {
                row,
                expected: side,
                found,
            });
        }
        Ok(Grid { cells })
    }

    /// Builds a grid from sentinel integers, rejecting anything but `1` and `-1`.
    pub fn from_values(values: Vec<Vec<i8>>) -> Result<Self> {
        let mut cells = Vec::with_capacity(values.len());
        for (row, row_values) in values.into_iter().enumerate() {
            let parsed = row_values
                .into_iter()
                .enumerate()
                .map(|(col, value)| {
                    CellState::try_from(value)
                        .map_err(|value| GridError::InvalidCellValue { row, col, value })
                })
                .collect::<Result<Vec<_>>>()?;
            cells.push(parsed);
        }
        Self::from_rows(cells)
    }

    pub fn side(&self) -> usize {
        self.cells.len()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<CellState> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    pub fn rows(&self) -> &[Vec<CellState>] {
        &self.cells
    }

    pub fn population(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| cell.is_alive())
            .count()
    }

    pub fn to_values(&self) -> Vec<Vec<i8>> {
        self.cells
            .iter()
            .map(|row| row.iter().map(|cell| cell.value()).collect())
            .collect()
    }

    /// Returns a copy of this grid with the cell at `(row, col)` flipped.
    pub fn toggled(&self, row: usize, col: usize) -> Result<Self> {
        self.check_bounds(row, col)?;
        let mut cells = self.cells.clone();
        cells[row][col] = cells[row][col].flipped();
        Ok(Grid { cells })
    }

    /// Returns a copy of this grid with every listed position alive.
    pub fn with_alive(&self, positions: &[(usize, usize)]) -> Result<Self> {
        let mut cells = self.cells.clone();
        for &(row, col) in positions {
            self.check_bounds(row, col)?;
            cells[row][col] = Alive;
        }
        Ok(Grid { cells })
    }

    /// Builds a grid of the same side by computing each cell from its position
    /// and current state.
    pub(crate) fn map_cells<F>(&self, mut f: F) -> Grid
    where
        F: FnMut(usize, usize, CellState) -> CellState,
    {
        let cells = self
            .cells
            .iter()
            .enumerate()
            .map(|(row, cells)| {
                cells
                    .iter()
                    .enumerate()
                    .map(|(col, &cell)| f(row, col, cell))
                    .collect()
            })
            .collect();
        Grid { cells }
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<()> {
        let side = self.side();
        if row >= side || col >= side {
            return Err(GridError::OutOfBounds { row, col, side });
        }
        Ok(())
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for cell in row {
                f.write_str(if cell.is_alive() { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Parses the text form written by `Display`. Blank lines are skipped;
/// `#`, `*`, `O` and `1` mark live cells, `.`, `-`, `0` and space dead ones.
impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self> {
        let mut cells = Vec::new();
        for (index, line) in s.lines().enumerate() {
            let line = line.trim_end_matches('\r');
            if line.is_empty() {
                continue;
            }
            let row = line
                .chars()
                .map(|ch| match ch {
                    '#' | '*' | 'O' | '1' => Ok(Alive),
                    '.' | '-' | '0' | ' ' => Ok(Dead),
                    ch => Err(GridError::Parse {
                        line: index + 1,
                        ch,
                    }),
                })
                .collect::<Result<Vec<_>>>()?;
            cells.push(row);
        }
        Grid::from_rows(cells)
    }
}
