use std::collections::BTreeMap;

use log::debug;

use crate::error::{GridError, Result};
use crate::grid::Grid;

/// A named preset. Cells are `(row, col)` offsets inside the pattern's own
/// bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

#[rustfmt::skip]
pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "glider",
        cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
    },
    Pattern {
        name: "blinker",
        cells: &[(0, 0), (0, 1), (0, 2)],
    },
    Pattern {
        name: "toad",
        cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
    },
    Pattern {
        name: "beacon",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
    },
    Pattern {
        name: "pulsar",
        cells: &[
            (0, 2), (0, 3), (0, 4), (0, 8), (0, 9), (0, 10),
            (2, 0), (2, 5), (2, 7), (2, 12),
            (3, 0), (3, 5), (3, 7), (3, 12),
            (4, 0), (4, 5), (4, 7), (4, 12),
            (5, 2), (5, 3), (5, 4), (5, 8), (5, 9), (5, 10),
            (7, 2), (7, 3), (7, 4), (7, 8), (7, 9), (7, 10),
            (8, 0), (8, 5), (8, 7), (8, 12),
            (9, 0), (9, 5), (9, 7), (9, 12),
            (10, 0), (10, 5), (10, 7), (10, 12),
            (12, 2), (12, 3), (12, 4), (12, 8), (12, 9), (12, 10),
        ],
    },
    Pattern {
        name: "r-pentomino",
        cells: &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)],
    },
    Pattern {
        name: "gosper-glider-gun",
        cells: &[
            (4, 0), (4, 1), (5, 0), (5, 1),
            (4, 10), (5, 10), (6, 10), (3, 11), (7, 11), (2, 12), (8, 12),
            (2, 13), (8, 13), (5, 14), (3, 15), (7, 15), (4, 16), (5, 16),
            (6, 16), (5, 17), (2, 20), (3, 20), (4, 20), (2, 21), (3, 21),
            (4, 21), (1, 22), (5, 22), (0, 24), (1, 24), (5, 24), (6, 24),
            (2, 34), (3, 34), (2, 35), (3, 35),
        ],
    },
];

impl Pattern {
    /// Rows and columns spanned by the pattern.
    pub fn extent(&self) -> (usize, usize) {
        self.cells
            .iter()
            .fold((0, 0), |(rows, cols), &(r, c)| (rows.max(r + 1), cols.max(c + 1)))
    }

    /// Places the pattern in the middle of a blank `side`x`side` grid.
    pub fn to_grid(&self, side: usize) -> Result<Grid> {
        let blank = Grid::blank(side)?;
        let (rows, cols) = self.extent();
        if rows > side || cols > side {
            return Err(GridError::PatternTooLarge {
                name: self.name.to_string(),
                rows,
                cols,
                side,
            });
        }
        let (top, left) = ((side - rows) / 2, (side - cols) / 2);
        let placed: Vec<_> = self
            .cells
            .iter()
            .map(|&(r, c)| (top + r, left + c))
            .collect();
        blank.with_alive(&placed)
    }
}

pub fn find(name: &str) -> Option<&'static Pattern> {
    PATTERNS.iter().find(|pattern| pattern.name == name)
}

/// Label to grid mapping used to seed a simulation of one side length.
#[derive(Debug, Clone)]
pub struct PatternBook {
    side: usize,
    grids: BTreeMap<String, Grid>,
}

impl PatternBook {
    pub fn empty(side: usize) -> Result<Self> {
        if side == 0 {
            return Err(GridError::InvalidDimension { side });
        }
        Ok(PatternBook {
            side,
            grids: BTreeMap::new(),
        })
    }

    /// Every preset from [`PATTERNS`] that fits in a `side`x`side` grid.
    pub fn standard(side: usize) -> Result<Self> {
        let mut book = Self::empty(side)?;
        for pattern in PATTERNS {
            match pattern.to_grid(side) {
                Ok(grid) => {
                    book.grids.insert(pattern.name.to_string(), grid);
                }
                Err(err) => debug!("skipping preset {}: {}", pattern.name, err),
            }
        }
        Ok(book)
    }

    pub fn side(&self) -> usize {
        self.side
    }

    /// Adds or replaces an entry, returning the grid previously stored under
    /// `label`.
    pub fn register(&mut self, label: impl Into<String>, grid: Grid) -> Result<Option<Grid>> {
        if grid.side() != self.side {
            return Err(GridError::SideMismatch {
                expected: self.side,
                found: grid.side(),
            });
        }
        Ok(self.grids.insert(label.into(), grid))
    }

    pub fn get(&self, label: &str) -> Result<&Grid> {
        self.grids
            .get(label)
            .ok_or_else(|| GridError::PatternNotFound(label.to_string()))
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.grids.keys().map(String::as_str)
    }
}
