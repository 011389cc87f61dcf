use log::debug;
use rand::Rng;

use crate::error::Result;
use crate::grid::CellState::{Alive, Dead};
use crate::grid::{CellState, Grid};
use crate::patterns::PatternBook;

/// Side length used when nothing else is configured.
pub const DEFAULT_SIDE: usize = 20;
/// Side length of the reference 100x100 instance.
pub const REFERENCE_SIDE: usize = 100;

/// Builds fresh grids owned by the caller.
pub struct GridFactory;

impl GridFactory {
    /// A blank grid, or one where every cell is alive on a fair coin flip.
    pub fn produce_square_grid(side: usize, random: bool) -> Result<Grid> {
        Self::produce_square_grid_with(side, random, &mut rand::rng())
    }

    /// [`produce_square_grid`](Self::produce_square_grid) with a caller-supplied
    /// random source.
    pub fn produce_square_grid_with<R: Rng>(
        side: usize,
        random: bool,
        rng: &mut R,
    ) -> Result<Grid> {
        if !random {
            return Grid::blank(side);
        }
        let cells: Vec<Vec<CellState>> = (0..side)
            .map(|_| {
                (0..side)
                    .map(|_| if rng.random_bool(0.5) { Alive } else { Dead })
                    .collect()
            })
            .collect();
        let grid = Grid::from_rows(cells)?;
        debug!("random {}x{} grid, population {}", side, side, grid.population());
        Ok(grid)
    }

    /// The grid to restore: `previous` if given, otherwise the blank grid of
    /// `side`. `side` is not consulted when `previous` is supplied.
    pub fn reset_grid(previous: Option<&Grid>, side: usize) -> Result<Grid> {
        match previous {
            Some(grid) => Ok(grid.clone()),
            None => Grid::blank(side),
        }
    }

    pub fn update_with_pattern(book: &PatternBook, label: &str) -> Result<Grid> {
        book.get(label).cloned()
    }
}
