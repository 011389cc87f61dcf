use log::trace;

use crate::grid::{CellState, Grid};

/// Row/column offsets of the eight cells surrounding a position.
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Where a cell sits on the grid, which fixes how many neighbors it has.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionClass {
    /// The only cell of a 1x1 grid.
    Single,
    Corner,
    Edge,
    Interior,
}

impl PositionClass {
    /// Classifies `(row, col)` on a `side`x`side` grid.
    pub fn of(side: usize, row: usize, col: usize) -> Self {
        if side <= 1 {
            return PositionClass::Single;
        }
        let last = side.saturating_sub(1);
        let on_row_edge = row == 0 || row == last;
        let on_col_edge = col == 0 || col == last;
        match (on_row_edge, on_col_edge) {
            (true, true) => PositionClass::Corner,
            (true, false) | (false, true) => PositionClass::Edge,
            (false, false) => PositionClass::Interior,
        }
    }

    pub fn neighbor_count(self) -> usize {
        match self {
            PositionClass::Single => 0,
            PositionClass::Corner => 3,
            PositionClass::Edge => 5,
            PositionClass::Interior => 8,
        }
    }
}

/// In-bounds neighbor positions of `(row, col)`. Offsets that would leave
/// `[0, side)` on either axis are dropped, never wrapped.
pub fn neighbors(side: usize, row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> {
    NEIGHBOR_OFFSETS.iter().filter_map(move |&(dr, dc)| {
        let r = row.checked_add_signed(dr)?;
        let c = col.checked_add_signed(dc)?;
        (r < side && c < side).then_some((r, c))
    })
}

/// Count the number of alive neighbors for a cell
pub fn live_neighbors(grid: &Grid, row: usize, col: usize) -> usize {
    neighbors(grid.side(), row, col)
        .filter(|&(r, c)| grid.get(r, c).is_some_and(CellState::is_alive))
        .count()
}

/// Computes successive generations of a [`Grid`].
#[derive(Debug, Default, Clone, Copy)]
pub struct TransitionEngine;

impl TransitionEngine {
    pub fn new() -> Self {
        TransitionEngine
    }

    /// Produces the next generation. The input is only read; every cell of the
    /// result is computed from the input before anything is returned.
    pub fn evaluate_all_cells(&self, grid: &Grid) -> Grid {
        let next = grid.map_cells(|row, col, cell| cell.next(live_neighbors(grid, row, col)));
        trace!(
            "evaluated {} cells, population {} -> {}",
            grid.side() * grid.side(),
            grid.population(),
            next.population()
        );
        next
    }

    /// Same as [`evaluate_all_cells`](Self::evaluate_all_cells), handing the
    /// finished generation to `commit` exactly once.
    pub fn evaluate_all_cells_with<F>(&self, grid: &Grid, commit: F)
    where
        F: FnOnce(Grid),
    {
        commit(self.evaluate_all_cells(grid));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::CellState::{Alive, Dead};

    fn all_alive(side: usize) -> Grid {
        Grid::from_rows(vec![vec![Alive; side]; side]).unwrap()
    }

    #[test]
    fn position_classes() {
        assert_eq!(PositionClass::of(5, 0, 0), PositionClass::Corner);
        assert_eq!(PositionClass::of(5, 4, 4), PositionClass::Corner);
        assert_eq!(PositionClass::of(5, 0, 2), PositionClass::Edge);
        assert_eq!(PositionClass::of(5, 2, 4), PositionClass::Edge);
        assert_eq!(PositionClass::of(5, 2, 2), PositionClass::Interior);
    }

    #[test]
    fn neighbor_sets_never_leave_the_grid() {
        for side in 1..=6 {
            for row in 0..side {
                for col in 0..side {
                    let found: Vec<_> = neighbors(side, row, col).collect();
                    assert!(found.iter().all(|&(r, c)| r < side && c < side));
                    assert!(!found.contains(&(row, col)));
                    assert_eq!(
                        found.len(),
                        PositionClass::of(side, row, col).neighbor_count(),
                        "side {side} ({row}, {col})"
                    );
                }
            }
        }
    }

    #[test]
    fn single_cell_has_no_neighbors() {
        assert_eq!(PositionClass::of(1, 0, 0), PositionClass::Single);
        assert_eq!(PositionClass::Single.neighbor_count(), 0);
        assert_eq!(neighbors(1, 0, 0).count(), 0);
        assert_eq!(PositionClass::of(2, 1, 0), PositionClass::Corner);
    }

    #[test]
    fn full_grid_counts_match_position_class() {
        let side = 5;
        let grid = all_alive(side);
        for row in 0..side {
            for col in 0..side {
                assert_eq!(
                    live_neighbors(&grid, row, col),
                    PositionClass::of(side, row, col).neighbor_count()
                );
            }
        }
    }

    #[test]
    fn full_grid_next_generation_keeps_only_corners() {
        // corners see 3 live neighbors, every other cell is overcrowded
        let next = TransitionEngine::new().evaluate_all_cells(&all_alive(4));
        let expected = "#..#\n....\n....\n#..#\n";
        assert_eq!(next.to_string(), expected);
    }

    #[test]
    fn every_neighbor_count_applies_the_rule() {
        let engine = TransitionEngine::new();
        let around: Vec<_> = neighbors(3, 1, 1).collect();
        for live in 0..=8 {
            for centre in [Alive, Dead] {
                let mut cells = vec![vec![Dead; 3]; 3];
                cells[1][1] = centre;
                for &(r, c) in &around[..live] {
                    cells[r][c] = Alive;
                }
                let grid = Grid::from_rows(cells).unwrap();
                assert_eq!(live_neighbors(&grid, 1, 1), live);
                let next = engine.evaluate_all_cells(&grid);
                assert_eq!(next.get(1, 1), Some(centre.next(live)), "{centre:?} with {live}");
            }
        }
    }

    #[test]
    fn input_grid_is_unchanged() {
        let grid: Grid = ".....\n.###.\n.....\n.#...\n.....\n".parse().unwrap();
        let before = grid.clone();
        let _ = TransitionEngine::new().evaluate_all_cells(&grid);
        assert_eq!(grid, before);
    }

    #[test]
    fn all_dead_grid_stays_dead() {
        let grid = Grid::blank(10).unwrap();
        let next = TransitionEngine::new().evaluate_all_cells(&grid);
        assert_eq!(next, grid);
    }

    #[test]
    fn commit_is_called_once_with_full_grid() {
        let grid: Grid = ".....\n.....\n.###.\n.....\n.....\n".parse().unwrap();
        let mut commits = Vec::new();
        TransitionEngine::new().evaluate_all_cells_with(&grid, |next| commits.push(next));
        assert_eq!(commits.len(), 1);
        assert_eq!(commits[0].to_string(), ".....\n..#..\n..#..\n..#..\n.....\n");
    }

    #[test]
    fn single_cell_grid() {
        let grid = Grid::from_values(vec![vec![1]]).unwrap();
        let next = TransitionEngine::new().evaluate_all_cells(&grid);
        assert_eq!(next.to_values(), vec![vec![-1]]);
    }
}
