//! Conway's Game of Life on a square grid whose edges do not wrap.
//!
//! A live cell dies if it has fewer than two live neighbors.
//! A live cell with two or three live neighbors lives on to the next generation.
//! A live cell with more than three live neighbors dies.
//! A dead cell will be brought back to live if it has exactly three live neighbors.
//!
//! Corner cells have three neighbors, other edge cells five, interior cells eight.

pub mod error;
pub mod factory;
pub mod grid;
pub mod patterns;
pub mod playback;
pub mod transition;

pub use error::{GridError, Result};
pub use factory::{GridFactory, DEFAULT_SIDE, REFERENCE_SIDE};
pub use grid::{CellState, Grid};
pub use patterns::{Pattern, PatternBook, PATTERNS};
pub use playback::Playback;
pub use transition::{live_neighbors, neighbors, PositionClass, TransitionEngine};
