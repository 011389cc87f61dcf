use std::thread;
use std::time::{Duration, Instant};

use log::{debug, info};
use rand::Rng;

use crate::error::{GridError, Result};
use crate::factory::GridFactory;
use crate::grid::Grid;
use crate::patterns::PatternBook;
use crate::transition::TransitionEngine;

/// Owns the current grid between ticks and commits each new generation.
pub struct Playback {
    grid: Grid,
    engine: TransitionEngine,
    patterns: PatternBook,
    generation: u64,
    ticking: bool,
    speed: Duration,
    grid_lines: bool,
    last_step: Instant,
}

impl Playback {
    pub fn new(grid: Grid, patterns: PatternBook, speed: Duration) -> Result<Self> {
        if grid.side() != patterns.side() {
            return Err(GridError::SideMismatch {
                expected: patterns.side(),
                found: grid.side(),
            });
        }
        Ok(Self {
            grid,
            engine: TransitionEngine::new(),
            patterns,
            generation: 0,
            ticking: false,
            speed,
            grid_lines: false,
            last_step: Instant::now(),
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_ticking(&self) -> bool {
        self.ticking
    }

    pub fn speed(&self) -> Duration {
        self.speed
    }

    pub fn grid_lines(&self) -> bool {
        self.grid_lines
    }

    /// Replaces the current grid, reporting whether anything changed.
    fn commit(&mut self, next: Grid) -> bool {
        let changed = next != self.grid;
        self.grid = next;
        changed
    }

    /// Advance the grid by one generation
    pub fn step(&mut self) -> bool {
        let next = self.engine.evaluate_all_cells(&self.grid);
        self.generation += 1;
        self.last_step = Instant::now();
        self.commit(next)
    }

    /// Steps once if ticking and the interval has elapsed since the last step.
    pub fn update(&mut self) -> Option<bool> {
        if self.ticking && self.last_step.elapsed() >= self.speed {
            Some(self.step())
        } else {
            None
        }
    }

    pub fn start_ticking(&mut self) {
        self.ticking = true;
    }

    pub fn stop_ticking(&mut self) {
        self.ticking = false;
    }

    pub fn toggle_ticking(&mut self) {
        self.ticking = !self.ticking;
    }

    pub fn set_speed(&mut self, speed: Duration) {
        self.speed = speed;
    }

    pub fn toggle_grid_lines(&mut self) {
        self.grid_lines = !self.grid_lines;
    }

    pub fn reset(&mut self) -> Result<()> {
        let blank = GridFactory::reset_grid(None, self.grid.side())?;
        self.commit(blank);
        self.generation = 0;
        Ok(())
    }

    pub fn randomize(&mut self) -> Result<()> {
        self.randomize_with(&mut rand::rng())
    }

    pub fn randomize_with<R: Rng>(&mut self, rng: &mut R) -> Result<()> {
        let grid = GridFactory::produce_square_grid_with(self.grid.side(), true, rng)?;
        self.commit(grid);
        self.generation = 0;
        Ok(())
    }

    /// Loads a registered pattern. On an unknown label the current grid is kept.
    pub fn load_pattern(&mut self, label: &str) -> Result<()> {
        let grid = GridFactory::update_with_pattern(&self.patterns, label)?;
        debug!("loaded pattern {label}");
        self.commit(grid);
        self.generation = 0;
        Ok(())
    }

    pub fn toggle_cell(&mut self, row: usize, col: usize) -> Result<()> {
        let grid = self.grid.toggled(row, col)?;
        self.commit(grid);
        Ok(())
    }

    /// Ticks at the configured speed until `generations` steps have run, the
    /// grid stops changing, or ticking is switched off. Each committed
    /// generation is handed to `frame`. Returns the number of steps taken.
    pub fn run<F, E>(&mut self, generations: u64, mut frame: F) -> std::result::Result<u64, E>
    where
        F: FnMut(&mut Playback) -> std::result::Result<(), E>,
    {
        let mut steps = 0;
        let mut steps_since_log = 0u32;
        let mut last_rate_log = Instant::now();

        while self.ticking && steps < generations {
            thread::sleep(self.speed.saturating_sub(self.last_step.elapsed()));
            let changed = self.step();
            steps += 1;
            frame(&mut *self)?;

            if !changed {
                info!("grid is stable at generation {}", self.generation);
                self.stop_ticking();
            }

            steps_since_log += 1;
            let elapsed = last_rate_log.elapsed();
            if elapsed >= Duration::from_secs(1) {
                info!(
                    "generations/s: {:.1}",
                    steps_since_log as f64 / elapsed.as_secs_f64()
                );
                steps_since_log = 0;
                last_rate_log = Instant::now();
            }
        }
        Ok(steps)
    }
}
