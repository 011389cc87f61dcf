//! Headless Game of Life player.
//!
//! Seeds a grid (blank, random, a named pattern or a text file), then ticks it
//! at a fixed interval and prints every generation to stdout. Set `RUST_LOG`
//! for diagnostics.

mod render;

use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use life_engine::{Grid, GridFactory, PatternBook, Playback, DEFAULT_SIDE};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Parser, Debug)]
#[command(name = "life", version, about = "Conway's Game of Life on a bounded square grid")]
struct Args {
    /// Side length of the square grid
    #[arg(short, long, default_value_t = DEFAULT_SIDE)]
    size: usize,

    /// Start from a random grid
    #[arg(short, long)]
    random: bool,

    /// Seed for the random grid
    #[arg(long, requires = "random")]
    seed: Option<u64>,

    /// Start from a named pattern (see --list-patterns)
    #[arg(short, long, conflicts_with = "random")]
    pattern: Option<String>,

    /// Load the starting grid from a text file ('#' alive, '.' dead)
    #[arg(short, long, conflicts_with_all = ["random", "pattern"])]
    input: Option<PathBuf>,

    /// Make a cell alive before starting, as ROW,COL (repeatable)
    #[arg(long = "alive", value_parser = parse_position)]
    alive: Vec<(usize, usize)>,

    /// Flip a cell before starting, as ROW,COL (repeatable, applied after --alive)
    #[arg(long = "toggle", value_parser = parse_position)]
    toggles: Vec<(usize, usize)>,

    /// Number of generations to play
    #[arg(short, long, default_value_t = 50)]
    generations: u64,

    /// Delay between generations in milliseconds
    #[arg(long, default_value_t = 100)]
    interval_ms: u64,

    /// Draw grid lines between cells
    #[arg(long)]
    grid_lines: bool,

    /// Print the available pattern names and exit
    #[arg(long)]
    list_patterns: bool,
}

fn parse_position(s: &str) -> std::result::Result<(usize, usize), String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got {s:?}"))?;
    let row = row
        .trim()
        .parse::<usize>()
        .map_err(|e| format!("invalid row {row:?}: {e}"))?;
    let col = col
        .trim()
        .parse::<usize>()
        .map_err(|e| format!("invalid column {col:?}: {e}"))?;
    Ok((row, col))
}

fn starting_grid(args: &Args) -> Result<Grid> {
    if let Some(path) = &args.input {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read grid from {}", path.display()))?;
        return text
            .parse::<Grid>()
            .with_context(|| format!("parse grid in {}", path.display()));
    }
    if let Some(label) = &args.pattern {
        let patterns = PatternBook::standard(args.size).context("build pattern book")?;
        return GridFactory::update_with_pattern(&patterns, label).with_context(|| {
            let known: Vec<_> = patterns.labels().collect();
            format!("known patterns: {}", known.join(", "))
        });
    }
    let grid = match args.seed {
        Some(seed) => GridFactory::produce_square_grid_with(
            args.size,
            args.random,
            &mut StdRng::seed_from_u64(seed),
        ),
        None => GridFactory::produce_square_grid(args.size, args.random),
    };
    grid.context("create grid")
}

fn build_playback(args: &Args) -> Result<Playback> {
    let grid = starting_grid(args)?
        .with_alive(&args.alive)
        .context("set alive cells")?;
    // a loaded file decides the side
    let patterns = PatternBook::standard(grid.side()).context("build pattern book")?;

    let mut playback = Playback::new(grid, patterns, Duration::from_millis(args.interval_ms))?;
    for &(row, col) in &args.toggles {
        playback
            .toggle_cell(row, col)
            .with_context(|| format!("toggle cell {row},{col}"))?;
    }
    if args.grid_lines {
        playback.toggle_grid_lines();
    }
    Ok(playback)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.list_patterns {
        let patterns = PatternBook::standard(args.size).context("build pattern book")?;
        for label in patterns.labels() {
            println!("{label}");
        }
        return Ok(());
    }

    let mut playback = build_playback(&args)?;
    info!(
        "starting {0}x{0} grid with population {1}",
        playback.grid().side(),
        playback.grid().population()
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write!(out, "{}", render::frame(&playback))?;

    playback.start_ticking();
    let steps = playback.run(args.generations, |playback| -> io::Result<()> {
        writeln!(out)?;
        write!(out, "{}", render::frame(playback))?;
        out.flush()
    })?;

    info!(
        "played {} generations, final population {}",
        steps,
        playback.grid().population()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use life_engine::CellState;

    #[test]
    fn positions_parse() {
        assert_eq!(parse_position("3,4"), Ok((3, 4)));
        assert_eq!(parse_position(" 0 , 12 "), Ok((0, 12)));
        assert!(parse_position("3").is_err());
        assert!(parse_position("a,1").is_err());
    }

    #[test]
    fn args_build_a_pattern_playback() {
        let args = Args::parse_from(["life", "--size", "9", "--pattern", "glider", "--grid-lines"]);
        let playback = build_playback(&args).unwrap();
        assert_eq!(playback.grid().side(), 9);
        assert_eq!(playback.grid().population(), 5);
        assert!(playback.grid_lines());
    }

    #[test]
    fn unknown_pattern_is_an_error() {
        let args = Args::parse_from(["life", "--pattern", "nope"]);
        assert!(build_playback(&args).is_err());
    }

    #[test]
    fn seeded_random_start_is_reproducible() {
        let args = Args::parse_from(["life", "--random", "--seed", "5", "--size", "12"]);
        let a = build_playback(&args).unwrap();
        let b = build_playback(&args).unwrap();
        assert_eq!(a.grid(), b.grid());
    }

    #[test]
    fn toggles_apply_to_blank_start() {
        let args = Args::parse_from(["life", "--size", "4", "--toggle", "1,2", "--toggle", "3,3"]);
        let playback = build_playback(&args).unwrap();
        assert_eq!(playback.grid().to_string(), "....\n..#.\n....\n...#\n");
    }

    #[test]
    fn alive_cells_are_set_not_flipped() {
        let args = Args::parse_from(["life", "--size", "4", "--alive", "1,1", "--alive", "1,1"]);
        let playback = build_playback(&args).unwrap();
        assert_eq!(playback.grid().get(1, 1), Some(CellState::Alive));
        assert_eq!(playback.grid().population(), 1);
    }

    #[test]
    fn repeated_toggle_cancels_out() {
        let args = Args::parse_from(["life", "--size", "4", "--toggle", "1,1", "--toggle", "1,1"]);
        let playback = build_playback(&args).unwrap();
        assert_eq!(playback.grid().get(1, 1), Some(CellState::Dead));
    }

    #[test]
    fn toggle_applies_after_alive() {
        let args = Args::parse_from(["life", "--size", "4", "--alive", "2,2", "--toggle", "2,2"]);
        let playback = build_playback(&args).unwrap();
        assert_eq!(playback.grid().population(), 0);
    }

    #[test]
    fn alive_out_of_bounds_is_an_error() {
        let args = Args::parse_from(["life", "--size", "4", "--alive", "4,0"]);
        assert!(build_playback(&args).is_err());
    }

    #[test]
    fn zero_size_is_rejected() {
        let args = Args::parse_from(["life", "--size", "0"]);
        assert!(build_playback(&args).is_err());
    }
}
