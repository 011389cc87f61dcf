use life_engine::{Grid, Playback};

const ALIVE: char = '#';
const DEAD: char = '.';

/// Text for one grid, optionally boxed in with grid lines.
pub fn grid_text(grid: &Grid, grid_lines: bool) -> String {
    if !grid_lines {
        return grid.to_string();
    }

    let separator = format!("{}+\n", "+-".repeat(grid.side()));
    let mut out = String::with_capacity(separator.len() * (grid.side() * 2 + 1));
    out.push_str(&separator);
    for row in grid.rows() {
        for cell in row {
            out.push('|');
            out.push(if cell.is_alive() { ALIVE } else { DEAD });
        }
        out.push_str("|\n");
        out.push_str(&separator);
    }
    out
}

pub fn status_line(playback: &Playback) -> String {
    format!(
        "generation {} | population {} | {} | {}ms",
        playback.generation(),
        playback.grid().population(),
        if playback.is_ticking() { "running" } else { "paused" },
        playback.speed().as_millis()
    )
}

pub fn frame(playback: &Playback) -> String {
    let mut out = grid_text(playback.grid(), playback.grid_lines());
    out.push_str(&status_line(playback));
    out.push('\n');
    out
}
