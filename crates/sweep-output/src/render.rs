//! ASCII frame rendering for terminal display.
//!
//! | Glyph | Meaning              |
//! |-------|----------------------|
//! | `#`   | wall                 |
//! | `.`   | corridor             |
//! | ` `   | room                 |
//! | `E`   | exit                 |
//! | `D`   | uncleared door       |
//! | `d`   | cleared door         |
//! | `o`   | occupant             |
//! | `R`   | responder            |
//!
//! Later layers win: occupants are drawn over the floor, the responder over
//! everything.

use sweep_layout::CellKind;
use sweep_sim::Snapshot;

fn glyph(kind: CellKind) -> char {
    match kind {
        CellKind::Wall     => '#',
        CellKind::Corridor => '.',
        CellKind::Room     => ' ',
        CellKind::Exit     => 'E',
    }
}

/// Render `snapshot` as `height` newline-terminated lines.
pub fn render_frame(snapshot: &Snapshot<'_>) -> String {
    let layout = snapshot.layout();
    let width = layout.width();
    let mut grid: Vec<Vec<char>> = layout
        .rows()
        .map(|row| row.iter().map(|&k| glyph(k)).collect())
        .collect();

    let mut put = |cell: sweep_core::Cell, ch: char| {
        if layout.contains(cell) {
            grid[cell.row as usize][cell.col as usize] = ch;
        }
    };

    for (i, &door) in snapshot.plan.doors().iter().enumerate() {
        let cleared = snapshot.cleared.get(i).copied().unwrap_or(false);
        put(door, if cleared { 'd' } else { 'D' });
    }
    for &occ in snapshot.occupants {
        put(occ, 'o');
    }
    put(snapshot.responder, 'R');

    let mut out = String::with_capacity(grid.len() * (width + 1));
    for row in grid {
        out.extend(row);
        out.push('\n');
    }
    out
}

/// One-line status: tick and cleared count.
pub fn status_line(snapshot: &Snapshot<'_>) -> String {
    format!(
        "t={} cleared={}/{}",
        snapshot.tick.0,
        snapshot.cleared_count(),
        snapshot.cleared.len(),
    )
}
