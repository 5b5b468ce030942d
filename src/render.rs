//! Text rendering of a grid for the command line.
//!
//! Rows are labelled by their height above the floor (bottom row is 0) and a
//! column ruler is printed underneath.

use std::io::{self, Write};

use crossterm::{
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};

use crate::core::Grid;

const FILLED: &str = "█";
const EMPTY: &str = ".";

/// Write `grid` to `out`. With `color` set, filled cells are highlighted.
pub fn render_grid<W: Write>(grid: &Grid, out: &mut W, color: bool) -> io::Result<()> {
    let height = grid.height();
    for (y, row) in grid.rows().enumerate() {
        out.queue(Print(format!("{:2}: ", height - y - 1)))?;
        for &filled in row {
            if filled && color {
                out.queue(SetForegroundColor(Color::Cyan))?;
                out.queue(Print(FILLED))?;
                out.queue(ResetColor)?;
            } else {
                out.queue(Print(if filled { FILLED } else { EMPTY }))?;
            }
        }
        out.queue(Print("\n"))?;
    }

    let ruler: String = (0..grid.width())
        .map(|x| char::from(b'0' + (x % 10) as u8))
        .collect();
    out.queue(Print(format!("    {}\n", ruler)))?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_render_labels_rows_from_the_floor() {
        let grid = Grid::from_rows(&["...", "#.#"]).unwrap();
        let mut out = Vec::new();
        render_grid(&grid, &mut out, false).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, " 1: ...\n 0: █.█\n    012\n");
    }

    #[test]
    fn ruler_wraps_every_ten_columns() {
        let grid = Grid::new(12, 1).unwrap();
        let mut out = Vec::new();
        render_grid(&grid, &mut out, false).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with("    012345678901\n"));
    }

    #[test]
    fn colored_render_emits_escape_codes() {
        let grid = Grid::from_rows(&["#"]).unwrap();
        let mut out = Vec::new();
        render_grid(&grid, &mut out, true).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains('\u{1b}'));
        assert!(text.contains(FILLED));
    }
}
