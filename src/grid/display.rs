//! # Grid Dump
//!
//! Textual diagnostics for a 2D tile grid: one line per row, each tile's
//! type character in column order.

use crate::grid::{Tile, TileType};
use crate::TileGridResult;
use log::info;
use std::io::Write;

/// Formats each row of `grid` as a line of tile characters.
///
/// # Examples
///
/// ```
/// use tilegrid::{format_grid, Tile, TileType};
///
/// let grid = vec![vec![
///     Tile::new(TileType::Start, 0, 0),
///     Tile::new(TileType::Empty, 1, 0),
///     Tile::new(TileType::Finish, 2, 0),
/// ]];
/// assert_eq!(format_grid(&grid), vec!["S.F".to_string()]);
/// ```
pub fn format_grid<R: AsRef<[Tile]>>(grid: &[R]) -> Vec<String> {
    grid.iter()
        .map(|row| row.as_ref().iter().map(Tile::to_char).collect())
        .collect()
}

/// Writes every row line of `grid`, newline terminated, to `writer`.
pub fn write_grid<W: Write, R: AsRef<[Tile]>>(writer: &mut W, grid: &[R]) -> TileGridResult<()> {
    for line in format_grid(grid) {
        writeln!(writer, "{}", line)?;
    }
    writer.flush()?;
    Ok(())
}

/// Logs every row line of `grid` at info level.
pub fn print_grid<R: AsRef<[Tile]>>(grid: &[R]) {
    for line in format_grid(grid) {
        info!("{}", line);
    }
}

/// Parses a grid written by [`write_grid`].
///
/// Blank lines are skipped. Tiles get `(column, row)` coordinates and no
/// direction.
pub fn parse_grid(text: &str) -> TileGridResult<Vec<Vec<Tile>>> {
    text.lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
        .enumerate()
        .map(|(y, line)| {
            line.chars()
                .enumerate()
                .map(|(x, c)| Ok(Tile::new(TileType::try_from(c)?, x as i32, y as i32)))
                .collect::<TileGridResult<Vec<Tile>>>()
        })
        .collect()
}
