//! Integration tests for the grid dump and grid loading helpers.

use proptest::prelude::*;
use std::io::Write;
use tilegrid::{
    config, format_grid, parse_grid, write_grid, Direction, Tile, TileGridResult, TileType,
};

#[test]
fn test_sample_grid_has_start_and_finish() -> TileGridResult<()> {
    let grid = parse_grid(config::SAMPLE_GRID)?;
    let tiles: Vec<&Tile> = grid.iter().flatten().collect();

    assert_eq!(tiles.iter().filter(|t| t.tile_type == TileType::Start).count(), 1);
    assert_eq!(tiles.iter().filter(|t| t.tile_type == TileType::Finish).count(), 1);
    assert!(grid.iter().all(|row| row.len() == grid[0].len()));
    Ok(())
}

#[test]
fn test_grid_file_roundtrip() -> TileGridResult<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    write!(file, "S.G\nBOF\n")?;

    let text = std::fs::read_to_string(file.path())?;
    let grid = parse_grid(&text)?;

    let mut out = Vec::new();
    write_grid(&mut out, &grid)?;
    assert_eq!(String::from_utf8_lossy(&out), text);
    Ok(())
}

#[test]
fn test_json_grid_dump() -> TileGridResult<()> {
    let json = r#"[
        [{"type":"S","x":0,"y":0},{"type":"G","x":1,"y":0,"direction":"R"}],
        [{"type":"O","x":0,"y":1},{"type":"F","x":1,"y":1}]
    ]"#;
    let grid: Vec<Vec<Tile>> = serde_json::from_str(json)?;

    assert_eq!(grid[0][1].direction, Some(Direction::Right));
    assert_eq!(format_grid(&grid), vec!["SG", "OF"]);
    Ok(())
}

fn tile_type_strategy() -> impl Strategy<Value = TileType> {
    prop::sample::select(TileType::all())
}

proptest! {
    #[test]
    fn prop_one_line_per_row_one_char_per_tile(
        rows in prop::collection::vec(prop::collection::vec(tile_type_strategy(), 0..12), 0..12)
    ) {
        let grid: Vec<Vec<Tile>> = rows
            .iter()
            .enumerate()
            .map(|(y, row)| {
                row.iter()
                    .enumerate()
                    .map(|(x, t)| Tile::new(*t, x as i32, y as i32))
                    .collect()
            })
            .collect();

        let lines = format_grid(&grid);
        prop_assert_eq!(lines.len(), rows.len());
        for (line, row) in lines.iter().zip(&rows) {
            let expected: String = row.iter().map(|t| t.to_char()).collect();
            prop_assert_eq!(line, &expected);
        }
    }
}
