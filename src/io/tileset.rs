//! Tile-list ingestion
//!
//! One tile per line; each line holds zero or more `(x,y)` coordinate
//! tokens with `x, y` in `[0, 7]`, anything between tokens ignored. Shapes
//! are assumed already anchored (a set bit on row 0 and on column 0); the
//! solver does not re-canonicalize them.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::io::error::{Result, SolverError};
use crate::spatial::Tile;

/// Load and parse a tile file
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read, or if no line
/// yields a non-empty tile.
pub fn load_tiles(path: &Path) -> Result<Vec<Tile>> {
    let file = File::open(path).map_err(|source| SolverError::TileFile {
        path: path.to_path_buf(),
        source,
    })?;

    let mut tiles = Vec::new();
    for (number, line) in BufReader::new(file).lines().enumerate() {
        let line = line.map_err(|source| SolverError::TileFile {
            path: path.to_path_buf(),
            source,
        })?;
        let mask = parse_tile_line(&line, number + 1);
        if mask != 0 {
            tiles.push(Tile::new(mask));
        }
    }

    if tiles.is_empty() {
        return Err(SolverError::EmptyTileSet {
            path: path.to_path_buf(),
        });
    }
    Ok(tiles)
}

/// Accumulate one line's coordinate tokens into a tile mask
///
/// Malformed tokens and out-of-range coordinates warn on stderr and are
/// skipped; the rest of the line still contributes. A zero return means the
/// line holds no tile.
#[allow(clippy::print_stderr)]
pub fn parse_tile_line(line: &str, number: usize) -> u64 {
    let mut mask = 0u64;
    let mut pos = 0;

    while let Some(found) = line[pos..].find('(') {
        let open = pos + found;
        let comma = line[open + 1..].find(',').map(|at| open + 1 + at);
        let close = comma.and_then(|comma| line[comma + 1..].find(')').map(|at| comma + 1 + at));

        let (Some(comma), Some(close)) = (comma, close) else {
            eprintln!("Warning: malformed coordinate on line {number}");
            pos = open + 1;
            continue;
        };

        let x = line[open + 1..comma].trim().parse::<i32>();
        let y = line[comma + 1..close].trim().parse::<i32>();
        let (Ok(x), Ok(y)) = (x, y) else {
            eprintln!("Warning: malformed coordinate on line {number}");
            pos = close + 1;
            continue;
        };

        if (0..8).contains(&x) && (0..8).contains(&y) {
            mask |= 1u64 << (y * 8 + x);
        } else {
            eprintln!("Warning: coordinate ({x},{y}) out of 8x8 board bounds on line {number}");
        }
        pos = close + 1;
    }

    mask
}
