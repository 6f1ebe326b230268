//! Tests for tile-file ingestion and coordinate token parsing

#[cfg(test)]
mod tests {
    use exactile::io::tileset::{load_tiles, parse_tile_line};
    use exactile::math::bits::cell;
    use exactile::SolverError;
    use std::fs;
    use std::path::PathBuf;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("exactile-{}-{name}", std::process::id()));
        fs::write(&path, contents).expect("temp file is writable");
        path
    }

    #[test]
    fn test_parse_single_coordinate() {
        assert_eq!(parse_tile_line("(0,0)", 1), cell(0, 0));
        assert_eq!(parse_tile_line("(3,5)", 1), cell(3, 5));
    }

    // Tests junk between tokens is ignored
    // Verified by requiring tokens to be whitespace-separated
    #[test]
    fn test_parse_ignores_text_between_tokens() {
        let mask = parse_tile_line("corner (0,0) then (1,0), done", 1);
        assert_eq!(mask, cell(0, 0) | cell(1, 0));
    }

    // Tests the malformed-line scenario: the in-range token survives while
    // the out-of-range and unterminated tokens warn and are skipped
    // Verified by aborting the line on the first bad token
    #[test]
    fn test_parse_skips_bad_tokens() {
        let mask = parse_tile_line("(3,3) (9,0) (2,", 1);
        assert_eq!(mask, cell(3, 3));
    }

    #[test]
    fn test_parse_skips_non_numeric_tokens() {
        let mask = parse_tile_line("(a,b) (1,1)", 1);
        assert_eq!(mask, cell(1, 1));
    }

    #[test]
    fn test_parse_empty_line_yields_no_tile() {
        assert_eq!(parse_tile_line("", 1), 0);
        assert_eq!(parse_tile_line("no coordinates here", 1), 0);
    }

    #[test]
    fn test_parse_negative_coordinates_are_out_of_range() {
        assert_eq!(parse_tile_line("(-1,0) (0,-2)", 1), 0);
    }

    #[test]
    fn test_load_tiles_reads_one_tile_per_line() {
        let path = temp_file(
            "tiles",
            "(0,0) (1,0) (0,1) (1,1)\n\n(0,0) (1,0)\njunk line\n",
        );
        let tiles = load_tiles(&path).expect("two valid tiles");
        fs::remove_file(&path).ok();

        assert_eq!(tiles.len(), 2);
        assert_eq!(tiles[0].size(), 4);
        assert_eq!(tiles[1].size(), 2);
    }

    // Tests an entirely invalid file is a fatal empty-set error
    // Verified by treating an empty set as zero solutions instead
    #[test]
    fn test_load_tiles_rejects_empty_sets() {
        let path = temp_file("empty", "nothing\n(9,9)\n");
        let result = load_tiles(&path);
        fs::remove_file(&path).ok();

        match result {
            Err(SolverError::EmptyTileSet { path: reported }) => {
                assert_eq!(reported, path);
            }
            other => panic!("expected EmptyTileSet, got {other:?}"),
        }
    }

    #[test]
    fn test_load_tiles_reports_missing_file() {
        let path = PathBuf::from("/nonexistent/exactile-tiles.txt");
        match load_tiles(&path) {
            Err(SolverError::TileFile { .. }) => {}
            other => panic!("expected TileFile error, got {other:?}"),
        }
    }
}
