//! Board emission in the supported presentation modes
//!
//! A solved (or partial) board renders as an 8-row grid, top row first.
//! Each covered cell shows `'a' + (piece index mod 26)`, open cells show
//! `'.'`. Three orthogonal presentation axes: ANSI foreground colors,
//! background-colored block cells, and a flat single-line layout.

use ndarray::Array2;

use crate::io::configuration::PALETTE_SIZE;
use crate::spatial::Board;

const ANSI_RESET: &str = "\x1b[0m";

const ANSI_COLORS: [&str; PALETTE_SIZE] = [
    "\x1b[31m", // Red
    "\x1b[32m", // Green
    "\x1b[33m", // Yellow
    "\x1b[34m", // Blue
    "\x1b[35m", // Magenta
    "\x1b[36m", // Cyan
    "\x1b[91m", // Bright Red
    "\x1b[92m", // Bright Green
    "\x1b[93m", // Bright Yellow
    "\x1b[94m", // Bright Blue
    "\x1b[95m", // Bright Magenta
    "\x1b[96m", // Bright Cyan
];

const ANSI_BACKGROUND_COLORS: [&str; PALETTE_SIZE] = [
    "\x1b[41m",  // Red background
    "\x1b[42m",  // Green background
    "\x1b[43m",  // Yellow background
    "\x1b[44m",  // Blue background
    "\x1b[45m",  // Magenta background
    "\x1b[46m",  // Cyan background
    "\x1b[101m", // Bright Red background
    "\x1b[102m", // Bright Green background
    "\x1b[103m", // Bright Yellow background
    "\x1b[104m", // Bright Blue background
    "\x1b[105m", // Bright Magenta background
    "\x1b[106m", // Bright Cyan background
];

/// Presentation mode for emitted boards
///
/// Owned by the emission path; the board itself carries no rendering
/// policy. Block cells only make sense on top of color, which the CLI
/// enforces by downgrading `blocks` when `color` is off.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderConfig {
    /// Colorize pieces with ANSI foreground colors
    pub color: bool,
    /// Render pieces as background-colored two-space blocks
    pub blocks: bool,
    /// Emit the board as a single 64-character line
    pub flat: bool,
}

/// Format a board as one contiguous string
///
/// Non-flat mode prepends `"Board:\n"` and tab-indents each row; flat mode
/// emits the 64 cells and a trailing newline.
#[must_use]
pub fn render_board(board: &Board, config: &RenderConfig) -> String {
    let cells = Array2::from_shape_fn((8, 8), |(y, x)| {
        #[allow(clippy::cast_possible_truncation)]
        let (x, y) = (x as u8, y as u8);
        board.piece_at(x, y)
    });

    let mut out = String::new();
    if !config.flat {
        out.push_str("Board:\n");
    }

    for row in cells.rows() {
        if !config.flat {
            out.push('\t');
        }
        for piece in row {
            push_cell(&mut out, *piece, config);
            if !config.blocks && !config.flat {
                out.push(' ');
            }
        }
        if !config.flat {
            out.push('\n');
        }
    }

    if config.flat {
        out.push('\n');
    }
    out
}

fn push_cell(out: &mut String, piece: Option<usize>, config: &RenderConfig) {
    let cell_char = piece.map_or('.', |index| {
        char::from(b'a' + u8::try_from(index % 26).unwrap_or(0))
    });

    if config.color && cell_char.is_ascii_lowercase() {
        let palette_index = (cell_char as usize - 'a' as usize) % PALETTE_SIZE;
        if config.blocks {
            out.push_str(ANSI_BACKGROUND_COLORS[palette_index]);
            out.push_str("  ");
        } else {
            out.push_str(ANSI_COLORS[palette_index]);
            out.push(cell_char);
        }
        out.push_str(ANSI_RESET);
    } else if config.blocks && cell_char == '.' {
        out.push_str("  ");
    } else {
        out.push(cell_char);
    }
}
