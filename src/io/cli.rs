//! Command-line interface and run orchestration

use clap::Parser;
use std::path::PathBuf;

use crate::algorithm::executor::run_search;
use crate::algorithm::solver::SolveOptions;
use crate::io::configuration::DEFAULT_THREADS;
use crate::io::error::Result;
use crate::io::render::RenderConfig;
use crate::io::tileset::load_tiles;
use crate::spatial::PieceSet;

/// Command-line arguments for the packing solver
// Presentation and search toggles are naturally independent booleans
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Parser)]
#[command(name = "exactile")]
#[command(
    author,
    version,
    about = "Exact polyomino packing solver for the 8x8 board"
)]
pub struct Cli {
    /// Tile definition file: one tile per line as (x,y) coordinate tokens
    #[arg(value_name = "TILE_FILE")]
    pub tile_file: PathBuf,

    /// Enumerate every packing instead of stopping at the first
    #[arg(short, long)]
    pub all_solutions: bool,

    /// Worker threads; 0 or 1 runs the search on the calling thread
    #[arg(short, long, default_value_t = DEFAULT_THREADS)]
    pub threads: usize,

    /// Colorize emitted boards with ANSI foreground colors
    #[arg(short, long)]
    pub color: bool,

    /// Render pieces as colored background blocks (requires --color)
    #[arg(short, long)]
    pub blocks: bool,

    /// Suppress per-solution board output
    #[arg(short, long)]
    pub silent: bool,

    /// Emit each board as a single 64-character line
    #[arg(short, long)]
    pub flat: bool,
}

impl Cli {
    /// Resolve the presentation flags, downgrading invalid combinations
    ///
    /// Block rendering without color would print bare double-space cells,
    /// so it warns and falls back to plain output.
    #[allow(clippy::print_stderr)]
    pub fn render_config(&self) -> RenderConfig {
        if self.blocks && !self.color {
            eprintln!("WARNING: --blocks must be used with the --color argument.");
        }
        RenderConfig {
            color: self.color,
            blocks: self.blocks && self.color,
            flat: self.flat,
        }
    }
}

/// Orchestrates one solve run: ingestion, search, summary
pub struct PuzzleRunner {
    cli: Cli,
}

impl PuzzleRunner {
    /// Create a runner for the given CLI arguments
    #[must_use]
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Load the tile file, run the search and print the summary
    ///
    /// # Errors
    ///
    /// Returns an error if the tile file cannot be read or parses to an
    /// empty tile set. Zero solutions is a normal outcome, not an error.
    pub fn process(&self) -> Result<()> {
        let render = self.cli.render_config();
        let tiles = load_tiles(&self.cli.tile_file)?;
        let pieces = PieceSet::new(tiles);

        let options = SolveOptions {
            one_solution: !self.cli.all_solutions,
            silent: self.cli.silent,
            render,
        };

        let outcome = run_search(pieces, self.cli.threads, &options);
        Self::print_summary(outcome.solutions);
        Ok(())
    }

    #[allow(clippy::print_stdout)]
    fn print_summary(solutions: u64) {
        if solutions == 0 {
            println!("No solutions.");
        } else {
            let plural = if solutions == 1 { "" } else { "s" };
            println!("\nFound {solutions} solution{plural}.");
        }
    }
}
