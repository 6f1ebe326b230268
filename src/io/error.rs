//! Error types for solver operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all solver operations
///
/// Parse-level problems (malformed tokens, out-of-range coordinates) are
/// warnings, not errors: the affected token is skipped and ingestion
/// continues. Only conditions that make a run impossible surface here.
#[derive(Debug)]
pub enum SolverError {
    /// Failed to open or read the tile definition file
    TileFile {
        /// Path to the tile file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The tile file parsed to an empty tile set
    EmptyTileSet {
        /// Path to the tile file
        path: PathBuf,
    },
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TileFile { path, source } => {
                write!(f, "Unable to read tile file '{}': {source}", path.display())
            }
            Self::EmptyTileSet { path } => {
                write!(f, "No valid tiles found in '{}'", path.display())
            }
        }
    }
}

impl std::error::Error for SolverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TileFile { source, .. } => Some(source),
            Self::EmptyTileSet { .. } => None,
        }
    }
}

/// Convenience type alias for solver results
pub type Result<T> = std::result::Result<T, SolverError>;
