//! Input/output operations and error handling

/// Command-line interface and run orchestration
pub mod cli;
/// Solver constants and runtime configuration defaults
pub mod configuration;
/// Error types for solver operations
pub mod error;
/// Board emission in the supported presentation modes
pub mod render;
/// Tile-list ingestion
pub mod tileset;
