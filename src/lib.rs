//! Exact solver for packing a set of polyomino tiles onto the 8x8 board
//!
//! The board is a 64-bit bitboard; the search is a depth-first backtracking
//! enumeration with parity, region-solvability and symmetry pruning,
//! parallelized by statically partitioning the top of the search tree into
//! independent tasks consumed by a worker pool.

#![forbid(unsafe_code)]

/// Search engine: candidate enumeration, recursive solver, task generation and worker pool
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Bit-level utilities for the 8x8 bitboard
pub mod math;
/// Board state, tiles and placement history
pub mod spatial;

pub use io::error::{Result, SolverError};
