//! Mathematical utilities for the solver

/// Bitboard masks, neighborhood expansion and arithmetic helpers
pub mod bits;
