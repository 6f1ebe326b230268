//! Solver constants and runtime configuration defaults

// Task generation targets for the worker pool
/// Default depth of the materialized task frontier
pub const DEFAULT_TASK_DEPTH: usize = 2;
/// Minimum number of tasks worth generating regardless of thread count
pub const MIN_TASK_COUNT: usize = 8;
/// Tasks to aim for per worker thread, for load balancing
pub const TASKS_PER_THREAD: usize = 4;

// Heuristic threshold; correctness does not depend on it
/// Run the region solvability check only when `open_squares()` plus the
/// current tile's extent product exceeds this
pub const REGION_CHECK_THRESHOLD: u32 = 32;

/// Number of ANSI colors the renderer cycles through
pub const PALETTE_SIZE: usize = 12;

// Defaults for configurable CLI parameters
/// Default worker thread count; 0 runs the search sequentially
pub const DEFAULT_THREADS: usize = 0;
