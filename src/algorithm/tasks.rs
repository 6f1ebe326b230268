//! Bounded-depth task generation for parallel search
//!
//! The top of the search tree is materialized into independent `Board`
//! snapshots that workers later claim. No pruning runs at this level, but
//! the frontier applies the same validity rules as the solver so the task
//! set contains exactly the roots of valid subtrees.

use log::debug;

use crate::algorithm::candidate_origins;
use crate::io::configuration::{DEFAULT_TASK_DEPTH, MIN_TASK_COUNT, TASKS_PER_THREAD};
use crate::spatial::Board;

/// Expand the search tree into enough tasks to keep `threads` workers busy
///
/// Starts at the default frontier depth and deepens until the task count
/// reaches `max(MIN_TASK_COUNT, TASKS_PER_THREAD * threads)` or the depth
/// reaches the piece count. Large early tiles have few placements, so a
/// fixed depth alone can starve a wide worker pool.
pub fn generate_tasks(board: &mut Board, threads: usize) -> Vec<Board> {
    let target = MIN_TASK_COUNT.max(TASKS_PER_THREAD * threads);
    let mut goal_depth = DEFAULT_TASK_DEPTH;

    loop {
        let mut tasks = Vec::new();
        expand(board, 0, goal_depth, &mut tasks);

        if tasks.len() >= target || goal_depth >= board.pieces().len() {
            debug!(
                "task frontier: {} tasks at depth {goal_depth}",
                tasks.len()
            );
            return tasks;
        }
        goal_depth += 1;
    }
}

fn expand(board: &mut Board, depth: usize, goal_depth: usize, tasks: &mut Vec<Board>) {
    if depth == goal_depth || board.done() {
        tasks.push(board.clone());
        return;
    }

    let piece = board.current_piece().mask();
    let mut origins = candidate_origins(board);

    while origins != 0 {
        #[allow(clippy::cast_possible_truncation)]
        let origin = origins.trailing_zeros() as u8;
        origins &= origins - 1;

        board.place(piece, origin);
        expand(board, depth + 1, goal_depth, tasks);
        board.pop();
    }
}
