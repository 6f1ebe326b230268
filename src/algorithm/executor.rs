//! Worker pool and search driver
//!
//! Workers are data-parallel and share nothing but a read-only task vector
//! and three atomics: the claim cursor, the global solution count and the
//! early-exit flag. Every worker owns its `Board` clone and recursion stack
//! for the lifetime of a task.

use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

use log::{debug, info};

use crate::algorithm::solver::{solve, SolveOptions};
use crate::algorithm::tasks::generate_tasks;
use crate::spatial::{Board, PieceSet};

/// Result of one search run
#[derive(Debug, Clone, Copy)]
pub struct SearchOutcome {
    /// Number of solutions counted; in one-solution mode a race between
    /// workers may count more than one
    pub solutions: u64,
}

/// Shared coordination state for one parallel solve invocation
///
/// The task queue is immutable once workers start; the atomics are the only
/// writable shared state. Counters use relaxed ordering: tasks are
/// independent and the driver's join is the final synchronization point.
#[derive(Debug)]
pub struct SolverContext {
    tasks: Vec<Board>,
    next_task_index: AtomicUsize,
    solution_count: AtomicU64,
    finished: AtomicBool,
}

impl SolverContext {
    /// Wrap a generated task queue
    #[must_use]
    pub fn new(tasks: Vec<Board>) -> Self {
        Self {
            tasks,
            next_task_index: AtomicUsize::new(0),
            solution_count: AtomicU64::new(0),
            finished: AtomicBool::new(false),
        }
    }

    /// Number of queued tasks
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Global solution count accumulated so far
    pub fn solutions(&self) -> u64 {
        self.solution_count.load(Ordering::Relaxed)
    }
}

/// Claim and solve tasks until the queue drains or another worker finishes
///
/// The early-exit flag is only observed between tasks, so after a hit in
/// one-solution mode the extra work is bounded by the tasks already in
/// flight.
pub fn run_worker(context: &SolverContext, options: &SolveOptions) {
    let mut local_count = 0u64;

    while !context.finished.load(Ordering::Relaxed) {
        let my_index = context.next_task_index.fetch_add(1, Ordering::Relaxed);
        if my_index >= context.tasks.len() {
            break;
        }

        let mut board = context.tasks[my_index].clone();
        let mut task_count = 0u64;
        let found = solve(&mut board, &mut task_count, options);
        local_count += task_count;

        if options.one_solution && found {
            context.finished.store(true, Ordering::Relaxed);
        }
    }

    context.solution_count.fetch_add(local_count, Ordering::Relaxed);
}

/// Solve a piece set, sequentially or over a worker pool
///
/// With 0 or 1 threads the search runs on the calling thread with no task
/// generation. A tile set whose total area differs from 64 cannot cover the
/// board exactly and is rejected before any search: placements are
/// disjoint, so `done()` implies full cover exactly when the total is 64.
#[must_use]
pub fn run_search(pieces: PieceSet, threads: usize, options: &SolveOptions) -> SearchOutcome {
    if pieces.total_cells() != 64 {
        info!(
            "tile set covers {} cells, not 64; no packing exists",
            pieces.total_cells()
        );
        return SearchOutcome { solutions: 0 };
    }

    let mut board = Board::new(Arc::new(pieces));

    if threads <= 1 {
        let mut solutions = 0u64;
        solve(&mut board, &mut solutions, options);
        return SearchOutcome { solutions };
    }

    let tasks = generate_tasks(&mut board, threads);
    info!("solving over {} tasks with {threads} workers", tasks.len());

    let context = SolverContext::new(tasks);
    thread::scope(|scope| {
        for worker in 0..threads {
            let context = &context;
            scope.spawn(move || {
                debug!("worker {worker} started");
                run_worker(context, options);
                debug!("worker {worker} finished");
            });
        }
    });

    SearchOutcome {
        solutions: context.solutions(),
    }
}
