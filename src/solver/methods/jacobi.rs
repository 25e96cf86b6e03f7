//! Distributed Jacobi fixed-point solver
//!
//! # Mathematical Background
//!
//! For `Ax = b` with non-zero diagonal, the Jacobi iteration computes
//!
//! ```text
//! x_new[i] = (b[i] - sum(a[i][j] * x_prev[j], j != i)) / a[i][i]
//! ```
//!
//! for every unknown, then repeats from `x_new` until no unknown's relative
//! change exceeds the tolerance. Because every update reads only the
//! previous generation, the unknowns can be updated in parallel with no
//! ordering constraints; the natural distribution is to give each worker a
//! contiguous block and merge the blocks after every step.
//!
//! # Run Lifecycle
//!
//! ```text
//! INIT ──────► ITERATING ──────► CONVERGED
//!   │              │
//!   │              └──────────► (aborted: iteration cap, non-finite iterate)
//!   └────────────────────────► (aborted: configuration, dominance guard)
//! ```
//!
//! - **INIT**: validate the configuration against the system, optionally
//!   run the dominance guard, build the exchange, spawn the workers. The
//!   workers each perform the first update+exchange, making the iteration
//!   count 1.
//! - **ITERATING**: each worker evaluates convergence on the full
//!   (previous, candidate) pair; after the exchange every worker holds
//!   both generations in full, so all verdicts agree. Not converged:
//!   promote the candidate, update, exchange, count.
//! - **CONVERGED**: worker results are joined; the report carries the final
//!   iterate and the count.
//!
//! # Abort Discipline
//!
//! A worker that stops while its peers wait at the barrier would deadlock
//! the run, so every abort decision is taken from data all workers share:
//! the merged candidate (finiteness check) and the iteration count
//! (cap check). Each worker takes the same decision at the same point of
//! the same iteration, and the whole run winds down together.
//!
//! # Characteristics
//!
//! - **Convergence**: guaranteed for strictly diagonally dominant systems
//!   (the guard checks exactly this sufficient condition)
//! - **Cost per iteration**: one dense matrix-vector sweep, split across
//!   workers; one all-gather
//! - **Memory**: two full iterate generations per worker plus the shared
//!   merge buffer

use nalgebra::DVector;
use std::thread;

use crate::solver::convergence::converged;
use crate::solver::exchange::{Exchange, SharedAllGather};
use crate::solver::kernel::update_partition;
use crate::solver::partition::Partition;
use crate::solver::traits::{SolveReport, Solver, SolverConfiguration, SolverError};
use crate::solver::ensure_finite;
use crate::system::{check_convergent, LinearSystem};

// =================================================================================================
// Distributed Jacobi Solver
// =================================================================================================

/// Distributed Jacobi fixed-point solver.
///
/// Stateless; one value can run any number of systems.
///
/// # Example
///
/// ```rust
/// use jacobi_rs::solver::{JacobiSolver, Solver};
///
/// let solver = JacobiSolver::new();
/// assert_eq!(solver.name(), "Distributed Jacobi");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct JacobiSolver;

impl JacobiSolver {
    /// Create a new solver.
    pub fn new() -> Self {
        Self
    }
}

impl Solver for JacobiSolver {
    fn solve(
        &self,
        system: &LinearSystem,
        config: &SolverConfiguration,
    ) -> Result<SolveReport, SolverError> {
        // ====== Step 1: Validation ======

        config.validate()?;

        let n = system.unknowns();

        // Refuse configurations whose partitions would leave trailing
        // unknowns owned by nobody.
        if config.workers > n || !Partition::covers(n, config.workers) {
            return Err(SolverError::PartitionMismatch {
                unknowns: n,
                workers: config.workers,
            });
        }

        // Advisory sufficient condition; callers opt out explicitly.
        if config.check_dominance {
            check_convergent(system)?;
        }

        // ====== Step 2: Setup ======

        let exchange = SharedAllGather::new(n, config.workers);
        let cap = config.max_iterations;

        // ====== Step 3: The Distributed Loop ======

        // One scoped thread per worker; the scope guarantees every worker
        // has finished before the borrows of `system` end.
        let results: Vec<Result<(DVector<f64>, usize), SolverError>> =
            thread::scope(|scope| {
                let handles: Vec<_> = (0..config.workers)
                    .map(|worker| {
                        let exchange = exchange.clone();
                        let partition = Partition::new(n, config.workers, worker);

                        scope.spawn(move || run_worker(system, &exchange, partition, cap))
                    })
                    .collect();

                handles
                    .into_iter()
                    .enumerate()
                    .map(|(worker, handle)| {
                        handle.join().unwrap_or_else(|_| {
                            Err(SolverError::WorkerFailure {
                                worker,
                                message: "worker thread panicked".to_string(),
                            })
                        })
                    })
                    .collect()
            });

        // ====== Step 4: Build Result ======

        // All workers run the identical loop over identical shared data, so
        // on success they return identical results; the first one speaks
        // for the run, and the first error (if any) aborted all of them.
        let mut outcome: Option<(DVector<f64>, usize)> = None;
        for result in results {
            let pair = result?;
            if outcome.is_none() {
                outcome = Some(pair);
            }
        }

        // workers >= 1 was validated above, so an outcome exists.
        let (solution, iterations) = match outcome {
            Some(pair) => pair,
            None => {
                return Err(SolverError::WorkerFailure {
                    worker: 0,
                    message: "no worker produced a result".to_string(),
                })
            }
        };

        let mut report = SolveReport::new(solution, iterations);

        // Metadata for diagnostics and reproducibility
        report.add_metadata("solver", self.name());
        report.add_metadata("workers", &config.workers.to_string());
        report.add_metadata("iterations", &iterations.to_string());
        report.add_metadata("tolerance", &system.tolerance().to_string());

        Ok(report)
    }

    fn name(&self) -> &'static str {
        "Distributed Jacobi"
    }
}

// =================================================================================================
// Worker Loop
// =================================================================================================

/// One worker's run: first update+exchange, then iterate to convergence.
///
/// Returns the final merged iterate and the completed iteration count.
fn run_worker(
    system: &LinearSystem,
    exchange: &SharedAllGather,
    partition: Partition,
    cap: Option<usize>,
) -> Result<(DVector<f64>, usize), SolverError> {
    let n = system.unknowns();
    let tolerance = system.tolerance();

    // ====== INIT: first update + exchange ======

    let mut previous = system.initial_guess().clone();

    let local = update_partition(system, &previous, &partition);
    let mut candidate = exchange.all_gather(&local, &partition)?;
    let mut iterations = 1;

    ensure_finite(&candidate, iterations)?;

    // ====== ITERATING ======

    // Every worker holds both full generations here, so every worker takes
    // the identical branch; see the module notes on abort discipline.
    while !converged(&previous, &candidate, 0, n, tolerance) {
        if let Some(limit) = cap {
            if iterations >= limit {
                return Err(SolverError::MaxIterationsExceeded { limit });
            }
        }

        previous = candidate;

        let local = update_partition(system, &previous, &partition);
        candidate = exchange.all_gather(&local, &partition)?;
        iterations += 1;

        ensure_finite(&candidate, iterations)?;
    }

    // ====== CONVERGED ======

    Ok((candidate, iterations))
}

// =================================================================================================
// Tests
// =================================================================================================
