//! The distributed fixed-point solver
//!
//! This module contains everything that runs between "system loaded" and
//! "solution reported":
//!
//! # Module Organization
//!
//! - **`traits`**: Core trait definitions and types
//!   - `Solver` trait: stable interface for solution methods
//!   - `SolverConfiguration`: worker count, iteration cap, guard switch
//!   - `SolveReport`: solution vector + iteration count + metadata
//!   - `SolverError`: every way a run can fail
//!
//! - **`partition`**: Ownership of unknowns
//!   - `Partition`: the contiguous index range one worker owns
//!
//! - **`kernel`**: The per-partition update
//!   - computes the next value of every owned unknown from the previous
//!     iterate generation
//!
//! - **`exchange`**: The synchronization primitive
//!   - `Exchange` trait: all-gather contract every backend must satisfy
//!   - `SharedAllGather`: thread-backed barrier implementation
//!
//! - **`convergence`**: The per-iteration verdict
//!   - relative change per unknown, with an absolute fallback near zero
//!
//! - **Method implementations** (`methods`):
//!   - `JacobiSolver`: the distributed Jacobi loop
//!
//! # Control Flow
//!
//! ```text
//! ┌───────────────┐
//! │ LinearSystem  │  (read-only, shared by all workers)
//! └───────┬───────┘
//!         │
//! ┌───────▼───────┐     one per worker
//! │   Partition   │  [lower, upper) of the unknown range
//! └───────┬───────┘
//!         │
//! ┌───────▼───────┐
//! │ update kernel │  next values for the owned slice, from the
//! └───────┬───────┘  previous full iterate
//!         │
//! ┌───────▼───────┐
//! │   exchange    │  barrier: merge every slice, publish the full
//! └───────┬───────┘  candidate iterate to every worker
//!         │
//! ┌───────▼───────┐  converged? ── yes ──► report (solution, count)
//! │  convergence  │
//! └───────┬───────┘
//!         └── no ──► previous = candidate, repeat
//! ```
//!
//! # Error Handling
//!
//! All solver entry points return `Result<_, SolverError>`. Structural
//! failures (bad configuration, dominance guard) abort before any worker
//! thread starts. Mid-run failures are decided from the *merged* iterate,
//! which every worker observes identically, so all workers abort together
//! and nobody is left waiting at a barrier.

// =================================================================================================
// Module Declarations
// =================================================================================================
mod traits;

pub mod convergence;
pub mod exchange;
pub mod kernel;
pub mod partition;

mod methods;

// =================================================================================================
// Parallel Execution Threshold
// =================================================================================================
//
// Deciding *when* to hand a partition's row updates off to Rayon is an
// execution concern, not a numerical one, so it lives here rather than in
// kernel.rs.
//
// The threshold is stored in an AtomicUsize so that it can be changed at
// runtime (useful in benchmarks and tests) without requiring a mutex on
// every kernel call. Relaxed ordering is sufficient: the value is a
// performance hint, not a synchronisation point.
// =================================================================================================

use std::sync::atomic::{AtomicUsize, Ordering};

/// Default amount of work (owned rows × unknowns, i.e. multiply-adds per
/// kernel call) above which the update kernel switches to parallel
/// iteration.
///
/// Below this point the overhead of Rayon's thread-pool dispatch outweighs
/// the per-row dot products, especially since the kernel already runs
/// inside one worker thread per partition.
const DEFAULT_PARALLEL_THRESHOLD: usize = 4096;

/// Runtime-configurable parallel-execution threshold.
///
/// Read via [`parallel_threshold()`], written via [`set_parallel_threshold()`].
static PARALLEL_THRESHOLD: AtomicUsize = AtomicUsize::new(DEFAULT_PARALLEL_THRESHOLD);

/// Return the current parallel-execution threshold.
///
/// The update kernel uses sequential iteration when a call performs fewer
/// multiply-adds than this value, and switches to Rayon when it performs
/// more — but only when the crate is compiled with the `parallel` feature.
///
/// # Example
///
/// ```rust
/// use jacobi_rs::solver::parallel_threshold;
///
/// assert!(parallel_threshold() > 0);
/// ```
pub fn parallel_threshold() -> usize {
    PARALLEL_THRESHOLD.load(Ordering::Relaxed)
}

/// Set the parallel-execution threshold to a new value.
///
/// # Panics
///
/// Panics when `threshold == 0`. A zero threshold would force parallel
/// dispatch on every single-row update, which is never the intended
/// behaviour.
pub fn set_parallel_threshold(threshold: usize) {
    assert!(threshold > 0, "parallel threshold must be at least 1");
    PARALLEL_THRESHOLD.store(threshold, Ordering::Relaxed);
}

/// RAII guard that saves the current threshold on construction and restores
/// it on drop.
///
/// Only compiled in test builds. Prevents one test from leaking a modified
/// threshold value into the next.
#[cfg(test)]
pub(crate) struct ThresholdGuard {
    previous: usize,
}

#[cfg(test)]
impl ThresholdGuard {
    /// Set the threshold to `new_value` and return a guard that will
    /// restore the previous value on drop.
    pub(crate) fn save(new_value: usize) -> Self {
        let previous = parallel_threshold();
        set_parallel_threshold(new_value);
        Self { previous }
    }
}

#[cfg(test)]
impl Drop for ThresholdGuard {
    fn drop(&mut self) {
        // Bypass the public setter so that restoring to any value never panics.
        PARALLEL_THRESHOLD.store(self.previous, Ordering::Relaxed);
    }
}

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use traits::{SolveReport, Solver, SolverConfiguration, SolverError};

pub use convergence::{converged, relative_change};
pub use exchange::{Exchange, SharedAllGather};
pub use kernel::update_partition;
pub use partition::Partition;

pub use methods::JacobiSolver;

// =================================================================================================
// Helper Functions
// =================================================================================================

use nalgebra::DVector;

/// Validate a freshly merged iterate for numerical issues.
///
/// NaN can arise from 0/0 or Inf - Inf in a badly scaled system; Inf
/// indicates overflow of a diverging iteration. Every worker calls this on
/// the same merged candidate, so every worker reaches the same verdict and
/// the run aborts as a whole.
pub(crate) fn ensure_finite(iterate: &DVector<f64>, iteration: usize) -> Result<(), SolverError> {
    if iterate.iter().any(|x| !x.is_finite()) {
        return Err(SolverError::NonFiniteIterate { iteration });
    }
    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
