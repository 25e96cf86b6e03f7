//! Ownership of unknowns
//!
//! Each worker owns one contiguous half-open range `[lower, upper)` of the
//! unknown index space. The mapping is a pure function of
//! `(n, workers, worker)`, so every worker computes the identical global
//! ownership picture without any communication.
//!
//! # Remainder Policy
//!
//! When `workers` does not divide `n`, the trailing `n % workers` unknowns
//! belong to nobody: the ranges tile only a prefix of `[0, n)`. This
//! truncation is deliberate and is NOT patched up here by redistributing
//! the remainder; [`Partition::covers`] reports whether a combination tiles
//! the full range, and the solver refuses combinations that don't.

use std::fmt;
use std::ops::Range;

/// The contiguous index range one worker owns.
///
/// # Invariants
///
/// For a fixed `(n, workers)`, the ranges of workers `0..workers` are
/// pairwise disjoint, ordered, and of equal length `n / workers`.
///
/// # Example
///
/// ```rust
/// use jacobi_rs::solver::Partition;
///
/// let partition = Partition::new(8, 4, 2);
/// assert_eq!(partition.lower, 4);
/// assert_eq!(partition.upper, 6);
/// assert_eq!(partition.len(), 2);
/// assert!(partition.contains(5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Partition {
    /// Index of the owning worker.
    pub worker: usize,

    /// First owned unknown.
    pub lower: usize,

    /// One past the last owned unknown.
    pub upper: usize,
}

impl Partition {
    /// Compute worker `worker`'s range for `n` unknowns split across
    /// `workers` workers.
    ///
    /// `local_n = n / workers`, `lower = worker * local_n`,
    /// `upper = lower + local_n`. Integer division truncates; see the
    /// module documentation for the remainder policy.
    ///
    /// # Panics
    ///
    /// Panics when `workers == 0`.
    pub fn new(n: usize, workers: usize, worker: usize) -> Self {
        assert!(workers > 0, "worker count must be at least 1");

        let local_n = n / workers;
        let lower = worker * local_n;

        Self {
            worker,
            lower,
            upper: lower + local_n,
        }
    }

    /// Number of owned unknowns.
    pub fn len(&self) -> usize {
        self.upper - self.lower
    }

    /// True when the worker owns nothing (`workers > n`).
    pub fn is_empty(&self) -> bool {
        self.lower == self.upper
    }

    /// The owned range, for iteration.
    pub fn range(&self) -> Range<usize> {
        self.lower..self.upper
    }

    /// True when unknown `i` belongs to this worker.
    pub fn contains(&self, i: usize) -> bool {
        self.lower <= i && i < self.upper
    }

    /// True when the partitions of `(n, workers)` tile `[0, n)` exactly,
    /// leaving no unowned remainder.
    pub fn covers(n: usize, workers: usize) -> bool {
        workers > 0 && n % workers == 0
    }
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "worker {} owns [{}, {})", self.worker, self.lower, self.upper)
    }
}

// =================================================================================================
// Tests
// =================================================================================================
