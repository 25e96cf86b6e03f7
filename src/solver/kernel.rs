//! The per-partition update kernel
//!
//! One Jacobi step for the unknowns a worker owns:
//!
//! ```text
//! x_new[i] = (b[i] - sum(a[i][j] * x_prev[j], j != i)) / a[i][i]
//! ```
//!
//! Every term reads the *previous* iterate generation, captured before the
//! step began. A worker never sees values its peers compute in the same
//! step; those become visible only after the exchange publishes the merged
//! candidate. This is what makes the row updates within a partition
//! independent: they can run in any order, or in parallel, with no
//! synchronization.
//!
//! The kernel has no side effects beyond producing the local result slice.

use nalgebra::DVector;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::solver::parallel_threshold;
use crate::solver::partition::Partition;
use crate::system::LinearSystem;

/// Compute the next value of one unknown from the previous iterate.
///
/// Division by the diagonal is safe: `LinearSystem` rejects zero diagonals
/// at construction.
#[inline]
fn update_row(system: &LinearSystem, previous: &DVector<f64>, i: usize) -> f64 {
    let mut sum = 0.0;
    for j in 0..system.unknowns() {
        if j != i {
            sum += system.coefficient(i, j) * previous[j];
        }
    }
    (system.constant(i) - sum) / system.diagonal(i)
}

/// Compute new values for every unknown in `partition`.
///
/// Returns a slice of length `partition.len()`; entry `k` is the new value
/// of unknown `partition.lower + k`.
///
/// Above the configurable work threshold
/// ([`parallel_threshold`](crate::solver::parallel_threshold)) the rows are
/// updated through Rayon when the `parallel` feature is enabled; each row
/// only reads shared data, so no locking is involved.
///
/// # Example
///
/// ```rust
/// use jacobi_rs::system::LinearSystem;
/// use jacobi_rs::solver::{update_partition, Partition};
///
/// let system = LinearSystem::from_rows(
///     vec![vec![4.0, 1.0], vec![2.0, 3.0]],
///     vec![1.0, 2.0],
///     vec![0.0, 0.0],
///     1e-3,
/// ).unwrap();
///
/// // From x = [0, 0]: x0 = 1/4, x1 = 2/3
/// let local = update_partition(&system, system.initial_guess(), &Partition::new(2, 1, 0));
/// assert_eq!(local, vec![0.25, 2.0 / 3.0]);
/// ```
pub fn update_partition(
    system: &LinearSystem,
    previous: &DVector<f64>,
    partition: &Partition,
) -> Vec<f64> {
    // Work estimate: one dot product of length n per owned row.
    if partition.len() * system.unknowns() > parallel_threshold() {
        #[cfg(feature = "parallel")]
        return partition
            .range()
            .into_par_iter()
            .map(|i| update_row(system, previous, i))
            .collect();
    }

    partition
        .range()
        .map(|i| update_row(system, previous, i))
        .collect()
}

// =================================================================================================
// Tests
// =================================================================================================
