//! The all-gather synchronization primitive
//!
//! After every update step each worker holds new values for its own
//! unknowns only. The exchange merges those slices into one full-length
//! candidate iterate and publishes it to every worker, and it is the single
//! blocking operation of the whole run: nobody starts iteration `k + 1`
//! before everybody has observed the complete merged iterate of
//! iteration `k`.
//!
//! # The Contract
//!
//! [`Exchange::all_gather`] must guarantee, for every participating worker:
//!
//! 1. the worker's own `[lower, upper)` slice appears verbatim in the result
//! 2. every other covered slice holds the contributing peer's values from
//!    the *same* iteration
//! 3. all workers observe the identical merged vector
//! 4. the call does not return anywhere until every worker has contributed
//!
//! Only indices covered by some partition are merged; with an exact tiling
//! (which the solver enforces) that is the whole vector.
//!
//! # The Thread Backend
//!
//! [`SharedAllGather`] realizes the contract for worker threads in one
//! process with a merge buffer and a reusable barrier:
//!
//! ```text
//! write own slice ──► barrier ──► snapshot full buffer ──► barrier
//! ```
//!
//! The first barrier separates everyone's writes from everyone's reads; the
//! second keeps a fast worker from starting to write generation `k + 1`
//! into the buffer while a slow peer is still snapshotting generation `k`.

use nalgebra::DVector;
use std::sync::{Arc, Barrier, Mutex};

use crate::solver::partition::Partition;
use crate::solver::traits::SolverError;

// =================================================================================================
// Exchange contract
// =================================================================================================

/// The synchronization primitive the solver loop requires.
///
/// Implementations other than the in-process [`SharedAllGather`] (e.g. a
/// collective over a process group) plug in here, as long as they satisfy
/// the contract in the module documentation.
pub trait Exchange: Send + Sync {
    /// Contribute the local slice, block until all peers have contributed,
    /// and return the merged full-length iterate.
    ///
    /// `local` holds the new values for `partition`'s unknowns, in order;
    /// its length must equal `partition.len()`.
    fn all_gather(
        &self,
        local: &[f64],
        partition: &Partition,
    ) -> Result<DVector<f64>, SolverError>;

    /// Number of participating workers.
    fn workers(&self) -> usize;
}

// =================================================================================================
// Thread-backed implementation
// =================================================================================================

struct Inner {
    /// The merge buffer. Each worker writes only its own slice, so writes
    /// never overlap; the barrier separates the write phase from the reads.
    merged: Mutex<DVector<f64>>,

    /// Reusable rendezvous for all workers, used twice per exchange.
    barrier: Barrier,

    workers: usize,
}

/// All-gather for worker threads sharing one address space.
///
/// Cloning yields another handle to the same exchange; create one and hand
/// a clone to every worker.
///
/// # Example
///
/// ```rust
/// use jacobi_rs::solver::{Exchange, Partition, SharedAllGather};
/// use std::thread;
///
/// let exchange = SharedAllGather::new(4, 2);
///
/// thread::scope(|scope| {
///     for worker in 0..2 {
///         let exchange = exchange.clone();
///         scope.spawn(move || {
///             let partition = Partition::new(4, 2, worker);
///             let local = vec![worker as f64; 2];
///             let merged = exchange.all_gather(&local, &partition).unwrap();
///             assert_eq!(merged.as_slice(), &[0.0, 0.0, 1.0, 1.0]);
///         });
///     }
/// });
/// ```
#[derive(Clone)]
pub struct SharedAllGather {
    inner: Arc<Inner>,
}

impl SharedAllGather {
    /// Create an exchange for `workers` workers over `unknowns` unknowns.
    ///
    /// Indices not covered by any partition keep the buffer seed value of
    /// zero across every exchange.
    pub fn new(unknowns: usize, workers: usize) -> Self {
        Self {
            inner: Arc::new(Inner {
                merged: Mutex::new(DVector::zeros(unknowns)),
                barrier: Barrier::new(workers),
                workers,
            }),
        }
    }

    fn lock_failure(&self, partition: &Partition) -> SolverError {
        SolverError::WorkerFailure {
            worker: partition.worker,
            message: "a peer worker panicked during the exchange".to_string(),
        }
    }
}

impl Exchange for SharedAllGather {
    /// See the trait documentation for the contract.
    ///
    /// # Panics
    ///
    /// Panics when `local.len() != partition.len()`; a caller bug that
    /// must not be papered over by merging a misaligned slice.
    fn all_gather(
        &self,
        local: &[f64],
        partition: &Partition,
    ) -> Result<DVector<f64>, SolverError> {
        assert_eq!(
            local.len(),
            partition.len(),
            "local slice length must match the partition"
        );

        // Write phase: own slice only, no overlap with any peer.
        {
            let mut merged = self
                .inner
                .merged
                .lock()
                .map_err(|_| self.lock_failure(partition))?;
            merged.as_mut_slice()[partition.lower..partition.upper].copy_from_slice(local);
        }

        // Everyone has written before anyone reads.
        self.inner.barrier.wait();

        // Read phase: every worker snapshots the identical merged iterate.
        let snapshot = {
            let merged = self
                .inner
                .merged
                .lock()
                .map_err(|_| self.lock_failure(partition))?;
            merged.clone()
        };

        // Everyone has read before anyone writes the next generation.
        self.inner.barrier.wait();

        Ok(snapshot)
    }

    fn workers(&self) -> usize {
        self.inner.workers
    }
}

// =================================================================================================
// Tests
// =================================================================================================
