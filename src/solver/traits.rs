//! Solver traits and types
//!
//! # Design Philosophy
//!
//! The solver interface separates three concerns:
//! - `SolverConfiguration` - HOW to run (workers, iteration cap, guard)
//! - `Solver` trait - the method itself, independent of the problem data
//! - `SolveReport` - the outcome, with metadata for diagnostics
//!
//! The problem itself (the WHAT) is a [`LinearSystem`](crate::system::LinearSystem)
//! and is passed by reference into `solve`; the solver never owns or mutates
//! it.
//!
//! # Stability Guarantee
//!
//! - `Solver` trait: STABLE since v0.1.0
//! - `SolverError`: EXTENSIBLE (new variants can be added)
//! - Core structures: STABLE (fields won't be removed)

use nalgebra::DVector;
use std::collections::HashMap;
use thiserror::Error;

use crate::system::{LinearSystem, SystemError};

// =================================================================================================
// Errors
// =================================================================================================

/// Every way a solve can fail.
///
/// Structural errors (`System`, `InvalidConfiguration`, `PartitionMismatch`)
/// are raised before any worker thread starts. The remaining variants are
/// decided identically by every worker from shared data, so the whole run
/// aborts together.
#[derive(Debug, Error)]
pub enum SolverError {
    /// The system data itself is unusable, or the dominance guard rejected
    /// the matrix.
    #[error(transparent)]
    System(#[from] SystemError),

    /// The configuration is not usable for any system.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The worker count cannot evenly partition the unknowns; trailing
    /// unknowns would be owned by nobody.
    #[error(
        "{workers} workers cannot evenly partition {unknowns} unknowns; \
         choose a worker count that divides the unknown count"
    )]
    PartitionMismatch { unknowns: usize, workers: usize },

    /// The configured iteration cap was reached before convergence.
    #[error("no convergence after {limit} iterations")]
    MaxIterationsExceeded { limit: usize },

    /// The merged iterate contains NaN or Inf; the iteration is diverging
    /// or the system is badly scaled.
    #[error("non-finite value (NaN or Inf) in the iterate after iteration {iteration}")]
    NonFiniteIterate { iteration: usize },

    /// A worker thread died; the run cannot be completed.
    #[error("worker {worker} failed: {message}")]
    WorkerFailure { worker: usize, message: String },
}

// =================================================================================================
// Solver configuration
// =================================================================================================

/// Configuration for a solver run.
///
/// # Examples
///
/// ```rust
/// use jacobi_rs::solver::SolverConfiguration;
///
/// // Four workers, run until converged (the classic behaviour)
/// let config = SolverConfiguration::new(4);
///
/// // Bounded run for systems that might not converge
/// let config = SolverConfiguration::new(4).with_max_iterations(10_000);
///
/// // Skip the dominance guard for a system known to converge
/// let config = SolverConfiguration::new(4).without_dominance_check();
/// ```
#[derive(Clone, Debug)]
pub struct SolverConfiguration {
    /// Number of parallel workers; must evenly divide the unknown count.
    pub workers: usize,

    /// Optional iteration cap. `None` iterates until convergence, however
    /// long that takes; a non-convergent system then loops forever.
    pub max_iterations: Option<usize>,

    /// Run the diagonal-dominance guard before solving. The guard is a
    /// sufficient condition only; disable it for systems known to converge
    /// by other means.
    pub check_dominance: bool,
}

impl SolverConfiguration {
    /// Create a configuration with the given worker count.
    ///
    /// Defaults: no iteration cap, dominance guard enabled.
    pub fn new(workers: usize) -> Self {
        Self {
            workers,
            max_iterations: None,
            check_dominance: true,
        }
    }

    /// Builder pattern: set an iteration cap.
    pub fn with_max_iterations(mut self, limit: usize) -> Self {
        self.max_iterations = Some(limit);
        self
    }

    /// Builder pattern: disable the dominance guard.
    pub fn without_dominance_check(mut self) -> Self {
        self.check_dominance = false;
        self
    }

    /// Validate configuration.
    pub fn validate(&self) -> Result<(), SolverError> {
        if self.workers == 0 {
            return Err(SolverError::InvalidConfiguration(
                "worker count must be at least 1".to_string(),
            ));
        }
        if self.max_iterations == Some(0) {
            return Err(SolverError::InvalidConfiguration(
                "iteration cap must be at least 1 when set".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for SolverConfiguration {
    /// Single worker, no cap, guard enabled.
    fn default() -> Self {
        Self::new(1)
    }
}

// =================================================================================================
// Solve report
// =================================================================================================

/// Outcome of a successful solve.
#[derive(Clone, Debug)]
pub struct SolveReport {
    /// The final iterate: one value per unknown, in unknown order.
    pub solution: DVector<f64>,

    /// Number of completed update+exchange cycles.
    pub iterations: usize,

    /// Diagnostic metadata (solver name, worker count, ...).
    pub metadata: HashMap<String, String>,
}

impl SolveReport {
    /// Create a report.
    pub fn new(solution: DVector<f64>, iterations: usize) -> Self {
        Self {
            solution,
            iterations,
            metadata: HashMap::new(),
        }
    }

    /// Add metadata for diagnostics and reproducibility.
    pub fn add_metadata(&mut self, key: &str, value: &str) {
        self.metadata.insert(key.to_string(), value.to_string());
    }
}

// =================================================================================================
// Solver trait
// =================================================================================================

/// The interface every solution method implements.
///
/// Implementations are stateless and reusable: the same solver value can run
/// any number of systems with any number of configurations.
pub trait Solver {
    /// Solve the system to its tolerance.
    ///
    /// # Arguments
    /// * `system` - The problem data, shared read-only with every worker
    /// * `config` - Worker count, iteration cap, guard switch
    ///
    /// # Returns
    /// The final iterate and the number of iterations it took, or the first
    /// error that aborted the run.
    fn solve(
        &self,
        system: &LinearSystem,
        config: &SolverConfiguration,
    ) -> Result<SolveReport, SolverError>;

    /// Name of the method (used for display and report metadata).
    fn name(&self) -> &str;
}

// =================================================================================================
// Tests
// =================================================================================================
