//! Solution methods
//!
//! Concrete implementations of the [`Solver`](crate::solver::Solver) trait.
//! The separation between the abstract interface (`solver::traits`) and the
//! implementations here keeps the trait stable while new methods can be
//! added freely.
//!
//! # Available Methods
//!
//! - **[`JacobiSolver`]**: distributed Jacobi fixed-point iteration
//!   - one worker thread per partition, all-gather barrier per iteration
//!   - converges for diagonally dominant systems
//!   - the method of choice here: every unknown's update depends only on
//!     the previous generation, so the partitioned updates need no
//!     intra-step communication at all
//!
//! # Example
//!
//! ```rust
//! use jacobi_rs::system::LinearSystem;
//! use jacobi_rs::solver::{JacobiSolver, Solver, SolverConfiguration};
//!
//! fn main() -> Result<(), jacobi_rs::solver::SolverError> {
//!     let system = LinearSystem::from_rows(
//!         vec![vec![4.0, 1.0], vec![2.0, 3.0]],
//!         vec![1.0, 2.0],
//!         vec![0.0, 0.0],
//!         1e-4,
//!     )?;
//!
//!     let solver = JacobiSolver::new();
//!     let report = solver.solve(&system, &SolverConfiguration::new(2))?;
//!
//!     assert!(report.iterations > 0);
//!     Ok(())
//! }
//! ```

mod jacobi;

// Re-exports for convenience
pub use jacobi::JacobiSolver;
