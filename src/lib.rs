//! jacobi-rs: Distributed Jacobi Linear Solver
//!
//! An iterative fixed-point solver for dense linear systems `Ax = b` that
//! distributes the unknowns across a fixed set of cooperating worker threads,
//! synchronizing after every iteration through an all-gather barrier.
//!
//! # Architecture
//!
//! jacobi-rs is built on two core principles:
//!
//! 1. **Separation of Problem and Method**
//!    - The problem data (`system`) defines WHAT to solve
//!    - The solver (`solver`) provides the method and coordination
//!
//! 2. **Exclusive Ownership per Phase**
//!    - The coefficient matrix and constants are read-only for the entire run
//!    - Each worker writes only its own slice of the next iterate
//!    - The exchange barrier is the single synchronization point
//!
//! # Quick Start
//!
//! ```rust
//! use jacobi_rs::system::LinearSystem;
//! use jacobi_rs::solver::{JacobiSolver, Solver, SolverConfiguration};
//!
//! # fn main() -> Result<(), jacobi_rs::solver::SolverError> {
//! // 1. Describe the system: coefficients, constants, initial guess, tolerance
//! let system = LinearSystem::from_rows(
//!     vec![vec![4.0, 1.0], vec![2.0, 3.0]],
//!     vec![1.0, 2.0],
//!     vec![0.0, 0.0],
//!     1e-4,
//! )?;
//!
//! // 2. Configure the run: worker count must evenly divide the unknown count
//! let config = SolverConfiguration::new(2);
//!
//! // 3. Solve
//! let solver = JacobiSolver::new();
//! let report = solver.solve(&system, &config)?;
//!
//! // 4. Access results
//! println!("converged after {} iterations", report.iterations);
//! println!("x = {:?}", report.solution.as_slice());
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`system`]: Problem data and structural validation
//! - [`solver`]: Partitioning, update kernel, exchange, convergence, methods
//! - [`input`]: Text-file loader
//! - [`output`]: Solution export

// Core modules
pub mod system;

pub mod solver;

// I/O collaborators
pub mod input;
pub mod output;

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //!
    //! use jacobi_rs::prelude::*;
    //! ```
    pub use crate::system::{LinearSystem, SystemError};
    pub use crate::solver::{
        JacobiSolver, Solver, SolverConfiguration, SolverError, SolveReport,
    };
    pub use crate::input::load_system;
    pub use crate::output::export::export_solution;
}
