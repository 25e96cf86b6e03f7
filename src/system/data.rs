//! The linear system container
//!
//! A [`LinearSystem`] bundles everything the iteration reads: the `n x n`
//! coefficient matrix, the `n` right-hand-side constants, the initial guess
//! for the unknowns and the relative-error tolerance the run must reach.
//!
//! # Validation Policy
//!
//! All structural problems are rejected at construction time rather than
//! surfacing mid-run:
//!
//! - dimension mismatches between matrix, constants and initial guess
//! - an empty system (`n == 0`)
//! - non-finite entries anywhere in the data
//! - a non-positive or non-finite tolerance
//! - a zero diagonal coefficient
//!
//! The zero-diagonal check matters most: the update kernel divides by
//! `a[i][i]` on every iteration, and catching the singular diagonal here
//! turns a run-time NaN cascade into a clear load-time error naming the row.
//!
//! # Sharing
//!
//! The system is immutable after construction and `Sync`, so workers borrow
//! it concurrently without locking. The iterate generations are the only
//! mutable state of a run, and they live in the solver, not here.

use nalgebra::{DMatrix, DVector};
use thiserror::Error;

// =================================================================================================
// Errors
// =================================================================================================

/// Structural problems with the system data.
///
/// Everything in here is fatal for the run: a system that fails construction
/// or the convergence guard never reaches the workers.
#[derive(Debug, Error)]
pub enum SystemError {
    /// The system has no unknowns.
    #[error("system is empty: at least one unknown is required")]
    Empty,

    /// The coefficient matrix is not square.
    #[error("coefficient matrix is {rows}x{cols}, expected a square matrix")]
    NonSquareMatrix { rows: usize, cols: usize },

    /// A vector does not match the matrix dimension.
    #[error("{name} has {len} entries, expected {expected}")]
    LengthMismatch {
        name: &'static str,
        len: usize,
        expected: usize,
    },

    /// The tolerance is unusable as a convergence threshold.
    #[error("tolerance must be positive and finite, got {0}")]
    InvalidTolerance(f64),

    /// A coefficient is NaN or infinite.
    #[error("non-finite coefficient at row {row}, column {col}")]
    NonFiniteCoefficient { row: usize, col: usize },

    /// A constant or initial-guess entry is NaN or infinite.
    #[error("non-finite value in {name} at index {index}")]
    NonFiniteEntry { name: &'static str, index: usize },

    /// A diagonal coefficient is zero; the update kernel would divide by it.
    #[error("singular diagonal: coefficient ({row},{row}) is zero")]
    SingularDiagonal { row: usize },

    /// A row violates weak diagonal dominance, so convergence of the
    /// fixed-point iteration is not guaranteed.
    #[error(
        "matrix will not converge: row {row} is not diagonally dominant \
         (|diagonal| = {diagonal}, off-diagonal sum = {off_diagonal})"
    )]
    RowNotDominant {
        row: usize,
        diagonal: f64,
        off_diagonal: f64,
    },

    /// No row is strictly dominant, so the sufficient condition for
    /// convergence does not hold anywhere.
    #[error("matrix will not converge: no row is strictly diagonally dominant")]
    NowhereStrictlyDominant,
}

// =================================================================================================
// Linear System
// =================================================================================================

/// Immutable description of a dense linear system `Ax = b`.
///
/// # Invariants
///
/// Guaranteed for every constructed value:
///
/// - `coefficients` is `n x n` with `n >= 1`
/// - `constants` and `initial_guess` have length `n`
/// - every entry is finite
/// - every diagonal coefficient is non-zero
/// - `tolerance` is positive and finite
///
/// # Example
///
/// ```rust
/// use jacobi_rs::system::LinearSystem;
///
/// // 4x + y = 1
/// // 2x + 3y = 2
/// let system = LinearSystem::from_rows(
///     vec![vec![4.0, 1.0], vec![2.0, 3.0]],
///     vec![1.0, 2.0],
///     vec![0.0, 0.0],
///     1e-4,
/// ).unwrap();
///
/// assert_eq!(system.unknowns(), 2);
/// assert_eq!(system.diagonal(1), 3.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LinearSystem {
    /// Coefficient matrix A
    coefficients: DMatrix<f64>,

    /// Right-hand-side constants b
    constants: DVector<f64>,

    /// Starting values for the unknowns
    initial_guess: DVector<f64>,

    /// Relative-error threshold every unknown must reach
    tolerance: f64,
}

impl LinearSystem {
    // ======================================= constructors =======================================

    /// Create a system from nalgebra containers.
    ///
    /// # Errors
    ///
    /// Returns a [`SystemError`] describing the first structural problem
    /// found; see the module documentation for the full validation policy.
    pub fn new(
        coefficients: DMatrix<f64>,
        constants: DVector<f64>,
        initial_guess: DVector<f64>,
        tolerance: f64,
    ) -> Result<Self, SystemError> {
        let n = coefficients.nrows();

        if coefficients.ncols() != n {
            return Err(SystemError::NonSquareMatrix {
                rows: n,
                cols: coefficients.ncols(),
            });
        }

        if n == 0 {
            return Err(SystemError::Empty);
        }

        if constants.len() != n {
            return Err(SystemError::LengthMismatch {
                name: "constants",
                len: constants.len(),
                expected: n,
            });
        }

        if initial_guess.len() != n {
            return Err(SystemError::LengthMismatch {
                name: "initial guess",
                len: initial_guess.len(),
                expected: n,
            });
        }

        if !(tolerance.is_finite() && tolerance > 0.0) {
            return Err(SystemError::InvalidTolerance(tolerance));
        }

        // Finiteness: a NaN or Inf anywhere poisons every later iterate.
        for i in 0..n {
            for j in 0..n {
                if !coefficients[(i, j)].is_finite() {
                    return Err(SystemError::NonFiniteCoefficient { row: i, col: j });
                }
            }
        }

        for (index, value) in constants.iter().enumerate() {
            if !value.is_finite() {
                return Err(SystemError::NonFiniteEntry {
                    name: "constants",
                    index,
                });
            }
        }

        for (index, value) in initial_guess.iter().enumerate() {
            if !value.is_finite() {
                return Err(SystemError::NonFiniteEntry {
                    name: "initial guess",
                    index,
                });
            }
        }

        // The update kernel divides by the diagonal on every iteration.
        for i in 0..n {
            if coefficients[(i, i)] == 0.0 {
                return Err(SystemError::SingularDiagonal { row: i });
            }
        }

        Ok(Self {
            coefficients,
            constants,
            initial_guess,
            tolerance,
        })
    }

    /// Create a system from row-major `Vec`s.
    ///
    /// Convenience constructor for tests and small hand-written systems;
    /// forwards to [`LinearSystem::new`] for validation.
    ///
    /// # Example
    ///
    /// ```rust
    /// use jacobi_rs::system::LinearSystem;
    ///
    /// let system = LinearSystem::from_rows(
    ///     vec![vec![10.0, 1.0], vec![1.0, 10.0]],
    ///     vec![11.0, 11.0],
    ///     vec![0.0, 0.0],
    ///     1e-6,
    /// ).unwrap();
    /// ```
    pub fn from_rows(
        rows: Vec<Vec<f64>>,
        constants: Vec<f64>,
        initial_guess: Vec<f64>,
        tolerance: f64,
    ) -> Result<Self, SystemError> {
        let n = rows.len();

        for row in &rows {
            if row.len() != n {
                return Err(SystemError::LengthMismatch {
                    name: "matrix row",
                    len: row.len(),
                    expected: n,
                });
            }
        }

        let flat: Vec<f64> = rows.into_iter().flatten().collect();

        Self::new(
            DMatrix::from_row_slice(n, n, &flat),
            DVector::from_vec(constants),
            DVector::from_vec(initial_guess),
            tolerance,
        )
    }

    // ========================================== Queries ==========================================

    /// Number of unknowns `n`.
    pub fn unknowns(&self) -> usize {
        self.constants.len()
    }

    /// Relative-error threshold every unknown must reach.
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Coefficient `a[i][j]`.
    #[inline]
    pub fn coefficient(&self, i: usize, j: usize) -> f64 {
        self.coefficients[(i, j)]
    }

    /// Diagonal coefficient `a[i][i]`, guaranteed non-zero.
    #[inline]
    pub fn diagonal(&self, i: usize) -> f64 {
        self.coefficients[(i, i)]
    }

    /// Constant `b[i]`.
    #[inline]
    pub fn constant(&self, i: usize) -> f64 {
        self.constants[i]
    }

    /// The full coefficient matrix.
    pub fn coefficients(&self) -> &DMatrix<f64> {
        &self.coefficients
    }

    /// The full constant vector.
    pub fn constants(&self) -> &DVector<f64> {
        &self.constants
    }

    /// The starting iterate.
    pub fn initial_guess(&self) -> &DVector<f64> {
        &self.initial_guess
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn diagonal_2x2() -> Result<LinearSystem, SystemError> {
        LinearSystem::from_rows(
            vec![vec![4.0, 1.0], vec![2.0, 3.0]],
            vec![1.0, 2.0],
            vec![0.0, 0.0],
            1e-3,
        )
    }

    // ====== Construction Tests ======

    #[test]
    fn test_valid_system() {
        let system = diagonal_2x2().unwrap();

        assert_eq!(system.unknowns(), 2);
        assert_eq!(system.tolerance(), 1e-3);
        assert_eq!(system.coefficient(0, 1), 1.0);
        assert_eq!(system.coefficient(1, 0), 2.0);
        assert_eq!(system.diagonal(0), 4.0);
        assert_eq!(system.constant(1), 2.0);
        assert_eq!(system.initial_guess().len(), 2);
    }

    #[test]
    fn test_empty_system_rejected() {
        let result = LinearSystem::from_rows(vec![], vec![], vec![], 1e-3);
        assert!(matches!(result, Err(SystemError::Empty)));
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let result = LinearSystem::from_rows(
            vec![vec![4.0, 1.0], vec![2.0]],
            vec![1.0, 2.0],
            vec![0.0, 0.0],
            1e-3,
        );
        assert!(matches!(
            result,
            Err(SystemError::LengthMismatch { name: "matrix row", .. })
        ));
    }

    #[test]
    fn test_non_square_matrix_rejected() {
        let result = LinearSystem::new(
            DMatrix::from_row_slice(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]),
            DVector::from_vec(vec![1.0, 2.0]),
            DVector::from_vec(vec![0.0, 0.0]),
            1e-3,
        );
        assert!(matches!(
            result,
            Err(SystemError::NonSquareMatrix { rows: 2, cols: 3 })
        ));
    }

    #[test]
    fn test_constants_length_mismatch_rejected() {
        let result = LinearSystem::from_rows(
            vec![vec![4.0, 1.0], vec![2.0, 3.0]],
            vec![1.0],
            vec![0.0, 0.0],
            1e-3,
        );
        assert!(matches!(
            result,
            Err(SystemError::LengthMismatch { name: "constants", len: 1, expected: 2 })
        ));
    }

    #[test]
    fn test_initial_guess_length_mismatch_rejected() {
        let result = LinearSystem::from_rows(
            vec![vec![4.0, 1.0], vec![2.0, 3.0]],
            vec![1.0, 2.0],
            vec![0.0],
            1e-3,
        );
        assert!(matches!(
            result,
            Err(SystemError::LengthMismatch { name: "initial guess", .. })
        ));
    }

    // ====== Tolerance Tests ======

    #[test]
    fn test_zero_tolerance_rejected() {
        let result = LinearSystem::from_rows(
            vec![vec![4.0]],
            vec![1.0],
            vec![0.0],
            0.0,
        );
        assert!(matches!(result, Err(SystemError::InvalidTolerance(_))));
    }

    #[test]
    fn test_negative_tolerance_rejected() {
        let result = LinearSystem::from_rows(
            vec![vec![4.0]],
            vec![1.0],
            vec![0.0],
            -1e-3,
        );
        assert!(matches!(result, Err(SystemError::InvalidTolerance(_))));
    }

    #[test]
    fn test_nan_tolerance_rejected() {
        let result = LinearSystem::from_rows(
            vec![vec![4.0]],
            vec![1.0],
            vec![0.0],
            f64::NAN,
        );
        assert!(matches!(result, Err(SystemError::InvalidTolerance(_))));
    }

    // ====== Finiteness Tests ======

    #[test]
    fn test_nan_coefficient_rejected() {
        let result = LinearSystem::from_rows(
            vec![vec![4.0, f64::NAN], vec![2.0, 3.0]],
            vec![1.0, 2.0],
            vec![0.0, 0.0],
            1e-3,
        );
        assert!(matches!(
            result,
            Err(SystemError::NonFiniteCoefficient { row: 0, col: 1 })
        ));
    }

    #[test]
    fn test_infinite_constant_rejected() {
        let result = LinearSystem::from_rows(
            vec![vec![4.0, 1.0], vec![2.0, 3.0]],
            vec![1.0, f64::INFINITY],
            vec![0.0, 0.0],
            1e-3,
        );
        assert!(matches!(
            result,
            Err(SystemError::NonFiniteEntry { name: "constants", index: 1 })
        ));
    }

    #[test]
    fn test_nan_initial_guess_rejected() {
        let result = LinearSystem::from_rows(
            vec![vec![4.0, 1.0], vec![2.0, 3.0]],
            vec![1.0, 2.0],
            vec![f64::NAN, 0.0],
            1e-3,
        );
        assert!(matches!(
            result,
            Err(SystemError::NonFiniteEntry { name: "initial guess", index: 0 })
        ));
    }

    // ====== Diagonal Tests ======

    #[test]
    fn test_zero_diagonal_rejected() {
        let result = LinearSystem::from_rows(
            vec![vec![4.0, 1.0], vec![2.0, 0.0]],
            vec![1.0, 2.0],
            vec![0.0, 0.0],
            1e-3,
        );
        assert!(matches!(result, Err(SystemError::SingularDiagonal { row: 1 })));
    }

    #[test]
    fn test_negative_diagonal_accepted() {
        // Dominance is a magnitude property; the sign of the diagonal is fine.
        let system = LinearSystem::from_rows(
            vec![vec![-4.0, 1.0], vec![2.0, -3.0]],
            vec![1.0, 2.0],
            vec![0.0, 0.0],
            1e-3,
        );
        assert!(system.is_ok());
    }

    #[test]
    fn test_error_message_names_the_row() {
        let error = LinearSystem::from_rows(
            vec![vec![0.0]],
            vec![1.0],
            vec![0.0],
            1e-3,
        )
        .unwrap_err();
        assert!(error.to_string().contains("(0,0)"));
    }
}
