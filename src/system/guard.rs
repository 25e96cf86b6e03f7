//! Diagonal-dominance convergence guard
//!
//! The Jacobi fixed-point iteration is guaranteed to converge when the
//! coefficient matrix is weakly diagonally dominant with at least one
//! strictly dominant row:
//!
//! ```text
//! |a[i][i]| >= sum(|a[i][j]|, j != i)   for every row i
//! |a[i][i]| >  sum(|a[i][j]|, j != i)   for at least one row
//! ```
//!
//! The check is a *sufficient* condition, not a necessary one: systems that
//! fail it may still converge. It is therefore advisory, and the solver
//! configuration lets callers skip it for systems known to converge by other
//! means.

use crate::system::{LinearSystem, SystemError};

/// Check the diagonal-dominance sufficient condition for convergence.
///
/// # Errors
///
/// - [`SystemError::RowNotDominant`] when any row's diagonal magnitude is
///   smaller than the sum of the row's off-diagonal magnitudes
/// - [`SystemError::NowhereStrictlyDominant`] when no row is strictly
///   dominant, so equality holds everywhere and convergence is not
///   guaranteed
///
/// # Example
///
/// ```rust
/// use jacobi_rs::system::{check_convergent, LinearSystem, SystemError};
///
/// let dominant = LinearSystem::from_rows(
///     vec![vec![4.0, 1.0], vec![2.0, 3.0]],
///     vec![1.0, 2.0],
///     vec![0.0, 0.0],
///     1e-3,
/// ).unwrap();
/// assert!(check_convergent(&dominant).is_ok());
///
/// let weak = LinearSystem::from_rows(
///     vec![vec![1.0, 2.0], vec![3.0, 1.0]],
///     vec![1.0, 2.0],
///     vec![0.0, 0.0],
///     1e-3,
/// ).unwrap();
/// assert!(matches!(
///     check_convergent(&weak),
///     Err(SystemError::RowNotDominant { row: 0, .. })
/// ));
/// ```
pub fn check_convergent(system: &LinearSystem) -> Result<(), SystemError> {
    let n = system.unknowns();
    let mut strictly_dominant_rows = 0;

    for i in 0..n {
        let diagonal = system.diagonal(i).abs();

        let mut off_diagonal = 0.0;
        for j in 0..n {
            if j != i {
                off_diagonal += system.coefficient(i, j).abs();
            }
        }

        if diagonal < off_diagonal {
            return Err(SystemError::RowNotDominant {
                row: i,
                diagonal,
                off_diagonal,
            });
        }

        if diagonal > off_diagonal {
            strictly_dominant_rows += 1;
        }
    }

    if strictly_dominant_rows == 0 {
        return Err(SystemError::NowhereStrictlyDominant);
    }

    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn system_with_matrix(rows: Vec<Vec<f64>>) -> LinearSystem {
        let n = rows.len();
        LinearSystem::from_rows(rows, vec![1.0; n], vec![0.0; n], 1e-3).unwrap()
    }

    #[test]
    fn test_strictly_dominant_matrix_accepted() {
        let system = system_with_matrix(vec![vec![4.0, 1.0], vec![2.0, 3.0]]);
        assert!(check_convergent(&system).is_ok());
    }

    #[test]
    fn test_weak_row_rejected() {
        // Both rows have |diagonal| < off-diagonal sum
        let system = system_with_matrix(vec![vec![1.0, 2.0], vec![3.0, 1.0]]);

        let error = check_convergent(&system).unwrap_err();
        assert!(matches!(error, SystemError::RowNotDominant { row: 0, .. }));
    }

    #[test]
    fn test_everywhere_equal_rejected() {
        // Weakly dominant in every row, strictly dominant in none
        let system = system_with_matrix(vec![vec![2.0, 2.0], vec![2.0, 2.0]]);

        let error = check_convergent(&system).unwrap_err();
        assert!(matches!(error, SystemError::NowhereStrictlyDominant));
    }

    #[test]
    fn test_one_strict_row_is_enough() {
        // Row 0 weakly dominant (equality), row 1 strictly dominant
        let system = system_with_matrix(vec![vec![2.0, 2.0], vec![1.0, 5.0]]);
        assert!(check_convergent(&system).is_ok());
    }

    #[test]
    fn test_dominance_uses_magnitudes() {
        // Negative entries: |-4| > |1|, |-3| > |2|
        let system = system_with_matrix(vec![vec![-4.0, 1.0], vec![2.0, -3.0]]);
        assert!(check_convergent(&system).is_ok());
    }

    #[test]
    fn test_single_unknown_is_strictly_dominant() {
        // Off-diagonal sum is empty, so any non-zero diagonal is strict
        let system = system_with_matrix(vec![vec![0.5]]);
        assert!(check_convergent(&system).is_ok());
    }

    #[test]
    fn test_failing_row_is_reported() {
        let system = system_with_matrix(vec![
            vec![10.0, 1.0, 1.0],
            vec![1.0, 10.0, 1.0],
            vec![6.0, 6.0, 2.0],
        ]);

        match check_convergent(&system) {
            Err(SystemError::RowNotDominant { row, diagonal, off_diagonal }) => {
                assert_eq!(row, 2);
                assert_eq!(diagonal, 2.0);
                assert_eq!(off_diagonal, 12.0);
            }
            other => panic!("expected RowNotDominant, got {:?}", other),
        }
    }
}
