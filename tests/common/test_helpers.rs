//! Helper functions and fixtures for integration tests

use jacobi_rs::system::LinearSystem;
use nalgebra::DVector;

/// The canonical small fixture:
///
/// ```text
/// 4x +  y = 1
/// 2x + 3y = 2
/// ```
///
/// Exact solution (1/11, 7/11) ≈ (0.0909, 0.6364), zero initial guess.
pub fn two_by_two(tolerance: f64) -> LinearSystem {
    LinearSystem::from_rows(
        vec![vec![4.0, 1.0], vec![2.0, 3.0]],
        vec![1.0, 2.0],
        vec![0.0, 0.0],
        tolerance,
    )
    .unwrap()
}

/// A strictly diagonally dominant `n x n` system whose solution is all
/// ones: off-diagonal entries vary deterministically, the diagonal outweighs
/// each row, and every constant is its row's sum.
pub fn dominant_system(n: usize, tolerance: f64) -> LinearSystem {
    let mut rows = Vec::with_capacity(n);
    for i in 0..n {
        let mut row = Vec::with_capacity(n);
        for j in 0..n {
            if i == j {
                row.push(2.0 * n as f64);
            } else {
                // small deterministic variation so the matrix is not constant
                row.push(1.0 + ((i + j) % 3) as f64 * 0.5);
            }
        }
        rows.push(row);
    }

    let constants: Vec<f64> = rows.iter().map(|row| row.iter().sum::<f64>()).collect();

    LinearSystem::from_rows(rows, constants, vec![0.0; n], tolerance).unwrap()
}

/// Sequential fixed-point reference: plain Jacobi sweeps with the same
/// convergence rule the solver uses, written independently of the solver's
/// kernels so iteration counts can be cross-checked against it.
pub fn reference_jacobi(system: &LinearSystem) -> (DVector<f64>, usize) {
    let n = system.unknowns();
    let tolerance = system.tolerance();

    let sweep = |previous: &DVector<f64>| -> DVector<f64> {
        let mut next = DVector::zeros(n);
        for i in 0..n {
            let mut sum = 0.0;
            for j in 0..n {
                if j != i {
                    sum += system.coefficient(i, j) * previous[j];
                }
            }
            next[i] = (system.constant(i) - sum) / system.coefficient(i, i);
        }
        next
    };

    let settled = |previous: &DVector<f64>, candidate: &DVector<f64>| -> bool {
        (0..n).all(|i| {
            let change = (candidate[i] - previous[i]).abs();
            let measure = if candidate[i].abs() <= f64::EPSILON {
                change
            } else {
                change / candidate[i].abs()
            };
            measure <= tolerance
        })
    };

    let mut previous = system.initial_guess().clone();
    let mut candidate = sweep(&previous);
    let mut iterations = 1;

    while !settled(&previous, &candidate) {
        previous = candidate;
        candidate = sweep(&previous);
        iterations += 1;
    }

    (candidate, iterations)
}

/// Assert that two iterates agree element-wise within `tolerance`.
pub fn assert_iterates_close(
    actual: &DVector<f64>,
    expected: &DVector<f64>,
    tolerance: f64,
    message: &str,
) {
    assert_eq!(actual.len(), expected.len(), "{}: dimension mismatch", message);

    for (i, (&a, &e)) in actual.iter().zip(expected.iter()).enumerate() {
        let diff = (a - e).abs();
        assert!(
            diff < tolerance,
            "{}: element {} differs by {} (tolerance {})",
            message,
            i,
            diff,
            tolerance
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dominant_system_is_dominant() {
        let system = dominant_system(6, 1e-6);
        assert!(jacobi_rs::system::check_convergent(&system).is_ok());
    }

    #[test]
    fn test_reference_jacobi_solves_the_canonical_system() {
        let (solution, iterations) = reference_jacobi(&two_by_two(1e-4));

        assert!((solution[0] - 1.0 / 11.0).abs() < 1e-3);
        assert!((solution[1] - 7.0 / 11.0).abs() < 1e-3);
        assert!(iterations > 1);
    }
}
