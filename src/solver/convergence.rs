//! The per-iteration convergence verdict
//!
//! After every exchange the run must decide: iterate again, or stop? The
//! test is per unknown: the run converges only when *every* unknown's
//! relative change between the previous and candidate generations is within
//! the system tolerance.
//!
//! # Near-Zero Policy
//!
//! The relative change `|(candidate - previous) / candidate|` is undefined
//! when the candidate is zero. The underlying requirement is "detect
//! negligible change when the relative measure breaks down", so for
//! candidates within machine epsilon of zero the test falls back to the
//! absolute change `|candidate - previous|` compared against the same
//! tolerance. A solution component that genuinely is zero therefore
//! converges once its absolute drift is below tolerance, instead of
//! producing an Inf/NaN verdict.

use nalgebra::DVector;

/// Relative change of one unknown between successive iterates, with the
/// absolute fallback for candidates within machine epsilon of zero.
///
/// # Example
///
/// ```rust
/// use jacobi_rs::solver::relative_change;
///
/// assert!((relative_change(0.9, 1.0) - 0.1).abs() < 1e-12);
///
/// // candidate == 0: absolute change, no division
/// assert_eq!(relative_change(0.5, 0.0), 0.5);
/// ```
#[inline]
pub fn relative_change(previous: f64, candidate: f64) -> f64 {
    let change = (candidate - previous).abs();
    if candidate.abs() <= f64::EPSILON {
        change
    } else {
        change / candidate.abs()
    }
}

/// True when every unknown in `[lower, upper)` has settled to within
/// `tolerance`.
///
/// The range arguments keep per-partition evaluation expressible; the
/// shipped solver passes the full range on every worker, since each worker
/// holds both full generations after the exchange and all of them reach the
/// identical verdict.
pub fn converged(
    previous: &DVector<f64>,
    candidate: &DVector<f64>,
    lower: usize,
    upper: usize,
    tolerance: f64,
) -> bool {
    (lower..upper).all(|i| relative_change(previous[i], candidate[i]) <= tolerance)
}

// =================================================================================================
// Tests
// =================================================================================================
