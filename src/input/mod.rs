//! Input loading for linear systems
//!
//! Reads the whitespace-separated text format into a validated
//! [`LinearSystem`](crate::system::LinearSystem):
//!
//! ```text
//! n                      unknown count (integer)
//! tolerance              relative-error threshold (real)
//! x_0 ... x_{n-1}        initial guess for each unknown
//! row_0 (n reals) b_0    per row: n coefficients, then the constant
//! ...
//! row_{n-1} (n reals) b_{n-1}
//! ```
//!
//! Tokens may be separated by any whitespace, including newlines, so the
//! row layout above is a convention, not a requirement.
//!
//! # Failure Policy
//!
//! Loading is all-or-nothing: any missing, extra, or unparseable token is a
//! fatal [`LoadError`] naming the offending position, and the structural
//! validation of `LinearSystem` (square shape, finite entries, non-zero
//! diagonal, positive tolerance) runs on top. A run never starts from a
//! partially read system.

mod reader;

pub use reader::{load_system, parse_system, LoadError};
