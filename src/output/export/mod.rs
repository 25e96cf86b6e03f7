//! Data export
//!
//! - [`export_solution`]: write a solution vector to a text file, one value
//!   per line
//! - [`SolutionConfig`] / [`SolutionMetadata`]: formatting and optional
//!   header comments

mod solution;

pub use solution::{export_solution, SolutionConfig, SolutionMetadata};
