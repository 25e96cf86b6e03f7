//! Problem data and structural validation
//!
//! This module owns the immutable description of the linear system and the
//! checks that decide whether a run may start at all:
//!
//! - [`LinearSystem`]: coefficient matrix, constants, initial guess and
//!   convergence tolerance, validated eagerly at construction
//! - [`check_convergent`]: the diagonal-dominance sufficient condition for
//!   convergence of the fixed-point iteration
//!
//! # Design
//!
//! The system is constructed once, validated once, and then shared read-only
//! across all workers by reference. There is deliberately no way to mutate a
//! `LinearSystem` after construction: every invariant the solver relies on
//! (square shape, finite entries, non-zero diagonal) is established here and
//! holds for the lifetime of the value.

mod data;
mod guard;

pub use data::{LinearSystem, SystemError};
pub use guard::check_convergent;
