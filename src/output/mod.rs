//! Output module for solver results
//!
//! # Architecture
//!
//! ```text
//! output/
//! ├── mod.rs              ← This file
//! └── export/             ← Data export
//!     ├── mod.rs
//!     └── solution.rs
//! ```
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use jacobi_rs::output::export::export_solution;
//!
//! // One value per line, unknown order, no header
//! export_solution(report.solution.as_slice(), "10.sol", None)?;
//! ```
//!
//! # Design Philosophy
//!
//! The export functions accept simple `&[f64]` slices for maximum
//! flexibility, validate everything BEFORE creating the output file (a
//! failed run never leaves a partial file behind), and write plain text a
//! human or a follow-up tool can consume directly.

pub mod export;
