//! Solution file export
//!
//! Writes the final iterate to a plain text file: one value per line, `n`
//! lines total, in unknown order, no header. This is the format downstream
//! tooling (and the classic `<n>.sol` convention) expects.
//!
//! # Quick Examples
//!
//! ## Minimal Export
//!
//! ```rust,ignore
//! use jacobi_rs::output::export::export_solution;
//!
//! let solution = vec![0.0909, 0.6364];
//! export_solution(&solution, "2.sol", None)?;
//! ```
//!
//! **Output** (`2.sol`):
//! ```text
//! 0.090909
//! 0.636364
//! ```
//!
//! ## With Metadata
//!
//! ```rust,ignore
//! use jacobi_rs::output::export::{export_solution, SolutionConfig, SolutionMetadata};
//!
//! let metadata = SolutionMetadata {
//!     solver_name: Some("Distributed Jacobi".to_string()),
//!     iterations: Some(24),
//!     tolerance: Some(1e-4),
//!     ..Default::default()
//! };
//!
//! let config = SolutionConfig::default().with_metadata(metadata);
//! export_solution(&solution, "2.sol", Some(&config))?;
//! ```
//!
//! **Output** (`2.sol`):
//! ```text
//! # Linear System Solution
//! # Generated: 2026-08-08T15:30:00Z
//! # Solver: Distributed Jacobi
//! # Iterations: 24
//! # Tolerance: 0.0001
//! #
//! 0.090909
//! 0.636364
//! ```

use std::error::Error;
use std::fs::File;
use std::io::Write;

// =============================================================================
// Configuration Structures
// =============================================================================

/// Configuration for solution export
///
/// # Fields
///
/// - `precision`: number of decimal places (default: 6)
/// - `include_metadata`: add `#` header comments with run info
/// - `metadata`: run metadata to include
#[derive(Clone)]
pub struct SolutionConfig {
    /// Number of decimal places for the values (default: 6)
    pub precision: usize,

    /// Include metadata header comments (default: false)
    pub include_metadata: bool,

    /// Metadata to include in the header
    pub metadata: Option<SolutionMetadata>,
}

impl Default for SolutionConfig {
    fn default() -> Self {
        Self {
            precision: 6,
            include_metadata: false,
            metadata: None,
        }
    }
}

impl SolutionConfig {
    /// Create config with high precision (12 decimal places)
    pub fn high_precision() -> Self {
        Self {
            precision: 12,
            ..Default::default()
        }
    }

    /// Builder pattern: set precision
    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Builder pattern: enable metadata
    pub fn with_metadata(mut self, metadata: SolutionMetadata) -> Self {
        self.include_metadata = true;
        self.metadata = Some(metadata);
        self
    }
}

/// Metadata for the `#` header comments
///
/// All fields are optional; only non-None fields appear in the header.
#[derive(Clone, Default)]
pub struct SolutionMetadata {
    /// Solver name (e.g. "Distributed Jacobi")
    pub solver_name: Option<String>,

    /// Number of iterations the run took
    pub iterations: Option<usize>,

    /// Convergence tolerance of the run
    pub tolerance: Option<f64>,

    /// Number of workers
    pub workers: Option<usize>,

    /// Additional custom parameters
    pub custom: Vec<(String, String)>,
}

impl SolutionMetadata {
    /// Create metadata from a finished run
    pub fn from_run(solver: &str, iterations: usize, tolerance: f64) -> Self {
        Self {
            solver_name: Some(solver.to_string()),
            iterations: Some(iterations),
            tolerance: Some(tolerance),
            ..Default::default()
        }
    }

    /// Add custom parameter
    pub fn add_custom(&mut self, key: String, value: String) {
        self.custom.push((key, value));
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Write metadata header comments to file
fn write_metadata_header(
    file: &mut File,
    metadata: &SolutionMetadata,
) -> Result<(), Box<dyn Error>> {
    writeln!(file, "# Linear System Solution")?;

    // Timestamp (current time)
    let now = chrono::Utc::now();
    writeln!(file, "# Generated: {}", now.to_rfc3339())?;

    if let Some(solver) = &metadata.solver_name {
        writeln!(file, "# Solver: {}", solver)?;
    }
    if let Some(iterations) = metadata.iterations {
        writeln!(file, "# Iterations: {}", iterations)?;
    }
    if let Some(tolerance) = metadata.tolerance {
        writeln!(file, "# Tolerance: {}", tolerance)?;
    }
    if let Some(workers) = metadata.workers {
        writeln!(file, "# Workers: {}", workers)?;
    }

    for (key, value) in &metadata.custom {
        writeln!(file, "# {}: {}", key, value)?;
    }

    // Separator
    writeln!(file, "#")?;

    Ok(())
}

// =============================================================================
// Export Functions
// =============================================================================

/// Export a solution vector to a text file.
///
/// Writes one value per line in unknown order. With the default
/// configuration the file has no header and exactly as many lines as there
/// are values.
///
/// # Arguments
///
/// * `values` - Solution values, in unknown order
/// * `output_path` - Output file path
/// * `config` - Optional configuration (uses default if None)
///
/// # Errors
///
/// - Empty data
/// - NaN or Inf values
/// - File creation errors
///
/// All validation runs before the file is created, so a failed export never
/// leaves a partial file behind.
///
/// # Example
///
/// ```rust,ignore
/// export_solution(report.solution.as_slice(), "10.sol", None)?;
/// ```
pub fn export_solution(
    values: &[f64],
    output_path: &str,
    configuration: Option<&SolutionConfig>,
) -> Result<(), Box<dyn Error>> {
    // ============================= Validation =============================

    if values.is_empty() {
        return Err("Empty data: the solution must contain at least one value".into());
    }

    if values.iter().any(|v| !v.is_finite()) {
        return Err("Invalid data: NaN or Inf detected in the solution".into());
    }

    // ============================= Configuration ==========================

    let binding = SolutionConfig::default();
    let configuration = configuration.unwrap_or(&binding);

    // ============================= Open File ==============================

    let mut file = File::create(output_path)?;

    // ============================= Write Metadata =========================

    if configuration.include_metadata {
        if let Some(metadata) = &configuration.metadata {
            write_metadata_header(&mut file, metadata)?;
        }
    }

    // ============================= Write Data =============================

    for value in values {
        writeln!(file, "{:.prec$}", value, prec = configuration.precision)?;
    }

    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
