//! Integration tests: input loader + solver + output export
//!
//! These tests drive the full file-to-file pipeline the `jacobi` binary
//! wraps: read a system file, solve it, write the solution.

use std::fs;
use std::io::Write;
use tempfile::{tempdir, NamedTempFile};

use jacobi_rs::input::{load_system, LoadError};
use jacobi_rs::output::export::export_solution;
use jacobi_rs::solver::{JacobiSolver, Solver, SolverConfiguration};

mod common;
use common::{assert_iterates_close, reference_jacobi};

/// The canonical 2x2 fixture, in file form.
const TWO_BY_TWO_FILE: &str = "\
2
0.0001
0 0
4 1 1
2 3 2
";

fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

// =================================================================================================
// Pipeline Tests
// =================================================================================================

#[test]
fn test_file_to_solution_pipeline() {
    // Load
    let input = write_temp(TWO_BY_TWO_FILE);
    let system = load_system(input.path()).unwrap();

    assert_eq!(system.unknowns(), 2);
    assert_eq!(system.tolerance(), 0.0001);

    // Solve
    let report = JacobiSolver::new()
        .solve(&system, &SolverConfiguration::new(2))
        .unwrap();

    assert!((report.solution[0] - 0.0909).abs() < 1e-3);
    assert!((report.solution[1] - 0.6364).abs() < 1e-3);

    // Write
    let dir = tempdir().unwrap();
    let output = dir.path().join("2.sol");
    export_solution(report.solution.as_slice(), output.to_str().unwrap(), None).unwrap();

    // The output has exactly n lines, each a parseable real, in order
    let contents = fs::read_to_string(&output).unwrap();
    let values: Vec<f64> = contents
        .lines()
        .map(|line| line.parse().expect("every line parses as a real"))
        .collect();

    assert_eq!(values.len(), system.unknowns());
    assert!((values[0] - 0.0909).abs() < 1e-3);
    assert!((values[1] - 0.6364).abs() < 1e-3);
}

#[test]
fn test_loaded_system_matches_reference_solution() {
    let input = write_temp(TWO_BY_TWO_FILE);
    let system = load_system(input.path()).unwrap();

    let (expected_solution, expected_iterations) = reference_jacobi(&system);

    let report = JacobiSolver::new()
        .solve(&system, &SolverConfiguration::new(1))
        .unwrap();

    assert_eq!(report.iterations, expected_iterations);
    assert_iterates_close(
        &report.solution,
        &expected_solution,
        1e-12,
        "pipeline solution",
    );
}

#[test]
fn test_larger_file_with_multiple_workers() {
    // 4x4, strictly dominant, solution of all twos:
    // b[i] = 2 * (row sum)
    let mut contents = String::from("4\n1e-8\n0 0 0 0\n");
    let rows = [
        [12.0, 1.0, 2.0, 1.0],
        [1.0, 14.0, 1.0, 3.0],
        [2.0, 1.0, 11.0, 1.0],
        [1.0, 2.0, 1.0, 10.0],
    ];
    for row in &rows {
        let b: f64 = row.iter().sum::<f64>() * 2.0;
        for value in row {
            contents.push_str(&format!("{} ", value));
        }
        contents.push_str(&format!("{}\n", b));
    }

    let input = write_temp(&contents);
    let system = load_system(input.path()).unwrap();

    for workers in [1, 2, 4] {
        let report = JacobiSolver::new()
            .solve(&system, &SolverConfiguration::new(workers))
            .unwrap();

        for value in report.solution.iter() {
            assert!((value - 2.0).abs() < 1e-6);
        }
    }
}

// =================================================================================================
// Failure Tests
// =================================================================================================

#[test]
fn test_malformed_file_aborts_before_solving() {
    let input = write_temp("2 0.001 0 0 4 banana 1 2 3 2");
    let error = load_system(input.path()).unwrap_err();

    assert!(matches!(error, LoadError::InvalidToken { .. }));
}

#[test]
fn test_truncated_file_aborts_before_solving() {
    let input = write_temp("3 0.001 0 0 0 1 2");
    let error = load_system(input.path()).unwrap_err();

    assert!(matches!(error, LoadError::UnexpectedEnd { .. }));
}

#[test]
fn test_zero_diagonal_file_is_rejected_at_load() {
    // Structurally complete, numerically unusable: a[1][1] == 0
    let input = write_temp("2 0.001 0 0 4 1 1 2 0 2");
    let error = load_system(input.path()).unwrap_err();

    assert!(matches!(error, LoadError::Invalid(_)));
}

#[test]
fn test_failed_export_leaves_no_file() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("out.sol");

    let result = export_solution(&[f64::NAN], output.to_str().unwrap(), None);

    assert!(result.is_err());
    assert!(!output.exists());
}
