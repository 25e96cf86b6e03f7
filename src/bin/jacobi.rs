//! jacobi command-line interface.
//!
//! Solve one system file and write the solution:
//! ```sh
//! jacobi system.txt                      # writes <n>.sol
//! jacobi system.txt -o solution.txt -w 4
//! jacobi system.txt --max-iterations 100000
//! ```

use clap::Parser;
use std::path::PathBuf;

use jacobi_rs::input::load_system;
use jacobi_rs::output::export::{export_solution, SolutionConfig, SolutionMetadata};
use jacobi_rs::solver::{JacobiSolver, Solver, SolverConfiguration};

#[derive(Parser)]
#[command(name = "jacobi")]
#[command(about = "Distributed Jacobi solver for dense linear systems")]
#[command(version)]
struct Cli {
    /// Path to the system file (n, tolerance, initial guess, rows).
    input: PathBuf,

    /// Output file for the solution (defaults to <n>.sol).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Number of worker threads; must evenly divide the unknown count.
    #[arg(short, long, default_value_t = 1)]
    workers: usize,

    /// Abort with an error after this many iterations instead of looping
    /// until convergence.
    #[arg(long)]
    max_iterations: Option<usize>,

    /// Skip the diagonal-dominance convergence check.
    #[arg(long)]
    skip_dominance_check: bool,

    /// Write a commented metadata header into the solution file.
    #[arg(long)]
    with_header: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    // Load
    let system = load_system(&cli.input)?;
    log::info!(
        "loaded {}: {} unknowns, tolerance {}",
        cli.input.display(),
        system.unknowns(),
        system.tolerance()
    );

    // Solve
    let mut config = SolverConfiguration::new(cli.workers);
    config.max_iterations = cli.max_iterations;
    config.check_dominance = !cli.skip_dominance_check;

    let solver = JacobiSolver::new();
    let report = solver.solve(&system, &config)?;

    // Write
    let output = cli
        .output
        .unwrap_or_else(|| PathBuf::from(format!("{}.sol", system.unknowns())));

    let export_config = if cli.with_header {
        let mut metadata =
            SolutionMetadata::from_run(solver.name(), report.iterations, system.tolerance());
        metadata.workers = Some(cli.workers);
        metadata.add_custom("input".to_string(), cli.input.display().to_string());

        Some(SolutionConfig::default().with_metadata(metadata))
    } else {
        None
    };

    export_solution(
        report.solution.as_slice(),
        &output.display().to_string(),
        export_config.as_ref(),
    )
    .map_err(|e| anyhow::anyhow!("cannot write {}: {}", output.display(), e))?;

    log::info!("solution written to {}", output.display());
    println!("total number of iterations: {}", report.iterations);

    Ok(())
}
