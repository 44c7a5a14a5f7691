//! Command-line entry point for the reconfiguration certificate validator.
//!
//! Reads the three input files, runs the sequence validator, and prints
//! the classified outcome. Success outcomes (codes 00-02) go to stdout,
//! validation failures (codes 10-13) to stderr; both exit with status 0.
//! Only ingestion failures exit nonzero.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use recon_validate::{validate, Report, DUPLICATE_WARNING};

/// Validate a claimed token-sliding reconfiguration sequence.
#[derive(Parser)]
#[command(name = "recon-check", version)]
struct Cli {
    /// Input graph in DIMACS-like format (`c`/`p`/`e` lines)
    graph_file: PathBuf,
    /// Declared start and goal independent sets (`s`/`t` lines)
    start_goal_file: PathBuf,
    /// Claimed reconfiguration sequence (`a` lines)
    answer_file: PathBuf,
}

/// Print a report: the duplicate warning (if latched) goes to `out` before
/// the outcome line, then the outcome line goes to `out` for successes and
/// `err` for validation failures.
fn write_report(report: &Report, out: &mut impl Write, err: &mut impl Write) -> io::Result<()> {
    if report.duplicate_state {
        writeln!(out, "{}", DUPLICATE_WARNING)?;
    }
    if report.is_success() {
        writeln!(out, "{}", report.message())?;
    } else {
        writeln!(err, "{}", report.message())?;
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let graph = recon_parser::read_graph_file(&cli.graph_file)
        .with_context(|| format!("reading graph file {}", cli.graph_file.display()))?;
    debug!(
        num_vertices = graph.num_vertices(),
        num_edges = graph.edges().len(),
        "graph loaded"
    );

    let endpoints = recon_parser::read_endpoints_file(&cli.start_goal_file)
        .with_context(|| format!("reading start/goal file {}", cli.start_goal_file.display()))?;
    debug!(
        start_size = endpoints.start.len(),
        goal_size = endpoints.goal.len(),
        "endpoints loaded"
    );

    let certificate = recon_parser::read_answer_file(&cli.answer_file)
        .with_context(|| format!("reading answer file {}", cli.answer_file.display()))?;

    let report = validate(&graph, &endpoints, &certificate);
    write_report(&report, &mut io::stdout().lock(), &mut io::stderr().lock())?;

    Ok(())
}
