use std::process::ExitCode;

use anyhow::{Context, ensure};
use clap::Parser;
use matrix_graph::MatrixGraph;
use tracing::{debug, info};

use crate::scenario::Scenario;

mod report;
mod scenario;

/// Exercise the adjacency-matrix graph and report whether every check passed.
#[derive(Parser)]
struct Cli {
    /// Number of vertices in the scenario graph.
    #[arg(short = 'n', long, default_value_t = 18)]
    vertices: usize,

    /// Run the scenario on a directed graph.
    #[arg(short, long)]
    directed: bool,

    /// Print the report as JSON.
    #[arg(short, long)]
    json: bool,

    /// Print the adjacency matrix before it is cleared.
    #[arg(long)]
    dump: bool,
}

fn init_tracing() -> anyhow::Result<()> {
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(tracing_subscriber::filter::LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to install tracing subscriber")?;
    tracing_log::LogTracer::init().context("failed to forward log records")?;

    Ok(())
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing()?;

    ensure!(
        cli.vertices >= 2,
        "the scenario needs at least 2 vertices, got {}",
        cli.vertices
    );

    info!(
        "Checking {} graph with {} vertices",
        if cli.directed { "directed" } else { "undirected" },
        cli.vertices
    );

    let scenario = Scenario::new(cli.directed, cli.vertices);
    let mut graph = MatrixGraph::new(cli.directed);
    let mut report = scenario.run(&mut graph);

    if cli.dump {
        print!("{}", graph);
    }

    scenario.check_clear(&mut graph, &mut report);
    debug!("{} checks run", report.checks);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("All tests passed: {}", report.passed);
    }

    Ok(if report.passed {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
