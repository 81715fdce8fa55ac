use anyhow::Context;
use chess_core::Diagram;
use clap::Parser;
use etude_solver::render::render_report;
use etude_solver::{json_output, solve, Cli, OutputFormat, SolverConfig};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = SolverConfig::load(cli.config.as_deref()).context("Failed to load config")?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_filter(&config)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let text = std::fs::read_to_string(&cli.input)
        .with_context(|| format!("Failed to read {}", cli.input.display()))?;
    let diagram = Diagram::parse(&text)
        .with_context(|| format!("Invalid diagram in {}", cli.input.display()))?;

    let format = cli.format(&config);
    let num_solutions = cli.num_solutions(&config);
    tracing::info!("Solving {} from {}", cli.etude.title(), cli.input.display());

    let report =
        solve(cli.etude, &diagram, num_solutions).context("Failed to solve problem")?;

    let output = match format {
        OutputFormat::Text => render_report(&report).context("Failed to render solution")?,
        OutputFormat::Json => json_output::to_json(&report).context("Failed to write JSON")?,
    };
    println!("{}", output.trim_end());
    Ok(())
}
