//! CLI entrypoint for `scenario-forge`.

use clap::Parser;
use scenario_forge_cli::cli::Args;
use scenario_forge_cli::error::ScenarioForgeError;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), ScenarioForgeError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();
    scenario_forge_cli::run(&args, &mut std::io::stdout().lock())?;
    Ok(())
}
