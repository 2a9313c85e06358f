//! Command-line interface for planning Courier delivery runs.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod plan;

pub use error::CliError;

use plan::PlanArgs;

const ARG_MAP: &str = "map";
const ARG_DELIVERIES: &str = "deliveries";
const ARG_SEED: &str = "seed";
const ARG_MAX_ITERATIONS: &str = "max-iterations";
const ENV_MAP: &str = "COURIER_CMDS_PLAN_MAP";
const ENV_DELIVERIES: &str = "COURIER_CMDS_PLAN_DELIVERIES";

/// Run the Courier CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when argument parsing, configuration, loading,
/// planning or writing the plan fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Plan(args) => plan::run_plan(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "courier",
    about = "Plan turn-by-turn delivery runs over a street map",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Optimise the delivery order and route every leg from the depot and back.
    Plan(PlanArgs),
}

#[cfg(test)]
mod tests;
