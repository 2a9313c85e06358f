//! Plan command implementation for the Courier CLI.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use courier_data::{DeliveryManifest, StreetMap};
use courier_optimizer::{AnnealingConfig, AnnealingOptimizer};
use courier_planner::{DeliveryPlan, DeliveryPlanner};
use courier_router::AStarRouter;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_DELIVERIES, ARG_MAP, ARG_MAX_ITERATIONS, ARG_SEED, CliError, ENV_DELIVERIES, ENV_MAP,
};

/// CLI arguments for the `plan` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Plan a delivery run. The street map lists each street by \
                 name followed by its segment count and one line per \
                 segment; the deliveries file starts with the depot \
                 coordinate and lists one delivery per line. Paths can come \
                 from CLI flags, configuration files, or environment \
                 variables.",
    about = "Plan a delivery run from a street map and a delivery list"
)]
#[ortho_config(prefix = "COURIER")]
pub(crate) struct PlanArgs {
    /// Path to the street map file.
    #[arg(long = ARG_MAP, value_name = "path")]
    #[serde(default)]
    pub(crate) map: Option<Utf8PathBuf>,
    /// Path to the deliveries file.
    #[arg(long = ARG_DELIVERIES, value_name = "path")]
    #[serde(default)]
    pub(crate) deliveries: Option<Utf8PathBuf>,
    /// Seed for the order optimiser (defaults to 0).
    #[arg(long = ARG_SEED, value_name = "u64")]
    #[serde(default)]
    pub(crate) seed: Option<u64>,
    /// Upper bound on annealing iterations.
    #[arg(long = ARG_MAX_ITERATIONS, value_name = "n")]
    #[serde(default)]
    pub(crate) max_iterations: Option<usize>,
}

impl PlanArgs {
    pub(crate) fn into_config(self) -> Result<PlanConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        PlanConfig::try_from(merged)
    }
}

/// Resolved `plan` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PlanConfig {
    /// Path to the street map.
    pub(crate) map: Utf8PathBuf,
    /// Path to the deliveries file.
    pub(crate) deliveries: Utf8PathBuf,
    /// Optimiser seed.
    pub(crate) seed: u64,
    /// Optional iteration cap for the optimiser.
    pub(crate) max_iterations: Option<usize>,
}

impl PlanConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.map, ARG_MAP)?;
        Self::require_existing(&self.deliveries, ARG_DELIVERIES)?;
        Ok(())
    }

    pub(crate) fn annealing(&self) -> AnnealingConfig {
        AnnealingConfig {
            seed: self.seed,
            max_iterations: self.max_iterations,
            ..AnnealingConfig::default()
        }
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match courier_fs::file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

impl TryFrom<PlanArgs> for PlanConfig {
    type Error = CliError;

    fn try_from(args: PlanArgs) -> Result<Self, Self::Error> {
        let map = args.map.ok_or(CliError::MissingArgument {
            field: ARG_MAP,
            env: ENV_MAP,
        })?;
        let deliveries = args.deliveries.ok_or(CliError::MissingArgument {
            field: ARG_DELIVERIES,
            env: ENV_DELIVERIES,
        })?;
        Ok(Self {
            map,
            deliveries,
            seed: args.seed.unwrap_or_default(),
            max_iterations: args.max_iterations,
        })
    }
}

pub(crate) fn run_plan(args: PlanArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_plan_with(args, &mut stdout)
}

pub(crate) fn run_plan_with(args: PlanArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    let plan = execute_plan(&config)?;
    write_plan(writer, &plan)
}

pub(crate) fn execute_plan(config: &PlanConfig) -> Result<DeliveryPlan, CliError> {
    let map = StreetMap::load(&config.map)?;
    let manifest = DeliveryManifest::load(&config.deliveries)?;
    let optimizer = AnnealingOptimizer::with_config(config.annealing())?;
    let mut planner = DeliveryPlanner::new(AStarRouter::new(map), optimizer);
    Ok(planner.plan(&manifest.depot, &manifest.deliveries)?)
}

fn write_plan(writer: &mut dyn Write, plan: &DeliveryPlan) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(plan).map_err(CliError::SerialisePlan)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WritePlanOutput)?;
    writer.write_all(b"\n").map_err(CliError::WritePlanOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<PlanConfig, CliError> {
    let merged = PlanArgs::merge_from_layers(layers).map_err(CliError::from)?;
    PlanConfig::try_from(merged)
}
